//! 网络模拟模块
//!
//! 此模块包含主机间传输层的核心组件，如端点标识、数据包、
//! 主机注册表和传输统计。

// 子模块声明
mod id;
mod packet;
mod vm_packet;
mod host_packet;
mod host;
mod stats;
mod transit_log;

// 重新导出公共接口
pub use id::{HostId, VmId};
pub use packet::NetworkPacket;
pub use vm_packet::VmPacket;
pub use host_packet::HostPacket;
pub use host::{Host, HostRegistry, UnknownHost};
pub use stats::TransitStats;
pub use transit_log::{TransitLog, TransitRecord};
