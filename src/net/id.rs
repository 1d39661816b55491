//! 标识符类型
//!
//! 定义主机和虚拟机的唯一标识符。

/// 主机标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostId(pub usize);

/// 虚拟机标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VmId(pub usize);
