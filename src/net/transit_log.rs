//! 传输记录（用于离线分析）
//!
//! 设计目标：
//! - **结构化**：用 JSON 记录而不是解析文本日志
//! - **轻量**：存内存，仿真结束统一导出

use serde::{Deserialize, Serialize};

use super::host_packet::HostPacket;
use super::packet::NetworkPacket;

/// 一次主机间传输的快照记录（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitRecord {
    pub src: usize,
    /// 未路由时缺省
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst: Option<usize>,
    pub size_bytes: u64,
    pub sender_vm: usize,
    pub receiver_vm: usize,
    /// 仿真时间（秒，和 `SimTime.0` 同口径）
    pub send_time: f64,
    pub receive_time: f64,
}

impl TransitRecord {
    /// 对数据包当前状态做一次快照。
    pub fn snapshot(pkt: &HostPacket) -> Self {
        Self {
            src: pkt.source().0,
            dst: pkt.destination().map(|h| h.0),
            size_bytes: pkt.size(),
            sender_vm: pkt.payload().sender().0,
            receiver_vm: pkt.payload().receiver().0,
            send_time: pkt.send_time().0,
            receive_time: pkt.receive_time().0,
        }
    }
}

/// 记录收集器（存内存，仿真结束写 JSON）
#[derive(Debug, Default)]
pub struct TransitLog {
    pub records: Vec<TransitRecord>,
}

impl TransitLog {
    /// 记录一个数据包的当前状态
    pub fn record(&mut self, pkt: &HostPacket) {
        self.records.push(TransitRecord::snapshot(pkt));
    }

    /// 导出为 JSON 字符串
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.records)
    }
}
