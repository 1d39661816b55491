//! 虚拟机级数据包
//!
//! 定义两个虚拟机之间传递的逻辑消息。

use super::id::VmId;
use super::packet::NetworkPacket;
use crate::sim::SimTime;

/// 虚拟机级数据包：两个虚拟机之间传递的逻辑消息。
///
/// 与主机间数据包不同，收发双方在构造时即已确定。
#[derive(Debug, Clone, PartialEq)]
pub struct VmPacket {
    sender: VmId,
    receiver: VmId,
    size_bytes: u64,
    send_time: SimTime,
    receive_time: SimTime,
}

impl VmPacket {
    /// 创建新的虚拟机级数据包
    pub fn new(sender: VmId, receiver: VmId, size_bytes: u64, send_time: SimTime) -> Self {
        Self {
            sender,
            receiver,
            size_bytes,
            send_time,
            receive_time: SimTime::ZERO,
        }
    }

    /// 获取发送方虚拟机
    pub fn sender(&self) -> VmId {
        self.sender
    }

    /// 获取接收方虚拟机
    pub fn receiver(&self) -> VmId {
        self.receiver
    }
}

impl NetworkPacket<VmId> for VmPacket {
    fn size(&self) -> u64 {
        self.size_bytes
    }

    fn source(&self) -> VmId {
        self.sender
    }

    fn set_source(&mut self, endpoint: VmId) {
        self.sender = endpoint;
    }

    fn destination(&self) -> Option<VmId> {
        Some(self.receiver)
    }

    fn set_destination(&mut self, endpoint: VmId) {
        self.receiver = endpoint;
    }

    fn send_time(&self) -> SimTime {
        self.send_time
    }

    fn set_send_time(&mut self, t: SimTime) {
        self.send_time = t;
    }

    fn receive_time(&self) -> SimTime {
        self.receive_time
    }

    fn set_receive_time(&mut self, t: SimTime) {
        self.receive_time = t;
    }
}
