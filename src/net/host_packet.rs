//! 主机间数据包
//!
//! 定义在两台主机之间传输逻辑消息的网络层数据包。

use super::id::HostId;
use super::packet::NetworkPacket;
use super::vm_packet::VmPacket;
use crate::sim::SimTime;

/// 主机间数据包：包装一个虚拟机级数据包，并记录主机级的
/// 收发端点与收发时间。
///
/// 本类型是被动记录：路由与投递逻辑在外部推进其状态
/// （未路由、已路由、已送达），字段本身不做校验。
#[derive(Debug, Clone, PartialEq)]
pub struct HostPacket {
    /// 被包装的逻辑消息，构造后不再替换。
    payload: VmPacket,
    source: HostId,
    destination: Option<HostId>,
    send_time: SimTime,
    receive_time: SimTime,
}

impl HostPacket {
    /// 创建一个待发送的主机间数据包。
    ///
    /// 发送时间取自 payload 的发送时间；目的主机与接收时间
    /// 由路由/投递阶段填写。
    pub fn new(sender: HostId, payload: VmPacket) -> Self {
        let send_time = payload.send_time();
        Self {
            payload,
            source: sender,
            destination: None,
            send_time,
            receive_time: SimTime::ZERO,
        }
    }

    /// 获取被包装的逻辑消息
    pub fn payload(&self) -> &VmPacket {
        &self.payload
    }
}

impl NetworkPacket<HostId> for HostPacket {
    // 大小始终委托给 payload，避免两者产生分歧。
    fn size(&self) -> u64 {
        self.payload.size()
    }

    fn source(&self) -> HostId {
        self.source
    }

    fn set_source(&mut self, endpoint: HostId) {
        self.source = endpoint;
    }

    fn destination(&self) -> Option<HostId> {
        self.destination
    }

    fn set_destination(&mut self, endpoint: HostId) {
        self.destination = Some(endpoint);
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
