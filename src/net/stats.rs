//! 传输统计
//!
//! 按送达的数据包累计时延与吞吐统计信息。

use super::host_packet::HostPacket;
use super::packet::NetworkPacket;
use crate::sim::SimTime;
use tracing::{debug, info};

/// 主机间传输统计信息
#[derive(Debug, Default)]
pub struct TransitStats {
    pub delivered_pkts: u64,
    pub delivered_bytes: u64,
    /// 已送达数据包的传输时延之和（秒）
    pub total_delay_secs: f64,
}

impl TransitStats {
    /// 数据包送达目的地时的统计处理。数据包在记录后即被丢弃。
    #[tracing::instrument(skip(self, pkt), fields(size_bytes = pkt.size(), src = ?pkt.source(), dst = ?pkt.destination()))]
    pub fn record_delivery(&mut self, pkt: HostPacket) {
        info!("✅ 数据包送达目的地");

        let delay = pkt.receive_time().0 - pkt.send_time().0;

        self.delivered_pkts += 1;
        self.delivered_bytes += pkt.size();
        self.total_delay_secs += delay;

        debug!(
            delay,
            delivered_pkts = self.delivered_pkts,
            delivered_bytes = self.delivered_bytes,
            "更新统计信息"
        );
    }

    /// 平均传输时延；尚无送达记录时返回 None。
    pub fn mean_delay(&self) -> Option<SimTime> {
        if self.delivered_pkts == 0 {
            return None;
        }
        Some(SimTime(self.total_delay_secs / self.delivered_pkts as f64))
    }

    /// 给定统计区间长度，计算平均吞吐（bps）。
    pub fn throughput_bps(&self, elapsed: SimTime) -> f64 {
        if elapsed.0 <= 0.0 {
            return 0.0;
        }
        (self.delivered_bytes as f64) * 8.0 / elapsed.0
    }
}
