use crate::net::{HostId, HostPacket, NetworkPacket, TransitLog, TransitRecord, VmId, VmPacket};
use crate::sim::SimTime;

fn unrouted_packet() -> HostPacket {
    let vm_pkt = VmPacket::new(VmId(3), VmId(4), 1500, SimTime(2.0));
    HostPacket::new(HostId(1), vm_pkt)
}

#[test]
fn snapshot_captures_packet_state() {
    let mut pkt = unrouted_packet();
    pkt.set_destination(HostId(2));
    pkt.set_receive_time(SimTime(3.25));

    let rec = TransitRecord::snapshot(&pkt);
    assert_eq!(rec.src, 1);
    assert_eq!(rec.dst, Some(2));
    assert_eq!(rec.size_bytes, 1500);
    assert_eq!(rec.sender_vm, 3);
    assert_eq!(rec.receiver_vm, 4);
    assert_eq!(rec.send_time, 2.0);
    assert_eq!(rec.receive_time, 3.25);
}

#[test]
fn unrouted_snapshot_omits_destination_in_json() {
    let mut log = TransitLog::default();
    log.record(&unrouted_packet());

    let json = log.to_json().expect("serialize records");
    assert!(!json.contains("\"dst\""));
    assert!(json.contains("\"src\":1"));
}

#[test]
fn records_round_trip_through_json() {
    let mut pkt = unrouted_packet();
    pkt.set_destination(HostId(7));

    let mut log = TransitLog::default();
    log.record(&pkt);

    let json = log.to_json().expect("serialize records");
    let parsed: Vec<TransitRecord> = serde_json::from_str(&json).expect("parse records");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].dst, Some(7));
    assert_eq!(parsed[0].size_bytes, 1500);
}
