//! Two-endpoint packet capability shared by all packet variants.

use crate::sim::SimTime;

/// Capability contract for one transit between two endpoints.
///
/// Implemented by the closed set of packet variants (`HostPacket` between
/// hosts, `VmPacket` between VMs). Routing and delivery collaborators consume
/// packets only through this surface; endpoints are opaque identities used as
/// routing keys.
pub trait NetworkPacket<E: Copy> {
    /// Packet size in bytes, unit-consistent with link bandwidth accounting.
    fn size(&self) -> u64;

    /// Endpoint currently designated as sender.
    fn source(&self) -> E;

    /// Replace the sender endpoint (reassigned per hop by the engine).
    fn set_source(&mut self, endpoint: E);

    /// Endpoint designated as receiver; `None` until routing assigns one.
    fn destination(&self) -> Option<E>;

    fn set_destination(&mut self, endpoint: E);

    /// Time the packet begins transit.
    fn send_time(&self) -> SimTime;

    fn set_send_time(&mut self, t: SimTime);

    /// Time the packet is considered fully received; zero until delivered.
    fn receive_time(&self) -> SimTime;

    fn set_receive_time(&mut self, t: SimTime);
}
