use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use crate::netw::packet::NetworkPacket;
use crate::Result;

/// A low level interface for handing packets to the link layer.
///
/// A link carries a single transmission at a time and reports the end of each
/// one with `LinkControl::TxEnd`.
pub trait Link<P> {
    /// Starts transmitting a packet. The packet's `link_info` names the next
    /// hop.
    fn send(&mut self, packet: NetworkPacket<P>) -> Result<()>;
}

/// Control notifications raised by the link layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkControl {
    /// The in flight packet finished transmitting.
    TxEnd,
    /// The link dropped a packet.
    PacketDropped,
    /// Any other notification kind.
    Other(u32),
}

impl Display for LinkControl {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            LinkControl::TxEnd => write!(f, "TX_END"),
            LinkControl::PacketDropped => write!(f, "PACKET_DROPPED"),
            LinkControl::Other(kind) => write!(f, "kind {}", kind),
        }
    }
}
