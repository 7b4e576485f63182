use crate::netw::addr::{
    LinkAddress,
    NetworkAddress,
};

/// Link layer directive attached to every outgoing network packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkControlInfo {
    /// Next hop on the link.
    pub dst_addr: LinkAddress,
}

/// A network layer packet carrying an opaque upper layer payload.
///
/// The packet owns its payload; it moves from the encapsulator to the
/// outbound queue to the link and is never shared along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkPacket<P> {
    pub kind: u32,
    pub name: String,
    /// Header length in bits.
    pub header_length: usize,
    pub src_addr: NetworkAddress,
    pub dst_addr: NetworkAddress,
    pub payload: P,
    pub link_info: LinkControlInfo,
}

impl<P> NetworkPacket<P> {
    /// Removes the network header, returning the payload.
    pub fn decapsulate(self) -> P {
        self.payload
    }
}

/// Where an upper layer wants its payload to go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    /// No destination was given.
    Absent,
    /// Every node.
    Broadcast,
    /// A caller defined negative code, translated before use.
    Special(i32),
    /// A specific node.
    Explicit(NetworkAddress),
}

impl From<NetworkAddress> for Destination {
    fn from(addr: NetworkAddress) -> Destination {
        if addr.is_broadcast() {
            Destination::Broadcast
        } else if addr.is_special() {
            Destination::Special(addr.as_i32())
        } else {
            Destination::Explicit(addr)
        }
    }
}

/// A payload handed down by the upper layer.
#[derive(Clone, Debug, PartialEq)]
pub struct UpperLayerRequest<P> {
    pub name: String,
    pub payload: P,
    pub dst: Destination,
}

impl<P> UpperLayerRequest<P> {
    pub fn new<S: Into<String>>(name: S, payload: P, dst: Destination) -> UpperLayerRequest<P> {
        UpperLayerRequest {
            name: name.into(),
            payload,
            dst,
        }
    }

    /// Creates a request for a raw network address, classifying broadcast and
    /// special values.
    pub fn to_addr<S, A>(name: S, payload: P, dst: A) -> UpperLayerRequest<P>
    where
        S: Into<String>,
        A: Into<NetworkAddress>,
    {
        UpperLayerRequest::new(name, payload, Destination::from(dst.into()))
    }
}

/// A payload passed up to the upper layer along with who sent it.
#[derive(Clone, Debug, PartialEq)]
pub struct UpperLayerIndication<P> {
    pub name: String,
    pub src_addr: NetworkAddress,
    pub payload: P,
}
