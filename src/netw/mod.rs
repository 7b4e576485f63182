//! Queued network layer for a simulated node.
//!
//! The `netw` module turns upper layer requests into network packets, resolves
//! their next hop link address and pushes them down a link that carries one
//! transmission at a time, holding everything else back in arrival order.

pub mod addr;
pub mod arp_cache;
pub mod builder;
pub mod config;
pub mod encap;
pub mod gate;
pub mod link;
pub mod packet;
pub mod resolver;
pub mod routing;
pub mod time;

pub use self::addr::{
    LinkAddress,
    NetworkAddress,
};
pub use self::arp_cache::ArpCache;
pub use self::builder::PacketBuilder;
pub use self::config::{
    MissingDestination,
    NetwConfig,
};
pub use self::encap::Encapsulator;
pub use self::gate::{
    Forward,
    OutboundGate,
};
pub use self::link::{
    Link,
    LinkControl,
};
pub use self::packet::{
    Destination,
    LinkControlInfo,
    NetworkPacket,
    UpperLayerIndication,
    UpperLayerRequest,
};
pub use self::resolver::AddressResolver;
pub use self::routing::RoutingModule;
pub use self::time::{
    Clock,
    SimClock,
    SystemClock,
};
