use crate::netw::addr::NetworkAddress;

/// Default length of the network header in bits.
pub const DEFAULT_HEADER_LENGTH: usize = 32;

/// What to do with an upper layer request that names no destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingDestination {
    /// Report the error and send the packet to the broadcast address anyway.
    BroadcastFallback,
    /// Report the error and refuse to build a packet.
    Reject,
}

/// Settings read once when a routing module is created.
#[derive(Clone, Debug)]
pub struct NetwConfig {
    /// Network address of this node, stamped as source on every packet.
    pub netw_addr: NetworkAddress,
    /// Length of the network header in bits.
    pub header_length: usize,
    /// Kind given to packets built from upper layer requests.
    pub upper_kind: u32,
    /// Handling of requests without a destination.
    pub missing_destination: MissingDestination,
}

impl NetwConfig {
    /// Creates a configuration for the node at netw_addr with default settings.
    pub fn new(netw_addr: NetworkAddress) -> NetwConfig {
        NetwConfig {
            netw_addr,
            ..NetwConfig::default()
        }
    }
}

impl Default for NetwConfig {
    fn default() -> NetwConfig {
        NetwConfig {
            netw_addr: NetworkAddress::new(0),
            header_length: DEFAULT_HEADER_LENGTH,
            upper_kind: 0,
            missing_destination: MissingDestination::BroadcastFallback,
        }
    }
}
