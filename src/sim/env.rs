use crate::netw::{
    ArpCache,
    LinkAddress,
    NetwConfig,
    NetworkAddress,
    RoutingModule,
    SimClock,
};
use crate::sim::link::SimLink;

/// Seconds before an ARP cache entry expires.
pub static ARP_EXPIRATION_SECS: u64 = 60;

/// Number of nodes in the default simulated network.
pub static NUM_NODES: i32 = 16;

lazy_static! {
    /// Default node address.
    pub static ref DEFAULT_NETW_ADDR: NetworkAddress = NetworkAddress::new(5);

    /// A network address not assigned to any node.
    pub static ref NO_NODE_NETW_ADDR: NetworkAddress = NetworkAddress::new(NUM_NODES + 100);

    /// Default node configuration.
    pub static ref DEFAULT_CONFIG: NetwConfig = NetwConfig::new(*DEFAULT_NETW_ADDR);
}

/// Link address of a node in the default network. Nodes use their network
/// address offset by 1000 on the link.
pub fn link_addr_of(netw_addr: NetworkAddress) -> LinkAddress {
    LinkAddress::new(netw_addr.as_i32() + 1000)
}

/// Creates an ARP cache knowing every node of the default network.
pub fn arp_cache(clock: SimClock) -> ArpCache<SimClock> {
    let mut arp_cache = ArpCache::new(ARP_EXPIRATION_SECS, clock);

    for i in 0..NUM_NODES {
        let netw_addr = NetworkAddress::new(i);
        arp_cache.set_link_addr_for_netw(netw_addr, link_addr_of(netw_addr));
    }

    arp_cache
}

/// Creates a routing module for the default node over a simulated link.
pub fn default_module<P>(clock: SimClock) -> RoutingModule<ArpCache<SimClock>, SimLink<P>, P> {
    RoutingModule::new(&*DEFAULT_CONFIG, arp_cache(clock), SimLink::new())
}
