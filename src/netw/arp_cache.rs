use std::collections::HashMap;
use std::time::{
    Duration,
    Instant,
};

use crate::netw::addr::{
    LinkAddress,
    NetworkAddress,
};
use crate::netw::resolver::AddressResolver;
use crate::netw::time::{
    Clock,
    SystemClock,
};
use crate::{
    Error,
    Result,
};

/// Maintains expiring network -> link address mappings, plus a fixed set of
/// mappings for caller defined addresses which never expire.
///
/// Every mapping carries the instant it stops being valid. Stale mappings are
/// dropped when looked up or on `purge()`.
pub struct ArpCache<T = SystemClock>
where
    T: Clock,
{
    entries: HashMap<NetworkAddress, (LinkAddress, Instant)>,
    special: HashMap<NetworkAddress, LinkAddress>,
    lifetime: Duration,
    clock: T,
}

impl<T: Clock> ArpCache<T> {
    /// Creates an ARP cache where link address mappings stay valid for
    /// expiration_in_secs seconds after they were last set.
    pub fn new(expiration_in_secs: u64, clock: T) -> ArpCache<T> {
        ArpCache {
            entries: HashMap::new(),
            special: HashMap::new(),
            lifetime: Duration::from_secs(expiration_in_secs),
            clock,
        }
    }

    /// Lookup the link address for a network address.
    pub fn link_addr_for_netw(&mut self, netw_addr: NetworkAddress) -> Option<LinkAddress> {
        let now = self.clock.now_instant();

        match self.entries.get(&netw_addr).cloned() {
            Some((link_addr, valid_until)) if now <= valid_until => Some(link_addr),
            Some(_) => {
                debug!("Link address mapping for {} is stale.", netw_addr);
                self.entries.remove(&netw_addr);
                None
            }
            None => None,
        }
    }

    /// Create or refresh the link address mapping for a network address.
    pub fn set_link_addr_for_netw(&mut self, netw_addr: NetworkAddress, link_addr: LinkAddress) {
        let valid_until = self.clock.now_instant() + self.lifetime;
        self.entries.insert(netw_addr, (link_addr, valid_until));
    }

    /// Maps a caller defined network address to a link address.
    pub fn set_special_link_addr(&mut self, netw_addr: NetworkAddress, link_addr: LinkAddress) {
        self.special.insert(netw_addr, link_addr);
    }

    /// Drops every stale mapping, returning how many were dropped.
    pub fn purge(&mut self) -> usize {
        let now = self.clock.now_instant();
        let before = self.entries.len();
        self.entries.retain(|_, &mut (_, valid_until)| now <= valid_until);
        before - self.entries.len()
    }

    /// Number of unicast mappings held, stale or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clock> AddressResolver for ArpCache<T> {
    fn link_addr_for(&mut self, netw_addr: NetworkAddress) -> Result<LinkAddress> {
        match self.link_addr_for_netw(netw_addr) {
            Some(link_addr) => Ok(link_addr),
            None => {
                debug!("No link address mapping for {}.", netw_addr);
                Err(Error::Unresolved(netw_addr))
            }
        }
    }

    fn special_link_addr(&mut self, netw_addr: NetworkAddress) -> Result<LinkAddress> {
        self.special
            .get(&netw_addr)
            .cloned()
            .ok_or(Error::Unresolved(netw_addr))
    }
}
