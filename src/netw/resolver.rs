use std::cell::RefCell;
use std::rc::Rc;

use crate::netw::addr::{
    LinkAddress,
    NetworkAddress,
};
use crate::{
    Error,
    Result,
};

/// A lookup service translating network addresses into link addresses.
///
/// The routing layer only queries a resolver, it never maintains one.
pub trait AddressResolver {
    /// Looks up the link address for a node in the general address table.
    fn link_addr_for(&mut self, netw_addr: NetworkAddress) -> Result<LinkAddress>;

    /// Translates a caller defined (negative) network address into a link
    /// address. There are no such addresses unless an implementation says so.
    fn special_link_addr(&mut self, netw_addr: NetworkAddress) -> Result<LinkAddress> {
        Err(Error::Unresolved(netw_addr))
    }
}

impl<R: AddressResolver> AddressResolver for Rc<RefCell<R>> {
    fn link_addr_for(&mut self, netw_addr: NetworkAddress) -> Result<LinkAddress> {
        self.borrow_mut().link_addr_for(netw_addr)
    }

    fn special_link_addr(&mut self, netw_addr: NetworkAddress) -> Result<LinkAddress> {
        self.borrow_mut().special_link_addr(netw_addr)
    }
}

/// Returns the link address a packet for netw_addr should be handed to.
///
/// The broadcast marker maps straight to the link broadcast address without a
/// lookup, special addresses go through the caller defined mapping and all
/// other addresses through the general table.
pub fn resolve<R>(resolver: &mut R, netw_addr: NetworkAddress) -> Result<LinkAddress>
where
    R: AddressResolver + ?Sized,
{
    if netw_addr.is_broadcast() {
        debug!("{} has to be broadcast, using {}.", netw_addr, LinkAddress::BROADCAST);
        Ok(LinkAddress::BROADCAST)
    } else if netw_addr.is_special() {
        debug!("Getting link address for user defined address {}.", netw_addr);
        resolver.special_link_addr(netw_addr)
    } else {
        debug!("Getting link address for {}.", netw_addr);
        resolver.link_addr_for(netw_addr)
    }
}
