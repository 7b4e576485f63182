use crate::netw::addr::NetworkAddress;
use crate::netw::packet::{
    LinkControlInfo,
    NetworkPacket,
};
use crate::netw::resolver::{
    resolve,
    AddressResolver,
};
use crate::Result;

/// Builds outgoing network packets for one node.
#[derive(Clone, Debug)]
pub struct PacketBuilder {
    netw_addr: NetworkAddress,
    header_length: usize,
}

impl PacketBuilder {
    /// Creates a builder stamping netw_addr as source and header_length (in
    /// bits) as the header size of every packet.
    pub fn new(netw_addr: NetworkAddress, header_length: usize) -> PacketBuilder {
        PacketBuilder {
            netw_addr,
            header_length,
        }
    }

    pub fn netw_addr(&self) -> NetworkAddress {
        self.netw_addr
    }

    /// Creates a packet for dst_addr carrying payload, with the link address
    /// of the next hop already attached.
    ///
    /// Fails, building nothing, if the next hop cannot be resolved.
    pub fn build<R, P>(
        &self,
        resolver: &mut R,
        kind: u32,
        dst_addr: NetworkAddress,
        name: &str,
        payload: P,
    ) -> Result<NetworkPacket<P>>
    where
        R: AddressResolver + ?Sized,
    {
        debug!("Node {} building packet '{}' for {}.", self.netw_addr, name, dst_addr);

        let link_addr = resolve(resolver, dst_addr)?;

        Ok(NetworkPacket {
            kind,
            name: name.to_string(),
            header_length: self.header_length,
            src_addr: self.netw_addr,
            dst_addr,
            payload,
            link_info: LinkControlInfo {
                dst_addr: link_addr,
            },
        })
    }
}
