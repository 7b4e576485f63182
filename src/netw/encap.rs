use std::collections::HashMap;

use crate::netw::addr::NetworkAddress;
use crate::netw::builder::PacketBuilder;
use crate::netw::config::{
    MissingDestination,
    NetwConfig,
};
use crate::netw::packet::{
    Destination,
    NetworkPacket,
    UpperLayerRequest,
};
use crate::netw::resolver::AddressResolver;
use crate::{
    Error,
    Result,
};

/// Wraps upper layer payloads into network packets.
pub struct Encapsulator {
    builder: PacketBuilder,
    upper_kind: u32,
    missing_destination: MissingDestination,
    special: HashMap<i32, NetworkAddress>,
}

impl Encapsulator {
    pub fn new(config: &NetwConfig) -> Encapsulator {
        Encapsulator {
            builder: PacketBuilder::new(config.netw_addr, config.header_length),
            upper_kind: config.upper_kind,
            missing_destination: config.missing_destination,
            special: HashMap::new(),
        }
    }

    pub fn netw_addr(&self) -> NetworkAddress {
        self.builder.netw_addr()
    }

    /// Translates the caller defined destination code into netw_addr for
    /// subsequent requests.
    pub fn set_special_netw_addr(&mut self, code: i32, netw_addr: NetworkAddress) {
        self.special.insert(code, netw_addr);
    }

    /// Consumes an upper layer request and returns a network packet carrying
    /// its payload.
    ///
    /// A request without a destination is reported as an error. Depending on
    /// the configured `MissingDestination` policy it is then either sent to
    /// the broadcast address or refused.
    pub fn encapsulate<R, P>(
        &self,
        resolver: &mut R,
        request: UpperLayerRequest<P>,
    ) -> Result<NetworkPacket<P>>
    where
        R: AddressResolver + ?Sized,
    {
        let UpperLayerRequest { name, payload, dst } = request;

        let netw_addr = match dst {
            Destination::Absent => {
                error!(
                    "Upper layer did not specify a destination address for '{}'.",
                    name
                );
                match self.missing_destination {
                    MissingDestination::BroadcastFallback => NetworkAddress::BROADCAST,
                    MissingDestination::Reject => return Err(Error::MissingDestination),
                }
            }
            Destination::Broadcast => {
                debug!("Destination of '{}' is broadcast.", name);
                NetworkAddress::BROADCAST
            }
            Destination::Special(code) => {
                debug!("Destination of '{}' is user defined ({}).", name, code);
                self.special_netw_addr(code)?
            }
            Destination::Explicit(netw_addr) => {
                debug!("Destination of '{}' is {}.", name, netw_addr);
                netw_addr
            }
        };

        self.builder
            .build(resolver, self.upper_kind, netw_addr, &name, payload)
    }

    fn special_netw_addr(&self, code: i32) -> Result<NetworkAddress> {
        match self.special.get(&code) {
            Some(netw_addr) => Ok(*netw_addr),
            None => {
                debug!("No network address mapping for user defined code {}.", code);
                Err(Error::Unresolved(NetworkAddress::new(code)))
            }
        }
    }
}
