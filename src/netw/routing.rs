use crate::netw::addr::NetworkAddress;
use crate::netw::config::NetwConfig;
use crate::netw::encap::Encapsulator;
use crate::netw::gate::{
    Forward,
    OutboundGate,
};
use crate::netw::link::{
    Link,
    LinkControl,
};
use crate::netw::packet::{
    NetworkPacket,
    UpperLayerIndication,
    UpperLayerRequest,
};
use crate::netw::resolver::AddressResolver;
use crate::{
    Error,
    Result,
};

/// Network layer of a single node: basic routing with a queue.
///
/// Upper layer requests are encapsulated and pushed down the link one at a
/// time; the rest wait in arrival order until the link reports `TxEnd`.
pub struct RoutingModule<R, L, P>
where
    R: AddressResolver,
    L: Link<P>,
{
    encap: Encapsulator,
    gate: OutboundGate<P>,
    resolver: R,
    link: L,
}

impl<R, L, P> RoutingModule<R, L, P>
where
    R: AddressResolver,
    L: Link<P>,
{
    /// Creates an idle routing module with an empty queue.
    pub fn new(config: &NetwConfig, resolver: R, link: L) -> RoutingModule<R, L, P> {
        debug!(
            "Starting routing module for {} (header {} bits).",
            config.netw_addr, config.header_length
        );

        RoutingModule {
            encap: Encapsulator::new(config),
            gate: OutboundGate::new(),
            resolver,
            link,
        }
    }

    /// Handles a payload handed down by the upper layer.
    pub fn on_upper_layer_send(&mut self, request: UpperLayerRequest<P>) -> Result<Forward> {
        debug!("Sending upper layer packet '{}' to network.", request.name);

        let packet = self.encap.encapsulate(&mut self.resolver, request)?;
        self.gate.submit(&mut self.link, packet)
    }

    /// Handles a control notification raised by the link layer.
    ///
    /// Only `LinkControl::TxEnd` is meaningful, everything else is ignored.
    pub fn on_lower_layer_control(&mut self, control: LinkControl) -> Result<()> {
        match control {
            LinkControl::TxEnd => self.gate.on_transmission_complete(&mut self.link),
            control => {
                debug!("Ignoring link control notification {}.", control);
                Err(Error::Ignored)
            }
        }
    }

    /// Handles a packet received from the link layer, returning what should be
    /// passed to the upper layer.
    ///
    /// Packets not addressed to this node or to broadcast are ignored.
    pub fn on_lower_layer_receive(
        &self,
        packet: NetworkPacket<P>,
    ) -> Result<UpperLayerIndication<P>> {
        let NetworkPacket {
            name,
            src_addr,
            dst_addr,
            payload,
            ..
        } = packet;

        if dst_addr != self.netw_addr() && !dst_addr.is_broadcast() {
            debug!(
                "Ignoring network packet '{}' with destination {}.",
                name, dst_addr
            );
            return Err(Error::Ignored);
        }

        debug!("Passing network packet '{}' from {} to upper layer.", name, src_addr);

        Ok(UpperLayerIndication {
            name,
            src_addr,
            payload,
        })
    }

    /// Shuts the module down, discarding every queued packet without sending
    /// it. Returns the number of discarded packets.
    pub fn finish(&mut self) -> usize {
        let discarded = self.gate.discard_queued();
        if discarded > 0 {
            debug!("Discarding {} queued packet(s) on shutdown.", discarded);
        }
        discarded
    }

    /// Translates the caller defined destination code into netw_addr.
    pub fn set_special_netw_addr(&mut self, code: i32, netw_addr: NetworkAddress) {
        self.encap.set_special_netw_addr(code, netw_addr);
    }

    pub fn netw_addr(&self) -> NetworkAddress {
        self.encap.netw_addr()
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    pub fn queue_len(&self) -> usize {
        self.gate.queue_len()
    }

    pub fn resolver(&mut self) -> &mut R {
        &mut self.resolver
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }
}
