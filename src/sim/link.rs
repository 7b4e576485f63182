use crate::netw::link::{
    Link,
    LinkControl,
};
use crate::netw::packet::NetworkPacket;
use crate::Result;

/// A simulated link which carries one packet at a time and remembers every
/// packet it was given, in order.
///
/// Handing the link a packet while another one is still in flight is counted
/// as a collision rather than refused, so callers can check that the layer
/// above never does it.
#[derive(Debug)]
pub struct SimLink<P> {
    sent: Vec<NetworkPacket<P>>,
    in_flight: bool,
    collisions: usize,
}

impl<P> SimLink<P> {
    pub fn new() -> SimLink<P> {
        SimLink {
            sent: Vec::new(),
            in_flight: false,
            collisions: 0,
        }
    }

    /// Packets handed to the link so far, oldest first.
    pub fn sent(&self) -> &[NetworkPacket<P>] {
        &self.sent
    }

    /// Removes and returns every recorded packet.
    pub fn take_sent(&mut self) -> Vec<NetworkPacket<P>> {
        std::mem::replace(&mut self.sent, Vec::new())
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Number of packets handed over while another was in flight.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Finishes the current transmission, returning the notification to
    /// deliver to the network layer, or None if the link was idle.
    pub fn complete(&mut self) -> Option<LinkControl> {
        if self.in_flight {
            self.in_flight = false;
            Some(LinkControl::TxEnd)
        } else {
            None
        }
    }
}

impl<P> Default for SimLink<P> {
    fn default() -> SimLink<P> {
        SimLink::new()
    }
}

impl<P> Link<P> for SimLink<P> {
    fn send(&mut self, packet: NetworkPacket<P>) -> Result<()> {
        if self.in_flight {
            warn!("Packet '{}' sent while the link is busy.", packet.name);
            self.collisions += 1;
        }

        debug!(
            "Transmitting '{}' from {} to link address {}.",
            packet.name, packet.src_addr, packet.link_info.dst_addr
        );

        self.in_flight = true;
        self.sent.push(packet);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netw::addr::{
        LinkAddress,
        NetworkAddress,
    };
    use crate::netw::packet::LinkControlInfo;

    fn packet(payload: u8) -> NetworkPacket<u8> {
        NetworkPacket {
            kind: 0,
            name: format!("p{}", payload),
            header_length: 32,
            src_addr: NetworkAddress::new(1),
            dst_addr: NetworkAddress::new(2),
            payload,
            link_info: LinkControlInfo {
                dst_addr: LinkAddress::new(2),
            },
        }
    }

    #[test]
    fn test_complete_only_when_in_flight() {
        let mut link = SimLink::new();
        assert_matches!(link.complete(), None);

        link.send(packet(1)).unwrap();
        assert!(link.is_in_flight());
        assert_matches!(link.complete(), Some(LinkControl::TxEnd));
        assert!(!link.is_in_flight());
    }

    #[test]
    fn test_collision_counted() {
        let mut link = SimLink::new();

        link.send(packet(1)).unwrap();
        link.send(packet(2)).unwrap();
        assert_eq!(link.collisions(), 1);
        assert_eq!(link.sent().len(), 2);
    }

    #[test]
    fn test_take_sent_drains_in_order() {
        let mut link = SimLink::new();

        for i in 0..3 {
            link.send(packet(i)).unwrap();
            link.complete();
        }

        let payloads: Vec<_> = link.take_sent().into_iter().map(|p| p.payload).collect();
        assert_eq!(payloads, vec![0, 1, 2]);
        assert!(link.sent().is_empty());
        assert_eq!(link.collisions(), 0);
    }
}
