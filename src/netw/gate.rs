use std::collections::VecDeque;

use crate::netw::link::Link;
use crate::netw::packet::NetworkPacket;
use crate::{
    Error,
    Result,
};

/// What happened to a submitted packet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forward {
    /// The packet went straight to the link.
    Sent,
    /// The link was busy; the packet waits behind this many packets, itself
    /// included.
    Queued(usize),
}

/// Single slot flow control in front of a link.
///
/// The gate is either idle or busy. While busy exactly one packet is in flight
/// on the link and new packets wait in a FIFO queue until the link reports
/// the end of the current transmission.
pub struct OutboundGate<P> {
    busy: bool,
    queue: VecDeque<NetworkPacket<P>>,
}

impl<P> OutboundGate<P> {
    /// Creates an idle gate with an empty queue.
    pub fn new() -> OutboundGate<P> {
        OutboundGate {
            busy: false,
            queue: VecDeque::new(),
        }
    }

    /// Returns true while a transmission is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Returns the number of packets waiting for the link.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Forwards a packet to the link if it is idle, otherwise queues it.
    pub fn submit<L>(&mut self, link: &mut L, packet: NetworkPacket<P>) -> Result<Forward>
    where
        L: Link<P> + ?Sized,
    {
        if self.busy {
            self.queue.push_back(packet);
            debug!(
                "Link is busy, queuing for future send ({} queued).",
                self.queue.len()
            );
            Ok(Forward::Queued(self.queue.len()))
        } else {
            debug!("Pushing over link.");
            self.forward(link, packet)?;
            Ok(Forward::Sent)
        }
    }

    /// Handles the end of a transmission, releasing the next queued packet if
    /// there is one.
    ///
    /// A completion while idle is a protocol violation by the link. It is
    /// logged and ignored, returning `Error::Ignored`.
    ///
    /// Queued packets the link refuses are dropped and the next one is tried.
    /// The first refusal is returned even when a later packet went out, in
    /// which case the gate is busy again.
    pub fn on_transmission_complete<L>(&mut self, link: &mut L) -> Result<()>
    where
        L: Link<P> + ?Sized,
    {
        if !self.busy {
            warn!("Transmission complete while no transmission is in flight, ignoring.");
            return Err(Error::Ignored);
        }

        debug!("Transmission complete.");
        self.busy = false;

        // The queue never holds packets while the gate is idle.
        let mut refused = None;
        while let Some(packet) = self.queue.pop_front() {
            debug!("Sending queued packet ({} left).", self.queue.len());
            match self.forward(link, packet) {
                Ok(()) => break,
                Err(err) => {
                    if refused.is_none() {
                        refused = Some(err);
                    }
                }
            }
        }

        match refused {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Drops every queued packet without sending it, returning how many were
    /// dropped. The in flight transmission, if any, is left alone.
    pub fn discard_queued(&mut self) -> usize {
        let discarded = self.queue.len();
        self.queue.clear();
        discarded
    }

    fn forward<L>(&mut self, link: &mut L, packet: NetworkPacket<P>) -> Result<()>
    where
        L: Link<P> + ?Sized,
    {
        self.busy = true;

        if let Err(err) = link.send(packet) {
            // Nothing is in flight if the link refused the packet.
            self.busy = false;
            warn!("Link::send(...) failed with {:?}.", err);
            return Err(err);
        }

        Ok(())
    }
}

impl<P> Default for OutboundGate<P> {
    fn default() -> OutboundGate<P> {
        OutboundGate::new()
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

    #[derive(Default)]
    struct Wire {
        sent: Vec<u32>,
        refuse: bool,
        refuse_payload: Option<u32>,
    }

    impl Link<u32> for Wire {
        fn send(&mut self, packet: NetworkPacket<u32>) -> Result<()> {
            if self.refuse || self.refuse_payload == Some(packet.payload) {
                return Err(Error::Link("refused".to_string()));
            }
            self.sent.push(packet.payload);
            Ok(())
        }
    }

    fn packet(payload: u32) -> NetworkPacket<u32> {
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
    fn test_submit_while_idle() {
        let (mut gate, mut wire) = (OutboundGate::new(), Wire::default());

        assert_eq!(gate.submit(&mut wire, packet(1)).unwrap(), Forward::Sent);
        assert!(gate.is_busy());
        assert_eq!(gate.queue_len(), 0);
        assert_eq!(wire.sent, vec![1]);
    }

    #[test]
    fn test_submit_while_busy() {
        let (mut gate, mut wire) = (OutboundGate::new(), Wire::default());

        gate.submit(&mut wire, packet(1)).unwrap();
        assert_eq!(gate.submit(&mut wire, packet(2)).unwrap(), Forward::Queued(1));
        assert_eq!(gate.submit(&mut wire, packet(3)).unwrap(), Forward::Queued(2));
        assert!(gate.is_busy());
        assert_eq!(wire.sent, vec![1]);
    }

    #[test]
    fn test_release_in_order() {
        let (mut gate, mut wire) = (OutboundGate::new(), Wire::default());

        for i in 1..5 {
            gate.submit(&mut wire, packet(i)).unwrap();
        }

        for expected in 2..5 {
            gate.on_transmission_complete(&mut wire).unwrap();
            assert!(gate.is_busy());
            assert_eq!(*wire.sent.last().unwrap(), expected);
        }

        assert_eq!(wire.sent, vec![1, 2, 3, 4]);
        assert_eq!(gate.queue_len(), 0);

        gate.on_transmission_complete(&mut wire).unwrap();
        assert!(!gate.is_busy());
        assert_eq!(wire.sent.len(), 4);
    }

    #[test]
    fn test_complete_while_idle() {
        let (mut gate, mut wire) = (OutboundGate::new(), Wire::default());

        assert_matches!(gate.on_transmission_complete(&mut wire), Err(Error::Ignored));
        assert!(!gate.is_busy());
        assert_eq!(gate.queue_len(), 0);
        assert!(wire.sent.is_empty());
    }

    #[test]
    fn test_idle_until_next_submit() {
        let (mut gate, mut wire) = (OutboundGate::new(), Wire::default());

        gate.submit(&mut wire, packet(1)).unwrap();
        gate.on_transmission_complete(&mut wire).unwrap();
        assert!(!gate.is_busy());

        assert_eq!(gate.submit(&mut wire, packet(2)).unwrap(), Forward::Sent);
        assert!(gate.is_busy());
    }

    #[test]
    fn test_refused_packet_leaves_gate_idle() {
        let mut gate = OutboundGate::new();
        let mut wire = Wire {
            refuse: true,
            ..Wire::default()
        };

        assert_matches!(gate.submit(&mut wire, packet(1)), Err(Error::Link(_)));
        assert!(!gate.is_busy());

        wire.refuse = false;
        assert_eq!(gate.submit(&mut wire, packet(2)).unwrap(), Forward::Sent);
        assert_eq!(wire.sent, vec![2]);
    }

    #[test]
    fn test_refused_queued_packet_is_skipped() {
        let (mut gate, mut wire) = (OutboundGate::new(), Wire::default());

        for i in 1..4 {
            gate.submit(&mut wire, packet(i)).unwrap();
        }

        wire.refuse = true;
        assert_matches!(gate.on_transmission_complete(&mut wire), Err(Error::Link(_)));
        assert!(!gate.is_busy());
        assert_eq!(gate.queue_len(), 0);
        assert_eq!(wire.sent, vec![1]);
    }

    #[test]
    fn test_refused_queued_packet_reported_after_release() {
        let mut gate = OutboundGate::new();
        let mut wire = Wire {
            refuse_payload: Some(2),
            ..Wire::default()
        };

        for i in 1..4 {
            gate.submit(&mut wire, packet(i)).unwrap();
        }

        assert_matches!(gate.on_transmission_complete(&mut wire), Err(Error::Link(_)));
        assert!(gate.is_busy());
        assert_eq!(gate.queue_len(), 0);
        assert_eq!(wire.sent, vec![1, 3]);

        gate.on_transmission_complete(&mut wire).unwrap();
        assert!(!gate.is_busy());
    }

    #[test]
    fn test_discard_queued() {
        let (mut gate, mut wire) = (OutboundGate::new(), Wire::default());

        for i in 0..3 {
            gate.submit(&mut wire, packet(i)).unwrap();
        }

        assert_eq!(gate.discard_queued(), 2);
        assert_eq!(gate.queue_len(), 0);
        assert!(gate.is_busy());
        assert_eq!(wire.sent, vec![0]);
    }
}
