use simnet::netw::{
    ArpCache,
    Destination,
    LinkControl,
    NetworkAddress,
    RoutingModule,
    SimClock,
    UpperLayerRequest,
};
use simnet::sim::{
    env,
    SimLink,
};
use simnet::Result;

pub type Module = RoutingModule<ArpCache<SimClock>, SimLink<u32>, u32>;

/// A routing module for the default node along with the clock driving its ARP
/// cache.
pub struct Context {
    pub module: Module,
    #[allow(dead_code)]
    pub clock: SimClock,
}

pub fn context() -> Context {
    let clock = SimClock::new();

    Context {
        module: env::default_module(clock.clone()),
        clock,
    }
}

/// A request carrying seq to a raw network address.
pub fn request(seq: u32, dst: i32) -> UpperLayerRequest<u32> {
    UpperLayerRequest::to_addr(format!("p{}", seq), seq, dst)
}

/// A request carrying seq without any destination.
#[allow(dead_code)]
pub fn request_without_destination(seq: u32) -> UpperLayerRequest<u32> {
    UpperLayerRequest::new(format!("p{}", seq), seq, Destination::Absent)
}

/// Finishes the transmission on the link and tells the module about it. The
/// notification is delivered even if the link was idle.
#[allow(dead_code)]
pub fn complete(context: &mut Context) -> Result<()> {
    let control = context
        .module
        .link_mut()
        .complete()
        .unwrap_or(LinkControl::TxEnd);

    context.module.on_lower_layer_control(control)
}

/// Payloads the link has been handed so far, oldest first.
#[allow(dead_code)]
pub fn sent_payloads(context: &Context) -> Vec<u32> {
    context
        .module
        .link()
        .sent()
        .iter()
        .map(|packet| packet.payload)
        .collect()
}

#[allow(dead_code)]
pub fn netw(addr: i32) -> NetworkAddress {
    NetworkAddress::new(addr)
}
