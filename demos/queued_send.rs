extern crate clap;
extern crate env_logger;
extern crate rand;
extern crate simnet;

use clap::{
    App,
    Arg,
};
use rand::Rng;

use simnet::netw::{
    Destination,
    Forward,
    NetworkAddress,
    SimClock,
    UpperLayerRequest,
};
use simnet::sim::env;

/// Pushes packets through a single node whose link finishes transmissions at
/// random, printing what the network layer does with each event.
fn main() {
    env_logger::init();

    let matches = App::new("queued_send")
        .about("Drives a queued routing module over a simulated link.")
        .arg(
            Arg::with_name("packets")
                .long("packets")
                .value_name("N")
                .help("Number of packets to send")
                .default_value("20"),
        )
        .arg(
            Arg::with_name("completion")
                .long("completion")
                .value_name("PERCENT")
                .help("Chance per tick that the link finishes a transmission")
                .default_value("30"),
        )
        .get_matches();

    let packets = matches
        .value_of("packets")
        .unwrap()
        .parse::<u32>()
        .expect("--packets must be a number");
    let completion = matches
        .value_of("completion")
        .unwrap()
        .parse::<u32>()
        .expect("--completion must be a number")
        .max(1);

    let mut rng = rand::thread_rng();
    let mut module = env::default_module::<u32>(SimClock::new());
    let mut seq = 0;

    while seq < packets || module.is_busy() {
        if module.is_busy() && rng.gen_range(0, 100) < completion {
            let control = module.link_mut().complete().unwrap();
            module.on_lower_layer_control(control).unwrap();
            println!(
                "tx end     -> busy = {}, queued = {}",
                module.is_busy(),
                module.queue_len()
            );
            continue;
        }

        if seq < packets {
            let dst = match rng.gen_range(0, 10) {
                0 => Destination::Broadcast,
                _ => Destination::from(NetworkAddress::new(rng.gen_range(0, env::NUM_NODES))),
            };

            let request = UpperLayerRequest::new(format!("p{}", seq), seq, dst);
            match module.on_upper_layer_send(request) {
                Ok(Forward::Sent) => println!("p{:<3} {:?} -> sent", seq, dst),
                Ok(Forward::Queued(len)) => {
                    println!("p{:<3} {:?} -> queued ({})", seq, dst, len)
                }
                Err(err) => println!("p{:<3} {:?} -> {}", seq, dst, err),
            }
            seq += 1;
        }
    }

    let order: Vec<_> = module
        .link_mut()
        .take_sent()
        .into_iter()
        .map(|packet| packet.payload)
        .collect();

    println!("Link carried {} packet(s) in order {:?}.", order.len(), order);
    println!("Discarded on shutdown: {}.", module.finish());
}
