#[cfg(test)]
#[macro_use]
extern crate assert_matches;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod netw;
pub mod sim;

use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use crate::netw::NetworkAddress;

#[derive(Debug)]
pub enum Error {
    /// Indicates an error where a network address could not be resolved.
    Unresolved(NetworkAddress),
    /// Indicates an upper layer request without any destination.
    MissingDestination,
    /// Indicates an event that was dropped without changing any state.
    Ignored,
    /// Indicates the link layer refused a packet.
    Link(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            Error::Unresolved(addr) => write!(f, "unable to resolve network address {}", addr),
            Error::MissingDestination => {
                write!(f, "upper layer did not specify a destination address")
            }
            Error::Ignored => write!(f, "event ignored"),
            Error::Link(ref msg) => write!(f, "link error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
