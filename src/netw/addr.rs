use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

/// Logical address of a node at the network layer.
///
/// Non-negative values name nodes, `-1` is the broadcast marker and every other
/// negative value is a caller defined (special) address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkAddress(i32);

impl NetworkAddress {
    pub const BROADCAST: NetworkAddress = NetworkAddress(-1);

    pub fn new(addr: i32) -> NetworkAddress {
        NetworkAddress(addr)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if this is the broadcast marker.
    pub fn is_broadcast(&self) -> bool {
        *self == NetworkAddress::BROADCAST
    }

    /// Checks if this is a caller defined address, i.e. negative but not the
    /// broadcast marker.
    pub fn is_special(&self) -> bool {
        self.0 < 0 && !self.is_broadcast()
    }
}

impl From<i32> for NetworkAddress {
    fn from(addr: i32) -> NetworkAddress {
        NetworkAddress(addr)
    }
}

impl Display for NetworkAddress {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.is_broadcast() {
            write!(f, "L3BROADCAST")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Address understood by the link layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkAddress(i32);

impl LinkAddress {
    pub const BROADCAST: LinkAddress = LinkAddress(-1);

    pub fn new(addr: i32) -> LinkAddress {
        LinkAddress(addr)
    }

    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Checks if this is the link broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == LinkAddress::BROADCAST
    }
}

impl From<i32> for LinkAddress {
    fn from(addr: i32) -> LinkAddress {
        LinkAddress(addr)
    }
}

impl Display for LinkAddress {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        if self.is_broadcast() {
            write!(f, "L2BROADCAST")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
