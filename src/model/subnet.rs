//! CIDR-style subnet expressions (`a.b.c.d/len`)

use super::addr;
use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SUBNET_DELIMITER: char = '/';

/// Longest legal prefix for an IPv4 subnet
pub const MAX_PREFIX_LEN: u8 = 32;

/// An IPv4 network address paired with a prefix length
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Subnet {
    network: u32,
    prefix_len: u8,
}

impl Subnet {
    /// Create a subnet, rejecting prefix lengths above 32
    pub fn new(network: u32, prefix_len: u8) -> Result<Self> {
        if prefix_len > MAX_PREFIX_LEN {
            return Err(Error::InvalidPrefixLength(prefix_len));
        }
        Ok(Subnet {
            network,
            prefix_len,
        })
    }

    /// The subnet of length `prefix_len` containing `addr`, host bits cleared.
    /// Callers guarantee `prefix_len <= 32`.
    pub(crate) fn truncated(addr: u32, prefix_len: u8) -> Self {
        let mut subnet = Subnet {
            network: addr,
            prefix_len,
        };
        subnet.network &= subnet.mask();
        subnet
    }

    /// The network address exactly as written (host bits included)
    pub fn network(&self) -> u32 {
        self.network
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Netmask with the leading `prefix_len` bits set
    pub fn mask(&self) -> u32 {
        match self.prefix_len {
            0 => 0,
            len => u32::MAX << (MAX_PREFIX_LEN - len),
        }
    }

    /// Whether `addr` shares this subnet's leading `prefix_len` bits
    pub fn contains(&self, addr: u32) -> bool {
        (addr ^ self.network) & self.mask() == 0
    }

    /// True when bits below the prefix are set (e.g. `10.1.2.3/8`)
    pub fn has_host_bits(&self) -> bool {
        self.network & !self.mask() != 0
    }
}

impl FromStr for Subnet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidSubnet(s.to_string());

        let (network, prefix_len) = s.split_once(SUBNET_DELIMITER).ok_or_else(invalid)?;
        if prefix_len.contains(SUBNET_DELIMITER) {
            return Err(invalid());
        }

        let network = addr::parse_dotted_quad(network).map_err(|_| invalid())?;
        let prefix_len = prefix_len.parse::<u8>().map_err(|_| invalid())?;

        Subnet::new(network, prefix_len).map_err(|_| invalid())
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            addr::format_dotted_quad(self.network),
            self.prefix_len
        )
    }
}

impl Serialize for Subnet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
