//! Dotted-quad IPv4 address codec
//!
//! Addresses are carried as `u32` in network bit order: the first octet
//! occupies bits 31..24 and the last octet bits 7..0. Packing is done with
//! explicit shifts, so the result never depends on host byte order.

use crate::{Error, Result};

const OCTET_DELIMITER: char = '.';

/// Parse a dotted-quad string such as `"192.168.1.10"` into a `u32`.
///
/// Exactly four decimal components are required and each must fit in
/// `0..=255`; anything else is an [`Error::InvalidAddress`].
pub fn parse_dotted_quad(text: &str) -> Result<u32> {
    let mut octets = [0u8; 4];
    let mut parts = text.split(OCTET_DELIMITER);

    for octet in octets.iter_mut() {
        let part = parts
            .next()
            .ok_or_else(|| Error::InvalidAddress(text.to_string()))?;
        *octet = part
            .parse::<u8>()
            .map_err(|_| Error::InvalidAddress(text.to_string()))?;
    }

    if parts.next().is_some() {
        return Err(Error::InvalidAddress(text.to_string()));
    }

    Ok(from_octets(octets))
}

/// Pack four octets MSB-first
pub fn from_octets(octets: [u8; 4]) -> u32 {
    (octets[0] as u32) << 24
        | (octets[1] as u32) << 16
        | (octets[2] as u32) << 8
        | octets[3] as u32
}

/// Split a packed address back into its four octets
pub fn octets(addr: u32) -> [u8; 4] {
    [
        (addr >> 24) as u8,
        (addr >> 16) as u8,
        (addr >> 8) as u8,
        addr as u8,
    ]
}

/// Render a packed address as a dotted quad
pub fn format_dotted_quad(addr: u32) -> String {
    let [a, b, c, d] = octets(addr);
    format!("{}.{}.{}.{}", a, b, c, d)
}
