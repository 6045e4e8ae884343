//! KNX Individual Address implementation.
//!
//! Individual addresses identify physical devices on the KNX bus.
//! Format: Area.Line.Member (e.g., 1.1.5)
//! - Area: 0-15 (4 bits)
//! - Line: 0-15 (4 bits)
//! - Member: 0-255 (8 bits)
//!
//! A telegram carries the sender's individual address in bytes 1-2 and,
//! for point-to-point traffic, the receiver's in bytes 3-4.

use crate::error::{KnxError, Result};
use core::fmt;

/// KNX Individual Address (Area.Line.Member)
///
/// Used to identify physical devices on the KNX bus.
///
/// # Examples
///
/// ```
/// use knx_telegram::IndividualAddress;
///
/// // Create from components
/// let addr = IndividualAddress::new(1, 1, 5).unwrap();
/// assert_eq!(addr.to_string(), "1.1.5");
///
/// // Create from raw u16
/// let addr = IndividualAddress::from(0x1105u16);
/// assert_eq!(addr.area(), 1);
/// assert_eq!(addr.line(), 1);
/// assert_eq!(addr.member(), 5);
///
/// // Parse from string
/// let addr: IndividualAddress = "1.1.5".parse().unwrap();
/// assert_eq!(u16::from(addr), 0x1105);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndividualAddress {
    raw: u16,
}

impl IndividualAddress {
    /// Maximum area value (4 bits)
    pub const MAX_AREA: u8 = 15;
    /// Maximum line value (4 bits)
    pub const MAX_LINE: u8 = 15;
    /// Maximum member value (8 bits)
    pub const MAX_MEMBER: u8 = 255;

    /// Create a new Individual Address from components.
    ///
    /// # Arguments
    ///
    /// * `area` - Area (0-15)
    /// * `line` - Line (0-15)
    /// * `member` - Member (0-255)
    ///
    /// # Errors
    ///
    /// Returns an addressing error if any component is out of range.
    pub fn new(area: u8, line: u8, member: u8) -> Result<Self> {
        if area > Self::MAX_AREA {
            return Err(KnxError::address_out_of_range());
        }
        if line > Self::MAX_LINE {
            return Err(KnxError::address_out_of_range());
        }
        // member is u8, so it's always in range

        let raw = (u16::from(area) << 12) | (u16::from(line) << 8) | u16::from(member);
        Ok(Self { raw })
    }

    /// Get the raw u16 representation of the address.
    #[inline(always)]
    pub const fn raw(self) -> u16 {
        self.raw
    }

    /// Get the area component (0-15).
    #[inline(always)]
    pub const fn area(self) -> u8 {
        ((self.raw >> 12) & 0x0F) as u8
    }

    /// Get the line component (0-15).
    #[inline(always)]
    pub const fn line(self) -> u8 {
        ((self.raw >> 8) & 0x0F) as u8
    }

    /// Get the member component (0-255).
    #[inline(always)]
    pub const fn member(self) -> u8 {
        (self.raw & 0xFF) as u8
    }

    /// Encode the address into a byte buffer (big-endian).
    ///
    /// The byte pair matches the telegram's source/target layout exactly,
    /// so transport layers can reuse this for their own framing.
    ///
    /// # Errors
    ///
    /// Returns a frame error if the buffer holds fewer than 2 bytes.
    #[inline]
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize> {
        if buf.len() < 2 {
            return Err(KnxError::buffer_too_small());
        }
        buf[0..2].copy_from_slice(&self.raw.to_be_bytes());
        Ok(2)
    }

    /// Decode an address from a byte buffer (big-endian).
    ///
    /// # Errors
    ///
    /// Returns a frame error if the buffer holds fewer than 2 bytes.
    #[inline]
    pub fn decode(buf: &[u8]) -> Result<Self> {
        if buf.len() < 2 {
            return Err(KnxError::buffer_too_small());
        }
        let raw = u16::from_be_bytes([buf[0], buf[1]]);
        Ok(Self { raw })
    }
}

impl fmt::Display for IndividualAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.area(), self.line(), self.member())
    }
}

impl From<u16> for IndividualAddress {
    #[inline(always)]
    fn from(raw: u16) -> Self {
        Self { raw }
    }
}

impl From<IndividualAddress> for u16 {
    #[inline(always)]
    fn from(addr: IndividualAddress) -> u16 {
        addr.raw
    }
}

impl core::str::FromStr for IndividualAddress {
    type Err = KnxError;

    fn from_str(s: &str) -> Result<Self> {
        // Zero-allocation parsing using iterators
        let mut parts = s.split('.');

        let area = parts
            .next()
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or_else(KnxError::invalid_individual_address)?;

        let line = parts
            .next()
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or_else(KnxError::invalid_individual_address)?;

        let member = parts
            .next()
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or_else(KnxError::invalid_individual_address)?;

        // Ensure no extra parts
        if parts.next().is_some() {
            return Err(KnxError::invalid_individual_address());
        }

        Self::new(area, line, member)
    }
}
