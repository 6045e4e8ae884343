//! Bit-level field map for the telegram buffer.
//!
//! Every sub-byte field of the header is one `(byte, mask, shift)` triple,
//! so the mask arithmetic lives in a single table instead of magic numbers
//! scattered across accessors. `get` extracts the field right-aligned;
//! `set` masks the value to the field width and leaves sibling bits in the
//! same byte untouched.
//!
//! The routing-counter setter is the one accessor that does not go through
//! [`Field::set`]: the wire-compatible behavior wipes the length nibble
//! (see `Telegram::set_routing_counter`).

use super::constants::TELEGRAM_LENGTH;

/// One sub-byte field: which byte it lives in, which bits, and how far to
/// shift them down.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field {
    pub byte: usize,
    pub mask: u8,
    pub shift: u8,
}

impl Field {
    /// Read the field, right-aligned.
    #[inline(always)]
    pub(crate) const fn get(self, buffer: &[u8; TELEGRAM_LENGTH]) -> u8 {
        (buffer[self.byte] & self.mask) >> self.shift
    }

    /// Write the field, preserving sibling bits in the same byte.
    /// Out-of-range values are truncated to the field width.
    #[inline(always)]
    pub(crate) fn set(self, buffer: &mut [u8; TELEGRAM_LENGTH], value: u8) {
        buffer[self.byte] = (buffer[self.byte] & !self.mask) | ((value << self.shift) & self.mask);
    }
}

/// Repeat flag (byte 0, bit 5); the bit means "not repeated" when set
pub(crate) const REPEAT: Field = Field { byte: 0, mask: 0b0010_0000, shift: 5 };

/// Priority (byte 0, bits 3-2)
pub(crate) const PRIORITY: Field = Field { byte: 0, mask: 0b0000_1100, shift: 2 };

/// Target-address-type flag (byte 5, bit 7); set means group target
pub(crate) const TARGET_TYPE: Field = Field { byte: 5, mask: 0b1000_0000, shift: 7 };

/// Routing counter (byte 5, bits 6-4)
pub(crate) const ROUTING_COUNTER: Field = Field { byte: 5, mask: 0b0111_0000, shift: 4 };

/// Payload length minus one (byte 5, bits 3-0)
pub(crate) const PAYLOAD_LENGTH: Field = Field { byte: 5, mask: 0b0000_1111, shift: 0 };

/// Communication type (byte 6, bits 7-6)
pub(crate) const COMM_TYPE: Field = Field { byte: 6, mask: 0b1100_0000, shift: 6 };

/// Sequence number (byte 6, bits 5-2)
pub(crate) const SEQUENCE: Field = Field { byte: 6, mask: 0b0011_1100, shift: 2 };

/// Control data (byte 6, bits 1-0)
pub(crate) const CONTROL_DATA: Field = Field { byte: 6, mask: 0b0000_0011, shift: 0 };

/// High half of the 4-bit command (byte 6, bits 1-0, aliases CONTROL_DATA)
pub(crate) const COMMAND_HIGH: Field = Field { byte: 6, mask: 0b0000_0011, shift: 0 };

/// Low half of the 4-bit command (byte 7, bits 7-6)
pub(crate) const COMMAND_LOW: Field = Field { byte: 7, mask: 0b1100_0000, shift: 6 };

/// First payload data byte (byte 7, bits 5-0)
pub(crate) const FIRST_DATA: Field = Field { byte: 7, mask: 0b0011_1111, shift: 0 };
