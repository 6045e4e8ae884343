//! KNX TP1 telegram buffer and field accessors.
//!
//! A telegram is a fixed 24-byte buffer whose bytes carry densely packed
//! sub-byte fields. Every field is a view: getters decode from the buffer
//! on demand, setters mask-and-or in place, and no state exists outside
//! the 24 bytes. Transports hand the buffer in and out verbatim.
//!
//! ## Buffer Layout
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │ Byte 0   Control: repeat flag, priority           │
//! ├───────────────────────────────────────────────────┤
//! │ Bytes 1-2   Source address (individual)           │
//! ├───────────────────────────────────────────────────┤
//! │ Bytes 3-4   Target address (group or individual)  │
//! ├───────────────────────────────────────────────────┤
//! │ Byte 5   Target type | routing cnt | length - 1   │
//! ├───────────────────────────────────────────────────┤
//! │ Byte 6   Comm type | sequence | control data      │
//! ├───────────────────────────────────────────────────┤
//! │ Byte 7   Command low bits | first data byte       │
//! ├───────────────────────────────────────────────────┤
//! │ Bytes 8-21   Extended payload (datapoint values)  │
//! ├───────────────────────────────────────────────────┤
//! │ Bytes 22-23   Unused by the accessors             │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! The XOR checksum over bytes 0-6 is never stored in the buffer;
//! [`Telegram::calculate_checksum`] computes it on request and the caller
//! decides whether to append or compare it.
//!
//! ## Example
//!
//! ```
//! use knx_telegram::{ga, Command, Telegram};
//! use knx_telegram::addressing::IndividualAddress;
//!
//! let mut telegram = Telegram::new();
//! telegram.set_source(IndividualAddress::new(1, 1, 10)?);
//! telegram.set_target_group(ga!(2/3/40));
//! telegram.set_command(Command::GroupValueWrite);
//! telegram.set_bool(true);
//!
//! assert_eq!(telegram.as_raw()[0], 0xBC);
//! assert_eq!(telegram.calculate_checksum(), 0x7D);
//! # Ok::<(), knx_telegram::KnxError>(())
//! ```

pub mod constants;
pub mod payload;

pub(crate) mod fields;

pub use constants::{Command, CommunicationType, ControlData, Priority, StepCode};
pub use payload::{Date, StepCommand, TimeOfDay};

use core::fmt;

use crate::addressing::{GroupAddress, IndividualAddress};
use crate::error::KnxError;

use constants::{
    DEFAULT_CONTROL_FIELD, DEFAULT_ROUTING_FIELD, MAX_PAYLOAD_LENGTH, TELEGRAM_LENGTH,
};
use fields::{
    COMMAND_HIGH, COMMAND_LOW, COMM_TYPE, CONTROL_DATA, FIRST_DATA, PAYLOAD_LENGTH, PRIORITY,
    REPEAT, ROUTING_COUNTER, SEQUENCE, TARGET_TYPE,
};

/// One KNX bus telegram.
///
/// Owns exactly 24 bytes; every accessor reads or writes bit ranges of
/// that buffer. None of the accessors fail: setters truncate out-of-range
/// values to the field width, getters decode whatever bits are present.
///
/// # Examples
///
/// ```
/// use knx_telegram::Telegram;
///
/// let telegram = Telegram::new();
/// assert!(!telegram.is_repeated());
/// assert_eq!(telegram.routing_counter(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Telegram {
    buffer: [u8; TELEGRAM_LENGTH],
}

impl Telegram {
    /// Create a telegram in the canonical cleared state.
    ///
    /// Byte 0 is [`DEFAULT_CONTROL_FIELD`](constants::DEFAULT_CONTROL_FIELD),
    /// byte 5 is [`DEFAULT_ROUTING_FIELD`](constants::DEFAULT_ROUTING_FIELD)
    /// and every other byte is zero. Bus devices expect exactly this
    /// framing pattern, so the two defaults are reproduced bit for bit.
    pub const fn new() -> Self {
        let mut buffer = [0u8; TELEGRAM_LENGTH];
        buffer[0] = DEFAULT_CONTROL_FIELD;
        buffer[5] = DEFAULT_ROUTING_FIELD;
        Self { buffer }
    }

    /// Reset the telegram to the cleared state in place.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Wrap a raw 24-byte frame without any validation.
    #[inline(always)]
    pub const fn from_raw(raw: [u8; TELEGRAM_LENGTH]) -> Self {
        Self { buffer: raw }
    }

    /// Borrow the raw buffer for transmission.
    #[inline(always)]
    pub const fn as_raw(&self) -> &[u8; TELEGRAM_LENGTH] {
        &self.buffer
    }

    // -------------------------------------------------------------------------
    // Control field (byte 0)
    // -------------------------------------------------------------------------

    /// Check whether this telegram is a repetition of an earlier one.
    ///
    /// The wire bit means "not repeated" when set, so a cleared telegram
    /// reports `false` here.
    #[inline(always)]
    pub const fn is_repeated(&self) -> bool {
        REPEAT.get(&self.buffer) == 0
    }

    /// Mark the telegram as repeated (or not).
    #[inline]
    pub fn set_repeated(&mut self, repeated: bool) {
        REPEAT.set(&mut self.buffer, u8::from(!repeated));
    }

    /// Get the priority.
    #[inline(always)]
    pub const fn priority(&self) -> Priority {
        Priority::from_u8(PRIORITY.get(&self.buffer))
    }

    /// Set the priority.
    #[inline]
    pub fn set_priority(&mut self, priority: Priority) {
        PRIORITY.set(&mut self.buffer, priority.to_u8());
    }

    // -------------------------------------------------------------------------
    // Addressing (bytes 1-4, flag bit in byte 5)
    // -------------------------------------------------------------------------

    /// Set the source address (bytes 1-2, big-endian).
    pub fn set_source(&mut self, addr: IndividualAddress) {
        self.buffer[1..3].copy_from_slice(&addr.raw().to_be_bytes());
    }

    /// Get the source address.
    pub fn source(&self) -> IndividualAddress {
        IndividualAddress::from(u16::from_be_bytes([self.buffer[1], self.buffer[2]]))
    }

    /// Set a group target (bytes 3-4) and mark the target type as group.
    pub fn set_target_group(&mut self, addr: GroupAddress) {
        self.buffer[3..5].copy_from_slice(&addr.raw().to_be_bytes());
        TARGET_TYPE.set(&mut self.buffer, 1);
    }

    /// Decode bytes 3-4 as a group address.
    ///
    /// No flag check happens here: reading the wrong variant simply
    /// reinterprets the same two bytes. Use [`is_target_group`] to pick
    /// the variant the sender meant.
    ///
    /// [`is_target_group`]: Telegram::is_target_group
    pub fn target_group(&self) -> GroupAddress {
        GroupAddress::from(u16::from_be_bytes([self.buffer[3], self.buffer[4]]))
    }

    /// Set an individual target (bytes 3-4) and clear the group flag.
    pub fn set_target_individual(&mut self, addr: IndividualAddress) {
        self.buffer[3..5].copy_from_slice(&addr.raw().to_be_bytes());
        TARGET_TYPE.set(&mut self.buffer, 0);
    }

    /// Decode bytes 3-4 as an individual address (no flag check).
    pub fn target_individual(&self) -> IndividualAddress {
        IndividualAddress::from(u16::from_be_bytes([self.buffer[3], self.buffer[4]]))
    }

    /// Check whether the target-type flag marks a group target.
    ///
    /// The last target setter wins: `set_target_group` forces the flag on,
    /// `set_target_individual` forces it off.
    #[inline(always)]
    pub const fn is_target_group(&self) -> bool {
        TARGET_TYPE.get(&self.buffer) != 0
    }

    // -------------------------------------------------------------------------
    // Routing counter and payload length (byte 5)
    // -------------------------------------------------------------------------

    /// Get the routing counter (0-7).
    #[inline(always)]
    pub const fn routing_counter(&self) -> u8 {
        ROUTING_COUNTER.get(&self.buffer)
    }

    /// Set the routing counter, truncated to 3 bits.
    ///
    /// Only the target-type flag in byte 5 survives this write; the length
    /// nibble is cleared. Set the payload length after the routing counter,
    /// not before.
    pub fn set_routing_counter(&mut self, counter: u8) {
        self.buffer[5] = (self.buffer[5] & 0b1000_0000) | ((counter & 0b0000_0111) << 4);
    }

    /// Get the payload length (1-16).
    ///
    /// The nibble stores `length - 1`; decoded values are clamped to 16.
    #[inline]
    pub fn payload_length(&self) -> u8 {
        (PAYLOAD_LENGTH.get(&self.buffer) + 1).min(MAX_PAYLOAD_LENGTH)
    }

    /// Set the payload length.
    ///
    /// Stores `length - 1` truncated to the 4-bit nibble; the target-type
    /// flag and routing counter are preserved. A length of 0 wraps to 16.
    pub fn set_payload_length(&mut self, length: u8) {
        PAYLOAD_LENGTH.set(&mut self.buffer, length.wrapping_sub(1));
    }

    // -------------------------------------------------------------------------
    // Application layer (bytes 6-7)
    // -------------------------------------------------------------------------

    /// Get the application-layer command.
    pub fn command(&self) -> Command {
        Command::from_u8((COMMAND_HIGH.get(&self.buffer) << 2) | COMMAND_LOW.get(&self.buffer))
    }

    /// Set the application-layer command.
    ///
    /// The 4 command bits are split: the high pair lands in byte 6, the
    /// low pair in byte 7.
    pub fn set_command(&mut self, command: Command) {
        let bits = command.to_u8();
        COMMAND_HIGH.set(&mut self.buffer, bits >> 2);
        COMMAND_LOW.set(&mut self.buffer, bits & 0b11);
    }

    /// Get the transport-layer communication type.
    #[inline(always)]
    pub const fn communication_type(&self) -> CommunicationType {
        CommunicationType::from_u8(COMM_TYPE.get(&self.buffer))
    }

    /// Set the transport-layer communication type.
    #[inline]
    pub fn set_communication_type(&mut self, comm_type: CommunicationType) {
        COMM_TYPE.set(&mut self.buffer, comm_type.to_u8());
    }

    /// Get the sequence number (0-15).
    #[inline(always)]
    pub const fn sequence_number(&self) -> u8 {
        SEQUENCE.get(&self.buffer)
    }

    /// Set the sequence number, truncated to 4 bits.
    ///
    /// Sequencing itself belongs to the caller's connection state machine;
    /// the telegram only carries the bits.
    #[inline]
    pub fn set_sequence_number(&mut self, sequence: u8) {
        SEQUENCE.set(&mut self.buffer, sequence);
    }

    /// Get the control data of a connection-oriented telegram.
    #[inline(always)]
    pub const fn control_data(&self) -> ControlData {
        ControlData::from_u8(CONTROL_DATA.get(&self.buffer))
    }

    /// Set the control data. Shares bits with the command high pair.
    #[inline]
    pub fn set_control_data(&mut self, control_data: ControlData) {
        CONTROL_DATA.set(&mut self.buffer, control_data.to_u8());
    }

    /// Get the first payload data byte (byte 7, low 6 bits).
    #[inline(always)]
    pub const fn first_data_byte(&self) -> u8 {
        FIRST_DATA.get(&self.buffer)
    }

    /// Set the first payload data byte, truncated to 6 bits.
    /// The command low bits in the same byte are preserved.
    #[inline]
    pub fn set_first_data_byte(&mut self, value: u8) {
        FIRST_DATA.set(&mut self.buffer, value);
    }

    // -------------------------------------------------------------------------
    // Checksum
    // -------------------------------------------------------------------------

    /// Compute the XOR checksum over bytes 0-6.
    ///
    /// The result is not stored anywhere; appending it to an outgoing
    /// frame or comparing it against a received trailer byte is the
    /// caller's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use knx_telegram::Telegram;
    ///
    /// assert_eq!(Telegram::new().calculate_checksum(), 0x5D);
    /// ```
    pub fn calculate_checksum(&self) -> u8 {
        self.buffer[..7].iter().fold(0, |acc, &byte| acc ^ byte)
    }
}

impl Default for Telegram {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[u8; TELEGRAM_LENGTH]> for Telegram {
    fn from(raw: [u8; TELEGRAM_LENGTH]) -> Self {
        Self::from_raw(raw)
    }
}

impl TryFrom<&[u8]> for Telegram {
    type Error = KnxError;

    /// Copy the first 24 bytes of a received slice into a telegram.
    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        if data.len() < TELEGRAM_LENGTH {
            crate::knx_log!(warn, "telegram slice too short: {} bytes", data.len());
            return Err(KnxError::frame_too_short());
        }
        let mut buffer = [0u8; TELEGRAM_LENGTH];
        buffer.copy_from_slice(&data[..TELEGRAM_LENGTH]);
        let telegram = Self { buffer };
        crate::knx_log!(
            trace,
            "telegram loaded, checksum={}",
            telegram.calculate_checksum()
        );
        Ok(telegram)
    }
}

impl fmt::Display for Telegram {
    /// One-line summary: source, target with its flagged variant, command
    /// and payload length.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> ", self.source())?;
        if self.is_target_group() {
            write!(f, "{}", self.target_group())?;
        } else {
            write!(f, "{}", self.target_individual())?;
        }
        write!(f, " {:?} len={}", self.command(), self.payload_length())
    }
}
