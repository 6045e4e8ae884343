//! Telegram constants and field enumerations.
//!
//! The 2- and 4-bit wire codes of the telegram header are modeled as
//! `repr(u8)` enums with total `from_u8` conversions: the input is masked
//! to the field width first, so decoding never fails and never needs an
//! `Option`. This mirrors how the bus itself behaves - every bit pattern
//! in a field position means something.

/// Length of a TP1 telegram buffer in bytes
pub const TELEGRAM_LENGTH: usize = 24;

/// Default control byte (byte 0) after `clear()`:
/// standard frame, not repeated, normal priority
pub const DEFAULT_CONTROL_FIELD: u8 = 0b1011_1100;

/// Default routing byte (byte 5) after `clear()`:
/// group target flag set, routing counter 6, length nibble 1
pub const DEFAULT_ROUTING_FIELD: u8 = 0b1110_0001;

/// Maximum decodable payload length (the 4-bit nibble stores `length - 1`)
pub const MAX_PAYLOAD_LENGTH: u8 = 16;

/// Width of the text payload window at bytes 8-21
pub const TEXT_LENGTH: usize = 14;

// =============================================================================
// KNX Priority
// =============================================================================

/// KNX message priority (byte 0, bits 3-2).
///
/// The wire codes are a fixed enumeration, not a monotonic scale: `Alarm`
/// carries a numerically smaller code than `Normal`. The type deliberately
/// implements no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Priority {
    /// System priority
    System = 0b00,
    /// High priority
    High = 0b01,
    /// Alarm priority
    Alarm = 0b10,
    /// Normal priority (default)
    Normal = 0b11,
}

impl Priority {
    /// Convert u8 to Priority
    pub const fn from_u8(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::System,
            0b01 => Self::High,
            0b10 => Self::Alarm,
            _ => Self::Normal,
        }
    }

    /// Convert Priority to u8
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Normal
    }
}

// =============================================================================
// APCI Commands
// =============================================================================

/// Application-layer command (APCI), 4 bits split across bytes 6 and 7.
///
/// The two high bits live in byte 6 bits 1-0, the two low bits in byte 7
/// bits 7-6. All sixteen codes are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Command {
    /// `GroupValue_Read` - request a group value
    GroupValueRead = 0b0000,
    /// `GroupValue_Response` - answer to a group read
    GroupValueResponse = 0b0001,
    /// `GroupValue_Write` - write a group value
    GroupValueWrite = 0b0010,
    /// `IndividualAddr_Write` - assign an individual address
    IndividualAddrWrite = 0b0011,
    /// `IndividualAddr_Request` - ask devices in programming mode
    IndividualAddrRequest = 0b0100,
    /// `IndividualAddr_Response` - answer to an address request
    IndividualAddrResponse = 0b0101,
    /// `ADC_Read` - read an analog/digital converter channel
    AdcRead = 0b0110,
    /// `ADC_Response` - ADC read answer
    AdcResponse = 0b0111,
    /// `Memory_Read` - read device memory
    MemoryRead = 0b1000,
    /// `Memory_Response` - memory read answer
    MemoryResponse = 0b1001,
    /// `Memory_Write` - write device memory
    MemoryWrite = 0b1010,
    /// `UserMessage` - user-defined message
    UserMessage = 0b1011,
    /// `MaskVersion_Read` - read the device mask version
    MaskVersionRead = 0b1100,
    /// `MaskVersion_Response` - mask version answer
    MaskVersionResponse = 0b1101,
    /// `Restart` - restart the device
    Restart = 0b1110,
    /// `Escape` - escape code for extended commands
    Escape = 0b1111,
}

impl Command {
    /// Convert u8 to Command
    pub const fn from_u8(value: u8) -> Self {
        match value & 0b1111 {
            0b0000 => Self::GroupValueRead,
            0b0001 => Self::GroupValueResponse,
            0b0010 => Self::GroupValueWrite,
            0b0011 => Self::IndividualAddrWrite,
            0b0100 => Self::IndividualAddrRequest,
            0b0101 => Self::IndividualAddrResponse,
            0b0110 => Self::AdcRead,
            0b0111 => Self::AdcResponse,
            0b1000 => Self::MemoryRead,
            0b1001 => Self::MemoryResponse,
            0b1010 => Self::MemoryWrite,
            0b1011 => Self::UserMessage,
            0b1100 => Self::MaskVersionRead,
            0b1101 => Self::MaskVersionResponse,
            0b1110 => Self::Restart,
            _ => Self::Escape,
        }
    }

    /// Convert Command to u8
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// TPCI Communication Type
// =============================================================================

/// Transport-layer communication type (byte 6, bits 7-6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CommunicationType {
    /// UDP - unnumbered data packet
    UnnumberedData = 0b00,
    /// NDP - numbered data packet
    NumberedData = 0b01,
    /// UCD - unnumbered control data
    UnnumberedControl = 0b10,
    /// NCD - numbered control data
    NumberedControl = 0b11,
}

impl CommunicationType {
    /// Convert u8 to `CommunicationType`
    pub const fn from_u8(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::UnnumberedData,
            0b01 => Self::NumberedData,
            0b10 => Self::UnnumberedControl,
            _ => Self::NumberedControl,
        }
    }

    /// Convert `CommunicationType` to u8
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// Control Data
// =============================================================================

/// Control data for connection-oriented telegrams (byte 6, bits 1-0).
///
/// Shares its bit position with the high half of [`Command`]; a telegram
/// carries one or the other depending on its communication type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ControlData {
    /// Open a transport-layer connection
    Connect = 0b00,
    /// Close the transport-layer connection
    Disconnect = 0b01,
    /// Positive confirmation (ACK)
    PositiveConfirm = 0b10,
    /// Negative confirmation (NAK)
    NegativeConfirm = 0b11,
}

impl ControlData {
    /// Convert u8 to `ControlData`
    pub const fn from_u8(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Connect,
            0b01 => Self::Disconnect,
            0b10 => Self::PositiveConfirm,
            _ => Self::NegativeConfirm,
        }
    }

    /// Convert `ControlData` to u8
    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

// =============================================================================
// Dimming Step Code
// =============================================================================

/// Step code of the dimming datapoint (3 bits).
///
/// Encodes how many intervals the dimming range is divided into; `Break`
/// stops a running dimming ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StepCode {
    /// Stop dimming
    Break = 0b000,
    /// 1 interval (100%)
    Intervals1 = 0b001,
    /// 2 intervals (50%)
    Intervals2 = 0b010,
    /// 4 intervals (25%)
    Intervals4 = 0b011,
    /// 8 intervals (12.5%)
    Intervals8 = 0b100,
    /// 16 intervals (6.25%)
    Intervals16 = 0b101,
    /// 32 intervals (3.125%)
    Intervals32 = 0b110,
    /// 64 intervals (1.5625%)
    Intervals64 = 0b111,
}

impl StepCode {
    /// Convert u8 to `StepCode`
    pub const fn from_u8(value: u8) -> Self {
        match value & 0b111 {
            0b000 => Self::Break,
            0b001 => Self::Intervals1,
            0b010 => Self::Intervals2,
            0b011 => Self::Intervals4,
            0b100 => Self::Intervals8,
            0b101 => Self::Intervals16,
            0b110 => Self::Intervals32,
            _ => Self::Intervals64,
        }
    }

    /// Convert `StepCode` to u8
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Number of intervals this code divides the dimming range into
    /// (0 for `Break`)
    pub const fn intervals(self) -> u8 {
        match self {
            Self::Break => 0,
            Self::Intervals1 => 1,
            Self::Intervals2 => 2,
            Self::Intervals4 => 4,
            Self::Intervals8 => 8,
            Self::Intervals16 => 16,
            Self::Intervals32 => 32,
            Self::Intervals64 => 64,
        }
    }
}
