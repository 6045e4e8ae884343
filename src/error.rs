//! Error types for KNX telegram operations.
//!
//! This module provides structured error types with backtraces (when std is
//! enabled) and helper methods for error information. Telegram field accessors
//! never fail; errors only arise when constructing addresses from out-of-range
//! components or loading a telegram from a too-short byte slice.

use core::fmt;

#[cfg(feature = "std")]
use std::backtrace::Backtrace;

/// Result type alias for KNX operations.
pub type Result<T> = core::result::Result<T, KnxError>;

// =============================================================================
// Error Kind Enums (Internal)
// =============================================================================

/// Frame error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum FrameErrorKind {
    TooShort,
    BufferTooSmall,
}

/// Addressing error variants (internal)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum AddressErrorKind {
    InvalidGroupAddress,
    InvalidIndividualAddress,
    OutOfRange,
}

// =============================================================================
// Main Error Type
// =============================================================================

/// KNX telegram error types.
///
/// This is the main error type returned by the fallible operations of the
/// crate. It contains a backtrace (when the std feature is enabled) and
/// detailed error information through helper methods.
#[derive(Debug)]
#[cfg_attr(all(feature = "defmt", not(feature = "std")), derive(defmt::Format))]
pub enum KnxError {
    /// Frame-level errors (short input slice, undersized output buffer)
    Frame(FrameError),
    /// Addressing errors (invalid address format, component out of range)
    Addressing(AddressError),
}

// =============================================================================
// Structured Error Types
// =============================================================================

/// Frame error with optional backtrace
#[derive(Debug)]
#[cfg_attr(all(feature = "defmt", not(feature = "std")), derive(defmt::Format))]
pub struct FrameError {
    kind: FrameErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl FrameError {
    pub(crate) fn new(kind: FrameErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if the input slice was shorter than a full telegram
    pub fn is_too_short(&self) -> bool {
        matches!(self.kind, FrameErrorKind::TooShort)
    }

    /// Check if an output buffer was too small
    pub fn is_buffer_too_small(&self) -> bool {
        matches!(self.kind, FrameErrorKind::BufferTooSmall)
    }
}

/// Addressing error with optional backtrace
#[derive(Debug)]
#[cfg_attr(all(feature = "defmt", not(feature = "std")), derive(defmt::Format))]
pub struct AddressError {
    kind: AddressErrorKind,
    #[cfg(feature = "std")]
    backtrace: Backtrace,
}

impl AddressError {
    pub(crate) fn new(kind: AddressErrorKind) -> Self {
        Self {
            kind,
            #[cfg(feature = "std")]
            backtrace: Backtrace::capture(),
        }
    }

    /// Check if an address component is out of range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind, AddressErrorKind::OutOfRange)
    }

    /// Check if a group address string failed to parse
    pub fn is_invalid_group_address(&self) -> bool {
        matches!(self.kind, AddressErrorKind::InvalidGroupAddress)
    }

    /// Check if an individual address string failed to parse
    pub fn is_invalid_individual_address(&self) -> bool {
        matches!(self.kind, AddressErrorKind::InvalidIndividualAddress)
    }
}

// =============================================================================
// Convenience Constructors for KnxError
// =============================================================================

impl KnxError {
    // Frame errors
    pub(crate) fn frame_too_short() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::TooShort))
    }

    pub(crate) fn buffer_too_small() -> Self {
        Self::Frame(FrameError::new(FrameErrorKind::BufferTooSmall))
    }

    // Addressing errors
    pub(crate) fn invalid_group_address() -> Self {
        Self::Addressing(AddressError::new(AddressErrorKind::InvalidGroupAddress))
    }

    pub(crate) fn invalid_individual_address() -> Self {
        Self::Addressing(AddressError::new(AddressErrorKind::InvalidIndividualAddress))
    }

    pub(crate) fn address_out_of_range() -> Self {
        Self::Addressing(AddressError::new(AddressErrorKind::OutOfRange))
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl fmt::Display for KnxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnxError::Frame(e) => write!(f, "Frame error: {:?}", e.kind),
            KnxError::Addressing(e) => write!(f, "Addressing error: {:?}", e.kind),
        }
    }
}

// Implement std::error::Error for std-based applications
#[cfg(feature = "std")]
impl std::error::Error for KnxError {}
