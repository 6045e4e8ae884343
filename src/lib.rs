#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! ## Crate layout
//!
//! - [`telegram`] - the 24-byte telegram buffer and its field accessors
//! - [`addressing`] - typed group and individual addresses
//! - [`error`] - error types for the fallible construction paths
//!
//! Everything else (bus transport, scheduling, device semantics) lives
//! outside this crate; the contract with those layers is a `[u8; 24]` in
//! and a `[u8; 24]` out.
//!
//! ## Example
//!
//! ```rust
//! use knx_telegram::{Command, Telegram};
//!
//! // Decode a frame captured from the bus
//! let raw: [u8; 24] = [
//!     0xBC, 0x11, 0x0A, 0x13, 0x28, 0xE1, 0x00, 0x81,
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//! ];
//! let telegram = Telegram::from(raw);
//!
//! assert!(telegram.is_target_group());
//! assert_eq!(telegram.command(), Command::GroupValueWrite);
//! assert!(telegram.bool_value());
//! ```

// Macro modules (must be declared before use)
#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod addressing;
pub mod error;
pub mod telegram;

// Re-export commonly used types
#[doc(inline)]
pub use addressing::{GroupAddress, IndividualAddress};
#[doc(inline)]
pub use error::{KnxError, Result};
#[doc(inline)]
pub use telegram::{Command, Priority, Telegram};
