//! Unified logging macros.
//!
//! This module provides a unified logging interface that automatically
//! selects between `log::` and `defmt::` based on the active feature flags,
//! and compiles to nothing when neither backend is enabled.
//!
//! # Usage
//!
//! ```rust,ignore
//! knx_log!(trace, "telegram loaded: source={}", source);
//! knx_log!(warn, "frame slice too short");
//! ```
//!
//! # Feature Flags
//!
//! - `log` - Uses the `log` crate (host-side logging)
//! - `defmt` (without `log`) - Uses `defmt::` (efficient for embedded)
//! - Neither - Every invocation expands to an empty block

/// Unified logging macro - selects log:: or defmt:: based on features
///
/// Format arguments must stay within the subset both backends accept
/// (plain `{}` placeholders with primitive values).
#[macro_export]
#[cfg(feature = "log")]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { log::info!($($arg)*) };
    (debug, $($arg:tt)*) => { log::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { log::warn!($($arg)*) };
    (error, $($arg:tt)*) => { log::error!($($arg)*) };
    (trace, $($arg:tt)*) => { log::trace!($($arg)*) };
}

#[macro_export]
#[cfg(all(feature = "defmt", not(feature = "log")))]
macro_rules! knx_log {
    (info, $($arg:tt)*) => { defmt::info!($($arg)*) };
    (debug, $($arg:tt)*) => { defmt::debug!($($arg)*) };
    (warn, $($arg:tt)*) => { defmt::warn!($($arg)*) };
    (error, $($arg:tt)*) => { defmt::error!($($arg)*) };
    (trace, $($arg:tt)*) => { defmt::trace!($($arg)*) };
}

#[macro_export]
#[cfg(not(any(feature = "log", feature = "defmt")))]
macro_rules! knx_log {
    (info, $($arg:tt)*) => {{}};
    (debug, $($arg:tt)*) => {{}};
    (warn, $($arg:tt)*) => {{}};
    (error, $($arg:tt)*) => {{}};
    (trace, $($arg:tt)*) => {{}};
}
