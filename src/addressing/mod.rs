//! KNX addressing system.
//!
//! KNX uses two types of addresses:
//! - Individual addresses for physical devices (Area.Line.Member)
//! - Group addresses for logical grouping (Main/Middle/Sub)
//!
//! A telegram always carries an individual source address in bytes 1-2.
//! Bytes 3-4 hold either kind of target; the flag bit in byte 5 selects
//! which one subsequent reads decode.

pub mod group;
pub mod individual;

pub use group::GroupAddress;
pub use individual::IndividualAddress;
