//! Convenience macros for working with KNX addresses.
//!
//! This module provides declarative macros that simplify common KNX
//! operations and make code more readable and concise.

/// Creates a [`GroupAddress`](crate::addressing::GroupAddress) from 3-level notation.
///
/// The `ga!` macro provides a clean, intuitive syntax for creating group
/// addresses using the familiar KNX 3-level notation (main/middle/sub).
///
/// # Syntax
///
/// ```text
/// ga!(main/middle/sub)
/// ```
///
/// Where:
/// - `main`: Main group (0-31)
/// - `middle`: Middle group (0-7)
/// - `sub`: Sub group (0-255)
///
/// # Examples
///
/// ```
/// use knx_telegram::ga;
///
/// let light_switch = ga!(2/1/5);
/// assert_eq!(light_switch.main(), 2);
/// assert_eq!(light_switch.middle(), 1);
/// assert_eq!(light_switch.sub(), 5);
/// ```
///
/// # Compile-Time Validation
///
/// The macro validates address components at compile time:
///
/// ```compile_fail
/// use knx_telegram::ga;
///
/// // This will fail to compile: main group > 31
/// let addr = ga!(32/0/0);
/// ```
///
/// ```compile_fail
/// use knx_telegram::ga;
///
/// // This will fail to compile: middle group > 7
/// let addr = ga!(1/8/0);
/// ```
#[macro_export]
macro_rules! ga {
    ($main:literal / $middle:literal / $sub:literal) => {{
        // Compile-time validation
        const _: () = {
            if $main > 31 {
                panic!("Main group must be 0-31");
            }
            if $middle > 7 {
                panic!("Middle group must be 0-7");
            }
            if $sub > 255 {
                panic!("Sub group must be 0-255");
            }
        };

        // 5 bits main, 3 bits middle, 8 bits sub
        const RAW: u16 = (($main & 0x1F) << 11) | (($middle & 0x07) << 8) | ($sub & 0xFF);
        $crate::addressing::GroupAddress::from(RAW)
    }};
}
