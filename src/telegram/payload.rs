//! Typed payload encodings on top of the raw telegram buffer.
//!
//! Small values (bool, 4-bit, step commands) share byte 7 with the low
//! command bits; everything larger starts at byte 8. Each multi-byte
//! setter also updates the payload length nibble to the number of data
//! bytes plus one, so callers normally never touch the length directly.

use heapless::String;

use super::constants::{StepCode, TEXT_LENGTH};
use super::Telegram;

/// Dimming step command: a direction and a step code.
///
/// Packed into 4 bits of the first data byte, direction above the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepCommand {
    /// Dim up when set, down when cleared
    pub increase: bool,
    /// Step size, or `Break` to stop a ramp
    pub step: StepCode,
}

/// Time of day with a weekday, packed into three payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    /// Day of week, 3 bits (0 = no day, 1 = Monday .. 7 = Sunday)
    pub weekday: u8,
    /// Hour, 5 bits (0-23)
    pub hour: u8,
    /// Minute, 6 bits (0-59)
    pub minute: u8,
    /// Second, 6 bits (0-59)
    pub second: u8,
}

/// Calendar date packed into two payload bytes.
///
/// The wire format keeps only the low 4 bits of the year, so years
/// round-trip modulo 16. Receivers that need a full year must resolve
/// it from context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Date {
    /// Year, low 4 bits only
    pub year: u8,
    /// Month, 4 bits (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
}

/// Round a magnitude into an 11-bit mantissa at the given exponent.
///
/// `as u16` truncates toward zero, so half an ulp is added first to get
/// round-to-nearest without any float intrinsics.
fn scaled_mantissa(magnitude: f32, exponent: u8) -> u16 {
    (magnitude / (1u32 << exponent) as f32 * 2048.0 + 0.5) as u16
}

impl Telegram {
    // -------------------------------------------------------------------------
    // First-data-byte values (byte 7, shared with the command low bits)
    // -------------------------------------------------------------------------

    /// Store a boolean in the first data byte.
    #[inline]
    pub fn set_bool(&mut self, value: bool) {
        self.set_first_data_byte(u8::from(value));
    }

    /// Read the low bit of the first data byte as a boolean.
    #[inline]
    pub fn bool_value(&self) -> bool {
        self.first_data_byte() & 0b1 != 0
    }

    /// Store a 4-bit value in the first data byte.
    #[inline]
    pub fn set_u4(&mut self, value: u8) {
        self.set_first_data_byte(value & 0x0F);
    }

    /// Read the low 4 bits of the first data byte.
    #[inline]
    pub fn u4_value(&self) -> u8 {
        self.first_data_byte() & 0x0F
    }

    /// Store a dimming step command in the first data byte.
    pub fn set_step_command(&mut self, command: StepCommand) {
        self.set_first_data_byte((u8::from(command.increase) << 3) | command.step.to_u8());
    }

    /// Read the first data byte as a dimming step command.
    pub fn step_command(&self) -> StepCommand {
        let bits = self.first_data_byte();
        StepCommand {
            increase: bits & 0b1000 != 0,
            step: StepCode::from_u8(bits),
        }
    }

    // -------------------------------------------------------------------------
    // Integers (bytes 8+)
    // -------------------------------------------------------------------------

    /// Store an unsigned 8-bit value in byte 8 and set the length to 2.
    pub fn set_u8(&mut self, value: u8) {
        self.buffer[8] = value;
        self.set_payload_length(2);
    }

    /// Read byte 8 as an unsigned 8-bit value.
    #[inline]
    pub fn u8_value(&self) -> u8 {
        self.buffer[8]
    }

    /// Store an unsigned 16-bit value big-endian in bytes 8-9.
    pub fn set_u16(&mut self, value: u16) {
        self.buffer[8..10].copy_from_slice(&value.to_be_bytes());
        self.set_payload_length(3);
    }

    /// Read bytes 8-9 as a big-endian unsigned 16-bit value.
    pub fn u16_value(&self) -> u16 {
        u16::from_be_bytes([self.buffer[8], self.buffer[9]])
    }

    /// Store a signed 16-bit value big-endian in bytes 8-9.
    pub fn set_i16(&mut self, value: i16) {
        self.buffer[8..10].copy_from_slice(&value.to_be_bytes());
        self.set_payload_length(3);
    }

    /// Read bytes 8-9 as a big-endian signed 16-bit value.
    pub fn i16_value(&self) -> i16 {
        i16::from_be_bytes([self.buffer[8], self.buffer[9]])
    }

    // -------------------------------------------------------------------------
    // 16-bit float (sign, 3-bit exponent, 11-bit mantissa)
    // -------------------------------------------------------------------------

    /// Store a value as the compact 16-bit float in bytes 8-9.
    ///
    /// The smallest exponent whose rounded mantissa fits 11 bits is
    /// chosen, so small magnitudes keep the most precision. Zero encodes
    /// as two zero bytes. Magnitudes beyond the encodable range lose
    /// their top mantissa bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use knx_telegram::Telegram;
    ///
    /// let mut telegram = Telegram::new();
    /// telegram.set_float16(21.5);
    /// assert_eq!(telegram.float16_value(), 21.5);
    /// ```
    pub fn set_float16(&mut self, value: f32) {
        if value == 0.0 {
            self.buffer[8] = 0;
            self.buffer[9] = 0;
            self.set_payload_length(3);
            return;
        }
        let (sign, magnitude) = if value < 0.0 { (1u8, -value) } else { (0u8, value) };

        let mut exponent = 0u8;
        let mut mantissa = scaled_mantissa(magnitude, exponent);
        while mantissa > 2047 && exponent < 7 {
            exponent += 1;
            mantissa = scaled_mantissa(magnitude, exponent);
        }

        self.buffer[8] = (sign << 7) | ((exponent & 0b0111) << 3) | (((mantissa >> 8) as u8) & 0b0111);
        self.buffer[9] = (mantissa & 0xFF) as u8;
        self.set_payload_length(3);
    }

    /// Decode bytes 8-9 as the compact 16-bit float.
    pub fn float16_value(&self) -> f32 {
        let sign = self.buffer[8] & 0b1000_0000 != 0;
        let exponent = (self.buffer[8] >> 3) & 0b1111;
        let mantissa = (u16::from(self.buffer[8] & 0b0111) << 8) | u16::from(self.buffer[9]);
        let value = f32::from(mantissa) * (1u32 << exponent) as f32 / 2048.0;
        if sign {
            -value
        } else {
            value
        }
    }

    // -------------------------------------------------------------------------
    // Time and date
    // -------------------------------------------------------------------------

    /// Store a time of day in bytes 8-10 and set the length to 4.
    /// Each component is truncated to its field width.
    pub fn set_time(&mut self, time: TimeOfDay) {
        self.buffer[8] = ((time.weekday & 0b0111) << 5) | (time.hour & 0b0001_1111);
        self.buffer[9] = time.minute & 0b0011_1111;
        self.buffer[10] = time.second & 0b0011_1111;
        self.set_payload_length(4);
    }

    /// Decode bytes 8-10 as a time of day.
    pub fn time_value(&self) -> TimeOfDay {
        TimeOfDay {
            weekday: (self.buffer[8] >> 5) & 0b0111,
            hour: self.buffer[8] & 0b0001_1111,
            minute: self.buffer[9] & 0b0011_1111,
            second: self.buffer[10] & 0b0011_1111,
        }
    }

    /// Store a date in bytes 8-9 and set the length to 3.
    ///
    /// Only the low 4 bits of the year survive; see [`Date`].
    pub fn set_date(&mut self, date: Date) {
        self.buffer[8] = ((date.year & 0x0F) << 4) | (date.month & 0x0F);
        self.buffer[9] = date.day;
        self.set_payload_length(3);
    }

    /// Decode bytes 8-9 as a date.
    pub fn date_value(&self) -> Date {
        Date {
            year: (self.buffer[8] >> 4) & 0x0F,
            month: self.buffer[8] & 0x0F,
            day: self.buffer[9],
        }
    }

    // -------------------------------------------------------------------------
    // 32-bit float and text
    // -------------------------------------------------------------------------

    /// Store an IEEE 754 float in bytes 8-11 and set the length to 5.
    /// The wire order is the float's bytes reversed, i.e. big-endian.
    pub fn set_float32(&mut self, value: f32) {
        self.buffer[8..12].copy_from_slice(&value.to_be_bytes());
        self.set_payload_length(5);
    }

    /// Decode bytes 8-11 as a big-endian IEEE 754 float.
    pub fn float32_value(&self) -> f32 {
        f32::from_be_bytes([
            self.buffer[8],
            self.buffer[9],
            self.buffer[10],
            self.buffer[11],
        ])
    }

    /// Store up to 14 bytes of text in bytes 8-21.
    ///
    /// The window is zero-filled first, longer input is truncated. The
    /// payload length nibble is left alone; callers sending text frames
    /// set it themselves.
    pub fn set_text(&mut self, text: &str) {
        let window = &mut self.buffer[8..8 + TEXT_LENGTH];
        window.fill(0);
        for (slot, byte) in window.iter_mut().zip(text.bytes()) {
            *slot = byte;
        }
    }

    /// Read the text window up to the first zero byte.
    ///
    /// Each stored byte becomes one char, so the returned capacity covers
    /// 14 two-byte chars in the worst case.
    pub fn text_value(&self) -> String<28> {
        let mut text = String::new();
        for &byte in &self.buffer[8..8 + TEXT_LENGTH] {
            if byte == 0 {
                break;
            }
            let _ = text.push(char::from(byte));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::super::constants::Command;
    use super::*;

    fn assert_float_eq(actual: f32, expected: f32, tolerance: f32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn test_bool_round_trip() {
        let mut telegram = Telegram::new();
        telegram.set_command(Command::GroupValueWrite);
        telegram.set_bool(true);
        assert!(telegram.bool_value());
        assert_eq!(telegram.first_data_byte(), 1);

        telegram.set_bool(false);
        assert!(!telegram.bool_value());
        assert_eq!(telegram.command(), Command::GroupValueWrite);
    }

    #[test]
    fn test_u4_round_trip_and_mask() {
        let mut telegram = Telegram::new();
        telegram.set_u4(0b1010);
        assert_eq!(telegram.u4_value(), 0b1010);

        telegram.set_u4(0xFF);
        assert_eq!(telegram.u4_value(), 0x0F);
    }

    #[test]
    fn test_step_command_round_trip() {
        let mut telegram = Telegram::new();
        let up = StepCommand {
            increase: true,
            step: StepCode::Intervals4,
        };
        telegram.set_step_command(up);
        assert_eq!(telegram.step_command(), up);
        assert_eq!(telegram.first_data_byte(), 0b1011);

        let stop = StepCommand {
            increase: false,
            step: StepCode::Break,
        };
        telegram.set_step_command(stop);
        assert_eq!(telegram.step_command(), stop);
        assert_eq!(telegram.first_data_byte(), 0);
    }

    #[test]
    fn test_step_code_intervals() {
        assert_eq!(StepCode::Break.intervals(), 0);
        assert_eq!(StepCode::Intervals1.intervals(), 1);
        assert_eq!(StepCode::Intervals64.intervals(), 64);
    }

    #[test]
    fn test_u8_value() {
        let mut telegram = Telegram::new();
        telegram.set_u8(0xAA);
        assert_eq!(telegram.u8_value(), 0xAA);
        assert_eq!(telegram.payload_length(), 2);
    }

    #[test]
    fn test_u16_big_endian() {
        let mut telegram = Telegram::new();
        telegram.set_u16(0xBEEF);
        assert_eq!(telegram.u16_value(), 0xBEEF);
        assert_eq!(telegram.as_raw()[8], 0xBE);
        assert_eq!(telegram.as_raw()[9], 0xEF);
        assert_eq!(telegram.payload_length(), 3);
    }

    #[test]
    fn test_i16_negative() {
        let mut telegram = Telegram::new();
        telegram.set_i16(-12345);
        assert_eq!(telegram.i16_value(), -12345);
        assert_eq!(telegram.payload_length(), 3);
    }

    #[test]
    fn test_float16_exact_round_trip() {
        // 21.5 = 1376 * 2^5 / 2048, representable without rounding
        let mut telegram = Telegram::new();
        telegram.set_float16(21.5);
        assert_eq!(telegram.as_raw()[8], 0x2D);
        assert_eq!(telegram.as_raw()[9], 0x60);
        assert_eq!(telegram.float16_value(), 21.5);
        assert_eq!(telegram.payload_length(), 3);
    }

    #[test]
    fn test_float16_zero() {
        let mut telegram = Telegram::new();
        telegram.set_u16(0xFFFF);
        telegram.set_float16(0.0);
        assert_eq!(telegram.as_raw()[8], 0);
        assert_eq!(telegram.as_raw()[9], 0);
        assert_eq!(telegram.float16_value(), 0.0);
    }

    #[test]
    fn test_float16_negative() {
        let mut telegram = Telegram::new();
        telegram.set_float16(-30.0);
        assert_ne!(telegram.as_raw()[8] & 0b1000_0000, 0);
        assert_eq!(telegram.float16_value(), -30.0);
    }

    #[test]
    fn test_float16_small_magnitude_quantizes() {
        // Smallest exponent gives steps of 1/2048
        let mut telegram = Telegram::new();
        telegram.set_float16(0.01);
        assert_float_eq(telegram.float16_value(), 0.01, 0.0005);
    }

    #[test]
    fn test_float16_picks_smallest_exponent() {
        let mut telegram = Telegram::new();
        telegram.set_float16(0.5);
        // 0.5 * 2048 = 1024 fits at exponent 0
        assert_eq!(telegram.as_raw()[8], 0b0000_0100);
        assert_eq!(telegram.as_raw()[9], 0);
        assert_eq!(telegram.float16_value(), 0.5);
    }

    #[test]
    fn test_time_round_trip() {
        let mut telegram = Telegram::new();
        let time = TimeOfDay {
            weekday: 3,
            hour: 23,
            minute: 59,
            second: 59,
        };
        telegram.set_time(time);
        assert_eq!(telegram.time_value(), time);
        assert_eq!(telegram.as_raw()[8], 0b0111_0111);
        assert_eq!(telegram.payload_length(), 4);
    }

    #[test]
    fn test_time_masks_components() {
        let mut telegram = Telegram::new();
        telegram.set_time(TimeOfDay {
            weekday: 9,
            hour: 0xFF,
            minute: 0xFF,
            second: 0xFF,
        });
        let time = telegram.time_value();
        assert_eq!(time.weekday, 1);
        assert_eq!(time.hour, 31);
        assert_eq!(time.minute, 63);
        assert_eq!(time.second, 63);
    }

    #[test]
    fn test_date_round_trip_small_year() {
        let mut telegram = Telegram::new();
        let date = Date {
            year: 9,
            month: 8,
            day: 22,
        };
        telegram.set_date(date);
        assert_eq!(telegram.date_value(), date);
        assert_eq!(telegram.as_raw()[8], 0x98);
        assert_eq!(telegram.as_raw()[9], 22);
        assert_eq!(telegram.payload_length(), 3);
    }

    #[test]
    fn test_date_year_keeps_low_nibble_only() {
        let mut telegram = Telegram::new();
        telegram.set_date(Date {
            year: 25,
            month: 12,
            day: 31,
        });
        let date = telegram.date_value();
        // 25 & 0x0F
        assert_eq!(date.year, 9);
        assert_eq!(date.month, 12);
        assert_eq!(date.day, 31);
    }

    #[test]
    fn test_float32_bit_exact() {
        let mut telegram = Telegram::new();
        telegram.set_float32(3.14159);
        assert_eq!(telegram.float32_value(), 3.14159);
        assert_eq!(telegram.payload_length(), 5);
        // Wire order is big-endian: sign and exponent first
        assert_eq!(telegram.as_raw()[8], 0x40);
    }

    #[test]
    fn test_text_round_trip() {
        let mut telegram = Telegram::new();
        telegram.set_text("hello");
        assert_eq!(telegram.text_value().as_str(), "hello");
        assert_eq!(telegram.as_raw()[8], b'h');
        assert_eq!(telegram.as_raw()[13], 0);
    }

    #[test]
    fn test_text_truncates_to_window() {
        let mut telegram = Telegram::new();
        telegram.set_text("a string longer than fourteen bytes");
        assert_eq!(telegram.text_value().as_str(), "a string longe");
        assert_eq!(telegram.text_value().len(), 14);
    }

    #[test]
    fn test_text_zero_fills_previous_content() {
        let mut telegram = Telegram::new();
        telegram.set_text("fourteen bytes");
        telegram.set_text("ab");
        assert_eq!(telegram.text_value().as_str(), "ab");
    }

    #[test]
    fn test_text_empty() {
        let mut telegram = Telegram::new();
        telegram.set_text("");
        assert_eq!(telegram.text_value().as_str(), "");
    }
}
