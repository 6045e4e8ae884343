//! Integration tests for the knx-telegram codec.
//!
//! Every test works on plain 24-byte buffers through the public API, the
//! way a bus coupler firmware would: build a telegram, check the exact
//! wire bytes, then decode the same bytes back. No hardware or network
//! is involved.

use knx_telegram::addressing::{GroupAddress, IndividualAddress};
use knx_telegram::telegram::{CommunicationType, ControlData, Date, StepCode, StepCommand, TimeOfDay};
use knx_telegram::{ga, Command, Priority, Telegram};

/// Helper to build the canonical "light on" group write used throughout.
fn group_write_frame() -> Telegram {
    let mut telegram = Telegram::new();
    telegram.set_source(IndividualAddress::new(1, 1, 10).expect("valid source"));
    telegram.set_target_group(ga!(2/3/40));
    telegram.set_command(Command::GroupValueWrite);
    telegram.set_bool(true);
    telegram
}

#[test]
fn test_individual_address_round_trips_over_full_range() {
    for raw in 0..=u16::MAX {
        let addr = IndividualAddress::from(raw);
        assert_eq!(addr.raw(), raw);
        let rebuilt = IndividualAddress::new(addr.area(), addr.line(), addr.member())
            .expect("components from a decoded address are in range");
        assert_eq!(rebuilt, addr);
    }
}

#[test]
fn test_group_address_round_trips_over_full_range() {
    for raw in 0..=u16::MAX {
        let addr = GroupAddress::from(raw);
        assert_eq!(addr.raw(), raw);
        let rebuilt = GroupAddress::new(addr.main(), addr.middle(), addr.sub())
            .expect("components from a decoded address are in range");
        assert_eq!(rebuilt, addr);
    }
}

#[test]
fn test_address_display_and_parse() {
    let individual: IndividualAddress = "1.1.10".parse().expect("parse individual");
    assert_eq!(individual, IndividualAddress::new(1, 1, 10).unwrap());
    assert_eq!(format!("{individual}"), "1.1.10");

    let group: GroupAddress = "2/3/40".parse().expect("parse group");
    assert_eq!(group, ga!(2/3/40));
    assert_eq!(format!("{group}"), "2/3/40");
}

#[test]
fn test_group_write_wire_bytes() {
    println!("\n=== Test: Group Write Frame ===");

    let telegram = group_write_frame();
    let raw = telegram.as_raw();

    assert_eq!(raw[0], 0xBC, "control field");
    assert_eq!(&raw[1..3], &[0x11, 0x0A], "source 1.1.10");
    assert_eq!(&raw[3..5], &[0x13, 0x28], "target 2/3/40");
    assert_eq!(raw[5], 0xE1, "group flag, routing 6, length 2");
    assert_eq!(raw[6], 0x00, "unnumbered data, command high bits");
    assert_eq!(raw[7], 0x81, "command low bits, value on");
    assert!(raw[8..].iter().all(|&byte| byte == 0));

    assert_eq!(telegram.calculate_checksum(), 0x7D);
    println!("✓ Frame bytes and checksum match");
}

#[test]
fn test_received_frame_decodes() {
    // The group_write_frame() bytes as they would arrive from the bus,
    // with trailing noise after the 24-byte telegram
    let mut wire = [0u8; 30];
    wire[..8].copy_from_slice(&[0xBC, 0x11, 0x0A, 0x13, 0x28, 0xE1, 0x00, 0x81]);
    wire[24] = 0xAA;

    let telegram = Telegram::try_from(&wire[..]).expect("24 bytes are enough");
    assert_eq!(telegram.source(), IndividualAddress::new(1, 1, 10).unwrap());
    assert!(telegram.is_target_group());
    assert_eq!(telegram.target_group(), ga!(2/3/40));
    assert_eq!(telegram.command(), Command::GroupValueWrite);
    assert!(telegram.bool_value());
    assert!(!telegram.is_repeated());
    assert_eq!(telegram.priority(), Priority::Normal);
}

#[test]
fn test_short_frame_is_rejected() {
    let wire = [0xBC, 0x11, 0x0A];
    assert!(Telegram::try_from(&wire[..]).is_err());
}

#[test]
fn test_target_type_follows_last_setter() {
    let mut telegram = Telegram::new();

    telegram.set_target_group(ga!(5/1/17));
    assert!(telegram.is_target_group());

    telegram.set_target_individual(IndividualAddress::new(2, 4, 8).unwrap());
    assert!(!telegram.is_target_group());
    assert_eq!(telegram.target_individual(), IndividualAddress::new(2, 4, 8).unwrap());

    telegram.set_target_group(ga!(5/1/17));
    assert!(telegram.is_target_group());
    assert_eq!(telegram.target_group(), ga!(5/1/17));
}

#[test]
fn test_payload_length_full_range_and_clamp() {
    let mut telegram = Telegram::new();
    for length in 1..=16 {
        telegram.set_payload_length(length);
        assert_eq!(telegram.payload_length(), length);
    }

    // Oversized lengths are truncated to the 4-bit nibble
    telegram.set_payload_length(17);
    assert_eq!(telegram.payload_length(), 1);
    telegram.set_payload_length(255);
    assert!(telegram.payload_length() <= 16);
}

#[test]
fn test_default_checksum() {
    assert_eq!(Telegram::new().calculate_checksum(), 0x5D);
}

#[test]
fn test_repeat_bit_wire_polarity() {
    // Bit 5 of byte 0 cleared on the wire means "repeated"
    let mut raw = *Telegram::new().as_raw();
    raw[0] &= !0b0010_0000;
    assert!(Telegram::from(raw).is_repeated());
    assert!(!Telegram::new().is_repeated());
}

#[test]
fn test_priority_wire_codes() {
    let cases = [
        (Priority::System, 0b00),
        (Priority::High, 0b01),
        (Priority::Alarm, 0b10),
        (Priority::Normal, 0b11),
    ];
    for (priority, bits) in cases {
        let mut telegram = Telegram::new();
        telegram.set_priority(priority);
        assert_eq!((telegram.as_raw()[0] >> 2) & 0b11, bits);
        assert_eq!(telegram.priority(), priority);
    }
}

#[test]
fn test_all_commands_round_trip() {
    let commands = [
        Command::GroupValueRead,
        Command::GroupValueResponse,
        Command::GroupValueWrite,
        Command::IndividualAddrWrite,
        Command::IndividualAddrRequest,
        Command::IndividualAddrResponse,
        Command::AdcRead,
        Command::AdcResponse,
        Command::MemoryRead,
        Command::MemoryResponse,
        Command::MemoryWrite,
        Command::UserMessage,
        Command::MaskVersionRead,
        Command::MaskVersionResponse,
        Command::Restart,
        Command::Escape,
    ];
    let mut telegram = Telegram::new();
    for command in commands {
        telegram.set_command(command);
        assert_eq!(telegram.command(), command);
    }
}

#[test]
fn test_clear_restores_defaults() {
    let mut telegram = group_write_frame();
    telegram.set_routing_counter(2);
    telegram.set_sequence_number(11);
    telegram.set_float32(99.5);
    telegram.clear();

    let raw = telegram.as_raw();
    assert_eq!(raw[0], 0xBC);
    assert_eq!(raw[5], 0xE1);
    assert!(raw[1..5].iter().all(|&byte| byte == 0));
    assert_eq!(raw[6], 0);
    assert_eq!(raw[7], 0);
    assert!(raw[8..].iter().all(|&byte| byte == 0));
}

#[test]
fn test_connection_oriented_exchange() {
    println!("\n=== Test: Connection-Oriented Telegram ===");

    // A device sends a numbered memory write within an open connection
    let mut telegram = Telegram::new();
    telegram.set_source(IndividualAddress::new(1, 0, 1).unwrap());
    telegram.set_target_individual(IndividualAddress::new(1, 1, 30).unwrap());
    telegram.set_communication_type(CommunicationType::NumberedData);
    telegram.set_sequence_number(4);
    telegram.set_command(Command::MemoryWrite);

    let received = Telegram::try_from(&telegram.as_raw()[..]).unwrap();
    assert!(!received.is_target_group());
    assert_eq!(received.communication_type(), CommunicationType::NumberedData);
    assert_eq!(received.sequence_number(), 4);
    assert_eq!(received.command(), Command::MemoryWrite);
    println!("✓ Sequence {} decoded", received.sequence_number());
}

#[test]
fn test_connect_control_telegram() {
    let mut telegram = Telegram::new();
    telegram.set_target_individual(IndividualAddress::new(1, 1, 30).unwrap());
    telegram.set_communication_type(CommunicationType::UnnumberedControl);
    telegram.set_control_data(ControlData::Connect);

    assert_eq!(telegram.communication_type(), CommunicationType::UnnumberedControl);
    assert_eq!(telegram.control_data(), ControlData::Connect);
}

#[test]
fn test_float16_spec_values() {
    let mut telegram = Telegram::new();

    telegram.set_float16(21.5);
    let decoded = telegram.float16_value();
    assert!(
        (decoded - 21.5).abs() < 0.01,
        "21.5 decoded as {decoded}"
    );

    telegram.set_float16(0.0);
    assert_eq!(telegram.float16_value(), 0.0);
}

#[test]
fn test_float32_bit_identical() {
    let mut telegram = Telegram::new();
    telegram.set_float32(3.14159);
    assert_eq!(telegram.float32_value(), 3.14159);
}

#[test]
fn test_dimming_telegram() {
    let mut telegram = Telegram::new();
    telegram.set_target_group(ga!(2/1/9));
    telegram.set_command(Command::GroupValueWrite);
    telegram.set_step_command(StepCommand {
        increase: true,
        step: StepCode::Intervals2,
    });

    let decoded = telegram.step_command();
    assert!(decoded.increase);
    assert_eq!(decoded.step, StepCode::Intervals2);
    assert_eq!(decoded.step.intervals(), 2);
    // Command bits in the same byte are untouched
    assert_eq!(telegram.command(), Command::GroupValueWrite);
}

#[test]
fn test_time_and_date_payloads() {
    let mut telegram = Telegram::new();

    let time = TimeOfDay {
        weekday: 5,
        hour: 6,
        minute: 30,
        second: 0,
    };
    telegram.set_time(time);
    assert_eq!(telegram.time_value(), time);
    assert_eq!(telegram.payload_length(), 4);

    telegram.clear();
    let date = Date {
        year: 6,
        month: 8,
        day: 22,
    };
    telegram.set_date(date);
    assert_eq!(telegram.date_value(), date);
    assert_eq!(telegram.payload_length(), 3);
}

#[test]
fn test_text_payload() {
    let mut telegram = Telegram::new();
    telegram.set_target_group(ga!(7/0/1));
    telegram.set_command(Command::GroupValueWrite);
    telegram.set_text("Boiler alarm");

    assert_eq!(telegram.text_value().as_str(), "Boiler alarm");

    telegram.set_text("A head end system truncates this");
    assert_eq!(telegram.text_value().len(), 14);
}
