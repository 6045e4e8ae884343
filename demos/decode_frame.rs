//! Decode a captured bus frame, then build the reply an actuator would send.
//!
//! Run with: cargo run --example decode_frame --features std

use knx_telegram::addressing::IndividualAddress;
use knx_telegram::{ga, Command, Telegram};

fn main() -> Result<(), knx_telegram::KnxError> {
    // A group write turning on the light at 2/3/40, as seen on the bus
    let mut wire = [0u8; 24];
    wire[..8].copy_from_slice(&[0xBC, 0x11, 0x0A, 0x13, 0x28, 0xE1, 0x00, 0x81]);

    let telegram = Telegram::try_from(&wire[..])?;
    println!("received: {telegram}");
    println!("  repeated:  {}", telegram.is_repeated());
    println!("  priority:  {:?}", telegram.priority());
    println!("  value:     {}", telegram.bool_value());
    println!("  checksum:  0x{:02X}", telegram.calculate_checksum());

    // The actuator at 2.1.5 confirms the new state with a group response
    let mut reply = Telegram::new();
    reply.set_source(IndividualAddress::new(2, 1, 5)?);
    reply.set_target_group(ga!(2/3/40));
    reply.set_command(Command::GroupValueResponse);
    reply.set_bool(true);

    println!("reply:    {reply}");
    print!("  bytes:    ");
    for byte in reply.as_raw() {
        print!("{byte:02X} ");
    }
    println!();
    println!("  checksum: 0x{:02X}", reply.calculate_checksum());

    Ok(())
}
