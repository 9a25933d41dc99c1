//! Ambient light and proximity reading demo
//!
//! This demo shows how to:
//! - Initialize the APDS-9930 sensor
//! - Enable the ambient light and proximity engines
//! - Read lux and proximity values in a loop
//! - Dump the full register window for debugging

use apds9930::{ll, Apds9930};
use linux_embedded_hal::I2cdev;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let i2c = I2cdev::new("/dev/i2c-1")?;
    let mut sensor = Apds9930::new(i2c);

    println!("APDS-9930 Ambient Light + Proximity Demo");
    println!("========================================");

    println!("Initializing sensor...");
    sensor.init()?;
    println!("Device ID: 0x{:02X}", sensor.id()?);

    sensor.enable_ambient_light_sensor(false)?;
    sensor.enable_proximity_sensor(false)?;

    // Dump the register window once so the configuration is visible
    for (addr, value) in sensor.dump_registers()? {
        println!(
            "{:<10} 0x{:02X}: 0x{:02X} ({:08b})",
            ll::register_name(addr),
            addr,
            value,
            value
        );
    }

    println!("Starting measurements... (Press Ctrl+C to exit)");
    loop {
        // One ALS integration cycle at the default ATIME is ~2.73 ms, but
        // give the proximity engine time between polls as well
        std::thread::sleep(std::time::Duration::from_millis(250));

        let ch0 = sensor.ch0_light()?;
        let ch1 = sensor.ch1_light()?;
        let lux = sensor.ambient_light()?;
        let proximity = sensor.proximity()?;

        println!(
            "ch0: {:5}  ch1: {:5}  lux: {:8.2}  proximity: {:5}",
            ch0, ch1, lux, proximity
        );
    }
}
