use std::env;
use std::path::Path;
use std::thread::sleep;
use std::time::Duration;

use anyhow::{anyhow, Context};
use linux_embedded_hal::I2cdev;

use grideye::{FrameRate, GridEyeDriver};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        return Err(anyhow!("Two arguments required: <I2C bus> <sensor address>"));
    }
    let address: u8 = if let Some(hex_digits) = args[2].strip_prefix("0x") {
        u8::from_str_radix(hex_digits, 16)?
    } else {
        args[2].parse()?
    };
    let bus_path = Path::new(&args[1]);
    let bus = I2cdev::new(bus_path).context("The given path should work as an I2C device")?;
    let mut sensor = GridEyeDriver::new_i2c(bus, address);
    sensor.initialize()?;
    // The first frame after a reset isn't valid until a full frame period has passed.
    let frame_period = Duration::from_secs_f32(1.0 / f32::from(FrameRate::default()));
    sleep(frame_period * 2);
    let count = sensor.sample()?;
    if count < grideye::calculations::NUM_BYTES {
        eprintln!("Only received {} bytes", count);
    }
    println!("Thermistor: {:.2}℃", sensor.ambient_temperature()?);
    print_temperatures(sensor.temperatures(), sensor.width());
    println!();
    Ok(())
}

fn print_temperatures(temperatures: &[f32], width: usize) {
    for (count, temperature) in temperatures.iter().enumerate() {
        if count % width == 0 {
            println!();
        }
        print!("{:6.2}  ", temperature);
    }
}
