//! Temperature compensated distance using an analog thermometer read through Linux IIO.
//!
//! The raw ADC sample is read from a sysfs file such as
//! `/sys/bus/iio/devices/iio:device0/in_voltage0_raw`.
//!
//! Usage:
//! ```bash
//! RUST_LOG=info cargo run --features log --example read_dist_temp -- \
//!     /dev/i2c-1 /sys/bus/iio/devices/iio:device0/in_voltage0_raw 3.3
//! ```

use std::{fs, thread, time::Duration};

use anyhow::Context;
use linux_embedded_hal::{Delay, I2cdev};
use ultrasonic_i2c::{AnalogTemperature, Config, UltrasonicSensor};

fn read_raw(path: &str) -> anyhow::Result<u16> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let raw = text
        .trim()
        .parse()
        .with_context(|| format!("parsing ADC sample {:?}", text.trim()))?;
    Ok(raw)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let bus = args.next().unwrap_or_else(|| "/dev/i2c-1".into());
    let adc = args
        .next()
        .unwrap_or_else(|| "/sys/bus/iio/devices/iio:device0/in_voltage0_raw".into());
    let reference_voltage: f32 = match args.next() {
        Some(v) => v.parse().context("parsing reference voltage")?,
        None => 3.3,
    };

    let config = Config::default();
    let thermometer = AnalogTemperature::default();
    let i2c = I2cdev::new(&bus)?;
    let mut sensor = UltrasonicSensor::new(i2c, Delay).with_config(config);

    println!("Reference voltage (V): {reference_voltage}");
    println!("Starting measurements... Press Ctrl+C to stop.\n");

    loop {
        let temp_c = thermometer.celsius(read_raw(&adc)?, reference_voltage);
        if thermometer.is_overheated(temp_c) {
            println!("Warning: temperature reads {temp_c:.1} C, check the sensor selection switch");
        }

        let raw = sensor.measure()?;
        let avg_cm = sensor.average()?;
        let comp = sensor.measure_compensated(temp_c)?;

        println!(
            "Temp: {:5.1} C (offset {:+.1}) | Raw: {:6.2} cm | Avg: {:6.2} cm | Comp: {:6.2} cm{}",
            temp_c,
            thermometer.offset_c,
            raw.distance_cm(),
            avg_cm,
            comp.distance_cm(),
            if comp.is_valid() { "" } else { " (no echo)" },
        );

        thread::sleep(Duration::from_millis(300));
    }
}
