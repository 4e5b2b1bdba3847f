//! Print distance and echo duration of an ultrasonic module in a loop.
//!
//! Usage:
//! ```bash
//! RUST_LOG=debug cargo run --features log --example read_dist -- /dev/i2c-1
//! ```

use std::{thread, time::Duration};

use embedded_hal::delay::DelayNs;
use linux_embedded_hal::{Delay, I2cdev};
use ultrasonic_i2c::UltrasonicSensor;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bus = std::env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".into());
    let i2c = I2cdev::new(&bus)?;
    let mut sensor = UltrasonicSensor::new(i2c, Delay);
    let mut delay = Delay;

    loop {
        sensor.trigger()?;
        // give the module time to acquire
        delay.delay_ms(120);
        let sample = sensor.read_sample()?;
        println!(
            "Distance: {:.1} cm  |  Echo: {} us",
            sample.distance_cm, sample.duration_us
        );
        thread::sleep(Duration::from_millis(200));
    }
}
