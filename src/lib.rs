//! # I2C Ultrasonic Distance Sensor Driver
//!
//! This crate provides a `no_std` driver for HC-SR04 style ultrasonic distance modules that
//! carry an on-board microcontroller and expose their results over I2C (default address
//! `0x34`). The driver is blocking by default; enable the `async` feature for an
//! `embedded-hal-async` flavour with the same API.
//!
//! The module measures on demand: writing the trigger register starts one cycle, and after
//! roughly 100 ms the distance (cm) and echo duration (µs) registers hold the result. A
//! distance of zero means no echo has been measured yet, which is common for the very first
//! cycle after power-up.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use ultrasonic_i2c::UltrasonicSensor;
//! use embedded_hal::delay::DelayNs;
//!
//! let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! let mut sensor = UltrasonicSensor::new(i2c, embedded_hal_mock::eh1::delay::NoopDelay);
//! let mut delay = embedded_hal_mock::eh1::delay::NoopDelay;
//!
//! // Manual cycle: trigger, give the module time, read the registers
//! sensor.trigger().unwrap();
//! delay.delay_ms(120);
//! let sample = sensor.read_sample().unwrap();
//! println!("{} cm, echo {} us", sample.distance_cm, sample.duration_us);
//!
//! // Or let the driver retry until a non-zero distance shows up
//! let reading = sensor.read_blocking(120, 300).unwrap();
//! if let Some(distance_cm) = reading.valid() {
//!     println!("Distance: {} cm", distance_cm);
//! }
//! ```
//!
//! ## Temperature compensation
//!
//! The module assumes the speed of sound at 20 °C. Pass the current air temperature to
//! [`UltrasonicSensor::compensate`] to rescale a fresh reading; [`temperature`] converts the
//! raw sample of an analog thermometer into °C.
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod fmt; // <-- must be first module!

pub mod compensation;
pub mod register;
pub mod temperature;

#[cfg(not(feature = "async"))]
use embedded_hal::{delay::DelayNs, i2c::I2c};
#[cfg(feature = "async")]
use embedded_hal_async::{delay::DelayNs, i2c::I2c};

pub use compensation::{compensate_distance, speed_of_sound, DEFAULT_BASE_TEMP_C};
pub use register::{decode_distance, decode_duration, encode_trigger, Register, DEFAULT_ADDRESS};
pub use temperature::AnalogTemperature;

/// Timing and compensation defaults used by the convenience operations.
///
/// [`UltrasonicSensor::measure`], [`UltrasonicSensor::average`] and
/// [`UltrasonicSensor::measure_compensated`] take all their parameters from here. The
/// explicit-parameter operations only use [`timeout_ms`](Self::timeout_ms) for their internal
/// blocking reads.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Wait between trigger and register read, in milliseconds
    pub settle_ms: u32,
    /// Upper bound for a blocking read, in milliseconds
    pub timeout_ms: u32,
    /// Settle time used for each averaged sample, in milliseconds
    pub average_settle_ms: u32,
    /// Number of samples averaged by [`UltrasonicSensor::average`]
    pub average_samples: u16,
    /// Air temperature the module firmware assumes, in °C
    pub base_temp_c: f32,
}

impl Config {
    /// Defaults suitable for most ranges
    pub const DEFAULT: Self = Self {
        settle_ms: 120,
        timeout_ms: 300,
        average_settle_ms: 80,
        average_samples: 5,
        base_temp_c: DEFAULT_BASE_TEMP_C,
    };

    /// Longer settle time for targets only a few centimeters away
    #[must_use]
    pub const fn close_range() -> Self {
        Self {
            settle_ms: 180,
            timeout_ms: 400,
            average_settle_ms: 150,
            ..Self::DEFAULT
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One decoded measurement: distance and echo duration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Distance in centimeters, zero when no echo was measured
    pub distance_cm: f32,
    /// Echo pulse width in microseconds, zero when no echo was measured
    pub duration_us: u16,
}

impl Sample {
    /// A sample is valid when the module reported a non-zero distance.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.distance_cm > 0.0
    }
}

/// Outcome of a bounded blocking read.
///
/// The module reports zero both before a cycle completes and when no echo came back, so a
/// zero distance is surfaced as [`Reading::TimedOut`] instead of being passed off as a
/// measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// A non-zero distance in centimeters
    Valid(f32),
    /// The timeout elapsed; carries the last distance read (zero)
    TimedOut(f32),
}

impl Reading {
    /// Distance in centimeters regardless of validity.
    #[must_use]
    pub fn distance_cm(self) -> f32 {
        match self {
            Reading::Valid(d) | Reading::TimedOut(d) => d,
        }
    }

    /// Whether a non-zero distance was obtained before the timeout.
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Reading::Valid(_))
    }

    /// The distance if the reading is valid.
    #[must_use]
    pub fn valid(self) -> Option<f32> {
        match self {
            Reading::Valid(d) => Some(d),
            Reading::TimedOut(_) => None,
        }
    }

    /// Transforms the distance, keeping the validity tag.
    #[must_use]
    pub fn map<F: FnOnce(f32) -> f32>(self, f: F) -> Self {
        match self {
            Reading::Valid(d) => Reading::Valid(f(d)),
            Reading::TimedOut(d) => Reading::TimedOut(f(d)),
        }
    }
}

/// I2C ultrasonic distance sensor driver.
///
/// The driver owns the bus handle and the delay provider. When the bus is shared with other
/// devices, pass a shared-bus device (for example from `embedded-hal-bus`); each register
/// access is a single `write` or `write_read` call, so the bus is held for one transaction at
/// a time.
pub struct UltrasonicSensor<I2C, D> {
    /// I2C interface for communication with the sensor
    i2c: I2C,
    /// 7-bit I2C address, fixed at construction
    address: u8,
    /// Delay implementation for settle times
    delay: D,
    config: Config,
    /// Last values read from the result registers
    last: Sample,
}

#[maybe_async_cfg::maybe(
    sync(cfg(not(feature = "async")), keep_self),
    async(feature = "async", keep_self)
)]
impl<I2C, E, D> UltrasonicSensor<I2C, D>
where
    I2C: I2c<Error = E>,
    E: core::fmt::Debug,
    D: DelayNs,
{
    /// Creates a new driver at the default address (0x34) with the default [`Config`].
    ///
    /// No bus traffic happens until the first operation.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ultrasonic_i2c::UltrasonicSensor;
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    ///
    /// let mut sensor = UltrasonicSensor::new(i2c, delay);
    /// ```
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self {
            i2c,
            address: DEFAULT_ADDRESS,
            delay,
            config: Config::DEFAULT,
            last: Sample::default(),
        }
    }

    /// Creates a new driver for a module strapped to a different 7-bit address.
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidArgument)` - If `address` does not fit in 7 bits
    pub fn with_address(i2c: I2C, delay: D, address: u8) -> Result<Self, Error<E>> {
        if address > 0x7F {
            error!("Invalid 7-bit I2C address: {}", address);
            return Err(Error::InvalidArgument);
        }
        let mut sensor = Self::new(i2c, delay);
        sensor.address = address;
        Ok(sensor)
    }

    /// Replaces the configuration, builder style.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// The I2C address this driver talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Changes the configuration used by subsequent operations.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Last sample read from the result registers, without bus traffic.
    pub fn last_sample(&self) -> Sample {
        self.last
    }

    /// Last distance read, in centimeters.
    pub fn last_distance_cm(&self) -> f32 {
        self.last.distance_cm
    }

    /// Last echo duration read, in microseconds.
    pub fn last_duration_us(&self) -> u16 {
        self.last.duration_us
    }

    /// Destroys the driver and hands back the bus and delay.
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// Starts one measurement cycle.
    ///
    /// Writes the trigger register address with no payload. The result registers are valid
    /// about 100 ms later; this function does not wait.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ultrasonic_i2c::UltrasonicSensor;
    /// use embedded_hal::delay::DelayNs;
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let mut sensor = UltrasonicSensor::new(i2c, embedded_hal_mock::eh1::delay::NoopDelay);
    /// let mut delay = embedded_hal_mock::eh1::delay::NoopDelay;
    ///
    /// sensor.trigger().unwrap();
    /// delay.delay_ms(120);
    /// println!("Distance: {} cm", sensor.read_distance().unwrap());
    /// ```
    pub async fn trigger(&mut self) -> Result<(), Error<E>> {
        trace!("Triggering measurement at 0x{:02x}", self.address);
        self.i2c.write(self.address, &encode_trigger()).await?;
        Ok(())
    }

    /// Reads the distance register, in centimeters.
    ///
    /// The value is cached and available through [`last_distance_cm`](Self::last_distance_cm).
    /// Zero means no valid echo yet.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn read_distance(&mut self) -> Result<f32, Error<E>> {
        let raw = self.read_register(Register::Distance).await?;
        let distance_cm = decode_distance(raw);
        self.last.distance_cm = distance_cm;
        Ok(distance_cm)
    }

    /// Reads the echo duration register, in microseconds.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn read_duration(&mut self) -> Result<u16, Error<E>> {
        let raw = self.read_register(Register::Duration).await?;
        let duration_us = decode_duration(raw);
        self.last.duration_us = duration_us;
        Ok(duration_us)
    }

    /// Reads distance and then duration of the last completed cycle.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If either register read fails
    pub async fn read_sample(&mut self) -> Result<Sample, Error<E>> {
        let distance_cm = self.read_distance().await?;
        let duration_us = self.read_duration().await?;
        Ok(Sample {
            distance_cm,
            duration_us,
        })
    }

    /// Triggers and reads until a non-zero distance appears or `timeout_ms` elapses.
    ///
    /// Every attempt triggers a new cycle, waits `settle_ms` and reads the distance register.
    /// Elapsed time is the sum of the settle delays (at least 1 ms per attempt), so with a
    /// zero result on the first `k` attempts the read succeeds iff `k * settle_ms < timeout_ms`.
    /// At least one attempt is always made.
    ///
    /// A timeout is not an error: the last distance read is returned as
    /// [`Reading::TimedOut`].
    ///
    /// # Arguments
    ///
    /// * `settle_ms` - Wait between trigger and read, in milliseconds (typically 80-200)
    /// * `timeout_ms` - Total time budget, in milliseconds
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ultrasonic_i2c::{Reading, UltrasonicSensor};
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = UltrasonicSensor::new(i2c, delay);
    ///
    /// match sensor.read_blocking(120, 300).unwrap() {
    ///     Reading::Valid(d) => println!("Distance: {} cm", d),
    ///     Reading::TimedOut(_) => println!("No echo"),
    /// }
    /// ```
    pub async fn read_blocking(&mut self, settle_ms: u32, timeout_ms: u32) -> Result<Reading, Error<E>> {
        let step_ms = settle_ms.max(1);
        let mut elapsed_ms = 0u32;
        loop {
            self.trigger().await?;
            self.delay.delay_ms(settle_ms).await;
            elapsed_ms = elapsed_ms.saturating_add(step_ms);

            let distance_cm = self.read_distance().await?;
            if distance_cm > 0.0 {
                break Ok(Reading::Valid(distance_cm));
            }
            if elapsed_ms >= timeout_ms {
                warn!("No echo within {} ms", timeout_ms);
                break Ok(Reading::TimedOut(distance_cm));
            }
            debug!("No echo after {} ms, retrying", elapsed_ms);
        }
    }

    /// Arithmetic mean of `n` blocking reads.
    ///
    /// Each sample is a full [`read_blocking`](Self::read_blocking) with `settle_ms` and the
    /// configured timeout. Timed-out samples are included as zero, so a single missed echo
    /// pulls the mean down; use [`average_valid`](Self::average_valid) to skip them.
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidArgument)` - If `n` is zero; no bus traffic happens
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ultrasonic_i2c::UltrasonicSensor;
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = UltrasonicSensor::new(i2c, delay);
    ///
    /// let avg = sensor.average_n(5, 80).unwrap();
    /// println!("Average: {:.2} cm", avg);
    /// ```
    pub async fn average_n(&mut self, n: u16, settle_ms: u32) -> Result<f32, Error<E>> {
        if n == 0 {
            error!("Cannot average zero samples");
            return Err(Error::InvalidArgument);
        }
        let timeout_ms = self.config.timeout_ms;
        let mut total = 0.0f32;
        for _ in 0..n {
            total += self.read_blocking(settle_ms, timeout_ms).await?.distance_cm();
        }
        Ok(total / f32::from(n))
    }

    /// Mean of the non-zero results of `n` single trigger-and-read cycles.
    ///
    /// Unlike [`average_n`](Self::average_n) there is no retry: each cycle triggers once,
    /// waits `settle_ms` and reads. Returns `None` when every cycle read zero.
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidArgument)` - If `n` is zero; no bus traffic happens
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn average_valid(&mut self, n: u16, settle_ms: u32) -> Result<Option<f32>, Error<E>> {
        if n == 0 {
            error!("Cannot average zero samples");
            return Err(Error::InvalidArgument);
        }
        let mut total = 0.0f32;
        let mut count = 0u16;
        for _ in 0..n {
            self.trigger().await?;
            self.delay.delay_ms(settle_ms).await;
            let distance_cm = self.read_distance().await?;
            if distance_cm > 0.0 {
                total += distance_cm;
                count += 1;
            }
        }
        if count == 0 {
            debug!("No valid sample in {} cycles", n);
            return Ok(None);
        }
        Ok(Some(total / f32::from(count)))
    }

    /// One blocking read corrected for the speed of sound at `temp_c`.
    ///
    /// The raw distance is scaled by `speed_of_sound(temp_c) / speed_of_sound(base_temp_c)`,
    /// see [`compensate_distance`]. A timed-out reading stays [`Reading::TimedOut`].
    ///
    /// # Arguments
    ///
    /// * `temp_c` - Current air temperature in °C
    /// * `base_temp_c` - Temperature the module firmware assumes, usually 20 °C
    /// * `settle_ms` - Settle time of the blocking read
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use ultrasonic_i2c::UltrasonicSensor;
    ///
    /// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
    /// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
    /// let mut sensor = UltrasonicSensor::new(i2c, delay);
    ///
    /// let reading = sensor.compensate(28.5, 20.0, 120).unwrap();
    /// println!("Compensated: {:.2} cm", reading.distance_cm());
    /// ```
    pub async fn compensate(&mut self, temp_c: f32, base_temp_c: f32, settle_ms: u32) -> Result<Reading, Error<E>> {
        let timeout_ms = self.config.timeout_ms;
        let reading = self.read_blocking(settle_ms, timeout_ms).await?;
        Ok(reading.map(|raw_cm| compensate_distance(raw_cm, temp_c, base_temp_c)))
    }

    /// [`read_blocking`](Self::read_blocking) with the configured settle time and timeout.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn measure(&mut self) -> Result<Reading, Error<E>> {
        let Config {
            settle_ms,
            timeout_ms,
            ..
        } = self.config;
        self.read_blocking(settle_ms, timeout_ms).await
    }

    /// [`average_n`](Self::average_n) with the configured sample count and settle time.
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidArgument)` - If the configured sample count is zero
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn average(&mut self) -> Result<f32, Error<E>> {
        let Config {
            average_samples,
            average_settle_ms,
            ..
        } = self.config;
        self.average_n(average_samples, average_settle_ms).await
    }

    /// [`compensate`](Self::compensate) against the configured base temperature.
    ///
    /// # Errors
    ///
    /// * `Err(Error::I2cError(E))` - If there was an I2C communication error
    pub async fn measure_compensated(&mut self, temp_c: f32) -> Result<Reading, Error<E>> {
        let Config {
            settle_ms,
            base_temp_c,
            ..
        } = self.config;
        self.compensate(temp_c, base_temp_c, settle_ms).await
    }

    /// Reads the two little-endian bytes of a result register.
    async fn read_register(&mut self, register: Register) -> Result<[u8; 2], Error<E>> {
        let mut read_buffer = [0u8; 2];
        self.i2c
            .write_read(self.address, &[u8::from(register)], &mut read_buffer)
            .await?;
        trace!("Read {:?} = {:?}", register, read_buffer);
        Ok(read_buffer)
    }
}

/// Error type for ultrasonic sensor operations.
///
/// # Examples
///
/// ```rust,no_run
/// use ultrasonic_i2c::Error;
///
/// let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
/// let delay = embedded_hal_mock::eh1::delay::NoopDelay;
/// let mut sensor = ultrasonic_i2c::UltrasonicSensor::new(i2c, delay);
///
/// match sensor.average_n(0, 80) {
///     Ok(avg) => println!("Average: {} cm", avg),
///     Err(Error::InvalidArgument) => println!("Invalid parameter provided"),
///     Err(Error::I2cError(e)) => println!("I2C communication error: {:?}", e),
/// }
/// ```
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E: core::fmt::Debug> {
    /// I2C communication error from the underlying hardware
    I2cError(E),
    /// Invalid parameter value provided
    InvalidArgument,
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

impl<E: core::fmt::Debug> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::I2cError(error)
    }
}

#[cfg(all(test, not(feature = "async")))]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

    #[test]
    fn new_uses_default_address_and_config() {
        let mut i2c = I2cMock::new(&[]);
        let sensor = UltrasonicSensor::new(i2c.clone(), NoopDelay);
        assert_eq!(sensor.address(), 0x34);
        assert_eq!(*sensor.config(), Config::default());
        assert_eq!(sensor.last_sample(), Sample::default());
        i2c.done();
    }

    #[test]
    fn with_address_rejects_eight_bit_addresses() {
        let mut i2c = I2cMock::new(&[]);
        assert!(matches!(
            UltrasonicSensor::with_address(i2c.clone(), NoopDelay, 0x80),
            Err(Error::InvalidArgument)
        ));
        let sensor = UltrasonicSensor::with_address(i2c.clone(), NoopDelay, 0x35).unwrap();
        assert_eq!(sensor.address(), 0x35);
        i2c.done();
    }

    #[test]
    fn custom_address_is_used_on_the_bus() {
        let expectations = [Transaction::write(0x35, vec![0x00])];
        let mut i2c = I2cMock::new(&expectations);
        let mut sensor = UltrasonicSensor::with_address(i2c.clone(), NoopDelay, 0x35).unwrap();
        sensor.trigger().unwrap();
        i2c.done();
    }

    #[test]
    fn read_duration_is_cached() {
        let expectations = [Transaction::write_read(0x34, vec![0x02], vec![0xe8, 0x03])];
        let mut i2c = I2cMock::new(&expectations);
        let mut sensor = UltrasonicSensor::new(i2c.clone(), NoopDelay);
        assert_eq!(sensor.read_duration().unwrap(), 1000);
        assert_eq!(sensor.last_duration_us(), 1000);
        i2c.done();
    }

    #[test]
    fn trigger_error_propagates() {
        let expectations = [Transaction::write(0x34, vec![0x00]).with_error(ErrorKind::Other)];
        let mut i2c = I2cMock::new(&expectations);
        let mut sensor = UltrasonicSensor::new(i2c.clone(), NoopDelay);
        assert!(matches!(sensor.trigger(), Err(Error::I2cError(ErrorKind::Other))));
        i2c.done();
    }

    #[test]
    fn reading_helpers() {
        let valid = Reading::Valid(42.0);
        assert!(valid.is_valid());
        assert_eq!(valid.valid(), Some(42.0));
        assert_eq!(valid.map(|d| d * 2.0), Reading::Valid(84.0));

        let timed_out = Reading::TimedOut(0.0);
        assert!(!timed_out.is_valid());
        assert_eq!(timed_out.valid(), None);
        assert_eq!(timed_out.map(|d| d + 1.0), Reading::TimedOut(1.0));
        assert_eq!(timed_out.distance_cm(), 0.0);
    }

    #[test]
    fn close_range_config_waits_longer() {
        let config = Config::close_range();
        assert!(config.settle_ms > Config::DEFAULT.settle_ms);
        assert_eq!(config.average_samples, Config::DEFAULT.average_samples);
    }

    #[test]
    fn error_display() {
        let err: Error<ErrorKind> = ErrorKind::Other.into();
        assert!(matches!(err, Error::I2cError(ErrorKind::Other)));
        assert_eq!(format!("{}", Error::<ErrorKind>::InvalidArgument), "InvalidArgument");
    }
}
