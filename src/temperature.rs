//! Analog temperature sensor conversion.
//!
//! Converts the raw 16-bit sample of an analog thermometer with a 500 mV
//! offset and 10 mV/°C slope (TMP36 style) into degrees Celsius. Reading the
//! ADC itself is left to the platform.

/// Full scale of a 16-bit ADC sample.
const ADC_FULL_SCALE: f32 = 65535.0;

/// Sensor output at 0 °C in millivolts.
const OFFSET_MV: f32 = 500.0;

/// Sensor slope in millivolts per °C.
const MV_PER_DEGREE: f32 = 10.0;

/// Converts a raw ADC sample to degrees Celsius, without calibration.
///
/// `reference_voltage` is the ADC reference in volts.
#[must_use]
pub fn raw_to_celsius(raw: u16, reference_voltage: f32) -> f32 {
    let millivolts = f32::from(raw) * (reference_voltage * 1000.0 / ADC_FULL_SCALE);
    (millivolts - OFFSET_MV) / MV_PER_DEGREE
}

/// Calibrated analog temperature input.
///
/// Adds a fixed calibration offset to [`raw_to_celsius`] and flags readings
/// above a plausibility threshold, which usually means the input is wired to
/// something other than the thermometer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogTemperature {
    /// Calibration offset added to every conversion, in °C
    pub offset_c: f32,
    /// Readings above this value are reported as implausible, in °C
    pub overheat_c: f32,
}

impl AnalogTemperature {
    /// Default calibration of the on-board thermometer
    pub const DEFAULT: Self = Self {
        offset_c: -2.0,
        overheat_c: 60.0,
    };

    /// Create a conversion with a custom offset and the default threshold
    #[must_use]
    pub const fn new(offset_c: f32) -> Self {
        Self {
            offset_c,
            overheat_c: Self::DEFAULT.overheat_c,
        }
    }

    /// Calibrated temperature in °C.
    ///
    /// Logs a warning when the result exceeds [`overheat_c`](Self::overheat_c).
    #[must_use]
    pub fn celsius(&self, raw: u16, reference_voltage: f32) -> f32 {
        let temp_c = raw_to_celsius(raw, reference_voltage) + self.offset_c;
        if self.is_overheated(temp_c) {
            warn!(
                "Temperature input reads {} C, above {} C; check the sensor selection",
                temp_c,
                self.overheat_c
            );
        }
        temp_c
    }

    /// Whether `temp_c` is above the plausibility threshold.
    #[must_use]
    pub fn is_overheated(&self, temp_c: f32) -> bool {
        temp_c > self.overheat_c
    }
}

impl Default for AnalogTemperature {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_conversion() {
        // 750 mV at 3.3 V reference is 25 °C
        let raw = (750.0 / 3300.0 * 65535.0) as u16;
        assert!((raw_to_celsius(raw, 3.3) - 25.0).abs() < 0.01);
    }

    #[test]
    fn zero_raw_is_minus_fifty() {
        assert!((raw_to_celsius(0, 3.3) + 50.0).abs() < 1e-4);
    }

    #[test]
    fn offset_is_applied() {
        let raw = (750.0 / 3300.0 * 65535.0) as u16;
        let t = AnalogTemperature::default().celsius(raw, 3.3);
        assert!((t - 23.0).abs() < 0.01);

        let t = AnalogTemperature::new(1.5).celsius(raw, 3.3);
        assert!((t - 26.5).abs() < 0.01);
    }

    #[test]
    fn overheat_threshold() {
        let sensor = AnalogTemperature::DEFAULT;
        assert!(!sensor.is_overheated(60.0));
        assert!(sensor.is_overheated(60.1));
        // full scale at 3.3 V is 280 °C
        assert!(sensor.is_overheated(sensor.celsius(u16::MAX, 3.3)));
    }
}
