//! Speed-of-sound temperature compensation.
//!
//! The module firmware converts echo time to distance assuming a fixed speed
//! of sound. Sound travels faster in warm air, so a reading taken at a
//! different air temperature is rescaled by the ratio of the two speeds.

/// Speed of sound at 0 °C in m/s.
pub const SPEED_OF_SOUND_0C: f32 = 331.3;

/// Linear increase of the speed of sound in m/s per °C.
pub const SPEED_OF_SOUND_SLOPE: f32 = 0.606;

/// Air temperature the module firmware is assumed to be calibrated for.
pub const DEFAULT_BASE_TEMP_C: f32 = 20.0;

/// Approximate speed of sound in dry air (m/s) at `temp_c` degrees Celsius.
#[must_use]
pub fn speed_of_sound(temp_c: f32) -> f32 {
    SPEED_OF_SOUND_0C + SPEED_OF_SOUND_SLOPE * temp_c
}

/// Rescales `raw_cm`, measured assuming `base_temp_c`, to the actual air
/// temperature `temp_c`.
///
/// # Examples
///
/// ```
/// use ultrasonic_i2c::compensation::compensate_distance;
///
/// let d = compensate_distance(100.0, 30.0, 20.0);
/// assert!((d - 101.8).abs() < 0.05);
/// ```
#[must_use]
pub fn compensate_distance(raw_cm: f32, temp_c: f32, base_temp_c: f32) -> f32 {
    raw_cm * speed_of_sound(temp_c) / speed_of_sound(base_temp_c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_at_reference_points() {
        assert!((speed_of_sound(0.0) - 331.3).abs() < 1e-4);
        assert!((speed_of_sound(20.0) - 343.42).abs() < 1e-3);
    }

    #[test]
    fn warmer_air_stretches_distance() {
        let expected = 100.0 * (331.3 + 0.606 * 30.0) / (331.3 + 0.606 * 20.0);
        let d = compensate_distance(100.0, 30.0, 20.0);
        assert!((d - expected).abs() < 1e-3);
        assert!((d - 101.8).abs() < 0.05);
    }

    #[test]
    fn colder_air_shrinks_distance() {
        assert!(compensate_distance(100.0, 0.0, DEFAULT_BASE_TEMP_C) < 100.0);
    }

    #[test]
    fn baseline_temperature_is_identity() {
        assert!((compensate_distance(57.0, 20.0, 20.0) - 57.0).abs() < 1e-4);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_stays_zero() {
        assert_eq!(compensate_distance(0.0, 35.0, 20.0), 0.0);
    }
}
