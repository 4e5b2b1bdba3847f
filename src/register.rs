//! Register map and byte codec of the ultrasonic module.
//!
//! The on-board MCU exposes three single-byte register addresses. Writing the
//! trigger address on its own starts one measurement cycle, the two result
//! registers each hold a little-endian `u16`.

/// Default 7-bit I2C address of the module.
pub const DEFAULT_ADDRESS: u8 = 0x34;

/// Register addresses of the ultrasonic module.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Measurement trigger (0x00), written without payload
    Trigger = 0x00,
    /// Last measured distance in centimeters (0x01)
    Distance = 0x01,
    /// Last echo pulse width in microseconds (0x02)
    Duration = 0x02,
}

impl From<Register> for u8 {
    fn from(r: Register) -> Self {
        r as u8
    }
}

/// Bytes to write to start a measurement cycle.
#[must_use]
pub const fn encode_trigger() -> [u8; 1] {
    [Register::Trigger as u8]
}

/// Decodes the distance register contents, taken literally as centimeters.
#[must_use]
pub fn decode_distance(raw: [u8; 2]) -> f32 {
    f32::from(u16::from_le_bytes(raw))
}

/// Decodes the echo duration register contents in microseconds.
#[must_use]
pub const fn decode_duration(raw: [u8; 2]) -> u16 {
    u16::from_le_bytes(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_is_register_address_only() {
        assert_eq!(encode_trigger(), [0x00]);
    }

    #[test]
    fn register_addresses() {
        assert_eq!(u8::from(Register::Trigger), 0x00);
        assert_eq!(u8::from(Register::Distance), 0x01);
        assert_eq!(u8::from(Register::Duration), 0x02);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn decoding_is_little_endian_for_every_byte_pair() {
        for hi in 0..=255u8 {
            for lo in 0..=255u8 {
                let expected = u16::from(lo) + 256 * u16::from(hi);
                assert_eq!(decode_duration([lo, hi]), expected);
                assert_eq!(decode_distance([lo, hi]), f32::from(expected));
            }
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn distance_is_not_scaled() {
        assert_eq!(decode_distance([0x2c, 0x01]), 300.0);
    }
}
