//! Raw register classification
//!
//! The ANDRTF3 reports temperature as a single big-endian signed 16-bit
//! input register in deci-degrees Celsius. Two raw patterns are reserved
//! as fault codes and must never be surfaced as readings:
//!
//! - `0x0000` - sensor error or communication fault
//! - `0xFFFF` - generic Modbus absent/error response (-1 as signed)
//!
//! Note that this makes a genuine 0.0 °C reading indistinguishable from a
//! fault code; downstream consumers depend on this interpretation.

/// Temperature input register (0-based offset 50 / 0x0032)
pub const TEMP_REGISTER: u16 = 50;

/// Read Input Registers function code
pub const FUNCTION_CODE: u8 = 0x04;

/// Registers fetched per read
pub const REGISTER_COUNT: u16 = 1;

/// Sensor minimum: -40.0 °C
pub const TEMP_MIN_X10: i16 = -400;

/// Sensor maximum: +125.0 °C
pub const TEMP_MAX_X10: i16 = 1250;

/// Classification of one raw register word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RawSample {
    /// Usable temperature in 0.1 °C units
    Temperature(i16),
    /// Reserved fault code 0x0000 (sensor/communication fault)
    SentinelZero,
    /// Reserved fault code 0xFFFF (absent/error response)
    SentinelAbsent,
    /// Decoded fine but outside the sensor's physical range
    OutOfRange(i16),
}

/// Classify a raw register word
///
/// Sentinel codes are checked before the range so that 0x0000 is always a
/// fault even though 0 deci-degrees would be in range.
pub fn classify_raw(raw: u16) -> RawSample {
    if raw == 0x0000 {
        return RawSample::SentinelZero;
    }
    if raw == 0xFFFF {
        return RawSample::SentinelAbsent;
    }

    let value = raw as i16;
    if !(TEMP_MIN_X10..=TEMP_MAX_X10).contains(&value) {
        return RawSample::OutOfRange(value);
    }

    RawSample::Temperature(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sentinel_codes() {
        assert_eq!(classify_raw(0x0000), RawSample::SentinelZero);
        assert_eq!(classify_raw(0xFFFF), RawSample::SentinelAbsent);
    }

    #[test]
    fn test_nominal_temperature() {
        // 261 = 26.1 °C
        assert_eq!(classify_raw(261), RawSample::Temperature(261));
    }

    #[test]
    fn test_negative_temperature() {
        // -150 = -15.0 °C, big-endian two's complement on the wire
        let raw = (-150i16) as u16;
        assert_eq!(classify_raw(raw), RawSample::Temperature(-150));
    }

    #[test]
    fn test_range_limits() {
        assert_eq!(
            classify_raw(TEMP_MIN_X10 as u16),
            RawSample::Temperature(-400)
        );
        assert_eq!(
            classify_raw(TEMP_MAX_X10 as u16),
            RawSample::Temperature(1250)
        );
        assert_eq!(classify_raw((-401i16) as u16), RawSample::OutOfRange(-401));
        assert_eq!(classify_raw(1251), RawSample::OutOfRange(1251));
    }

    proptest! {
        #[test]
        fn prop_in_range_values_accepted(v in TEMP_MIN_X10..=TEMP_MAX_X10) {
            // 0 and -1 encode as the reserved fault patterns
            prop_assume!(v != 0 && v != -1);
            prop_assert_eq!(classify_raw(v as u16), RawSample::Temperature(v));
        }

        #[test]
        fn prop_never_misclassified_as_temperature(raw in any::<u16>()) {
            match classify_raw(raw) {
                RawSample::Temperature(v) => {
                    prop_assert!(v != 0);
                    prop_assert!(raw != 0xFFFF);
                    prop_assert!((TEMP_MIN_X10..=TEMP_MAX_X10).contains(&v));
                }
                RawSample::SentinelZero => prop_assert_eq!(raw, 0x0000),
                RawSample::SentinelAbsent => prop_assert_eq!(raw, 0xFFFF),
                RawSample::OutOfRange(v) => {
                    prop_assert!(!(TEMP_MIN_X10..=TEMP_MAX_X10).contains(&v));
                }
            }
        }
    }
}
