//! Sentinel-valued entry points taking raw sensor codes.
//!
//! For callers that cannot carry a `Result` across their boundary (C
//! bindings, fixed-format telemetry): every failure collapses into
//! [`CONVERSION_FAILED`], which is far outside any valid resistance or
//! temperature.

use crate::{resistance, temperature, SensorClass};

/// Returned in place of a result when a conversion fails.
pub const CONVERSION_FAILED: f64 = -1.0e6;

/// [`resistance`](crate::resistance) for a raw sensor code (`50`, `100`,
/// `200`, `500` or `1000`).
///
/// # Examples
///
/// ```
/// use platinum_rtd::compat::{calculate_resistance, CONVERSION_FAILED};
///
/// assert_eq!(calculate_resistance(100, 0.0), 100.0);
/// assert_eq!(calculate_resistance(9999, 25.0), CONVERSION_FAILED);
/// ```
pub fn calculate_resistance(sensor_code: u16, temperature_c: f64) -> f64 {
    SensorClass::try_from(sensor_code)
        .and_then(|sensor| resistance(sensor, temperature_c))
        .unwrap_or(CONVERSION_FAILED)
}

/// [`temperature`](crate::temperature) for a raw sensor code (`50`,
/// `100`, `200`, `500` or `1000`).
pub fn calculate_temperature(sensor_code: u16, resistance_ohm: f64, initial_guess_c: f64) -> f64 {
    SensorClass::try_from(sensor_code)
        .and_then(|sensor| temperature(sensor, resistance_ohm, initial_guess_c))
        .unwrap_or(CONVERSION_FAILED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unknown_sensor_code() {
        assert_eq!(calculate_resistance(9999, 25.0), CONVERSION_FAILED);
        assert_eq!(calculate_temperature(9999, 100.0, 25.0), CONVERSION_FAILED);
        assert_eq!(calculate_resistance(0, 25.0), CONVERSION_FAILED);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(calculate_resistance(100, -200.6), CONVERSION_FAILED);
        assert_eq!(calculate_resistance(100, 850.6), CONVERSION_FAILED);
        assert_eq!(calculate_temperature(100, 5.0, 25.0), CONVERSION_FAILED);
    }

    #[test]
    fn known_values() {
        assert_abs_diff_eq!(calculate_temperature(100, 268.5, 25.0), 462.779, epsilon = 1e-2);
        assert_abs_diff_eq!(calculate_resistance(500, 438.0), 1300.523, epsilon = 1e-2);
    }

    #[test]
    fn round_trip() {
        for code in [50, 100, 200, 500, 1000] {
            for celsius in [-200.0, -42.0, 0.0, 21.5, 600.0, 850.0] {
                let ohms = calculate_resistance(code, celsius);
                assert_ne!(ohms, CONVERSION_FAILED);
                assert_abs_diff_eq!(calculate_temperature(code, ohms, 25.0), celsius, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn sentinel_is_outside_every_range() {
        assert!(CONVERSION_FAILED < crate::MIN_TEMPERATURE);
        for sensor in SensorClass::ALL {
            assert!(CONVERSION_FAILED < sensor.min_resistance());
        }
    }
}
