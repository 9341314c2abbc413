//! The Callendar–Van Dusen equation and its IEC 60751 coefficients.
//!
//! ```
//! use platinum_rtd::callendar_van_dusen::{A, B, C};
//!
//! // R(100 °C) / R0 for any platinum RTD
//! assert!((1.0 + A * 100.0 + B * 100.0 * 100.0 - 1.385055).abs() < 1e-6);
//! assert!(C < 0.0);
//! ```

use crate::{Error, SensorClass};

/// Callendar–Van Dusen coefficient A (IEC 60751).
pub const A: f64 = 3.908302087e-3;
/// Callendar–Van Dusen coefficient B (IEC 60751).
pub const B: f64 = -5.775000000e-7;
/// Callendar–Van Dusen coefficient C, only used below 0 °C (IEC 60751).
pub const C: f64 = -4.183010000e-12;

/// Lowest temperature accepted by [`resistance`] (°C).
pub const MIN_TEMPERATURE: f64 = -200.5;
/// Highest temperature accepted by [`resistance`] (°C).
pub const MAX_TEMPERATURE: f64 = 850.5;

/// Returns the resistance (Ω) of `sensor` at `temperature` (°C).
///
/// Temperatures from -200 °C to +850 °C are supported, with half a
/// degree of slack on either end. Anything else, including `NaN`,
/// returns `Err(Error::OutOfRange)`.
///
/// # Examples
///
/// ```
/// use platinum_rtd::{resistance, Error, SensorClass};
///
/// assert_eq!(resistance(SensorClass::Pt100, 0.0), Ok(100.0));
///
/// let ohms = resistance(SensorClass::Pt500, 438.0).unwrap();
/// assert!((ohms - 1300.523).abs() < 1e-2);
///
/// assert_eq!(resistance(SensorClass::Pt100, 900.0), Err(Error::OutOfRange));
/// ```
pub fn resistance(sensor: SensorClass, temperature: f64) -> Result<f64, Error> {
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(Error::OutOfRange);
    }

    Ok(sensor.nominal_resistance() * ratio(temperature))
}

/// `R(t) / R0`, picking the branch by the sign of `t`.
pub(crate) fn ratio(t: f64) -> f64 {
    let t2 = t * t;

    if t >= 0.0 {
        1.0 + A * t + B * t2
    } else {
        1.0 + A * t + B * t2 + C * (t - 100.0) * t2 * t
    }
}

/// `d(R(t) / R0) / dt`, on the same branch as [`ratio`].
pub(crate) fn slope(t: f64) -> f64 {
    if t >= 0.0 {
        A + 2.0 * B * t
    } else {
        let t2 = t * t;
        A + 2.0 * B * t + C * (4.0 * t2 * t - 300.0 * t2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn zero_degrees_is_nominal() {
        for sensor in SensorClass::ALL {
            assert_eq!(resistance(sensor, 0.0), Ok(sensor.nominal_resistance()));
            assert_eq!(resistance(sensor, -0.0), Ok(sensor.nominal_resistance()));
        }
    }

    #[test]
    fn known_values() {
        assert_abs_diff_eq!(resistance(SensorClass::Pt500, 438.0).unwrap(), 1300.523, epsilon = 1e-2);
        assert_abs_diff_eq!(resistance(SensorClass::Pt100, 100.0).unwrap(), 138.5055, epsilon = 1e-3);
        assert_abs_diff_eq!(resistance(SensorClass::Pt100, -100.0).unwrap(), 60.2558, epsilon = 1e-3);
        assert_abs_diff_eq!(resistance(SensorClass::Pt1000, -50.0).unwrap(), 803.0627, epsilon = 1e-3);
        assert_abs_diff_eq!(resistance(SensorClass::Pt50, 850.0).unwrap(), 195.2407, epsilon = 1e-3);
    }

    #[test]
    fn boundaries() {
        assert!(resistance(SensorClass::Pt100, -200.5).is_ok());
        assert!(resistance(SensorClass::Pt100, 850.5).is_ok());
        assert_eq!(resistance(SensorClass::Pt100, -200.6), Err(Error::OutOfRange));
        assert_eq!(resistance(SensorClass::Pt100, 850.6), Err(Error::OutOfRange));
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(resistance(SensorClass::Pt100, f64::NAN), Err(Error::OutOfRange));
        assert_eq!(resistance(SensorClass::Pt100, f64::INFINITY), Err(Error::OutOfRange));
        assert_eq!(resistance(SensorClass::Pt100, f64::NEG_INFINITY), Err(Error::OutOfRange));
    }

    #[test]
    fn scales_with_nominal_resistance() {
        let pt100 = resistance(SensorClass::Pt100, 321.0).unwrap();
        let pt1000 = resistance(SensorClass::Pt1000, 321.0).unwrap();

        assert_abs_diff_eq!(pt1000, 10.0 * pt100, epsilon = 1e-9);
    }

    #[test]
    fn continuous_at_zero() {
        assert_eq!(ratio(0.0), 1.0);
        assert_eq!(ratio(-1e-300), 1.0);

        assert_abs_diff_eq!(ratio(-1e-9), ratio(1e-9), epsilon = 1e-10);
        assert_abs_diff_eq!(slope(-1e-9), slope(1e-9), epsilon = 1e-12);
        assert_eq!(slope(0.0), A);
    }

    #[test]
    fn slope_matches_finite_difference() {
        let h = 1e-4;

        for t in [-199.0, -120.0, -30.5, -1.0, 1.0, 42.0, 400.0, 849.0] {
            let numeric = (ratio(t + h) - ratio(t - h)) / (2.0 * h);
            assert_abs_diff_eq!(slope(t), numeric, epsilon = 1e-9);
        }
    }

    #[test]
    fn increasing_over_range() {
        let mut previous = resistance(SensorClass::Pt100, -200.0).unwrap();

        for step in 1..=1050 {
            let current = resistance(SensorClass::Pt100, -200.0 + step as f64).unwrap();
            assert!(current > previous);
            previous = current;
        }
    }
}
