use crate::callendar_van_dusen::{ratio, slope, A};
use crate::{Error, SensorClass, MAX_TEMPERATURE, MIN_TEMPERATURE};
use libm::fabs;

const MAX_ITERATIONS: u16 = 1000;
const TOLERANCE: f64 = 1e-8;

/// Returns the temperature (°C) at which `sensor` has `resistance` (Ω).
///
/// The Callendar–Van Dusen equation is solved with Newton–Raphson,
/// starting from `initial_guess` (°C). A guess close to the answer (such
/// as the previous reading) saves iterations. Guesses outside
/// [`MIN_TEMPERATURE`]..=[`MAX_TEMPERATURE`] are pulled back to the
/// nearest limit first, so any finite guess converges.
///
/// Returns `Err(Error::OutOfRange)` without iterating if `resistance` is
/// outside the band given by [`SensorClass::min_resistance`] and
/// [`SensorClass::max_resistance`], and `Err(Error::NoConvergence)` if
/// the iteration does not settle to within 1e-8 °C after 1000 steps.
///
/// # Examples
///
/// ```
/// use platinum_rtd::{temperature, Error, SensorClass};
///
/// let celsius = temperature(SensorClass::Pt100, 268.5, 25.0).unwrap();
/// assert!((celsius - 462.779).abs() < 1e-2);
///
/// assert_eq!(temperature(SensorClass::Pt100, 5.0, 25.0), Err(Error::OutOfRange));
/// ```
pub fn temperature(sensor: SensorClass, resistance: f64, initial_guess: f64) -> Result<f64, Error> {
    if !sensor.accepts_resistance(resistance) {
        return Err(Error::OutOfRange);
    }

    newton(
        sensor.nominal_resistance(),
        resistance,
        initial_guess.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE),
        MAX_ITERATIONS,
    )
}

/// Like [`temperature`], but starts from [`estimate_temperature`].
///
/// # Examples
///
/// ```
/// use platinum_rtd::{resistance, temperature_from, SensorClass};
///
/// let ohms = resistance(SensorClass::Pt1000, -150.0).unwrap();
/// let celsius = temperature_from(SensorClass::Pt1000, ohms).unwrap();
///
/// assert!((celsius + 150.0).abs() < 1e-6);
/// ```
pub fn temperature_from(sensor: SensorClass, resistance: f64) -> Result<f64, Error> {
    temperature(sensor, resistance, estimate_temperature(sensor, resistance))
}

/// First-order estimate of the temperature (°C) at `resistance` (Ω),
/// ignoring the B and C terms.
///
/// Within a few tens of degrees below 300 °C; use it as a seed for
/// [`temperature`].
pub fn estimate_temperature(sensor: SensorClass, resistance: f64) -> f64 {
    (resistance / sensor.nominal_resistance() - 1.0) / A
}

fn newton(r0: f64, target: f64, guess: f64, max_iterations: u16) -> Result<f64, Error> {
    let mut t = guess;

    for _ in 0..max_iterations {
        let f = r0 * ratio(t) - target;
        let df = r0 * slope(t);

        let next = t - f / df;

        // A zero slope or a runaway guess makes every later step NaN.
        if !next.is_finite() {
            return Err(Error::NoConvergence);
        }

        if fabs(next - t) < TOLERANCE {
            // Above ~3384 °C the quadratic falls again and has a second,
            // unphysical root.
            if slope(next) <= 0.0 {
                return Err(Error::NoConvergence);
            }
            return Ok(next);
        }

        t = next;
    }

    Err(Error::NoConvergence)
}
