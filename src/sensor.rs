use crate::Error;
use core::fmt;

/// Platinum RTD classes, named after their resistance at 0 °C.
///
/// The discriminant is the raw sensor code (`100` for a PT100, and so
/// on), which is also what [`SensorClass::try_from`] accepts.
///
/// # Examples
///
/// ```
/// use platinum_rtd::{Error, SensorClass};
///
/// assert_eq!(SensorClass::try_from(500), Ok(SensorClass::Pt500));
/// assert_eq!(SensorClass::try_from(9999), Err(Error::UnknownSensor));
/// assert_eq!(SensorClass::Pt1000.nominal_resistance(), 1000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
#[repr(u16)]
pub enum SensorClass {
    Pt50 = 50,
    Pt100 = 100,
    Pt200 = 200,
    Pt500 = 500,
    Pt1000 = 1000,
}

struct Limits {
    r0: f64,
    min: f64,
    max: f64,
}

// Indexed by `SensorClass::index`. The bounds are the resistances at
// -200 °C and +850 °C, rounded outwards to one decimal.
const LIMITS: [Limits; 5] = [
    Limits { r0: 50.0, min: 9.2, max: 195.3 },
    Limits { r0: 100.0, min: 18.3, max: 390.6 },
    Limits { r0: 200.0, min: 36.5, max: 781.3 },
    Limits { r0: 500.0, min: 91.5, max: 1953.0 },
    Limits { r0: 1000.0, min: 182.5, max: 3906.5 },
];

impl SensorClass {
    /// Every supported class, smallest first.
    pub const ALL: [SensorClass; 5] = [
        SensorClass::Pt50,
        SensorClass::Pt100,
        SensorClass::Pt200,
        SensorClass::Pt500,
        SensorClass::Pt1000,
    ];

    /// The raw numeric code of this class.
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Resistance at 0 °C (Ω).
    pub const fn nominal_resistance(self) -> f64 {
        LIMITS[self.index()].r0
    }

    /// Lowest resistance accepted by [`temperature`](crate::temperature) (Ω).
    pub const fn min_resistance(self) -> f64 {
        LIMITS[self.index()].min
    }

    /// Highest resistance accepted by [`temperature`](crate::temperature) (Ω).
    pub const fn max_resistance(self) -> f64 {
        LIMITS[self.index()].max
    }

    pub(crate) fn accepts_resistance(self, resistance: f64) -> bool {
        let limits = &LIMITS[self.index()];
        resistance >= limits.min && resistance <= limits.max
    }

    const fn index(self) -> usize {
        match self {
            SensorClass::Pt50 => 0,
            SensorClass::Pt100 => 1,
            SensorClass::Pt200 => 2,
            SensorClass::Pt500 => 3,
            SensorClass::Pt1000 => 4,
        }
    }
}

impl TryFrom<u16> for SensorClass {
    type Error = Error;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        SensorClass::ALL
            .into_iter()
            .find(|sensor| sensor.code() == code)
            .ok_or(Error::UnknownSensor)
    }
}

impl fmt::Display for SensorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PT{}", self.code())
    }
}
