//! Temperature and resistance conversions for platinum RTDs (PT50, PT100,
//! PT200, PT500 and PT1000), using the Callendar–Van Dusen equation from
//! -200 °C to +850 °C.
//!
//! The conversions are pure functions on `f64` and never allocate, so
//! they can be called from interrupt handlers and from several threads
//! at once.
//!
//! # Examples
//!
//! ```
//! use platinum_rtd::{resistance, temperature, SensorClass};
//!
//! // Temperature (°C) of a PT100 reading 268.5 Ω, starting the solver at 25 °C
//! let celsius = temperature(SensorClass::Pt100, 268.5, 25.0).unwrap();
//! assert!((celsius - 462.78).abs() < 1e-2);
//!
//! // Resistance (Ω) of a PT500 at 438 °C
//! let ohms = resistance(SensorClass::Pt500, 438.0).unwrap();
//! assert!((ohms - 1300.52).abs() < 1e-2);
//! ```
//!
//! [`RtdReader`] wraps an `embedded-hal` ADC channel and converts raw
//! readings from a ratiometric front end. [`compat`] offers the same
//! conversions with raw sensor codes and a sentinel failure value.

#![cfg_attr(not(test), no_std)]

pub mod callendar_van_dusen;
pub mod compat;
mod error;
mod rtd_reader;
mod sensor;
mod solver;

pub use callendar_van_dusen::{resistance, MAX_TEMPERATURE, MIN_TEMPERATURE};
pub use error::{Error, ReadError};
pub use rtd_reader::{Config, RtdReader};
pub use sensor::SensorClass;
pub use solver::{estimate_temperature, temperature, temperature_from};
