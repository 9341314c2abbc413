use core::fmt;

/// Reasons a conversion can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
pub enum Error {
    /// The raw sensor code is not one of 50, 100, 200, 500 or 1000.
    UnknownSensor,
    /// The temperature or resistance lies outside the supported range.
    OutOfRange,
    /// The solver did not settle within its iteration limit, or produced
    /// a non-finite estimate.
    NoConvergence,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownSensor => f.write_str("unknown RTD sensor class"),
            Error::OutOfRange => f.write_str("value outside the supported range"),
            Error::NoConvergence => f.write_str("temperature solver did not converge"),
        }
    }
}

/// Error returned by [`RtdReader`](crate::RtdReader) reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
pub enum ReadError<E> {
    /// The ADC read failed.
    Adc(E),
    /// The ADC value could not be converted.
    Conversion(Error),
}

impl<E> From<Error> for ReadError<E> {
    fn from(error: Error) -> Self {
        ReadError::Conversion(error)
    }
}

impl<E: fmt::Debug> fmt::Display for ReadError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Adc(error) => write!(f, "ADC read failed: {:?}", error),
            ReadError::Conversion(error) => write!(f, "{}", error),
        }
    }
}
