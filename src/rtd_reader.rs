use crate::{estimate_temperature, temperature, ReadError, SensorClass};
use embedded_hal::adc::{Channel, OneShot};

/// Configuration for an `RtdReader`.
///
/// The front end is assumed to be ratiometric: the RTD and a reference
/// resistor carry the same excitation current, and the ADC reference is
/// the voltage across the reference resistor. The resistance is then
/// `adc_value * reference_resistance / ((2^precision - 1) * gain)`.
///
/// - `sensor`: The RTD class connected to the ADC
/// - `reference_resistance`: The reference resistor (Ω)
/// - `precision`: The precision of the ADC in bits (eg. for 12-bit precision, use `12`)
/// - `gain`: The amplifier gain between the RTD and the ADC (use `1` if there is none)
///
/// # Examples
///
/// ```
/// use platinum_rtd::{Config, SensorClass};
///
/// let config = Config {
///     sensor: SensorClass::Pt100,
///     reference_resistance: 430.0, // 430 Ω reference
///     precision: 15,               // 15 bits of precision
///     gain: 1,                     // no amplifier
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub sensor: SensorClass,
    pub reference_resistance: f64,
    pub precision: u32,
    pub gain: u32,
}

impl Config {
    fn ohms_per_count(&self) -> f64 {
        let max_adc_value = 2u32.pow(self.precision) - 1;

        self.reference_resistance / (f64::from(max_adc_value) * f64::from(self.gain))
    }
}

#[derive(Debug)]
pub struct RtdReader<Pin> {
    pin: Pin,
    sensor: SensorClass,
    ohms_per_count: f64,
    last_temperature: Option<f64>,
}

type Error<Adc, ADC, Word, Pin> = ReadError<<Adc as OneShot<ADC, Word, Pin>>::Error>;

impl<Pin> RtdReader<Pin> {
    /// Returns a reader using the provided `config`.
    ///
    /// `reference_resistance` must be positive, `gain` must be non-zero
    /// and `precision` must be between 1 and 31, or this function will
    /// panic when running in debug mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use platinum_rtd::{Config, RtdReader, SensorClass};
    /// # use embedded_hal_mock::adc::MockChan0;
    /// #
    /// # let pin = MockChan0 {};
    ///
    /// let config = Config {
    ///     sensor: SensorClass::Pt1000,
    ///     reference_resistance: 4000.0,
    ///     precision: 12,
    ///     gain: 1,
    /// };
    ///
    /// let reader = RtdReader::new(pin, config);
    /// assert_eq!(reader.sensor(), SensorClass::Pt1000);
    /// ```
    pub fn new<ADC>(pin: Pin, config: Config) -> Self
    where
        Pin: Channel<ADC>,
    {
        debug_assert!(
            config.reference_resistance > 0.0,
            "The reference resistance must be positive"
        );
        debug_assert!(config.gain > 0, "The gain must be non-zero");
        debug_assert!(
            (1..32).contains(&config.precision),
            "The precision must be between 1 and 31 bits"
        );

        Self {
            pin,
            sensor: config.sensor,
            ohms_per_count: config.ohms_per_count(),
            last_temperature: None,
        }
    }

    /// Destroys the reader and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    /// The RTD class this reader converts for.
    pub fn sensor(&self) -> SensorClass {
        self.sensor
    }

    /// The last temperature returned by
    /// [`read_temperature`](RtdReader::read_temperature), if any.
    pub fn last_temperature(&self) -> Option<f64> {
        self.last_temperature
    }

    /// Reads the ADC and returns the RTD resistance (Ω).
    pub fn read_resistance<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> nb::Result<f64, Error<Adc, ADC, Word, Pin>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let adc_value: Word = adc.read(&mut self.pin).map_err(|e| e.map(ReadError::Adc))?;

        Ok(f64::from(adc_value.into()) * self.ohms_per_count)
    }

    /// Reads the ADC and returns the RTD temperature (°C).
    ///
    /// The previous reading seeds the solver, so consecutive reads of a
    /// slowly changing temperature settle in a couple of iterations. The
    /// first read starts from a linear estimate instead. Readings that
    /// fail to convert do not replace the seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use platinum_rtd::{Config, RtdReader, SensorClass};
    /// # use embedded_hal_mock::adc::{Mock, MockChan0, Transaction};
    /// #
    /// # let expectations: [Transaction<u16>; 1] = [Transaction::read(0, 1024)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan0 {};
    ///
    /// let mut reader = RtdReader::new(
    ///     pin,
    ///     Config {
    ///         sensor: SensorClass::Pt100,
    ///         reference_resistance: 400.0,
    ///         precision: 12,
    ///         gain: 1,
    ///     },
    /// );
    ///
    /// // 1024 / 4095 of 400 Ω is just above 100 Ω, a little above 0 °C
    /// let celsius = reader.read_temperature(&mut adc).unwrap();
    /// assert!(celsius > 0.0 && celsius < 0.1);
    /// ```
    pub fn read_temperature<Adc, ADC, Word>(
        &mut self,
        adc: &mut Adc,
    ) -> nb::Result<f64, Error<Adc, ADC, Word, Pin>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
    {
        let resistance = self.read_resistance(adc)?;
        let guess = self
            .last_temperature
            .unwrap_or_else(|| estimate_temperature(self.sensor, resistance));

        let celsius = temperature(self.sensor, resistance, guess)
            .map_err(|e| nb::Error::Other(ReadError::Conversion(e)))?;

        self.last_temperature = Some(celsius);
        Ok(celsius)
    }
}
