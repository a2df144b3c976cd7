//! The Doppler-broadening input deck, the worked example of the card
//! machinery. Five cards: tape units, material selection, tolerances, a
//! counted run of temperatures, and a sentinel-terminated run of
//! further materials.

use tracing::debug;

use crate::deck::{
    extract, extract_list, parse_integer, parse_quantity, parse_real, Argument, Card,
    CardSequence, DeckError, FieldSpec, Policy, Quantity, Unit,
};
use crate::reading::RecordReader;

/// Tape unit numbers live in the conventional window.
pub struct SourceTape;

impl FieldSpec for SourceTape {
    type Value = i64;

    const NAME: &'static str = "source tape";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::Between(20, 99)
    }
}

pub struct InputTape;

impl FieldSpec for InputTape {
    type Value = i64;

    const NAME: &'static str = "input tape";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::Between(20, 99)
    }
}

pub struct OutputTape;

impl FieldSpec for OutputTape {
    type Value = i64;

    const NAME: &'static str = "output tape";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::Between(20, 99)
    }
}

pub struct MaterialId;

impl FieldSpec for MaterialId {
    type Value = i64;

    const NAME: &'static str = "material";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::Between(1, 9999)
    }
}

pub struct TemperatureCount;

impl FieldSpec for TemperatureCount {
    type Value = i64;

    const NAME: &'static str = "temperature count";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::Between(1, 10)
    }
}

pub struct RestartFlag;

impl FieldSpec for RestartFlag {
    type Value = i64;

    const NAME: &'static str = "restart";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::OneOf(&[0, 1])
    }

    fn default_value() -> Option<i64> {
        Some(0)
    }
}

pub struct BootstrapFlag;

impl FieldSpec for BootstrapFlag {
    type Value = i64;

    const NAME: &'static str = "bootstrap";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::OneOf(&[0, 1])
    }

    fn default_value() -> Option<i64> {
        Some(0)
    }
}

pub struct StartTemperature;

impl FieldSpec for StartTemperature {
    type Value = Quantity;

    const NAME: &'static str = "starting temperature";

    fn convert(token: &str) -> Option<Quantity> {
        parse_quantity(token, Unit::Kelvin)
    }

    fn policy() -> Policy<Quantity> {
        Policy::AtLeast(Quantity::kelvin(0.0))
    }

    fn default_value() -> Option<Quantity> {
        Some(Quantity::kelvin(0.0))
    }
}

pub struct ThinningTolerance;

impl FieldSpec for ThinningTolerance {
    type Value = f64;

    const NAME: &'static str = "thinning tolerance";

    fn convert(token: &str) -> Option<f64> {
        parse_real(token)
    }

    fn policy() -> Policy<f64> {
        Policy::Above(0.0)
    }
}

pub struct EnergyCeiling;

impl FieldSpec for EnergyCeiling {
    type Value = Quantity;

    const NAME: &'static str = "energy ceiling";

    fn convert(token: &str) -> Option<Quantity> {
        parse_quantity(token, Unit::ElectronVolt)
    }

    fn default_value() -> Option<Quantity> {
        Some(Quantity::electron_volts(1.0))
    }
}

pub struct RelativeError;

impl FieldSpec for RelativeError {
    type Value = f64;

    const NAME: &'static str = "relative error";

    fn convert(token: &str) -> Option<f64> {
        parse_real(token)
    }

    fn policy() -> Policy<f64> {
        Policy::AtLeast(0.0)
    }

    fn default_value() -> Option<f64> {
        Some(0.0)
    }
}

pub struct IntegralTolerance;

impl FieldSpec for IntegralTolerance {
    type Value = Quantity;

    const NAME: &'static str = "integral tolerance";

    fn convert(token: &str) -> Option<Quantity> {
        parse_quantity(token, Unit::Barn)
    }

    fn policy() -> Policy<Quantity> {
        Policy::AtLeast(Quantity::barns(0.0))
    }

    fn default_value() -> Option<Quantity> {
        Some(Quantity::barns(0.0))
    }
}

pub struct Temperature;

impl FieldSpec for Temperature {
    type Value = Quantity;

    const NAME: &'static str = "temperature";

    fn convert(token: &str) -> Option<Quantity> {
        parse_quantity(token, Unit::Kelvin)
    }

    fn policy() -> Policy<Quantity> {
        Policy::AtLeast(Quantity::kelvin(0.0))
    }
}

/// Further materials are identified by id alone; zero is the sentinel
/// that ends the run.
pub struct ContinuationId;

impl FieldSpec for ContinuationId {
    type Value = i64;

    const NAME: &'static str = "material";

    fn convert(token: &str) -> Option<i64> {
        parse_integer(token)
    }

    fn policy() -> Policy<i64> {
        Policy::AtLeast(0)
    }
}

/// Which tapes the run reads from and writes to.
#[derive(Debug)]
pub struct TapeCard<'i> {
    pub source: Argument<'i, SourceTape>,
    pub input: Argument<'i, InputTape>,
    pub output: Argument<'i, OutputTape>,
}

impl<'i> Card<'i> for TapeCard<'i> {
    const NAME: &'static str = "tapes";

    fn fields(reader: &mut RecordReader<'i>) -> Result<Self, DeckError<'i>> {
        Ok(TapeCard {
            source: extract(reader)?,
            input: extract(reader)?,
            output: extract(reader)?,
        })
    }
}

/// The first material to broaden, how many temperatures to broaden it
/// to, and the restart behavior. The trailing fields are routinely
/// omitted in real decks and take their defaults.
#[derive(Debug)]
pub struct MaterialCard<'i> {
    pub material: Argument<'i, MaterialId>,
    pub temperatures: Argument<'i, TemperatureCount>,
    pub restart: Argument<'i, RestartFlag>,
    pub bootstrap: Argument<'i, BootstrapFlag>,
    pub start_temperature: Argument<'i, StartTemperature>,
}

impl<'i> Card<'i> for MaterialCard<'i> {
    const NAME: &'static str = "material";

    fn fields(reader: &mut RecordReader<'i>) -> Result<Self, DeckError<'i>> {
        Ok(MaterialCard {
            material: extract(reader)?,
            temperatures: extract(reader)?,
            restart: extract(reader)?,
            bootstrap: extract(reader)?,
            start_temperature: extract(reader)?,
        })
    }
}

/// Accuracy controls for the broadening itself.
#[derive(Debug)]
pub struct ToleranceCard<'i> {
    pub thinning: Argument<'i, ThinningTolerance>,
    pub energy_ceiling: Argument<'i, EnergyCeiling>,
    pub relative_error: Argument<'i, RelativeError>,
    pub integral_tolerance: Argument<'i, IntegralTolerance>,
}

impl<'i> Card<'i> for ToleranceCard<'i> {
    const NAME: &'static str = "tolerances";

    fn fields(reader: &mut RecordReader<'i>) -> Result<Self, DeckError<'i>> {
        Ok(ToleranceCard {
            thinning: extract(reader)?,
            energy_ceiling: extract(reader)?,
            relative_error: extract(reader)?,
            integral_tolerance: extract(reader)?,
        })
    }
}

/// The target temperatures, as many as the material card declared. Not
/// a fixed-shape card, so it is read outside the Card trait; the
/// validation boundary and record clearing are the same.
#[derive(Debug)]
pub struct TemperatureCard<'i> {
    pub values: Vec<Argument<'i, Temperature>>,
}

impl<'i> TemperatureCard<'i> {
    const NAME: &'static str = "temperatures";

    pub fn read(
        reader: &mut RecordReader<'i>,
        count: i64,
    ) -> Result<TemperatureCard<'i>, DeckError<'i>> {
        match extract_list(reader, count as usize) {
            Ok(values) => {
                reader.discard_remainder();
                Ok(TemperatureCard { values })
            }
            Err(error) => {
                debug!("trouble while validating {} card", Self::NAME);
                Err(error.in_card(Self::NAME))
            }
        }
    }

    pub fn first(&self) -> Option<Quantity> {
        self.values
            .first()
            .map(|argument| argument.value)
    }

    pub fn last(&self) -> Option<Quantity> {
        self.values
            .last()
            .map(|argument| argument.value)
    }
}

/// One further material to broaden with the same settings.
#[derive(Debug)]
pub struct MaterialContinuation<'i> {
    pub material: Argument<'i, ContinuationId>,
}

impl<'i> MaterialContinuation<'i> {
    pub fn is_terminal(&self) -> bool {
        self.material
            .value
            == 0
    }
}

impl<'i> Card<'i> for MaterialContinuation<'i> {
    const NAME: &'static str = "continuation";

    fn fields(reader: &mut RecordReader<'i>) -> Result<Self, DeckError<'i>> {
        Ok(MaterialContinuation {
            material: extract(reader)?,
        })
    }
}

/// A fully validated deck. Construction either succeeds with every
/// field checked or fails with the first problem found; there is no
/// partial-deck mode.
#[derive(Debug)]
pub struct BroadenDeck<'i> {
    pub tapes: TapeCard<'i>,
    pub material: MaterialCard<'i>,
    pub tolerances: ToleranceCard<'i>,
    pub temperatures: TemperatureCard<'i>,
    pub continuations: CardSequence<MaterialContinuation<'i>>,
}

impl<'i> BroadenDeck<'i> {
    pub fn parse(content: &'i str) -> Result<BroadenDeck<'i>, DeckError<'i>> {
        let mut reader = RecordReader::new(content);
        BroadenDeck::read(&mut reader)
    }

    pub fn read(reader: &mut RecordReader<'i>) -> Result<BroadenDeck<'i>, DeckError<'i>> {
        let tapes = TapeCard::read(reader)?;
        let material = MaterialCard::read(reader)?;
        let tolerances = ToleranceCard::read(reader)?;

        let count = material
            .temperatures
            .value;
        let temperatures = TemperatureCard::read(reader, count)?;

        let continuations =
            CardSequence::until_sentinel(reader, MaterialContinuation::is_terminal)?;

        Ok(BroadenDeck {
            tapes,
            material,
            tolerances,
            temperatures,
            continuations,
        })
    }
}
