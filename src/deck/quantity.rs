//! physical quantities with fixed units

use std::cmp::Ordering;
use std::fmt;

/// The units that appear in deck fields. Which unit applies is fixed by
/// field identity; it is never inferred from the input text, and no
/// conversion between units is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Kelvin,
    ElectronVolt,
    Barn,
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kelvin => "K",
            Unit::ElectronVolt => "eV",
            Unit::Barn => "b",
        }
    }
}

/// A magnitude tagged with its unit. Quantities of differing units are
/// never equal and do not order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Quantity {
        Quantity { magnitude, unit }
    }

    pub fn kelvin(magnitude: f64) -> Quantity {
        Quantity::new(magnitude, Unit::Kelvin)
    }

    pub fn electron_volts(magnitude: f64) -> Quantity {
        Quantity::new(magnitude, Unit::ElectronVolt)
    }

    pub fn barns(magnitude: f64) -> Quantity {
        Quantity::new(magnitude, Unit::Barn)
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        if self.unit == other.unit {
            self.magnitude
                .partial_cmp(&other.magnitude)
        } else {
            None
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit.symbol())
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn like_units_compare() {
        assert_eq!(Quantity::kelvin(300.0), Quantity::kelvin(300.0));
        assert!(Quantity::kelvin(300.0) < Quantity::kelvin(1200.0));
        assert!(Quantity::barns(1e-7) >= Quantity::barns(0.0));
    }

    #[test]
    fn differing_units_do_not_compare() {
        let temperature = Quantity::kelvin(300.0);
        let energy = Quantity::electron_volts(300.0);

        assert_ne!(temperature, energy);
        assert_eq!(temperature.partial_cmp(&energy), None);
    }

    #[test]
    fn display_carries_the_symbol() {
        assert_eq!(Quantity::kelvin(293.6).to_string(), "293.6 K");
        assert_eq!(
            Quantity::electron_volts(1.0).to_string(),
            "1 eV"
        );
        assert_eq!(Quantity::barns(0.02).to_string(), "0.02 b");
    }
}
