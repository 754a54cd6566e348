//! Reference data: the closed vocabulary of units per family.
//!
//! # Design
//!
//! Mass and length are *scale-based* families: every unit carries a factor
//! expressing how many base units (grams, meters) one unit equals, and any
//! conversion is `value * factor(from) / factor(to)`.
//!
//! Temperature is *formula-based*: conversions are affine (scale + offset),
//! so there is no shared multiplicative base. The nine ordered pairs are
//! spelled out as an explicit match rather than a table of function values;
//! each pair applies its formula directly, which avoids accumulating
//! floating-point error through a chained base conversion.
//!
//! Unit names are the Russian display labels the tool has always used;
//! they double as identifiers across the whole program.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Scale-based families ──────────────────────────────────────────────────────

/// A scale-based unit family: an ordered set of unit names, each mapped to
/// the number of base units one unit of that name equals.
///
/// Invariant: the base unit is a member of `units` with factor `1.0`.
pub struct ScaleTable {
    /// Name of the base unit (factor 1).
    pub base: &'static str,
    units: &'static [(&'static str, f64)],
}

impl ScaleTable {
    /// Factor of `unit` relative to the base unit, or `None` if the unit
    /// is not part of this family.
    pub fn factor_of(&self, unit: &str) -> Option<f64> {
        self.units
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, factor)| *factor)
    }

    /// Whether `unit` belongs to this family.
    pub fn contains(&self, unit: &str) -> bool {
        self.factor_of(unit).is_some()
    }

    /// The unit names of this family, in declaration order.
    pub fn unit_names(&self) -> impl Iterator<Item = &'static str> {
        self.units.iter().map(|(name, _)| *name)
    }
}

/// Mass units, grams base.
pub static MASS: ScaleTable = ScaleTable {
    base: "граммы",
    units: &[
        ("граммы", 1.0),
        ("килограммы", 1000.0),
        ("фунты", 453.592),
        ("унции", 28.3495),
    ],
};

/// Length units, meters base.
pub static LENGTH: ScaleTable = ScaleTable {
    base: "метры",
    units: &[
        ("метры", 1.0),
        ("километры", 1000.0),
        ("мили", 1609.34),
        ("футы", 0.3048),
    ],
};

// ── Temperature ───────────────────────────────────────────────────────────────

/// A temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

/// All temperature units, in declaration order.
pub const TEMPERATURE_UNITS: [TempUnit; 3] =
    [TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin];

impl TempUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "Цельсий",
            Self::Fahrenheit => "Фаренгейт",
            Self::Kelvin => "Кельвин",
        }
    }

    /// Look a unit up by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        TEMPERATURE_UNITS.into_iter().find(|u| u.as_str() == name)
    }

    /// Apply the pairwise conversion formula for `self → target`.
    ///
    /// All nine ordered pairs are covered; self-pairs are the identity.
    /// No value-range validation happens here (values below absolute zero
    /// convert like any other — the relation is purely formulaic).
    pub fn convert_to(self, target: TempUnit, value: f64) -> f64 {
        use TempUnit::{Celsius, Fahrenheit, Kelvin};
        match (self, target) {
            (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (Celsius, Kelvin) => value + 273.15,
            (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
            (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
            (Kelvin, Celsius) => value - 273.15,
            (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
            (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
        }
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
