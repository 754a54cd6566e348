//! Unit families and the dispatch priority order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::tables::{LENGTH, MASS, TEMPERATURE_UNITS, TempUnit};

/// One of the three supported unit families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Mass,
    Temperature,
    Length,
}

/// The order in which families are probed when resolving a source unit.
///
/// The fixed vocabularies never overlap, so the order only matters for
/// determinism should a name ever collide; it must not be reordered.
pub const DISPATCH_ORDER: [UnitFamily; 3] = [
    UnitFamily::Mass,
    UnitFamily::Temperature,
    UnitFamily::Length,
];

impl UnitFamily {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Temperature => "temperature",
            Self::Length => "length",
        }
    }

    /// Whether `unit` belongs to this family's vocabulary.
    pub fn contains(self, unit: &str) -> bool {
        match self {
            Self::Mass => MASS.contains(unit),
            Self::Temperature => TempUnit::from_name(unit).is_some(),
            Self::Length => LENGTH.contains(unit),
        }
    }

    /// The family `unit` belongs to, probing in [`DISPATCH_ORDER`].
    pub fn of(unit: &str) -> Option<UnitFamily> {
        DISPATCH_ORDER.into_iter().find(|f| f.contains(unit))
    }

    /// The unit names of this family, in declaration order.
    pub fn unit_names(self) -> Vec<&'static str> {
        match self {
            Self::Mass => MASS.unit_names().collect(),
            Self::Temperature => TEMPERATURE_UNITS.iter().map(|u| u.as_str()).collect(),
            Self::Length => LENGTH.unit_names().collect(),
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_order_is_mass_temperature_length() {
        assert_eq!(
            DISPATCH_ORDER,
            [
                UnitFamily::Mass,
                UnitFamily::Temperature,
                UnitFamily::Length
            ]
        );
    }

    #[test]
    fn membership_per_family() {
        assert!(UnitFamily::Mass.contains("граммы"));
        assert!(UnitFamily::Temperature.contains("Кельвин"));
        assert!(UnitFamily::Length.contains("мили"));

        assert!(!UnitFamily::Mass.contains("метры"));
        assert!(!UnitFamily::Temperature.contains("граммы"));
        assert!(!UnitFamily::Length.contains("Цельсий"));
    }

    #[test]
    fn family_of_resolves_every_known_unit() {
        assert_eq!(UnitFamily::of("унции"), Some(UnitFamily::Mass));
        assert_eq!(UnitFamily::of("Фаренгейт"), Some(UnitFamily::Temperature));
        assert_eq!(UnitFamily::of("футы"), Some(UnitFamily::Length));
        assert_eq!(UnitFamily::of("литры"), None);
    }

    #[test]
    fn temperature_names_match_table() {
        let names = UnitFamily::Temperature.unit_names();
        for name in &names {
            assert!(UnitFamily::Temperature.contains(name));
        }
        assert_eq!(names.len(), 3);
    }
}
