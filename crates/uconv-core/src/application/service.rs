//! The conversion service: one routine per family plus the dispatcher.
//!
//! Every routine emits exactly one tracing event per call — `info` with the
//! computed value on success, `error` with both unit names on failure — as
//! part of the call itself, so callers never have to remember to log. The
//! dispatcher only logs in the one case no routine is reached (a source
//! unit no family recognises); a failed top-level request therefore
//! produces exactly one error record, never zero or two.

use tracing::{error, info};

use crate::domain::{
    error::{ConvertError, ConvertResult},
    family::{DISPATCH_ORDER, UnitFamily},
    tables::{LENGTH, MASS, ScaleTable, TempUnit},
};

/// Stateless conversion engine over the static reference tables.
#[derive(Debug, Default)]
pub struct ConversionService;

impl ConversionService {
    pub fn new() -> Self {
        Self
    }

    /// Convert a mass value between two mass units.
    ///
    /// Scale-based: the value is taken to grams via the source factor, then
    /// divided by the target factor. Full floating-point precision, no
    /// rounding. Zero and negative values convert linearly; membership of
    /// the unit names is the only validation performed.
    pub fn convert_mass(&self, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
        self.convert_scaled(UnitFamily::Mass, &MASS, value, from, to)
    }

    /// Convert a length value between two length units (meters pivot).
    pub fn convert_length(&self, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
        self.convert_scaled(UnitFamily::Length, &LENGTH, value, from, to)
    }

    /// Convert a temperature value between two temperature units.
    ///
    /// Formula-based: the pairwise affine formula is applied directly, with
    /// no intermediate base unit.
    pub fn convert_temperature(&self, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
        match (TempUnit::from_name(from), TempUnit::from_name(to)) {
            (Some(from_unit), Some(to_unit)) => {
                let converted = from_unit.convert_to(to_unit, value);
                info!("temperature conversion: {value} {from} = {converted} {to}");
                Ok(converted)
            }
            _ => Err(self.fail(UnitFamily::Temperature, from, to)),
        }
    }

    /// Resolve the family of `from` and delegate to its routine.
    ///
    /// Families are probed in [`DISPATCH_ORDER`]. When no family recognises
    /// the source unit, no routine is called and the failure is logged
    /// here instead.
    pub fn dispatch(&self, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
        for family in DISPATCH_ORDER {
            if family.contains(from) {
                return self.convert_in(family, value, from, to);
            }
        }
        error!("conversion failed: unit '{from}' does not belong to any known family");
        Err(ConvertError::UnknownUnit {
            from: from.into(),
            to: to.into(),
        })
    }

    /// The routine for a specific family.
    pub fn convert_in(
        &self,
        family: UnitFamily,
        value: f64,
        from: &str,
        to: &str,
    ) -> ConvertResult<f64> {
        match family {
            UnitFamily::Mass => self.convert_mass(value, from, to),
            UnitFamily::Temperature => self.convert_temperature(value, from, to),
            UnitFamily::Length => self.convert_length(value, from, to),
        }
    }

    fn convert_scaled(
        &self,
        family: UnitFamily,
        table: &ScaleTable,
        value: f64,
        from: &str,
        to: &str,
    ) -> ConvertResult<f64> {
        let (Some(from_factor), Some(to_factor)) = (table.factor_of(from), table.factor_of(to))
        else {
            return Err(self.fail(family, from, to));
        };
        let in_base = value * from_factor;
        let converted = in_base / to_factor;
        info!("{family} conversion: {value} {from} = {converted} {to}");
        Ok(converted)
    }

    fn fail(&self, family: UnitFamily, from: &str, to: &str) -> ConvertError {
        error!("{family} conversion failed: invalid units '{from}' to '{to}'");
        ConvertError::UnknownUnit {
            from: from.into(),
            to: to.into(),
        }
    }
}
