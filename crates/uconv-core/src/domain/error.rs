//! Error types for the conversion core.
//!
//! A single error kind covers every expected failure: a supplied unit name
//! that is absent from the relevant family's vocabulary, including the case
//! where the two units belong to different families (the target lookup then
//! fails within the matched family). Unknown units are a normal input
//! class, never a fault — nothing in this crate panics on them.

use thiserror::Error;

use crate::domain::family::{DISPATCH_ORDER, UnitFamily};

/// Root error type for conversion operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConvertError {
    /// One of the supplied unit names is not part of the family that was
    /// asked to convert it. Carries both names for diagnostics.
    #[error("invalid units: cannot convert '{from}' to '{to}'")]
    UnknownUnit { from: String, to: String },
}

impl ConvertError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownUnit { from, to } => {
                let mut suggestions = vec![
                    format!("'{from}' and '{to}' must belong to the same unit family"),
                    "Known units:".into(),
                ];
                for family in DISPATCH_ORDER {
                    suggestions.push(format!(
                        "  • {}: {}",
                        family,
                        family.unit_names().join(", ")
                    ));
                }
                suggestions
            }
        }
    }

    /// The family the source unit was recognised in, if any.
    pub fn source_family(&self) -> Option<UnitFamily> {
        match self {
            Self::UnknownUnit { from, .. } => UnitFamily::of(from),
        }
    }
}

/// Convenient result type alias.
pub type ConvertResult<T> = Result<T, ConvertError>;
