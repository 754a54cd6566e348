//! Domain layer: the closed unit vocabularies and their conversion
//! semantics.
//!
//! Everything in here is pure data plus arithmetic:
//!
//! - **No I/O**: no filesystem, network, or clock access
//! - **No mutation**: all reference tables are `'static` and immutable
//! - **No panics**: unknown units are an expected input class and surface
//!   as [`ConvertError::UnknownUnit`], never as a fault

pub mod error;
pub mod family;
pub mod tables;

// Re-exports for convenience
pub use error::{ConvertError, ConvertResult};
pub use family::{DISPATCH_ORDER, UnitFamily};
pub use tables::{LENGTH, MASS, ScaleTable, TEMPERATURE_UNITS, TempUnit};
