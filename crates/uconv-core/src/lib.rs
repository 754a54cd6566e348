//! Uconv Core - unit conversion logic
//!
//! This crate provides the conversion engine for the `uconv` command-line
//! tool: immutable reference tables for three unit families (mass,
//! temperature, length), one conversion routine per family, and a
//! dispatcher that selects the routine from the source unit name.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            uconv-cli (CLI)              │
//! │   (argument parsing, subscriber init)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          ConversionService              │
//! │   (dispatch + per-family routines)      │
//! └──────────────────┬──────────────────────┘
//!                    │ reads
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Data)          │
//! │   (ScaleTable, TempUnit, UnitFamily)    │
//! │        Immutable, process-wide          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The core performs no I/O of its own; it only *emits* tracing events
//! (one per conversion attempt). Subscriber setup belongs to the CLI.
//!
//! ## Usage
//!
//! ```rust
//! use uconv_core::prelude::*;
//!
//! let service = ConversionService::new();
//! let grams = service.dispatch(1.0, "килограммы", "граммы").unwrap();
//! assert_eq!(grams, 1000.0);
//! ```

// Reference data and value types (stable, well-defined API)
pub mod domain;

// Conversion routines and dispatch
pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::ConversionService;
    pub use crate::domain::{
        ConvertError, ConvertResult, DISPATCH_ORDER, LENGTH, MASS, TEMPERATURE_UNITS, ScaleTable,
        TempUnit, UnitFamily,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
