//! Application layer: the conversion routines and the family dispatcher.

pub mod service;

pub use service::ConversionService;
