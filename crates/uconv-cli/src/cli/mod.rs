//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults. No conversion logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Long help shared by `--from` and `--to`, listing the closed vocabulary.
const UNIT_HELP: &str = "Known units per family:\n\
    \x20 mass:        граммы, килограммы, фунты, унции\n\
    \x20 temperature: Цельсий, Фаренгейт, Кельвин\n\
    \x20 length:      метры, километры, мили, футы";

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "uconv",
    bin_name = "uconv",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Convert a value between mass, temperature or length units",
    long_about = "Uconv converts a numeric value between two named units of \
                  the same family and appends one record per attempt to a \
                  log file.",
    after_help = "EXAMPLES:\n\
        \x20 uconv 1000 --from граммы  --to килограммы\n\
        \x20 uconv 0    --from Цельсий --to Фаренгейт\n\
        \x20 uconv 1.5  --from мили    --to километры --log runs/convert.log",
)]
pub struct Cli {
    /// Numeric value to convert (zero and negative values accepted).
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    /// Source unit name.
    #[arg(
        short = 'f',
        long = "from",
        value_name = "UNIT",
        help = "Source unit name",
        long_help = UNIT_HELP,
    )]
    pub from: String,

    /// Target unit name.
    #[arg(
        short = 't',
        long = "to",
        value_name = "UNIT",
        help = "Target unit name",
        long_help = UNIT_HELP,
    )]
    pub to: String,

    /// Log file for conversion records.
    ///
    /// Falls back to the configured default (`converter.log`) when omitted.
    #[arg(long = "log", value_name = "FILE", help = "Log file path")]
    pub log: Option<PathBuf>,

    /// Flags that tune diagnostics, never the result.
    #[command(flatten)]
    pub global: GlobalArgs,
}
