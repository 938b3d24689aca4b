//! Transcript input handling
//!
//! The evaluator core is UI-agnostic; this module plays the role of the
//! entry boundary, reading per-term course rows from a sectioned CSV file.

pub mod csv_parser;

pub use csv_parser::{parse_transcript_csv, Transcript};
