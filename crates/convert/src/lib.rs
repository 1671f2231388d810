//! `keyferry-convert` — TrueKey export conversion engine.
//!
//! Pure engine crate: receives the export text, returns mapped output rows
//! and a summary. No CLI or file-system dependencies.
//!
//! The TrueKey CSV export is not delimiter-safe: fields are unquoted, so
//! passwords and note bodies containing commas shred into extra tokens, and
//! a note body with line breaks spills across physical lines. The only
//! reliable structure is the `tk-csv-v2` sentinel closing every record.
//! Recovery happens in two stages:
//!
//! - [`assemble::assemble_records`] groups physical lines into logical
//!   records on the sentinel;
//! - [`reconcile::reconcile`] maps each record's tokens back onto the
//!   header columns, absorbing surplus tokens into the password column and
//!   digging a note's name and body out of its padding.

pub mod assemble;
pub mod config;
pub mod engine;
pub mod error;
pub mod header;
pub mod mapping;
pub mod model;
pub mod reconcile;

pub use config::{ConvertConfig, OutputFormat};
pub use engine::run;
pub use error::ConvertError;
pub use header::Header;
pub use model::{ConvertOutput, ConvertReport, ConvertSummary, RecordKind, Reconciled};
