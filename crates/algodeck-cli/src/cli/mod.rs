//! # CLI Behavior
//!
//! Running `algodeck` with no subcommand is `algodeck list`: browsing is
//! what the tool is for, so it is the path of least resistance.
//!
//! Each invocation is one browsing session. List flags are applied to the
//! session in a fixed order (page size, then filters, then page) because
//! page-size and filter changes both move back to page 1.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Logging setup, context wiring and per-command handlers
//! - `render`: Colored text output and JSON output

mod commands;
mod render;
pub mod setup;

pub use commands::run;
