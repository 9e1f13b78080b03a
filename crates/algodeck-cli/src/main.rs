//! # Algodeck CLI
//!
//! The binary is thin: it calls `cli::run()` and turns an error into a
//! message on stderr and exit code 1. Parsing lives in `cli/setup.rs`,
//! dispatch in `cli/commands.rs` and terminal output in `cli/render.rs`.
//!
//! Everything from `algodeck::api` inward is UI agnostic. This crate owns
//! every user-facing concern: arguments, logging setup, rendering and exit
//! codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
