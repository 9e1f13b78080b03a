//! # Data Directory Resolution
//!
//! The deck lives in one directory holding `cards.json` and `config.json`.
//! [`initialize`] picks it in this order:
//!
//! 1. An explicit override (the CLI's `--data` flag).
//! 2. The `ALGODECK_DATA` environment variable.
//! 3. The OS data directory from `directories`, e.g.
//!    `~/.local/share/algodeck` on Linux.
//!
//! The directory is not created here. Reads of a missing directory behave
//! as an empty deck with default config; the first write creates it.

use crate::api::DeckApi;
use crate::commands::DeckPaths;
use crate::config::DeckConfig;
use crate::error::{DeckError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "ALGODECK_DATA";

pub struct DeckContext {
    pub api: DeckApi<FileStore>,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "algodeck", "algodeck")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| DeckError::Store("Could not determine a data directory".to_string()))
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<DeckContext> {
    let data_dir = resolve_data_dir(data_override)?;
    log::debug!("using data directory {}", data_dir.display());

    let config = DeckConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = DeckApi::with_config(store, DeckPaths::new(data_dir), &config);

    Ok(DeckContext { api })
}
