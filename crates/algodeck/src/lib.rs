//! # Algodeck Architecture
//!
//! Algodeck is a browsable catalog of algorithm reference cards. The library
//! is UI-agnostic; the `algodeck` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (algodeck-cli crate)                                   │
//! │  - Parses arguments, renders results, owns exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - One browsing session: filter state + page position       │
//! │  - Filter changes reset the page                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - browse, view, tags, init, import, delete, config         │
//! │  - Built on filter/ and pagination.rs                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CardStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Browsing Pipeline
//!
//! `list_cards` → [`filter::apply`] (filter, then stable sort) →
//! [`pagination::slice`] → visible page. The pipeline is recomputed from
//! scratch on every browse; there are no caches to invalidate.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every UI talks to
//! - [`commands`]: Business logic for each command
//! - [`filter`]: Filter state, controller and the filter/sort engine
//! - [`pagination`]: Page windows, counters and page links
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Card`, `Classification`, `Difficulty`
//! - [`catalog`]: The built-in cards seeded by `init`
//! - [`config`]: Browsing defaults in `config.json`
//! - [`init`]: Data directory resolution
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod pagination;
pub mod store;
