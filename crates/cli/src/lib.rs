//! `fieldcheck-cli` library crate.
//!
//! Re-exports the settings and batch modules for integration testing. The
//! binary entrypoint lives in `main.rs`.

pub mod batch;
pub mod settings;
