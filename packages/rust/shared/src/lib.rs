//! Shared types, error model, and configuration for coursegrid.
//!
//! This crate is the foundation depended on by the parser and CLI crates.
//! It provides:
//! - [`CourseGridError`] — the unified error type
//! - Domain types ([`CourseSession`], [`TimePeriod`], [`Schedule`], [`WeekParity`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, init_config, init_config_in,
    load_config, load_config_from,
};
pub use error::{CourseGridError, Result};
pub use types::{CourseSession, Schedule, TimePeriod, WeekParity};
