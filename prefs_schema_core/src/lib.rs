//! `prefs_schema_core` turns the `power_manager` pref declarations and their
//! on-disk defaults into the YAML schema fragment that chromeos-config uses
//! to validate `power` settings.
//!
//! ## Processing Pipeline
//!
//! ```text
//! power_constants.cc
//!   → extract (regex over the whole text, one key per `const char k…Pref[]`)
//!   → generate (probe default_prefs/<key>, normalize contents to one line)
//!   → render (shared anchor block + one mapping entry per pref)
//!   → emit (file or stdout, trailing newline)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Input locations, resolved from a platform2 checkout root or
//!   given explicitly.
//! - [`extract`] — The declaration pattern and key extraction.
//!
//! ## Key Types
//!
//! - [`GeneratorConfig`] — Where the constants file and defaults directory
//!   live.
//! - [`PreferenceEntry`] — One pref with its schema name and optional
//!   default.
//! - [`SchemaDocument`] — Ordered prefs ready to be rendered.
//! - [`SchemaError`] — Failures reading inputs or writing output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prefs_schema_core::GeneratorConfig;
//! use prefs_schema_core::{emit, generate, render};
//! use std::path::Path;
//!
//! let config = GeneratorConfig::from_root(Path::new("."));
//! let document = generate(&config).unwrap();
//! emit(&render(&document), None).unwrap();
//! ```

pub use config::*;
pub use emit::*;
pub use error::*;
pub use generator::*;
pub use render::*;

pub mod config;
mod emit;
#[allow(unused_assignments)]
mod error;
pub mod extract;
mod generator;
mod render;


/// Generate and render the schema for `config` in one step.
pub fn generate_schema(config: &GeneratorConfig) -> SchemaResult<String> {
	let document = generate(config)?;
	Ok(render(&document))
}
