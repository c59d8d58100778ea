use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SchemaError {
	#[error(transparent)]
	#[diagnostic(code(prefs_schema::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to read constants file `{}`", path.display())]
	#[diagnostic(
		code(prefs_schema::input_not_found),
		help("run from the root of a platform2 checkout so that power_manager/ is reachable")
	)]
	InputNotFound {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to read default value file `{}`", path.display())]
	#[diagnostic(code(prefs_schema::default_read))]
	DefaultRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to write schema to `{}`", path.display())]
	#[diagnostic(
		code(prefs_schema::output_write),
		help("check that the parent directory exists and is writable")
	)]
	OutputWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type SchemaResult<T> = Result<T, SchemaError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
