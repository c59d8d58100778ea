use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::SchemaError;
use crate::SchemaResult;

/// Write `text` and a trailing newline to `output`, replacing any existing
/// file, or to standard output when no path is given.
pub fn emit(text: &str, output: Option<&Path>) -> SchemaResult<()> {
	let Some(path) = output else {
		let mut stdout = std::io::stdout().lock();
		write_with_newline(&mut stdout, text)?;
		return Ok(());
	};

	let to_output_error = |source| {
		SchemaError::OutputWrite {
			path: path.to_path_buf(),
			source,
		}
	};

	let mut file = File::create(path).map_err(to_output_error)?;
	write_with_newline(&mut file, text).map_err(to_output_error)?;
	tracing::info!(path = %path.display(), "wrote prefs schema");

	Ok(())
}

fn write_with_newline(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
	writer.write_all(text.as_bytes())?;
	writer.write_all(b"\n")?;
	writer.flush()
}
