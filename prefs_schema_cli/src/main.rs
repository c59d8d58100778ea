use std::path::PathBuf;
use std::process;

use clap::Parser;
use prefs_schema_cli::PrefsSchemaCli;
use prefs_schema_core::GeneratorConfig;
use prefs_schema_core::SchemaResult;
use prefs_schema_core::emit;
use prefs_schema_core::generate_schema;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = PrefsSchemaCli::parse();

	// Respect NO_COLOR for both diagnostics and log output.
	let use_color = std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	// Logs go to stderr so the schema on stdout stays clean.
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init()
		.ok();

	if let Err(error) = run(&args) {
		let report: miette::Report = error.into();
		eprintln!("{report:?}");
		process::exit(2);
	}
}

fn resolve_root() -> PathBuf {
	std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn run(args: &PrefsSchemaCli) -> SchemaResult<()> {
	let config = GeneratorConfig::from_root(&resolve_root());
	tracing::debug!(
		constants_file = %config.constants_file.display(),
		defaults_dir = %config.defaults_dir.display(),
		"resolved inputs"
	);

	// Generate fully before touching the output so a failed run leaves any
	// existing file untouched.
	let schema = generate_schema(&config)?;
	emit(&schema, args.output.as_deref())
}
