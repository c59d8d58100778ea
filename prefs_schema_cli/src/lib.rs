use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about = "Generates power_manager prefs schema",
	long_about = "Transforms the power_manager pref declarations \
	              (power_manager/common/power_constants.cc) and their defaults \
	              (power_manager/default_prefs/) into the YAML schema used by \
	              chromeos-config.\n\nRun from the root of a platform2 checkout. The \
	              schema is printed to stdout unless --output is given."
)]
pub struct PrefsSchemaCli {
	/// Output file that will be generated by the transform.
	#[arg(long, short)]
	pub output: Option<PathBuf>,
}
