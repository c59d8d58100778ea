use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;
use prefs_schema_core::AnyEmptyResult;
use prefs_schema_core::CONSTANTS_FILE;
use prefs_schema_core::DEFAULTS_DIR;

pub const HEADER: &str = "powerd_prefs_default: &powerd_prefs_default\n  description: For details, \
                          see https://chromium.googlesource.com/chromiumos/platform2/+/HEAD/power_manager/\n  \
                          type: string\n\npowerd_prefs: &powerd_prefs\n";

/// The generator binary, run from `root` as if it were a platform2 checkout.
pub fn prefs_schema_cmd(root: &Path) -> Command {
	let mut cmd = Command::new(get_cargo_bin("prefs_schema"));
	cmd.env("NO_COLOR", "1");
	cmd.env_remove("RUST_LOG");
	cmd.current_dir(root);
	cmd
}

/// Lay out `power_manager/common/power_constants.cc` and
/// `power_manager/default_prefs/` under `root`.
pub fn write_checkout(root: &Path, constants: &str, defaults: &[(&str, &str)]) -> AnyEmptyResult {
	let constants_file = root.join(CONSTANTS_FILE);
	let defaults_dir = root.join(DEFAULTS_DIR);

	std::fs::create_dir_all(defaults_dir.as_path())?;
	if let Some(parent) = constants_file.parent() {
		std::fs::create_dir_all(parent)?;
	}
	std::fs::write(constants_file, constants)?;

	for (key, content) in defaults {
		std::fs::write(defaults_dir.join(key), content)?;
	}

	Ok(())
}
