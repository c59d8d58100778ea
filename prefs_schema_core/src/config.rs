use std::path::Path;
use std::path::PathBuf;

/// Location of the C++ source declaring the pref names, relative to the
/// `platform2` checkout root.
pub const CONSTANTS_FILE: &str = "power_manager/common/power_constants.cc";

/// Directory holding one default-value file per pref, relative to the
/// `platform2` checkout root.
pub const DEFAULTS_DIR: &str = "power_manager/default_prefs";

/// Description shared by every pref through the `powerd_prefs_default`
/// anchor.
pub const SCHEMA_DESCRIPTION: &str =
	"For details, see https://chromium.googlesource.com/chromiumos/platform2/+/HEAD/power_manager/";

/// Input locations for a single generator run.
///
/// ```rust
/// use prefs_schema_core::GeneratorConfig;
/// use std::path::Path;
///
/// let config = GeneratorConfig::from_root(Path::new("/src/platform2"));
/// assert!(config.constants_file.ends_with("power_manager/common/power_constants.cc"));
/// assert!(config.defaults_dir.ends_with("power_manager/default_prefs"));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GeneratorConfig {
	/// The text file scanned for pref declarations.
	pub constants_file: PathBuf,
	/// Directory probed for `<key>` default-value files.
	pub defaults_dir: PathBuf,
}

impl GeneratorConfig {
	pub fn new(constants_file: impl Into<PathBuf>, defaults_dir: impl Into<PathBuf>) -> Self {
		Self {
			constants_file: constants_file.into(),
			defaults_dir: defaults_dir.into(),
		}
	}

	/// Resolve the fixed `power_manager` locations under `root`.
	pub fn from_root(root: &Path) -> Self {
		Self::new(root.join(CONSTANTS_FILE), root.join(DEFAULTS_DIR))
	}

	/// Path of the default-value file for `key`. The key keeps its
	/// underscores here.
	pub fn default_path(&self, key: &str) -> PathBuf {
		self.defaults_dir.join(key)
	}
}
