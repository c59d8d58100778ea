use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::Path;

use derive_more::Deref;

use crate::GeneratorConfig;
use crate::SchemaError;
use crate::SchemaResult;
use crate::extract::extract_keys;
use crate::extract::hyphenate;
use crate::extract::normalize_newlines;

/// A single pref as it appears in the generated schema.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PreferenceEntry {
	/// The key as declared in the constants file, e.g. `plugged_dim_ms`.
	pub key: String,
	/// The YAML mapping key, e.g. `plugged-dim-ms`.
	pub name: String,
	/// The normalized contents of the default-value file, when one exists.
	pub default: Option<String>,
}

impl PreferenceEntry {
	pub fn new(key: impl Into<String>, default: Option<String>) -> Self {
		let key = key.into();
		let name = hyphenate(&key);

		Self { key, name, default }
	}

	pub fn has_default(&self) -> bool {
		self.default.is_some()
	}
}

/// Prefs in the order they were declared in the constants file.
#[derive(Debug, Clone, Default, Eq, PartialEq, Deref)]
pub struct SchemaDocument(
	#[deref]
	Vec<PreferenceEntry>,
);

impl SchemaDocument {
	/// Hyphenated names shared by more than one distinct key, with the keys
	/// that produced them. Such names show up as duplicate mapping keys in
	/// the rendered YAML.
	pub fn colliding_names(&self) -> BTreeMap<&str, BTreeSet<&str>> {
		let mut keys_by_name: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

		for entry in &self.0 {
			keys_by_name
				.entry(entry.name.as_str())
				.or_default()
				.insert(entry.key.as_str());
		}

		keys_by_name.retain(|_, keys| keys.len() > 1);
		keys_by_name
	}
}

impl From<Vec<PreferenceEntry>> for SchemaDocument {
	fn from(entries: Vec<PreferenceEntry>) -> Self {
		Self(entries)
	}
}

/// Build the schema document from the constants file and defaults directory
/// named by `config`.
#[tracing::instrument(skip_all, fields(constants_file = %config.constants_file.display()))]
pub fn generate(config: &GeneratorConfig) -> SchemaResult<SchemaDocument> {
	let text = std::fs::read_to_string(&config.constants_file).map_err(|source| {
		SchemaError::InputNotFound {
			path: config.constants_file.clone(),
			source,
		}
	})?;

	let keys = extract_keys(&text);
	if keys.is_empty() {
		tracing::warn!("no pref declarations found, the schema will have no prefs");
	}

	let mut entries = Vec::with_capacity(keys.len());
	for key in keys {
		let default = read_default(&config.default_path(&key))?;
		tracing::debug!(key = %key, has_default = default.is_some(), "extracted pref");
		entries.push(PreferenceEntry::new(key, default));
	}

	let document = SchemaDocument::from(entries);
	for (name, keys) in document.colliding_names() {
		tracing::warn!(name, ?keys, "multiple prefs map to the same schema name");
	}

	Ok(document)
}

/// Read the default-value file at `path` if it is a regular file.
fn read_default(path: &Path) -> SchemaResult<Option<String>> {
	if !path.is_file() {
		return Ok(None);
	}

	let content = std::fs::read_to_string(path).map_err(|source| {
		SchemaError::DefaultRead {
			path: path.to_path_buf(),
			source,
		}
	})?;

	Ok(Some(normalize_default(&content)))
}

/// Collapse a default-value file onto a single line: surrounding whitespace
/// is dropped and each inner line break, whatever its style, becomes one
/// space.
pub fn normalize_default(content: &str) -> String {
	normalize_newlines(content).trim().replace('\n', " ")
}
