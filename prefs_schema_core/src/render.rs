use crate::SCHEMA_DESCRIPTION;
use crate::SchemaDocument;

pub const DEFAULT_ANCHOR: &str = "powerd_prefs_default";
pub const PREFS_ANCHOR: &str = "powerd_prefs";

/// Render the document as YAML text without a trailing newline.
///
/// Prefs with a default merge the shared block and add a quoted `default`;
/// all other prefs alias the shared block directly.
pub fn render(document: &SchemaDocument) -> String {
	let mut lines = vec![
		format!("{DEFAULT_ANCHOR}: &{DEFAULT_ANCHOR}"),
		format!("  description: {SCHEMA_DESCRIPTION}"),
		"  type: string".to_string(),
		String::new(),
		format!("{PREFS_ANCHOR}: &{PREFS_ANCHOR}"),
	];

	for entry in document.iter() {
		match &entry.default {
			Some(default) => {
				lines.push(format!("  {}:", entry.name));
				lines.push(format!("    <<: *{DEFAULT_ANCHOR}"));
				let escaped = escape_double_quoted(default);
				if escaped != *default {
					tracing::debug!(name = %entry.name, "escaped quotes or backslashes in default");
				}
				lines.push(format!("    default: \"{escaped}\""));
			}
			None => lines.push(format!("  {}: *{DEFAULT_ANCHOR}", entry.name)),
		}
	}

	lines.join("\n")
}

/// Escape the characters that would end or break a double-quoted YAML scalar.
fn escape_double_quoted(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());

	for ch in value.chars() {
		if matches!(ch, '\\' | '"') {
			escaped.push('\\');
		}
		escaped.push(ch);
	}

	escaped
}
