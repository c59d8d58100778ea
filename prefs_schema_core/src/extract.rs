use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `const char kSomethingPref[] = "some_pref";`, allowing the string
/// literal to be wrapped onto the line following the `=`. `.` never crosses a
/// newline, so each match is anchored to a single declaration.
pub static PREF_DECLARATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"(?m)const char .*Pref.. =[ |\n] *"(.*)";"#)
		.expect("pref declaration pattern is valid")
});

/// Extract pref keys from the constants source text in declaration order.
///
/// Duplicate keys are kept; an input without declarations yields an empty
/// list.
pub fn extract_keys(text: &str) -> Vec<String> {
	let text = normalize_newlines(text);

	PREF_DECLARATION_PATTERN
		.captures_iter(&text)
		.filter_map(|captures| captures.get(1))
		.map(|key| key.as_str().to_string())
		.collect()
}

/// The hyphenated form of a key used as the YAML mapping key.
pub fn hyphenate(key: &str) -> String {
	key.replace('_', "-")
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: &str) -> Cow<'_, str> {
	if !text.contains('\r') {
		return Cow::Borrowed(text);
	}

	Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
