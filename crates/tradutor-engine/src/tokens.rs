//! Token collection: package the raw hunted values as audit tokens.

use tradutor_core::{ExtractionToken, NOT_IDENTIFIED};

/// Characters of source text kept on each side of a token value.
pub const CONTEXT_CHARS: usize = 50;

/// A raw value hunted by a rule module, under its logical field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Field {
    pub name: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Slice of `text` around the first occurrence of `value`.
///
/// The window spans [`CONTEXT_CHARS`] characters before the value to
/// [`CONTEXT_CHARS`] characters after it, clipped to the document. Counts are
/// in characters, so the slice never splits a multi-byte code point.
/// Returns `None` when `value` does not occur in `text`.
pub fn context_window<'a>(text: &'a str, value: &str) -> Option<&'a str> {
    let start = text.find(value)?;
    let end = start + value.len();

    let from = text[..start]
        .char_indices()
        .rev()
        .take(CONTEXT_CHARS)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(text.len(), |(i, _)| end + i);

    Some(&text[from..to])
}

/// Build tokens for every field that actually matched.
///
/// Empty values and the sentinel are skipped. Field order is preserved.
pub(crate) fn collect(text: &str, fields: &[Field]) -> Vec<ExtractionToken> {
    fields
        .iter()
        .filter(|f| !f.value.is_empty() && f.value != NOT_IDENTIFIED)
        .map(|f| ExtractionToken {
            token_name: f.name.to_string(),
            token_value: f.value.clone(),
            context_text: context_window(text, &f.value)
                .unwrap_or_default()
                .to_string(),
        })
        .collect()
}
