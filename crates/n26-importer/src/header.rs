//! Header line recognition.

use crate::schema::{labels_for, Language};

/// Check whether `line` is an export header for `language`.
///
/// The line is split on `,` and surrounding `"` are stripped from every
/// token; quoted labels never contain commas. A header matches when its
/// tokens equal the full schema, or the schema without its optional
/// columns, position by position.
#[must_use]
pub fn is_valid_header(language: Language, line: &str) -> bool {
    let actual: Vec<&str> = line.split(',').map(|token| token.trim_matches('"')).collect();

    let mut expected = labels_for(language, true);
    if expected.len() != actual.len() {
        expected = labels_for(language, false);
        if expected.len() != actual.len() {
            return false;
        }
    }

    expected.iter().zip(&actual).all(|(e, a)| e == a)
}
