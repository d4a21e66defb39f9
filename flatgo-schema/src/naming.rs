//! Identifier case conversion shared by the generators.

/// Converts a `snake_case` schema identifier to CamelCase.
///
/// Each underscore followed by a character is dropped and the character is
/// upper-cased. With `upper_first` the first character is upper-cased as
/// well; otherwise it is kept as written.
#[must_use]
pub fn make_camel(s: &str, upper_first: bool) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut first = true;

    while let Some(c) = chars.next() {
        if first && upper_first {
            result.push(c.to_ascii_uppercase());
        } else if c == '_' && chars.peek().is_some() {
            if let Some(next) = chars.next() {
                result.push(next.to_ascii_uppercase());
            }
        } else {
            result.push(c);
        }
        first = false;
    }

    result
}
