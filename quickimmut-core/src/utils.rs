//! String utilities used to fold type names into generated identifiers.

/// Leading marker on a type name that requests a pointer type.
pub const POINTER_MARKER: char = '*';

/// Force the first character to title case (e.g., "valu" -> "Valu").
///
/// The rest of the string is left untouched, and the first character maps to
/// exactly one character.
pub fn to_title_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => std::iter::once(title_case(c)).chain(chars).collect(),
    }
}

/// Force the first character to lower case (e.g., "Valu" -> "valu").
///
/// The rest of the string is left untouched, and the first character maps to
/// exactly one character.
pub fn to_lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => std::iter::once(lower_case(c)).chain(chars).collect(),
    }
}

/// Simple titlecase mapping of one character.
fn title_case(c: char) -> char {
    match c {
        // Latin digraphs have a distinct titlecase form.
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        // Greek with ypogegrammeni keeps the subscript in titlecase.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => char::from_u32(c as u32 + 9).unwrap_or(c),
        _ => single(c.to_uppercase()).unwrap_or(c),
    }
}

/// Simple lowercase mapping of one character.
///
/// `İ` is the only character whose full lowercase expands; its simple
/// mapping is the leading `i`.
fn lower_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// The character of a one-character case mapping, if it is one.
fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let c = mapped.next()?;
    mapped.next().is_none().then_some(c)
}

/// Strip leading pointer markers from a type name (e.g., "*Widget" -> "Widget").
///
/// Only used when building identifiers; emitted field and parameter types
/// keep the marker.
pub fn strip_pointer(s: &str) -> &str {
    s.trim_start_matches(POINTER_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_title_first() {
        assert_eq!(to_title_first("valu"), "Valu");
        assert_eq!(to_title_first("Valu"), "Valu");
        assert_eq!(to_title_first("fooBar"), "FooBar");
        assert_eq!(to_title_first("x"), "X");
        assert_eq!(to_title_first("éclair"), "Éclair");
        assert_eq!(to_title_first(""), "");
    }

    #[test]
    fn test_to_lower_first() {
        assert_eq!(to_lower_first("Valu"), "valu");
        assert_eq!(to_lower_first("valu"), "valu");
        assert_eq!(to_lower_first("HTTPServer"), "hTTPServer");
        assert_eq!(to_lower_first(""), "");
    }

    #[test]
    fn test_title_case_digraphs() {
        assert_eq!(to_title_first("ǆx"), "ǅx");
        assert_eq!(to_title_first("Ǆx"), "ǅx");
        assert_eq!(to_title_first("ǅx"), "ǅx");
        assert_eq!(to_title_first("ǉa"), "ǈa");
        assert_eq!(to_title_first("ǌa"), "ǋa");
        assert_eq!(to_title_first("ǳa"), "ǲa");
    }

    #[test]
    fn test_title_case_never_expands() {
        assert_eq!(to_title_first("ßeta"), "ßeta");
        assert_eq!(to_title_first("ŉx"), "ŉx");
        assert_eq!(to_title_first("ᾳx"), "ᾼx");
        assert_eq!(to_title_first("ᾀx"), "ᾈx");
        assert_eq!(to_title_first("ﬁx"), "ﬁx");
    }

    #[test]
    fn test_lower_case_never_expands() {
        assert_eq!(to_lower_first("İx"), "ix");
        assert_eq!(to_lower_first("ǅx"), "ǆx");
        assert_eq!(to_lower_first("ᾈx"), "ᾀx");
        assert_eq!(to_lower_first("Éclair"), "éclair");
    }

    #[test]
    fn test_strip_pointer() {
        assert_eq!(strip_pointer("*Widget"), "Widget");
        assert_eq!(strip_pointer("Widget"), "Widget");
        assert_eq!(strip_pointer("**Widget"), "Widget");
        assert_eq!(strip_pointer("*"), "");
        assert_eq!(strip_pointer(""), "");
    }

    #[test]
    fn test_strip_pointer_only_touches_prefix() {
        assert_eq!(strip_pointer("Wid*get"), "Wid*get");
    }
}
