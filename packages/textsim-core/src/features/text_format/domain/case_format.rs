//! Word capitalization ("hello WORLD" -> "Hello World")
//!
//! Case mapping is one char to one char. A char whose mapping expands to
//! several chars ('ß' -> "SS", 'İ' -> "i̇") is kept unchanged.

/// Lowercase everything, then uppercase the first char and every char after a space
pub fn format_words(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut builder = String::with_capacity(text.len());
    let mut previous: Option<char> = None;

    for c in text.chars().map(to_lower) {
        let formatted = match previous {
            None | Some(' ') => to_upper(c),
            Some(_) => c,
        };
        builder.push(formatted);
        previous = Some(c);
    }

    builder
}

fn to_lower(c: char) -> char {
    single_mapping(c.to_lowercase()).unwrap_or(c)
}

fn to_upper(c: char) -> char {
    single_mapping(c.to_uppercase()).unwrap_or(c)
}

fn single_mapping(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
