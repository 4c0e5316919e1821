//! Path to identifier conversion.

const FALLBACK_IDENTIFIER: &str = "File";

const RESERVED: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Derive an upper-camel-case identifier from `path`.
///
/// `prefix` is removed when `path` starts with it literally and ignored otherwise. The
/// final extension of the base name is dropped, and `/`, `_`, `-`, `.` and spaces start a
/// new word, as does anything following a digit. Every word is capitalised; a capital that
/// directly follows another capital is lowered, so `README` becomes `Readme`. Other
/// characters are dropped without starting a word:
///
/// ```
/// use falcogen_codegen::derive_identifier;
///
/// assert_eq!(derive_identifier("src/foo_bar/baz.cpp", "src/"), "FooBarBaz");
/// assert_eq!(derive_identifier("other/x.cpp", "src/"), "OtherX");
/// ```
///
/// The result is always a valid Rust identifier. Distinct paths can collide; callers
/// that need unique names must check for themselves.
#[must_use]
pub fn derive_identifier(path: &str, prefix: &str) -> String {
    let trimmed = path.strip_prefix(prefix).unwrap_or(path);
    let stem = strip_extension(trimmed);
    let joined: String = stem
        .chars()
        .map(|ch| if is_separator(ch) { '_' } else { ch })
        .collect();
    into_identifier(to_upper_camel(&joined))
}

/// True when `value` can be used verbatim as a Rust item or module name.
#[must_use]
pub fn is_valid_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|ch| ch == '_' || ch.is_ascii_alphanumeric())
        && value != "_"
        && !RESERVED.contains(&value)
}

const fn is_separator(ch: char) -> bool {
    matches!(ch, '/' | '\\')
}

fn strip_extension(path: &str) -> &str {
    let base_start = path.rfind(is_separator).map_or(0, |index| index + 1);
    path[base_start..]
        .rfind('.')
        .map_or(path, |dot| &path[..base_start + dot])
}

const fn is_word_separator(ch: char) -> bool {
    matches!(ch, '_' | '-' | '.' | ' ')
}

fn to_upper_camel(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut cap_next = true;
    let mut prev_upper = false;
    for ch in input.trim().chars() {
        let upper = ch.is_ascii_uppercase();
        if ch.is_ascii_alphabetic() {
            if cap_next {
                out.push(ch.to_ascii_uppercase());
            } else if prev_upper && upper {
                out.push(ch.to_ascii_lowercase());
            } else {
                out.push(ch);
            }
            cap_next = false;
        } else if ch.is_ascii_digit() {
            out.push(ch);
            cap_next = true;
        } else {
            // Anything else is dropped; only separators open a new word.
            cap_next = is_word_separator(ch);
        }
        prev_upper = upper;
    }
    out
}

fn into_identifier(camel: String) -> String {
    if camel.is_empty() {
        return FALLBACK_IDENTIFIER.to_string();
    }
    if camel.starts_with(|ch: char| ch.is_ascii_digit()) {
        return format!("_{camel}");
    }
    if RESERVED.contains(&camel.as_str()) {
        return format!("{camel}_");
    }
    camel
}
