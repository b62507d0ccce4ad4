//! Text transforms.
//!
//! Every transform is a method on [`Inflector`](crate::Inflector) that reads
//! the rule tables of a locale and returns a new `String`. Transforms hold no
//! state and never fail.
//!
//! Casing transforms (`camelize`, `underscore`, `humanize`, `titleize`)
//! consult the acronyms of the inflector's default locale.

mod case;
mod human;
mod inflect;
mod number;
mod slug;
mod table;

pub use human::HumanizeOptions;
pub use inflect::apply_inflections;
pub use slug::{ParameterizeOptions, TransliterateOptions};

/// ASCII word character, as matched by `\w` in the rule notation.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `\b` at byte offset `pos`.
pub(crate) fn at_word_boundary(text: &str, pos: usize) -> bool {
    let before = text[..pos].chars().next_back().is_some_and(is_word_char);
    let after = text[pos..].chars().next().is_some_and(is_word_char);
    before != after
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize_str(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
