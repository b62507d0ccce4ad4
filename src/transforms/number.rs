//! English ordinal suffixes.

use crate::registry::Inflector;
use crate::scalar::{Number, Scalar};

impl Inflector {
    /// Suffix that turns `number` into an ordinal: `st`, `nd`, `rd` or `th`.
    ///
    /// The sign is ignored. Values that are not numbers get `th`.
    pub fn ordinal<'a>(&self, number: impl Into<Scalar<'a>>) -> &'static str {
        suffix(&number.into())
    }

    /// `number` followed by its ordinal suffix: `1` becomes `1st`, `-11`
    /// becomes `-11th`.
    pub fn ordinalize<'a>(&self, number: impl Into<Scalar<'a>>) -> String {
        let number = number.into();
        format!("{}{}", number, suffix(&number))
    }
}

fn suffix(number: &Scalar<'_>) -> &'static str {
    match number.to_number() {
        Number::Int(n) => {
            let n = n.unsigned_abs();
            match (n % 100, n % 10) {
                (11..=13, _) => "th",
                (_, 1) => "st",
                (_, 2) => "nd",
                (_, 3) => "rd",
                _ => "th",
            }
        }
        Number::Float(x) if x.is_finite() => {
            let x = x.abs();
            let (mod100, mod10) = (x % 100.0, x % 10.0);
            if mod100 == 11.0 || mod100 == 12.0 || mod100 == 13.0 {
                "th"
            } else if mod10 == 1.0 {
                "st"
            } else if mod10 == 2.0 {
                "nd"
            } else if mod10 == 3.0 {
                "rd"
            } else {
                "th"
            }
        }
        Number::Float(_) | Number::NotANumber => "th",
    }
}
