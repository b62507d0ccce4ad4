//! Loosely typed input for `capitalize`, `ordinal` and `ordinalize`.
//!
//! Coercion rules:
//! - text displays as itself and is parsed (trimmed) as a number, an empty
//!   string being zero;
//! - numbers display in decimal;
//! - `Absent` displays as the empty string and is not a number.

use std::borrow::Cow;
use std::fmt;

/// A string, a number, or nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    Text(Cow<'a, str>),
    Int(i64),
    Float(f64),
    Absent,
}

/// Numeric view of a [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
    NotANumber,
}

impl Scalar<'_> {
    pub fn to_number(&self) -> Number {
        match self {
            Scalar::Int(n) => Number::Int(*n),
            Scalar::Float(f) if f.is_nan() => Number::NotANumber,
            Scalar::Float(f) => Number::Float(*f),
            Scalar::Absent => Number::NotANumber,
            Scalar::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    Number::Int(0)
                } else if let Ok(n) = text.parse::<i64>() {
                    Number::Int(n)
                } else {
                    match text.parse::<f64>() {
                        Ok(f) if !f.is_nan() => Number::Float(f),
                        _ => Number::NotANumber,
                    }
                }
            }
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Absent => Ok(()),
        }
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(text: &'a str) -> Self {
        Scalar::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Scalar<'a> {
    fn from(text: &'a String) -> Self {
        Scalar::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Scalar<'_> {
    fn from(text: String) -> Self {
        Scalar::Text(Cow::Owned(text))
    }
}

impl From<f64> for Scalar<'_> {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<f32> for Scalar<'_> {
    fn from(x: f32) -> Self {
        Scalar::Float(f64::from(x))
    }
}

macro_rules! int_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar<'_> {
                fn from(n: $ty) -> Self {
                    Scalar::Int(i64::from(n))
                }
            }
        )*
    };
}

int_scalar!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for Scalar<'_> {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Scalar::Float(n as f64), Scalar::Int)
    }
}

impl From<u64> for Scalar<'_> {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Scalar::Float(n as f64), Scalar::Int)
    }
}

impl<'a, T: Into<Scalar<'a>>> From<Option<T>> for Scalar<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Scalar::Absent, Into::into)
    }
}
