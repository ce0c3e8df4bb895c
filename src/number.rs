//! The dynamically-typed numeric value registers hold.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// A register value: either an integer or a real, decided per store.
///
/// Mixed-type arithmetic widens to [`Number::Real`], matching ordinary
/// numeric promotion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    /// Parses a lexeme already known to be a `VALUE` token: integral if it
    /// matches `-?[0-9]+`, otherwise real.
    pub fn parse(lexeme: &str) -> Number {
        if let Ok(i) = lexeme.parse::<i64>() {
            Number::Int(i)
        } else {
            // Falls back to 0.0 only if the lexeme truly isn't numeric,
            // which the tokenizer's VALUE pattern should never produce.
            Number::Real(lexeme.parse::<f64>().unwrap_or(0.0))
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Real(r) => r,
        }
    }

    pub fn as_i64(self) -> i64 {
        match self {
            Number::Int(i) => i,
            Number::Real(r) => r.trunc() as i64,
        }
    }

    pub fn is_real(self) -> bool {
        matches!(self, Number::Real(_))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Real(r) => write!(f, "{r}"),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.partial_cmp(b),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Self) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => Number::Int(a $op b),
                    _ => Number::Real(self.as_f64() $op rhs.as_f64()),
                }
            }
        }
    };
}

impl_binop!(Add, add, +);
impl_binop!(Sub, sub, -);
impl_binop!(Mul, mul, *);
impl_binop!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_int_and_real() {
        assert_eq!(Number::parse("42"), Number::Int(42));
        assert_eq!(Number::parse("-7"), Number::Int(-7));
        assert_eq!(Number::parse("3.5"), Number::Real(3.5));
    }

    #[test]
    fn mixed_arithmetic_widens_to_real() {
        let result = Number::Int(2) + Number::Real(0.5);
        assert_eq!(result, Number::Real(2.5));
    }

    #[test]
    fn int_arithmetic_stays_int() {
        assert_eq!(Number::Int(7) - Number::Int(2), Number::Int(5));
    }

    #[test]
    fn ordering_compares_across_kinds() {
        assert!(Number::Int(3) > Number::Real(2.9));
    }
}
