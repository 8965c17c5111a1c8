//! Numeric results for `sum`/`min`/`max` and the `AsNumber` capability that
//! numeric aggregates require of their elements.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A number as seen by numeric aggregates.
///
/// Integer arithmetic stays exact until it would overflow, then promotes to
/// floating point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Exact integer value, if this number is integral and fits in `i64`.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(f) if f.fract() == 0.0 && f.is_finite() => {
                if f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Some(f as i64)
                } else {
                    None
                }
            }
            Number::Float(_) => None,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    /// Addition used by `sum`: exact for integers, promoting on overflow.
    pub fn sum_with(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(s) => Number::Int(s),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(x) => f.write_str(&float_text(*x)),
        }
    }
}

/// Legacy number-to-text coercion for floats.
///
/// Shortest round-trip digits, written positionally for magnitudes in
/// `[1e-6, 1e21)` and in exponent form (`1e-7`, `1.5e+21`) outside it.
/// Infinities render as `Infinity`/`-Infinity` and negative zero as `0`.
pub fn float_text<F>(x: F) -> String
where
    F: fmt::LowerExp + Into<f64> + Copy,
{
    let v: f64 = x.into();
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let formatted = format!("{x:e}");
    let (sign, sci) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // The value is 0.<digits> * 10^point.
    let len = digits.len() as i32;
    let point = exponent + 1;
    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let shown = point - 1;
        let exp_sign = if shown < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{}", shown.unsigned_abs())
        } else {
            format!("{lead}.{rest}e{exp_sign}{}", shown.unsigned_abs())
        }
    };
    format!("{sign}{body}")
}

macro_rules! number_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Number::Int(v as i64)
            }
        }
    )*};
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(v as f64)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

/// Elements that numeric aggregates can read as numbers.
///
/// `as_number` returning `None` makes the aggregate fail with
/// `Error::TypeMismatch`, naming the element through `kind`.
pub trait AsNumber {
    fn as_number(&self) -> Option<Number>;

    fn kind(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

macro_rules! as_number_int {
    ($($t:ty),*) => {$(
        impl AsNumber for $t {
            fn as_number(&self) -> Option<Number> {
                Some(Number::Int(*self as i64))
            }
        }
    )*};
}

as_number_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! as_number_wide {
    ($($t:ty),*) => {$(
        impl AsNumber for $t {
            fn as_number(&self) -> Option<Number> {
                Some(match i64::try_from(*self) {
                    Ok(i) => Number::Int(i),
                    Err(_) => Number::Float(*self as f64),
                })
            }
        }
    )*};
}

as_number_wide!(u64, usize, isize, i128, u128);

impl AsNumber for f32 {
    fn as_number(&self) -> Option<Number> {
        Some(Number::Float(*self as f64))
    }
}

impl AsNumber for f64 {
    fn as_number(&self) -> Option<Number> {
        Some(Number::Float(*self))
    }
}

impl AsNumber for Number {
    fn as_number(&self) -> Option<Number> {
        Some(*self)
    }
}

impl AsNumber for Value {
    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    fn kind(&self) -> String {
        self.type_name().to_string()
    }
}

impl AsNumber for serde_json::Value {
    fn as_number(&self) -> Option<Number> {
        let n = serde_json::Value::as_number(self)?;
        match n.as_i64() {
            Some(i) => Some(Number::Int(i)),
            None => n.as_f64().map(Number::Float),
        }
    }

    fn kind(&self) -> String {
        match self {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
        .to_string()
    }
}

impl<T: AsNumber + ?Sized> AsNumber for &T {
    fn as_number(&self) -> Option<Number> {
        (**self).as_number()
    }

    fn kind(&self) -> String {
        (**self).kind()
    }
}
