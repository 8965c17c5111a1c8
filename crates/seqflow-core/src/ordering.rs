//! Legacy text ordering used by `order_by` when no comparator is supplied.
//!
//! Keys are coerced to text and compared lexically by UTF-16 code units. An
//! absent key (`None`, `Value::Null`) sorts after every present key in both
//! directions.

use std::borrow::Cow;
use std::cmp::Ordering;

use crate::number::{float_text, Number};
use crate::value::Value;

/// Keys that the default text ordering can compare.
pub trait OrderKey {
    /// Text form of the key, or `None` when the key is absent.
    fn order_text(&self) -> Option<Cow<'_, str>>;
}

/// Compare two keys with the legacy text ordering.
///
/// `descending` flips the comparison of present keys only; absent keys stay
/// last either way.
pub fn compare_text<K: OrderKey + ?Sized>(a: &K, b: &K, descending: bool) -> Ordering {
    match (a.order_text(), b.order_text()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => {
            let ord = x.encode_utf16().cmp(y.encode_utf16());
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

impl OrderKey for str {
    fn order_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl OrderKey for String {
    fn order_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl OrderKey for Value {
    fn order_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Null => None,
            Value::Str(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl<T: OrderKey> OrderKey for Option<T> {
    fn order_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(OrderKey::order_text)
    }
}

impl<T: OrderKey + ?Sized> OrderKey for &T {
    fn order_text(&self) -> Option<Cow<'_, str>> {
        (**self).order_text()
    }
}

macro_rules! order_key_display {
    ($($t:ty),*) => {$(
        impl OrderKey for $t {
            fn order_text(&self) -> Option<Cow<'_, str>> {
                Some(Cow::Owned(self.to_string()))
            }
        }
    )*};
}

order_key_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, Number
);

macro_rules! order_key_float {
    ($($t:ty),*) => {$(
        impl OrderKey for $t {
            fn order_text(&self) -> Option<Cow<'_, str>> {
                Some(Cow::Owned(float_text(*self)))
            }
        }
    )*};
}

order_key_float!(f32, f64);
