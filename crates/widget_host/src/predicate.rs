//! "Is this field unset" checks for loosely-typed widget attributes.

use serde_json::Value;

/// Values that can be probed for the unset state used by [`is_empty`].
///
/// Only absence, the empty string and NaN count as unset. Zero and `false` are real values.
pub trait MaybeEmpty {
    /// Returns whether the value should be treated as unset.
    fn is_empty_value(&self) -> bool;
}

/// Returns whether `value` is absent, an empty string, or NaN.
pub fn is_empty<T: MaybeEmpty + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

impl<T: MaybeEmpty> MaybeEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }
}

impl<T: MaybeEmpty + ?Sized> MaybeEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl MaybeEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl MaybeEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl MaybeEmpty for f64 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

impl MaybeEmpty for f32 {
    fn is_empty_value(&self) -> bool {
        self.is_nan()
    }
}

macro_rules! never_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MaybeEmpty for $ty {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl MaybeEmpty for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(text) => text.is_empty(),
            Value::Number(number) => number.as_f64().is_some_and(f64::is_nan),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_empty_and_nan_are_empty() {
        assert!(is_empty(&None::<String>));
        assert!(is_empty(&Value::Null));
        assert!(is_empty(""));
        assert!(is_empty(&String::new()));
        assert!(is_empty(&f64::NAN));
        assert!(is_empty(&f32::NAN));
        assert!(is_empty(&Some(f64::NAN)));
    }

    #[test]
    fn zero_false_and_text_are_not_empty() {
        assert!(!is_empty(&0));
        assert!(!is_empty(&0.0));
        assert!(!is_empty(&false));
        assert!(!is_empty("0"));
        assert!(!is_empty(&Some("x")));
        assert!(!is_empty(&f64::INFINITY));
    }

    #[test]
    fn json_values_follow_the_same_rules() {
        assert!(is_empty(&json!("")));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!([])));
        assert!(!is_empty(&json!({})));
        assert!(is_empty(&json!({ "a": null })["a"]));
        assert!(is_empty(&json!({})["missing"]));
    }
}
