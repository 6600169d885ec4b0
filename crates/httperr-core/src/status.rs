//! Status code coercion
//!
//! Turns loosely-typed numbers and strings into HTTP status codes in the
//! `100..=699` range. Anything that cannot be coerced yields `None`; absence
//! is the normal outcome for unusable input, never a fault.

use serde_json::Value;

/// Lowest accepted status code
pub const MIN_STATUS_CODE: u16 = 100;

/// Highest accepted status code
pub const MAX_STATUS_CODE: u16 = 699;

/// Whether `code` lies in the accepted status range
pub const fn is_valid_status_code(code: u16) -> bool {
    matches!(code, MIN_STATUS_CODE..=MAX_STATUS_CODE)
}

/// Values that may be read as an HTTP status code
pub trait AsStatusCode {
    /// The status code this value represents, if any
    fn as_status_code(&self) -> Option<u16>;
}

/// Coerce `value` to a status code between 100 and 699
///
/// Strings are read up to the first non-digit, so `"404.9"` and `"404abc"`
/// both yield `404`. Numbers are truncated toward zero before the range test.
///
/// ```
/// use httperr_core::get_status_code;
///
/// assert_eq!(get_status_code(&405), Some(405));
/// assert_eq!(get_status_code("404.9"), Some(404));
/// assert_eq!(get_status_code(&7000), None);
/// ```
pub fn get_status_code<T: AsStatusCode + ?Sized>(value: &T) -> Option<u16> {
    value.as_status_code()
}

fn from_integer(value: i64) -> Option<u16> {
    u16::try_from(value).ok().filter(|code| is_valid_status_code(*code))
}

/// Read the leading integer of a string
///
/// Leading whitespace and a single sign are allowed; reading stops at the
/// first character that is not an ASCII digit.
fn parse_leading_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    // Overlong digit runs are out of range either way
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

impl AsStatusCode for str {
    fn as_status_code(&self) -> Option<u16> {
        parse_leading_integer(self).and_then(from_integer)
    }
}

impl AsStatusCode for String {
    fn as_status_code(&self) -> Option<u16> {
        self.as_str().as_status_code()
    }
}

impl AsStatusCode for f64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn as_status_code(&self) -> Option<u16> {
        if !self.is_finite() {
            return None;
        }

        let truncated = self.trunc();
        if truncated < f64::from(MIN_STATUS_CODE) || truncated > f64::from(MAX_STATUS_CODE) {
            return None;
        }

        Some(truncated as u16)
    }
}

impl AsStatusCode for f32 {
    fn as_status_code(&self) -> Option<u16> {
        f64::from(*self).as_status_code()
    }
}

macro_rules! impl_integer_status {
    ($($ty:ty),* $(,)?) => {
        $(
            impl AsStatusCode for $ty {
                fn as_status_code(&self) -> Option<u16> {
                    u16::try_from(*self).ok().filter(|code| is_valid_status_code(*code))
                }
            }
        )*
    };
}

impl_integer_status!(u16, u32, u64, usize, i16, i32, i64, isize);

impl AsStatusCode for Value {
    fn as_status_code(&self) -> Option<u16> {
        match self {
            Self::Number(number) => number
                .as_i64()
                .and_then(from_integer)
                .or_else(|| number.as_u64().and_then(|n| n.as_status_code()))
                .or_else(|| number.as_f64().and_then(|n| n.as_status_code())),
            Self::String(text) => text.as_status_code(),
            _ => None,
        }
    }
}

impl<T: AsStatusCode + ?Sized> AsStatusCode for &T {
    fn as_status_code(&self) -> Option<u16> {
        (**self).as_status_code()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integers_in_range_are_returned_unchanged() {
        for code in 100..=699_i32 {
            assert_eq!(get_status_code(&code), u16::try_from(code).ok());
        }
    }

    #[test]
    fn numeric_strings_in_range_are_parsed() {
        for code in 100..=699_u16 {
            assert_eq!(get_status_code(&code.to_string()), Some(code));
        }
    }

    #[test]
    fn whole_doubles_are_accepted() {
        for code in 100..=699_u16 {
            assert_eq!(get_status_code(&f64::from(code)), Some(code));
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for value in [0_i64, 99, 700, 7000, -5, -404] {
            assert_eq!(get_status_code(&value), None, "value {value}");
        }
        assert_eq!(get_status_code("0"), None);
        assert_eq!(get_status_code("99"), None);
        assert_eq!(get_status_code("700"), None);
        assert_eq!(get_status_code("-404"), None);
    }

    #[test]
    fn fractional_strings_are_truncated() {
        assert_eq!(get_status_code("404.9"), Some(404));
        assert_eq!(get_status_code("404.5"), Some(404));
        assert_eq!(get_status_code("404.00"), Some(404));
    }

    #[test]
    fn fractional_numbers_are_truncated() {
        assert_eq!(get_status_code(&404.9_f64), Some(404));
        assert_eq!(get_status_code(&99.9_f64), None);
        assert_eq!(get_status_code(&699.99_f64), Some(699));
    }

    #[test]
    fn non_numeric_strings_yield_nothing() {
        assert_eq!(get_status_code("abc"), None);
        assert_eq!(get_status_code(""), None);
        assert_eq!(get_status_code("."), None);
        assert_eq!(get_status_code("-"), None);
    }

    #[test]
    fn strings_are_read_up_to_first_non_digit() {
        assert_eq!(get_status_code("404 Not Found"), Some(404));
        assert_eq!(get_status_code("  418"), Some(418));
        assert_eq!(get_status_code("+503"), Some(503));
        assert_eq!(get_status_code("4e2"), None);
    }

    #[test]
    fn overlong_digit_runs_are_rejected() {
        assert_eq!(get_status_code("99999999999999999999999999"), None);
    }

    #[test]
    fn non_finite_numbers_yield_nothing() {
        assert_eq!(get_status_code(&f64::NAN), None);
        assert_eq!(get_status_code(&f64::INFINITY), None);
    }

    #[test]
    fn json_values_coerce_numbers_and_strings_only() {
        assert_eq!(get_status_code(&json!(404)), Some(404));
        assert_eq!(get_status_code(&json!(404.2)), Some(404));
        assert_eq!(get_status_code(&json!("410")), Some(410));
        assert_eq!(get_status_code(&json!(true)), None);
        assert_eq!(get_status_code(&json!(null)), None);
        assert_eq!(get_status_code(&json!([404])), None);
        assert_eq!(get_status_code(&json!({"statusCode": 404})), None);
    }

    #[test]
    fn validity_predicate_bounds() {
        assert!(!is_valid_status_code(99));
        assert!(is_valid_status_code(100));
        assert!(is_valid_status_code(699));
        assert!(!is_valid_status_code(700));
    }
}
