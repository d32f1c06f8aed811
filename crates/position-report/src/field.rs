/// Report field values.
///
/// Identity, coordinates, speed and course are not validated: whatever the caller hands in is
/// what ends up in the report, so `"005"` stays `"005"` and `123.1234` stays `123.1234`.
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    /// Kept at single precision so it renders as written, not as its widened binary form.
    Float32(f32),
}

impl FieldValue {
    /// Canonical textual form of an optional field. Unset fields render empty.
    pub fn render(value: Option<&FieldValue>) -> String {
        value.map(ToString::to_string).unwrap_or_default()
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Unsigned(u) => write!(f, "{u}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Float32(x) => write!(f, "{x}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<f32> for FieldValue {
    fn from(x: f32) -> Self {
        FieldValue::Float32(x)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue {
                fn from(i: $t) -> Self {
                    FieldValue::Integer(i as i64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32);

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::Unsigned(u)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::Unsigned(u as u64)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render_verbatim() {
        let test_cases: [(FieldValue, &str); 13] = [
            ("327725610".into(), "327725610"),
            ("005".into(), "005"),
            ("-122.6803961".into(), "-122.6803961"),
            (123.1234f64.into(), "123.1234"),
            (0.0f64.into(), "0"),
            (327725610u32.into(), "327725610"),
            ((-3i8).into(), "-3"),
            (123.1234f32.into(), "123.1234"),
            (0.1f32.into(), "0.1"),
            (u64::MAX.into(), "18446744073709551615"),
            (42usize.into(), "42"),
            ((-42isize).into(), "-42"),
            (i64::MIN.into(), "-9223372036854775808"),
        ];
        for (value, expected) in test_cases.iter() {
            assert_eq!(value.to_string(), *expected, "render({:?})", value);
        }
    }

    #[test]
    fn test_render_unset() {
        assert_eq!(FieldValue::render(None), "");
        let course = FieldValue::from(5i32);
        assert_eq!(FieldValue::render(Some(&course)), "5");
    }
}
