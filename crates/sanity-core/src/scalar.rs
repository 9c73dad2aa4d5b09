//! Raw scalar input and its coercion to text.
//!
//! Every normalizer accepts loosely typed input (text, numbers, or nothing
//! at all) and starts by coercing it to a string through [`RawScalar::to_text`].

use serde::Serialize;

/// A loosely typed input value as it arrives from a form field or cell.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum RawScalar<'a> {
    /// Absent value.
    #[default]
    Null,
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Free text, borrowed from the caller.
    Text(&'a str),
}

impl RawScalar<'_> {
    /// Coerces the value to its text form.
    ///
    /// - `Null` becomes the empty string.
    /// - Integers use their decimal form, including the sign.
    /// - Floats keep their sign and decimal point (`7.0` stays `"7.0"`).
    /// - Text is returned unchanged.
    pub fn to_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format_float(*v),
            Self::Text(s) => (*s).to_string(),
        }
    }
}

/// Coerces any supported input to text.
///
/// Free-function form of [`RawScalar::to_text`].
pub fn to_text<'a>(value: impl Into<RawScalar<'a>>) -> String {
    value.into().to_text()
}

/// Formats a float so that the decimal point survives for integral values.
///
/// # Examples
///
/// ```
/// use sanity_core::format_float;
///
/// assert_eq!(format_float(7.0), "7.0");
/// assert_eq!(format_float(-3.14), "-3.14");
/// assert_eq!(format_float(0.5), "0.5");
/// ```
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

impl<'a> From<&'a str> for RawScalar<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for RawScalar<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl From<f64> for RawScalar<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for RawScalar<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<i64> for RawScalar<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

macro_rules! impl_from_small_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for RawScalar<'_> {
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_small_int!(i8, i16, i32, u8, u16, u32);

impl<'a, T> From<Option<T>> for RawScalar<'a>
where
    T: Into<RawScalar<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
