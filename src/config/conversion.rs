// Author: Alexander Starov
// License: MIT

use std::collections::HashMap;

use crate::{FplError, Value};

fn expected(kind: &str, value: &Value, hint: &str, code: u32) -> FplError {
    FplError::TypeError {
        message: format!("Expected {}, got {}", kind, value.type_name()),
        line: 0,
        column: 0,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

fn expect_number(value: Value) -> Result<f64, FplError> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(expected("number", &other, "Use a number value in your config", 402)),
    }
}

impl TryFrom<Value> for String {
    type Error = FplError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(expected("string", &other, "Use a quoted string in your config", 401)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = FplError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        expect_number(value)
    }
}

impl TryFrom<Value> for f32 {
    type Error = FplError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = expect_number(value)?;
        if n.abs() > f32::MAX as f64 {
            return Err(FplError::TypeError {
                message: format!("Number {} out of range for f32", n),
                line: 0,
                column: 0,
                hint: Some("Read the value as f64 instead".into()),
                code: Some(414),
            });
        }
        Ok(n as f32)
    }
}

/// Integer conversions reject fractional values and anything outside the target range.
/// `MAX as f64` rounds up to 2^BITS for the 64-bit types, so the upper bound is exclusive.
macro_rules! impl_integer_conversion {
    ($($ty:ty => $code:expr),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = FplError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    let n = expect_number(value)?;
                    if n.fract() != 0.0 {
                        return Err(FplError::TypeError {
                            message: format!("Number {} is not a whole number", n),
                            line: 0,
                            column: 0,
                            hint: Some(format!("Use an integer for {}", stringify!($ty))),
                            code: Some(403),
                        });
                    }
                    if n < <$ty>::MIN as f64 || n >= <$ty>::MAX as f64 + 1.0 {
                        return Err(FplError::TypeError {
                            message: format!("Number {} out of range for {}", n, stringify!($ty)),
                            line: 0,
                            column: 0,
                            hint: Some(format!(
                                "Use a number between {} and {}",
                                <$ty>::MIN,
                                <$ty>::MAX
                            )),
                            code: Some($code),
                        });
                    }
                    Ok(n as $ty)
                }
            }
        )*
    };
}

impl_integer_conversion! {
    u8 => 407,
    u16 => 408,
    u32 => 409,
    u64 => 410,
    usize => 411,
    i32 => 412,
    i64 => 413,
}

impl TryFrom<Value> for bool {
    type Error = FplError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            Value::String(ref s) if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("false") => {
                Err(FplError::TypeError {
                    message: format!("Expected boolean, got string \"{}\"", s),
                    line: 0,
                    column: 0,
                    hint: Some(format!("Remove the quotes: {}", s.to_ascii_lowercase())),
                    code: Some(404),
                })
            }
            other => Err(expected("boolean", &other, "Use true or false", 404)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = FplError>,
{
    type Error = FplError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(arr) => arr.into_iter().map(T::try_from).collect(),
            other => Err(expected("array", &other, "Use an array [...] in your config", 405)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, Value> {
    type Error = FplError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => Ok(entries.into_iter().collect()),
            other => Err(expected("object", &other, "Use an object {...} in your config", 406)),
        }
    }
}

impl TryFrom<Value> for HashMap<String, String> {
    type Error = FplError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(entries) => entries
                .into_iter()
                .map(|(k, v)| String::try_from(v).map(|s| (k, s)))
                .collect(),
            other => Err(expected("object", &other, "Use an object {...} in your config", 406)),
        }
    }
}
