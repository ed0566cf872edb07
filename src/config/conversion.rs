// Author: Dustin Pilgrim
// License: MIT

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::ast::{Document, Value};
use crate::error::ConfigError;

fn describe(value: &Value) -> String {
    match value {
        Value::Document(_) => "document".to_string(),
        other => format!("{} {}", other.type_name(), other),
    }
}

/// Whole-number view of a value. Decimals qualify when their fraction is zero,
/// so expression results like `84` convert.
fn whole_number(value: &Value) -> Option<i128> {
    match value {
        Value::Integer(i) => Some(i128::from(*i)),
        Value::Decimal(d) if d.fract().is_zero() => d.to_i128(),
        _ => None,
    }
}

macro_rules! impl_integer_conversion {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = ConfigError;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    whole_number(&value)
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| ConfigError::type_error(stringify!($ty), describe(&value)))
                }
            }
        )*
    };
}

impl_integer_conversion!(i64, u64, i32, u32, u16);

impl TryFrom<Value> for f64 {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match &value {
            Value::Integer(i) => Ok(*i as f64),
            Value::Decimal(d) => d
                .to_f64()
                .ok_or_else(|| ConfigError::type_error("f64", describe(&value))),
            Value::Document(_) => Err(ConfigError::type_error("f64", describe(&value))),
        }
    }
}

impl TryFrom<Value> for Decimal {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value
            .as_decimal()
            .ok_or_else(|| ConfigError::type_error("decimal", describe(&value)))
    }
}

impl TryFrom<Value> for Document {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Document(doc) => Ok(doc),
            other => Err(ConfigError::type_error("document", describe(&other))),
        }
    }
}
