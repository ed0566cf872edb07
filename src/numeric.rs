// Author: Dustin Pilgrim
// License: MIT

//! Exact base-10 arithmetic for config values.
//!
//! Add, subtract, multiply and minimum are exact. Division rounds to
//! [`DIVISION_SCALE`] fractional digits, and every finished expression is
//! passed through [`normalize`].

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::ast::Value;

/// Fractional digits kept by a single division.
pub const DIVISION_SCALE: u32 = 10;

/// Fractional digits kept in a finished expression result.
pub const RESULT_SCALE: u32 = 3;

const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

static NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result cannot be held exactly in a 96-bit decimal")]
    Overflow,
    #[error("literal is out of range")]
    LiteralOutOfRange,
}

/// True for `-?digits(.digits)?`, the only numeric literal shape the format knows.
pub fn is_numeric(text: &str) -> bool {
    NUMERIC.is_match(text)
}

/// Parse a numeric literal without any rounding.
///
/// Literals without a fractional part become [`Value::Integer`]; the rest keep
/// their written scale as [`Value::Decimal`].
pub fn parse_literal(text: &str) -> Result<Value, ArithmeticError> {
    if text.contains('.') {
        parse_decimal(text).map(Value::Decimal)
    } else {
        text.parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| ArithmeticError::LiteralOutOfRange)
    }
}

/// Parse a numeric literal straight to a decimal, integers at scale 0.
pub fn parse_decimal(text: &str) -> Result<Decimal, ArithmeticError> {
    let mut d = Decimal::from_str_exact(text).map_err(|_| ArithmeticError::LiteralOutOfRange)?;
    if d.is_zero() {
        d.set_sign_positive(true);
    }
    Ok(d)
}

pub fn add(lhs: Decimal, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
    sum(lhs, rhs, false)
}

pub fn sub(lhs: Decimal, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
    sum(lhs, rhs, true)
}

/// Exact product. Fails with [`ArithmeticError::Overflow`] instead of
/// rounding when the product has more digits than a decimal can hold.
pub fn mul(lhs: Decimal, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
    let natural = lhs
        .mantissa()
        .checked_mul(rhs.mantissa())
        .map(|m| (m, lhs.scale() + rhs.scale()));

    let (mantissa, scale) = match natural {
        Some(parts) => parts,
        None => reduced_product(lhs.normalize(), rhs.normalize())?,
    };
    from_parts(mantissa, scale)
}

/// Exact sum or difference at the wider operand scale.
fn sum(lhs: Decimal, rhs: Decimal, negate: bool) -> Result<Decimal, ArithmeticError> {
    let aligned = |a: Decimal, b: Decimal| -> Option<(i128, u32)> {
        let scale = a.scale().max(b.scale());
        let left = rescaled(a, scale)?;
        let right = rescaled(b, scale)?;
        let right = if negate { right.checked_neg()? } else { right };
        Some((left.checked_add(right)?, scale))
    };

    let (mantissa, scale) = aligned(lhs, rhs)
        .or_else(|| aligned(lhs.normalize(), rhs.normalize()))
        .ok_or(ArithmeticError::Overflow)?;
    from_parts(mantissa, scale)
}

/// Mantissa of `d` at a scale no smaller than its own.
fn rescaled(d: Decimal, scale: u32) -> Option<i128> {
    d.mantissa().checked_mul(10i128.checked_pow(scale - d.scale())?)
}

// Operands come in without trailing zeros, so every trailing zero of the
// product pairs a factor 2 from one side with a factor 5 from the other.
fn reduced_product(lhs: Decimal, rhs: Decimal) -> Result<(i128, u32), ArithmeticError> {
    let (mut a, mut b) = (lhs.mantissa(), rhs.mantissa());
    let mut scale = lhs.scale() + rhs.scale();
    while scale > 0 {
        if a % 2 == 0 && b % 5 == 0 {
            a /= 2;
            b /= 5;
        } else if a % 5 == 0 && b % 2 == 0 {
            a /= 5;
            b /= 2;
        } else {
            break;
        }
        scale -= 1;
    }
    let mantissa = a.checked_mul(b).ok_or(ArithmeticError::Overflow)?;
    Ok((mantissa, scale))
}

/// Build a decimal from an exact mantissa, dropping only zero digits to fit.
fn from_parts(mut mantissa: i128, mut scale: u32) -> Result<Decimal, ArithmeticError> {
    loop {
        if let Ok(d) = Decimal::try_from_i128_with_scale(mantissa, scale) {
            return Ok(d);
        }
        if scale == 0 || mantissa % 10 != 0 {
            return Err(ArithmeticError::Overflow);
        }
        mantissa /= 10;
        scale -= 1;
    }
}

pub fn div(lhs: Decimal, rhs: Decimal) -> Result<Decimal, ArithmeticError> {
    if rhs.is_zero() {
        return Err(ArithmeticError::DivisionByZero);
    }
    lhs.checked_div(rhs)
        .map(|q| q.round_dp_with_strategy(DIVISION_SCALE, ROUNDING))
        .ok_or(ArithmeticError::Overflow)
}

/// The smaller operand; the left one when both compare equal.
pub fn min(lhs: Decimal, rhs: Decimal) -> Decimal {
    if rhs < lhs { rhs } else { lhs }
}

/// Round to [`RESULT_SCALE`] digits half-up and strip trailing zeros.
pub fn normalize(value: Decimal) -> Decimal {
    let mut out = value.round_dp_with_strategy(RESULT_SCALE, ROUNDING).normalize();
    if out.is_zero() {
        out.set_sign_positive(true);
    }
    out
}
