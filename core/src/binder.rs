//! Argument conversion and binding.
//!
//! Converts raw argument text to an option's declared [`ArgType`] and, on
//! success, writes the value to the option's bound [`Target`](crate::Target).
//! Numeric conversion must consume the whole string; `"12abc"` is an error,
//! never a silent truncation to `12`.

use std::num::IntErrorKind;

use crate::error::{ParseError, Result};
use crate::types::{ArgType, ArgValue, OptionSpec};

const OPERATION: &str = "binder::convert";

/// Converts `raw` to `arg_type`. `option` names the option in error
/// messages (e.g. `--count`).
///
/// # Errors
///
/// Returns [`ParseError::InvalidArgument`] when the text is not a number of
/// the right kind, and [`ParseError::OutOfRange`] when it overflows the
/// target type or is negative for [`ArgType::Uint`].
///
/// # Examples
///
/// ```
/// use optline_core::{ArgType, ArgValue, ErrorKind, convert};
///
/// assert_eq!(convert(ArgType::Int, "--n", "-42").unwrap(), ArgValue::Int(-42));
/// assert_eq!(convert(ArgType::Int, "--n", "4x").unwrap_err().kind(), ErrorKind::InvalidArgument);
/// assert_eq!(convert(ArgType::Uint, "--n", "-1").unwrap_err().kind(), ErrorKind::OutOfRange);
/// ```
pub fn convert(arg_type: ArgType, option: &str, raw: &str) -> Result<ArgValue> {
    match arg_type {
        ArgType::String => Ok(ArgValue::Str(raw.to_string())),
        ArgType::Int => parse_int(option, raw).map(ArgValue::Int),
        ArgType::Uint => parse_uint(option, raw).map(ArgValue::Uint),
        ArgType::Float => parse_float(option, raw).map(ArgValue::Float),
    }
}

/// Converts `raw` for `spec`, writes the value to its bound target and
/// marks the target present.
///
/// On a conversion error the target is left untouched.
pub(crate) fn bind(spec: &OptionSpec<'_>, option: &str, raw: &str) -> Result<ArgValue> {
    let value = convert(spec.argument_type, option, raw)?;
    spec.target.store(&value);
    spec.target.mark_present();
    Ok(value)
}

fn parse_int(option: &str, raw: &str) -> Result<i64> {
    raw.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(option),
        _ => not_an_integer(option),
    })
}

fn parse_uint(option: &str, raw: &str) -> Result<u64> {
    if let Some(digits) = raw.strip_prefix('-') {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_an_integer(option));
        }
        if digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        return Err(ParseError::out_of_range(
            option,
            format!("argument for option '{option}' must not be negative"),
            OPERATION,
        ));
    }
    raw.parse::<u64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => out_of_range(option),
        _ => not_an_integer(option),
    })
}

fn parse_float(option: &str, raw: &str) -> Result<f64> {
    let value = raw.parse::<f64>().map_err(|_| {
        ParseError::invalid_argument(
            option,
            format!("argument for option '{option}' must be a number"),
            OPERATION,
        )
    })?;
    // "1e999" parses to infinity; only an explicit "inf" may.
    if value.is_infinite() && !spells_infinity(raw) {
        return Err(out_of_range(option));
    }
    Ok(value)
}

fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn not_an_integer(option: &str) -> ParseError {
    ParseError::invalid_argument(
        option,
        format!("argument for option '{option}' must be an integer"),
        OPERATION,
    )
}

fn out_of_range(option: &str) -> ParseError {
    ParseError::out_of_range(
        option,
        format!("argument for option '{option}' is out of range"),
        OPERATION,
    )
}
