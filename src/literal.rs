//! Numeric literal lexing for constant folding.
//!
//! The `*_clamp` entry points never hand back an indeterminate value: on failure the result holds the
//! type's maximum so callers that ignore the status still see something defined.
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, hex_digit1},
    combinator::{all_consuming, map},
    number::complete::recognize_float,
    sequence::preceded,
    IResult,
};
use num_traits::Bounded;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("Malformed numeric literal '{0}'")]
    Malformed(String),
    #[error("Numeric literal '{0}' is out of range")]
    OutOfRange(String),
}

/// Result of a clamp-parse. `value` is always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped<T> {
    pub value: T,
    pub ok: bool,
}
impl<T> Clamped<T> {
    /// `Ok(value)` on success, `Err(fallback)` otherwise
    pub fn into_result(self) -> Result<T, T> {
        if self.ok {
            Ok(self.value)
        } else {
            Err(self.value)
        }
    }
}

/// A numeric type that can be lexed from literal text
pub trait NumericLiteral: Bounded + Copy {
    fn lex(text: &str) -> Result<Self, LiteralError>;
}
impl NumericLiteral for f32 {
    fn lex(text: &str) -> Result<Self, LiteralError> {
        lex_float(text)
    }
}
impl NumericLiteral for i32 {
    fn lex(text: &str) -> Result<Self, LiteralError> {
        lex_int(text)
    }
}

/// Lex `text`, falling back to `T::max_value()` on failure.
pub fn parse_clamped<T: NumericLiteral>(text: &str) -> Clamped<T> {
    match T::lex(text) {
        Ok(value) => Clamped { value, ok: true },
        Err(e) => {
            log::debug!("{}, clamping", e);
            Clamped {
                value: T::max_value(),
                ok: false,
            }
        }
    }
}

pub fn atof_clamp(text: &str) -> Clamped<f32> {
    parse_clamped(text)
}

pub fn atoi_clamp(text: &str) -> Clamped<i32> {
    parse_clamped(text)
}

/// Which radix an integer literal was written in, plus its digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntDigits<'a> {
    Hex(&'a str),
    Octal(&'a str),
    Decimal(&'a str),
}

fn int_literal(data: &str) -> IResult<&str, IntDigits> {
    alt((
        map(preceded(tag_no_case("0x"), hex_digit1), IntDigits::Hex),
        // digit1 so that "09" is rejected as bad octal instead of read as decimal
        map(preceded(char('0'), digit1), IntDigits::Octal),
        map(digit1, IntDigits::Decimal),
    ))(data)
}

/// Lex a signed 32-bit integer literal: decimal, octal (leading `0`) or hex (`0x`).
///
/// The whole text must be the literal. Trailing text, including a suffix such as `12u`, is malformed.
pub fn lex_int(text: &str) -> Result<i32, LiteralError> {
    let (_, digits) = all_consuming(int_literal)(text)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| LiteralError::Malformed(text.to_owned()))?;
    let (digits, radix) = match digits {
        IntDigits::Hex(d) => (d, 16),
        IntDigits::Octal(d) => (d, 8),
        IntDigits::Decimal(d) => (d, 10),
    };
    i32::from_str_radix(digits, radix).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
            LiteralError::OutOfRange(text.to_owned())
        }
        _ => LiteralError::Malformed(text.to_owned()),
    })
}

/// Lex a 32-bit float literal. Values that overflow to infinity are out of range.
///
/// The whole text must be the literal. Trailing text, including a suffix such as `1.5f`, is malformed.
pub fn lex_float(text: &str) -> Result<f32, LiteralError> {
    let (_, digits) = all_consuming(recognize_float)(text)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| LiteralError::Malformed(text.to_owned()))?;
    let value: f32 = digits
        .parse()
        .map_err(|_| LiteralError::Malformed(text.to_owned()))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LiteralError::OutOfRange(text.to_owned()))
    }
}
