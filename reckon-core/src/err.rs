use std::num::{IntErrorKind, ParseFloatError, ParseIntError};

use crate::num::Num;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NumError {
    #[error("Malformed number literal: {0}")]
    MalformedNumber(String),
}

impl From<ParseFloatError> for NumError {
    fn from(err: ParseFloatError) -> Self {
        NumError::MalformedNumber(err.to_string())
    }
}

impl From<ParseIntError> for NumError {
    fn from(err: ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                NumError::MalformedNumber("integer literal out of range".to_owned())
            }
            _ => NumError::MalformedNumber(err.to_string()),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ArithError {
    #[error("Division by zero in '{op}'")]
    DivisionByZero { op: &'static str },

    #[error("Integer overflow evaluating {lhs} {op} {rhs}")]
    Overflow {
        op: &'static str,
        lhs: Num,
        rhs: Num,
    },
}

pub type ArithResult<T> = Result<T, ArithError>;
