use reckon_core::err::NumError;

#[derive(thiserror::Error, Debug, Default, Clone, PartialEq)]
pub enum LexError {
    #[error("LEX_ERR => Unrecognized character '{ch}' at offset {offset}")]
    UnrecognizedCharacter { ch: char, offset: usize },

    #[error("LEX_ERR => Malformed number: {0}")]
    MalformedNumber(String),

    /// Raised by the lexer before the offending character is known.
    #[default]
    #[error("LEX_ERR => Illegal character encountered")]
    IllegalCharacter,
}

impl From<NumError> for LexError {
    fn from(err: NumError) -> Self {
        match err {
            NumError::MalformedNumber(s) => LexError::MalformedNumber(s),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("PARSE_ERR => Unexpected token '{symbol}' at offset {offset}")]
    UnexpectedToken { symbol: String, offset: usize },

    #[error("PARSE_ERR => Unexpected end of input")]
    UnexpectedEndOfInput,
}

/// A symbol that names no [`BinaryOp`](crate::expr::BinaryOp).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown operator: {0}")]
pub struct UnknownOperator(pub String);

/// Failure turning source text into an expression tree.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AstError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
