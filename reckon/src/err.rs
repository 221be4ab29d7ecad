use reckon_ast::err::{AstError, LexError, ParseError};
use reckon_core::err::ArithError;

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum EvalError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("EVAL_ERR => {0}")]
    Arith(#[from] ArithError),
}

impl From<AstError> for EvalError {
    fn from(err: AstError) -> Self {
        match err {
            AstError::Lex(e) => EvalError::Lex(e),
            AstError::Parse(e) => EvalError::Parse(e),
        }
    }
}
