pub mod err;
pub mod eval;
mod test;

use log::debug;

pub use err::EvalError;
pub use eval::Evaluator;
pub use reckon_ast::{
    expr::{BinaryOp, Expr},
    lex::LexMode,
};
pub use reckon_core::num::Num;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    pub lex_mode: LexMode,
}

impl EvalOptions {
    pub const fn lenient() -> Self {
        Self {
            lex_mode: LexMode::Lenient,
        }
    }
}

/// Evaluates `src` with strict lexing.
#[inline]
pub fn evaluate(src: &str) -> Result<Num, EvalError> {
    evaluate_with(src, &EvalOptions::default())
}

pub fn evaluate_with(src: &str, opts: &EvalOptions) -> Result<Num, EvalError> {
    let expr = parse_with(src, opts)?;
    let (value, reduced) = Evaluator::eval_counted(&expr)?;
    debug!("{src:?} => {} ({reduced} nodes reduced)", value.repr());
    Ok(value)
}

#[inline]
pub fn parse(src: &str) -> Result<Expr, EvalError> {
    parse_with(src, &EvalOptions::default())
}

pub fn parse_with(src: &str, opts: &EvalOptions) -> Result<Expr, EvalError> {
    let expr = reckon_ast::parse_with(src, opts.lex_mode)?;
    Ok(expr)
}
