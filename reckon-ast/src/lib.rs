pub mod err;
pub mod expr;
pub mod lex;
pub mod parse;

use std::convert::Infallible;

use err::{AstError, LexError};
use expr::Expr;
use lex::{LexMode, TokBuffer};
use parse::Parser;

pub trait ExprWalker<R>
where
    Self: Sized,
{
    type Error;

    fn visit(&mut self, node: &Expr) -> Result<R, Self::Error>;
}

#[inline]
pub fn tokenize(src: &str) -> Result<TokBuffer, LexError> {
    TokBuffer::read_string(src)
}

pub fn parse_with(src: &str, mode: LexMode) -> Result<Expr, AstError> {
    let buf = TokBuffer::read_string_with(src, mode)?;
    let expr = Parser::parse_expr(buf.slice())?;
    Ok(expr)
}

impl std::str::FromStr for Expr {
    type Err = AstError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_with(s, LexMode::default())
    }
}

/// Renders a tree as a prefix s-expression, e.g. `(+ 1 (* 2 3))`.
#[derive(Debug, Clone, Copy)]
pub struct ExprPrinter;

impl ExprPrinter {
    #[inline]
    pub fn expr_tostring(expr: &Expr) -> String {
        match expr.walk(&mut Self) {
            Ok(s) => s,
            Err(never) => match never {},
        }
    }
}

impl ExprWalker<String> for ExprPrinter {
    type Error = Infallible;

    fn visit(&mut self, node: &Expr) -> Result<String, Self::Error> {
        let s = match node {
            Expr::Num(n) => n.to_string(),
            Expr::Binary { lhs, op, rhs } => {
                format!("({op} {} {})", lhs.walk(self)?, rhs.walk(self)?)
            }
        };
        Ok(s)
    }
}
