use log::{debug, trace};

use crate::{
    err::ParseError,
    expr::Expr,
    lex::{Tok, TokType},
};

/// Recursive-descent parser over a tok slice ending in `Eof`.
///
/// ```text
/// expression := term (('+'|'-') term)*
/// term       := primary (('*'|'/'|'%'|'//'|'**') primary)*
/// primary    := Number | '(' expression ')'
/// ```
///
/// Chains at the same tier fold to the left, so `16/4/2` is `(16/4)/2`.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    pub i: usize,
    pub tokens: &'a [Tok],
}

impl<'a> Parser<'a> {
    pub const fn new(tokens: &'a [Tok]) -> Self {
        Self { i: 0, tokens }
    }

    /// Parses a single expression and requires every tok to be consumed.
    pub fn parse_expr(tokens: &'a [Tok]) -> Result<Expr, ParseError> {
        let mut p = Self::new(tokens);
        let expr = p.expression()?;
        if !p.is_eof() {
            return Err(p.unexpected());
        }
        debug!("parsed expression of depth {}: {expr}", expr.depth());
        Ok(expr)
    }

    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;
        while let Some(op) = self.peek_ty().binary_op().filter(|op| op.is_additive()) {
            self.adv()?;
            let right = self.term()?;
            trace!("fold {op} at tok {}", self.i);
            expr = Expr::binary_op(expr, op, right);
        }
        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;
        while let Some(op) = self.peek_ty().binary_op().filter(|op| !op.is_additive()) {
            self.adv()?;
            let right = self.primary()?;
            trace!("fold {op} at tok {}", self.i);
            expr = Expr::binary_op(expr, op, right);
        }
        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek_ty() {
            TokType::Number(n) => {
                self.adv()?;
                Ok(Expr::Num(n))
            }
            TokType::OpenParen => {
                self.adv()?;
                let expr = self.expression()?;
                if self.peek_ty() == TokType::CloseParen {
                    self.adv()?;
                    Ok(expr)
                } else {
                    Err(self.unexpected())
                }
            }
            _ => Err(self.unexpected()),
        }
    }

    /// Error for the tok under the cursor.
    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(tok) if !tok.is_eof() => ParseError::UnexpectedToken {
                symbol: tok.lexeme.clone(),
                offset: tok.offset,
            },
            _ => ParseError::UnexpectedEndOfInput,
        }
    }

    fn is_eof(&self) -> bool {
        self.peek_ty() == TokType::Eof
    }

    fn adv(&mut self) -> Result<(), ParseError> {
        if self.is_eof() {
            Err(ParseError::UnexpectedEndOfInput)
        } else {
            self.i += 1;
            Ok(())
        }
    }

    #[inline]
    pub fn peek(&self) -> Option<&Tok> {
        self.tokens.get(self.i)
    }

    /// Running off the end of the slice reads as `Eof`.
    #[inline]
    pub fn peek_ty(&self) -> TokType {
        self.peek().map_or(TokType::Eof, |t| t.ty)
    }
}
