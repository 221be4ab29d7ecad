use std::fmt::Display;

use log::{debug, trace, warn};
use logos::{Lexer, Logos};
use reckon_core::num::Num;

use crate::{err::LexError, expr::BinaryOp};

/// What to do with a character that starts no token.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    #[default]
    Strict,
    /// Drop unrecognized characters and keep scanning.
    Lenient,
}

#[derive(Debug, Clone)]
pub struct TokBuffer(Box<[Tok]>);

impl TokBuffer {
    #[inline]
    pub fn read_string(src: &str) -> Result<Self, LexError> {
        Self::read_string_with(src, LexMode::default())
    }

    /// Strips every whitespace character from `src`, then scans what is left.
    /// Offsets on the produced toks point into the original `src`.
    pub fn read_string_with(src: &str, mode: LexMode) -> Result<Self, LexError> {
        let mut stripped = String::with_capacity(src.len());
        let mut origin = Vec::with_capacity(src.len());
        for (i, ch) in src.char_indices() {
            if ch.is_whitespace() {
                continue;
            }
            stripped.push(ch);
            origin.extend(std::iter::repeat(i).take(ch.len_utf8()));
        }
        let offset_of = |pos: usize| origin.get(pos).copied().unwrap_or(src.len());

        let mut lex = LexTok::lexer(&stripped);
        let mut buf = Vec::with_capacity(16);
        while let Some(t) = lex.next() {
            let offset = offset_of(lex.span().start);
            match t {
                Ok(t) => {
                    let tok = Tok::from_tok(t, lex.slice(), offset);
                    trace!("lexed {tok}");
                    buf.push(tok);
                }
                Err(LexError::IllegalCharacter) => {
                    let ch = lex.slice().chars().next().unwrap_or_default();
                    match mode {
                        LexMode::Strict => {
                            return Err(LexError::UnrecognizedCharacter { ch, offset })
                        }
                        LexMode::Lenient => {
                            warn!("dropping unrecognized character {ch:?} at offset {offset}")
                        }
                    }
                }
                Err(e) => return Err(e),
            }
        }
        buf.push(Tok::eof(src.len()));
        debug!("lexed {} tokens from {src:?}", buf.len() - 1);

        Ok(Self(buf.into_boxed_slice()))
    }

    /// Toks including the trailing `Eof`.
    #[inline]
    pub fn slice(&self) -> &[Tok] {
        self.0.as_ref()
    }

    /// Number of toks, not counting `Eof`.
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn types(&self) -> Vec<TokType> {
        self.0.iter().map(|t| t.ty).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tok {
    pub ty: TokType,
    pub lexeme: String,
    /// Byte offset in the source text.
    pub offset: usize,
}

impl Tok {
    pub const EOF_STR: &'static str = "__EOF__";

    pub fn eof(offset: usize) -> Self {
        Self {
            ty: TokType::Eof,
            lexeme: Self::EOF_STR.into(),
            offset,
        }
    }

    fn from_tok(tok: LexTok, lexeme: &str, offset: usize) -> Self {
        Self {
            ty: TokType::from(tok),
            lexeme: lexeme.to_owned(),
            offset,
        }
    }

    pub const fn is_eof(&self) -> bool {
        matches!(self.ty, TokType::Eof)
    }
}

impl Display for Tok {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { ty, lexeme, offset } = self;
        write!(f, "Token [ {lexeme} => {ty:?}, Offset => {offset} ]")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokType {
    Number(Num),
    Plus,
    Minus,
    Star,
    DoubleStar,
    ForwardSlash,
    DoubleSlash,
    Percent,
    OpenParen,
    CloseParen,
    Eof,
}

impl TokType {
    pub const fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            TokType::Plus => Some(BinaryOp::Add),
            TokType::Minus => Some(BinaryOp::Sub),
            TokType::Star => Some(BinaryOp::Mul),
            TokType::DoubleStar => Some(BinaryOp::Pow),
            TokType::ForwardSlash => Some(BinaryOp::Div),
            TokType::DoubleSlash => Some(BinaryOp::FloorDiv),
            TokType::Percent => Some(BinaryOp::Rem),
            TokType::Number(_) | TokType::OpenParen | TokType::CloseParen | TokType::Eof => None,
        }
    }
}

impl Display for TokType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokType::Number(n) => write!(f, "{n}"),
            TokType::OpenParen => f.write_str("("),
            TokType::CloseParen => f.write_str(")"),
            TokType::Eof => f.write_str("<eof>"),
            op => match op.binary_op() {
                Some(op) => f.write_str(op.symbol()),
                None => Ok(()),
            },
        }
    }
}

impl From<LexTok> for TokType {
    fn from(value: LexTok) -> Self {
        match value {
            LexTok::Number(n) => TokType::Number(n),
            LexTok::Plus => TokType::Plus,
            LexTok::Minus => TokType::Minus,
            LexTok::Star => TokType::Star,
            LexTok::DoubleStar => TokType::DoubleStar,
            LexTok::ForwardSlash => TokType::ForwardSlash,
            LexTok::DoubleSlash => TokType::DoubleSlash,
            LexTok::Percent => TokType::Percent,
            LexTok::OpenParen => TokType::OpenParen,
            LexTok::CloseParen => TokType::CloseParen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Logos)]
#[logos(error = LexError)]
pub enum LexTok {
    #[regex(r"[0-9]+(\.[0-9]+)?", number_cb)]
    Number(Num),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("**")]
    DoubleStar,

    #[token("/")]
    ForwardSlash,

    #[token("//")]
    DoubleSlash,

    #[token("%")]
    Percent,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,
}

fn number_cb(lex: &mut Lexer<LexTok>) -> Result<Num, LexError> {
    let n = Num::parse_literal(lex.slice())?;
    Ok(n)
}
