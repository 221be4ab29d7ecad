use std::{fmt::Display, str::FromStr};

use reckon_core::{err::ArithResult, num::Num};

use crate::{err::UnknownOperator, ExprPrinter, ExprWalker};

pub type ExprNode = Box<Expr>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
    Rem,
    Pow,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::FloorDiv,
        BinaryOp::Rem,
        BinaryOp::Pow,
    ];

    pub const fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::FloorDiv => "//",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "**",
        }
    }

    /// `+ -` bind loosest; every other operator shares the multiplicative tier.
    pub const fn is_additive(&self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub)
    }

    pub fn apply(self, lhs: Num, rhs: Num) -> ArithResult<Num> {
        match self {
            BinaryOp::Add => lhs.checked_add(rhs),
            BinaryOp::Sub => lhs.checked_sub(rhs),
            BinaryOp::Mul => lhs.checked_mul(rhs),
            BinaryOp::Div => lhs.checked_div(rhs),
            BinaryOp::FloorDiv => lhs.checked_floor_div(rhs),
            BinaryOp::Rem => lhs.checked_rem(rhs),
            BinaryOp::Pow => lhs.checked_pow(rhs),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinaryOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| UnknownOperator(s.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Num(Num),
    Binary {
        lhs: ExprNode,
        op: BinaryOp,
        rhs: ExprNode,
    },
}

impl Expr {
    pub const fn type_str(&self) -> &'static str {
        match self {
            Expr::Num(_) => "Number",
            Expr::Binary { .. } => "BinaryOp",
        }
    }

    #[inline]
    pub fn num(n: impl Into<Num>) -> Self {
        Self::Num(n.into())
    }

    #[inline]
    pub fn binary_op(lhs: Expr, op: BinaryOp, rhs: Expr) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    pub fn walk<W, R>(&self, walker: &mut W) -> Result<R, <W as ExprWalker<R>>::Error>
    where
        W: ExprWalker<R>,
    {
        walker.visit(self)
    }

    /// Nesting depth of binary nodes; a bare number is 0.
    pub fn depth(&self) -> usize {
        match self {
            Expr::Num(_) => 0,
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = ExprPrinter::expr_tostring(self);
        f.write_str(&s)
    }
}
