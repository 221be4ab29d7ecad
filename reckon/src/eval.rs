use log::trace;
use reckon_ast::{expr::Expr, ExprWalker};
use reckon_core::{err::ArithError, num::Num};

/// Reduces an expression tree bottom-up. Both operands of a node are fully
/// evaluated before its operator runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    /// Binary nodes reduced so far.
    pub reduced: usize,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn eval(expr: &Expr) -> Result<Num, ArithError> {
        expr.walk(&mut Self::new())
    }

    /// Like [`Evaluator::eval`], also returning how many binary nodes were reduced.
    pub fn eval_counted(expr: &Expr) -> Result<(Num, usize), ArithError> {
        let mut ev = Self::new();
        let value = expr.walk(&mut ev)?;
        Ok((value, ev.reduced))
    }
}

impl ExprWalker<Num> for Evaluator {
    type Error = ArithError;

    fn visit(&mut self, node: &Expr) -> Result<Num, Self::Error> {
        match node {
            Expr::Num(n) => Ok(*n),
            Expr::Binary { lhs, op, rhs } => {
                let left = lhs.walk(self)?;
                let right = rhs.walk(self)?;
                let v = op.apply(left, right)?;
                self.reduced += 1;
                trace!("{} {op} {} => {}", left.repr(), right.repr(), v.repr());
                Ok(v)
            }
        }
    }
}
