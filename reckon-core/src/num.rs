use std::{
    cmp::Ordering,
    fmt::Display,
    ops::{Add, Div, Mul, Rem, Sub},
    str::FromStr,
};

use num_traits::ToPrimitive;

use crate::err::{ArithError, ArithResult, NumError};

/// A numeric value tagged by how it was written.
///
/// `Int` comes from an all-digit literal (or integer-only arithmetic), `Float`
/// from a literal with one decimal point (or any arithmetic touching a float).
/// The tag never changes after construction: `4.0` stays a `Float` even though
/// its magnitude is integral.
#[derive(Debug, Clone, Copy)]
pub enum Num {
    Int(i64),
    Float(f64),
}

impl Num {
    /// Parses a literal matching `\d+(\.\d+)?`.
    pub fn parse_literal(text: &str) -> Result<Self, NumError> {
        let dots = text.matches('.').count();
        let well_formed = !text.is_empty()
            && dots <= 1
            && !text.starts_with('.')
            && !text.ends_with('.')
            && text.chars().all(|c| c.is_ascii_digit() || c == '.');

        if !well_formed {
            return Err(NumError::MalformedNumber(text.to_owned()));
        }

        if dots == 0 {
            Ok(Self::Int(text.parse::<i64>()?))
        } else {
            Ok(Self::Float(text.parse::<f64>()?))
        }
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Equal in both tag and value, unlike `==`. `NaN` is identical to itself.
    pub fn identical(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }

    pub fn is_positive(&self) -> bool {
        match *self {
            Self::Int(n) => n > 0,
            Self::Float(f) => f > 0.0,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(n) => n as f64,
            Self::Float(f) => f,
        }
    }

    pub const fn type_str(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
        }
    }

    /// Tagged rendering, e.g. `int(3)` or `float(2.5)`.
    pub fn repr(&self) -> String {
        format!("{}({self})", self.type_str())
    }

    pub fn checked_add(self, rhs: Self) -> ArithResult<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map(Self::Int)
                .ok_or(overflow("+", self, rhs)),
            (a, b) => Ok(Self::Float(a.as_f64() + b.as_f64())),
        }
    }

    pub fn checked_sub(self, rhs: Self) -> ArithResult<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_sub(b)
                .map(Self::Int)
                .ok_or(overflow("-", self, rhs)),
            (a, b) => Ok(Self::Float(a.as_f64() - b.as_f64())),
        }
    }

    pub fn checked_mul(self, rhs: Self) -> ArithResult<Self> {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_mul(b)
                .map(Self::Int)
                .ok_or(overflow("*", self, rhs)),
            (a, b) => Ok(Self::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// True division. Always produces a `Float`.
    pub fn checked_div(self, rhs: Self) -> ArithResult<Self> {
        if rhs.is_zero() {
            return Err(ArithError::DivisionByZero { op: "/" });
        }
        Ok(Self::Float(self.as_f64() / rhs.as_f64()))
    }

    /// Division rounded toward negative infinity.
    pub fn checked_floor_div(self, rhs: Self) -> ArithResult<Self> {
        if rhs.is_zero() {
            return Err(ArithError::DivisionByZero { op: "//" });
        }
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => int_floor_div(a, b)
                .map(Self::Int)
                .ok_or(overflow("//", self, rhs)),
            (a, b) => Ok(Self::Float(float_divmod(a.as_f64(), b.as_f64()).0)),
        }
    }

    /// Remainder carrying the sign of the divisor, paired with `checked_floor_div`.
    pub fn checked_rem(self, rhs: Self) -> ArithResult<Self> {
        if rhs.is_zero() {
            return Err(ArithError::DivisionByZero { op: "%" });
        }
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => Ok(Self::Int(int_floor_rem(a, b))),
            (a, b) => Ok(Self::Float(float_divmod(a.as_f64(), b.as_f64()).1)),
        }
    }

    /// Exponentiation. A negative integer exponent yields a `Float`.
    pub fn checked_pow(self, rhs: Self) -> ArithResult<Self> {
        if self.is_zero() && rhs.as_f64() < 0.0 {
            return Err(ArithError::DivisionByZero { op: "**" });
        }
        match (self, rhs) {
            (Self::Int(base), Self::Int(exp)) => match exp.to_usize() {
                Some(e) => num_traits::checked_pow(base, e)
                    .map(Self::Int)
                    .ok_or(overflow("**", self, rhs)),
                None => Ok(Self::Float((base as f64).powf(exp as f64))),
            },
            (a, b) => Ok(Self::Float(a.as_f64().powf(b.as_f64()))),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        match *self {
            Self::Int(n) => n == 0,
            Self::Float(f) => f == 0.0,
        }
    }
}

#[inline]
fn overflow(op: &'static str, lhs: Num, rhs: Num) -> ArithError {
    ArithError::Overflow { op, lhs, rhs }
}

fn int_floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    if a % b != 0 && ((a < 0) != (b < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

fn int_floor_rem(a: i64, b: i64) -> i64 {
    // wrapping_rem keeps i64::MIN % -1 at 0
    let r = a.wrapping_rem(b);
    if r != 0 && ((r < 0) != (b < 0)) {
        r + b
    } else {
        r
    }
}

/// Floored quotient and remainder for floats, `b != 0`.
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 {
        if (b < 0.0) != (rem < 0.0) {
            rem += b;
            div -= 1.0;
        }
    } else {
        rem = 0.0_f64.copysign(b);
    }

    let floordiv = if div != 0.0 {
        let fl = div.floor();
        if div - fl > 0.5 {
            fl + 1.0
        } else {
            fl
        }
    } else {
        0.0_f64.copysign(a / b)
    };
    (floordiv, rem)
}

fn render_float(f: f64) -> String {
    let s = f.to_string();
    if f.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

impl PartialEq for Num {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Num {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

impl Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Num::Int(n) => write!(f, "{n}"),
            Num::Float(v) => write!(f, "{}", render_float(v)),
        }
    }
}

impl FromStr for Num {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl From<i64> for Num {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Num {
    fn from(value: i32) -> Self {
        Self::Int(value as i64)
    }
}

impl From<f64> for Num {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! num_binary_op {
    ($op_trait: ident, $fn_name: ident, $checked: ident) => {
        impl<T: Into<Num>> $op_trait<T> for Num {
            type Output = ArithResult<Num>;

            fn $fn_name(self, rhs: T) -> Self::Output {
                self.$checked(rhs.into())
            }
        }
    };
}

num_binary_op!(Add, add, checked_add);
num_binary_op!(Sub, sub, checked_sub);
num_binary_op!(Mul, mul, checked_mul);
num_binary_op!(Div, div, checked_div);
num_binary_op!(Rem, rem, checked_rem);
