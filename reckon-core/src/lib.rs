pub mod err;
pub mod num;

pub use err::{ArithError, ArithResult, NumError};
pub use num::Num;
