mod core;
mod field;
mod flag;

pub use self::core::*;
pub(crate) use self::field::*;
pub use self::flag::*;
