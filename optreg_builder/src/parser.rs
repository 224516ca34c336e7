mod base;
mod printer;

pub use self::base::{ConfigError, ParseError};
pub(crate) use self::base::Parser;
pub(crate) use self::printer::*;
