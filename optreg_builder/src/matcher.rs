mod core;
mod model;

pub use self::core::MatchError;
pub(crate) use self::core::Scanner;
pub(crate) use self::model::*;
