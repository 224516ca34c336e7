//! Builder module for `optreg`.
//! See [documentation root](https://docs.rs/optreg/latest/optreg/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use matcher::MatchError;
pub use model::*;
pub use parser::{ConfigError, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
