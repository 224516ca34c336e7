//! Traits which, typically, may be imported without concern: `use optreg::prelude::*`.
use std::fmt::Display;
use std::str::FromStr;

/// Behaviour for a type `T` to be the destination of a value option.
///
/// Values are converted from the Cli via [`FromStr`], and defaults are documented in the usage text via [`Display`].
/// `is_blank` decides whether the default is left out of the usage text; by default it never is.
// Needs to be imported in order to implement `OptionValue` for a custom type.
pub trait OptionValue: FromStr + Display {
    /// Whether this (default) value is too uninformative to document.
    fn is_blank(&self) -> bool {
        false
    }
}
