//! `optreg` is a command line option registry for Rust.
//!
//! A program declares each of its typed flags once: a long name, a short name, a description, a default, and a group.
//! From that single declaration `optreg` provides two things:
//! * *Parsing*: the Cli is scanned with familiar getopt conventions, converting each flag's value straight into the variable it was registered against.
//! * *Usage text*: a help message with the flags and descriptions aligned in columns, wrapped to the width of the terminal, and annotated with each default.
//!
//! `optreg` deliberately keeps to options only.
//! There are no sub-commands, positional arguments, or validation beyond converting each value to its type.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/demo_registry.rs")]
//! ```
//!
//! The builder demo generates the following Cli program:
//! ```console
//! $ demo_registry --unknown
//! Parse error: Option '--unknown' does not exist.
//! Usage: demo_registry [OPTIONS]
//!
//!   -c --count      How many times to greet. <default: 1>
//!   -n --name       Who to greet. <default: world>
//!   -v --verbose    Explain what is happening. <switch>
//!
//! $ demo_registry -v --name=optreg -c2
//! Greeting optreg 2 time(s).
//! Hello, optreg!
//! Hello, optreg!
//! ```
//!
//! # Builder Api
//! Configure `optreg` by starting with [`Options`] and registering each flag against a destination variable.
//! There are two kinds of options:
//! * [`Options::add_value`]: the flag takes a value, which is converted into the destination via [`std::str::FromStr`].
//! * [`Options::add_switch`]: the flag takes no value; each occurrence inverts the boolean destination.
//!
//! Each destination is assigned its default as soon as it is registered.
//! Flags are described with a [`Flag`], which names the long and/or short form, its help message, and its group.
//!
//! The destination type `T` must implement [`prelude::OptionValue`].
//! This is provided for the numeric primitives, `String`, `bool`, `char`, and the `std::net` address types.
//! Implement it for your own types (which must be `FromStr + Display`) to use them as destinations:
//! ```
//! use optreg::prelude::*;
//! use optreg::{Flag, Options};
//! use std::fmt;
//! use std::str::FromStr;
//!
//! #[derive(Debug, PartialEq)]
//! enum Colour {
//!     Red,
//!     Blue,
//! }
//!
//! impl FromStr for Colour {
//!     type Err = String;
//!
//!     fn from_str(value: &str) -> Result<Self, Self::Err> {
//!         match value {
//!             "red" => Ok(Colour::Red),
//!             "blue" => Ok(Colour::Blue),
//!             _ => Err(format!("unknown colour: {value}")),
//!         }
//!     }
//! }
//!
//! impl fmt::Display for Colour {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}", format!("{self:?}").to_lowercase())
//!     }
//! }
//!
//! impl OptionValue for Colour {}
//!
//! let mut colour = Colour::Red;
//! let mut options = Options::new();
//! options
//!     .add_value(&mut colour, Colour::Red, Flag::new("colour", None).help("The colour."))
//!     .unwrap();
//! options.parse_tokens(&["--colour", "blue"]).unwrap();
//! drop(options);
//!
//! assert_eq!(colour, Colour::Blue);
//! ```
//!
//! # Parsing
//! The Cli is scanned left to right:
//! * `--name`, `--name=VALUE`, `--name VALUE`.
//! Long names may be abbreviated by any unique prefix (`--cou` for `--count`).
//! * `-c`, `-cVALUE`, `-c VALUE`, and clusters of switches such as `-vq`.
//! * A value option takes the following token verbatim, even when it starts with `-`.
//! * `--` ends the scan, and any other token is skipped.
//!
//! Unknown or ambiguous flags, and value options without a value, fail the parse with a [`ParseError`].
//! A value which does not convert to its type is ignored, leaving its destination unchanged.
//!
//! # Usage Text
//! [`Options::usage`] renders the header followed by each group of flags, in sorted order of the group name.
//! Each option with a help message contributes one line:
//! ```console
//!   -c --count      How many times to greet. <default: 1>
//! ```
//! The flags are indented by [`Options::indent_flag`] and the descriptions start at [`Options::indent_description`].
//! Descriptions wrap at the width of the terminal, or [`Options::terminal_width`] if configured.
//!
//! # Features
//! * `tracing_debug`: emit `tracing` debug events for registration and parsing.

pub mod derive;

pub use optreg_builder::*;
