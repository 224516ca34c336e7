//! Derive Api for `optreg` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a parameter struct `S` with `#[derive(Default, OptregParser)]`.
//! This generates two functions:
//! * `S::optreg_parse() -> S` parses the Cli into a `S::default()`.
//! On a parse error, the error and the usage text are printed to stderr and the process exits with code `1`.
//! * `S::optreg_register(&mut self, &mut Options)` registers each field into an existing [`Options`](../struct.Options.html), for finer control.
//!
//! ```no_run
#![doc = include_str!("../demos/demo_derived.rs")]
//! ```
//!
//! This generates the following usage text:
//! ```console
//! Usage: demo_derived [OPTIONS]
//!
//!   -a --apple      The number of apples.
//!   -b --banana     Whether to include a banana. <switch>
//!   --daikon-root   The root of the daikon.
//!   --eggplant-weight  Weight of the eggplant, in grams.
//! ```
//!
//! ### Parameter Configuration
//! Every named field is registered:
//! ```console
//! Type        | Registration
//! -----------------------------------
//! bool        | Options::add_switch(..)
//! T           | Options::add_value(..)
//! ```
//!
//! The value of the field, at the time it is registered, is the default.
//! Value fields are therefore `Clone`, as well as [`OptionValue`](../prelude/trait.OptionValue.html).
//!
//! Each field may be configured with `#[optreg(..)]`:
//! * `#[optreg(short = C)]` to set the short name, where `C` is a char (ex: `'c'`).
//! * `#[optreg(long = N)]` to set the long name.
//! By default, this is the field name with underscores replaced by dashes (ex: `dry_run` becomes `--dry-run`).
//! * `#[optreg(help = H)]` to document the help message.
//! Fields without a help message are parsed, but left out of the usage text.
//! * `#[optreg(group = G)]` to place the flag under a group of the usage text.
//!
//! The struct may be configured with `#[optreg(header = H)]` to set the [header](../struct.Options.html#method.header).
//!
//! ```
//! use optreg::derive::*;
//! use optreg::Options;
//!
//! #[derive(Default, OptregParser)]
//! struct Parameters {
//!     #[optreg(short = 'c', help = "How many.")]
//!     count: u32,
//!     verbose: bool,
//! }
//!
//! let mut parameters = Parameters {
//!     count: 3,
//!     verbose: false,
//! };
//! let mut options = Options::new().terminal_width(80);
//! parameters.optreg_register(&mut options).unwrap();
//! let usage = options.usage();
//! options.parse_tokens(&["--verbose"]).unwrap();
//! drop(options);
//!
//! assert_eq!(usage, "  -c --count      How many. <default: 3>\n\n");
//! assert_eq!(parameters.count, 3);
//! assert!(parameters.verbose);
//! ```

pub use optreg_derive::*;
