extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Derive `optreg_register` and `optreg_parse` for a struct with named fields.
///
/// Every field is registered as an option: `bool` fields as switches, all others as value options.
/// The value of each field at registration time is its default.
#[proc_macro_derive(OptregParser, attributes(optreg))]
pub fn optreg_parser(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(derive_parser) => derive_parser.generate().into(),
        Err(error) => error.to_compile_error().into(),
    }
}
