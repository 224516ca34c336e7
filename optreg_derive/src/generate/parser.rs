use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveParameter, DeriveParser, DeriveValue};

impl DeriveParser {
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveParser {
            struct_name,
            header,
            parameters,
        } = self;
        let header = header.map(|DeriveValue { tokens }| quote! { .header(#tokens) });

        let registrations = if parameters.is_empty() {
            quote! {
                let _ = options;
            }
        } else {
            let fields = parameters
                .into_iter()
                .map(DeriveParameter::generate)
                .collect::<Vec<_>>();

            quote! {
                #( #fields )*
            }
        };

        quote! {
            impl #struct_name {
                /// Register every field as an option, using its current value as the default.
                pub fn optreg_register<'optreg>(
                    &'optreg mut self,
                    options: &mut ::optreg::Options<'optreg>,
                ) -> ::std::result::Result<(), ::optreg::ConfigError> {
                    #registrations
                    ::std::result::Result::Ok(())
                }

                /// Parse the Cli of this process into the default instance.
                /// On a parse error, the error and the usage text are printed and the process exits.
                pub fn optreg_parse() -> Self {
                    let mut target = <Self as ::std::default::Default>::default();
                    let mut options = ::optreg::Options::new() #header;
                    target
                        .optreg_register(&mut options)
                        .expect("Invalid Options configuration");

                    if let ::std::result::Result::Err(error) = options.parse() {
                        ::std::eprintln!("{}", error);
                        ::std::eprint!("{}", options.usage());
                        ::std::process::exit(1);
                    }

                    ::std::mem::drop(options);
                    target
                }
            }
        }
    }
}
