use crate::model::{DeriveParameter, DeriveValue, ParameterType};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveParameter {
    /// Generate the registration of this field, against `options` in the scope of `optreg_register`.
    pub(crate) fn generate(self) -> TokenStream2 {
        let DeriveParameter {
            field_name,
            parameter_type,
            long,
            short,
            help,
            group,
        } = self;
        let long = long.tokens;
        let short = match short {
            Some(DeriveValue { tokens }) => tokens,
            None => quote! { ::std::option::Option::None },
        };
        let help = help.map(|DeriveValue { tokens }| quote! { .help(#tokens) });
        let group = group.map(|DeriveValue { tokens }| quote! { .group(#tokens) });
        let flag = quote! {
            ::optreg::Flag::new(#long, #short) #help #group
        };

        match parameter_type {
            ParameterType::Value => quote! {
                {
                    let default = ::std::clone::Clone::clone(&self.#field_name);
                    options.add_value(&mut self.#field_name, default, #flag)?;
                }
            },
            ParameterType::Switch => quote! {
                {
                    let default = self.#field_name;
                    options.add_switch(&mut self.#field_name, default, #flag)?;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn render_value() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("my_field"),
            parameter_type: ParameterType::Value,
            long: string("my-field"),
            short: None,
            help: None,
            group: None,
        };

        // Execute
        let token_stream = parameter.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                {
                    let default = ::std::clone::Clone::clone(&self.my_field);
                    options.add_value(&mut self.my_field, default, ::optreg::Flag::new("my-field", ::std::option::Option::None))?;
                }
            }
            .to_string()
        );
    }

    #[test]
    fn render_value_attributes() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("count"),
            parameter_type: ParameterType::Value,
            long: string("count"),
            short: Some(DeriveValue {
                tokens: Literal::character('c').into_token_stream(),
            }),
            help: Some(string("How many.")),
            group: Some(string("Group")),
        };

        // Execute
        let token_stream = parameter.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                {
                    let default = ::std::clone::Clone::clone(&self.count);
                    options.add_value(&mut self.count, default, ::optreg::Flag::new("count", 'c').help("How many.").group("Group"))?;
                }
            }
            .to_string()
        );
    }

    #[test]
    fn render_switch() {
        // Setup
        let parameter = DeriveParameter {
            field_name: ident("verbose"),
            parameter_type: ParameterType::Switch,
            long: string("verbose"),
            short: Some(DeriveValue {
                tokens: Literal::character('v').into_token_stream(),
            }),
            help: Some(string("Say more.")),
            group: None,
        };

        // Execute
        let token_stream = parameter.generate();

        // Verify
        assert_eq!(
            token_stream.to_string(),
            quote! {
                {
                    let default = self.verbose;
                    options.add_switch(&mut self.verbose, default, ::optreg::Flag::new("verbose", 'v').help("Say more."))?;
                }
            }
            .to_string()
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn string(value: &str) -> DeriveValue {
        DeriveValue {
            tokens: Literal::string(value).into_token_stream(),
        }
    }
}
