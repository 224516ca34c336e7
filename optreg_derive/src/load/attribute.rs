use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

pub(crate) const OPTREG: &str = "optreg";

impl IntermediateAttributes {
    /// Collect the pairs of every `#[optreg(..)]` attribute, ignoring all other attributes.
    pub(crate) fn collect(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut intermediate = IntermediateAttributes::default();

        for attribute in attributes {
            if attribute.path().is_ident(OPTREG) {
                intermediate.extend(attribute)?;
            }
        }

        Ok(intermediate)
    }

    fn extend(&mut self, value: &syn::Attribute) -> Result<(), syn::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;

        for expression in value.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let key = match assignment.left.as_ref() {
                        syn::Expr::Path(path) => path.path.get_ident().map(|i| i.to_string()),
                        _ => None,
                    };

                    let Some(key) = key else {
                        return Err(syn::Error::new_spanned(
                            &assignment.left,
                            "Invalid - attribute key must be a plain identifier.",
                        ));
                    };

                    if self.pairs.contains_key(&key) {
                        return Err(syn::Error::new_spanned(
                            &assignment.left,
                            format!("Invalid - attribute `{key}` cannot be repeated."),
                        ));
                    }

                    self.pairs.insert(
                        key,
                        DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        },
                    );
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Unparseable attribute: {}",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(())
    }

    pub(crate) fn take(&mut self, key: &str) -> Option<DeriveValue> {
        self.pairs.remove(key)
    }

    /// The first remaining key, in a stable order.
    pub(crate) fn leftover(&self) -> Option<&str> {
        self.pairs.keys().min().map(String::as_str)
    }
}
