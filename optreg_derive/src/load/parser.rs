use crate::load::unknown_error;
use crate::model::{DeriveParameter, DeriveParser, IntermediateAttributes};

const STRUCT_KEYS: [&str; 1] = ["header"];

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::collect(&value.attrs)?;
        let header = attributes.take("header");

        if let Some(key) = attributes.leftover() {
            return Err(unknown_error("struct", &value.ident, key, &STRUCT_KEYS));
        }

        match &value.data {
            syn::Data::Struct(ds) => {
                let parameters = match &ds.fields {
                    syn::Fields::Named(fields) => fields
                        .named
                        .iter()
                        .map(DeriveParameter::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::Fields::Unit => Vec::default(),
                    syn::Fields::Unnamed(fields) => {
                        return Err(syn::Error::new_spanned(
                            fields,
                            "Invalid - OptregParser requires named fields.",
                        ));
                    }
                };

                Ok(DeriveParser {
                    struct_name: value.ident.clone(),
                    header,
                    parameters,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                "Invalid - OptregParser may only be derived for a struct.",
            )),
        }
    }
}
