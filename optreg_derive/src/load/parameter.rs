use crate::load::unknown_error;
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes, ParameterType};
use quote::ToTokens;
use syn::ext::IdentExt;

const FIELD_KEYS: [&str; 4] = ["short", "long", "help", "group"];

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let mut attributes = IntermediateAttributes::collect(&value.attrs)?;
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - only named fields may be registered.",
                ));
            }
        };

        let short = attributes.take("short");
        let long = match attributes.take("long") {
            Some(long) => long,
            None => {
                let name = field_name.unraw().to_string().replace('_', "-");
                DeriveValue {
                    tokens: syn::LitStr::new(&name, field_name.span()).into_token_stream(),
                }
            }
        };
        let help = attributes.take("help");
        let group = attributes.take("group");

        if let Some(key) = attributes.leftover() {
            return Err(unknown_error("field", &field_name, key, &FIELD_KEYS));
        }

        let parameter_type = if is_bool(&value.ty) {
            ParameterType::Switch
        } else {
            ParameterType::Value
        };

        Ok(DeriveParameter {
            field_name,
            parameter_type,
            long,
            short,
            help,
            group,
        })
    }
}

fn is_bool(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => path.qself.is_none() && path.path.is_ident("bool"),
        _ => false,
    }
}
