use proc_macro2::TokenStream as TokenStream2;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        let st = &self.tokens.to_string();
        let ot = &other.tokens.to_string();
        st == ot
    }
}

impl Eq for DeriveValue {}

/// The `key = value` pairs of the `#[optreg(..)]` attributes, before interpretation.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub pairs: HashMap<String, DeriveValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    Value,
    Switch,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParameter {
    pub field_name: syn::Ident,
    pub parameter_type: ParameterType,
    pub long: DeriveValue,
    pub short: Option<DeriveValue>,
    pub help: Option<DeriveValue>,
    pub group: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParser {
    pub struct_name: syn::Ident,
    pub header: Option<DeriveValue>,
    pub parameters: Vec<DeriveParameter>,
}
