/// The integer identity used to route a scanned flag to its converter.
///
/// A short option's code is its character value.
/// Long-only options are allocated codes starting at `256`, in registration order.
pub type OptionCode = u32;

/// Whether an option consumes a value or toggles a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Takes a textual value, converted into the destination type.
    Value,
    /// Takes no value; inverts the destination on every occurrence.
    Switch,
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One declared flag, as seen by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptionSpec {
    pub(crate) short: Option<char>,
    pub(crate) long: Option<String>,
    pub(crate) kind: OptionKind,
    pub(crate) help: String,
    pub(crate) group: String,
}

impl OptionSpec {
    pub(crate) fn is_nameless(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }

    #[cfg_attr(not(feature = "tracing_debug"), allow(dead_code))]
    pub(crate) fn describe(&self) -> String {
        match (&self.short, &self.long) {
            (Some(s), Some(l)) => format!("-{s}/--{l}"),
            (Some(s), None) => format!("-{s}"),
            (None, Some(l)) => format!("--{l}"),
            (None, None) => "<nameless>".to_string(),
        }
    }
}
