use crate::model::{OptionCode, OptionKind};

/// How an option treats the Cli value following its flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HasArgument {
    /// Never takes a value (short switches).
    No,
    /// Must take a value, attached or as the next token.
    Required,
    /// May take an attached `=value` (long switches).
    Optional,
}

impl HasArgument {
    pub(crate) fn short(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Value => HasArgument::Required,
            OptionKind::Switch => HasArgument::No,
        }
    }

    pub(crate) fn long(kind: OptionKind) -> Self {
        match kind {
            OptionKind::Value => HasArgument::Required,
            OptionKind::Switch => HasArgument::Optional,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LongOption {
    name: String,
    has_argument: HasArgument,
    code: OptionCode,
}

impl LongOption {
    pub(crate) fn new(name: impl Into<String>, has_argument: HasArgument, code: OptionCode) -> Self {
        Self {
            name: name.into(),
            has_argument,
            code,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn has_argument(&self) -> HasArgument {
        self.has_argument
    }

    pub(crate) fn code(&self) -> OptionCode {
        self.code
    }
}

/// The registered flags, in the shape the scanner consumes them.
///
/// Short options accumulate into a getopt style option string: each short character, followed by `:` when it requires a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ScanTable {
    option_string: String,
    long_options: Vec<LongOption>,
}

impl ScanTable {
    pub(crate) fn push_short(&mut self, short: char, kind: OptionKind) {
        self.option_string.push(short);

        if HasArgument::short(kind) == HasArgument::Required {
            self.option_string.push(':');
        }
    }

    pub(crate) fn push_long(&mut self, long_option: LongOption) {
        self.long_options.push(long_option);
    }

    pub(crate) fn option_string(&self) -> &str {
        &self.option_string
    }

    pub(crate) fn short(&self, short: char) -> Option<HasArgument> {
        let mut characters = self.option_string.chars().peekable();

        while let Some(c) = characters.next() {
            let required = characters.peek() == Some(&':');

            if required {
                characters.next();
            }

            if c == short {
                return Some(if required {
                    HasArgument::Required
                } else {
                    HasArgument::No
                });
            }
        }

        None
    }

    /// Find the long option by exact name, otherwise by unique prefix.
    pub(crate) fn long(&self, name: &str) -> LongLookup<'_> {
        if name.is_empty() {
            return LongLookup::Missing;
        }

        if let Some(exact) = self.long_options.iter().find(|lo| lo.name == name) {
            return LongLookup::Found(exact);
        }

        let candidates: Vec<&LongOption> = self
            .long_options
            .iter()
            .filter(|lo| lo.name.starts_with(name))
            .collect();

        match candidates[..] {
            [] => LongLookup::Missing,
            [single] => LongLookup::Found(single),
            _ => LongLookup::Ambiguous(candidates.iter().map(|lo| lo.name.clone()).collect()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LongLookup<'t> {
    Found(&'t LongOption),
    Ambiguous(Vec<String>),
    Missing,
}

/// A recognized flag, along with its attached value (if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Scanned {
    pub(crate) code: OptionCode,
    pub(crate) argument: Option<String>,
}
