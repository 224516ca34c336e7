use crate::model::{OptionKind, OptionSpec};

/// The Cli identity and documentation of an option.
/// Used with [`Options::add_value`](./struct.Options.html#method.add_value) and [`Options::add_switch`](./struct.Options.html#method.add_switch).
///
/// A flag is named by a long name (`--name`), a short name (`-n`), or both.
/// An empty long name means the flag has no long form.
/// A flag with neither name is accepted but ignored by the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flag {
    long: String,
    short: Option<char>,
    help: String,
    group: String,
}

impl Flag {
    /// Create a flag.
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::Flag;
    ///
    /// // Both `--count` and `-c`.
    /// Flag::new("count", 'c');
    /// // Only `--verbose`.
    /// Flag::new("verbose", None);
    /// // Only `-x`.
    /// Flag::new("", 'x');
    /// ```
    pub fn new(long: impl Into<String>, short: impl Into<Option<char>>) -> Self {
        Self {
            long: long.into(),
            short: short.into(),
            help: String::default(),
            group: String::default(),
        }
    }

    /// Document the help message for this flag.
    /// If repeated, only the final help message will apply.
    ///
    /// An empty help message leaves the flag out of the usage text entirely (it still parses).
    /// We recommend allowing `optreg` to wrap this field (ex: it is not recommended to use line breaks `'\n'`).
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::Flag;
    ///
    /// Flag::new("count", 'c')
    ///     .help("--this will get discarded--")
    ///     .help("How many times to repeat the operation.");
    /// ```
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help = description.into();
        self
    }

    /// Place this flag under a labelled section of the usage text.
    /// If repeated, only the final group will apply.
    ///
    /// The empty group and `"_"` are both unlabelled.
    /// Groups have no effect on parsing.
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::Flag;
    ///
    /// Flag::new("threads", 't').group("Performance");
    /// ```
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    pub(super) fn into_spec(self, kind: OptionKind) -> OptionSpec {
        let Flag {
            long,
            short,
            help,
            group,
        } = self;

        OptionSpec {
            short,
            long: if long.is_empty() { None } else { Some(long) },
            kind,
            help,
            group,
        }
    }
}
