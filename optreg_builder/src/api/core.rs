use crate::api::{Annotation, Converter, Flag, Toggle, Value};
use crate::model::{OptionKind, OptionSpec};
use crate::parser::{ConfigError, ParseError, Parser, UsageDocument, UsageLayout};
use crate::prelude::OptionValue;

/// The option registry.
///
/// Options are registered against caller owned destinations, which are then filled in by parsing the Cli.
/// The registry holds these destinations mutably borrowed, so it must be dropped before they may be read.
///
/// ### Example
/// ```
/// # use optreg_builder as optreg;
/// use optreg::{Flag, Options};
///
/// let mut count: u32 = 0;
/// let mut verbose: bool = false;
/// let mut options = Options::new();
/// options
///     .add_value(&mut count, 1, Flag::new("count", 'c').help("How many times."))
///     .unwrap();
/// options
///     .add_switch(&mut verbose, false, Flag::new("verbose", 'v').help("Say more."))
///     .unwrap();
///
/// options.parse_tokens(&["-v", "--count", "5"]).unwrap();
/// drop(options);
///
/// assert_eq!(count, 5);
/// assert!(verbose);
/// ```
pub struct Options<'a> {
    layout: UsageLayout,
    document: UsageDocument,
    parser: Parser<'a>,
}

impl<'a> Default for Options<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> std::fmt::Debug for Options<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Options")
            .field("layout", &self.layout)
            .field("document", &self.document)
            .field("parser", &self.parser)
            .finish()
    }
}

impl<'a> Options<'a> {
    /// Create an empty option registry.
    pub fn new() -> Self {
        Self {
            layout: UsageLayout::default(),
            document: UsageDocument::default(),
            parser: Parser::default(),
        }
    }

    /// Document the header of the usage text.
    /// If repeated, only the final header will apply.
    ///
    /// The header is written verbatim ahead of the option lines, so typically it should end with a line break.
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::Options;
    ///
    /// let options = Options::new()
    ///     .header("--this will get discarded--")
    ///     .header("Usage: program [OPTIONS]\n");
    ///
    /// assert_eq!(options.usage(), "Usage: program [OPTIONS]\n");
    /// ```
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.document.header = header.into();
        self
    }

    /// Set the number of spaces ahead of the flag tokens of each usage line (default `2`).
    ///
    /// Usage lines are laid out when each option is registered, so this must be configured beforehand.
    pub fn indent_flag(mut self, indent: usize) -> Self {
        self.layout.indent_flag = indent;
        self
    }

    /// Set the column at which descriptions start (default `18`).
    /// Flag tokens extending beyond this column are followed by a single space instead.
    ///
    /// Usage lines are laid out when each option is registered, so this must be configured beforehand.
    pub fn indent_description(mut self, indent: usize) -> Self {
        self.layout.indent_description = indent;
        self
    }

    /// Wrap the usage text against a fixed width, instead of the width of the terminal.
    /// Widths below `40` are replaced by `80`, the same as an undetectable terminal.
    ///
    /// Usage lines are laid out when each option is registered, so this must be configured beforehand.
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::{Flag, Options};
    ///
    /// let mut count: u32 = 0;
    /// let mut options = Options::new().terminal_width(40);
    /// options
    ///     .add_value(&mut count, 0, Flag::new("count", 'c').help("The number of times to repeat it."))
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     options.usage(),
    ///     "  -c --count      The number of times to\n                  repeat it.\n\n"
    /// );
    /// ```
    pub fn terminal_width(mut self, width: usize) -> Self {
        self.layout.terminal_width.replace(width);
        self
    }

    /// Register a value option.
    ///
    /// The destination is assigned `default` immediately.
    /// During parsing, each occurrence of the flag converts its value into the destination (via `FromStr`).
    /// A value which does not convert is ignored, leaving the destination as it was.
    ///
    /// The default is documented in the usage text, unless it is blank (ex: `0` or the empty string).
    ///
    /// A flag without either a long or short name is ignored (other than assigning the default).
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::{ConfigError, Flag, Options};
    ///
    /// let mut name: String = String::default();
    /// let mut other: String = String::default();
    /// let mut options = Options::new();
    /// options
    ///     .add_value(&mut name, "abc".to_string(), Flag::new("name", 'n'))
    ///     .unwrap();
    ///
    /// let error = options
    ///     .add_value(&mut other, String::default(), Flag::new("other", 'n'))
    ///     .unwrap_err();
    /// assert_eq!(error, ConfigError::DuplicateShortOption('n'));
    /// ```
    pub fn add_value<T>(
        &mut self,
        destination: &'a mut T,
        default: T,
        flag: Flag,
    ) -> Result<(), ConfigError>
    where
        T: OptionValue + 'a,
    {
        let spec = flag.into_spec(OptionKind::Value);
        self.parser.validate(&spec)?;
        let annotation = Annotation::of(&default);
        *destination = default;
        self.register(spec, annotation, Box::new(Value::new(destination)));
        Ok(())
    }

    /// Register a switch option.
    ///
    /// The destination is assigned `default` immediately.
    /// During parsing, each occurrence of the flag inverts the destination.
    /// The long form accepts (and ignores) an attached value: `--name=anything`.
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::{Flag, Options};
    ///
    /// let mut verbose: bool = false;
    /// let mut options = Options::new();
    /// options
    ///     .add_switch(&mut verbose, true, Flag::new("verbose", 'v'))
    ///     .unwrap();
    ///
    /// options.parse_tokens(&["-v", "--verbose", "-v"]).unwrap();
    /// drop(options);
    ///
    /// assert!(!verbose);
    /// ```
    pub fn add_switch(
        &mut self,
        destination: &'a mut bool,
        default: bool,
        flag: Flag,
    ) -> Result<(), ConfigError> {
        let spec = flag.into_spec(OptionKind::Switch);
        self.parser.validate(&spec)?;
        *destination = default;
        self.register(spec, Annotation::Switch, Box::new(Toggle::new(destination)));
        Ok(())
    }

    fn register(
        &mut self,
        spec: OptionSpec,
        annotation: Annotation,
        converter: Box<dyn Converter + 'a>,
    ) {
        if self.parser.register(&spec, converter).is_some() && !spec.help.is_empty() {
            let description = format!("{help}{annotation}", help = spec.help);
            let line = self
                .layout
                .render(spec.short, spec.long.as_deref(), description.as_str());
            self.document.push(&spec.group, line);
        }
    }

    /// Parse the tokens into the registered destinations.
    ///
    /// Scanning stops at `--`, and tokens which aren't flags (nor a flag's value) are skipped.
    /// On error, any destinations filled in before the failing token keep their parsed values.
    ///
    /// ### Example
    /// ```
    /// # use optreg_builder as optreg;
    /// use optreg::{Flag, MatchError, Options};
    ///
    /// let mut count: u32 = 0;
    /// let mut options = Options::new();
    /// options
    ///     .add_value(&mut count, 1, Flag::new("count", 'c'))
    ///     .unwrap();
    ///
    /// let error = options.parse_tokens(&["--unknown"]).unwrap_err();
    /// assert_eq!(error.cause(), &MatchError::InvalidOption("unknown".to_string()));
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        self.parser.consume(tokens)
    }

    /// Parse the Cli of this process into the registered destinations.
    /// The program name (first argument) is skipped.
    ///
    /// Never prints or exits; the caller decides how to report the error (typically alongside [`Options::usage`]).
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let command_input: Vec<String> = std::env::args().skip(1).collect();
        let tokens: Vec<&str> = command_input.iter().map(String::as_str).collect();
        self.parse_tokens(tokens.as_slice())
    }

    /// Render the usage text.
    ///
    /// The header comes first, followed by each group in sorted order.
    /// A labelled group starts with its name; the empty group and `"_"` are unlabelled.
    /// Each group ends with a blank line.
    pub fn usage(&self) -> String {
        self.document.render()
    }

    /// The getopt style short option string of the registered options (ex: `"c:v"`).
    pub fn option_string(&self) -> &str {
        self.parser.option_string()
    }
}
