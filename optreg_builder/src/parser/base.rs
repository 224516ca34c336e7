use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::api::Converter;
use crate::constant::FIRST_LONG_CODE;
use crate::matcher::*;
use crate::model::{OptionCode, OptionSpec};

/// A mis-configured registration.
///
/// This is a programming error; it is raised while options are being registered, never while parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The short option is already registered.
    #[error("Config error: cannot duplicate the short option '-{0}'.")]
    DuplicateShortOption(char),

    /// The long option is already registered.
    #[error("Config error: cannot duplicate the option '--{0}'.")]
    DuplicateOption(String),

    /// The short option must be a printable ASCII character other than `-` or `:`.
    #[error("Config error: invalid short option '{0}'.")]
    InvalidShortOption(char),

    /// The long option must not start with `-`, nor contain `=` or whitespace.
    #[error("Config error: invalid option '{0}'.")]
    InvalidOption(String),
}

/// A Cli token which could not be mapped onto the registered options.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Parse error: {0}")]
pub struct ParseError(pub(crate) MatchError);

impl ParseError {
    /// The specific reason parsing failed.
    pub fn cause(&self) -> &MatchError {
        &self.0
    }
}

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        ParseError(error)
    }
}

pub(crate) struct Parser<'a> {
    table: ScanTable,
    long_names: HashSet<String>,
    // We need a (dyn .. [ignoring T] ..) here in order to put all the converters of varying types T under one collection.
    converters: HashMap<OptionCode, Box<dyn Converter + 'a>>,
    next_code: OptionCode,
}

impl<'a> std::fmt::Debug for Parser<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser")
            .field("table", &self.table)
            .field("next_code", &self.next_code)
            .finish_non_exhaustive()
    }
}

impl<'a> Default for Parser<'a> {
    fn default() -> Self {
        Self {
            table: ScanTable::default(),
            long_names: HashSet::default(),
            converters: HashMap::default(),
            next_code: FIRST_LONG_CODE,
        }
    }
}

impl<'a> Parser<'a> {
    /// Check the option may be registered, without changing any state.
    pub(crate) fn validate(&self, spec: &OptionSpec) -> Result<(), ConfigError> {
        if let Some(short) = spec.short {
            if !short.is_ascii_graphic() || short == '-' || short == ':' {
                return Err(ConfigError::InvalidShortOption(short));
            }

            if self.converters.contains_key(&(short as OptionCode)) {
                return Err(ConfigError::DuplicateShortOption(short));
            }
        }

        if let Some(long) = &spec.long {
            if long.starts_with('-') || long.contains('=') || long.contains(char::is_whitespace) {
                return Err(ConfigError::InvalidOption(long.clone()));
            }

            if self.long_names.contains(long) {
                return Err(ConfigError::DuplicateOption(long.clone()));
            }
        }

        Ok(())
    }

    /// Register a validated option, returning the code its converter is routed by.
    /// A nameless option is dropped (`None`).
    pub(crate) fn register(
        &mut self,
        spec: &OptionSpec,
        converter: Box<dyn Converter + 'a>,
    ) -> Option<OptionCode> {
        if spec.is_nameless() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Ignoring {kind} option without a name.", kind = spec.kind);
            }

            return None;
        }

        let code = match spec.short {
            Some(short) => {
                self.table.push_short(short, spec.kind);
                short as OptionCode
            }
            None => {
                let code = self.next_code;
                self.next_code += 1;
                code
            }
        };

        if let Some(long) = &spec.long {
            self.long_names.insert(long.clone());
            self.table
                .push_long(LongOption::new(long, HasArgument::long(spec.kind), code));
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Registered {kind} option {name} as code {code}.",
                kind = spec.kind,
                name = spec.describe()
            );
        }

        if self.converters.insert(code, converter).is_some() {
            unreachable!("internal error - option codes must be unique");
        }

        Some(code)
    }

    pub(crate) fn option_string(&self) -> &str {
        self.table.option_string()
    }

    pub(crate) fn consume(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        let Parser {
            table, converters, ..
        } = self;

        for scanned in Scanner::new(table, tokens) {
            let Scanned { code, argument } = scanned.map_err(|error| {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Scan failed: {error}");
                }
                ParseError::from(error)
            })?;
            let converter = converters
                .get_mut(&code)
                .expect("internal error - mismatch between scan table and converters");

            match converter.convert(argument.as_deref().unwrap_or_default()) {
                Ok(()) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Dispatched option code {code}.");
                    }
                }
                // A value which does not convert is ignored; the destination keeps its previous value.
                Err(_error) => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Ignoring option code {code}: {_error}");
                    }
                }
            }
        }

        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test::*;
    use super::*;
    use crate::api::Value;
    use crate::model::OptionKind;
    use rstest::rstest;

    fn spec(short: Option<char>, long: &str, kind: OptionKind) -> OptionSpec {
        OptionSpec {
            short,
            long: if long.is_empty() {
                None
            } else {
                Some(long.to_string())
            },
            kind,
            help: String::default(),
            group: String::default(),
        }
    }

    fn register(parser: &mut Parser, spec: OptionSpec) -> Option<OptionCode> {
        parser.validate(&spec).unwrap();
        parser.register(&spec, Box::new(BlackHole::default()))
    }

    #[test]
    fn empty() {
        let mut parser = Parser::default();
        assert_eq!(parser.option_string(), "");
        parser.consume(&[]).unwrap();
        parser.consume(&["operand", "--"]).unwrap();
    }

    #[test]
    fn codes() {
        // Setup
        let mut parser = Parser::default();

        // Execute & verify
        assert_eq!(
            register(&mut parser, spec(Some('c'), "count", OptionKind::Value)),
            Some('c' as OptionCode)
        );
        assert_eq!(
            register(&mut parser, spec(None, "name", OptionKind::Value)),
            Some(256)
        );
        assert_eq!(
            register(&mut parser, spec(Some('v'), "", OptionKind::Switch)),
            Some('v' as OptionCode)
        );
        assert_eq!(
            register(&mut parser, spec(None, "dry-run", OptionKind::Switch)),
            Some(257)
        );
        assert_eq!(parser.option_string(), "c:v");
    }

    #[test]
    fn nameless_ignored() {
        // Setup
        let mut parser = Parser::default();

        // Execute
        let code = register(&mut parser, spec(None, "", OptionKind::Value));

        // Verify
        assert_eq!(code, None);
        assert_eq!(parser.option_string(), "");
        // No code was consumed.
        assert_eq!(
            register(&mut parser, spec(None, "name", OptionKind::Value)),
            Some(256)
        );
    }

    #[rstest]
    #[case(spec(Some('c'), "", OptionKind::Value), spec(Some('c'), "other", OptionKind::Switch))]
    #[case(spec(Some('c'), "count", OptionKind::Value), spec(Some('c'), "", OptionKind::Value))]
    #[case(spec(Some('c'), "", OptionKind::Switch), spec(Some('c'), "count", OptionKind::Switch))]
    fn duplicate_short(#[case] first: OptionSpec, #[case] second: OptionSpec) {
        // Setup
        let mut parser = Parser::default();
        register(&mut parser, first);
        let option_string = parser.option_string().to_string();

        // Execute
        let error = parser.validate(&second).unwrap_err();

        // Verify
        assert_eq!(error, ConfigError::DuplicateShortOption('c'));
        assert_eq!(parser.option_string(), option_string);
    }

    #[rstest]
    #[case(spec(None, "count", OptionKind::Value), spec(Some('c'), "count", OptionKind::Value))]
    #[case(spec(Some('c'), "count", OptionKind::Value), spec(None, "count", OptionKind::Switch))]
    fn duplicate_long(#[case] first: OptionSpec, #[case] second: OptionSpec) {
        // Setup
        let mut parser = Parser::default();
        register(&mut parser, first);

        // Execute
        let error = parser.validate(&second).unwrap_err();

        // Verify
        assert_eq!(error, ConfigError::DuplicateOption("count".to_string()));
    }

    #[test]
    fn duplicate_leaves_codes() {
        // Setup
        let mut parser = Parser::default();
        register(&mut parser, spec(None, "first", OptionKind::Value));
        let duplicate = spec(None, "first", OptionKind::Value);

        // Execute
        parser.validate(&duplicate).unwrap_err();

        // Verify
        assert_eq!(
            register(&mut parser, spec(None, "second", OptionKind::Value)),
            Some(257)
        );
    }

    #[rstest]
    #[case('-')]
    #[case(':')]
    #[case(' ')]
    #[case('\n')]
    #[case('é')]
    fn invalid_short(#[case] short: char) {
        let parser = Parser::default();
        assert_eq!(
            parser
                .validate(&spec(Some(short), "", OptionKind::Value))
                .unwrap_err(),
            ConfigError::InvalidShortOption(short)
        );
    }

    #[rstest]
    #[case("-count")]
    #[case("count=1")]
    #[case("dry run")]
    fn invalid_long(#[case] long: &str) {
        let parser = Parser::default();
        assert_eq!(
            parser
                .validate(&spec(None, long, OptionKind::Value))
                .unwrap_err(),
            ConfigError::InvalidOption(long.to_string())
        );
    }

    #[rstest]
    #[case(vec!["--count", "5"], vec!["5"])]
    #[case(vec!["-c5", "-c", "6"], vec!["5", "6"])]
    #[case(vec!["--co=7"], vec!["7"])]
    fn consume_dispatch(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
        // Setup
        let recorder = Recorder::default();
        let mut parser = Parser::default();
        let spec = spec(Some('c'), "count", OptionKind::Value);
        parser.validate(&spec).unwrap();
        parser.register(&spec, Box::new(recorder.clone()));

        // Execute
        parser.consume(&tokens).unwrap();

        // Verify
        assert_eq!(*recorder.arguments.borrow(), expected);
    }

    #[test]
    fn consume_switch_argument_empty() {
        // Setup
        let recorder = Recorder::default();
        let mut parser = Parser::default();
        let spec = spec(Some('v'), "verbose", OptionKind::Switch);
        parser.register(&spec, Box::new(recorder.clone()));

        // Execute
        parser.consume(&["-v", "--verbose", "--verbose=abc"]).unwrap();

        // Verify
        assert_eq!(*recorder.arguments.borrow(), vec!["", "", "abc"]);
    }

    #[test]
    fn consume_conversion_ignored() {
        // Setup
        let mut parser = Parser::default();
        register(&mut parser, spec(Some('c'), "count", OptionKind::Value));

        // Execute & verify
        parser.consume(&["--count", "abc", "-c", "def"]).unwrap();
    }

    #[test]
    fn consume_partial() {
        // Setup
        let mut first: u32 = 0;
        let mut second: u32 = 0;
        {
            let mut parser = Parser::default();
            let first_spec = spec(None, "first", OptionKind::Value);
            let second_spec = spec(None, "second", OptionKind::Value);
            parser.register(&first_spec, Box::new(Value::new(&mut first)));
            parser.register(&second_spec, Box::new(Value::new(&mut second)));

            // Execute
            let error = parser
                .consume(&["--first", "1", "--unknown", "--second", "2"])
                .unwrap_err();

            // Verify
            assert_matches!(error.cause(), MatchError::InvalidOption(name) => {
                assert_eq!(name, "unknown");
            });
        }

        // Conversions before the failure are kept.
        assert_eq!(first, 1);
        assert_eq!(second, 0);
    }

    #[test]
    fn parse_error_display() {
        let error = ParseError::from(MatchError::InvalidShortOption('x'));
        assert_eq!(
            error.to_string(),
            "Parse error: Short option '-x' does not exist."
        );
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            ConfigError::DuplicateShortOption('c').to_string(),
            "Config error: cannot duplicate the short option '-c'."
        );
        assert_eq!(
            ConfigError::DuplicateOption("count".to_string()).to_string(),
            "Config error: cannot duplicate the option '--count'."
        );
    }
}
