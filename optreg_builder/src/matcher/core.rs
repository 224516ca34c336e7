use thiserror::Error;

use crate::matcher::model::*;
use crate::model::OptionCode;

/// The reason a Cli token could not be mapped onto a registered option.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// `--name` is not registered (nor a prefix of any registered long name).
    #[error("Option '--{0}' does not exist.")]
    InvalidOption(String),

    /// `-c` is not registered.
    #[error("Short option '-{0}' does not exist.")]
    InvalidShortOption(char),

    /// `--name` abbreviates more than one registered long name.
    #[error("Option '--{name}' is ambiguous; could be {}.", quote_all(.candidates))]
    AmbiguousOption {
        /// The abbreviation as given on the Cli.
        name: String,
        /// Every registered long name it abbreviates.
        candidates: Vec<String>,
    },

    /// A value option was the final token, with nothing attached.
    #[error("Option '{0}' requires a value.")]
    MissingValue(String),
}

/// Walks the Cli tokens, yielding each recognized flag in order.
///
/// The scan follows getopt_long conventions:
/// * `--name`, `--name=value`, `--name value` (long names may be abbreviated by any unique prefix).
/// * `-c`, `-cvalue`, `-c value`, and clusters such as `-vc5` (`-v -c 5`).
/// * `--` ends the scan; other tokens not starting with `-` (and `-` itself) are skipped.
///
/// Iteration stops after the first error.
pub(crate) struct Scanner<'t> {
    table: &'t ScanTable,
    tokens: &'t [&'t str],
    index: usize,
    // The unconsumed tail of a short option cluster.
    cluster: Option<String>,
    finished: bool,
}

impl<'t> Scanner<'t> {
    pub(crate) fn new(table: &'t ScanTable, tokens: &'t [&'t str]) -> Self {
        Self {
            table,
            tokens,
            index: 0,
            cluster: None,
            finished: false,
        }
    }

    fn next_token(&mut self) -> Option<&'t str> {
        let token = self.tokens.get(self.index).copied();

        if token.is_some() {
            self.index += 1;
        }

        token
    }

    fn match_option(&mut self, token: &str) -> Result<Scanned, MatchError> {
        let (option_name, single_argument) = split_equals_delimiter(token);
        let table = self.table;

        let long_option = match table.long(option_name) {
            LongLookup::Found(long_option) => long_option,
            LongLookup::Ambiguous(candidates) => {
                return Err(MatchError::AmbiguousOption {
                    name: option_name.to_string(),
                    candidates,
                });
            }
            LongLookup::Missing => {
                return Err(MatchError::InvalidOption(option_name.to_string()));
            }
        };

        let argument = match long_option.has_argument() {
            HasArgument::Required => match single_argument {
                Some(value) => Some(value.to_string()),
                // The next token is taken verbatim, even if it looks like a flag.
                None => match self.next_token() {
                    Some(value) => Some(value.to_string()),
                    None => {
                        return Err(MatchError::MissingValue(format!(
                            "--{}",
                            long_option.name()
                        )));
                    }
                },
            },
            HasArgument::Optional => single_argument.map(str::to_string),
            HasArgument::No => None,
        };

        Ok(Scanned {
            code: long_option.code(),
            argument,
        })
    }

    fn match_option_short(&mut self, cluster: &str) -> Result<Scanned, MatchError> {
        let mut characters = cluster.chars();
        let single = characters
            .next()
            .expect("internal error - a short option cluster must be non-empty");
        let rest = characters.as_str();

        match self.table.short(single) {
            Some(HasArgument::Required) => {
                // The remainder of the cluster is the value, if there is any.
                let argument = if rest.is_empty() {
                    match self.next_token() {
                        Some(value) => value.to_string(),
                        None => return Err(MatchError::MissingValue(format!("-{single}"))),
                    }
                } else {
                    rest.to_string()
                };

                Ok(Scanned {
                    code: single as OptionCode,
                    argument: Some(argument),
                })
            }
            Some(_) => {
                if !rest.is_empty() {
                    self.cluster.replace(rest.to_string());
                }

                Ok(Scanned {
                    code: single as OptionCode,
                    argument: None,
                })
            }
            None => Err(MatchError::InvalidShortOption(single)),
        }
    }
}

impl<'t> Iterator for Scanner<'t> {
    type Item = Result<Scanned, MatchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = if let Some(cluster) = self.cluster.take() {
            self.match_option_short(&cluster)
        } else {
            loop {
                let token = match self.next_token() {
                    Some(token) => token,
                    None => {
                        self.finished = true;
                        return None;
                    }
                };

                if token == "--" {
                    self.finished = true;
                    return None;
                } else if let Some(option) = token.strip_prefix("--") {
                    break self.match_option(option);
                } else if let Some(cluster) = token.strip_prefix('-').filter(|c| !c.is_empty()) {
                    break self.match_option_short(cluster);
                }
                // Otherwise an operand; skip it.
            }
        };

        if result.is_err() {
            self.finished = true;
        }

        Some(result)
    }
}

fn quote_all(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("'--{name}'"))
        .collect::<Vec<String>>()
        .join(", ")
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((n, v)) => (n, Some(v)),
        None => (token, None),
    }
}
