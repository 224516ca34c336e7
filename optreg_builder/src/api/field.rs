use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::constant::SWITCH_ANNOTATION;
use crate::prelude::OptionValue;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub(crate) struct InvalidConversion {
    pub(crate) token: String,
    pub(crate) type_name: &'static str,
}

/// Behaviour to write a textual Cli argument into a destination, without exposing its type.
///
/// The registry keeps every option under one collection, so the type `T` of each destination is erased at this seam.
pub(crate) trait Converter {
    fn convert(&mut self, argument: &str) -> Result<(), InvalidConversion>;
}

/// Converts the argument via `FromStr` into a value destination.
pub(crate) struct Value<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Value<'a, T> {
    pub(crate) fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> Converter for Value<'a, T>
where
    T: OptionValue,
{
    fn convert(&mut self, argument: &str) -> Result<(), InvalidConversion> {
        let value = T::from_str(argument).map_err(|_| InvalidConversion {
            token: argument.to_string(),
            type_name: std::any::type_name::<T>(),
        })?;
        *self.variable = value;
        Ok(())
    }
}

/// Inverts a boolean destination, ignoring the argument entirely.
pub(crate) struct Toggle<'a> {
    variable: &'a mut bool,
}

impl<'a> Toggle<'a> {
    pub(crate) fn new(variable: &'a mut bool) -> Self {
        Self { variable }
    }
}

impl<'a> Converter for Toggle<'a> {
    fn convert(&mut self, _argument: &str) -> Result<(), InvalidConversion> {
        *self.variable = !*self.variable;
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Toggled switch to {}.", self.variable);
        }
        Ok(())
    }
}

/// The default-value suffix appended to an option's description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Annotation {
    Switch,
    Default(String),
    Blank,
}

impl Annotation {
    pub(crate) fn of<T: OptionValue>(default: &T) -> Self {
        if default.is_blank() {
            Annotation::Blank
        } else {
            Annotation::Default(default.to_string())
        }
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Annotation::Switch => write!(f, " <{SWITCH_ANNOTATION}>"),
            Annotation::Default(value) => write!(f, " <default: {value}>"),
            Annotation::Blank => Ok(()),
        }
    }
}

macro_rules! numeric_option_value {
    ($($t:ty),*) => {
        $(
            impl OptionValue for $t {
                fn is_blank(&self) -> bool {
                    *self == <$t>::default()
                }
            }
        )*
    };
}

numeric_option_value!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl OptionValue for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl OptionValue for bool {}
impl OptionValue for char {}
impl OptionValue for IpAddr {}
impl OptionValue for Ipv4Addr {}
impl OptionValue for Ipv6Addr {}
impl OptionValue for SocketAddr {}
