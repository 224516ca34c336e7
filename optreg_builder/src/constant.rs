use crate::model::OptionCode;

pub(crate) const DEFAULT_INDENT_FLAG: usize = 2;
pub(crate) const DEFAULT_INDENT_DESCRIPTION: usize = 18;

// Long-only options are routed by codes above the full 8-bit range, so they never collide with a short option.
pub(crate) const FIRST_LONG_CODE: OptionCode = 256;

pub(crate) const MINIMUM_TERMINAL_WIDTH: usize = 40;
pub(crate) const DEFAULT_TERMINAL_WIDTH: usize = 80;

// Below this share of the terminal, the description column is abandoned.
pub(crate) const NARROW_FACTOR: f64 = 0.3;
// Relative to the flag indent.
pub(crate) const NARROW_DESCRIPTION_INDENT: usize = 2;

pub(crate) const UNGROUPED: &str = "_";
pub(crate) const SWITCH_ANNOTATION: &str = "switch";
