use std::collections::BTreeMap;
use terminal_size::{terminal_size, Width};

use crate::constant::*;

/// The column geometry of the usage lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UsageLayout {
    pub(crate) indent_flag: usize,
    pub(crate) indent_description: usize,
    // Fixed width, instead of querying the terminal.
    pub(crate) terminal_width: Option<usize>,
}

impl Default for UsageLayout {
    fn default() -> Self {
        Self {
            indent_flag: DEFAULT_INDENT_FLAG,
            indent_description: DEFAULT_INDENT_DESCRIPTION,
            terminal_width: None,
        }
    }
}

impl UsageLayout {
    /// The width lines are wrapped against.
    pub(crate) fn width(&self) -> usize {
        effective_width(self.terminal_width.or_else(detect_terminal_width))
    }

    /// Render the usage line for one option.
    ///
    /// The line is made up of the flag tokens, padded out to the description column, followed by the description.
    /// When the description column leaves too little room, the description instead starts on the next line.
    /// Too little room means no more than 30% of the width remains; the boundary itself counts as narrow.
    /// Continuation lines are re-indented to wherever the description starts.
    pub(crate) fn render(&self, short: Option<char>, long: Option<&str>, description: &str) -> String {
        let mut line = format!("{:indent$}", "", indent = self.indent_flag);

        if let Some(short) = short {
            line.push_str(format!("-{short} ").as_str());
        }

        if let Some(long) = long {
            line.push_str(format!("--{long} ").as_str());
        }

        let length = line.chars().count();
        let padding = if length > self.indent_description {
            1
        } else {
            self.indent_description - length
        };
        line.push_str(format!("{:padding$}", "").as_str());

        let width = self.width();
        let length = line.chars().count();
        let narrow = (width.saturating_sub(length) as f64) <= (width as f64) * NARROW_FACTOR;
        let description_position = if narrow {
            // The flag tokens stand alone on the first line.
            line.truncate(line.trim_end().len());
            let position = self.indent_flag + NARROW_DESCRIPTION_INDENT;
            line.push('\n');
            line.push_str(format!("{:position$}", "").as_str());
            position
        } else {
            length
        };

        let column_width = std::cmp::max(1, width.saturating_sub(description_position));
        let continuation = format!("\n{:description_position$}", "");
        line.push_str(chunk(description, column_width).join(continuation.as_str()).as_str());
        line
    }
}

/// Split into pieces of (at most) `width` characters, skipping any spaces which would lead a piece.
fn chunk(text: &str, width: usize) -> Vec<String> {
    let characters: Vec<char> = text.chars().collect();
    let mut pieces = Vec::default();
    let mut index = 0;

    while index < characters.len() {
        while characters.get(index) == Some(&' ') {
            index += 1;
        }

        if index == characters.len() {
            break;
        }

        let end = std::cmp::min(index + width, characters.len());
        pieces.push(characters[index..end].iter().collect());
        index = end;
    }

    pieces
}

pub(crate) fn detect_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(width), _)| width as usize)
}

pub(crate) fn effective_width(terminal_width: Option<usize>) -> usize {
    match terminal_width {
        Some(width) if width >= MINIMUM_TERMINAL_WIDTH => width,
        _ => DEFAULT_TERMINAL_WIDTH,
    }
}

/// The rendered usage lines, organized by group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UsageDocument {
    pub(crate) header: String,
    groups: BTreeMap<String, Vec<String>>,
}

impl UsageDocument {
    pub(crate) fn push(&mut self, group: &str, line: String) {
        self.groups.entry(group.to_string()).or_default().push(line);
    }

    pub(crate) fn render(&self) -> String {
        let mut out = self.header.clone();

        for (group, lines) in &self.groups {
            if !(group.is_empty() || group == UNGROUPED) {
                out.push_str(format!("{group}:\n").as_str());
            }

            for line in lines {
                out.push_str(line);
                out.push('\n');
            }

            out.push('\n');
        }

        out
    }
}
