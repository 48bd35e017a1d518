//! Outline blocks as stored in Logseq journal files

use regex::Regex;
use std::sync::OnceLock;

/// Indentation unit for one nesting level
pub const INDENT_UNIT: &str = "  ";

fn outline_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^((?:  )*)- (.*)$").unwrap())
}

/// One line of outline content plus its nesting depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub indent: usize,
}

impl Block {
    pub fn new(text: impl Into<String>, indent: usize) -> Self {
        Block {
            text: text.into(),
            indent,
        }
    }

    /// Render as a bulleted line, without the line terminator
    pub fn render(&self) -> String {
        format!("{}- {}", INDENT_UNIT.repeat(self.indent), self.text)
    }

    /// Parse a bulleted outline line back into a block.
    /// Returns None for lines that are not blocks (blank lines, prose, odd indentation).
    pub fn parse_line(line: &str) -> Option<Block> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let captures = outline_regex().captures(line)?;
        let indent = captures[1].len() / INDENT_UNIT.len();
        Some(Block::new(&captures[2], indent))
    }
}

/// Render a sequence of blocks as one journal entry: a leading blank line,
/// one line per block, and a trailing blank line.
pub fn render_entry(blocks: &[Block]) -> String {
    let mut output = String::from("\n");
    for block in blocks {
        output.push_str(&block.render());
        output.push('\n');
    }
    output.push('\n');
    output
}
