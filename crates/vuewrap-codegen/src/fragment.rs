//! Text fragment tree.
//!
//! Emitters build nested fragments instead of indenting strings themselves.
//! Indentation is applied once, when the tree is flattened into lines.

use crate::naming::indent;

/// A node of generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A single line at the current depth
    Line(String),

    /// Children rendered one indentation unit deeper
    Block(Vec<Fragment>),
}

impl Fragment {
    pub fn line(text: impl Into<String>) -> Self {
        Fragment::Line(text.into())
    }

    pub fn block(children: impl IntoIterator<Item = Fragment>) -> Self {
        Fragment::Block(children.into_iter().collect())
    }
}

/// Flatten a fragment list into lines, indenting nested blocks by `unit`.
pub fn flatten(fragments: &[Fragment], unit: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for fragment in fragments {
        match fragment {
            Fragment::Line(text) => lines.push(text.clone()),
            Fragment::Block(children) => lines.extend(indent(flatten(children, unit), unit)),
        }
    }
    lines
}

/// Lines of one generated wrapper module.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedLines(Vec<String>);

impl GeneratedLines {
    pub fn new(lines: Vec<String>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    /// Join lines with newlines. The trailing blank line yields a final `\n`.
    pub fn to_source(&self) -> String {
        self.0.join("\n")
    }

    /// Whether any line, trimmed, equals `text`.
    pub fn contains_line(&self, text: &str) -> bool {
        self.0.iter().any(|l| l.trim() == text)
    }
}
