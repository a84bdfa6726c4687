//! Shared data types for comment formatting.
//! Implemented as newtypes to enforce invariants.

use std::fmt;

/// One contiguous block of comment text, the unit of transformer input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Paragraph(String);

impl Paragraph {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A whole raw comment body as handed over by the caller.
///
/// The extension's DOM walker hands the transformer per-`<p>` text; for file
/// input, blank lines are the equivalent paragraph boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the body into paragraphs on blank lines. Consecutive blank lines
    /// collapse into a single boundary; a body with no blank lines is one
    /// paragraph.
    pub fn paragraphs(&self) -> Vec<Paragraph> {
        let mut out = Vec::new();
        let mut current = String::new();

        for line in self.0.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                if !current.is_empty() {
                    out.push(Paragraph(std::mem::take(&mut current)));
                }
            } else {
                if !current.is_empty() {
                    current.push('\n');
                }
                current.push_str(line);
            }
        }

        if !current.is_empty() {
            out.push(Paragraph(current));
        }

        out
    }
}

#[cfg(test)]
mod tests;
