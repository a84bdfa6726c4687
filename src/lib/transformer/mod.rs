//! A pass is a rewrite over one paragraph of comment text. It recognises one
//! markup construct in the source dialect and replaces every occurrence with
//! display markup, leaving everything else (malformed or ambiguous candidates
//! included) byte-for-byte untouched. For example, the italic pass turns
//! `*word*` into `<i>word</i>` while letting `1*1` through unchanged.
//!
//! Passes are pure and total: they never fail, never panic, and run in time
//! proportional to the paragraph length.

pub mod blockquote;
pub mod italic;
pub mod link;

use crate::transformer::{blockquote::BlockquotePass, italic::ItalicPass, link::LinkPass};

/// A single rewrite pass over one paragraph.
pub trait Pass {
    /// Apply this rewrite, returning the rewritten paragraph.
    fn apply(&self, paragraph: &str) -> String;
}

/// Chain passes over an owned paragraph string, allowing
/// `text.with_pass::<BlockquotePass>().with_pass::<ItalicPass>()`.
pub trait WithPass: Into<String> + Sized {
    fn with_pass<P: Pass + Default>(self) -> String {
        let paragraph: String = self.into();
        P::default().apply(&paragraph)
    }
}

/// Blanket implementation over anything convertible to a paragraph string.
impl<S: Into<String>> WithPass for S {}

/// Apply the full comment rewrite to one paragraph.
///
/// Quote markers are anchored to the paragraph prefix, so the blockquote pass
/// must run before the inline passes. The italic pass runs last and never
/// rewrites inside `<…>` tags, so it cannot disturb anchors produced by the
/// link pass or the blockquote wrappers.
pub fn transform(paragraph: &str) -> String {
    paragraph
        .with_pass::<BlockquotePass>()
        .with_pass::<LinkPass>()
        .with_pass::<ItalicPass>()
}
