//! Comment markup formatting core.
//!
//! Rewrites the constrained rich-text dialect used in blog comments into
//! display markup: `*asterisk*` italics, `>`/`&gt;` quote markers, and
//! `[label](<a …>…</a>)` link constructs over pre-autolinked anchors. The
//! transformer itself is pure and infallible; the [`pipeline`] module drives
//! it over directories of comment dumps.

pub mod config;
pub mod pipeline;
pub mod transformer;
pub mod types;
