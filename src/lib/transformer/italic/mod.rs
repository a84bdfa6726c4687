use std::sync::LazyLock;

use regex::Regex;

use crate::transformer::Pass;

/// Inline markup tags are opaque to this pass: asterisks inside `<…>` must
/// never be treated as delimiters, or attribute values would get rewritten.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Converts `*…*` delimiter pairs into `<i>…</i>`.
///
/// A pair converts only when the run between the delimiters is non-empty and
/// asterisk-free, the opening `*` is not immediately preceded by a word
/// character and is immediately followed by a non-space, and the closing `*`
/// is immediately preceded by a non-space and not immediately followed by a
/// digit. The boundary checks keep numeric multiplication (`1*1`, `3 * 3`)
/// out of the match, and make doubled runs like `**test**` convert only the
/// innermost pair, leaving the outer asterisks literal.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItalicPass;

impl Pass for ItalicPass {
    fn apply(&self, paragraph: &str) -> String {
        let mut out = String::with_capacity(paragraph.len());
        let mut last = 0;

        for tag in TAG_RE.find_iter(paragraph) {
            convert_spans(&paragraph[last..tag.start()], &mut out);
            out.push_str(tag.as_str());
            last = tag.end();
        }
        convert_spans(&paragraph[last..], &mut out);

        out
    }
}

/// Rewrite every convertible delimiter pair in one tag-free text segment,
/// left to right and non-overlapping.
fn convert_spans(text: &str, out: &mut String) {
    let mut rest = text;

    while let Some(open) = rest.find('*') {
        let before = &rest[..open];
        let after = &rest[open + 1..];

        if opens_span(before, after) {
            if let Some(close) = find_closer(after) {
                out.push_str(before);
                out.push_str("<i>");
                out.push_str(&after[..close]);
                out.push_str("</i>");
                rest = &after[close + 1..];
                continue;
            }
        }

        out.push_str(before);
        out.push('*');
        rest = after;
    }

    out.push_str(rest);
}

/// An asterisk opens a span when it is not glued to a preceding word
/// character and the span content starts immediately (no space, no empty or
/// doubled delimiter).
fn opens_span(before: &str, after: &str) -> bool {
    if before.chars().next_back().is_some_and(is_word_char) {
        return false;
    }
    match after.chars().next() {
        Some(first) => first != ' ' && first != '*',
        None => false,
    }
}

/// Find the closing asterisk for a span opened just before `after`.
///
/// The span content may not contain asterisks, so only the nearest `*` can
/// close it; if that one fails the boundary checks the whole span fails.
fn find_closer(after: &str) -> Option<usize> {
    let close = after.find('*')?;
    let content = &after[..close];
    if content.is_empty() || content.ends_with(' ') {
        return None;
    }
    let follows_digit = after[close + 1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());
    if follows_digit {
        return None;
    }
    Some(close)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests;
