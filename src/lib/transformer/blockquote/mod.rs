use tracing::trace;

use crate::transformer::Pass;

/// Wraps paragraphs that open with quote markers in `<blockquote>` containers.
///
/// A marker is either a literal `>` or its entity-escaped form `&gt;`,
/// followed by zero or more spaces. Each leading marker contributes one
/// nesting level and is stripped together with its trailing spaces; markers
/// anywhere else in the paragraph never match.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockquotePass;

impl Pass for BlockquotePass {
    fn apply(&self, paragraph: &str) -> String {
        let (depth, rest) = strip_markers(paragraph);
        if depth == 0 {
            return paragraph.to_string();
        }
        trace!(depth, "wrapping quoted paragraph");

        let mut out =
            String::with_capacity(rest.len() + depth * "<blockquote></blockquote>".len());
        for _ in 0..depth {
            out.push_str("<blockquote>");
        }
        out.push_str(rest);
        for _ in 0..depth {
            out.push_str("</blockquote>");
        }
        out
    }
}

/// Count leading quote markers, returning the nesting depth and the text
/// after the final marker and its trailing spaces.
fn strip_markers(text: &str) -> (usize, &str) {
    let mut rest = text;
    let mut depth = 0;

    loop {
        let after = if let Some(after) = rest.strip_prefix("&gt;") {
            after
        } else if let Some(after) = rest.strip_prefix('>') {
            after
        } else {
            break;
        };
        depth += 1;
        rest = after.trim_start_matches(' ');
    }

    (depth, rest)
}
