use std::sync::LazyLock;

use regex::Regex;

use crate::transformer::Pass;

/// The autolinked anchor emitted upstream: `<a` plus at least one attribute.
static ANCHOR_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<a\s[^>]*>").unwrap());

/// Double-quoted href attribute inside the anchor's open tag.
static HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href\s*=\s*"([^"]*)""#).unwrap());

/// Rewrites `[label](<a …>…</a>)` constructs into normalized anchors.
///
/// The parenthesized part must hold an anchor produced by the site's own
/// autolinker. The rewritten anchor keeps only the source `href`; its visible
/// text becomes the bracketed label, `target` is forced to `_blank`, and
/// `rel` to `"noreferrer noopener"`, whatever the source anchor carried
/// (including malformed targets like `_?` or an empty value).
///
/// The label is everything between the opening `[` and the `]` immediately
/// preceding the first `](` whose payload validates as an anchor followed by
/// `)`. That lets labels carry brackets, braces, parentheses, entity
/// sequences, and non-ASCII text. Constructs that never validate, such as
/// stray `[brackets]` or parens without an anchor payload, are left
/// untouched with no partial rewrite.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinkPass;

impl Pass for LinkPass {
    fn apply(&self, paragraph: &str) -> String {
        let mut out = String::with_capacity(paragraph.len());
        let mut rest = paragraph;

        while let Some(open) = rest.find('[') {
            let (before, from_bracket) = rest.split_at(open);
            out.push_str(before);

            match rewrite_construct(from_bracket) {
                Some((anchor, consumed)) => {
                    out.push_str(&anchor);
                    rest = &from_bracket[consumed..];
                }
                None => {
                    out.push('[');
                    rest = &from_bracket[1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}

/// Try to parse a whole link construct at the start of `text`, which begins
/// with `[`. Returns the replacement anchor and the byte length consumed.
fn rewrite_construct(text: &str) -> Option<(String, usize)> {
    let mut search_from = 1;

    while let Some(pos) = text[search_from..].find("](") {
        let sep = search_from + pos;
        let payload = &text[sep + 2..];

        if let Some((href, payload_len)) = parse_anchor_payload(payload) {
            let label = &text[1..sep];
            let consumed = sep + 2 + payload_len;
            let anchor = format!(
                r#"<a href="{href}" target="_blank" rel="noreferrer noopener">{label}</a>"#
            );
            return Some((anchor, consumed));
        }

        search_from = sep + 1;
    }

    None
}

/// Parse `<a …>…</a>)` at the start of `payload`, returning the source href
/// and the byte length consumed, closing parenthesis included.
fn parse_anchor_payload(payload: &str) -> Option<(&str, usize)> {
    let open = ANCHOR_OPEN_RE.find(payload)?;
    let close = open.end() + payload[open.end()..].find("</a>")?;
    let after = close + "</a>".len();
    if !payload[after..].starts_with(')') {
        return None;
    }

    let href = HREF_RE.captures(open.as_str())?.get(1)?.as_str();
    Some((href, after + 1))
}
