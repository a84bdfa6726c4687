use std::time::Duration;

pub fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

pub fn italic_paragraph(spans: usize) -> String {
    (0..spans)
        .map(|i| format!("*word{i}* filler text "))
        .collect()
}

pub fn quoted_paragraph(depth: usize) -> String {
    format!("{}quoted body text", "&gt; ".repeat(depth))
}

pub fn linked_paragraph(links: usize) -> String {
    (0..links)
        .map(|i| {
            format!(
                r#"see [link {i}](<a href="host{i}.example" class="linkified" rel="ugc">host{i}.example</a>) and "#
            )
        })
        .collect()
}
