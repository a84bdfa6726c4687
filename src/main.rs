use std::{
    env,
    io::{self, Read, Write},
    path::PathBuf,
};

use libcommentfmt::{
    config::FormatOptions,
    pipeline::{format_comment, format_tree},
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match env::args().nth(1) {
        Some(root) => format_tree(&PathBuf::from(root), FormatOptions::default()),
        None => filter_stdin(),
    }
}

/// Filter mode: read one raw comment body from stdin, write the formatted
/// markup to stdout.
fn filter_stdin() -> color_eyre::Result<()> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    let formatted = format_comment(&raw, FormatOptions::default());

    io::stdout().write_all(formatted.as_bytes())?;
    Ok(())
}
