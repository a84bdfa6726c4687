pub const INPUT_EXT: &str = "txt";
pub const OUTPUT_EXT: &str = "html";
pub const OUTPUT_DIR: &str = "formatted";

/// Immutable snapshot of the formatting options.
///
/// Callers take a copy by value; option changes are modeled as new snapshots
/// rather than in-place mutation of shared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Master switch. When off, comment text passes through untouched.
    pub enabled: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}
