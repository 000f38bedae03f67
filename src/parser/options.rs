//! Parsing options and configuration.

/// Options for parsing report source text.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Maximum accepted input size in bytes (0 = unlimited).
    pub max_input_bytes: usize,

    /// Document title. The authored format has no title syntax, so the
    /// title is supplied here when known (e.g. from the input file name).
    pub title: Option<String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input size ceiling in bytes (0 = unlimited).
    pub fn with_max_input_bytes(mut self, bytes: usize) -> Self {
        self.max_input_bytes = bytes;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
