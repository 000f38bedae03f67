//! Rendering options and configuration.

/// Output format for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled HTML markup
    #[default]
    Html,

    /// Plain text
    PlainText,
}

/// Options for rendering document content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Wrap HTML output in a full standalone page with an embedded
    /// stylesheet (fragment otherwise).
    pub standalone: bool,

    /// Emit a table of contents built from the document outline.
    pub include_toc: bool,

    /// Maximum HTML heading level (1-6). Deeper sections clamp to this.
    pub max_heading_level: u8,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable standalone page output.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_toc(mut self, include: bool) -> Self {
        self.include_toc = include;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            include_toc: false,
            max_heading_level: 6,
        }
    }
}
