//! UI configuration options derived from config/environment.

/// Appearance and motion options resolved at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and spinners.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Disable animations and motion effects.
    pub reduced_motion: bool,
}
