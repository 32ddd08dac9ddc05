use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and passed to the text renderer each frame so new glyphs can be rasterized
/// on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    /// Reads a font file from disk and loads it.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<FontId> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font {}", path.display()))?;
        let id = self
            .load_font(&bytes)
            .with_context(|| format!("failed to parse font {}", path.display()))?;
        Ok(id)
    }

    /// Returns the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let mut fs = FontSystem::new();
        let err = fs.load_font(b"not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(fs.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let mut fs = FontSystem::new();
        let err = fs.load_font_file("no/such/font.ttf").unwrap_err();
        assert!(format!("{err:#}").contains("font.ttf"));
        assert_eq!(fs.len(), 0);
    }

    #[test]
    fn unknown_id_resolves_to_none() {
        let fs = FontSystem::new();
        assert!(fs.get(FontId(3)).is_none());
    }
}
