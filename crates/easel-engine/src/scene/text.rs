use crate::coords::Vec2;
use crate::paint::Rgba8;
use crate::text::FontId;

/// Style flags applied on top of the regular face.
///
/// Bold and italic are synthesized by the text renderer, so any single face works.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
}

impl TextStyle {
    pub const REGULAR: TextStyle = TextStyle {
        bold: false,
        italic: false,
        underlined: false,
    };
}

/// A single-line text label.
///
/// `font = None` means the font failed to load; such text is skipped at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub string: String,
    pub font: Option<FontId>,
    /// Character size in logical pixels.
    pub size: f32,
    /// Top-left of the text block in logical pixels.
    pub position: Vec2,
    pub fill: Rgba8,
    pub outline: Rgba8,
    /// Outline width in logical pixels. `0.0` disables the outline.
    pub outline_thickness: f32,
    pub style: TextStyle,
}

impl Text {
    pub fn new(string: impl Into<String>, font: Option<FontId>, size: f32) -> Self {
        Self {
            string: string.into(),
            font,
            size,
            position: Vec2::zero(),
            fill: Rgba8::WHITE,
            outline: Rgba8::BLACK,
            outline_thickness: 0.0,
            style: TextStyle::REGULAR,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_fill(mut self, fill: Rgba8) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_outline(mut self, outline: Rgba8, thickness: f32) -> Self {
        self.outline = outline;
        self.outline_thickness = thickness.max(0.0);
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Whether anything would be drawn for this text.
    pub fn is_visible(&self) -> bool {
        self.font.is_some() && self.size > 0.0 && !self.string.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_font_is_invisible() {
        let t = Text::new("hello", None, 24.0);
        assert!(!t.is_visible());
    }

    #[test]
    fn text_with_font_is_visible() {
        let t = Text::new("hello", Some(FontId(0)), 24.0);
        assert!(t.is_visible());
        assert!(!Text::new("  ", Some(FontId(0)), 24.0).is_visible());
    }

    #[test]
    fn negative_outline_is_clamped() {
        let t = Text::new("x", None, 10.0).with_outline(Rgba8::RED, -2.0);
        assert_eq!(t.outline_thickness, 0.0);
        assert_eq!(t.outline, Rgba8::RED);
    }
}
