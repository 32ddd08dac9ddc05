use std::path::PathBuf;

use easel_engine::coords::Vec2;
use easel_engine::paint::Rgba8;
use easel_engine::scene::{Text, TextStyle};
use easel_engine::text::FontId;
use easel_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

/// Placement and styling of the title label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub string: String,
    pub size: f32,
    pub position: Vec2,
    pub fill: Rgba8,
    pub outline: Rgba8,
    pub outline_thickness: f32,
    pub style: TextStyle,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            string: "SFML Game".to_string(),
            size: 80.0,
            position: Vec2::new(40.0, 40.0),
            fill: Rgba8::BLACK,
            outline: Rgba8::RED,
            outline_thickness: 3.0,
            style: TextStyle {
                bold: true,
                italic: true,
                underlined: true,
            },
        }
    }
}

impl LabelConfig {
    /// Builds the label drawable for `font`.
    pub fn text(&self, font: Option<FontId>) -> Text {
        Text::new(self.string.clone(), font, self.size)
            .with_position(self.position)
            .with_fill(self.fill)
            .with_outline(self.outline, self.outline_thickness)
            .with_style(self.style)
    }
}

/// Painter settings. Asset paths are relative to the working directory.
#[derive(Debug, Clone)]
pub struct PainterConfig {
    pub title: String,
    pub window_size: LogicalSize<f64>,
    /// Fixed updates per second.
    pub update_rate: f64,

    pub font_path: PathBuf,
    pub logo_path: PathBuf,

    pub label: LabelConfig,
    pub logo_position: Vec2,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            title: "SFML Game".to_string(),
            window_size: LogicalSize::new(800.0, 600.0),
            update_rate: 60.0,
            font_path: PathBuf::from("ASSETS/FONTS/ariblk.ttf"),
            logo_path: PathBuf::from("ASSETS/IMAGES/SFML-LOGO.png"),
            label: LabelConfig::default(),
            logo_position: Vec2::new(300.0, 180.0),
        }
    }
}

impl PainterConfig {
    /// Window settings: fixed size, updates at `update_rate`, unclamped frame time.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.window_size,
            resizable: false,
            update_rate: self.update_rate,
            max_frame_delta: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_is_a_fixed_800_by_600_window() {
        let rc = PainterConfig::default().runtime_config();
        assert_eq!(rc.title, "SFML Game");
        assert_eq!(rc.initial_size, LogicalSize::new(800.0, 600.0));
        assert!(!rc.resizable);
        assert_eq!(rc.update_rate, 60.0);
        assert!(rc.validate().is_ok());
    }

    #[test]
    fn label_carries_configured_style() {
        let text = LabelConfig::default().text(None);
        assert_eq!(text.string, "SFML Game");
        assert_eq!(text.size, 80.0);
        assert_eq!(text.position, Vec2::new(40.0, 40.0));
        assert_eq!(text.fill, Rgba8::BLACK);
        assert_eq!(text.outline, Rgba8::RED);
        assert_eq!(text.outline_thickness, 3.0);
        assert!(text.style.bold && text.style.italic && text.style.underlined);
        assert!(text.font.is_none());
    }
}
