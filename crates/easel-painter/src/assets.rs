use easel_engine::bitmap::Bitmap;
use easel_engine::text::{FontId, FontSystem};

use crate::config::PainterConfig;

/// Startup assets. Either may be missing; the painter runs without them.
#[derive(Default)]
pub struct Assets {
    pub fonts: FontSystem,
    pub font: Option<FontId>,
    pub logo: Option<Bitmap>,
}

impl Assets {
    /// Loads the label font and the logo, logging and skipping any that fail.
    pub fn load(config: &PainterConfig) -> Self {
        let mut fonts = FontSystem::new();

        let font = match fonts.load_font_file(&config.font_path) {
            Ok(id) => Some(id),
            Err(err) => {
                log::warn!("problem loading arial black font: {err:#}");
                None
            }
        };

        let logo = match Bitmap::load(&config.logo_path) {
            Ok(bmp) => {
                log::debug!("logo loaded: {}x{}", bmp.width(), bmp.height());
                Some(bmp)
            }
            Err(err) => {
                log::warn!("problem loading logo: {err:#}");
                None
            }
        };

        Self { fonts, font, logo }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_leave_assets_empty() {
        let config = PainterConfig {
            font_path: "no/such/font.ttf".into(),
            logo_path: "no/such/logo.png".into(),
            ..PainterConfig::default()
        };
        let assets = Assets::load(&config);
        assert!(assets.font.is_none());
        assert!(assets.logo.is_none());
        assert!(assets.fonts.is_empty());
    }
}
