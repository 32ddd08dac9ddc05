/// Viewport size in logical pixels.
///
/// Renderers treat this as the basis for converting logical px positions to NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width/height clamped to at least one pixel, as uploaded to shaders.
    #[inline]
    pub fn uniform_size(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_has_no_valid_viewport() {
        assert!(Viewport::new(800.0, 600.0).is_valid());
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, 0.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 600.0).is_valid());
    }

    #[test]
    fn uniform_size_never_drops_below_one_pixel() {
        assert_eq!(Viewport::new(0.0, 0.5).uniform_size(), [1.0, 1.0]);
    }
}
