use crate::bitmap::Bitmap;
use crate::coords::Vec2;

/// A bitmap drawn at its native pixel size.
///
/// `bitmap = None` means the image failed to load; nothing is drawn.
#[derive(Debug, Clone, Default)]
pub struct Sprite {
    pub bitmap: Option<Bitmap>,
    /// Top-left corner in logical pixels.
    pub position: Vec2,
}

impl Sprite {
    pub fn new(bitmap: Option<Bitmap>) -> Self {
        Self {
            bitmap,
            position: Vec2::zero(),
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// On-screen size in logical pixels; zero without a bitmap.
    pub fn size(&self) -> Vec2 {
        self.bitmap.as_ref().map_or(Vec2::zero(), Bitmap::size)
    }
}
