//! CPU-side RGBA images.
//!
//! Decoding goes through the `image` crate; GPU upload happens lazily in the
//! sprite renderer, keyed by [`BitmapId`].

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Context, Result};

use crate::coords::Vec2;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a bitmap's pixel contents. Clones share an id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitmapId(u64);

/// Straight-alpha sRGB RGBA8 pixels, row-major, top row first.
#[derive(Debug, Clone)]
pub struct Bitmap {
    id: BitmapId,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Wraps raw RGBA8 pixels. `pixels.len()` must equal `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        anyhow::ensure!(
            pixels.len() == expected,
            "pixel buffer is {} bytes, expected {expected} for {width}x{height}",
            pixels.len()
        );

        Ok(Self {
            id: BitmapId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            width,
            height,
            pixels,
        })
    }

    /// Decodes an encoded image (PNG) from memory.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)
            .context("failed to decode image")?
            .to_rgba8();
        let (w, h) = img.dimensions();
        Self::from_rgba8(w, h, img.into_raw())
    }

    /// Reads and decodes an image file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("failed to load image {}", path.display()))?
            .to_rgba8();
        let (w, h) = img.dimensions();
        Self::from_rgba8(w, h, img.into_raw())
    }

    #[inline]
    pub fn id(&self) -> BitmapId {
        self.id
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size in pixels as a vector.
    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(w: u32, h: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(w, h, image::Rgba([10, 20, 30, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).expect("encode png");
        out.into_inner()
    }

    #[test]
    fn decode_png_reports_dimensions() {
        let bmp = Bitmap::decode(&png_bytes(3, 2)).expect("decode");
        assert_eq!((bmp.width(), bmp.height()), (3, 2));
        assert_eq!(bmp.pixels().len(), 3 * 2 * 4);
        assert_eq!(&bmp.pixels()[..4], &[10, 20, 30, 255]);
        assert_eq!(bmp.size(), Vec2::new(3.0, 2.0));
    }

    #[test]
    fn decode_garbage_fails() {
        assert!(Bitmap::decode(b"definitely not a png").is_err());
    }

    #[test]
    fn load_missing_file_fails_with_path_in_message() {
        let err = Bitmap::load("no/such/dir/logo.png").unwrap_err();
        assert!(format!("{err:#}").contains("logo.png"));
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 15]).is_err());
        assert!(Bitmap::from_rgba8(2, 2, vec![0; 16]).is_ok());
    }

    #[test]
    fn ids_are_unique_and_shared_by_clones() {
        let a = Bitmap::from_rgba8(1, 1, vec![0; 4]).expect("a");
        let b = Bitmap::from_rgba8(1, 1, vec![0; 4]).expect("b");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.clone().id(), a.id());
    }
}
