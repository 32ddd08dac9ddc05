//! Font loading.
//!
//! Fonts are parsed once with `fontdue` and referenced by [`FontId`] from
//! `scene::Text`. Glyph rasterization happens in the text renderer.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
