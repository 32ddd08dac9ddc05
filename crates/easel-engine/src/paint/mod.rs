//! Color model shared between applications and renderers.
//!
//! Applications describe colors as straight-alpha sRGB bytes ([`Rgba8`]).
//! Renderers consume linear premultiplied floats ([`Color`]).

pub mod color;
pub mod rgba8;

pub use color::Color;
pub use rgba8::Rgba8;
