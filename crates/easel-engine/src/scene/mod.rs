//! Retained drawables.
//!
//! Responsibilities:
//! - renderer-agnostic descriptions of what to draw (vertices, text, sprites)
//! - primitive assembly rules shared by CPU code and the vertex renderer
//!
//! GPU resources for these live in `render::shapes`.

mod sprite;
mod text;
mod vertex;
mod vertex_array;

pub use sprite::Sprite;
pub use text::{Text, TextStyle};
pub use vertex::{PrimitiveMode, Vertex};
pub use vertex_array::VertexArray;
