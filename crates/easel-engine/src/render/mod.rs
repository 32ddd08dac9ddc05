//! GPU rendering subsystem.
//!
//! Renderers consume `scene` drawables and issue GPU commands via wgpu.
//! Each renderer is responsible for its own GPU resources (pipelines, buffers,
//! textures), created lazily on first use.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.
//! - Each renderer records its own load/store pass, so draw order is call order.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::sprite::SpriteRenderer;
pub use shapes::text::TextRenderer;
pub use shapes::vertices::VertexArrayRenderer;
