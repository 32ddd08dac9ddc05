//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, wires them to the GPU layer, and
//! drives the application through a fixed-timestep [`FrameLoop`].

mod frame_loop;
mod runtime;

pub use frame_loop::FrameLoop;
pub use runtime::{Runtime, RuntimeConfig};
