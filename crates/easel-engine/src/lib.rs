//! Easel engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the painter: a single-window
//! runtime with a fixed-timestep frame loop, platform-agnostic input, and
//! renderers for vertex arrays, text and sprites.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod bitmap;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
