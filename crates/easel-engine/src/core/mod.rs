//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop)
//! and the application. The runtime calls [`App`] for input, fixed updates
//! and rendering, and hands it a [`FrameCtx`] for the draw.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
