//! Click-to-draw vertex painter.
//!
//! Keys pick the primitive mode (0 to 4) and the color (`R`, Shift+`/`); every
//! mouse press adds a vertex. Escape or closing the window exits on the next
//! fixed update.

mod app;
mod assets;
mod bindings;
mod canvas;
mod config;

pub use app::PainterApp;
pub use assets::Assets;
pub use bindings::{command_for, Command, TRANSLUCENT_GRAY};
pub use canvas::Canvas;
pub use config::{LabelConfig, PainterConfig};
