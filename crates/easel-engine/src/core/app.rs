use crate::input::{InputEvent, InputState};
use crate::time::StepTime;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

impl AppControl {
    #[inline]
    pub fn is_exit(self) -> bool {
        self == AppControl::Exit
    }
}

/// Application contract implemented by higher layers.
///
/// Per redraw the runtime calls, in order: `on_input` for every queued event,
/// then zero or more `on_update` steps (each preceded by another `on_input`
/// drain), then `on_frame` once. Returning [`AppControl::Exit`] from any of
/// them closes the window without rendering the current frame.
pub trait App {
    /// Called for each input event. `input` already reflects `event`.
    fn on_input(&mut self, input: &InputState, event: &InputEvent) -> AppControl {
        let _ = (input, event);
        AppControl::Continue
    }

    /// Called once per fixed-rate step.
    fn on_update(&mut self, step: &StepTime) -> AppControl;

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
