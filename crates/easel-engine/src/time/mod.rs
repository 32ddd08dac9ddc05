//! Time subsystem.
//!
//! Provides stable, testable timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window, ticked once per loop iteration
//! - one `FixedTimestep` fed with the clock's elapsed time and drained in
//!   constant-size steps before rendering

mod fixed_step;
mod frame_clock;

pub use fixed_step::{FixedTimestep, StepTime};
pub use frame_clock::{FrameClock, FrameTime};
