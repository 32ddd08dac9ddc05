use std::time::Duration;

use crate::core::{App, AppControl};
use crate::input::{EventQueue, InputEvent, InputState};
use crate::time::{FixedTimestep, FrameClock, FrameTime};

/// Fixed-timestep driver for one window.
///
/// Platform events are queued as they arrive and drained at poll points: once
/// at the start of a frame and again before every fixed update. Each drained
/// event is applied to the tracked [`InputState`] before the app sees it.
#[derive(Debug)]
pub struct FrameLoop {
    clock: FrameClock,
    timestep: FixedTimestep,
    input: InputState,
    queue: EventQueue,
}

impl FrameLoop {
    pub fn new(clock: FrameClock, timestep: FixedTimestep) -> Self {
        Self {
            clock,
            timestep,
            input: InputState::default(),
            queue: EventQueue::new(),
        }
    }

    /// Queues an event for the next poll point.
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    /// Number of events waiting for the next poll point.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Input state as of the last drained event.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn timestep(&self) -> &FixedTimestep {
        &self.timestep
    }

    /// Measures the time since the previous frame.
    pub fn tick(&mut self) -> FrameTime {
        self.clock.tick()
    }

    /// Restarts time measurement, discarding the time since the last tick.
    pub fn reset_clock(&mut self) {
        self.clock.reset();
    }

    /// Drains the queue into `app`. Stops at the first handler asking to exit.
    pub fn dispatch_events<A: App + ?Sized>(&mut self, app: &mut A) -> AppControl {
        while let Some(ev) = self.queue.pop() {
            self.input.apply_event(&ev);
            if app.on_input(&self.input, &ev).is_exit() {
                return AppControl::Exit;
            }
        }
        AppControl::Continue
    }

    /// Runs the input and update part of one frame for `elapsed` wall time.
    ///
    /// Returns [`AppControl::Exit`] as soon as any handler asks for it; no
    /// further steps run in that case.
    pub fn advance<A: App + ?Sized>(&mut self, app: &mut A, elapsed: Duration) -> AppControl {
        if self.dispatch_events(app).is_exit() {
            return AppControl::Exit;
        }

        self.timestep.accumulate(elapsed);

        while let Some(step) = self.timestep.next_step() {
            if self.dispatch_events(app).is_exit() {
                return AppControl::Exit;
            }
            if app.on_update(&step).is_exit() {
                return AppControl::Exit;
            }
        }

        AppControl::Continue
    }

    /// Runs one whole frame: [`advance`](Self::advance), then `render` unless
    /// an input or update handler asked to exit.
    pub fn frame<A, R>(&mut self, app: &mut A, elapsed: Duration, render: R) -> AppControl
    where
        A: App + ?Sized,
        R: FnOnce(&mut A) -> AppControl,
    {
        if self.advance(app, elapsed).is_exit() {
            return AppControl::Exit;
        }
        render(app)
    }
}
