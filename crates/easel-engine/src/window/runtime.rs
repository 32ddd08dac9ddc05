use std::time::Duration;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::PlatformInput;
use crate::time::{FixedTimestep, FrameClock};

use super::frame_loop::FrameLoop;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,

    /// Fixed updates per second.
    pub update_rate: f64,

    /// Cap on the wall time fed to the fixed-timestep accumulator per frame.
    /// `None` uses the measured time as is.
    pub max_frame_delta: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "easel".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: true,
            update_rate: 60.0,
            max_frame_delta: None,
        }
    }
}

impl RuntimeConfig {
    /// Checks values the runtime cannot work with.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.update_rate.is_finite() && self.update_rate > 0.0,
            "update rate must be a positive number of steps per second, got {}",
            self.update_rate
        );
        anyhow::ensure!(
            self.initial_size.width > 0.0 && self.initial_size.height > 0.0,
            "window size must be non-zero, got {}x{}",
            self.initial_size.width,
            self.initial_size.height
        );
        Ok(())
    }

    fn frame_loop(&self) -> FrameLoop {
        let clock = match self.max_frame_delta {
            Some(max) => FrameClock::with_max_delta(max),
            None => FrameClock::new(),
        };
        FrameLoop::new(clock, FixedTimestep::from_rate(self.update_rate))
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and runs `app` until it asks to exit.
    ///
    /// Errors raised inside the event loop (window or GPU creation) are
    /// returned once the loop has stopped.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        config.validate().context("invalid runtime configuration")?;

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    frame_loop: FrameLoop,
    platform: PlatformInput,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    window: Option<WindowEntry>,
    exit_requested: bool,
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            window: None,
            exit_requested: false,
            error: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let mut entry = WindowEntryTryBuilder {
            frame_loop: self.config.frame_loop(),
            platform: PlatformInput::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()?;

        // Window and device creation time is not simulation time.
        entry.with_frame_loop_mut(|fl| fl.reset_clock());
        Ok(entry)
    }

    /// Drops the window (surface first) and stops the event loop.
    fn close(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.take().is_some() {
            log::info!("window closed");
        }
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.error = Some(err);
        self.close(event_loop);
    }

    /// Input, fixed updates, then rendering for one redraw.
    fn redraw(&mut self) -> AppControl {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else {
            return AppControl::Continue;
        };

        entry.with_mut(|fields| {
            let (frame_loop, window, gpu) = (fields.frame_loop, fields.window, fields.gpu);
            let elapsed = frame_loop.tick().elapsed;

            frame_loop.frame(&mut *app, elapsed, |app| {
                let mut ctx = FrameCtx {
                    window: WindowCtx { window },
                    gpu,
                };
                app.on_frame(&mut ctx)
            })
        })
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.with_window(|w| w.request_redraw());
                self.window = Some(entry);
            }
            Err(err) => self.fail(event_loop, err.context("failed to create initial window")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: rendering runs as fast as the present mode allows.
        if let Some(entry) = self.window.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else {
            return;
        };

        // Queued for the next poll point; the app decides what a close request means.
        entry.with_mut(|fields| {
            if let Some(ev) = fields.platform.translate(fields.window, &event) {
                fields.frame_loop.push_event(ev);
            }
        });

        match &event {
            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                if self.redraw().is_exit() {
                    self.close(event_loop);
                }
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = RuntimeConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.update_rate, 60.0);
        assert!(cfg.max_frame_delta.is_none());
    }

    #[test]
    fn non_positive_update_rate_is_rejected() {
        for rate in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let cfg = RuntimeConfig {
                update_rate: rate,
                ..RuntimeConfig::default()
            };
            assert!(cfg.validate().is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let cfg = RuntimeConfig {
            initial_size: LogicalSize::new(0.0, 600.0),
            ..RuntimeConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn frame_loop_uses_configured_rate() {
        let cfg = RuntimeConfig {
            update_rate: 50.0,
            ..RuntimeConfig::default()
        };
        assert_eq!(cfg.frame_loop().timestep().interval(), Duration::from_millis(20));
    }
}
