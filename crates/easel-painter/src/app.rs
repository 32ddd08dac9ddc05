use easel_engine::core::{App, AppControl, FrameCtx};
use easel_engine::input::{InputEvent, InputState};
use easel_engine::paint::Rgba8;
use easel_engine::render::{SpriteRenderer, TextRenderer, VertexArrayRenderer};
use easel_engine::scene::{Sprite, Text};
use easel_engine::text::FontSystem;
use easel_engine::time::StepTime;

use crate::assets::Assets;
use crate::bindings::command_for;
use crate::canvas::Canvas;
use crate::config::PainterConfig;

/// The painter application: canvas state plus what it needs to draw a frame.
pub struct PainterApp {
    canvas: Canvas,

    fonts: FontSystem,
    label: Text,
    logo: Sprite,

    text_renderer: TextRenderer,
    sprite_renderer: SpriteRenderer,
    vertex_renderer: VertexArrayRenderer,
}

impl PainterApp {
    pub fn new(config: &PainterConfig, assets: Assets) -> Self {
        let Assets { fonts, font, logo } = assets;

        Self {
            canvas: Canvas::new(),
            fonts,
            label: config.label.text(font),
            logo: Sprite::new(logo).with_position(config.logo_position),
            text_renderer: TextRenderer::new(),
            sprite_renderer: SpriteRenderer::new(),
            vertex_renderer: VertexArrayRenderer::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl App for PainterApp {
    fn on_input(&mut self, input: &InputState, event: &InputEvent) -> AppControl {
        if let Some(command) = command_for(event, input) {
            self.canvas.apply(command);
        }
        AppControl::Continue
    }

    fn on_update(&mut self, _step: &StepTime) -> AppControl {
        if self.canvas.exit_requested() {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Self {
            canvas,
            fonts,
            label,
            logo,
            text_renderer,
            sprite_renderer,
            vertex_renderer,
        } = self;

        ctx.render(Rgba8::WHITE, |rctx, target| {
            text_renderer.render(rctx, target, std::slice::from_ref(&*label), fonts);
            sprite_renderer.render(rctx, target, std::slice::from_ref(&*logo));
            vertex_renderer.render(rctx, target, canvas.vertices());
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use easel_engine::coords::Vec2;
    use easel_engine::input::{
        Key, KeyState, Modifiers, MouseButton, MouseButtonState, PointerButtonEvent,
    };
    use easel_engine::scene::PrimitiveMode;
    use easel_engine::time::{FixedTimestep, FrameClock};
    use easel_engine::window::FrameLoop;

    use crate::bindings::TRANSLUCENT_GRAY;

    fn app() -> PainterApp {
        PainterApp::new(&PainterConfig::default(), Assets::default())
    }

    fn frame_loop() -> FrameLoop {
        FrameLoop::new(FrameClock::new(), FixedTimestep::from_rate(60.0))
    }

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat: false,
        }
    }

    fn click(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn feed(fl: &mut FrameLoop, app: &mut PainterApp, events: Vec<InputEvent>) {
        for ev in events {
            fl.push_event(ev);
        }
        fl.dispatch_events(app);
    }

    #[test]
    fn digit_keys_clear_and_switch_mode() {
        let mut fl = frame_loop();
        let mut app = app();
        let digits = [Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4];

        for (digit, mode) in digits.into_iter().zip(PrimitiveMode::ALL) {
            feed(&mut fl, &mut app, vec![click(1.0, 1.0), click(2.0, 2.0)]);
            assert_eq!(app.canvas().vertices().len(), 2);

            feed(&mut fl, &mut app, vec![key(digit, KeyState::Pressed)]);
            assert_eq!(app.canvas().vertices().len(), 0);
            assert_eq!(app.canvas().vertices().mode(), mode);
        }
    }

    #[test]
    fn clicks_append_in_order_with_current_color() {
        let mut fl = frame_loop();
        let mut app = app();

        feed(
            &mut fl,
            &mut app,
            vec![
                click(10.0, 20.0),
                key(Key::R, KeyState::Pressed),
                click(30.0, 40.0),
                click(50.0, 60.0),
            ],
        );

        let got: Vec<_> = app
            .canvas()
            .vertices()
            .vertices()
            .iter()
            .map(|v| (v.position, v.color))
            .collect();
        assert_eq!(
            got,
            vec![
                (Vec2::new(10.0, 20.0), Rgba8::BLACK),
                (Vec2::new(30.0, 40.0), Rgba8::RED),
                (Vec2::new(50.0, 60.0), Rgba8::RED),
            ]
        );
    }

    #[test]
    fn shift_slash_then_click_gives_translucent_gray() {
        let mut fl = frame_loop();
        let mut app = app();

        feed(
            &mut fl,
            &mut app,
            vec![
                key(Key::ShiftLeft, KeyState::Pressed),
                key(Key::Slash, KeyState::Pressed),
                key(Key::Slash, KeyState::Released),
                key(Key::ShiftLeft, KeyState::Released),
                click(5.0, 5.0),
            ],
        );

        let v = app.canvas().vertices().vertices()[0];
        assert_eq!(v.color, TRANSLUCENT_GRAY);
        assert_eq!(v.color, Rgba8::new(128, 128, 128, 40));
    }

    #[test]
    fn escape_closes_on_the_next_update() {
        let mut fl = frame_loop();
        let mut app = app();

        fl.push_event(key(Key::Escape, KeyState::Pressed));
        assert_eq!(
            fl.advance(&mut app, Duration::from_millis(1)),
            AppControl::Continue
        );
        assert!(app.canvas().exit_requested());

        assert_eq!(
            fl.advance(&mut app, Duration::from_millis(20)),
            AppControl::Exit
        );
        assert!(app.canvas().exit_requested());
    }

    #[test]
    fn window_close_request_exits() {
        let mut fl = frame_loop();
        let mut app = app();

        fl.push_event(InputEvent::CloseRequested);
        assert_eq!(
            fl.advance(&mut app, Duration::from_millis(20)),
            AppControl::Exit
        );
    }

    #[test]
    fn triangle_end_to_end() {
        let mut fl = frame_loop();
        let mut app = app();

        fl.push_event(key(Key::Digit2, KeyState::Pressed));
        for (x, y) in [(10.0, 10.0), (20.0, 10.0), (15.0, 20.0)] {
            fl.push_event(click(x, y));
        }
        assert_eq!(
            fl.advance(&mut app, Duration::from_millis(20)),
            AppControl::Continue
        );

        let va = app.canvas().vertices();
        assert_eq!(va.mode(), PrimitiveMode::Triangles);
        let positions: Vec<_> = va.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec2::new(10.0, 10.0),
                Vec2::new(20.0, 10.0),
                Vec2::new(15.0, 20.0),
            ]
        );
        assert_eq!(va.drawable().len(), 3);
        assert_eq!(va.mode().primitive_count(va.len()), 1);
    }

    #[test]
    fn missing_assets_leave_label_and_logo_empty() {
        let app = app();
        assert!(!app.label.is_visible());
        assert!(app.logo.bitmap.is_none());
        assert_eq!(app.logo.position, Vec2::new(300.0, 180.0));
    }
}
