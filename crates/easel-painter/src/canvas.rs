use easel_engine::paint::Rgba8;
use easel_engine::scene::{PrimitiveMode, Vertex, VertexArray};

use crate::bindings::{Command, TRANSLUCENT_GRAY};

/// Drawing state: the clicked vertices, the color for the next one, and
/// whether the user asked to quit.
#[derive(Debug, Clone)]
pub struct Canvas {
    vertices: VertexArray,
    color: Rgba8,
    exit_requested: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            vertices: VertexArray::new(PrimitiveMode::Points),
            color: Rgba8::BLACK,
            exit_requested: false,
        }
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Exit => self.exit_requested = true,

            Command::SetMode(mode) => {
                self.vertices.reset(mode);
                log::info!("now drawing {mode}");
            }

            Command::SetColor(color) => {
                self.color = color;
                log::info!("now drawing in {}", color_name(color));
            }

            Command::AddVertex(position) => {
                self.vertices.push(Vertex::new(position, self.color));
            }
        }
    }

    #[inline]
    pub fn vertices(&self) -> &VertexArray {
        &self.vertices
    }

    #[inline]
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    /// Sticky once set.
    #[inline]
    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

fn color_name(color: Rgba8) -> String {
    match color {
        Rgba8::RED => "red".to_string(),
        TRANSLUCENT_GRAY => "translucent gray".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_engine::coords::Vec2;

    #[test]
    fn starts_with_black_points() {
        let canvas = Canvas::new();
        assert_eq!(canvas.vertices().mode(), PrimitiveMode::Points);
        assert!(canvas.vertices().is_empty());
        assert_eq!(canvas.color(), Rgba8::BLACK);
        assert!(!canvas.exit_requested());
    }

    #[test]
    fn mode_change_clears_vertices() {
        let mut canvas = Canvas::new();
        canvas.apply(Command::AddVertex(Vec2::new(1.0, 2.0)));
        canvas.apply(Command::AddVertex(Vec2::new(3.0, 4.0)));

        canvas.apply(Command::SetMode(PrimitiveMode::Lines));
        assert!(canvas.vertices().is_empty());
        assert_eq!(canvas.vertices().mode(), PrimitiveMode::Lines);
    }

    #[test]
    fn color_is_not_retroactive() {
        let mut canvas = Canvas::new();
        canvas.apply(Command::AddVertex(Vec2::new(1.0, 1.0)));
        canvas.apply(Command::SetColor(Rgba8::RED));
        canvas.apply(Command::AddVertex(Vec2::new(2.0, 2.0)));

        let colors: Vec<_> = canvas.vertices().vertices().iter().map(|v| v.color).collect();
        assert_eq!(colors, vec![Rgba8::BLACK, Rgba8::RED]);
    }

    #[test]
    fn color_survives_mode_change() {
        let mut canvas = Canvas::new();
        canvas.apply(Command::SetColor(TRANSLUCENT_GRAY));
        canvas.apply(Command::SetMode(PrimitiveMode::Quads));
        assert_eq!(canvas.color(), TRANSLUCENT_GRAY);
    }

    #[test]
    fn exit_is_sticky() {
        let mut canvas = Canvas::new();
        canvas.apply(Command::Exit);
        canvas.apply(Command::SetMode(PrimitiveMode::Points));
        canvas.apply(Command::AddVertex(Vec2::zero()));
        assert!(canvas.exit_requested());
    }

    #[test]
    fn known_colors_have_names() {
        assert_eq!(color_name(Rgba8::RED), "red");
        assert_eq!(color_name(TRANSLUCENT_GRAY), "translucent gray");
        assert_eq!(color_name(Rgba8::BLACK), "rgba(0, 0, 0, 255)");
    }
}
