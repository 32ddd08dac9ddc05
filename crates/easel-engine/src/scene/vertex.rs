use std::fmt;

use crate::coords::Vec2;
use crate::paint::Rgba8;

/// A colored point in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec2,
    pub color: Rgba8,
}

impl Vertex {
    #[inline]
    pub const fn new(position: Vec2, color: Rgba8) -> Self {
        Self { position, color }
    }
}

/// How a vertex sequence is assembled into shapes.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum PrimitiveMode {
    /// Every vertex is a point.
    #[default]
    Points,
    /// Each pair of vertices is a line segment.
    Lines,
    /// Each group of three vertices is a triangle.
    Triangles,
    /// Each vertex after the first two forms a triangle with the previous two.
    TriangleStrip,
    /// Each group of four vertices is a quad.
    Quads,
}

impl PrimitiveMode {
    pub const ALL: [PrimitiveMode; 5] = [
        PrimitiveMode::Points,
        PrimitiveMode::Lines,
        PrimitiveMode::Triangles,
        PrimitiveMode::TriangleStrip,
        PrimitiveMode::Quads,
    ];

    /// Number of leading vertices that form complete primitives.
    ///
    /// Incomplete trailing groups are not drawn.
    pub fn drawable_len(self, n: usize) -> usize {
        match self {
            PrimitiveMode::Points => n,
            PrimitiveMode::Lines => n - n % 2,
            PrimitiveMode::Triangles => n - n % 3,
            PrimitiveMode::TriangleStrip => {
                if n < 3 { 0 } else { n }
            }
            PrimitiveMode::Quads => n - n % 4,
        }
    }

    /// Number of complete primitives in a sequence of `n` vertices.
    pub fn primitive_count(self, n: usize) -> usize {
        let d = self.drawable_len(n);
        match self {
            PrimitiveMode::Points => d,
            PrimitiveMode::Lines => d / 2,
            PrimitiveMode::Triangles => d / 3,
            PrimitiveMode::TriangleStrip => d.saturating_sub(2),
            PrimitiveMode::Quads => d / 4,
        }
    }
}

impl fmt::Display for PrimitiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrimitiveMode::Points => "points",
            PrimitiveMode::Lines => "lines",
            PrimitiveMode::Triangles => "triangles",
            PrimitiveMode::TriangleStrip => "triangle strip",
            PrimitiveMode::Quads => "quads",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_points() {
        assert_eq!(PrimitiveMode::default(), PrimitiveMode::Points);
    }

    #[test]
    fn trailing_partial_groups_are_dropped() {
        assert_eq!(PrimitiveMode::Points.drawable_len(5), 5);
        assert_eq!(PrimitiveMode::Lines.drawable_len(5), 4);
        assert_eq!(PrimitiveMode::Triangles.drawable_len(5), 3);
        assert_eq!(PrimitiveMode::Quads.drawable_len(7), 4);
    }

    #[test]
    fn strip_needs_three_vertices() {
        assert_eq!(PrimitiveMode::TriangleStrip.drawable_len(2), 0);
        assert_eq!(PrimitiveMode::TriangleStrip.drawable_len(3), 3);
        assert_eq!(PrimitiveMode::TriangleStrip.primitive_count(5), 3);
    }

    #[test]
    fn primitive_counts() {
        assert_eq!(PrimitiveMode::Points.primitive_count(3), 3);
        assert_eq!(PrimitiveMode::Lines.primitive_count(3), 1);
        assert_eq!(PrimitiveMode::Triangles.primitive_count(3), 1);
        assert_eq!(PrimitiveMode::Quads.primitive_count(8), 2);
        for mode in PrimitiveMode::ALL {
            assert_eq!(mode.primitive_count(0), 0);
        }
    }
}
