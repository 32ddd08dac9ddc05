use super::{PrimitiveMode, Vertex};

/// Growable vertex sequence plus the mode used to assemble it.
///
/// Vertices are only ever appended; the sequence is emptied as a whole by
/// [`clear`](Self::clear) or [`reset`](Self::reset).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexArray {
    mode: PrimitiveMode,
    vertices: Vec<Vertex>,
}

impl VertexArray {
    pub fn new(mode: PrimitiveMode) -> Self {
        Self {
            mode,
            vertices: Vec::new(),
        }
    }

    #[inline]
    pub fn mode(&self) -> PrimitiveMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PrimitiveMode) {
        self.mode = mode;
    }

    /// Appends a copy of `vertex`.
    pub fn push(&mut self, vertex: Vertex) {
        self.vertices.push(vertex);
    }

    /// Removes all vertices. Keeps allocated capacity.
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Clears the sequence and switches to `mode`.
    pub fn reset(&mut self, mode: PrimitiveMode) {
        self.clear();
        self.set_mode(mode);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Leading vertices that form complete primitives under the current mode.
    pub fn drawable(&self) -> &[Vertex] {
        &self.vertices[..self.mode.drawable_len(self.vertices.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Rgba8;

    fn v(x: f32, y: f32) -> Vertex {
        Vertex::new(Vec2::new(x, y), Rgba8::BLACK)
    }

    #[test]
    fn push_preserves_order() {
        let mut va = VertexArray::default();
        va.push(v(1.0, 1.0));
        va.push(v(2.0, 2.0));
        assert_eq!(va.len(), 2);
        assert_eq!(va.vertices()[0].position, Vec2::new(1.0, 1.0));
        assert_eq!(va.vertices()[1].position, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn reset_clears_and_switches_mode() {
        let mut va = VertexArray::new(PrimitiveMode::Points);
        va.push(v(0.0, 0.0));
        va.reset(PrimitiveMode::Lines);
        assert!(va.is_empty());
        assert_eq!(va.mode(), PrimitiveMode::Lines);
    }

    #[test]
    fn drawable_excludes_incomplete_tail() {
        let mut va = VertexArray::new(PrimitiveMode::Triangles);
        for i in 0..4 {
            va.push(v(i as f32, 0.0));
        }
        assert_eq!(va.drawable().len(), 3);
        assert_eq!(va.len(), 4);
    }
}
