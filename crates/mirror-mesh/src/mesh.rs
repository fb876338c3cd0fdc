use crate::color::Color;
use glam::Vec2;

/// Vertex format for sprite rendering with position, texture coordinate and tint
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(pos: Vec2, uv: Vec2, color: Color) -> Self {
        Self {
            pos: pos.to_array(),
            uv: uv.to_array(),
            color: color.into(),
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.pos)
    }
}

/// A mesh consisting of vertices and indices for triangle rendering
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vertex; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Append a vertex and return its index.
    pub fn add_vertex(&mut self, pos: Vec2, uv: Vec2, color: Color) -> u32 {
        let idx = self.vertices.len() as u32;
        self.vertices.push(Vertex::new(pos, uv, color));
        idx
    }

    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Append a quad given its four corners in emission order.
    ///
    /// Triangles are `(0, 1, 2)` and `(2, 3, 0)`.
    pub fn add_quad(&mut self, positions: [Vec2; 4], uvs: [Vec2; 4], color: Color) {
        let base_idx = self.vertices.len() as u32;
        for (pos, uv) in positions.into_iter().zip(uvs) {
            self.vertices.push(Vertex::new(pos, uv, color));
        }
        self.add_triangle(base_idx, base_idx + 1, base_idx + 2);
        self.add_triangle(base_idx + 2, base_idx + 3, base_idx);
    }

    /// Append an axis-aligned quad, corners ordered bottom-left, top-left,
    /// top-right, bottom-right.
    pub fn add_rect(&mut self, pos_min: Vec2, pos_max: Vec2, uv_min: Vec2, uv_max: Vec2, color: Color) {
        self.add_quad(
            [
                pos_min,
                Vec2::new(pos_min.x, pos_max.y),
                pos_max,
                Vec2::new(pos_max.x, pos_min.y),
            ],
            [
                uv_min,
                Vec2::new(uv_min.x, uv_max.y),
                uv_max,
                Vec2::new(uv_max.x, uv_min.y),
            ],
            color,
        );
    }

    /// Append a convex polygon as a triangle fan around its first vertex.
    ///
    /// Polygons with fewer than three vertices emit nothing.
    pub fn add_fan(&mut self, points: &[(Vec2, Vec2)], color: Color) {
        if points.len() < 3 {
            return;
        }

        let base_idx = self.vertices.len() as u32;
        for &(pos, uv) in points {
            self.vertices.push(Vertex::new(pos, uv, color));
        }
        for i in 1..points.len() as u32 - 1 {
            self.add_triangle(base_idx, base_idx + i, base_idx + i + 1);
        }
    }
}
