//! Mesh output from tessellation.
//!
//! A [`Mesh`] is an inert pair of buffers: positions and triangle-list
//! indices. It is handed to the renderer, which copies
//! [`Mesh::vertex_bytes`] into a vertex buffer (3×f32 per vertex) and
//! [`Mesh::index_bytes`] into a `u32` index buffer.

use plotline_core::math::Vector3;

/// Output from tessellation: vertices and indices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vector3>,
    indices: Vec<u32>,
}

/// Mesh produced by ribbon tessellation.
///
/// For an N-point polyline it holds `2N` vertices (a left/right pair per
/// point) and `6(N-1)` indices (two triangles per segment).
pub type RibbonMesh = Mesh;

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Create a mesh with given vertices and indices.
    pub fn from_data(vertices: Vec<Vector3>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate over the corner positions of each triangle.
    ///
    /// # Panics
    ///
    /// Panics when a triangle references a vertex outside the buffer.
    pub fn triangles(&self) -> impl Iterator<Item = [Vector3; 3]> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            [
                self.vertices[tri[0] as usize],
                self.vertices[tri[1] as usize],
                self.vertices[tri[2] as usize],
            ]
        })
    }

    /// Vertex positions as tightly packed bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Indices as tightly packed native-endian `u32` bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Take ownership of the underlying buffers.
    pub fn into_parts(self) -> (Vec<Vector3>, Vec<u32>) {
        (self.vertices, self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Mesh {
        Mesh::from_data(
            vec![
                Vector3::xy(0.0, 0.0),
                Vector3::xy(1.0, 0.0),
                Vector3::xy(1.0, 1.0),
                Vector3::xy(0.0, 1.0),
            ],
            vec![0, 1, 2, 2, 3, 0],
        )
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.triangles().count(), 0);
    }

    #[test]
    fn test_counts() {
        let mesh = unit_square();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn test_byte_views() {
        let mesh = unit_square();
        assert_eq!(mesh.vertex_bytes().len(), 4 * 12);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
    }

    #[test]
    fn test_triangles() {
        let mesh = unit_square();
        let triangles: Vec<_> = mesh.triangles().collect();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[1][0], Vector3::xy(1.0, 1.0));
    }

    #[test]
    #[should_panic]
    fn test_triangles_out_of_range_index() {
        let (vertices, mut indices) = unit_square().into_parts();
        indices[4] = 4;
        let _: Vec<_> = Mesh::from_data(vertices, indices).triangles().collect();
    }

    #[test]
    fn test_equality_is_element_wise() {
        assert_eq!(unit_square(), unit_square());

        let (vertices, mut indices) = unit_square().into_parts();
        indices.swap(0, 1);
        assert_ne!(Mesh::from_data(vertices, indices), unit_square());
    }
}
