//! Plotline Geometry - polyline ribbons and plot primitives
//!
//! This crate provides:
//! - Ribbon tessellation (turning polylines into constant-width triangle meshes)
//! - Mesh output ready for tightly packed GPU upload
//! - Plot furniture: axis bars, rectangles, diamond markers
//! - Bounding boxes and clip-space normalization of point data
//! - Sampled curves for demos and benchmarks
//!
//! # Example
//!
//! ```
//! use plotline_geometry::*;
//!
//! let points = [Vector3::xy(0.0, 0.0), Vector3::xy(10.0, 0.0)];
//! let mesh = tessellate(&points, 2.0)?;
//!
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.indices(), &[0, 1, 2, 3, 2, 1]);
//!
//! // Hand the packed buffers to the renderer
//! let _vertex_bytes: &[u8] = mesh.vertex_bytes();
//! let _index_bytes: &[u8] = mesh.index_bytes();
//! # Ok::<(), GeometryError>(())
//! ```

// Inputs
mod bounds;
mod polyline;
pub mod sample;

// Tessellation
mod error;
mod mesh;
mod primitives;
mod stroke;
mod tessellator;

// Re-exports
pub use bounds::*;
pub use polyline::*;

pub use error::*;
pub use mesh::*;
pub use primitives::*;
pub use stroke::*;
pub use tessellator::*;

pub use plotline_core::math::Vector3;
