//! Plot furniture: axis bars, rectangles and point markers.
//!
//! All primitives are emitted as small indexed meshes that wind
//! counter-clockwise when viewed from `+Z`, matching ribbon output.

use crate::{GeometryError, GeometryResult, Mesh};
use plotline_core::math::Vector3;

/// Indices for a four-corner fan `0, 1, 2, 2, 3, 0`.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Axis-aligned rectangle spanning `min..max` in the XY plane at `min.z`.
pub fn rect(min: Vector3, max: Vector3) -> GeometryResult<Mesh> {
    if max.x < min.x || max.y < min.y {
        return Err(GeometryError::invalid_input(format!(
            "rectangle max {} is below min {}",
            max, min
        )));
    }

    let z = min.z;
    let vertices = vec![
        Vector3::new(min.x, min.y, z),
        Vector3::new(max.x, min.y, z),
        Vector3::new(max.x, max.y, z),
        Vector3::new(min.x, max.y, z),
    ];

    Ok(Mesh::from_data(vertices, QUAD_INDICES.to_vec()))
}

/// Horizontal axis bar across clip space, `2 * half_thickness` tall.
pub fn x_axis(half_thickness: f32) -> GeometryResult<Mesh> {
    check_size("axis half thickness", half_thickness)?;
    rect(
        Vector3::xy(-1.0, -half_thickness),
        Vector3::xy(1.0, half_thickness),
    )
}

/// Vertical axis bar across clip space, `2 * half_thickness` wide.
pub fn y_axis(half_thickness: f32) -> GeometryResult<Mesh> {
    check_size("axis half thickness", half_thickness)?;
    rect(
        Vector3::xy(-half_thickness, -1.0),
        Vector3::xy(half_thickness, 1.0),
    )
}

/// Diamond marker centred on `center` with corners `offset` away along x and y.
pub fn diamond(center: Vector3, offset: f32) -> GeometryResult<Mesh> {
    check_size("diamond offset", offset)?;

    let vertices = vec![
        Vector3::new(center.x - offset, center.y, center.z),
        Vector3::new(center.x, center.y - offset, center.z),
        Vector3::new(center.x + offset, center.y, center.z),
        Vector3::new(center.x, center.y + offset, center.z),
    ];

    Ok(Mesh::from_data(vertices, QUAD_INDICES.to_vec()))
}

/// One diamond marker per point, merged into a single mesh.
pub fn markers(points: &[Vector3], offset: f32) -> GeometryResult<Mesh> {
    check_size("diamond offset", offset)?;

    let mut vertices = Vec::with_capacity(points.len() * 4);
    let mut indices = Vec::with_capacity(points.len() * 6);

    for &point in points {
        let base = u32::try_from(vertices.len()).map_err(|_| {
            GeometryError::invalid_input(format!(
                "{} markers exceed the u32 index range",
                points.len()
            ))
        })?;
        let (marker_vertices, marker_indices) = diamond(point, offset)?.into_parts();
        vertices.extend(marker_vertices);
        indices.extend(marker_indices.into_iter().map(|i| base + i));
    }

    Ok(Mesh::from_data(vertices, indices))
}

fn check_size(what: &str, value: f32) -> GeometryResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GeometryError::invalid_input(format!(
            "{} must be finite and non-negative, got {}",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_area(mesh: &Mesh) -> f32 {
        mesh.triangles()
            .map(|[a, b, c]| (b - a).cross(c - a).z * 0.5)
            .sum()
    }

    #[test]
    fn test_rect() {
        let mesh = rect(Vector3::xy(0.0, 0.0), Vector3::xy(4.0, 2.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(signed_area(&mesh), 8.0);
    }

    #[test]
    fn test_inverted_rect() {
        assert!(rect(Vector3::xy(1.0, 0.0), Vector3::xy(0.0, 1.0)).is_err());
    }

    #[test]
    fn test_axes() {
        let x = x_axis(0.01).unwrap();
        let y = y_axis(0.01).unwrap();
        assert!((signed_area(&x) - 0.04).abs() < 1e-6);
        assert!((signed_area(&y) - 0.04).abs() < 1e-6);
        assert!(x_axis(-0.01).is_err());
    }

    #[test]
    fn test_diamond() {
        let mesh = diamond(Vector3::xy(1.0, 1.0), 0.5).unwrap();
        assert_eq!(mesh.vertices()[0], Vector3::xy(0.5, 1.0));
        assert_eq!(mesh.vertices()[3], Vector3::xy(1.0, 1.5));
        assert_eq!(signed_area(&mesh), 0.5);
    }

    #[test]
    fn test_markers() {
        let points = [Vector3::xy(0.0, 0.0), Vector3::xy(1.0, 0.0)];
        let mesh = markers(&points, 0.1).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(&mesh.indices()[6..], &[4, 5, 6, 6, 7, 4]);
    }
}
