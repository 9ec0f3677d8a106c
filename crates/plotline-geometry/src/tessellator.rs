//! Polyline ribbon tessellation.
//!
//! Converts an ordered point sequence into a constant-width triangle strip.
//! Every input point `i` contributes a vertex pair:
//!
//! ```text
//! vertices[2i]     = points[i] + offset_i   (left)
//! vertices[2i + 1] = points[i] - offset_i   (right)
//! ```
//!
//! and every segment contributes the triangles `(2i, 2i+1, 2i+2)` and
//! `(2i+3, 2i+2, 2i+1)`, which tile the segment's quad and wind
//! counter-clockwise when viewed from `+Z`.

use crate::{
    DegeneratePolicy, GeometryError, GeometryResult, JoinDirection, Polyline, RibbonMesh,
    RibbonMode, RibbonStroke, polyline::check_point_count,
};
use plotline_core::math::Vector3;
use plotline_core::profiling::{profile_function, profile_scope};

/// Largest point count whose vertex indices still fit in a `u32`.
pub const MAX_RIBBON_POINTS: usize = (u32::MAX as usize / 2) + 1;

/// Tessellator for converting polylines to ribbon meshes.
///
/// Holds only its stroke settings, so one instance can be shared across
/// threads and reused for any number of calls.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tessellator {
    stroke: RibbonStroke,
}

impl Tessellator {
    /// Create a new tessellator with the default stroke.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tessellator with custom stroke settings.
    pub fn with_stroke(stroke: RibbonStroke) -> Self {
        Self { stroke }
    }

    pub fn stroke(&self) -> &RibbonStroke {
        &self.stroke
    }

    /// Tessellate an already validated polyline.
    pub fn tessellate_polyline(&self, polyline: &Polyline) -> GeometryResult<RibbonMesh> {
        self.tessellate(polyline.points())
    }

    /// Tessellate a point sequence into a ribbon.
    ///
    /// Fails with [`GeometryError::InvalidInput`] for fewer than two points
    /// or a negative / non-finite width, and with
    /// [`GeometryError::DegenerateSegment`] for a zero-length direction when
    /// the stroke uses [`DegeneratePolicy::Reject`].
    pub fn tessellate(&self, points: &[Vector3]) -> GeometryResult<RibbonMesh> {
        profile_function!();

        if let Err(err) = self.validate(points) {
            tracing::warn!("Ribbon tessellation rejected: {}", err);
            return Err(err);
        }

        let vertices = match self.stroke.mode {
            RibbonMode::Mitered => self.mitered_vertices(points)?,
            RibbonMode::Naive => self.naive_vertices(points),
        };
        let indices = ribbon_indices(points.len());

        tracing::trace!(
            points = points.len(),
            width = self.stroke.width,
            mode = ?self.stroke.mode,
            "Tessellated ribbon"
        );

        Ok(RibbonMesh::from_data(vertices, indices))
    }

    fn validate(&self, points: &[Vector3]) -> GeometryResult<()> {
        check_point_count(points.len())?;

        if points.len() > MAX_RIBBON_POINTS {
            return Err(GeometryError::invalid_input(format!(
                "{} points exceed the u32 index range (max {})",
                points.len(),
                MAX_RIBBON_POINTS
            )));
        }

        let width = self.stroke.width;
        if !(width.is_finite() && width >= 0.0) {
            return Err(GeometryError::invalid_input(format!(
                "ribbon width must be finite and non-negative, got {}",
                width
            )));
        }

        Ok(())
    }

    fn mitered_vertices(&self, points: &[Vector3]) -> GeometryResult<Vec<Vector3>> {
        profile_scope!("ribbon_mitered_vertices");

        let half_width = self.stroke.half_width();
        let mut vertices = Vec::with_capacity(points.len() * 2);

        for (i, &point) in points.iter().enumerate() {
            let offset = self.offset_direction(points, i)? * half_width;
            vertices.push(point + offset);
            vertices.push(point - offset);
        }

        Ok(vertices)
    }

    fn naive_vertices(&self, points: &[Vector3]) -> Vec<Vector3> {
        profile_scope!("ribbon_naive_vertices");

        let offset = Vector3::Y * self.stroke.half_width();
        points
            .iter()
            .flat_map(|&point| [point + offset, point - offset])
            .collect()
    }

    /// Unit offset for point `i`: the direction estimate rotated 90° about `+Z`.
    fn offset_direction(&self, points: &[Vector3], i: usize) -> GeometryResult<Vector3> {
        let direction = direction_at(points, i, self.stroke.join);

        match Vector3::Z.cross(direction).try_normalize() {
            Some(perp) => Ok(perp),
            None => match self.stroke.degenerate {
                DegeneratePolicy::Collapse => {
                    tracing::debug!(index = i, "Degenerate join collapsed to a zero offset");
                    Ok(Vector3::ZERO)
                }
                DegeneratePolicy::Reject => {
                    let err = GeometryError::DegenerateSegment { index: i };
                    tracing::warn!("Ribbon tessellation rejected: {}", err);
                    Err(err)
                }
            },
        }
    }
}

/// Direction estimate of the polyline at point `i`.
///
/// Endpoints use the adjacent segment; interior points follow `join`.
fn direction_at(points: &[Vector3], i: usize, join: JoinDirection) -> Vector3 {
    let last = points.len() - 1;
    if i == 0 {
        points[1] - points[0]
    } else if i == last {
        points[last] - points[last - 1]
    } else {
        match join {
            JoinDirection::Bisect => points[i + 1] - points[i - 1],
            JoinDirection::Forward => points[i + 1] - points[i],
        }
    }
}

/// Triangle-list indices for a ribbon over `point_count` points.
fn ribbon_indices(point_count: usize) -> Vec<u32> {
    let segments = point_count.saturating_sub(1);
    let mut indices = Vec::with_capacity(segments * 6);

    for segment in 0..segments as u32 {
        let base = segment * 2;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 3, base + 2, base + 1]);
    }

    indices
}

/// Tessellate `points` into a mitered ribbon of the given width.
pub fn tessellate(points: &[Vector3], width: f32) -> GeometryResult<RibbonMesh> {
    Tessellator::with_stroke(RibbonStroke::new(width)).tessellate(points)
}

/// Tessellate `points` into a ribbon thickened along the Y axis only.
pub fn tessellate_naive(points: &[Vector3], width: f32) -> GeometryResult<RibbonMesh> {
    Tessellator::with_stroke(RibbonStroke::naive(width)).tessellate(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn corner() -> [Vector3; 3] {
        [
            Vector3::xy(0.0, 0.0),
            Vector3::xy(1.0, 0.0),
            Vector3::xy(1.0, 1.0),
        ]
    }

    #[test]
    fn test_horizontal_segment() {
        let mesh = tessellate(&[Vector3::xy(0.0, 0.0), Vector3::xy(10.0, 0.0)], 2.0).unwrap();

        assert_eq!(
            mesh.vertices(),
            &[
                Vector3::xy(0.0, 1.0),
                Vector3::xy(0.0, -1.0),
                Vector3::xy(10.0, 1.0),
                Vector3::xy(10.0, -1.0),
            ]
        );
        assert_eq!(mesh.indices(), &[0, 1, 2, 3, 2, 1]);
    }

    #[test]
    fn test_index_pattern() {
        assert_eq!(ribbon_indices(2), vec![0, 1, 2, 3, 2, 1]);
        assert_eq!(
            ribbon_indices(3),
            vec![0, 1, 2, 3, 2, 1, 2, 3, 4, 5, 4, 3]
        );
        assert!(ribbon_indices(1).is_empty());
    }

    #[test]
    fn test_bisect_join() {
        let mesh = tessellate(&corner(), 2.0).unwrap();
        let h = std::f32::consts::FRAC_1_SQRT_2;

        // Interior direction is (1, 1), so the offset is (-1, 1) / sqrt(2).
        assert!(mesh.vertices()[2].abs_diff_eq(Vector3::xy(1.0 - h, h), EPSILON));
        assert!(mesh.vertices()[3].abs_diff_eq(Vector3::xy(1.0 + h, -h), EPSILON));
    }

    #[test]
    fn test_forward_join() {
        let stroke = RibbonStroke::new(2.0).with_join(JoinDirection::Forward);
        let mesh = Tessellator::with_stroke(stroke).tessellate(&corner()).unwrap();

        // Interior direction is the outgoing segment (0, 1).
        assert!(mesh.vertices()[2].abs_diff_eq(Vector3::xy(0.0, 0.0), EPSILON));
        assert!(mesh.vertices()[3].abs_diff_eq(Vector3::xy(2.0, 0.0), EPSILON));
    }

    #[test]
    fn test_endpoints_ignore_join() {
        let bisect = tessellate(&corner(), 0.5).unwrap();
        let forward = Tessellator::with_stroke(
            RibbonStroke::new(0.5).with_join(JoinDirection::Forward),
        )
        .tessellate(&corner())
        .unwrap();

        assert_eq!(bisect.vertices()[..2], forward.vertices()[..2]);
        assert_eq!(bisect.vertices()[4..], forward.vertices()[4..]);
    }

    #[test]
    fn test_naive_offsets_along_y() {
        let mesh = tessellate_naive(&corner(), 0.5).unwrap();

        for (pair, point) in mesh.vertices().chunks_exact(2).zip(corner()) {
            assert_eq!(pair[0], point + Vector3::xy(0.0, 0.25));
            assert_eq!(pair[1], point - Vector3::xy(0.0, 0.25));
        }
        assert_eq!(mesh.indices(), tessellate(&corner(), 0.5).unwrap().indices());
    }

    #[test]
    fn test_coincident_points_collapse() {
        let points = [Vector3::xy(1.0, 1.0), Vector3::xy(1.0, 1.0)];
        let mesh = tessellate(&points, 1.0).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert!(mesh.vertices().iter().all(|&v| v == Vector3::xy(1.0, 1.0)));
    }

    #[test]
    fn test_coincident_points_reject() {
        let points = [
            Vector3::xy(0.0, 0.0),
            Vector3::xy(1.0, 0.0),
            Vector3::xy(1.0, 0.0),
        ];
        let stroke = RibbonStroke::new(1.0).with_degenerate(DegeneratePolicy::Reject);
        let err = Tessellator::with_stroke(stroke).tessellate(&points).unwrap_err();

        assert_eq!(err, GeometryError::DegenerateSegment { index: 2 });
    }

    #[test]
    fn test_invalid_width() {
        let points = corner();
        for width in [-1.0, f32::NAN, f32::INFINITY] {
            assert!(tessellate(&points, width).unwrap_err().is_invalid_input());
        }
    }

    #[test]
    fn test_too_few_points() {
        assert!(tessellate(&[], 1.0).unwrap_err().is_invalid_input());
        assert!(tessellate(&[Vector3::ZERO], 1.0).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_tessellator_is_reusable() {
        let tessellator = Tessellator::with_stroke(RibbonStroke::new(0.1));
        let first = tessellator.tessellate(&corner()).unwrap();
        let second = tessellator.tessellate(&corner()).unwrap();
        assert_eq!(first, second);
    }
}
