//! Validated polyline input for tessellation.

use crate::{BoundingBox, GeometryError, GeometryResult};
use plotline_core::math::Vector3;

/// An ordered sequence of at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Vector3>,
}

impl Polyline {
    /// Minimum number of points needed to form a segment.
    pub const MIN_POINTS: usize = 2;

    /// Wrap a point sequence, rejecting sequences with fewer than two points.
    pub fn new(points: Vec<Vector3>) -> GeometryResult<Self> {
        check_point_count(points.len())?;
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`, since a polyline holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of segments between consecutive points.
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    pub fn bounds(&self) -> BoundingBox {
        // Non-empty by construction.
        BoundingBox::from_points(&self.points).unwrap_or_default()
    }

    /// Sum of segment lengths.
    pub fn length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).length())
            .sum()
    }

    pub fn into_points(self) -> Vec<Vector3> {
        self.points
    }
}

impl TryFrom<Vec<Vector3>> for Polyline {
    type Error = GeometryError;

    fn try_from(points: Vec<Vector3>) -> GeometryResult<Self> {
        Self::new(points)
    }
}

impl AsRef<[Vector3]> for Polyline {
    fn as_ref(&self) -> &[Vector3] {
        &self.points
    }
}

pub(crate) fn check_point_count(count: usize) -> GeometryResult<()> {
    if count < Polyline::MIN_POINTS {
        return Err(GeometryError::invalid_input(format!(
            "a polyline needs at least {} points, got {}",
            Polyline::MIN_POINTS,
            count
        )));
    }
    Ok(())
}
