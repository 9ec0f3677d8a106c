//! Bounding boxes and clip-space normalization for plot data.

use plotline_core::math::Vector3;

/// Axis-aligned bounding box of a point set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    /// Box containing a single point.
    pub fn from_point(point: Vector3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Fold a point set into its bounding box; `None` for an empty set.
    pub fn from_points(points: &[Vector3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_point(*first), |bounds, &point| bounds.including(point)),
        )
    }

    /// Grow the box to include `point`.
    pub fn including(self, point: Vector3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, point: Vector3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }

    /// Map `point` so the box's x and y ranges land on `[-1, 1]`.
    ///
    /// z is passed through unchanged. An axis with zero extent maps to `0`.
    pub fn to_clip(&self, point: Vector3) -> Vector3 {
        Vector3::new(
            remap_to_clip(point.x, self.min.x, self.max.x),
            remap_to_clip(point.y, self.min.y, self.max.y),
            point.z,
        )
    }
}

// Widened to f64 so `max - min` cannot overflow for finite inputs.
fn remap_to_clip(value: f32, min: f32, max: f32) -> f32 {
    let (value, min, max) = (f64::from(value), f64::from(min), f64::from(max));
    let extent = max - min;
    if extent > 0.0 {
        (2.0 * (value - min) / extent - 1.0) as f32
    } else {
        0.0
    }
}

/// Rescale points into clip space (`[-1, 1]` on x and y) using their own
/// bounding box. Returns an empty vector for empty input.
pub fn normalize_to_clip(points: &[Vector3]) -> Vec<Vector3> {
    let Some(bounds) = BoundingBox::from_points(points) else {
        return Vec::new();
    };

    tracing::trace!(
        min = %bounds.min,
        max = %bounds.max,
        "Normalizing {} points to clip space",
        points.len()
    );

    points.iter().map(|&point| bounds.to_clip(point)).collect()
}
