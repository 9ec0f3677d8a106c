//! Stroke properties for ribbon tessellation.
//!
//! Defines how a polyline is thickened: width, offset mode, interior join
//! direction and what to do with degenerate joins.

/// How offset vertices are placed around each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RibbonMode {
    /// Offset perpendicular to the local direction, mitered at interior points.
    #[default]
    Mitered,
    /// Offset along the Y axis only. Cheaper, but thins out on steep segments.
    Naive,
}

/// Direction estimate used at interior points in [`RibbonMode::Mitered`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinDirection {
    /// `points[i + 1] - points[i - 1]`, which bisects the joint.
    #[default]
    Bisect,
    /// `points[i + 1] - points[i]`, the outgoing segment only.
    Forward,
}

/// What to do when a point's direction has zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DegeneratePolicy {
    /// Emit a zero-offset vertex pair and keep going.
    #[default]
    Collapse,
    /// Fail with [`GeometryError::DegenerateSegment`](crate::GeometryError::DegenerateSegment).
    Reject,
}

/// Stroke properties for a polyline ribbon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RibbonStroke {
    /// Full ribbon width; each side is offset by half of it.
    pub width: f32,
    pub mode: RibbonMode,
    pub join: JoinDirection,
    pub degenerate: DegeneratePolicy,
}

impl RibbonStroke {
    /// Create a mitered stroke of the given width.
    pub fn new(width: f32) -> Self {
        Self {
            width,
            mode: RibbonMode::Mitered,
            join: JoinDirection::Bisect,
            degenerate: DegeneratePolicy::Collapse,
        }
    }

    /// Create a naive (Y-axis thickened) stroke of the given width.
    pub fn naive(width: f32) -> Self {
        Self::new(width).with_mode(RibbonMode::Naive)
    }

    /// Set the width.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Set the offset mode.
    pub fn with_mode(mut self, mode: RibbonMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the interior join direction.
    pub fn with_join(mut self, join: JoinDirection) -> Self {
        self.join = join;
        self
    }

    /// Set the degenerate join policy.
    pub fn with_degenerate(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate = policy;
        self
    }

    /// Half the width, the distance from centerline to each edge.
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    /// Check if the stroke produces any area.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

impl Default for RibbonStroke {
    fn default() -> Self {
        Self::new(1.0)
    }
}
