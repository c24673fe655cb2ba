//! Vertex positions for a graph drawn in a 2D viewport.

use std::f64::consts::{FRAC_PI_6, TAU};

use randgraph_core::VertexId;

use crate::{
    error::LayoutError,
    geometry::{Point, Segment, Viewport},
};

/// Distance in pixels within which a point selects a vertex.
pub const PICK_RADIUS: i32 = 15;

/// Distance in pixels by which edge segments stop short of vertex centres.
pub const EDGE_INSET: f64 = 15.0;

/// Length in pixels of each arrowhead barb.
pub const ARROW_LENGTH: f64 = 10.0;

/// Positions keyed by vertex index.
///
/// A layout never mutates the graph it describes. Its length must match the
/// graph's vertex count, so rebuild it whenever the graph is regenerated.
///
/// # Examples
/// ```
/// use randgraph_layout::{Layout, Point, Viewport};
///
/// let layout = Layout::circular(4, Viewport::new(300, 300));
/// assert_eq!(layout.len(), 4);
/// assert_eq!(layout.position(0)?, Point::new(250, 150));
/// assert_eq!(layout.hit_test(Point::new(245, 155)), Some(0));
/// assert_eq!(layout.hit_test(Point::new(150, 150)), None);
/// # Ok::<(), randgraph_layout::LayoutError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Layout {
    positions: Vec<Point>,
}

impl Layout {
    /// Places `vertex_count` vertices evenly on a circle.
    ///
    /// The circle is centred in `viewport` with a radius of a third of the
    /// shorter side. Vertex `i` sits at angle `i * 2π / vertex_count`,
    /// measured clockwise from the positive x axis in screen coordinates.
    #[must_use]
    pub fn circular(vertex_count: usize, viewport: Viewport) -> Self {
        if vertex_count == 0 {
            return Self::default();
        }
        let center = viewport.center();
        let radius = f64::from(viewport.width().min(viewport.height()) / 3);
        // Precision loss only matters beyond 2^53 vertices.
        let step = TAU / vertex_count as f64;
        let positions = (0..vertex_count)
            .map(|index| {
                let angle = step * index as f64;
                let offset =
                    Point::new(truncate(radius * angle.cos()), truncate(radius * angle.sin()));
                center + offset
            })
            .collect();
        Self { positions }
    }

    /// Returns the number of positioned vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether the layout holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns all positions in vertex order.
    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Returns the position of `vertex`.
    ///
    /// # Errors
    /// Returns [`LayoutError::VertexOutOfRange`] when the vertex has no
    /// position.
    pub fn position(&self, vertex: VertexId) -> Result<Point, LayoutError> {
        self.positions
            .get(vertex)
            .copied()
            .ok_or(LayoutError::VertexOutOfRange {
                vertex,
                vertex_count: self.positions.len(),
            })
    }

    /// Moves `vertex` to `point`.
    ///
    /// # Errors
    /// Returns [`LayoutError::VertexOutOfRange`] when the vertex has no
    /// position.
    pub fn set_position(&mut self, vertex: VertexId, point: Point) -> Result<(), LayoutError> {
        let vertex_count = self.positions.len();
        let slot = self
            .positions
            .get_mut(vertex)
            .ok_or(LayoutError::VertexOutOfRange {
                vertex,
                vertex_count,
            })?;
        *slot = point;
        Ok(())
    }

    /// Returns the lowest-indexed vertex within [`PICK_RADIUS`] of `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<VertexId> {
        let limit = i64::from(PICK_RADIUS) * i64::from(PICK_RADIUS);
        self.positions
            .iter()
            .position(|&position| position.distance_squared(point) <= limit)
    }

    /// Returns the drawable segment for the edge `from -> to`.
    ///
    /// Both ends are pulled in by [`EDGE_INSET`] along the edge direction so
    /// lines stop at the vertex outlines. Coincident endpoints yield a
    /// segment pointing along the positive x axis.
    ///
    /// # Errors
    /// Returns [`LayoutError::VertexOutOfRange`] when either endpoint has no
    /// position.
    pub fn edge_segment(&self, from: VertexId, to: VertexId) -> Result<Segment, LayoutError> {
        let start = self.position(from)?;
        let end = self.position(to)?;
        let angle =
            (f64::from(end.y) - f64::from(start.y)).atan2(f64::from(end.x) - f64::from(start.x));
        let inset = Point::new(
            truncate(EDGE_INSET * angle.cos()),
            truncate(EDGE_INSET * angle.sin()),
        );
        Ok(Segment {
            start: start + inset,
            end: end - inset,
        })
    }

    /// Returns the arrowhead for the directed edge `from -> to`.
    ///
    /// The first point is the tip, placed at the end of
    /// [`edge_segment`](Self::edge_segment). The other two are barbs of
    /// [`ARROW_LENGTH`] pixels swept back from the tip at ±30° to the
    /// segment.
    ///
    /// # Errors
    /// Returns [`LayoutError::VertexOutOfRange`] when either endpoint has no
    /// position.
    ///
    /// # Examples
    /// ```
    /// use randgraph_layout::{Layout, Point, Viewport};
    ///
    /// let layout = Layout::circular(4, Viewport::new(300, 300));
    /// let [tip, _, _] = layout.arrow_head(2, 0)?;
    /// assert_eq!(tip, Point::new(235, 150));
    /// # Ok::<(), randgraph_layout::LayoutError>(())
    /// ```
    pub fn arrow_head(&self, from: VertexId, to: VertexId) -> Result<[Point; 3], LayoutError> {
        let Segment { start, end } = self.edge_segment(from, to)?;
        let angle =
            (f64::from(end.y) - f64::from(start.y)).atan2(f64::from(end.x) - f64::from(start.x));
        let barb = |theta: f64| {
            end - Point::new(
                truncate(ARROW_LENGTH * theta.cos()),
                truncate(ARROW_LENGTH * theta.sin()),
            )
        };
        Ok([end, barb(angle - FRAC_PI_6), barb(angle + FRAC_PI_6)])
    }
}

/// Truncates towards zero, saturating at the `i32` bounds.
fn truncate(value: f64) -> i32 {
    // `as` saturates for floats and maps NaN to zero.
    value as i32
}
