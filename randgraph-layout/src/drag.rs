//! Pointer-driven repositioning of a single vertex.

use randgraph_core::VertexId;
use tracing::debug;

use crate::{geometry::Point, layout::Layout};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Grab {
    vertex: VertexId,
    offset: Point,
}

/// Tracks which vertex is being dragged and where it was grabbed.
///
/// A press on a vertex records the offset between the pointer and the
/// vertex centre; every move while the press lasts places the vertex at the
/// pointer minus that offset, so the vertex does not jump to the cursor.
///
/// # Examples
/// ```
/// use randgraph_layout::{DragState, Layout, Point, Viewport};
///
/// let mut layout = Layout::circular(1, Viewport::new(200, 200));
/// let mut drag = DragState::default();
/// assert_eq!(layout.position(0)?, Point::new(166, 100));
/// assert_eq!(drag.press(&layout, Point::new(170, 97)), Some(0));
/// assert!(drag.drag_to(&mut layout, Point::new(50, 50)));
/// assert_eq!(layout.position(0)?, Point::new(46, 53));
/// drag.release();
/// assert!(!drag.drag_to(&mut layout, Point::new(0, 0)));
/// # Ok::<(), randgraph_layout::LayoutError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DragState {
    grab: Option<Grab>,
}

impl DragState {
    /// Starts dragging the vertex under `point`, if any.
    ///
    /// Returns the grabbed vertex. A press that misses every vertex leaves
    /// the current state untouched.
    pub fn press(&mut self, layout: &Layout, point: Point) -> Option<VertexId> {
        let vertex = layout.hit_test(point)?;
        let position = layout.position(vertex).ok()?;
        self.grab = Some(Grab {
            vertex,
            offset: point - position,
        });
        debug!(vertex, "drag started");
        Some(vertex)
    }

    /// Moves the grabbed vertex so it follows `point`.
    ///
    /// Returns `true` when a vertex moved. Moves without an active drag, or
    /// whose vertex no longer exists in `layout`, are ignored.
    pub fn drag_to(&self, layout: &mut Layout, point: Point) -> bool {
        let Some(grab) = self.grab else {
            return false;
        };
        layout.set_position(grab.vertex, point - grab.offset).is_ok()
    }

    /// Ends the drag and returns the vertex that was held.
    pub fn release(&mut self) -> Option<VertexId> {
        let released = self.grab.take().map(|grab| grab.vertex);
        if let Some(vertex) = released {
            debug!(vertex, "drag finished");
        }
        released
    }

    /// Returns the vertex currently held, if any.
    #[must_use]
    pub fn selected(&self) -> Option<VertexId> {
        self.grab.map(|grab| grab.vertex)
    }

    /// Reports whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.grab.is_some()
    }
}
