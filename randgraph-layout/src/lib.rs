//! Renderer-agnostic presentation state for randgraph graphs.
//!
//! Positions vertices on a circle, hit-tests pointer coordinates, and drags
//! single vertices around. [`GraphSession`] ties a generated graph to that
//! state and rebuilds it whenever the graph changes. Nothing here mutates a
//! graph; drawing is left to the caller.

mod drag;
mod error;
mod geometry;
mod layout;
mod session;

pub use crate::{
    drag::DragState,
    error::{LayoutError, LayoutErrorCode},
    geometry::{Point, Segment, Viewport},
    layout::{ARROW_LENGTH, EDGE_INSET, Layout, PICK_RADIUS},
    session::{GraphSession, SessionConfig},
};

#[cfg(test)]
mod tests;
