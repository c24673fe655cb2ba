//! Integer pixel geometry shared by layout and interaction.

use std::ops::{Add, Sub};

/// A pixel coordinate in the drawing area.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards.
    pub x: i32,
    /// Vertical coordinate, growing downwards.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the squared Euclidean distance to `other`.
    ///
    /// # Examples
    /// ```
    /// use randgraph_layout::Point;
    ///
    /// assert_eq!(Point::new(0, 0).distance_squared(Point::new(3, 4)), 25);
    /// ```
    #[must_use]
    pub fn distance_squared(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Size of the drawing area in pixels.
///
/// Negative dimensions are clamped to zero.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Viewport {
    width: i32,
    height: i32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl Viewport {
    /// Width of [`Viewport::default`].
    pub const DEFAULT_WIDTH: i32 = 800;

    /// Height of [`Viewport::default`].
    pub const DEFAULT_HEIGHT: i32 = 600;

    /// Creates a viewport.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub const fn width(self) -> i32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// Returns the centre of the drawing area.
    #[must_use]
    pub const fn center(self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}

/// A straight line between two points.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Segment {
    /// Start of the segment.
    pub start: Point,
    /// End of the segment.
    pub end: Point,
}

impl Segment {
    /// Returns the midpoint, where edge weights are usually labelled.
    ///
    /// # Examples
    /// ```
    /// use randgraph_layout::{Point, Segment};
    ///
    /// let segment = Segment { start: Point::new(0, 0), end: Point::new(10, 4) };
    /// assert_eq!(segment.midpoint(), Point::new(5, 2));
    /// ```
    #[must_use]
    pub fn midpoint(self) -> Point {
        // Halving before adding keeps the sum inside `i32`.
        let mid = |a: i32, b: i32| a / 2 + b / 2 + (a % 2 + b % 2) / 2;
        Point::new(mid(self.start.x, self.end.x), mid(self.start.y, self.end.y))
    }
}
