//! Geometry types for chrome layout and painting.

/// A 2D point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A 2D size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from position and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Check if a point is inside this rectangle (right and bottom edges exclusive).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left() && point.x < self.right() && point.y >= self.top() && point.y < self.bottom()
    }
}

/// Integer margins for each edge of a window, in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    /// No margins.
    pub const ZERO: Self = Self::uniform(0);

    /// Create margins from individual edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create margins with the same value on every edge.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Margins reserving `height` at the top edge only.
    #[inline]
    pub const fn top_only(height: i32) -> Self {
        Self::new(0, height, 0, 0)
    }

    /// Whether all edges are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}
