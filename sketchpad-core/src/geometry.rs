//! Points, axis-aligned segments and outline rectangles.
//!
//! These types carry no bounds of their own; the canvas validates points
//! before building shapes out of them.

/// A 1-indexed cell address: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A horizontal or vertical run of cells, inclusive at both ends.
///
/// Fields are private and every constructor sorts the run so
/// `start <= end`, which makes the result independent of the order the
/// endpoints were given in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    axis: Axis,
    /// Row of a horizontal run, column of a vertical one.
    fixed: i32,
    start: i32,
    end: i32,
}

impl Segment {
    fn run(axis: Axis, fixed: i32, a: i32, b: i32) -> Self {
        Self {
            axis,
            fixed,
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Cells `(x1, y)..=(x2, y)`, in either order.
    pub fn horizontal(y: i32, x1: i32, x2: i32) -> Self {
        Self::run(Axis::Horizontal, y, x1, x2)
    }

    /// Cells `(x, y1)..=(x, y2)`, in either order.
    pub fn vertical(x: i32, y1: i32, y2: i32) -> Self {
        Self::run(Axis::Vertical, x, y1, y2)
    }

    /// Joins two points, or returns `None` when they share neither row nor
    /// column. Two equal points give a one-cell horizontal segment.
    pub fn between(a: Point, b: Point) -> Option<Self> {
        if a.y == b.y {
            Some(Self::horizontal(a.y, a.x, b.x))
        } else if a.x == b.x {
            Some(Self::vertical(a.x, a.y, b.y))
        } else {
            None
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn start(&self) -> Point {
        self.at(self.start)
    }

    pub fn end(&self) -> Point {
        self.at(self.end)
    }

    /// Every cell on the segment, from the normalized start to the end.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.start..=self.end).map(move |v| self.at(v))
    }

    fn at(&self, v: i32) -> Point {
        match self.axis {
            Axis::Horizontal => Point::new(v, self.fixed),
            Axis::Vertical => Point::new(self.fixed, v),
        }
    }
}

/// An outline rectangle spanned by two opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Corners may be given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Top, bottom, left and right edges. Degenerate rectangles yield
    /// overlapping edges.
    pub fn edges(&self) -> [Segment; 4] {
        let (min, max) = (self.min, self.max);
        [
            Segment::horizontal(min.y, min.x, max.x),
            Segment::horizontal(max.y, min.x, max.x),
            Segment::vertical(min.x, min.y, max.y),
            Segment::vertical(max.x, min.y, max.y),
        ]
    }
}
