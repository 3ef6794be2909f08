//! The canvas: a fixed grid of cells plus the drawing operations on it.
//!
//! Coordinates are 1-indexed, `x` selects the column and `y` the row.
//! Drawing only ever turns cells on; nothing clears a marked cell.

use std::fmt::{self, Write};

use crate::error::{InvalidArgument, Result};
use crate::geometry::{Point, Rect, Segment};

// ════════════════════════════════════════════════════════════════════
// Cells
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked,
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked => 'x',
        }
    }
}

// ════════════════════════════════════════════════════════════════════
// Canvas
// ════════════════════════════════════════════════════════════════════

/// Largest number of cells a canvas may hold (a 4096x4096 grid).
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: i32,
    height: i32,
    /// Indexed `[row][column]`, both 0-based.
    grid: Vec<Vec<Cell>>,
}

impl Canvas {
    /// Create a blank canvas. Both dimensions must be at least 1 and the
    /// grid may hold at most [`MAX_CELLS`] cells.
    pub fn create(width: i32, height: i32) -> Result<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        let grid = allocate_grid(width, height)
            .inspect_err(|e| tracing::debug!(%e, "canvas rejected"))?;

        tracing::debug!(width, height, "canvas created");

        Ok(Self {
            width,
            height,
            grid,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The cell at `(x, y)`, or `None` when the address is off the canvas.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.contains(x, y) {
            return None;
        }
        Some(self.grid[(y - 1) as usize][(x - 1) as usize])
    }

    pub fn is_marked(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Marked)
    }

    pub fn marked_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| **cell == Cell::Marked)
            .count()
    }

    /// Draw a horizontal or vertical line between two endpoints, inclusive.
    ///
    /// The endpoints may come in either order. Equal endpoints mark a single
    /// cell. Diagonal lines and off-canvas endpoints are rejected.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        let segment = self
            .line_segment(x1, y1, x2, y2)
            .inspect_err(|e| tracing::debug!(%e, "line rejected"))?;

        self.mark(segment);
        tracing::debug!(?segment, "line drawn");
        Ok(())
    }

    /// Draw the outline of the rectangle spanned by two opposite corners.
    ///
    /// Corners may be given in any order. A rectangle that collapses to a
    /// line or a point is drawn as that line or point.
    pub fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<()> {
        let rect = self
            .outline(x1, y1, x2, y2)
            .inspect_err(|e| tracing::debug!(%e, "rectangle rejected"))?;

        for edge in rect.edges() {
            self.mark(edge);
        }
        tracing::debug!(?rect, "rectangle drawn");
        Ok(())
    }

    /// Render the canvas as bordered text, without a trailing newline.
    pub fn print(&self) -> String {
        self.to_string()
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    fn locate(&self, x: i32, y: i32) -> Result<Point> {
        if self.contains(x, y) {
            Ok(Point::new(x, y))
        } else {
            Err(InvalidArgument::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn line_segment(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Segment> {
        let from = self.locate(x1, y1)?;
        let to = self.locate(x2, y2)?;
        Segment::between(from, to).ok_or(InvalidArgument::Diagonal { x1, y1, x2, y2 })
    }

    fn outline(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Result<Rect> {
        let a = self.locate(x1, y1)?;
        let b = self.locate(x2, y2)?;
        Ok(Rect::from_corners(a, b))
    }

    /// Callers guarantee every point on `segment` is on the canvas.
    fn mark(&mut self, segment: Segment) {
        for p in segment.points() {
            self.grid[(p.y - 1) as usize][(p.x - 1) as usize] = Cell::Marked;
        }
    }
}

fn check_dimension(name: &'static str, value: i32) -> Result<()> {
    if value < 1 {
        tracing::debug!(name, value, "dimension rejected");
        return Err(InvalidArgument::Dimension { name, value });
    }
    Ok(())
}

/// Dimensions are already known to be positive.
fn allocate_grid(width: i32, height: i32) -> Result<Vec<Vec<Cell>>> {
    let too_large = || InvalidArgument::TooLarge { width, height };
    let (columns, rows) = (width as usize, height as usize);

    match columns.checked_mul(rows) {
        Some(cells) if cells <= MAX_CELLS => {}
        _ => return Err(too_large()),
    }

    let mut grid = Vec::new();
    grid.try_reserve_exact(rows).map_err(|_| too_large())?;
    for _ in 0..rows {
        let mut row = Vec::new();
        row.try_reserve_exact(columns).map_err(|_| too_large())?;
        row.resize(columns, Cell::Empty);
        grid.push(row);
    }
    Ok(grid)
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(self.width as usize + 2);

        f.write_str(&border)?;
        for row in &self.grid {
            f.write_str("\n|")?;
            for cell in row {
                f.write_char(cell.glyph())?;
            }
            f.write_char('|')?;
        }
        f.write_char('\n')?;
        f.write_str(&border)
    }
}
