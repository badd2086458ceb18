//! Shape module - rasterizable geometry
//!
//! A [`Shape`] is one of three closed variants. Each variant knows which cells
//! it occupies; painting and erasing share one path that validates the whole
//! shape against the framebuffer before writing a single cell.
//!
//! Rasterization never touches the stored geometry: cells are computed from
//! copies of the endpoints/radii, so [`Shape::occupied_cells`] can be called
//! repeatedly and always returns the same sequence.

use arrayvec::ArrayVec;

use crate::framebuffer::Framebuffer;
use crate::types::{Color, Point, Result};

/// Inclusive bounding box of the cells a shape occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// Filled axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub origin: Point,
    pub width: u16,
    pub height: u16,
    pub color: Color,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: u16, height: u16, color: Color) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
            color,
        }
    }

    /// A zero-width or zero-height rectangle occupies nothing.
    ///
    /// A corner past `i32::MAX` is clamped there, which still lies outside
    /// every framebuffer.
    pub fn bounds(&self) -> Option<Bounds> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(Bounds {
            min: self.origin,
            max: Point::new(
                self.origin.x.saturating_add(self.width as i32 - 1),
                self.origin.y.saturating_add(self.height as i32 - 1),
            ),
        })
    }

    /// Row-major cells of the rectangle.
    ///
    /// Cells past `i32::MAX` cannot be addressed and are left out.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let Rectangle { origin, width, height, .. } = *self;
        (0..height as i64).flat_map(move |dy| {
            (0..width as i64).filter_map(move |dx| offset(origin, dx, dy))
        })
    }
}

/// `origin + (dx, dy)`, or `None` if either coordinate leaves `i32`.
fn offset(origin: Point, dx: i64, dy: i64) -> Option<Point> {
    let x = i32::try_from(origin.x as i64 + dx).ok()?;
    let y = i32::try_from(origin.y as i64 + dy).ok()?;
    Some(Point::new(x, y))
}

/// Straight line between two endpoints, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl Line {
    pub fn new(start: impl Into<Point>, end: impl Into<Point>, color: Color) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            color,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            max: Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        }
    }

    /// Bresenham walk over the line.
    ///
    /// The walk always starts from the endpoint with the smaller (x, y), so a
    /// line and its reverse occupy the same cells.
    pub fn cells(&self) -> LineCells {
        let (from, to) = if (self.start.x, self.start.y) <= (self.end.x, self.end.y) {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        LineCells::new(from, to)
    }
}

/// Lazy Bresenham iterator. Owns its own cursor; the line is never mutated.
#[derive(Debug, Clone)]
pub struct LineCells {
    x: i32,
    y: i32,
    end: Point,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LineCells {
    fn new(from: Point, to: Point) -> Self {
        let dx = (to.x as i64 - from.x as i64).abs();
        let dy = (to.y as i64 - from.y as i64).abs();
        Self {
            x: from.x,
            y: from.y,
            end: to,
            dx,
            dy,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LineCells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }
        let current = Point::new(self.x, self.y);
        if current == self.end {
            self.done = true;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Outline of an axis-aligned ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub center: Point,
    pub rx: u16,
    pub ry: u16,
    pub color: Color,
}

impl Ellipse {
    pub fn new(center: impl Into<Point>, rx: u16, ry: u16, color: Color) -> Self {
        Self {
            center: center.into(),
            rx,
            ry,
            color,
        }
    }

    pub fn bounds(&self) -> Bounds {
        let (rx, ry) = (self.rx as i32, self.ry as i32);
        Bounds {
            min: Point::new(self.center.x.saturating_sub(rx), self.center.y.saturating_sub(ry)),
            max: Point::new(self.center.x.saturating_add(rx), self.center.y.saturating_add(ry)),
        }
    }

    /// Midpoint ellipse outline, each cell emitted once.
    pub fn cells(&self) -> Vec<Point> {
        let mut out = Vec::new();

        if self.ry == 0 {
            // Flat ellipse: the major axis itself.
            let rx = self.rx as i64;
            out.extend((-rx..=rx).filter_map(|dx| offset(self.center, dx, 0)));
            return out;
        }

        // Decision variables are kept at 4x scale so everything stays integral;
        // at full u16 radii the products need more than 64 bits.
        let rx2 = (self.rx as i128) * (self.rx as i128);
        let ry2 = (self.ry as i128) * (self.ry as i128);
        let mut x: i128 = 0;
        let mut y: i128 = self.ry as i128;
        let mut px: i128 = 0;
        let mut py: i128 = 2 * rx2 * y;

        // Region 1: slope magnitude below 1, step x every iteration.
        let mut d1 = 4 * ry2 - 4 * rx2 * y + rx2;
        while px < py {
            out.extend(self.mirrored(x, y));
            x += 1;
            px += 2 * ry2;
            if d1 < 0 {
                d1 += 4 * (px + ry2);
            } else {
                y -= 1;
                py -= 2 * rx2;
                d1 += 4 * (px - py + ry2);
            }
        }

        // Region 2: step y every iteration down to the major axis.
        let mut d2 = ry2 * (2 * x + 1) * (2 * x + 1) + 4 * rx2 * (y - 1) * (y - 1) - 4 * rx2 * ry2;
        while y >= 0 {
            out.extend(self.mirrored(x, y));
            y -= 1;
            py -= 2 * rx2;
            if d2 > 0 {
                d2 += 4 * (rx2 - py);
            } else {
                x += 1;
                px += 2 * ry2;
                d2 += 4 * (px - py + rx2);
            }
        }

        out
    }

    /// The four reflections of a first-quadrant offset, without repeats on
    /// the axes. Reflections that leave `i32` are dropped.
    fn mirrored(&self, x: i128, y: i128) -> ArrayVec<Point, 4> {
        // Offsets never exceed the u16 radii.
        let (x, y) = (x as i64, y as i64);
        let mut points = ArrayVec::new();
        for (mx, my) in [(1, 1), (-1, 1), (1, -1), (-1, -1)] {
            let Some(p) = offset(self.center, mx * x, my * y) else {
                continue;
            };
            if !points.contains(&p) {
                points.push(p);
            }
        }
        points
    }
}

/// A drawable shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rectangle),
    Line(Line),
    Ellipse(Ellipse),
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Rectangle(r) => r.color,
            Shape::Line(l) => l.color,
            Shape::Ellipse(e) => e.color,
        }
    }

    /// Same geometry in a different color.
    pub fn with_color(mut self, color: Color) -> Self {
        match &mut self {
            Shape::Rectangle(r) => r.color = color,
            Shape::Line(l) => l.color = color,
            Shape::Ellipse(e) => e.color = color,
        }
        self
    }

    /// Same shape moved by (dx, dy), or `None` if an anchor point would
    /// leave the `i32` coordinate range.
    pub fn translated(mut self, dx: i32, dy: i32) -> Option<Self> {
        let shift = |p: &mut Point| -> Option<()> {
            *p = offset(*p, dx as i64, dy as i64)?;
            Some(())
        };
        match &mut self {
            Shape::Rectangle(r) => shift(&mut r.origin)?,
            Shape::Line(l) => {
                shift(&mut l.start)?;
                shift(&mut l.end)?;
            }
            Shape::Ellipse(e) => shift(&mut e.center)?,
        }
        Some(self)
    }

    /// Inclusive bounding box, `None` for shapes that occupy no cells.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Shape::Rectangle(r) => r.bounds(),
            Shape::Line(l) => Some(l.bounds()),
            Shape::Ellipse(e) => Some(e.bounds()),
        }
    }

    /// Every cell the shape covers. Pure: no side effects, same result on
    /// every call.
    pub fn occupied_cells(&self) -> Vec<Point> {
        match self {
            Shape::Rectangle(r) => r.cells().collect(),
            Shape::Line(l) => l.cells().collect(),
            Shape::Ellipse(e) => e.cells(),
        }
    }

    /// Check the whole shape fits inside `fb`.
    ///
    /// The bounding box is checked first so far-out geometry is rejected
    /// without walking it; once the box is inside the grid the walk is
    /// bounded by the grid size.
    pub fn validate(&self, fb: &Framebuffer) -> Result<()> {
        let Some(Bounds { min, max }) = self.bounds() else {
            return Ok(());
        };
        for corner in [min, max] {
            if !fb.contains(corner.x, corner.y) {
                return Err(fb.out_of_bounds(corner.x, corner.y));
            }
        }
        match self
            .occupied_cells()
            .into_iter()
            .find(|p| !fb.contains(p.x, p.y))
        {
            Some(p) => Err(fb.out_of_bounds(p.x, p.y)),
            None => Ok(()),
        }
    }

    /// Write `color` into every occupied cell, or nothing at all if any cell
    /// falls outside the framebuffer.
    pub fn paint(&self, fb: &mut Framebuffer, color: Color) -> Result<()> {
        self.validate(fb)?;
        for p in self.occupied_cells() {
            fb.set(p.x, p.y, color)?;
        }
        Ok(())
    }

    /// Restore every occupied cell to `background`. Erasing twice has the
    /// same effect as erasing once.
    pub fn erase(&self, fb: &mut Framebuffer, background: Color) -> Result<()> {
        self.paint(fb, background)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<Line> for Shape {
    fn from(l: Line) -> Self {
        Shape::Line(l)
    }
}

impl From<Ellipse> for Shape {
    fn from(e: Ellipse) -> Self {
        Shape::Ellipse(e)
    }
}
