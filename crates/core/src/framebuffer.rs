//! Framebuffer module - the grid of colored cells
//!
//! Cells are stored in a flat vector in row-major order (y * width + x).
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom). Every write goes through [`Framebuffer::set`],
//! which is the only place that turns a coordinate into an index.

use std::slice::Chunks;

use crate::types::{Color, RasterError, Result};

/// Fixed-size grid of palette colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u16,
    height: u16,
    cells: Vec<Color>,
}

impl Framebuffer {
    /// Create a `height` x `width` framebuffer filled with `fill`.
    ///
    /// Fails with [`RasterError::InvalidDimensions`] when either side is zero.
    pub fn new(height: u16, width: u16, fill: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidDimensions { width, height });
        }
        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Check if (x, y) addresses a cell
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).is_some()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Overwrite the cell at (x, y).
    ///
    /// Fails with [`RasterError::OutOfBounds`] and leaves the buffer untouched
    /// when the coordinate is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        match self.idx(x, y) {
            Some(i) => {
                self.cells[i] = color;
                Ok(())
            }
            None => Err(self.out_of_bounds(x, y)),
        }
    }

    /// Overwrite every cell with `color`.
    pub fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }

    /// Rows top to bottom, each left to right.
    ///
    /// Reading never mutates the buffer, so this can be called any number of
    /// times and always yields the current contents.
    pub fn render_rows(&self) -> Chunks<'_, Color> {
        self.cells.chunks(self.width as usize)
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    pub(crate) fn out_of_bounds(&self, x: i32, y: i32) -> RasterError {
        RasterError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}
