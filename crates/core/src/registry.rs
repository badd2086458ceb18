//! Object registry - live shapes addressed by position
//!
//! The registry owns the ordered list of shapes that are currently drawn.
//! A shape's handle is its index in that list. Handles are dense: after a
//! removal every later shape shifts down by one and its handle is rewritten,
//! so a handle read from the registry always matches the current layout.
//!
//! The registry never owns the framebuffer; every mutating call borrows it.

use std::slice;

use crate::framebuffer::Framebuffer;
use crate::shape::Shape;
use crate::types::{Color, RasterError, Result};

/// Position of a shape inside the registry.
pub type Handle = usize;

/// A shape together with the handle the registry assigned it.
///
/// The handle is `None` once the shape has been removed; a detached shape
/// no longer owns any cells, so erasing it writes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placed {
    handle: Option<Handle>,
    shape: Shape,
}

impl Placed {
    pub fn handle(&self) -> Option<Handle> {
        self.handle
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Erase the shape's cells to `background`; a no-op once removed.
    pub fn erase(&self, fb: &mut Framebuffer, background: Color) -> Result<()> {
        match self.handle {
            Some(_) => self.shape.erase(fb, background),
            None => Ok(()),
        }
    }
}

/// Ordered collection of live shapes.
#[derive(Debug, Clone)]
pub struct ObjectRegistry {
    background: Color,
    objects: Vec<Placed>,
}

impl ObjectRegistry {
    /// Create an empty registry. Removed shapes are erased to `background`.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            objects: Vec::new(),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn get(&self, handle: Handle) -> Option<&Placed> {
        self.objects.get(handle)
    }

    /// Live shapes in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Placed> {
        self.objects.iter()
    }

    /// Paint `shape` and append it, returning its handle.
    ///
    /// If the shape does not fit, nothing is painted and nothing is added.
    pub fn insert(&mut self, fb: &mut Framebuffer, shape: Shape) -> Result<Handle> {
        // Paint is all-or-nothing, so painting before the push is the rollback.
        shape.paint(fb, shape.color())?;

        let handle = self.objects.len();
        self.objects.push(Placed {
            handle: Some(handle),
            shape,
        });
        Ok(handle)
    }

    /// Erase the shape at `handle` and drop it; later handles shift down by one.
    ///
    /// The returned entry is detached: its handle is `None` and erasing it
    /// again leaves the buffer alone.
    pub fn remove(&mut self, fb: &mut Framebuffer, handle: Handle) -> Result<Placed> {
        self.lookup(handle)?.erase(fb, self.background)?;

        let mut removed = self.objects.remove(handle);
        removed.handle = None;
        for (i, entry) in self.objects.iter_mut().enumerate().skip(handle) {
            entry.handle = Some(i);
        }
        debug_assert!(self.handles_are_dense());

        Ok(removed)
    }

    /// Replace the shape at `handle`, keeping the handle.
    ///
    /// The replacement is validated before the old shape is erased, so a
    /// replacement that does not fit leaves both the buffer and the registry
    /// untouched.
    pub fn update(&mut self, fb: &mut Framebuffer, handle: Handle, shape: Shape) -> Result<()> {
        let old = *self.lookup(handle)?;
        shape.validate(fb)?;

        old.shape.erase(fb, self.background)?;
        shape.paint(fb, shape.color())?;
        self.objects[handle].shape = shape;
        Ok(())
    }

    /// Paint every live shape again in insertion order (last writer wins).
    ///
    /// Useful after a removal cleared cells that an older shape also covered.
    pub fn repaint(&self, fb: &mut Framebuffer) -> Result<()> {
        for placed in &self.objects {
            placed.shape.validate(fb)?;
        }
        for placed in &self.objects {
            placed.shape.paint(fb, placed.shape.color())?;
        }
        Ok(())
    }

    fn lookup(&self, handle: Handle) -> Result<&Placed> {
        self.objects.get(handle).ok_or(RasterError::InvalidHandle {
            handle,
            len: self.objects.len(),
        })
    }

    fn handles_are_dense(&self) -> bool {
        self.objects
            .iter()
            .enumerate()
            .all(|(i, p)| p.handle == Some(i))
    }
}
