//! Core raster engine - pure, deterministic, and testable
//!
//! This crate holds the cell grid, the shapes that draw into it and the
//! registry that tracks them. It has **zero dependencies** on terminals or
//! other I/O and never logs; every failure is returned to the caller as a
//! [`RasterError`](types::RasterError).
//!
//! # Module Structure
//!
//! - [`color`]: color token resolution
//! - [`framebuffer`]: height x width grid with a single bounds-checked write path
//! - [`shape`]: rectangle, Bresenham line and midpoint ellipse rasterization
//! - [`registry`]: ordered live shapes with dense, position-based handles
//!
//! # Guarantees
//!
//! - **All-or-nothing**: a shape that does not fit writes no cells; a rejected
//!   insert issues no handle; a rejected update changes nothing.
//! - **Pure rasterization**: occupied cells are a function of geometry only.
//! - **Dense handles**: after any removal, every handle equals its position.
//!
//! # Example
//!
//! ```
//! use tui_raster_core::{resolve_color, Framebuffer, ObjectRegistry, Rectangle};
//! use tui_raster_types::Color;
//!
//! let black = resolve_color("black").unwrap();
//! let mut fb = Framebuffer::new(10, 10, black).unwrap();
//! let mut registry = ObjectRegistry::new(black);
//!
//! let red = resolve_color("red").unwrap();
//! let handle = registry
//!     .insert(&mut fb, Rectangle::new(2, 2, 3, 3, red).into())
//!     .unwrap();
//! assert_eq!(fb.get(3, 3), Some(Color::Red));
//!
//! registry.remove(&mut fb, handle).unwrap();
//! assert_eq!(fb.get(3, 3), Some(Color::Black));
//! ```

pub mod color;
pub mod framebuffer;
pub mod registry;
pub mod shape;

pub use tui_raster_types as types;

// Re-export commonly used types for convenience
pub use color::{resolve_color, resolve_color_or_default};
pub use framebuffer::Framebuffer;
pub use registry::{Handle, ObjectRegistry, Placed};
pub use shape::{Bounds, Ellipse, Line, LineCells, Rectangle, Shape};
