//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used by the raster engine and the
//! terminal layer. Everything here is pure data with no I/O, so it can be used
//! from the core, the renderer, tests and benchmarks alike.
//!
//! # Palette
//!
//! Colors come from a fixed eight-entry palette. Each entry carries the SGR
//! background code the terminal layer emits for it:
//!
//! | Name | Code |
//! |------|------|
//! | `black` | 40 |
//! | `red` | 41 |
//! | `green` | 42 |
//! | `yellow` | 43 |
//! | `blue` | 44 |
//! | `magenta` | 45 |
//! | `cyan` | 46 |
//! | `white` | 47 |
//!
//! # Examples
//!
//! ```
//! use tui_raster_types::{Color, RasterError};
//!
//! // Names are exact and case-sensitive.
//! assert_eq!(Color::from_name("red"), Some(Color::Red));
//! assert_eq!(Color::from_name("Red"), None);
//!
//! // Raw codes must already be inside the palette range.
//! assert_eq!(Color::from_code(44), Some(Color::Blue));
//! assert_eq!(Color::from_code(99), None);
//!
//! let err = RasterError::Unrecognized { token: "purple".to_string() };
//! assert_eq!(err.to_string(), "unrecognized color token \"purple\"");
//! ```

use thiserror::Error;

/// Lowest SGR background code in the palette (black).
pub const COLOR_CODE_MIN: u8 = 40;

/// Highest SGR background code in the palette (white).
pub const COLOR_CODE_MAX: u8 = 47;

/// Number of entries in the palette.
pub const PALETTE_LEN: usize = 8;

/// Result alias used by every fallible engine operation.
pub type Result<T> = std::result::Result<T, RasterError>;

/// The eight palette colors a cell can hold.
///
/// A `Color` is always one of these entries; there is no "unresolved" value.
/// Token resolution fails before a `Color` is ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// All palette entries in code order.
    pub const ALL: [Color; PALETTE_LEN] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Parse a palette name (exact, case-sensitive match)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raster_types::Color;
    ///
    /// assert_eq!(Color::from_name("cyan"), Some(Color::Cyan));
    /// assert_eq!(Color::from_name("CYAN"), None);
    /// assert_eq!(Color::from_name("purple"), None);
    /// ```
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Look up a raw SGR background code (40..=47)
    pub fn from_code(code: u8) -> Option<Self> {
        if !(COLOR_CODE_MIN..=COLOR_CODE_MAX).contains(&code) {
            return None;
        }
        Some(Self::ALL[(code - COLOR_CODE_MIN) as usize])
    }

    /// SGR background code for this color
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raster_types::Color;
    ///
    /// assert_eq!(Color::Black.code(), 40);
    /// assert_eq!(Color::White.code(), 47);
    /// ```
    pub fn code(&self) -> u8 {
        match self {
            Color::Black => 40,
            Color::Red => 41,
            Color::Green => 42,
            Color::Yellow => 43,
            Color::Blue => 44,
            Color::Magenta => 45,
            Color::Cyan => 46,
            Color::White => 47,
        }
    }

    /// Palette name
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

/// An integer grid coordinate. `x` grows right, `y` grows down.
///
/// Coordinates are signed so geometry that starts left of or above the
/// framebuffer can be described and then rejected by bounds validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Every recoverable failure the engine reports.
///
/// None of these is fatal: the operation that returned it left all state
/// exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("unrecognized color token {token:?}")]
    Unrecognized { token: String },

    #[error("invalid framebuffer dimensions {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },

    #[error("cell ({x}, {y}) is outside the {width}x{height} framebuffer")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u16,
        height: u16,
    },

    #[error("no shape at handle {handle} (registry holds {len})")]
    InvalidHandle { handle: usize, len: usize },
}
