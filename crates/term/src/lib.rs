//! Terminal output layer for the raster engine.
//!
//! Rendering is split in two: [`renderer`] turns a framebuffer into text rows
//! (pure, unit-testable), and a [`FrameSink`] decides where those rows go.
//! [`TerminalSink`] drives a real terminal through crossterm;
//! [`MemorySink`] records frames for tests.

pub mod renderer;
pub mod sink;
pub mod terminal;

pub use tui_raster_core as core;
pub use tui_raster_types as types;

pub use renderer::{
    cell_marker, encode_frame_into, encode_rows_into, frame, Renderer, BACKGROUND_MARKER,
};
pub use sink::{present, FrameSink, MemorySink};
pub use terminal::{encode_restore_into, encode_setup_into, TerminalSink};
