//! TUI Raster (workspace facade crate).
//!
//! Re-exports the engine crates under one roof as
//! `tui_raster::{core, term, types}`; the implementation lives in dedicated
//! crates under `crates/`.

pub mod config;

pub use tui_raster_core as core;
pub use tui_raster_term as term;
pub use tui_raster_types as types;
