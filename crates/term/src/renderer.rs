//! Renderer: turns a framebuffer into printable rows.
//!
//! Every cell becomes one marker: the cell's SGR background code, the cell's
//! glyph (spaces), then the fixed black background marker. For a red cell at
//! the default width that is `ESC[41m` + `" "` + `ESC[40m`. Rendering only
//! reads the framebuffer.

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::Framebuffer;
use crate::types::Color;

/// Marker emitted after every cell so the next cell starts from black.
pub const BACKGROUND_MARKER: &str = "\x1b[40m";

/// Marker for a single-column cell of `color`.
pub fn cell_marker(color: Color) -> String {
    Renderer::default().marker(color)
}

/// Render `fb` with the default single-column cells.
pub fn frame(fb: &Framebuffer) -> Vec<String> {
    Renderer::default().frame(fb)
}

/// Text renderer for a framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// Terminal columns per framebuffer cell.
    cell_w: u16,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { cell_w: 1 }
    }
}

impl Renderer {
    /// A `cell_w` of 2 compensates for the usual terminal glyph aspect ratio.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn marker(&self, color: Color) -> String {
        let glyph = " ".repeat(self.cell_w as usize);
        format!("\x1b[{}m{}{}", color.code(), glyph, BACKGROUND_MARKER)
    }

    /// One string per framebuffer row, top to bottom.
    pub fn frame(&self, fb: &Framebuffer) -> Vec<String> {
        fb.render_rows().map(|row| self.row(row)).collect()
    }

    fn row(&self, row: &[Color]) -> String {
        row.iter().map(|c| self.marker(*c)).collect()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_frame_into(renderer: &Renderer, fb: &Framebuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    encode_rows_into(&renderer.frame(fb), out)
}

/// Encode already rendered rows, starting at the top-left corner.
pub fn encode_rows_into(rows: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    for (y, row) in rows.iter().enumerate() {
        out.queue(Print(row))?;
        if y + 1 < rows.len() {
            out.queue(Print("\r\n"))?;
        }
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}
