//! Output sinks: where rendered frames go.
//!
//! The engine never clears a screen or prints on its own. A [`FrameSink`]
//! supplies both capabilities, so the same presentation path drives a real
//! terminal or an in-memory recorder in tests.

use anyhow::Result;

use crate::core::Framebuffer;
use crate::renderer::Renderer;

/// Consumer of rendered frames.
pub trait FrameSink {
    /// Clear whatever the sink currently shows.
    fn clear_output(&mut self) -> Result<()>;

    /// Show one frame, rows top to bottom.
    fn emit(&mut self, rows: &[String]) -> Result<()>;
}

/// Clear the sink and show `fb` as a single frame.
pub fn present(renderer: &Renderer, fb: &Framebuffer, sink: &mut impl FrameSink) -> Result<()> {
    sink.clear_output()?;
    sink.emit(&renderer.frame(fb))
}

/// Records frames instead of printing them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    frames: Vec<Vec<String>>,
    clears: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<String>] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&[String]> {
        self.frames.last().map(|f| f.as_slice())
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl FrameSink for MemorySink {
    fn clear_output(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn emit(&mut self, rows: &[String]) -> Result<()> {
        self.frames.push(rows.to_vec());
        Ok(())
    }
}
