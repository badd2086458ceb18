//! TerminalSink: shows frames on a real terminal.
//!
//! Screen clearing goes through crossterm, so nothing here branches on the
//! host platform. A sink that entered the alternate screen puts the terminal
//! back when it is dropped, so an early `?` return in the draw loop cannot
//! leave the shell in raw mode.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::renderer::encode_rows_into;
use crate::sink::FrameSink;

/// Queue the commands that prepare the screen for raster output.
pub fn encode_setup_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.queue(terminal::DisableLineWrap)?;
    Ok(())
}

/// Queue the commands that undo [`encode_setup_into`] and drop any color
/// left over from the last marker.
pub fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub struct TerminalSink {
    stdout: io::Stdout,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            active: false,
        }
    }

    /// Whether the terminal is currently in raw mode on the alternate screen.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.active {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        // Raw mode is on from here, so Drop must undo it even if the
        // alternate screen could not be entered.
        self.active = true;
        self.buf.clear();
        encode_setup_into(&mut self.buf)?;
        self.write_buf()
    }

    /// Restore the terminal. Does nothing unless `enter` succeeded.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        encode_restore_into(&mut self.buf)?;
        // Leave raw mode even when the restore sequence cannot be written.
        let written = self.write_buf();
        terminal::disable_raw_mode()?;
        written
    }

    fn write_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalSink {
    fn drop(&mut self) {
        if self.active {
            let _ = self.exit();
        }
    }
}

impl FrameSink for TerminalSink {
    fn clear_output(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.write_buf()
    }

    fn emit(&mut self, rows: &[String]) -> Result<()> {
        self.buf.clear();
        encode_rows_into(rows, &mut self.buf)?;
        self.write_buf()
    }
}
