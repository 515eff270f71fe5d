//! Plain text preview rendering.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{Alignment, PageKind, Run, Stamp};

use super::Sink;

/// Points per character column when converting indents.
const POINTS_PER_COLUMN: f32 = 7.5;

/// Sink that renders a plain text preview of the report.
///
/// Pages are separated by a form feed, continued runs share a line,
/// centered text is padded to the configured width, underlined text gets a
/// rule beneath it, and stamps print at the end of their page.
pub struct TextSink<W: Write> {
    writer: W,
    width: usize,
    line: String,
    line_align: Alignment,
    line_indent: usize,
    line_underlined: bool,
    pending_space: f32,
    page_stamps: Vec<String>,
    started: bool,
}

impl<W: Write> TextSink<W> {
    /// Default column width.
    pub const DEFAULT_WIDTH: usize = 80;

    /// Create a text sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            width: Self::DEFAULT_WIDTH,
            line: String::new(),
            line_align: Alignment::Left,
            line_indent: 0,
            line_underlined: false,
            pending_space: 0.0,
            page_stamps: Vec::new(),
            started: false,
        }
    }

    /// Set the column width used for centering.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    /// Flush any open line and page stamps and return the writer.
    pub fn finish(mut self) -> Result<W> {
        self.end_line()?;
        self.end_page()?;
        self.writer.flush().map_err(Error::sink)?;
        Ok(self.writer)
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text).map_err(Error::sink)
    }

    fn layout(&self, text: &str, align: Alignment, indent: usize) -> String {
        let len = text.chars().count();
        let pad = match align {
            Alignment::Center => self.width.saturating_sub(len) / 2,
            Alignment::Right => self.width.saturating_sub(len),
            Alignment::Left | Alignment::Justify => indent,
        };
        format!("{}{}", " ".repeat(pad), text).trim_end().to_string()
    }

    fn end_line(&mut self) -> Result<()> {
        if self.line.is_empty() {
            self.line_underlined = false;
            return Ok(());
        }
        let line = std::mem::take(&mut self.line);
        let laid_out = self.layout(&line, self.line_align, self.line_indent);
        self.emit(&laid_out)?;
        if self.line_underlined {
            let rule = "-".repeat(line.trim().chars().count());
            let laid_out = self.layout(&rule, self.line_align, self.line_indent);
            self.emit(&laid_out)?;
        }
        self.line_underlined = false;
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        if self.page_stamps.is_empty() {
            return Ok(());
        }
        self.emit("")?;
        for stamp in std::mem::take(&mut self.page_stamps) {
            self.emit(&stamp)?;
        }
        Ok(())
    }
}

impl<W: Write> Sink for TextSink<W> {
    fn start_page(&mut self, _number: u32, _kind: PageKind) -> Result<()> {
        self.end_line()?;
        self.end_page()?;
        if self.started {
            self.emit("\u{c}")?;
        }
        self.started = true;
        self.pending_space = 0.0;
        Ok(())
    }

    fn write_run(&mut self, run: &Run) -> Result<()> {
        if self.line.is_empty() {
            let blank_lines = self.pending_space.round().max(0.0) as usize;
            for _ in 0..blank_lines {
                self.emit("")?;
            }
            self.pending_space = 0.0;
            self.line_align = run.style.align;
            self.line_indent = (run.style.indent / POINTS_PER_COLUMN).round() as usize;
        }
        self.line.push_str(&run.text);
        self.line_underlined |= run.style.underline;
        if !run.continued {
            self.end_line()?;
        }
        Ok(())
    }

    fn space(&mut self, lines: f32) -> Result<()> {
        self.pending_space += lines;
        Ok(())
    }

    fn stamp(&mut self, stamp: &Stamp) -> Result<()> {
        let laid_out = self.layout(&stamp.text, stamp.style.align, 0);
        self.page_stamps.push(laid_out);
        Ok(())
    }
}
