//! Page-creation hooks.

use crate::error::Result;
use crate::model::{Alignment, PageSetup, Stamp, TextStyle};

use super::{RenderOptions, Sink};

/// Reacts to page creation.
///
/// Hooks run right after the sink starts a page and receive the 1-based
/// index of that page explicitly.
pub trait PageHook {
    /// Called once for every page the assembler creates.
    fn on_page_created(&mut self, page: u32, sink: &mut dyn Sink) -> Result<()>;
}

/// Stamps `Page N` centered near the bottom of every page after the first.
#[derive(Debug, Clone)]
pub struct PageNumberFooter {
    setup: PageSetup,
    style: TextStyle,
    bottom_offset: f32,
}

impl PageNumberFooter {
    /// Distance from the bottom edge to the footer, in points.
    pub const DEFAULT_BOTTOM_OFFSET: f32 = 30.0;

    /// Footer text size in points.
    pub const FONT_SIZE: f32 = 10.0;

    /// Create a footer from render options.
    pub fn new(options: &RenderOptions) -> Self {
        Self {
            setup: options.page,
            style: TextStyle::new(Self::FONT_SIZE, options.palette.footer).align(Alignment::Center),
            bottom_offset: Self::DEFAULT_BOTTOM_OFFSET,
        }
    }

    /// Set the distance from the bottom edge.
    pub fn with_bottom_offset(mut self, offset: f32) -> Self {
        self.bottom_offset = offset;
        self
    }

    /// Build the stamp for a page.
    pub fn stamp_for(&self, page: u32) -> Stamp {
        Stamp {
            text: format!("Page {}", page),
            style: self.style.clone(),
            x: self.setup.margin,
            y: self.setup.height - self.bottom_offset,
            width: self.setup.content_width(),
        }
    }
}

impl PageHook for PageNumberFooter {
    fn on_page_created(&mut self, page: u32, sink: &mut dyn Sink) -> Result<()> {
        if page <= 1 {
            return Ok(());
        }
        sink.save_state()?;
        sink.stamp(&self.stamp_for(page))?;
        sink.restore_state()
    }
}
