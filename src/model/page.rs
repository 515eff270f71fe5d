//! Page-level types.

use serde::{Deserialize, Serialize};

/// The role a page plays in the assembled report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Cover page with banner, title and date
    Cover,
    /// Table of contents
    Toc,
    /// One page per non-title section
    Section,
}

/// Physical page geometry in points (1 point = 1/72 inch).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Margin on every side
    pub margin: f32,
}

impl PageSetup {
    /// A4 with 60pt margins.
    pub fn a4() -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin: 60.0,
        }
    }

    /// US Letter with 60pt margins.
    pub fn letter() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 60.0,
        }
    }

    /// Set the margin.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Width available between the left and right margins.
    pub fn content_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}
