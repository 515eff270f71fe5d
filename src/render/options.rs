//! Rendering options and configuration.

use crate::model::{Color, PageSetup};

use super::SpanRule;

/// Options for assembling and rendering a report.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Physical page geometry
    pub page: PageSetup,

    /// Body text size in points
    pub base_font_size: f32,

    /// Fixed color palette
    pub palette: Palette,

    /// Vertical spacing between elements
    pub spacing: Spacing,

    /// Banner text at the top of the cover page
    pub banner: String,

    /// Title used when the text has no title section
    pub default_title: String,

    /// Warning shown on the cover when fallback content was used
    pub fallback_notice: String,

    /// chrono format string for the cover date
    pub date_format: String,

    /// Glyph run that opens every bullet line
    pub bullet_glyph: String,

    /// Stamp page numbers on every page after the first
    pub page_numbers: bool,

    /// Ordered inline span rules; the earliest match on a line wins
    pub span_rules: Vec<SpanRule>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageSetup) -> Self {
        self.page = page;
        self
    }

    /// Set the body font size.
    pub fn with_base_font_size(mut self, size: f32) -> Self {
        self.base_font_size = size;
        self
    }

    /// Set the cover banner.
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = banner.into();
        self
    }

    /// Set the default title.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the cover date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Set the bullet glyph.
    pub fn with_bullet_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.bullet_glyph = glyph.into();
        self
    }

    /// Enable or disable page-number footers.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.page_numbers = enabled;
        self
    }

    /// Replace the inline span rules.
    pub fn with_span_rules(mut self, rules: Vec<SpanRule>) -> Self {
        self.span_rules = rules;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page: PageSetup::a4(),
            base_font_size: 12.0,
            palette: Palette::default(),
            spacing: Spacing::default(),
            banner: "Academic Report".to_string(),
            default_title: "Generated Report".to_string(),
            fallback_notice: "Note: Using fallback content".to_string(),
            date_format: "%-m/%-d/%Y".to_string(),
            bullet_glyph: "\u{2022} ".to_string(),
            page_numbers: true,
            span_rules: SpanRule::defaults(),
        }
    }
}

/// Report color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Cover banner
    pub banner: Color,
    /// Cover title
    pub title: Color,
    /// Cover date line
    pub date: Color,
    /// Fallback warning
    pub warning: Color,
    /// TOC heading, TOC entries and section headings
    pub heading: Color,
    /// Body text
    pub text: Color,
    /// Page-number footer
    pub footer: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            banner: Color::rgb(0x2c, 0x3e, 0x50),
            title: Color::rgb(0x34, 0x49, 0x5e),
            date: Color::rgb(0x7f, 0x8c, 0x8d),
            warning: Color::rgb(0xe7, 0x4c, 0x3c),
            heading: Color::rgb(0x2c, 0x3e, 0x50),
            text: Color::rgb(0x2c, 0x3e, 0x50),
            footer: Color::rgb(0x95, 0xa5, 0xa6),
        }
    }
}

/// Vertical spacing in line units.
///
/// Magnitudes are presentation details; bullets keep a larger gap than
/// ordinary line breaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spacing {
    /// After the cover banner
    pub after_banner: f32,
    /// After the cover title
    pub after_title: f32,
    /// After the cover date
    pub after_date: f32,
    /// After the TOC heading
    pub after_toc_heading: f32,
    /// After each TOC entry
    pub after_toc_entry: f32,
    /// After a section heading
    pub after_section_heading: f32,
    /// Before a bullet line
    pub before_bullet: f32,
    /// After a bullet line
    pub after_bullet: f32,
    /// After an ordinary body line
    pub after_line: f32,
    /// Between paragraphs
    pub between_paragraphs: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            after_banner: 1.0,
            after_title: 3.0,
            after_date: 1.0,
            after_toc_heading: 2.0,
            after_toc_entry: 0.8,
            after_section_heading: 1.5,
            before_bullet: 0.2,
            after_bullet: 0.4,
            after_line: 0.5,
            between_paragraphs: 0.5,
        }
    }
}
