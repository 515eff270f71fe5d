//! # reportdoc
//!
//! Structured report formatting for Rust.
//!
//! This library takes loosely structured report text, such as the output of
//! a text generator, splits it into typed sections and lays it out as a
//! paginated document: a cover page, a table of contents and one page per
//! section, with inline bold markup, bullets and page-number footers.
//!
//! ## Quick Start
//!
//! ```
//! use reportdoc::{to_text, RenderOptions, ReportInput};
//!
//! fn main() -> reportdoc::Result<()> {
//!     let input = ReportInput::new("Title: Tides\nAbstract\nThe sea **rises** and falls.");
//!     let preview = to_text(&input, &RenderOptions::default())?;
//!     assert!(preview.contains("Tides"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section splitting**: Heading detection with a configurable rule table
//! - **Inline markup**: Bold spans and bullet lines become styled runs
//! - **Pluggable sinks**: Render to any [`Sink`], record commands or preview as text
//! - **Page hooks**: Page-number footers on every page after the cover
//! - **Parallel batches**: Uses Rayon to format independent reports concurrently

pub mod error;
pub mod fallback;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Alignment, Color, Command, PageKind, PageSetup, Run, Section, SectionKind, Stamp, TextStyle,
};
pub use parser::{split_sections, HeadingRule, SectionSplitter, SplitOptions};
pub use render::{
    CommandRecorder, DocumentAssembler, JsonFormat, PageHook, RenderOptions, RenderStats,
    ReportContext, Sink, TextSink,
};

use chrono::{DateTime, Utc};
use rayon::prelude::*;

/// One report formatting request.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportInput {
    /// Raw report text
    pub text: String,

    /// The text is placeholder content from a failed upstream generation
    pub used_fallback: bool,

    /// Timestamp printed on the cover
    pub generated_at: DateTime<Utc>,
}

impl ReportInput {
    /// Create a request for `text`, generated now.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            used_fallback: false,
            generated_at: Utc::now(),
        }
    }

    /// Create a fallback request carrying the placeholder report for `topic`.
    pub fn placeholder(topic: &str) -> Self {
        Self::new(fallback::placeholder_report(topic)).with_fallback(true)
    }

    /// Mark the text as fallback content.
    pub fn with_fallback(mut self, used_fallback: bool) -> Self {
        self.used_fallback = used_fallback;
        self
    }

    /// Set the cover timestamp.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// The per-request context handed to the assembler.
    pub fn context(&self) -> ReportContext {
        ReportContext::new(self.generated_at).with_fallback(self.used_fallback)
    }

    fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(Error::InvalidInput(
                "report text is empty or whitespace".to_string(),
            ));
        }
        Ok(())
    }
}

/// Format a report onto `sink`.
///
/// Empty or whitespace-only text is rejected before the sink sees any
/// command.
///
/// # Example
///
/// ```
/// use reportdoc::{format_report, CommandRecorder, RenderOptions, ReportInput};
///
/// let mut recorder = CommandRecorder::new();
/// let stats = format_report(
///     &ReportInput::new("Conclusion\nAll done."),
///     &RenderOptions::default(),
///     &mut recorder,
/// )
/// .unwrap();
/// assert_eq!(stats.page_count, 3);
/// ```
pub fn format_report(
    input: &ReportInput,
    options: &RenderOptions,
    sink: &mut dyn Sink,
) -> Result<RenderStats> {
    Reportdoc::new()
        .with_render_options(options.clone())
        .format(input, sink)
}

/// Format a report and return the recorded command stream.
pub fn to_commands(input: &ReportInput, options: &RenderOptions) -> Result<Vec<Command>> {
    let mut recorder = CommandRecorder::new();
    format_report(input, options, &mut recorder)?;
    Ok(recorder.into_commands())
}

/// Format a report as a plain text preview.
///
/// # Example
///
/// ```
/// use reportdoc::{to_text, RenderOptions, ReportInput};
///
/// let text = to_text(&ReportInput::new("Abstract\nShort."), &RenderOptions::default()).unwrap();
/// assert!(text.contains("1. Abstract"));
/// ```
pub fn to_text(input: &ReportInput, options: &RenderOptions) -> Result<String> {
    let mut sink = TextSink::new(Vec::new());
    format_report(input, options, &mut sink)?;
    let bytes = sink.finish()?;
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("Invalid UTF-8 output: {}", e)))
}

/// Format a report and export its command stream as JSON.
pub fn to_json(input: &ReportInput, options: &RenderOptions, format: JsonFormat) -> Result<String> {
    let commands = to_commands(input, options)?;
    render::to_json(&commands, format)
}

/// Format independent requests in parallel.
///
/// Each request is formatted single-threaded; results keep input order.
pub fn format_batch(inputs: &[ReportInput], options: &RenderOptions) -> Vec<Result<Vec<Command>>> {
    inputs
        .par_iter()
        .map(|input| to_commands(input, options))
        .collect()
}

/// Builder bundling split and render configuration.
///
/// # Example
///
/// ```
/// use reportdoc::{Reportdoc, ReportInput};
///
/// let commands = Reportdoc::new()
///     .with_page_numbers(false)
///     .with_date_format("%Y-%m-%d")
///     .to_commands(&ReportInput::new("Introduction\nHello."))?;
/// assert!(!commands.is_empty());
/// # Ok::<(), reportdoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reportdoc {
    split_options: SplitOptions,
    render_options: RenderOptions,
}

impl Reportdoc {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the split options.
    pub fn with_split_options(mut self, options: SplitOptions) -> Self {
        self.split_options = options;
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Enable or disable NFC normalization before splitting.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.split_options = self.split_options.with_unicode_normalization(normalize);
        self
    }

    /// Append a heading rule after the built-in ones.
    pub fn with_rule(mut self, rule: HeadingRule) -> Self {
        self.split_options = self.split_options.with_rule(rule);
        self
    }

    /// Set the page geometry.
    pub fn with_page(mut self, page: PageSetup) -> Self {
        self.render_options = self.render_options.with_page(page);
        self
    }

    /// Set the body font size.
    pub fn with_base_font_size(mut self, size: f32) -> Self {
        self.render_options = self.render_options.with_base_font_size(size);
        self
    }

    /// Set the cover date format.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_date_format(format);
        self
    }

    /// Enable or disable page-number footers.
    pub fn with_page_numbers(mut self, enabled: bool) -> Self {
        self.render_options = self.render_options.with_page_numbers(enabled);
        self
    }

    /// Split-only view of the text.
    pub fn split(&self, text: &str) -> Vec<Section> {
        SectionSplitter::with_options(self.split_options.clone()).split(text)
    }

    /// Format a report onto `sink`.
    pub fn format(&self, input: &ReportInput, sink: &mut dyn Sink) -> Result<RenderStats> {
        input.validate()?;

        let sections = self.split(&input.text);
        let mut assembler = DocumentAssembler::new(&self.render_options);
        assembler.assemble(&sections, &input.context(), sink)
    }

    /// Format a report and return the recorded command stream.
    pub fn to_commands(&self, input: &ReportInput) -> Result<Vec<Command>> {
        let mut recorder = CommandRecorder::new();
        self.format(input, &mut recorder)?;
        Ok(recorder.into_commands())
    }
}
