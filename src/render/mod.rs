//! Rendering of split sections onto a page-oriented sink.
//!
//! The [`DocumentAssembler`] lays out the cover page, the table of contents
//! and one page per body section, delegating body text to the
//! [`InlineRenderer`] and page decoration to [`PageHook`]s.

mod assembler;
mod footer;
mod inline;
mod json;
mod options;
mod result;
mod sink;
mod text;

pub use assembler::{toc_entry, DocumentAssembler, ReportContext};
pub use footer::{PageHook, PageNumberFooter};
pub use inline::{split_spans, Emphasis, InlineRenderer, Span, SpanRule};
pub use json::{to_json, JsonFormat};
pub use options::{Palette, RenderOptions, Spacing};
pub use result::RenderStats;
pub use sink::{replay, CommandRecorder, Sink};
pub use text::TextSink;
