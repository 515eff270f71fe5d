//! Inline markup rendering for section bodies.
//!
//! Section content is split into paragraphs on blank lines and into lines
//! within a paragraph. Each line becomes one visual line of runs:
//!
//! - `* item` lines are bullets: a glyph run followed by the item's spans,
//!   with a gap before and after.
//! - lines containing a span marker (`**` by default) are split into
//!   alternating plain and emphasized runs, justified.
//! - everything else is a single justified plain run.
//!
//! All runs of a line except the last are `continued`, so the line is
//! never broken between spans.

use regex::Regex;

use crate::error::Result;
use crate::model::{Alignment, Run, TextStyle};

use super::{RenderOptions, RenderStats, Sink};

/// Emphasis applied to a matched span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Emphasis {
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
    /// Underlined text
    pub underline: bool,
}

impl Emphasis {
    /// No emphasis.
    pub const PLAIN: Emphasis = Emphasis {
        bold: false,
        italic: false,
        underline: false,
    };

    /// Bold emphasis.
    pub const BOLD: Emphasis = Emphasis {
        bold: true,
        italic: false,
        underline: false,
    };

    fn apply(&self, style: TextStyle) -> TextStyle {
        style
            .bold(self.bold)
            .italic(self.italic)
            .underline(self.underline)
    }
}

/// An inline span rule: a marker and the pattern it delimits.
///
/// The pattern's first capture group is the span text; the whole match is
/// replaced by one emphasized run.
#[derive(Debug, Clone)]
pub struct SpanRule {
    /// Marker whose presence switches a line into span mode
    pub marker: String,

    /// Pattern matching a complete span
    pub pattern: Regex,

    /// Emphasis for matched spans
    pub emphasis: Emphasis,
}

impl SpanRule {
    /// Create a rule from a marker, pattern and emphasis.
    pub fn new(
        marker: impl Into<String>,
        pattern: &str,
        emphasis: Emphasis,
    ) -> std::result::Result<Self, regex::Error> {
        Ok(Self {
            marker: marker.into(),
            pattern: Regex::new(pattern)?,
            emphasis,
        })
    }

    /// Bold spans wrapped in `**`, with no `*` inside.
    pub fn bold() -> Self {
        Self {
            marker: "**".to_string(),
            pattern: Regex::new(r"\*\*([^*]+)\*\*").expect("bold span pattern is valid"),
            emphasis: Emphasis::BOLD,
        }
    }

    /// The built-in rule table.
    pub fn defaults() -> Vec<SpanRule> {
        vec![SpanRule::bold()]
    }
}

/// A chunk of a line with its emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Span text, markers removed
    pub text: &'a str,
    /// Emphasis to apply
    pub emphasis: Emphasis,
}

/// Split a line into alternating plain and emphasized spans.
///
/// At each position the earliest match across all rules wins (ties go to
/// the rule listed first). Empty plain chunks are omitted.
pub fn split_spans<'a>(line: &'a str, rules: &[SpanRule]) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let next = rules
            .iter()
            .filter_map(|rule| {
                let caps = rule.pattern.captures_at(line, pos)?;
                let whole = caps.get(0)?;
                Some((whole.start(), whole.end(), caps.get(1), rule.emphasis))
            })
            .min_by_key(|(start, ..)| *start);

        let Some((start, end, inner, emphasis)) = next else {
            break;
        };
        if end == start {
            break;
        }

        if start > pos {
            spans.push(Span {
                text: &line[pos..start],
                emphasis: Emphasis::PLAIN,
            });
        }
        let text = inner.map_or("", |m| m.as_str());
        if !text.is_empty() {
            spans.push(Span { text, emphasis });
        }
        pos = end;
    }

    if pos < line.len() {
        spans.push(Span {
            text: &line[pos..],
            emphasis: Emphasis::PLAIN,
        });
    }

    spans
}

/// Renders section bodies into runs and spacing directives.
pub struct InlineRenderer<'a> {
    options: &'a RenderOptions,
    paragraph_break: Regex,
}

impl<'a> InlineRenderer<'a> {
    /// Create a renderer bound to the given options.
    pub fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            paragraph_break: Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"),
        }
    }

    /// Render `content` at `base_size` onto `sink`.
    ///
    /// Empty or whitespace-only content issues no commands.
    pub fn render<S: Sink + ?Sized>(
        &self,
        content: &str,
        base_size: f32,
        sink: &mut S,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let paragraphs: Vec<&str> = self
            .paragraph_break
            .split(content)
            .filter(|p| !p.trim().is_empty())
            .collect();

        for (index, paragraph) in paragraphs.iter().enumerate() {
            stats.add_paragraph();
            for line in paragraph.split('\n') {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                self.render_line(line, base_size, sink, stats)?;
            }

            if index + 1 < paragraphs.len() {
                sink.space(self.options.spacing.between_paragraphs)?;
            }
        }

        Ok(())
    }

    fn render_line<S: Sink + ?Sized>(
        &self,
        line: &str,
        base_size: f32,
        sink: &mut S,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let spacing = &self.options.spacing;
        let base = TextStyle::new(base_size, self.options.palette.text);

        if let Some(item) = line.strip_prefix("* ") {
            log::trace!("Bullet line: {:?}", item);
            stats.add_bullet();
            sink.space(spacing.before_bullet)?;

            let mut runs = vec![Run::new(self.options.bullet_glyph.clone(), base.clone())];
            runs.extend(self.span_runs(item.trim(), &base));
            let runs: Vec<Run> = runs.into_iter().map(Run::as_bullet).collect();
            self.write_line(runs, sink, stats)?;

            sink.space(spacing.after_bullet)?;
            return Ok(());
        }

        let justified = base.align(Alignment::Justify);

        if self.has_marker(line) {
            log::trace!("Span line: {:?}", line);
            let runs = self.span_runs(line, &justified);
            self.write_line(runs, sink, stats)?;
            // No gap after lead-in lines ending in ':'
            if !line.ends_with(':') {
                sink.space(spacing.after_line)?;
            }
        } else {
            log::trace!("Plain line: {:?}", line);
            self.write_line(vec![Run::new(line, justified)], sink, stats)?;
            sink.space(spacing.after_line)?;
        }

        Ok(())
    }

    fn has_marker(&self, line: &str) -> bool {
        self.options
            .span_rules
            .iter()
            .any(|rule| line.contains(rule.marker.as_str()))
    }

    fn span_runs(&self, text: &str, base: &TextStyle) -> Vec<Run> {
        split_spans(text, &self.options.span_rules)
            .into_iter()
            .map(|span| Run::new(span.text, span.emphasis.apply(base.clone())))
            .collect()
    }

    /// Write one visual line: every run continued except the last.
    fn write_line<S: Sink + ?Sized>(
        &self,
        runs: Vec<Run>,
        sink: &mut S,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let last = runs.len().saturating_sub(1);
        for (i, run) in runs.into_iter().enumerate() {
            let run = run.continued(i < last);
            stats.add_run(&run);
            sink.write_run(&run)?;
        }
        Ok(())
    }
}
