//! Section boundary detection.

use crate::model::{Section, SectionKind};

use super::normalize::normalized_lines;
use super::rules::match_heading;
use super::SplitOptions;

/// Partitions raw text into an ordered sequence of typed sections.
///
/// Sections come out in source order. Text before the first recognized
/// heading is dropped, and a heading type that recurs opens a new section
/// rather than extending the earlier one.
#[derive(Debug, Clone, Default)]
pub struct SectionSplitter {
    options: SplitOptions,
}

/// The section currently accumulating lines.
struct OpenSection {
    kind: SectionKind,
    lines: Vec<String>,
}

impl OpenSection {
    fn close(self) -> Section {
        Section::new(self.kind, self.lines.join("\n").trim())
    }
}

impl SectionSplitter {
    /// Create a splitter with the default rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a splitter with custom options.
    pub fn with_options(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Get the splitter options.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Split `text` into sections.
    pub fn split(&self, text: &str) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut open: Option<OpenSection> = None;
        let mut dropped = 0usize;

        for line in normalized_lines(text, self.options.normalize_unicode) {
            match match_heading(&self.options.rules, &line) {
                Some(rule) => {
                    log::debug!("Heading {:?} opens {} section", line, rule.kind);
                    if let Some(section) = open.take() {
                        sections.push(section.close());
                    }
                    open = Some(OpenSection {
                        kind: rule.kind,
                        lines: rule.seed_content(&line).into_iter().collect(),
                    });
                }
                None => match open.as_mut() {
                    Some(section) => section.lines.push(line),
                    None => dropped += 1,
                },
            }
        }

        // A trailing heading with nothing under it is dropped
        if let Some(section) = open {
            if !section.lines.is_empty() {
                sections.push(section.close());
            }
        }

        if sections.is_empty() && dropped > 0 {
            log::warn!("No headings detected; {} line(s) dropped", dropped);
        } else if dropped > 0 {
            log::debug!("Dropped {} preamble line(s) before the first heading", dropped);
        }
        log::debug!("Split text into {} section(s)", sections.len());

        sections
    }
}

/// Split text into sections using the default rules.
pub fn split_sections(text: &str) -> Vec<Section> {
    SectionSplitter::new().split(text)
}
