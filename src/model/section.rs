//! Section-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a detected report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Report title; supplies the cover title, never gets its own page
    Title,
    /// Abstract
    Abstract,
    /// Introduction
    Introduction,
    /// Main body
    MainBody,
    /// Conclusion
    Conclusion,
    /// References
    References,
}

impl SectionKind {
    /// All section kinds in canonical report order.
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Title,
        SectionKind::Abstract,
        SectionKind::Introduction,
        SectionKind::MainBody,
        SectionKind::Conclusion,
        SectionKind::References,
    ];

    /// The snake_case type name (e.g. `main_body`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Title => "title",
            SectionKind::Abstract => "abstract",
            SectionKind::Introduction => "introduction",
            SectionKind::MainBody => "main_body",
            SectionKind::Conclusion => "conclusion",
            SectionKind::References => "references",
        }
    }

    /// The display label used for headings and TOC entries (e.g. `Main Body`).
    pub fn label(&self) -> String {
        title_case(self.as_str())
    }

    /// Check if this is the title section.
    pub fn is_title(&self) -> bool {
        matches!(self, SectionKind::Title)
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a snake_case name into a Title Case label.
///
/// Underscores become spaces and the first letter of every word is
/// upper-cased; the rest of each word is left untouched.
pub fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A typed block of report content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section type
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Accumulated body text, trimmed
    pub content: String,
}

impl Section {
    /// Create a new section.
    pub fn new(kind: SectionKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Check if the section has no body text.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Get the display label for this section.
    pub fn label(&self) -> String {
        self.kind.label()
    }
}
