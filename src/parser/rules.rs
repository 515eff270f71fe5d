//! Heading detection rules.
//!
//! A rule pairs a predicate on the lower-cased line with the section kind
//! it opens. Rules are tried in order and the first match wins, so
//! `"Abstract title: x"` opens a title section, not an abstract.

use crate::model::SectionKind;

/// How a rule tests a lower-cased line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Line contains the needle anywhere
    Contains(String),
    /// Line starts with the needle
    StartsWith(String),
}

impl Matcher {
    /// Test an already lower-cased line.
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            Matcher::Contains(needle) => lower.contains(needle.as_str()),
            Matcher::StartsWith(needle) => lower.starts_with(needle.as_str()),
        }
    }
}

/// What a heading line contributes to its own section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// The heading line is not content
    Empty,
    /// The heading line seeds the content, minus this leading prefix
    /// (case-insensitive) and any whitespace after it
    StripPrefix(String),
}

/// A single heading rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRule {
    /// Predicate on the lower-cased line
    pub matcher: Matcher,

    /// Section kind opened on match
    pub kind: SectionKind,

    /// Content seeded from the heading line
    pub seed: Seed,
}

impl HeadingRule {
    /// Rule matching lines that contain `needle`.
    pub fn contains(needle: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            matcher: Matcher::Contains(needle.into().to_lowercase()),
            kind,
            seed: Seed::Empty,
        }
    }

    /// Rule matching lines that start with `needle`.
    pub fn starts_with(needle: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            matcher: Matcher::StartsWith(needle.into().to_lowercase()),
            kind,
            seed: Seed::Empty,
        }
    }

    /// Seed the section with the heading line minus `prefix`.
    pub fn seeding(mut self, prefix: impl Into<String>) -> Self {
        self.seed = Seed::StripPrefix(prefix.into());
        self
    }

    /// The built-in rule table.
    pub fn defaults() -> Vec<HeadingRule> {
        vec![
            HeadingRule::contains("title:", SectionKind::Title).seeding("title:"),
            HeadingRule::starts_with("abstract", SectionKind::Abstract),
            HeadingRule::starts_with("introduction", SectionKind::Introduction),
            HeadingRule::contains("main body", SectionKind::MainBody),
            HeadingRule::starts_with("conclusion", SectionKind::Conclusion),
            HeadingRule::starts_with("references", SectionKind::References),
        ]
    }

    /// Content this heading line seeds its section with, if any.
    pub fn seed_content(&self, line: &str) -> Option<String> {
        match &self.seed {
            Seed::Empty => None,
            Seed::StripPrefix(prefix) => Some(strip_prefix_ignore_case(line, prefix).to_string()),
        }
    }
}

/// Find the first rule matching `line`.
pub fn match_heading<'a>(rules: &'a [HeadingRule], line: &str) -> Option<&'a HeadingRule> {
    let lower = line.to_lowercase();
    rules.iter().find(|rule| rule.matcher.matches(&lower))
}

/// Strip a leading ASCII-case-insensitive prefix plus trailing whitespace.
///
/// Lines that do not start with the prefix are returned whole.
fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> &'a str {
    match line.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => line[prefix.len()..].trim_start(),
        _ => line,
    }
}
