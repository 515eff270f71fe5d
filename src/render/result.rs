//! Rendering statistics.

use serde::{Deserialize, Serialize};

use crate::model::{Command, PageKind, Run};

/// Statistics collected while assembling a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Total number of pages created
    pub page_count: u32,

    /// Number of TOC entries written
    pub toc_entry_count: u32,

    /// Number of section pages created
    pub section_page_count: u32,

    /// Number of body paragraphs rendered
    pub paragraph_count: u32,

    /// Number of body runs written
    pub run_count: u32,

    /// Number of bold body runs
    pub bold_run_count: u32,

    /// Number of bullet lines
    pub bullet_count: u32,

    /// Approximate word count of body runs (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count of body runs (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a created page.
    pub fn add_page(&mut self, kind: PageKind) {
        self.page_count += 1;
        if kind == PageKind::Section {
            self.section_page_count += 1;
        }
    }

    /// Increment TOC entry count.
    pub fn add_toc_entry(&mut self) {
        self.toc_entry_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment bullet count.
    pub fn add_bullet(&mut self) {
        self.bullet_count += 1;
    }

    /// Record a body run.
    pub fn add_run(&mut self, run: &Run) {
        self.run_count += 1;
        if run.is_bold() {
            self.bold_run_count += 1;
        }
        self.count_text(&run.text);
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Count pages in a recorded command stream.
    pub fn pages_in(commands: &[Command]) -> u32 {
        commands.iter().filter(|c| c.is_page_start()).count() as u32
    }

    /// Recover statistics from a recorded command stream.
    ///
    /// The first run on a contents or section page is its heading; later
    /// runs are entries or body text. Paragraph boundaries are not visible
    /// in the stream, so `paragraph_count` stays zero.
    pub fn from_commands(commands: &[Command]) -> Self {
        let mut stats = Self::new();
        let mut kind = PageKind::Cover;
        let mut heading_pending = false;
        let mut line_open = false;

        for command in commands {
            match command {
                Command::StartPage { kind: page_kind, .. } => {
                    kind = *page_kind;
                    stats.add_page(kind);
                    heading_pending = kind != PageKind::Cover;
                    line_open = false;
                }
                Command::WriteRun(run) if heading_pending => {
                    heading_pending = run.continued;
                }
                Command::WriteRun(run) => match kind {
                    PageKind::Cover => {}
                    PageKind::Toc => stats.add_toc_entry(),
                    PageKind::Section => {
                        if run.bullet && !line_open {
                            stats.add_bullet();
                        }
                        stats.add_run(run);
                        line_open = run.continued;
                    }
                },
                _ => {}
            }
        }

        stats
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.page_count += other.page_count;
        self.toc_entry_count += other.toc_entry_count;
        self.section_page_count += other.section_page_count;
        self.paragraph_count += other.paragraph_count;
        self.run_count += other.run_count;
        self.bold_run_count += other.bold_run_count;
        self.bullet_count += other.bullet_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, TextStyle};

    #[test]
    fn test_render_stats_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_add_run_and_page() {
        let mut stats = RenderStats::new();
        let style = TextStyle::new(12.0, Color::BLACK);
        stats.add_run(&Run::new("plain words", style.clone()));
        stats.add_run(&Run::new("bold", style.bold(true)));
        stats.add_page(PageKind::Cover);
        stats.add_page(PageKind::Section);

        assert_eq!(stats.run_count, 2);
        assert_eq!(stats.bold_run_count, 1);
        assert_eq!(stats.word_count, 3);
        assert_eq!(stats.page_count, 2);
        assert_eq!(stats.section_page_count, 1);
    }

    #[test]
    fn test_from_commands() {
        let style = TextStyle::new(12.0, Color::BLACK);
        let commands = vec![
            Command::StartPage { number: 1, kind: PageKind::Cover },
            Command::WriteRun(Run::new("Academic Report", style.clone())),
            Command::StartPage { number: 2, kind: PageKind::Toc },
            Command::WriteRun(Run::new("Table of Contents", style.clone())),
            Command::WriteRun(Run::new("1. Abstract", style.clone())),
            Command::StartPage { number: 3, kind: PageKind::Section },
            Command::WriteRun(Run::new("Abstract", style.clone())),
            Command::Space { lines: 1.5 },
            Command::WriteRun(Run::new("\u{2022} ", style.clone()).as_bullet().continued(true)),
            Command::WriteRun(Run::new("key", style.clone().bold(true)).as_bullet().continued(true)),
            Command::WriteRun(Run::new(" point", style.clone()).as_bullet()),
            Command::WriteRun(Run::new("Plain text.", style)),
        ];

        let stats = RenderStats::from_commands(&commands);
        assert_eq!(stats.page_count, 3);
        assert_eq!(stats.section_page_count, 1);
        assert_eq!(stats.toc_entry_count, 1);
        assert_eq!(stats.run_count, 4);
        assert_eq!(stats.bold_run_count, 1);
        assert_eq!(stats.bullet_count, 1);
        assert_eq!(RenderStats::pages_in(&commands), 3);
    }

    #[test]
    fn test_render_stats_merge() {
        let mut stats1 = RenderStats::new();
        stats1.paragraph_count = 5;
        stats1.toc_entry_count = 2;

        let stats2 = RenderStats {
            paragraph_count: 3,
            toc_entry_count: 1,
            bullet_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.toc_entry_count, 3);
        assert_eq!(stats1.bullet_count, 4);
    }
}
