//! Report assembly: cover, table of contents and section pages.

use chrono::{DateTime, Utc};
use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::model::{Alignment, PageKind, Run, Section, TextStyle};

use super::{InlineRenderer, PageHook, PageNumberFooter, RenderOptions, RenderStats, Sink};

const BANNER_SIZE: f32 = 28.0;
const TITLE_SIZE: f32 = 20.0;
const DATE_SIZE: f32 = 14.0;
const NOTICE_SIZE: f32 = 12.0;
const TOC_HEADING_SIZE: f32 = 22.0;
const TOC_ENTRY_SIZE: f32 = 14.0;
const TOC_ENTRY_INDENT: f32 = 30.0;
const SECTION_HEADING_SIZE: f32 = 20.0;

const TOC_HEADING: &str = "Table of Contents";

/// Per-request facts the assembler does not derive from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    /// The text is placeholder content from a failed upstream generation
    pub used_fallback: bool,

    /// Timestamp printed on the cover
    pub generated_at: DateTime<Utc>,
}

impl ReportContext {
    /// Context for freshly generated content at `generated_at`.
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            used_fallback: false,
            generated_at,
        }
    }

    /// Flag the content as fallback.
    pub fn with_fallback(mut self, used_fallback: bool) -> Self {
        self.used_fallback = used_fallback;
        self
    }
}

/// Drives a sink through the fixed report structure.
///
/// Page 1 is the cover, page 2 the table of contents, then one page per
/// non-title section in source order. Duplicate section types each get
/// their own entry and page.
pub struct DocumentAssembler<'a> {
    options: &'a RenderOptions,
    inline: InlineRenderer<'a>,
    hooks: Vec<Box<dyn PageHook + 'a>>,
}

impl<'a> DocumentAssembler<'a> {
    /// Create an assembler; installs the page-number footer if enabled.
    pub fn new(options: &'a RenderOptions) -> Self {
        let mut hooks: Vec<Box<dyn PageHook + 'a>> = Vec::new();
        if options.page_numbers {
            hooks.push(Box::new(PageNumberFooter::new(options)));
        }
        Self {
            options,
            inline: InlineRenderer::new(options),
            hooks,
        }
    }

    /// Add a page-creation hook after the built-in ones.
    pub fn with_hook<H: PageHook + 'a>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Resolve the report title: the first title section's content, or the
    /// default title when there is none or it is empty.
    pub fn resolve_title<'s>(&'s self, sections: &'s [Section]) -> &'s str {
        sections
            .iter()
            .find(|s| s.kind.is_title())
            .map(|s| s.content.as_str())
            .filter(|content| !content.is_empty())
            .unwrap_or(self.options.default_title.as_str())
    }

    /// Assemble the report onto `sink`.
    pub fn assemble(
        &mut self,
        sections: &[Section],
        context: &ReportContext,
        sink: &mut dyn Sink,
    ) -> Result<RenderStats> {
        let mut stats = RenderStats::new();
        let mut pages = 0u32;

        let date = self.format_date(&context.generated_at)?;
        let title = self.resolve_title(sections).to_string();
        let body: Vec<&Section> = sections.iter().filter(|s| !s.kind.is_title()).collect();

        if body.is_empty() {
            log::warn!("No content sections detected; report has only cover and contents");
        }
        log::debug!(
            "Assembling report {:?} with {} section page(s)",
            title,
            body.len()
        );

        self.new_page(&mut pages, PageKind::Cover, sink, &mut stats)?;
        self.write_cover(&title, &date, context.used_fallback, sink)?;

        self.new_page(&mut pages, PageKind::Toc, sink, &mut stats)?;
        self.write_toc(&body, sink, &mut stats)?;

        for section in body {
            self.new_page(&mut pages, PageKind::Section, sink, &mut stats)?;
            self.write_section(section, sink, &mut stats)?;
        }

        Ok(stats)
    }

    fn new_page(
        &mut self,
        pages: &mut u32,
        kind: PageKind,
        sink: &mut dyn Sink,
        stats: &mut RenderStats,
    ) -> Result<()> {
        *pages += 1;
        sink.start_page(*pages, kind)?;
        stats.add_page(kind);
        for hook in &mut self.hooks {
            hook.on_page_created(*pages, sink)?;
        }
        Ok(())
    }

    fn write_cover(
        &self,
        title: &str,
        date: &str,
        used_fallback: bool,
        sink: &mut dyn Sink,
    ) -> Result<()> {
        let palette = &self.options.palette;
        let spacing = &self.options.spacing;
        let centered = |size: f32, color| TextStyle::new(size, color).align(Alignment::Center);

        sink.write_run(&Run::new(
            self.options.banner.as_str(),
            centered(BANNER_SIZE, palette.banner).bold(true),
        ))?;
        sink.space(spacing.after_banner)?;

        sink.write_run(&Run::new(
            title,
            centered(TITLE_SIZE, palette.title).bold(true),
        ))?;
        sink.space(spacing.after_title)?;

        sink.write_run(&Run::new(
            format!("Generated: {}", date),
            centered(DATE_SIZE, palette.date),
        ))?;
        sink.space(spacing.after_date)?;

        if used_fallback {
            sink.write_run(&Run::new(
                self.options.fallback_notice.as_str(),
                centered(NOTICE_SIZE, palette.warning).italic(true),
            ))?;
        }

        Ok(())
    }

    fn write_toc(
        &self,
        body: &[&Section],
        sink: &mut dyn Sink,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let palette = &self.options.palette;
        let spacing = &self.options.spacing;

        sink.write_run(&Run::new(
            TOC_HEADING,
            TextStyle::new(TOC_HEADING_SIZE, palette.heading)
                .bold(true)
                .underline(true)
                .align(Alignment::Center),
        ))?;
        sink.space(spacing.after_toc_heading)?;

        let entry_style = TextStyle::new(TOC_ENTRY_SIZE, palette.heading).indent(TOC_ENTRY_INDENT);
        for (index, section) in body.iter().enumerate() {
            sink.write_run(&Run::new(
                toc_entry(index + 1, section),
                entry_style.clone(),
            ))?;
            sink.space(spacing.after_toc_entry)?;
            stats.add_toc_entry();
        }

        Ok(())
    }

    fn write_section(
        &self,
        section: &Section,
        sink: &mut dyn Sink,
        stats: &mut RenderStats,
    ) -> Result<()> {
        sink.write_run(&Run::new(
            section.label(),
            TextStyle::new(SECTION_HEADING_SIZE, self.options.palette.heading)
                .bold(true)
                .underline(true),
        ))?;
        sink.space(self.options.spacing.after_section_heading)?;

        if !section.is_empty() {
            self.inline
                .render(&section.content, self.options.base_font_size, sink, stats)?;
        }

        Ok(())
    }

    fn format_date(&self, at: &DateTime<Utc>) -> Result<String> {
        let mut date = String::new();
        write!(date, "{}", at.format(&self.options.date_format)).map_err(|_| {
            Error::Render(format!("Invalid date format: {:?}", self.options.date_format))
        })?;
        Ok(date)
    }
}

/// TOC label for the `number`-th (1-based) listed section.
pub fn toc_entry(number: usize, section: &Section) -> String {
    format!("{}. {}", number, section.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Command, SectionKind};
    use crate::render::CommandRecorder;
    use chrono::TimeZone;

    fn context() -> ReportContext {
        ReportContext::new(Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap())
    }

    fn assemble(sections: &[Section], options: &RenderOptions) -> (Vec<Command>, RenderStats) {
        let mut sink = CommandRecorder::new();
        let stats = DocumentAssembler::new(options)
            .assemble(sections, &context(), &mut sink)
            .unwrap();
        (sink.into_commands(), stats)
    }

    fn texts(commands: &[Command]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(Command::run)
            .map(|r| r.text.as_str())
            .collect()
    }

    #[test]
    fn test_resolve_title() {
        let options = RenderOptions::default();
        let assembler = DocumentAssembler::new(&options);

        let sections = vec![
            Section::new(SectionKind::Abstract, "a"),
            Section::new(SectionKind::Title, "First"),
            Section::new(SectionKind::Title, "Second"),
        ];
        assert_eq!(assembler.resolve_title(&sections), "First");
        assert_eq!(assembler.resolve_title(&[]), "Generated Report");

        let empty_title = vec![Section::new(SectionKind::Title, "")];
        assert_eq!(assembler.resolve_title(&empty_title), "Generated Report");
    }

    #[test]
    fn test_empty_sections_degenerate_document() {
        let (commands, stats) = assemble(&[], &RenderOptions::default());
        assert_eq!(stats.page_count, 2);
        assert_eq!(stats.toc_entry_count, 0);
        assert_eq!(RenderStats::pages_in(&commands), 2);
        assert_eq!(
            texts(&commands),
            vec!["Academic Report", "Generated Report", "Generated: 3/5/2024", "Table of Contents"]
        );
    }

    #[test]
    fn test_fallback_notice() {
        let options = RenderOptions::default();
        let mut sink = CommandRecorder::new();
        DocumentAssembler::new(&options)
            .assemble(&[], &context().with_fallback(true), &mut sink)
            .unwrap();

        let notice = sink
            .runs()
            .find(|r| r.text == "Note: Using fallback content")
            .unwrap();
        assert!(notice.style.italic);
        assert_eq!(notice.style.color.to_hex(), "#e74c3c");
    }

    #[test]
    fn test_toc_and_pages() {
        let sections = vec![
            Section::new(SectionKind::Title, "T"),
            Section::new(SectionKind::MainBody, "Body"),
            Section::new(SectionKind::References, ""),
        ];
        let (commands, stats) = assemble(&sections, &RenderOptions::default());

        assert_eq!(stats.toc_entry_count, 2);
        assert_eq!(stats.section_page_count, 2);
        let all = texts(&commands);
        assert!(all.contains(&"1. Main Body"));
        assert!(all.contains(&"2. References"));
        // Empty section still gets a heading, but no body runs
        assert_eq!(all.last(), Some(&"References"));
    }

    #[test]
    fn test_page_numbers_after_cover() {
        let sections = vec![Section::new(SectionKind::Abstract, "x")];
        let (commands, _) = assemble(&sections, &RenderOptions::default());
        let stamps: Vec<&str> = commands
            .iter()
            .filter_map(|c| match c {
                Command::Stamp(s) => Some(s.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(stamps, vec!["Page 2", "Page 3"]);

        let options = RenderOptions::default().with_page_numbers(false);
        let (commands, _) = assemble(&sections, &options);
        assert!(!commands.iter().any(|c| matches!(c, Command::Stamp(_))));
    }

    #[test]
    fn test_invalid_date_format() {
        let options = RenderOptions::default().with_date_format("%Q");
        let mut sink = CommandRecorder::new();
        let result = DocumentAssembler::new(&options).assemble(&[], &context(), &mut sink);
        assert!(matches!(result, Err(Error::Render(_))));
        assert!(sink.commands().is_empty());
    }

    #[test]
    fn test_custom_hook() {
        struct Counter<'c>(&'c mut Vec<u32>);
        impl PageHook for Counter<'_> {
            fn on_page_created(&mut self, page: u32, _sink: &mut dyn Sink) -> Result<()> {
                self.0.push(page);
                Ok(())
            }
        }

        let options = RenderOptions::default().with_page_numbers(false);
        let mut seen = Vec::new();
        let sections = vec![Section::new(SectionKind::Conclusion, "done")];
        {
            let mut sink = CommandRecorder::new();
            DocumentAssembler::new(&options)
                .with_hook(Counter(&mut seen))
                .assemble(&sections, &context(), &mut sink)
                .unwrap();
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
