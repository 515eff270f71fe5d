//! Integration tests for report assembly and inline rendering.

use chrono::{TimeZone, Utc};
use reportdoc::render::{DocumentAssembler, PageHook, ReportContext};
use reportdoc::{
    split_sections, to_commands, Alignment, Command, CommandRecorder, PageKind, RenderOptions,
    ReportInput, Result, Run, Sink,
};

fn input(text: &str) -> ReportInput {
    ReportInput::new(text).with_generated_at(Utc.with_ymd_and_hms(2024, 12, 25, 8, 0, 0).unwrap())
}

fn runs(commands: &[Command]) -> Vec<&Run> {
    commands.iter().filter_map(Command::run).collect()
}

fn page_kinds(commands: &[Command]) -> Vec<PageKind> {
    commands
        .iter()
        .filter_map(|c| match c {
            Command::StartPage { kind, .. } => Some(*kind),
            _ => None,
        })
        .collect()
}

#[test]
fn test_toc_and_page_count_match_body_sections() {
    let cases = [
        ("Title: X\nAbstract\na\nConclusion\nb", 2),
        ("Abstract\na\nAbstract\nb\nReferences\nc", 3),
        ("Title: Only a title", 0),
    ];

    for (text, expected) in cases {
        let commands = to_commands(&input(text), &RenderOptions::default()).unwrap();
        let kinds = page_kinds(&commands);
        let section_pages = kinds.iter().filter(|k| **k == PageKind::Section).count();
        let toc_entries = runs(&commands)
            .iter()
            .filter(|r| r.style.indent > 0.0)
            .count();

        assert_eq!(section_pages, expected, "input {:?}", text);
        assert_eq!(toc_entries, expected, "input {:?}", text);
        assert_eq!(kinds[0], PageKind::Cover);
        assert_eq!(kinds[1], PageKind::Toc);
    }
}

#[test]
fn test_end_to_end_scenario() {
    let commands = to_commands(&input("Title: T\nConclusion\nAll done."), &RenderOptions::default()).unwrap();
    let runs = runs(&commands);

    assert!(runs.iter().any(|r| r.text == "T" && r.is_bold()));
    assert!(runs.iter().any(|r| r.text == "1. Conclusion"));
    assert!(runs.iter().any(|r| r.text == "Generated: 12/25/2024"));

    let body = runs.last().unwrap();
    assert_eq!(body.text, "All done.");
    assert_eq!(body.style.align, Alignment::Justify);
    assert!(!body.continued);
}

#[test]
fn test_bold_runs_and_continuation() {
    let commands = to_commands(&input("Abstract\nSome **bold** words and **more**"), &RenderOptions::default()).unwrap();
    let runs = runs(&commands);
    let start = runs.iter().position(|r| r.text == "Some ").unwrap();
    let line = &runs[start..];

    assert_eq!(line.len(), 4);
    assert!(line[1].is_bold() && line[1].text == "bold");
    assert!(line[..3].iter().all(|r| r.continued));
    assert!(!line[3].continued);
}

#[test]
fn test_bullets_never_bare() {
    let commands = to_commands(&input("Main Body\n* one\n* **two** parts"), &RenderOptions::default()).unwrap();
    let bullets: Vec<&Run> = runs(&commands).into_iter().filter(|r| r.bullet).collect();

    assert_eq!(bullets.len(), 5);
    assert_eq!(bullets[0].text, "\u{2022} ");
    assert_eq!(bullets[2].text, "\u{2022} ");
    assert!(!bullets[2].is_bold());
    assert!(bullets[3].is_bold());
}

#[test]
fn test_bullet_gap_exceeds_line_gap() {
    let spacing_after = |text: &str| -> Vec<f32> {
        let commands = to_commands(&input(text), &RenderOptions::default()).unwrap();
        let body_start = commands
            .iter()
            .rposition(Command::is_page_start)
            .unwrap();
        commands[body_start..]
            .split(|c| c.run().map_or(false, |r| !r.continued))
            .skip(2)
            .map(|gap| {
                gap.iter()
                    .filter_map(|c| match c {
                        Command::Space { lines } => Some(*lines),
                        _ => None,
                    })
                    .sum::<f32>()
            })
            .collect()
    };

    // Gap between the first and second body line
    let plain = spacing_after("Abstract
one
two
three")[0];
    let bullets = spacing_after("Abstract
* one
* two
* three")[0];
    assert!(bullets > plain, "bullet gap {} vs line gap {}", bullets, plain);
}

#[test]
fn test_footer_on_every_page_but_first() {
    let commands = to_commands(&input("Abstract\na\nReferences\nb"), &RenderOptions::default()).unwrap();
    let stamps: Vec<&str> = commands
        .iter()
        .filter_map(|c| match c {
            Command::Stamp(stamp) => Some(stamp.text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(stamps, vec!["Page 2", "Page 3", "Page 4"]);

    // Each stamp is wrapped in a save/restore pair
    for (i, command) in commands.iter().enumerate() {
        if matches!(command, Command::Stamp(_)) {
            assert_eq!(commands[i - 1], Command::SaveState);
            assert_eq!(commands[i + 1], Command::RestoreState);
        }
    }
}

#[test]
fn test_deterministic_given_fixed_timestamp() {
    let text = "Title: Same\nIntroduction\n**Lead:**\ntext\n\n* item";
    let a = to_commands(&input(text), &RenderOptions::default()).unwrap();
    let b = to_commands(&input(text), &RenderOptions::default()).unwrap();
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

struct PageLog(Vec<u32>);

impl PageHook for &mut PageLog {
    fn on_page_created(&mut self, page: u32, _sink: &mut dyn Sink) -> Result<()> {
        self.0.push(page);
        Ok(())
    }
}

#[test]
fn test_hooks_receive_page_index() {
    let options = RenderOptions::default().with_page_numbers(false);
    let sections = split_sections("Abstract\na\nConclusion\nb");
    let context = ReportContext::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    let mut log = PageLog(Vec::new());
    let mut recorder = CommandRecorder::new();

    {
        let mut assembler = DocumentAssembler::new(&options).with_hook(&mut log);
        assembler.assemble(&sections, &context, &mut recorder).unwrap();
    }

    assert_eq!(log.0, vec![1, 2, 3, 4]);
    assert!(!recorder.commands().iter().any(|c| matches!(c, Command::Stamp(_))));
}
