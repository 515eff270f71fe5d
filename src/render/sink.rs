//! Rendering sinks.
//!
//! A sink is the page-oriented surface a report is rendered onto. The
//! formatter only issues commands, in order, and never reads sink state
//! back, so one report can drive a PDF writer, a text preview or a plain
//! command recorder without changes.
//!
//! # Example
//!
//! ```
//! use reportdoc::render::{CommandRecorder, Sink};
//! use reportdoc::model::{Color, PageKind, Run, TextStyle};
//!
//! let mut sink = CommandRecorder::new();
//! sink.start_page(1, PageKind::Cover).unwrap();
//! sink.write_run(&Run::new("Hello", TextStyle::new(12.0, Color::BLACK))).unwrap();
//! assert_eq!(sink.commands().len(), 2);
//! ```

use crate::error::Result;
use crate::model::{Command, PageKind, Run, Stamp};

/// An append-only, page-oriented rendering surface.
pub trait Sink {
    /// Begin a new page.
    fn start_page(&mut self, number: u32, kind: PageKind) -> Result<()>;

    /// Write a styled run at the flow cursor.
    fn write_run(&mut self, run: &Run) -> Result<()>;

    /// Move the flow cursor down by `lines` line units.
    fn space(&mut self, lines: f32) -> Result<()>;

    /// Place text at an absolute position without moving the flow cursor.
    fn stamp(&mut self, stamp: &Stamp) -> Result<()>;

    /// Save mutable drawing state before an out-of-flow write.
    fn save_state(&mut self) -> Result<()> {
        Ok(())
    }

    /// Restore the state saved by [`Sink::save_state`].
    fn restore_state(&mut self) -> Result<()> {
        Ok(())
    }

    /// Apply a recorded command.
    fn apply(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::StartPage { number, kind } => self.start_page(*number, *kind),
            Command::WriteRun(run) => self.write_run(run),
            Command::Space { lines } => self.space(*lines),
            Command::SaveState => self.save_state(),
            Command::RestoreState => self.restore_state(),
            Command::Stamp(stamp) => self.stamp(stamp),
        }
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn start_page(&mut self, number: u32, kind: PageKind) -> Result<()> {
        (**self).start_page(number, kind)
    }

    fn write_run(&mut self, run: &Run) -> Result<()> {
        (**self).write_run(run)
    }

    fn space(&mut self, lines: f32) -> Result<()> {
        (**self).space(lines)
    }

    fn stamp(&mut self, stamp: &Stamp) -> Result<()> {
        (**self).stamp(stamp)
    }

    fn save_state(&mut self) -> Result<()> {
        (**self).save_state()
    }

    fn restore_state(&mut self) -> Result<()> {
        (**self).restore_state()
    }
}

/// Sink that records every command it receives.
#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    commands: Vec<Command>,
}

impl CommandRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands, in issue order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Consume the recorder and return its commands.
    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    /// Recorded runs, in issue order.
    pub fn runs(&self) -> impl Iterator<Item = &Run> {
        self.commands.iter().filter_map(Command::run)
    }
}

impl Sink for CommandRecorder {
    fn start_page(&mut self, number: u32, kind: PageKind) -> Result<()> {
        self.commands.push(Command::StartPage { number, kind });
        Ok(())
    }

    fn write_run(&mut self, run: &Run) -> Result<()> {
        self.commands.push(Command::WriteRun(run.clone()));
        Ok(())
    }

    fn space(&mut self, lines: f32) -> Result<()> {
        self.commands.push(Command::Space { lines });
        Ok(())
    }

    fn stamp(&mut self, stamp: &Stamp) -> Result<()> {
        self.commands.push(Command::Stamp(stamp.clone()));
        Ok(())
    }

    fn save_state(&mut self) -> Result<()> {
        self.commands.push(Command::SaveState);
        Ok(())
    }

    fn restore_state(&mut self) -> Result<()> {
        self.commands.push(Command::RestoreState);
        Ok(())
    }
}

/// Replay a recorded command stream onto another sink.
pub fn replay<S: Sink + ?Sized>(commands: &[Command], sink: &mut S) -> Result<()> {
    for command in commands {
        sink.apply(command)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, TextStyle};

    #[test]
    fn test_recorder_records_in_order() {
        let mut sink = CommandRecorder::new();
        sink.start_page(1, PageKind::Cover).unwrap();
        sink.space(1.0).unwrap();
        sink.save_state().unwrap();
        sink.restore_state().unwrap();

        assert_eq!(
            sink.commands(),
            &[
                Command::StartPage {
                    number: 1,
                    kind: PageKind::Cover
                },
                Command::Space { lines: 1.0 },
                Command::SaveState,
                Command::RestoreState,
            ]
        );
    }

    #[test]
    fn test_replay_round_trip() {
        let mut original = CommandRecorder::new();
        original.start_page(1, PageKind::Section).unwrap();
        original
            .write_run(&Run::new("x", TextStyle::new(12.0, Color::BLACK)))
            .unwrap();

        let mut copy = CommandRecorder::new();
        replay(original.commands(), &mut copy).unwrap();
        assert_eq!(original.commands(), copy.commands());
        assert_eq!(copy.runs().count(), 1);
    }

    #[test]
    fn test_sink_through_mut_reference() {
        fn drive<S: Sink>(mut sink: S) {
            sink.space(0.5).unwrap();
        }

        let mut recorder = CommandRecorder::new();
        drive(&mut recorder);
        assert_eq!(recorder.commands().len(), 1);
    }
}
