//! Rendering commands issued to a sink.
//!
//! The formatter never mutates drawing state on a sink; it issues an
//! ordered stream of these commands, each carrying everything the sink
//! needs to act on it.

use super::{PageKind, Run, TextStyle};
use serde::{Deserialize, Serialize};

/// A single rendering command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Begin a new page.
    StartPage {
        /// 1-indexed page number
        number: u32,
        /// Page role
        kind: PageKind,
    },

    /// Write a styled run at the flow cursor.
    WriteRun(Run),

    /// Move the flow cursor down by a number of lines.
    Space {
        /// Relative line units
        lines: f32,
    },

    /// Save the sink's drawing state.
    SaveState,

    /// Restore the most recently saved drawing state.
    RestoreState,

    /// Place text at an absolute position without moving the flow cursor.
    Stamp(Stamp),
}

impl Command {
    /// Check if this command starts a page.
    pub fn is_page_start(&self) -> bool {
        matches!(self, Command::StartPage { .. })
    }

    /// Get the run if this is a write command.
    pub fn run(&self) -> Option<&Run> {
        match self {
            Command::WriteRun(run) => Some(run),
            _ => None,
        }
    }
}

/// Absolutely positioned text, such as a page-number footer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stamp {
    /// Text to place
    pub text: String,

    /// Text style (alignment is relative to `x..x + width`)
    pub style: TextStyle,

    /// Left edge of the text box in points
    pub x: f32,

    /// Baseline offset from the top of the page in points
    pub y: f32,

    /// Width of the text box in points
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Color;

    #[test]
    fn test_command_accessors() {
        let run = Run::new("hello", TextStyle::new(12.0, Color::BLACK));
        let cmd = Command::WriteRun(run.clone());
        assert_eq!(cmd.run(), Some(&run));
        assert!(!cmd.is_page_start());

        let cmd = Command::StartPage {
            number: 1,
            kind: PageKind::Cover,
        };
        assert!(cmd.is_page_start());
        assert!(cmd.run().is_none());
    }

    #[test]
    fn test_command_serde_tag() {
        let json = serde_json::to_string(&Command::Space { lines: 0.5 }).unwrap();
        assert_eq!(json, r#"{"type":"space","lines":0.5}"#);

        let json = serde_json::to_string(&Command::SaveState).unwrap();
        assert_eq!(json, r#"{"type":"save_state"}"#);
    }
}
