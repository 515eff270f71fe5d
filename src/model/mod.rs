//! Report model types.
//!
//! Sections come out of the splitter, runs and commands come out of the
//! renderers. Everything here is produced per formatting request and
//! serializable, so a command stream can be recorded and replayed.

mod command;
mod page;
mod run;
mod section;

pub use command::{Command, Stamp};
pub use page::{PageKind, PageSetup};
pub use run::{Alignment, Color, Run, TextStyle};
pub use section::{title_case, Section, SectionKind};
