//! Section splitting module.

mod normalize;
mod options;
mod rules;
mod splitter;

pub use normalize::normalized_lines;
pub use options::SplitOptions;
pub use rules::{match_heading, HeadingRule, Matcher, Seed};
pub use splitter::{split_sections, SectionSplitter};
