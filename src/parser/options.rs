//! Splitting options and configuration.

use super::HeadingRule;

/// Options for splitting raw text into sections.
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Normalize Unicode to NFC before matching headings (off by default,
    /// so body lines are kept verbatim)
    pub normalize_unicode: bool,

    /// Ordered heading rules; the first match wins
    pub rules: Vec<HeadingRule>,
}

impl SplitOptions {
    /// Create new split options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Replace the heading rule table.
    pub fn with_rules(mut self, rules: Vec<HeadingRule>) -> Self {
        self.rules = rules;
        self
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: HeadingRule) -> Self {
        self.rules.push(rule);
        self
    }
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: false,
            rules: HeadingRule::defaults(),
        }
    }
}
