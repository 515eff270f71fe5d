//! Placeholder report content.
//!
//! Used in place of generated text when the upstream generator fails.
//! Pair the text with [`ReportInput::with_fallback`](crate::ReportInput::with_fallback)
//! so the cover carries the fallback notice.

/// Build the placeholder report for `topic`.
pub fn placeholder_report(topic: &str) -> String {
    let topic = topic.trim();
    format!(
        "Title: Report on {topic}

Abstract
This report provides an overview and analysis of {topic}. Due to technical limitations, this is a placeholder document.

Introduction
{topic} is significant and warrants detailed examination.

Main Body
**Key Analysis:** {topic} represents an important area of study.

Conclusion
In conclusion, {topic} deserves continued attention.

References
[1] Academic Source
[2] Research Study
[3] Historical Work"
    )
}
