//! Line normalization ahead of heading detection.

use unicode_normalization::UnicodeNormalization;

/// Split text into trimmed, non-empty lines.
///
/// With `nfc` set, each line is NFC-normalized first so that composed and
/// decomposed spellings of the same heading match the same rule.
pub fn normalized_lines(text: &str, nfc: bool) -> Vec<String> {
    text.split('\n')
        .map(|line| {
            let line = line.trim();
            if nfc {
                line.nfc().collect::<String>()
            } else {
                line.to_string()
            }
        })
        .filter(|line| !line.is_empty())
        .collect()
}
