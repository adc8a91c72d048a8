//! Character-by-character reveal of the header title.

use crate::config::TypingConfig;

/// Reveals `text` one character at a time.
///
/// As an iterator it yields every non-empty prefix in order, ending with the
/// full text. The host clears the title when the typewriter is created and
/// applies one item per interval.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Byte offsets of each character end, so prefixes never split a char.
    ends: Vec<usize>,
    shown: usize,
    start_delay_ms: u32,
    interval_ms: u32,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, config: &TypingConfig) -> Self {
        let text = text.into();
        let ends = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text,
            ends,
            shown: 0,
            start_delay_ms: config.start_delay_ms,
            interval_ms: config.interval_ms,
        }
    }

    /// Text currently displayed.
    pub fn current(&self) -> &str {
        match self.shown {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.ends.len()
    }

    pub fn start_delay_ms(&self) -> u32 {
        self.start_delay_ms
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Jump to the end. Returns the full text if the reveal was still
    /// running, so the host can restore the title on teardown; `None` if
    /// nothing was left to type.
    pub fn finish(&mut self) -> Option<&str> {
        if self.is_done() {
            return None;
        }
        self.shown = self.ends.len();
        Some(&self.text)
    }
}

impl Iterator for Typewriter {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.current().to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.ends.len() - self.shown;
        (left, Some(left))
    }
}
