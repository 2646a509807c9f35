//! Answer-key text parser.
//!
//! Turns loosely formatted answer text (`"1A 2B"`, `"1 a\n2 b"`, `"1a2b"`)
//! into an [`AnswerKey`]. The scan is an explicit state machine:
//!
//! ```text
//! ExpectDigit --digit--> InDigitRun --digit--> InDigitRun
//!                        InDigitRun --space--> ExpectLetter --space--> ExpectLetter
//!                        InDigitRun / ExpectLetter --ascii letter--> look-ahead
//! look-ahead: next char alphabetic => reject, otherwise emit (digits, LETTER)
//! ```
//!
//! Any other character abandons the current candidate. Scanning resumes right
//! after the abandoned digit run, so no digit is ever paired twice.

use crate::model::{AnswerEntry, AnswerKey};

/// Scanner state while looking for the next answer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Looking for the first digit of a question number.
    ExpectDigit,
    /// Inside a run of digits that started at byte offset `start`.
    InDigitRun { start: usize },
    /// Digit run `start..end` is complete; only whitespace may precede the letter.
    ExpectLetter { start: usize, end: usize },
}

/// Scan `text` for answer entries in left-to-right order.
///
/// Duplicates are kept, so callers can see which entries a later one
/// overwrites. Use [`parse_answer_text`] for the canonical key.
pub fn scan_answer_entries(text: &str) -> Vec<AnswerEntry> {
    let mut entries = Vec::new();
    let mut state = ScanState::ExpectDigit;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        state = match state {
            ScanState::ExpectDigit => {
                if ch.is_ascii_digit() {
                    ScanState::InDigitRun { start: idx }
                } else {
                    ScanState::ExpectDigit
                }
            }
            ScanState::InDigitRun { start } => {
                if ch.is_ascii_digit() {
                    ScanState::InDigitRun { start }
                } else if ch.is_whitespace() {
                    ScanState::ExpectLetter { start, end: idx }
                } else if ch.is_ascii_alphabetic() {
                    let next = chars.peek().map(|&(_, c)| c);
                    accept_letter(&mut entries, &text[start..idx], ch, next);
                    ScanState::ExpectDigit
                } else {
                    ScanState::ExpectDigit
                }
            }
            ScanState::ExpectLetter { start, end } => {
                if ch.is_whitespace() {
                    ScanState::ExpectLetter { start, end }
                } else if ch.is_ascii_alphabetic() {
                    let next = chars.peek().map(|&(_, c)| c);
                    accept_letter(&mut entries, &text[start..end], ch, next);
                    ScanState::ExpectDigit
                } else if ch.is_ascii_digit() {
                    // "12 34A": the first run is abandoned, the second starts here.
                    ScanState::InDigitRun { start: idx }
                } else {
                    ScanState::ExpectDigit
                }
            }
        };
    }

    entries
}

/// Emit `digits`/`letter` unless the letter is the start of a longer word.
fn accept_letter(entries: &mut Vec<AnswerEntry>, digits: &str, letter: char, next: Option<char>) {
    if next.is_some_and(char::is_alphabetic) {
        return;
    }
    entries.push(AnswerEntry::new(digits, letter));
}

/// Parse answer text into a canonical answer key.
///
/// Never fails: text with no recognisable entries yields an empty key, and a
/// repeated question number keeps its last answer.
pub fn parse_answer_text(text: &str) -> AnswerKey {
    let entries = scan_answer_entries(text);
    let key: AnswerKey = entries.iter().cloned().collect();
    if entries.len() != key.len() {
        tracing::debug!(
            "answer text repeated {} question number(s); later answers kept",
            entries.len() - key.len()
        );
    }
    tracing::debug!("parsed {} answer(s)", key.len());
    key
}
