//! Question-paper splitter.
//!
//! Splits full question text (stems plus options) into per-question chunks so
//! each question can be shown or sent to a provider on its own. This is looser
//! than the answer parser and never feeds the scorer directly.

use crate::model::QuestionChunk;

/// Word that may precede a question number, e.g. `Question 3.`.
const QUESTION_WORD: &str = "Question";

/// Characters that terminate a question number marker.
const MARKER_DELIMITERS: [char; 3] = ['.', ':', ')'];

/// Collapse every whitespace run (newlines included) to one space and trim.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A question marker found at `start..end` carrying the digit run `number`.
#[derive(Debug)]
struct Marker<'a> {
    start: usize,
    end: usize,
    number: &'a str,
}

/// Match `<digits><delimiter>` at the start of `s`, returning the digit run
/// and the matched length in bytes.
fn match_number(s: &str) -> Option<(&str, usize)> {
    let digits_len = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if digits_len == 0 {
        return None;
    }
    let delimiter = s[digits_len..].chars().next()?;
    if MARKER_DELIMITERS.contains(&delimiter) {
        Some((&s[..digits_len], digits_len + delimiter.len_utf8()))
    } else {
        None
    }
}

/// Match a full marker (`[Question<ws>*]<digits><delimiter>`) at the start of `s`.
fn match_marker(s: &str) -> Option<(&str, usize)> {
    if let Some(rest) = s.strip_prefix(QUESTION_WORD) {
        let trimmed = rest.trim_start();
        let prefix_len = s.len() - trimmed.len();
        if let Some((number, len)) = match_number(trimmed) {
            return Some((number, prefix_len + len));
        }
    }
    match_number(s)
}

fn find_markers(text: &str) -> Vec<Marker<'_>> {
    let mut markers = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if let Some((number, len)) = match_marker(rest) {
            markers.push(Marker {
                start: pos,
                end: pos + len,
                number,
            });
            pos += len;
        } else {
            pos += rest.chars().next().map_or(1, char::len_utf8);
        }
    }
    markers
}

/// Split a question paper into `(number, body)` chunks in document order.
///
/// The text is cleaned with [`clean_text`] first. Anything before the first
/// marker is discarded. Numbers are not deduplicated or validated.
pub fn extract_mcq_questions(text: &str) -> Vec<QuestionChunk> {
    let cleaned = clean_text(text);
    let markers = find_markers(&cleaned);

    let chunks: Vec<QuestionChunk> = markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let body_end = markers.get(i + 1).map_or(cleaned.len(), |next| next.start);
            QuestionChunk {
                number: marker.number.trim().to_string(),
                body: cleaned[marker.end..body_end].trim().to_string(),
            }
        })
        .collect();

    tracing::debug!("split question text into {} chunk(s)", chunks.len());
    chunks
}
