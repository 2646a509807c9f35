//! Core data model types for mcqmark.
//!
//! These are the fundamental types the parser, splitter, and scorer exchange:
//! question numbers, answer entries, answer keys, and score results.

use std::cmp::Ordering;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A question number exactly as it appeared in the input.
///
/// Equality is on the raw digit string, so `"1"` and `"01"` are different
/// questions. Ordering is numeric-first so that `2` sorts before `10`; the raw
/// string breaks ties between spellings like `"1"` and `"01"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionNumber(String);

impl QuestionNumber {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn significant_digits(&self) -> &str {
        let trimmed = self.0.trim_start_matches('0');
        if trimmed.is_empty() && !self.0.is_empty() {
            "0"
        } else {
            trimmed
        }
    }
}

impl Ord for QuestionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = (self.significant_digits(), other.significant_digits());
        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for QuestionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QuestionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionNumber {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A single (question number, option letter) pair found in answer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    /// The question number, verbatim.
    pub question: QuestionNumber,
    /// The chosen option, canonicalised to uppercase.
    pub option: char,
}

impl AnswerEntry {
    pub fn new(question: impl Into<QuestionNumber>, option: char) -> Self {
        Self {
            question: question.into(),
            option: option.to_ascii_uppercase(),
        }
    }
}

/// Mapping from question number to the chosen option letter.
///
/// Later inserts for the same question overwrite earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey {
    answers: BTreeMap<QuestionNumber, char>,
}

impl AnswerKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an answer, returning the option it replaced (if any).
    pub fn insert(&mut self, question: impl Into<QuestionNumber>, option: char) -> Option<char> {
        self.answers
            .insert(question.into(), option.to_ascii_uppercase())
    }

    pub fn get(&self, question: &QuestionNumber) -> Option<char> {
        self.answers.get(question).copied()
    }

    /// Convenience lookup by raw question string.
    pub fn get_str(&self, question: &str) -> Option<char> {
        self.get(&QuestionNumber::new(question))
    }

    pub fn contains(&self, question: &QuestionNumber) -> bool {
        self.answers.contains_key(question)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate in question order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionNumber, char)> {
        self.answers.iter().map(|(q, o)| (q, *o))
    }
}

impl FromIterator<AnswerEntry> for AnswerKey {
    fn from_iter<I: IntoIterator<Item = AnswerEntry>>(iter: I) -> Self {
        let mut key = AnswerKey::new();
        for entry in iter {
            key.insert(entry.question, entry.option);
        }
        key
    }
}

impl<'a> IntoIterator for &'a AnswerKey {
    type Item = (&'a QuestionNumber, &'a char);
    type IntoIter = btree_map::Iter<'a, QuestionNumber, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.answers.iter()
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (question, option)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{question} {option}")?;
        }
        Ok(())
    }
}

/// Outcome of grading a student key against a model key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Questions answered with the model's letter.
    pub score: usize,
    /// Number of questions in the model key.
    pub total: usize,
}

impl ScoreResult {
    /// Score as a percentage of the total; 0.0 for an empty model key.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64 * 100.0
        }
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.total)
    }
}

/// Per-question grading detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOutcome {
    pub question: QuestionNumber,
    /// The model key's option.
    pub expected: char,
    /// The student's option, if they answered this question.
    pub submitted: Option<char>,
    pub correct: bool,
}

/// A score together with its per-question breakdown, in question order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: usize,
    pub total: usize,
    pub outcomes: Vec<QuestionOutcome>,
}

impl Evaluation {
    pub fn result(&self) -> ScoreResult {
        ScoreResult {
            score: self.score,
            total: self.total,
        }
    }

    /// Model questions the student left unanswered.
    pub fn unanswered(&self) -> impl Iterator<Item = &QuestionOutcome> {
        self.outcomes.iter().filter(|o| o.submitted.is_none())
    }
}

/// One question carved out of a full question paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionChunk {
    /// The question number as written.
    pub number: String,
    /// The question stem and its options.
    pub body: String,
}
