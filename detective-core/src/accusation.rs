//! Final accusation: tally the clues that implicate the accused.

use crate::clues::ClueBook;
use crate::suspects::SuspectTable;
use std::fmt;

/// Clues needed to convict.
pub const REQUIRED_CLUES: usize = 2;

/// Outcome of an accusation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Enough evidence; the case is closed.
    Solved,
    /// Unresolved: a single clue points at the accused.
    OneClue,
    /// Unresolved: nothing points at the accused.
    NoClues,
}

impl Verdict {
    /// Verdict for a given number of supporting clues.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Verdict::NoClues,
            n if n < REQUIRED_CLUES => Verdict::OneClue,
            _ => Verdict::Solved,
        }
    }

    pub fn is_solved(self) -> bool {
        matches!(self, Verdict::Solved)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_solved() {
            write!(f, "case solved")
        } else {
            write!(f, "case unresolved")
        }
    }
}

/// The evaluated accusation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accusation {
    pub accused: String,
    /// Supporting clues in ascending order.
    pub supporting: Vec<String>,
    pub verdict: Verdict,
}

impl Accusation {
    /// Weigh the notebook against the accused.
    ///
    /// The name must match a suspect exactly; only a trailing line
    /// terminator is removed.
    pub fn evaluate(notebook: &ClueBook, suspects: &SuspectTable, accused: &str) -> Self {
        let accused = normalize_accused(accused);
        let supporting: Vec<String> = notebook
            .list_matching(|clue| suspects.implicates(clue, accused))
            .map(String::from)
            .collect();
        let verdict = Verdict::from_count(supporting.len());

        Self {
            accused: accused.to_string(),
            supporting,
            verdict,
        }
    }

    pub fn match_count(&self) -> usize {
        self.supporting.len()
    }
}

/// Strip one trailing `\n` or `\r\n`.
pub fn normalize_accused(input: &str) -> &str {
    match input.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => input,
    }
}
