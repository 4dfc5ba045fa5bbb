//! Room riddles and answer matching.

use labyrinth_data::PuzzleDef;

/// Extra spellings accepted for known numeric answers, keyed by the normalized expected answer.
const ALTERNATIVE_ANSWERS: &[(&str, &[&str])] = &[("10", &["десять", "ten"]), ("4", &["четыре", "four"])];

/// A question attached to a room, with the answer that clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub question: String,
    pub answer: String,
}

impl Puzzle {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// True if `attempt` matches the expected answer or one of its accepted alternatives.
    pub fn accepts(&self, attempt: &str) -> bool {
        answer_matches(&self.answer, attempt)
    }
}

impl From<&PuzzleDef> for Puzzle {
    fn from(def: &PuzzleDef) -> Self {
        Self::new(def.question.clone(), def.answer.clone())
    }
}

/// Trim and lower-case an answer for comparison.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Every normalized answer accepted for `expected`.
pub fn acceptable_answers(expected: &str) -> Vec<String> {
    let expected = normalize_answer(expected);
    let mut accepted = vec![expected.clone()];
    if let Some((_, alternatives)) = ALTERNATIVE_ANSWERS.iter().find(|(key, _)| *key == expected) {
        accepted.extend(alternatives.iter().map(|alt| (*alt).to_string()));
    }
    accepted
}

/// Compare `attempt` against `expected` after normalizing both.
pub fn answer_matches(expected: &str, attempt: &str) -> bool {
    let attempt = normalize_answer(attempt);
    acceptable_answers(expected).contains(&attempt)
}

/// True if the reply is a request to leave the game rather than an answer.
pub fn is_quit_reply(reply: &str) -> bool {
    matches!(normalize_answer(reply).as_str(), "quit" | "exit")
}
