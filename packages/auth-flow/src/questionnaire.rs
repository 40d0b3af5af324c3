//! The personality questionnaire collected during registration.
//!
//! The prompt list is canonical and ordered; all fifteen answers are
//! mandatory before the registration draft may be submitted. Answers are
//! keyed by the question text, matching the backend's submit payload.

use std::collections::HashMap;

/// The fixed question set, in presentation order.
pub const QUESTIONS: [&str; 15] = [
    "What are your hobbies?",
    "Do you prefer indoor or outdoor activities?",
    "Do you smoke?",
    "Do you drink alcohol?",
    "What kind of books do you like to read?",
    "What is your favorite type of music?",
    "Do you enjoy traveling? If yes, where do you want to go?",
    "Are you a morning person or a night owl?",
    "What kind of movies or shows do you enjoy?",
    "What is your preferred way to relax?",
    "Do you have any dietary preferences or restrictions?",
    "How do you usually spend your weekends?",
    "What kind of people do you like to talk to?",
    "How do you usually introduce yourself to new people?",
    "What\u{2019}s one habit or routine you follow daily?",
];

/// Accumulated questionnaire answers. Insertion order is irrelevant; the
/// last write per question wins.
#[derive(Debug, Clone, Default)]
pub struct Questionnaire {
    answers: HashMap<String, String>,
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, replacing any previous one for the same question.
    pub fn answer(&mut self, question: &str, answer: &str) {
        self.answers.insert(question.to_string(), answer.to_string());
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.answers.get(question).map(String::as_str)
    }

    /// Canonical questions that are unanswered or answered with only
    /// whitespace, in presentation order.
    pub fn missing(&self) -> Vec<&'static str> {
        QUESTIONS
            .iter()
            .filter(|q| {
                self.answers
                    .get(**q)
                    .map(|a| a.trim().is_empty())
                    .unwrap_or(true)
            })
            .copied()
            .collect()
    }

    /// True once every canonical question has a non-empty answer.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Consume into the submit payload map.
    pub fn into_answers(self) -> HashMap<String, String> {
        self.answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_questionnaire_misses_everything() {
        let q = Questionnaire::new();
        assert_eq!(q.missing().len(), 15);
        assert!(!q.is_complete());
    }

    #[test]
    fn test_missing_preserves_canonical_order() {
        let mut q = Questionnaire::new();
        q.answer(QUESTIONS[0], "reading");
        q.answer(QUESTIONS[2], "no");

        let missing = q.missing();
        assert_eq!(missing.len(), 13);
        assert_eq!(missing[0], QUESTIONS[1]);
    }

    #[test]
    fn test_whitespace_answer_counts_as_missing() {
        let mut q = Questionnaire::new();
        for question in QUESTIONS {
            q.answer(question, "something");
        }
        q.answer(QUESTIONS[4], "   ");

        assert!(!q.is_complete());
        assert_eq!(q.missing(), vec![QUESTIONS[4]]);
    }

    #[test]
    fn test_last_write_wins() {
        let mut q = Questionnaire::new();
        q.answer(QUESTIONS[0], "chess");
        q.answer(QUESTIONS[0], "hiking");
        assert_eq!(q.get(QUESTIONS[0]), Some("hiking"));
    }

    #[test]
    fn test_all_answered_is_complete() {
        let mut q = Questionnaire::new();
        for question in QUESTIONS {
            q.answer(question, "an answer");
        }
        assert!(q.is_complete());
        assert_eq!(q.into_answers().len(), 15);
    }

    #[test]
    fn test_unknown_questions_do_not_satisfy_completeness() {
        let mut q = Questionnaire::new();
        q.answer("What is your quest?", "the grail");
        assert_eq!(q.missing().len(), 15);
    }
}
