// ============================================================
// Layer 2 — QuizUseCase
// ============================================================
// Drives one pass through the sorting quiz.
//
// Each question moves through two states:
//
//   Unanswered ──check(option)──▶ Answered { selected, correct }
//
// Checking again overwrites the recorded answer. Correctness
// is direct equality with the question's correct option.
//
// The score has two tally policies:
//
//   Running    — a counter bumped at check-time for every
//                correct check, never decremented. Re-checking
//                a question can count it twice. This is how
//                the quiz has always behaved.
//   FinalState — the score is recomputed from the recorded
//                answers when results are requested.
//
// Running stays the default until the re-check behaviour is
// settled; see DESIGN.md.

use serde::{Deserialize, Serialize};

use crate::domain::{error::QuizError, quiz_question::QuizQuestion};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyPolicy {
    #[default]
    Running,
    FinalState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Answered { selected: String, correct: bool },
}

/// Feedback for one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub correct:     bool,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub score:   usize,
    pub total:   usize,
    /// Every question right: show the celebration
    pub perfect: bool,
}

pub struct QuizUseCase {
    questions:     Vec<QuizQuestion>,
    states:        Vec<AnswerState>,
    running_score: usize,
    policy:        TallyPolicy,
}

impl QuizUseCase {
    pub fn new(questions: Vec<QuizQuestion>, policy: TallyPolicy) -> Self {
        let states = vec![AnswerState::Unanswered; questions.len()];
        Self { questions, states, running_score: 0, policy }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn state(&self, index: usize) -> Option<&AnswerState> {
        self.states.get(index)
    }

    /// Record `option` as the answer to question `index` and
    /// report whether it is right.
    pub fn check(&mut self, index: usize, option: &str) -> Result<CheckOutcome, QuizError> {
        let total    = self.questions.len();
        let question = self
            .questions
            .get(index)
            .ok_or(QuizError::NoSuchQuestion { index, total })?;

        if !question.has_option(option) {
            return Err(QuizError::NoSuchOption { index, option: option.to_string() });
        }

        let correct = question.is_correct(option);
        if correct {
            self.running_score += 1;
        }
        let explanation = question.explanation().to_string();

        self.states[index] = AnswerState::Answered { selected: option.to_string(), correct };
        tracing::debug!("Q{} checked: '{}' correct={}", index + 1, option, correct);

        Ok(CheckOutcome { correct, explanation })
    }

    pub fn results(&self) -> QuizResults {
        let score = match self.policy {
            TallyPolicy::Running    => self.running_score,
            TallyPolicy::FinalState => self
                .states
                .iter()
                .filter(|s| matches!(s, AnswerState::Answered { correct: true, .. }))
                .count(),
        };
        let total = self.questions.len();

        QuizResults { score, total, perfect: score == total }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quiz_bank::builtin_questions;

    fn quiz(policy: TallyPolicy) -> QuizUseCase {
        QuizUseCase::new(builtin_questions().unwrap(), policy)
    }

    #[test]
    fn test_all_correct_is_perfect() {
        let mut q = quiz(TallyPolicy::Running);
        for (i, answer) in ["可燃ごみ", "資源ごみ", "不燃ごみ", "資源ごみ"].iter().enumerate() {
            assert!(q.check(i, answer).unwrap().correct);
        }
        let r = q.results();
        assert_eq!((r.score, r.total), (4, 4));
        assert!(r.perfect);
    }

    #[test]
    fn test_two_of_four() {
        let mut q = quiz(TallyPolicy::Running);
        q.check(0, "可燃ごみ").unwrap();
        q.check(1, "資源ごみ").unwrap();
        assert!(!q.check(2, "資源ごみ").unwrap().correct);
        assert!(!q.check(3, "可燃ごみ").unwrap().correct);

        let r = q.results();
        assert_eq!((r.score, r.total), (2, 4));
        assert!(!r.perfect);
    }

    #[test]
    fn test_check_returns_explanation_and_records_state() {
        let mut q   = quiz(TallyPolicy::Running);
        let outcome = q.check(0, "不燃ごみ").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.explanation, "バナナの皮は生ごみなので可燃ごみです。");
        assert_eq!(
            q.state(0),
            Some(&AnswerState::Answered { selected: "不燃ごみ".into(), correct: false })
        );
        assert_eq!(q.state(1), Some(&AnswerState::Unanswered));
    }

    #[test]
    fn test_unanswered_questions_score_nothing() {
        let q = quiz(TallyPolicy::FinalState);
        assert_eq!(q.results().score, 0);
    }

    #[test]
    fn test_running_tally_counts_every_correct_check() {
        let mut q = quiz(TallyPolicy::Running);
        q.check(0, "可燃ごみ").unwrap();
        q.check(0, "不燃ごみ").unwrap();
        q.check(0, "可燃ごみ").unwrap();
        assert_eq!(q.results().score, 2);
    }

    #[test]
    fn test_final_state_tally_uses_last_answer() {
        let mut q = quiz(TallyPolicy::FinalState);
        q.check(0, "可燃ごみ").unwrap();
        q.check(0, "不燃ごみ").unwrap();
        assert_eq!(q.results().score, 0);
        q.check(0, "可燃ごみ").unwrap();
        assert_eq!(q.results().score, 1);
    }

    #[test]
    fn test_bad_index_and_option() {
        let mut q = quiz(TallyPolicy::Running);
        assert_eq!(
            q.check(9, "可燃ごみ"),
            Err(QuizError::NoSuchQuestion { index: 9, total: 4 })
        );
        assert!(matches!(q.check(0, "粗大ごみ"), Err(QuizError::NoSuchOption { .. })));
        assert_eq!(q.results().score, 0);
    }
}
