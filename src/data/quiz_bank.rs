// ============================================================
// Layer 4 — Built-in Quiz Bank
// ============================================================
// The four questions of the sorting quiz. Defined once at
// start-up and never mutated.
//
// Every question offers the same three household categories:
//   可燃ごみ (burnable) / 不燃ごみ (non-burnable) / 資源ごみ (recyclable)

use rand::seq::SliceRandom;

use crate::domain::{error::QuizError, quiz_question::QuizQuestion};

const CHOICES: [&str; 3] = ["可燃ごみ", "不燃ごみ", "資源ごみ"];

/// (prompt, answer, explanation)
const QUESTIONS: [(&str, &str, &str); 4] = [
    (
        "バナナの皮はどのごみ？",
        "可燃ごみ",
        "バナナの皮は生ごみなので可燃ごみです。",
    ),
    (
        "空き缶はどのごみ？",
        "資源ごみ",
        "缶はリサイクルできるので資源ごみです。",
    ),
    (
        "割れたガラスはどのごみ？",
        "不燃ごみ",
        "ガラスは燃やせないので不燃ごみです。",
    ),
    (
        "新聞紙はどのごみ？",
        "資源ごみ",
        "新聞紙は紙類の資源ごみとしてリサイクルできます。",
    ),
];

/// Build the built-in questions in their fixed order.
pub fn builtin_questions() -> Result<Vec<QuizQuestion>, QuizError> {
    QUESTIONS
        .iter()
        .map(|(prompt, answer, explanation)| {
            QuizQuestion::new(
                *prompt,
                CHOICES.iter().map(|c| c.to_string()).collect(),
                *answer,
                *explanation,
            )
        })
        .collect()
}

/// Shuffle question order in place (Fisher-Yates via SliceRandom).
pub fn shuffle(questions: &mut [QuizQuestion]) {
    let mut rng = rand::thread_rng();
    questions.shuffle(&mut rng);
    tracing::debug!("Shuffled {} quiz questions", questions.len());
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_bank_is_valid() {
        let qs = builtin_questions().unwrap();
        assert_eq!(qs.len(), 4);
        assert_eq!(qs[0].prompt(), "バナナの皮はどのごみ？");
        assert_eq!(qs[2].correct_option(), "不燃ごみ");
        assert!(qs.iter().all(|q| q.options().len() == 3));
    }

    #[test]
    fn test_shuffle_keeps_every_question() {
        let mut qs = builtin_questions().unwrap();
        shuffle(&mut qs);

        let mut prompts: Vec<&str> = qs.iter().map(|q| q.prompt()).collect();
        prompts.sort();
        let mut expected: Vec<&str> = QUESTIONS.iter().map(|q| q.0).collect();
        expected.sort();
        assert_eq!(prompts, expected);
    }
}
