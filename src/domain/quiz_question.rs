// ============================================================
// Layer 3 — QuizQuestion Domain Type
// ============================================================
// A single multiple-choice question about sorting categories:
//
//   prompt:         "バナナの皮はどのごみ？"
//   options:        ["可燃ごみ", "不燃ごみ", "資源ごみ"]
//   correct_option: "可燃ごみ"
//   explanation:    "バナナの皮は生ごみなので可燃ごみです。"
//
// Invariants (checked by `new`):
//   - at least two options
//   - correct_option is one of the options

use serde::{Deserialize, Serialize};

use crate::domain::error::QuizError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    prompt:         String,
    options:        Vec<String>,
    correct_option: String,
    explanation:    String,
}

impl QuizQuestion {
    pub fn new(
        prompt:         impl Into<String>,
        options:        Vec<String>,
        correct_option: impl Into<String>,
        explanation:    impl Into<String>,
    ) -> Result<Self, QuizError> {
        let prompt         = prompt.into();
        let correct_option = correct_option.into();

        if options.len() < 2 {
            return Err(QuizError::InvalidQuestion {
                prompt,
                reason: format!("needs at least 2 options, got {}", options.len()),
            });
        }
        if !options.contains(&correct_option) {
            return Err(QuizError::InvalidQuestion {
                prompt,
                reason: format!("answer '{correct_option}' is not among the options"),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Direct equality against the correct option
    pub fn is_correct(&self, option: &str) -> bool {
        option == self.correct_option
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}
