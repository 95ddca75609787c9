use serde::{Deserialize, Serialize};

/// Number of answer options on every question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// 1-based position within the quiz.
    pub id: u32,
    /// The question text.
    pub prompt: String,
    /// Answer options, in display order.
    pub options: [String; OPTIONS_PER_QUESTION],
    /// Index into `options` of the correct answer.
    pub correct: usize,
    /// Shown after the player answers.
    pub explanation: String,
}

impl QuizQuestion {
    /// Whether `option` is the correct answer.
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }

    /// The text of the correct answer, if `correct` names one of the options.
    pub fn correct_option(&self) -> Option<&str> {
        self.options.get(self.correct).map(String::as_str)
    }
}

fn question(
    id: u32,
    prompt: String,
    options: [&str; OPTIONS_PER_QUESTION],
    correct: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id,
        prompt,
        options: options.map(str::to_string),
        correct,
        explanation: explanation.to_string(),
    }
}

/// Build the five quiz questions for a story title.
pub fn derive_questions(title: &str) -> Vec<QuizQuestion> {
    vec![
        question(
            1,
            format!("What is a key fundamental concept behind {title}?"),
            [
                "Understanding surface-level details only",
                "Exploring basics and setting foundation for deeper understanding",
                "Ignoring historical context",
                "Focusing only on future predictions",
            ],
            1,
            "The first chunk emphasized understanding fundamental concepts as a foundation.",
        ),
        question(
            2,
            format!("Why is historical context important for {title}?"),
            [
                "It is not important at all",
                "It only matters for academic purposes",
                "Understanding the past helps illuminate the present",
                "History has no connection to current topics",
            ],
            2,
            "Historical context provides valuable perspective on how the topic evolved.",
        ),
        question(
            3,
            format!("What do expert perspectives provide regarding {title}?"),
            [
                "Only theoretical knowledge",
                "Valuable insights from those at the forefront",
                "Outdated information",
                "Unverified opinions",
            ],
            1,
            "Expert perspectives offer insights from industry leaders and pioneers in the field.",
        ),
        question(
            4,
            "How does real-world application enhance understanding?".to_string(),
            [
                "It makes topics more confusing",
                "It is irrelevant to learning",
                "It brings theory to reality through practical examples",
                "It only applies to specific industries",
            ],
            2,
            "Real-world applications demonstrate how concepts manifest in everyday life.",
        ),
        question(
            5,
            format!("What is valuable about exploring future trends in {title}?"),
            [
                "Nothing, only the past matters",
                "Understanding predictions and emerging patterns that shape tomorrow",
                "Future trends are always wrong",
                "It creates unnecessary speculation",
            ],
            1,
            "Future trends help us anticipate and prepare for upcoming developments.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_questions() {
        let qs = derive_questions("Abstract Expressions");
        assert_eq!(qs.len(), 5);
        assert_eq!(qs.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn correct_index_in_range() {
        for q in derive_questions("x") {
            assert!(q.correct < OPTIONS_PER_QUESTION);
            assert!(q.is_correct(q.correct));
            let wrong = (q.correct + 1) % OPTIONS_PER_QUESTION;
            assert!(!q.is_correct(wrong));
        }
    }

    #[test]
    fn prompts_use_title() {
        let qs = derive_questions("The Future of AI");
        assert_eq!(
            qs[0].prompt,
            "What is a key fundamental concept behind The Future of AI?"
        );
        // question 4 is generic
        assert!(!qs[3].prompt.contains("The Future of AI"));
    }

    #[test]
    fn correct_option_text() {
        let qs = derive_questions("x");
        assert_eq!(
            qs[1].correct_option(),
            Some("Understanding the past helps illuminate the present")
        );
    }

    #[test]
    fn correct_index_out_of_range_has_no_text() {
        let mut q = derive_questions("x").remove(0);
        q.correct = OPTIONS_PER_QUESTION;
        assert_eq!(q.correct_option(), None);
        assert!(!q.is_correct(0));
    }
}
