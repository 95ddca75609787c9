//! Quiz on the current story: answer, reveal, advance, score.

use std::fmt;

use ss_core::{ContentProvider, QuizQuestion};
use ss_session::{KeyValueStore, SessionState};
use tracing::debug;

use crate::error::{FlowError, FlowResult};
use crate::progress::Progress;
use crate::route::{Entry, Route, Transition};

/// Display state of one answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    /// Not yet answered, or answered elsewhere and not the correct option.
    Idle,
    /// Revealed as the correct answer.
    Correct,
    /// Chosen, and wrong.
    Incorrect,
}

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback<'a> {
    /// Whether the chosen option was correct.
    pub correct: bool,
    /// Text of the correct option.
    pub answer: Option<&'a str>,
    /// Why the correct option is correct.
    pub explanation: &'a str,
}

/// Qualitative band for a final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// 80% and up.
    Excellent,
    /// 60% to 79%.
    Good,
    /// Below 60%.
    KeepLearning,
}

impl Band {
    /// Band for a percentage.
    pub fn from_percent(percent: u32) -> Self {
        if percent >= 80 {
            Band::Excellent
        } else if percent >= 60 {
            Band::Good
        } else {
            Band::KeepLearning
        }
    }

    /// Short band name.
    pub fn label(self) -> &'static str {
        match self {
            Band::Excellent => "Excellent",
            Band::Good => "Good",
            Band::KeepLearning => "Keep Learning",
        }
    }

    /// Results headline.
    pub fn headline(self) -> &'static str {
        match self {
            Band::Excellent => "Excellent!",
            Band::Good => "Good Job!",
            Band::KeepLearning => "Keep Learning!",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    /// Correct answers.
    pub score: usize,
    /// Questions asked.
    pub total: usize,
    /// `round(score / total * 100)`.
    pub percent: u32,
    /// Band for `percent`.
    pub band: Band,
}

impl QuizResults {
    /// Tally `score` out of `total`.
    pub fn new(score: usize, total: usize) -> Self {
        let percent = if total == 0 {
            0
        } else {
            (score as f64 / total as f64 * 100.0).round() as u32
        };
        Self {
            score,
            total,
            percent,
            band: Band::from_percent(percent),
        }
    }

    /// "You got N out of M questions correct".
    pub fn summary(&self) -> String {
        format!(
            "You got {} out of {} questions correct",
            self.score, self.total
        )
    }
}

/// One pass through the quiz. Dropped when the player leaves the screen.
#[derive(Debug, Clone)]
pub struct QuizAttempt {
    title: String,
    questions: Vec<QuizQuestion>,
    current: usize,
    selected: Option<usize>,
    score: usize,
    finished: bool,
}

impl QuizAttempt {
    /// Open the quiz on the session's current story, or redirect to the
    /// browser when there is none.
    pub fn enter<P, S>(provider: &P, session: &SessionState<S>) -> Entry<Self>
    where
        P: ContentProvider + ?Sized,
        S: KeyValueStore,
    {
        let Some(story) = session.current_story() else {
            return Entry::Redirect(Route::Stories);
        };
        let questions = provider.questions_for(&story);
        if questions.is_empty() {
            return Entry::Redirect(Route::Stories);
        }
        Entry::Ready(Self::new(story.title, questions))
    }

    /// An attempt over explicit questions.
    pub fn new(title: impl Into<String>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            title: title.into(),
            questions,
            current: 0,
            selected: None,
            score: 0,
            finished: false,
        }
    }

    /// Title of the story being quizzed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The question on screen.
    pub fn question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current)
    }

    /// 0-based index of the current question.
    pub fn index(&self) -> usize {
        self.current
    }

    /// Number of questions.
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// The option chosen for the current question.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Whether the current question has been answered.
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Whether the results view is showing.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Choose an option for the current question.
    ///
    /// Returns `Some(correct)` for the first choice, `None` if the question
    /// is already locked or the quiz is over.
    pub fn select(&mut self, option: usize) -> FlowResult<Option<bool>> {
        if self.finished || self.selected.is_some() {
            return Ok(None);
        }
        let Some(question) = self.questions.get(self.current) else {
            return Ok(None);
        };
        let count = question.options.len();
        if option >= count {
            return Err(FlowError::InvalidOption {
                index: option,
                count,
            });
        }
        let correct = question.is_correct(option);
        self.selected = Some(option);
        if correct {
            self.score += 1;
        }
        debug!(question = question.id, option, correct, score = self.score, "answer");
        Ok(Some(correct))
    }

    /// Feedback for the current question once answered.
    pub fn feedback(&self) -> Option<Feedback<'_>> {
        let selected = self.selected?;
        let question = self.question()?;
        Some(Feedback {
            correct: question.is_correct(selected),
            answer: question.correct_option(),
            explanation: &question.explanation,
        })
    }

    /// Display state of option `option` on the current question.
    pub fn option_state(&self, option: usize) -> OptionState {
        let (Some(selected), Some(question)) = (self.selected, self.question()) else {
            return OptionState::Idle;
        };
        if question.is_correct(option) {
            OptionState::Correct
        } else if option == selected {
            OptionState::Incorrect
        } else {
            OptionState::Idle
        }
    }

    /// Move past an answered question. Returns false if the current question
    /// has not been answered yet.
    pub fn advance(&mut self) -> bool {
        if self.finished || self.selected.is_none() {
            return false;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
        } else {
            self.finished = true;
            debug!(score = self.score, total = self.questions.len(), "quiz finished");
        }
        true
    }

    /// Label of the advance button.
    pub fn advance_label(&self) -> &'static str {
        if self.current + 1 < self.questions.len() {
            "Next Question"
        } else {
            "See Results"
        }
    }

    /// "Question N of M".
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.current + 1, self.questions.len())
    }

    /// Progress through the questions.
    pub fn progress(&self) -> Progress {
        Progress::new(self.current, self.questions.len())
    }

    /// Final tally, once finished.
    pub fn results(&self) -> Option<QuizResults> {
        self.finished
            .then(|| QuizResults::new(self.score, self.questions.len()))
    }

    /// Start over from the first question with a zero score.
    pub fn retry(&mut self) {
        self.current = 0;
        self.selected = None;
        self.score = 0;
        self.finished = false;
    }

    /// Leave the quiz for the previous screen.
    pub fn back(&self) -> Transition {
        Transition::Pop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ss_core::{Catalog, derive_questions};

    fn attempt() -> QuizAttempt {
        QuizAttempt::new("Topic", derive_questions("Topic"))
    }

    fn answer_all(quiz: &mut QuizAttempt, correct: bool) {
        while !quiz.is_finished() {
            let q = quiz.question().unwrap();
            let pick = if correct { q.correct } else { (q.correct + 1) % 4 };
            quiz.select(pick).unwrap();
            quiz.advance();
        }
    }

    #[test]
    fn enter_requires_current_story() {
        let session = SessionState::in_memory();
        assert!(matches!(
            QuizAttempt::enter(&Catalog::builtin(), &session),
            Entry::Redirect(Route::Stories)
        ));
    }

    #[test]
    fn enter_uses_story_title() {
        let mut session = SessionState::in_memory();
        let catalog = Catalog::builtin();
        session.set_current_story(&catalog.stories()[0]).unwrap();
        let quiz = QuizAttempt::enter(&catalog, &session).ready().unwrap();
        assert_eq!(quiz.title(), "The Future of AI");
        assert!(quiz.question().unwrap().prompt.contains("The Future of AI"));
    }

    #[test]
    fn all_correct_is_excellent() {
        let mut quiz = attempt();
        answer_all(&mut quiz, true);
        let results = quiz.results().unwrap();
        assert_eq!(results.percent, 100);
        assert_eq!(results.band, Band::Excellent);
        assert_eq!(results.score, 5);
    }

    #[test]
    fn none_correct_is_keep_learning() {
        let mut quiz = attempt();
        answer_all(&mut quiz, false);
        let results = quiz.results().unwrap();
        assert_eq!(results.percent, 0);
        assert_eq!(results.band, Band::KeepLearning);
    }

    #[test]
    fn selection_locks() {
        let mut quiz = attempt();
        let correct = quiz.question().unwrap().correct;
        let wrong = (correct + 1) % 4;
        assert_eq!(quiz.select(wrong).unwrap(), Some(false));
        assert_eq!(quiz.select(correct).unwrap(), None);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.selected(), Some(wrong));
    }

    #[test]
    fn invalid_option_rejected() {
        let mut quiz = attempt();
        let err = quiz.select(4).unwrap_err();
        assert!(matches!(err, FlowError::InvalidOption { index: 4, count: 4 }));
        assert!(!quiz.is_answered());
    }

    #[test]
    fn option_states_after_wrong_answer() {
        let mut quiz = attempt();
        let correct = quiz.question().unwrap().correct;
        let wrong = (correct + 1) % 4;
        assert_eq!(quiz.option_state(correct), OptionState::Idle);
        quiz.select(wrong).unwrap();
        assert_eq!(quiz.option_state(correct), OptionState::Correct);
        assert_eq!(quiz.option_state(wrong), OptionState::Incorrect);
        let other = (correct + 2) % 4;
        assert_eq!(quiz.option_state(other), OptionState::Idle);
    }

    #[test]
    fn feedback_carries_explanation() {
        let mut quiz = attempt();
        assert!(quiz.feedback().is_none());
        let correct = quiz.question().unwrap().correct;
        quiz.select(correct).unwrap();
        let fb = quiz.feedback().unwrap();
        assert!(fb.correct);
        assert!(fb.explanation.contains("fundamental concepts"));
    }

    #[test]
    fn wrong_answer_feedback_names_the_right_one() {
        let mut quiz = attempt();
        let question = quiz.question().unwrap().clone();
        quiz.select((question.correct + 1) % 4).unwrap();
        let fb = quiz.feedback().unwrap();
        assert!(!fb.correct);
        assert_eq!(fb.answer, Some(question.options[question.correct].as_str()));
    }

    #[test]
    fn advance_requires_answer() {
        let mut quiz = attempt();
        assert!(!quiz.advance());
        assert_eq!(quiz.index(), 0);
    }

    #[test]
    fn advance_label_on_last() {
        let mut quiz = attempt();
        assert_eq!(quiz.advance_label(), "Next Question");
        for _ in 0..4 {
            quiz.select(0).unwrap();
            quiz.advance();
        }
        assert_eq!(quiz.position_label(), "Question 5 of 5");
        assert_eq!(quiz.advance_label(), "See Results");
    }

    #[test]
    fn retry_resets() {
        let mut quiz = attempt();
        answer_all(&mut quiz, true);
        quiz.retry();
        assert!(!quiz.is_finished());
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.score(), 0);
        assert!(quiz.selected().is_none());
        assert!(quiz.results().is_none());
    }

    #[test]
    fn mixed_score_rounds() {
        let r = QuizResults::new(3, 5);
        assert_eq!(r.percent, 60);
        assert_eq!(r.band, Band::Good);
        let r = QuizResults::new(2, 3);
        assert_eq!(r.percent, 67);
        assert_eq!(QuizResults::new(0, 0).percent, 0);
    }

    #[test]
    fn band_boundaries() {
        assert_eq!(Band::from_percent(80), Band::Excellent);
        assert_eq!(Band::from_percent(79), Band::Good);
        assert_eq!(Band::from_percent(60), Band::Good);
        assert_eq!(Band::from_percent(59), Band::KeepLearning);
    }

    #[test]
    fn results_summary_text() {
        let r = QuizResults::new(4, 5);
        insta::assert_snapshot!(r.summary(), @"You got 4 out of 5 questions correct");
        assert_eq!(r.band.headline(), "Excellent!");
    }

    #[test]
    fn back_pops() {
        assert_eq!(attempt().back(), Transition::Pop);
    }
}
