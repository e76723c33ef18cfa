use tokio::sync::RwLock;

use crate::models::domain::{Question, QuestionOption, Quiz};
use crate::models::dto::request::{AnswerInput, OptionInput};
use crate::models::dto::response::{QuestionView, ScoreResult};

/// In-memory repository for quizzes and their questions.
///
/// Collections and id counters live behind a single lock so id assignment
/// and collection mutation stay atomic under concurrent handlers. Ids are
/// strictly increasing and never reused; each of the three entity kinds
/// draws from its own counter.
pub struct QuizStore {
    inner: RwLock<StoreInner>,
}

struct StoreInner {
    quizzes: Vec<Quiz>,
    questions: Vec<Question>,
    next_quiz_id: u64,
    next_question_id: u64,
    next_option_id: u64,
}

impl QuizStore {
    pub fn new() -> Self {
        QuizStore {
            inner: RwLock::new(StoreInner {
                quizzes: Vec::new(),
                questions: Vec::new(),
                next_quiz_id: 1,
                next_question_id: 1,
                next_option_id: 1,
            }),
        }
    }

    pub async fn create_quiz(&self, title: String) -> Quiz {
        let mut inner = self.inner.write().await;

        let id = inner.next_quiz_id;
        inner.next_quiz_id += 1;

        let quiz = Quiz::new(id, title);
        inner.quizzes.push(quiz.clone());
        quiz
    }

    /// Attaches a question to a quiz, assigning fresh ids to the question
    /// and every option. Returns `None` if the quiz does not exist; a failed
    /// add assigns no ids and touches no collection.
    pub async fn add_question(
        &self,
        quiz_id: u64,
        text: String,
        options: &[OptionInput],
    ) -> Option<Question> {
        let mut inner = self.inner.write().await;

        let quiz_index = inner.quizzes.iter().position(|q| q.id == quiz_id)?;

        let mut assigned_options = Vec::with_capacity(options.len());
        for option in options {
            let id = inner.next_option_id;
            inner.next_option_id += 1;
            assigned_options.push(QuestionOption {
                id,
                text: option.text.clone(),
                is_correct: option.is_correct,
            });
        }

        let question = Question {
            id: inner.next_question_id,
            quiz_id,
            text,
            options: assigned_options,
        };
        inner.next_question_id += 1;

        inner.questions.push(question.clone());
        inner.quizzes[quiz_index].question_ids.push(question.id);
        Some(question)
    }

    pub async fn list_quizzes(&self) -> Vec<Quiz> {
        self.inner.read().await.quizzes.clone()
    }

    /// Returns the quiz's questions as sanitized views, in insertion order.
    /// A quiz with no questions yields an empty list; `None` means the quiz
    /// id itself is unknown.
    pub async fn questions_for_quiz(&self, quiz_id: u64) -> Option<Vec<QuestionView>> {
        let inner = self.inner.read().await;

        let views: Vec<QuestionView> = inner
            .questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .map(QuestionView::from)
            .collect();

        if views.is_empty() && !inner.quizzes.iter().any(|q| q.id == quiz_id) {
            return None;
        }
        Some(views)
    }

    /// Scores a submission against a quiz. Each submitted answer is evaluated
    /// independently: one point when its option exists on the named question
    /// of this quiz and is marked correct. Answers naming unknown questions
    /// or options are skipped. Never mutates stored data.
    pub async fn score_submission(
        &self,
        quiz_id: u64,
        answers: &[AnswerInput],
    ) -> Option<ScoreResult> {
        let inner = self.inner.read().await;

        if !inner.quizzes.iter().any(|q| q.id == quiz_id) {
            return None;
        }

        let quiz_questions: Vec<&Question> = inner
            .questions
            .iter()
            .filter(|q| q.quiz_id == quiz_id)
            .collect();
        let total = quiz_questions.len() as u32;

        let mut score = 0;
        for answer in answers {
            let Some(question) = quiz_questions.iter().find(|q| q.id == answer.question_id)
            else {
                continue;
            };

            let selected = question
                .options
                .iter()
                .find(|opt| opt.id == answer.selected_option_id);
            if selected.is_some_and(|opt| opt.is_correct) {
                score += 1;
            }
        }

        Some(ScoreResult { score, total })
    }
}
