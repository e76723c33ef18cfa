#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::Question;
    use crate::models::dto::request::OptionInput;
    use crate::store::QuizStore;

    fn option(text: &str, is_correct: bool) -> OptionInput {
        OptionInput {
            text: text.to_string(),
            is_correct,
        }
    }

    /// Options for the capital-of-France question; Paris is correct.
    pub fn capitals_options() -> Vec<OptionInput> {
        vec![
            option("London", false),
            option("Paris", true),
            option("Rome", false),
        ]
    }

    /// Options for the Red Planet question; Mars is correct.
    pub fn red_planet_options() -> Vec<OptionInput> {
        vec![
            option("Earth", false),
            option("Mars", true),
            option("Jupiter", false),
        ]
    }

    /// A store holding one quiz with both sample questions, plus the quiz id
    /// and the stored questions (correctness flags included, for scoring).
    pub async fn populated_store() -> (QuizStore, u64, Vec<Question>) {
        let store = QuizStore::new();
        let quiz = store
            .create_quiz("General Knowledge Quiz".to_string())
            .await;

        let first = store
            .add_question(
                quiz.id,
                "What is the capital of France?".to_string(),
                &capitals_options(),
            )
            .await
            .expect("quiz exists");
        let second = store
            .add_question(
                quiz.id,
                "What planet is known as the Red Planet?".to_string(),
                &red_planet_options(),
            )
            .await
            .expect("quiz exists");

        let quiz_id = quiz.id;
        (store, quiz_id, vec![first, second])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn fixture_option_sets_have_one_correct_each() {
        for options in [capitals_options(), red_planet_options()] {
            assert_eq!(options.len(), 3);
            assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
        }
    }

    #[tokio::test]
    async fn populated_store_links_both_questions() {
        let (store, quiz_id, questions) = populated_store().await;

        assert_eq!(questions.len(), 2);
        let quizzes = store.list_quizzes().await;
        assert_eq!(quizzes[0].id, quiz_id);
        assert_eq!(
            quizzes[0].question_ids,
            [questions[0].id, questions[1].id]
        );
    }
}
