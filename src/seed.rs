use crate::models::dto::request::OptionInput;
use crate::store::QuizStore;

fn option(text: &str, is_correct: bool) -> OptionInput {
    OptionInput {
        text: text.to_string(),
        is_correct,
    }
}

/// Loads the demo quiz the service ships with. Called from `main` only, so
/// stores built in tests start empty.
pub async fn demo_data(store: &QuizStore) {
    let quiz = store
        .create_quiz("General Knowledge Quiz".to_string())
        .await;

    store
        .add_question(
            quiz.id,
            "What is the capital of France?".to_string(),
            &[
                option("London", false),
                option("Paris", true),
                option("Rome", false),
            ],
        )
        .await
        .expect("seed quiz exists");

    store
        .add_question(
            quiz.id,
            "What planet is known as the Red Planet?".to_string(),
            &[
                option("Earth", false),
                option("Mars", true),
                option("Jupiter", false),
            ],
        )
        .await
        .expect("seed quiz exists");

    log::info!("Seeded demo quiz '{}' (id {})", quiz.title, quiz.id);
}
