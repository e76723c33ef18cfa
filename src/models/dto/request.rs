use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(
        required(message = "Quiz title is required."),
        length(min = 1, message = "Quiz title is required.")
    )]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddQuestionRequest {
    #[validate(
        required(message = "Valid question text and at least two options are required."),
        length(min = 1, message = "Valid question text and at least two options are required.")
    )]
    pub text: Option<String>,

    #[validate(
        required(message = "Valid question text and at least two options are required."),
        length(min = 2, message = "Valid question text and at least two options are required."),
        custom(function = exactly_one_correct)
    )]
    pub options: Option<Vec<OptionInput>>,
}

/// An option as submitted by a quiz author; ids are assigned by the store.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInput {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// One answer in a submission body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInput {
    pub question_id: u64,
    pub selected_option_id: u64,
}

fn exactly_one_correct(options: &[OptionInput]) -> Result<(), ValidationError> {
    let correct = options.iter().filter(|opt| opt.is_correct).count();
    if correct == 1 {
        Ok(())
    } else {
        let mut error = ValidationError::new("exactly_one_correct");
        error.message = Some("Exactly one option must be marked as correct.".into());
        Err(error)
    }
}
