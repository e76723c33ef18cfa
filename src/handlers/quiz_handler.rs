use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{AddQuestionRequest, AnswerInput, CreateQuizRequest},
};

fn quiz_not_found(quiz_id: u64) -> AppError {
    AppError::NotFound(format!("Quiz with ID {} not found.", quiz_id))
}

#[post("/quizzes")]
async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let Some(title) = request.title else {
        return Err(AppError::ValidationError("Quiz title is required.".into()));
    };

    let quiz = state.store.create_quiz(title).await;
    Ok(HttpResponse::Created().json(quiz))
}

/// Author surface: the created question is echoed back with `isCorrect`
/// intact. Validation runs before the store is consulted, so a bad body on a
/// missing quiz reports 400, not 404.
#[post("/quizzes/{quiz_id}/questions")]
async fn add_question(
    state: web::Data<AppState>,
    quiz_id: web::Path<u64>,
    request: web::Json<AddQuestionRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;
    let (Some(text), Some(options)) = (request.text, request.options) else {
        return Err(AppError::ValidationError(
            "Valid question text and at least two options are required.".into(),
        ));
    };

    let question = state
        .store
        .add_question(*quiz_id, text, &options)
        .await
        .ok_or_else(|| quiz_not_found(*quiz_id))?;
    Ok(HttpResponse::Created().json(question))
}

#[get("/quizzes")]
async fn list_quizzes(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.list_quizzes().await)
}

#[get("/quizzes/{quiz_id}/questions")]
async fn get_quiz_questions(
    state: web::Data<AppState>,
    quiz_id: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
    let questions = state
        .store
        .questions_for_quiz(*quiz_id)
        .await
        .ok_or_else(|| quiz_not_found(*quiz_id))?;
    Ok(HttpResponse::Ok().json(questions))
}

#[post("/quizzes/{quiz_id}/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<u64>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
    let serde_json::Value::Array(entries) = body.into_inner() else {
        return Err(AppError::ValidationError(
            "Answers must be submitted as an array.".into(),
        ));
    };

    // Entries that do not parse as integer id pairs could never match a
    // stored id, so they are skipped rather than rejected.
    let answers: Vec<AnswerInput> = entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect();

    let result = state
        .store
        .score_submission(*quiz_id, &answers)
        .await
        .ok_or_else(|| quiz_not_found(*quiz_id))?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/")]
async fn welcome() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the Online Quiz Application API. Use /quizzes to start.")
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
