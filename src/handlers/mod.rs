pub mod quiz_handler;

pub use quiz_handler::{
    add_question, create_quiz, get_quiz_questions, health_check, list_quizzes, submit_quiz,
    welcome,
};

use actix_web::web;

/// Mounts the full route table; `main` and the HTTP tests share it.
pub fn configure_routes(config: &mut web::ServiceConfig) {
    config
        .service(create_quiz)
        .service(add_question)
        .service(list_quizzes)
        .service(get_quiz_questions)
        .service(submit_quiz)
        .service(welcome)
        .service(health_check);
}
