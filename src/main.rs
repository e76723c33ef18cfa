use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use quiz_server::app_state::AppState;
use quiz_server::config::Config;
use quiz_server::handlers::configure_routes;
use quiz_server::seed;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let state = AppState::new();
    seed::demo_data(&state.store).await;

    log::info!(
        "Server is running on http://{}:{}",
        config.host,
        config.port
    );
    log::info!("API Endpoints available:");
    log::info!("POST /quizzes (Create Quiz)");
    log::info!("POST /quizzes/{{quizId}}/questions (Add Question)");
    log::info!("GET /quizzes (List all Quizzes)");
    log::info!("GET /quizzes/{{quizId}}/questions (Fetch Quiz for taking)");
    log::info!("POST /quizzes/{{quizId}}/submit (Submit Answers and Score)");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
