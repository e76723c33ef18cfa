pub mod question;
pub mod quiz;
pub use question::{Question, QuestionOption};
pub use quiz::Quiz;
