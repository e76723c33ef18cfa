use serde::{Deserialize, Serialize};

use crate::models::domain::Question;

/// A question as served to quiz takers: options carry no correctness flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: u64,
    pub quiz_id: u64,
    pub text: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub id: u64,
    pub text: String,
}

impl From<&Question> for QuestionView {
    fn from(question: &Question) -> Self {
        QuestionView {
            id: question.id,
            quiz_id: question.quiz_id,
            text: question.text.clone(),
            options: question
                .options
                .iter()
                .map(|opt| OptionView {
                    id: opt.id,
                    text: opt.text.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32,
    pub total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::QuestionOption;

    fn sample_question() -> Question {
        Question {
            id: 4,
            quiz_id: 2,
            text: "What planet is known as the Red Planet?".to_string(),
            options: vec![
                QuestionOption {
                    id: 10,
                    text: "Earth".to_string(),
                    is_correct: false,
                },
                QuestionOption {
                    id: 11,
                    text: "Mars".to_string(),
                    is_correct: true,
                },
            ],
        }
    }

    #[test]
    fn view_keeps_ids_text_and_order() {
        let view = QuestionView::from(&sample_question());

        assert_eq!(view.id, 4);
        assert_eq!(view.quiz_id, 2);
        assert_eq!(view.options.len(), 2);
        assert_eq!(view.options[0].id, 10);
        assert_eq!(view.options[0].text, "Earth");
        assert_eq!(view.options[1].text, "Mars");
    }

    #[test]
    fn view_never_serializes_a_correctness_flag() {
        let view = QuestionView::from(&sample_question());
        let json = serde_json::to_string(&view).expect("view should serialize");

        assert!(!json.contains("isCorrect"));
        assert!(!json.contains("is_correct"));
    }

    #[test]
    fn score_result_serializes_score_and_total() {
        let result = ScoreResult { score: 3, total: 5 };
        let json = serde_json::to_value(result).expect("score should serialize");

        assert_eq!(json, serde_json::json!({ "score": 3, "total": 5 }));
    }
}
