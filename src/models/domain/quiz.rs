use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: u64,
    pub title: String,
    pub question_ids: Vec<u64>, // ids of questions belonging to this quiz
}

impl Quiz {
    pub fn new(id: u64, title: String) -> Self {
        Quiz {
            id,
            title,
            question_ids: Vec::new(),
        }
    }
}
