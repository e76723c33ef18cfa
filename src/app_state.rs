use std::sync::Arc;

use crate::store::QuizStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<QuizStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(QuizStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn clones_share_one_store() {
        let state = AppState::new();
        let clone = state.clone();

        state.store.create_quiz("Capitals".to_string()).await;

        assert_eq!(clone.store.list_quizzes().await.len(), 1);
    }
}
