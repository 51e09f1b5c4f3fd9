use std::sync::Arc;

use crate::external::llm_provider::CompletionProvider;

#[derive(Clone)]
pub struct AppState {
    pub completions: Arc<dyn CompletionProvider>,
}
