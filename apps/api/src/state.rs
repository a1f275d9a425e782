use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::LetterGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable letter generator. Default: LlmLetterGenerator.
    pub generator: Arc<dyn LetterGenerator>,
}
