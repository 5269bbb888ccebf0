use crate::config::Config;
use crate::parser::ner::EntityRecognizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process-wide NER model, loaded once at startup and only read afterwards.
    pub recognizer: &'static dyn EntityRecognizer,
}
