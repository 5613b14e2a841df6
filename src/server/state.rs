//! Shared application state for the API server.

use crate::producer::BibleProducer;
use std::sync::Arc;

/// State accessible by all handlers via axum's State extractor. The producer
/// is stateless, so concurrent requests share it without locking.
pub struct AppState {
    pub producer: BibleProducer,
}

pub type SharedState = Arc<AppState>;
