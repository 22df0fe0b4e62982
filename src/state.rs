//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds only read-only data: the school dataset and an optional chat
//! model client. Requests share nothing mutable, so no locking is needed.

use std::sync::Arc;

use crate::llm::ChatModel;
use crate::school::SchoolInfo;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub school: Arc<SchoolInfo>,
    /// Optional chat model client. `None` if provider env vars are not
    /// configured — the server then answers every request from local rules.
    pub llm: Option<Arc<dyn ChatModel>>,
}

impl AppState {
    #[must_use]
    pub fn new(school: SchoolInfo, llm: Option<Arc<dyn ChatModel>>) -> Self {
        Self { school: Arc::new(school), llm }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Create a test `AppState` with builtin school data and no chat model.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(SchoolInfo::builtin(), None)
    }

    /// Create a test `AppState` with a mock chat model.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn ChatModel>) -> AppState {
        AppState::new(SchoolInfo::builtin(), Some(llm))
    }
}
