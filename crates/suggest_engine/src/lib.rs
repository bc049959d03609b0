//! Suggestion engine: debounce timer, HTTP fetcher and effect execution.
mod debounce;
mod endpoint;
mod engine;
mod fetch;
mod types;

pub use debounce::DebounceTimer;
pub use endpoint::{suggestions_url, SUGGESTIONS_PATH};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, ReqwestFetcher, SuggestionFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, Generation, RequestId, SuggestionRecord};
