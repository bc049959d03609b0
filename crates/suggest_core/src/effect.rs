use std::time::Duration;

use crate::{Generation, RequestId};

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Replace any running debounce timer with one that fires after `delay`.
    ScheduleDebounce {
        generation: Generation,
        delay: Duration,
    },
    /// Drop the running debounce timer, if any.
    CancelDebounce,
    /// Issue the suggestions request for `query`, superseding any in-flight one.
    FetchSuggestions { request_id: RequestId, query: String },
    /// Abandon the in-flight suggestions request, if any.
    CancelFetch,
    /// Follow the link of an activated dropdown entry.
    Navigate { url: String },
}
