use crate::{Generation, RequestId, Suggestion};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the search box; carries the full raw text.
    InputChanged(String),
    /// The debounce timer scheduled for `generation` fired.
    DebounceElapsed { generation: Generation },
    /// The suggestions request completed with a parsed body.
    SuggestionsLoaded {
        request_id: RequestId,
        suggestions: Vec<Suggestion>,
    },
    /// The suggestions request failed (status, transport or body).
    SuggestionsFailed { request_id: RequestId, reason: String },
    /// A pointer press landed on the screen.
    PointerPressed { inside_search: bool },
    /// Keyboard dismissal of the dropdown.
    DismissRequested,
    /// Move the dropdown highlight.
    SelectionMoved(SelectionMove),
    /// Follow the highlighted entry.
    SelectionActivated,
    /// Follow the entry at `index` (pointer activation).
    EntryActivated { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
    Up,
    Down,
}
