//! Suggestion core: pure state machine, dropdown renderer and view model.
mod dropdown;
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use dropdown::{Dropdown, DropdownEntry, NO_RESULTS_TEXT};
pub use effect::Effect;
pub use msg::{Msg, SelectionMove};
pub use state::{
    AppState, Generation, RequestId, SearchPhase, SearchSettings, Suggestion, DEBOUNCE_DELAY,
    MIN_QUERY_CHARS,
};
pub use update::update;
pub use view_model::{AppViewModel, DropdownView, PhaseView};
