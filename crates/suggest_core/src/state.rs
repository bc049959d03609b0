use std::time::Duration;

use crate::dropdown::Dropdown;
use crate::view_model::{AppViewModel, DropdownView, PhaseView};

/// Identifies one debounce schedule; bumped on every keystroke.
pub type Generation = u64;
/// Identifies one issued suggestions request.
pub type RequestId = u64;

pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);
pub const MIN_QUERY_CHARS: usize = 2;

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Category label, e.g. "Clube" or "Jogador".
    pub kind: String,
    pub name: String,
    pub info: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub debounce_delay: Duration,
    pub min_query_chars: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_delay: DEBOUNCE_DELAY,
            min_query_chars: MIN_QUERY_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    #[default]
    Idle,
    Pending {
        generation: Generation,
        query: String,
    },
    Fetching {
        request_id: RequestId,
        query: String,
    },
    Displaying,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: SearchSettings,
    input: String,
    phase: SearchPhase,
    generation: Generation,
    last_request_id: RequestId,
    dropdown: Option<Dropdown>,
    selected: Option<usize>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: SearchSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> SearchSettings {
        self.settings
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    pub fn dropdown(&self) -> Option<&Dropdown> {
        self.dropdown.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let phase = match self.phase {
            SearchPhase::Idle => PhaseView::Idle,
            SearchPhase::Pending { .. } => PhaseView::Waiting,
            SearchPhase::Fetching { .. } => PhaseView::Loading,
            SearchPhase::Displaying => PhaseView::Showing,
        };
        AppViewModel {
            input: self.input.clone(),
            phase,
            dropdown: self.dropdown.as_ref().map(|dropdown| DropdownView {
                visible: dropdown.is_visible(),
                entries: dropdown.entries().to_vec(),
                selected: self.selected,
            }),
            dirty: self.dirty,
        }
    }

    /// Returns whether a redraw is needed and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_input(&mut self, raw: String) {
        if self.input != raw {
            self.input = raw;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_phase(&mut self, phase: SearchPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.mark_dirty();
        }
    }

    pub(crate) fn next_generation(&mut self) -> Generation {
        self.generation += 1;
        self.generation
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        self.last_request_id += 1;
        self.last_request_id
    }

    /// The request whose response may still be rendered, if any.
    pub(crate) fn current_request(&self) -> Option<RequestId> {
        match self.phase {
            SearchPhase::Fetching { request_id, .. } => Some(request_id),
            _ => None,
        }
    }

    pub(crate) fn dropdown_slot(&mut self) -> &mut Option<Dropdown> {
        &mut self.dropdown
    }

    pub(crate) fn dropdown_visible(&self) -> bool {
        self.dropdown.as_ref().is_some_and(Dropdown::is_visible)
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: Option<usize>) {
        if self.selected != selected {
            self.selected = selected;
            self.mark_dirty();
        }
    }
}
