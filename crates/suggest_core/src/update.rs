use suggest_logging::{suggest_debug, suggest_warn};

use crate::dropdown;
use crate::{AppState, Effect, Msg, SearchPhase, SelectionMove};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(raw) => input_changed(&mut state, raw),
        Msg::DebounceElapsed { generation } => {
            let ready = match state.phase() {
                SearchPhase::Pending {
                    generation: pending,
                    query,
                } if *pending == generation => Some(query.clone()),
                _ => None,
            };
            match ready {
                Some(query) => {
                    let request_id = state.next_request_id();
                    state.set_phase(SearchPhase::Fetching {
                        request_id,
                        query: query.clone(),
                    });
                    vec![Effect::FetchSuggestions { request_id, query }]
                }
                None => {
                    suggest_debug!("Ignoring stale debounce generation={}", generation);
                    Vec::new()
                }
            }
        }
        Msg::SuggestionsLoaded {
            request_id,
            suggestions,
        } => {
            if state.current_request() != Some(request_id) {
                suggest_debug!("Dropping superseded response request_id={}", request_id);
                return (state, Vec::new());
            }
            dropdown::show_suggestions(state.dropdown_slot(), suggestions);
            state.set_selected(None);
            state.set_phase(SearchPhase::Displaying);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SuggestionsFailed { request_id, reason } => {
            if state.current_request() != Some(request_id) {
                suggest_debug!("Ignoring failure of superseded request_id={}", request_id);
                return (state, Vec::new());
            }
            suggest_warn!("Suggestions request {} failed: {}", request_id, reason);
            let phase = if state.dropdown_visible() {
                SearchPhase::Displaying
            } else {
                SearchPhase::Idle
            };
            state.set_phase(phase);
            Vec::new()
        }
        Msg::PointerPressed { inside_search } => {
            if !inside_search {
                dismiss(&mut state);
            }
            Vec::new()
        }
        Msg::DismissRequested => {
            dismiss(&mut state);
            Vec::new()
        }
        Msg::SelectionMoved(direction) => {
            move_selection(&mut state, direction);
            Vec::new()
        }
        Msg::SelectionActivated => match state.selected() {
            Some(index) => activate(&mut state, index),
            None => Vec::new(),
        },
        Msg::EntryActivated { index } => activate(&mut state, index),
    };

    (state, effects)
}

fn input_changed(state: &mut AppState, raw: String) -> Vec<Effect> {
    let query = raw.trim().to_owned();
    state.set_input(raw);

    // Every keystroke invalidates the previous timer and any in-flight request.
    let generation = state.next_generation();
    let superseded_fetch = state.current_request().is_some();
    let settings = state.settings();

    let mut effects = Vec::with_capacity(2);
    if superseded_fetch {
        effects.push(Effect::CancelFetch);
    }

    if query.chars().count() < settings.min_query_chars {
        effects.push(Effect::CancelDebounce);
        dismiss(state);
        state.set_phase(SearchPhase::Idle);
        return effects;
    }

    state.set_phase(SearchPhase::Pending { generation, query });
    effects.push(Effect::ScheduleDebounce {
        generation,
        delay: settings.debounce_delay,
    });
    effects
}

fn dismiss(state: &mut AppState) {
    if dropdown::hide(state.dropdown_slot()) {
        state.set_selected(None);
        state.mark_dirty();
        if *state.phase() == SearchPhase::Displaying {
            state.set_phase(SearchPhase::Idle);
        }
    }
}

fn move_selection(state: &mut AppState, direction: SelectionMove) {
    let count = match state.dropdown() {
        Some(dropdown) if dropdown.is_visible() => dropdown.link_count(),
        _ => 0,
    };
    if count == 0 {
        return;
    }

    let next = match (direction, state.selected()) {
        (SelectionMove::Down, None) => 0,
        (SelectionMove::Down, Some(index)) => (index + 1) % count,
        (SelectionMove::Up, None) | (SelectionMove::Up, Some(0)) => count - 1,
        (SelectionMove::Up, Some(index)) => index.min(count) - 1,
    };
    state.set_selected(Some(next));
}

fn activate(state: &mut AppState, index: usize) -> Vec<Effect> {
    let url = state
        .dropdown()
        .filter(|dropdown| dropdown.is_visible())
        .and_then(|dropdown| dropdown.entries().get(index))
        .and_then(|entry| entry.url())
        .map(ToOwned::to_owned);

    match url {
        Some(url) => {
            dismiss(state);
            vec![Effect::Navigate { url }]
        }
        None => Vec::new(),
    }
}
