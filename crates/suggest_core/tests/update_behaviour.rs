use std::sync::Once;
use std::time::Duration;

use pretty_assertions::assert_eq;
use suggest_core::{
    update, AppState, DropdownEntry, Effect, Msg, PhaseView, SearchPhase, SearchSettings,
    SelectionMove, Suggestion,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(suggest_logging::initialize_for_tests);
}

fn suggestion(kind: &str, name: &str, info: Option<&str>, url: &str) -> Suggestion {
    Suggestion {
        kind: kind.to_string(),
        name: name.to_string(),
        info: info.map(str::to_string),
        url: url.to_string(),
    }
}

fn flamengo() -> Suggestion {
    suggestion("Clube", "Flamengo", None, "/clube/flamengo")
}

fn scheduled_generation(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ScheduleDebounce { generation, .. } => Some(*generation),
            _ => None,
        })
        .expect("schedule effect")
}

fn fetch_request(effects: &[Effect]) -> (u64, String) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FetchSuggestions { request_id, query } => Some((*request_id, query.clone())),
            _ => None,
        })
        .expect("fetch effect")
}

/// Types `text`, lets the debounce fire and returns the issued request id.
fn type_and_fetch(state: AppState, text: &str) -> (AppState, u64) {
    let (state, effects) = update(state, Msg::InputChanged(text.to_string()));
    let generation = scheduled_generation(&effects);
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    let (request_id, _) = fetch_request(&effects);
    (state, request_id)
}

fn show(state: AppState, text: &str, suggestions: Vec<Suggestion>) -> AppState {
    let (state, request_id) = type_and_fetch(state, text);
    let (state, effects) = update(
        state,
        Msg::SuggestionsLoaded {
            request_id,
            suggestions,
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn short_query_schedules_nothing() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::InputChanged("f".to_string()));

    assert_eq!(effects, vec![Effect::CancelDebounce]);
    assert_eq!(*state.phase(), SearchPhase::Idle);
    assert!(state.dropdown().is_none());
}

#[test]
fn query_length_is_measured_after_trimming() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::InputChanged("   f   ".to_string()));
    assert_eq!(effects, vec![Effect::CancelDebounce]);

    let (state, effects) = update(state, Msg::InputChanged("  fl ".to_string()));
    let generation = scheduled_generation(&effects);
    assert_eq!(
        *state.phase(),
        SearchPhase::Pending {
            generation,
            query: "fl".to_string()
        }
    );
    assert_eq!(state.view().input, "  fl ");
}

#[test]
fn non_ascii_query_counts_characters() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::InputChanged("Sã".to_string()));
    assert!(matches!(
        effects.as_slice(),
        [Effect::ScheduleDebounce { .. }]
    ));
}

#[test]
fn qualifying_query_schedules_default_delay() {
    init_logging();
    let (_state, effects) = update(AppState::new(), Msg::InputChanged("fl".to_string()));

    assert_eq!(
        effects,
        vec![Effect::ScheduleDebounce {
            generation: 1,
            delay: Duration::from_millis(300),
        }]
    );
}

#[test]
fn custom_settings_drive_threshold_and_delay() {
    init_logging();
    let settings = SearchSettings {
        debounce_delay: Duration::from_millis(50),
        min_query_chars: 3,
    };
    let state = AppState::with_settings(settings);

    let (state, effects) = update(state, Msg::InputChanged("fl".to_string()));
    assert_eq!(effects, vec![Effect::CancelDebounce]);

    let (_state, effects) = update(state, Msg::InputChanged("fla".to_string()));
    assert_eq!(
        effects,
        vec![Effect::ScheduleDebounce {
            generation: 2,
            delay: Duration::from_millis(50),
        }]
    );
}

#[test]
fn keystrokes_within_window_collapse_to_one_request() {
    init_logging();
    let mut state = AppState::new();
    let mut generations = Vec::new();
    for text in ["fl", "fla", "flam", "flame"] {
        let (next, effects) = update(state, Msg::InputChanged(text.to_string()));
        generations.push(scheduled_generation(&effects));
        state = next;
    }

    let mut fetches = Vec::new();
    for generation in generations {
        let (next, effects) = update(state, Msg::DebounceElapsed { generation });
        fetches.extend(effects);
        state = next;
    }

    assert_eq!(
        fetches,
        vec![Effect::FetchSuggestions {
            request_id: 1,
            query: "flame".to_string(),
        }]
    );
    assert_eq!(state.view().phase, PhaseView::Loading);
}

#[test]
fn flamengo_example_renders_one_link() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::InputChanged("fl".to_string()));
    let generation = scheduled_generation(&effects);
    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    assert_eq!(
        effects,
        vec![Effect::FetchSuggestions {
            request_id: 1,
            query: "fl".to_string(),
        }]
    );

    let (mut state, effects) = update(
        state,
        Msg::SuggestionsLoaded {
            request_id: 1,
            suggestions: vec![flamengo()],
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    let dropdown = view.visible_dropdown().expect("dropdown visible");
    assert_eq!(dropdown.entries, vec![DropdownEntry::Link(flamengo())]);
    assert_eq!(dropdown.entries[0].url(), Some("/clube/flamengo"));
    assert_eq!(view.phase, PhaseView::Showing);
}

#[test]
fn empty_response_renders_single_placeholder() {
    init_logging();
    let state = show(AppState::new(), "zz", Vec::new());

    let view = state.view();
    let dropdown = view.visible_dropdown().expect("dropdown visible");
    assert_eq!(dropdown.entries, vec![DropdownEntry::NoResults]);
    assert_eq!(dropdown.entries[0].url(), None);
}

#[test]
fn n_suggestions_render_n_entries_in_order() {
    init_logging();
    let suggestions = vec![
        flamengo(),
        suggestion("Jogador", "Zico", Some("Meia"), "/jogador/12"),
        suggestion("Estádio", "Maracanã", Some("Rio de Janeiro/RJ"), "/estadio/1"),
    ];
    let state = show(AppState::new(), "fl", suggestions.clone());

    let view = state.view();
    let dropdown = view.visible_dropdown().expect("dropdown visible");
    let expected: Vec<DropdownEntry> = suggestions.into_iter().map(DropdownEntry::Link).collect();
    assert_eq!(dropdown.entries, expected);
}

#[test]
fn rerender_replaces_previous_entries() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let state = show(state, "flu", Vec::new());

    let dropdown = state.dropdown().expect("dropdown exists");
    assert!(dropdown.is_visible());
    assert_eq!(dropdown.entries(), &[DropdownEntry::NoResults]);
}

#[test]
fn repeated_render_with_same_input_is_idempotent() {
    init_logging();
    let first = show(AppState::new(), "fl", vec![flamengo()]);
    let second = show(first.clone(), "fl", vec![flamengo()]);

    assert_eq!(first.dropdown(), second.dropdown());
}

#[test]
fn response_superseded_by_keystroke_is_dropped() {
    init_logging();
    let (state, request_id) = type_and_fetch(AppState::new(), "fl");

    let (state, effects) = update(state, Msg::InputChanged("fla".to_string()));
    assert_eq!(effects[0], Effect::CancelFetch);

    let (state, _) = update(
        state,
        Msg::SuggestionsLoaded {
            request_id,
            suggestions: vec![flamengo()],
        },
    );
    assert!(state.dropdown().is_none());
    assert_eq!(state.view().phase, PhaseView::Waiting);
}

#[test]
fn out_of_order_responses_render_only_latest() {
    init_logging();
    let (state, first) = type_and_fetch(AppState::new(), "fl");
    let (state, second) = type_and_fetch(state, "flu");
    assert_ne!(first, second);

    let latest = suggestion("Clube", "Fluminense", None, "/clube/fluminense");
    let (state, _) = update(
        state,
        Msg::SuggestionsLoaded {
            request_id: second,
            suggestions: vec![latest.clone()],
        },
    );
    let (state, _) = update(
        state,
        Msg::SuggestionsLoaded {
            request_id: first,
            suggestions: vec![flamengo()],
        },
    );

    let dropdown = state.dropdown().expect("dropdown exists");
    assert_eq!(dropdown.entries(), &[DropdownEntry::Link(latest)]);
}

#[test]
fn failed_request_renders_nothing() {
    init_logging();
    let (state, request_id) = type_and_fetch(AppState::new(), "fl");
    let (state, effects) = update(
        state,
        Msg::SuggestionsFailed {
            request_id,
            reason: "http status 500".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(state.dropdown().is_none());
    assert_eq!(*state.phase(), SearchPhase::Idle);
}

#[test]
fn failed_request_keeps_previous_results_visible() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let (state, request_id) = type_and_fetch(state, "fla");
    let (state, _) = update(
        state,
        Msg::SuggestionsFailed {
            request_id,
            reason: "network error".to_string(),
        },
    );

    let dropdown = state.dropdown().expect("dropdown exists");
    assert!(dropdown.is_visible());
    assert_eq!(dropdown.entries(), &[DropdownEntry::Link(flamengo())]);
    assert_eq!(*state.phase(), SearchPhase::Displaying);
}

#[test]
fn short_query_hides_visible_dropdown() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let (state, effects) = update(state, Msg::InputChanged("f".to_string()));

    assert_eq!(effects, vec![Effect::CancelDebounce]);
    let dropdown = state.dropdown().expect("hidden, not destroyed");
    assert!(!dropdown.is_visible());
    assert!(state.view().visible_dropdown().is_none());
    assert_eq!(*state.phase(), SearchPhase::Idle);
}

#[test]
fn short_query_cancels_in_flight_request() {
    init_logging();
    let (state, request_id) = type_and_fetch(AppState::new(), "fl");
    let (state, effects) = update(state, Msg::InputChanged(String::new()));
    assert_eq!(effects, vec![Effect::CancelFetch, Effect::CancelDebounce]);

    let (state, _) = update(
        state,
        Msg::SuggestionsLoaded {
            request_id,
            suggestions: vec![flamengo()],
        },
    );
    assert!(state.dropdown().is_none());
}

#[test]
fn pointer_press_outside_hides_dropdown() {
    init_logging();
    for suggestions in [Vec::new(), vec![flamengo()]] {
        let state = show(AppState::new(), "fl", suggestions);
        let (state, effects) = update(
            state,
            Msg::PointerPressed {
                inside_search: false,
            },
        );

        assert!(effects.is_empty());
        assert!(!state.dropdown().expect("dropdown exists").is_visible());
        assert_eq!(state.view().phase, PhaseView::Idle);
    }
}

#[test]
fn pointer_press_inside_keeps_dropdown() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let (state, _) = update(
        state,
        Msg::PointerPressed {
            inside_search: true,
        },
    );

    assert!(state.dropdown().expect("dropdown exists").is_visible());
}

#[test]
fn pointer_press_without_dropdown_is_noop() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(
        state.clone(),
        Msg::PointerPressed {
            inside_search: false,
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn dismissal_does_not_cancel_pending_timer() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let (state, effects) = update(state, Msg::InputChanged("fla".to_string()));
    let generation = scheduled_generation(&effects);

    let (state, _) = update(state, Msg::DismissRequested);
    assert!(!state.dropdown().expect("dropdown exists").is_visible());

    let (state, effects) = update(state, Msg::DebounceElapsed { generation });
    let (request_id, query) = fetch_request(&effects);
    assert_eq!(query, "fla");

    let (state, _) = update(
        state,
        Msg::SuggestionsLoaded {
            request_id,
            suggestions: Vec::new(),
        },
    );
    assert!(state.dropdown().expect("dropdown exists").is_visible());
}

#[test]
fn selection_wraps_and_activation_navigates() {
    init_logging();
    let suggestions = vec![
        flamengo(),
        suggestion("Clube", "Fluminense", None, "/clube/fluminense"),
    ];
    let state = show(AppState::new(), "fl", suggestions);

    let (state, _) = update(state, Msg::SelectionMoved(SelectionMove::Down));
    let (state, _) = update(state, Msg::SelectionMoved(SelectionMove::Down));
    assert_eq!(state.view().dropdown.unwrap().selected, Some(1));

    let (state, _) = update(state, Msg::SelectionMoved(SelectionMove::Down));
    assert_eq!(state.view().dropdown.unwrap().selected, Some(0));

    let (state, _) = update(state, Msg::SelectionMoved(SelectionMove::Up));
    assert_eq!(state.view().dropdown.unwrap().selected, Some(1));

    let (state, effects) = update(state, Msg::SelectionActivated);
    assert_eq!(
        effects,
        vec![Effect::Navigate {
            url: "/clube/fluminense".to_string(),
        }]
    );
    assert!(!state.dropdown().expect("dropdown exists").is_visible());
}

#[test]
fn new_results_reset_selection() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let (state, _) = update(state, Msg::SelectionMoved(SelectionMove::Down));
    let state = show(state, "fla", vec![flamengo()]);

    assert_eq!(state.view().dropdown.unwrap().selected, None);
}

#[test]
fn placeholder_is_not_selectable_or_navigable() {
    init_logging();
    let state = show(AppState::new(), "zz", Vec::new());

    let (state, _) = update(state, Msg::SelectionMoved(SelectionMove::Down));
    assert_eq!(state.view().dropdown.unwrap().selected, None);

    let (state, effects) = update(state, Msg::EntryActivated { index: 0 });
    assert!(effects.is_empty());
    assert!(state.dropdown().expect("dropdown exists").is_visible());
}

#[test]
fn pointer_activation_navigates_to_entry() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let (_state, effects) = update(state, Msg::EntryActivated { index: 0 });

    assert_eq!(
        effects,
        vec![Effect::Navigate {
            url: "/clube/flamengo".to_string(),
        }]
    );
}

#[test]
fn hidden_dropdown_entries_cannot_be_activated() {
    init_logging();
    let state = show(AppState::new(), "fl", vec![flamengo()]);
    let (state, _) = update(state, Msg::DismissRequested);
    let (_state, effects) = update(state, Msg::EntryActivated { index: 0 });

    assert!(effects.is_empty());
}

#[test]
fn dirty_flag_tracks_visible_changes() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("fl".to_string()));
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::PointerPressed {
            inside_search: false,
        },
    );
    assert!(!state.consume_dirty());
}
