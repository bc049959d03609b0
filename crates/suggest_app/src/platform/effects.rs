use suggest_core::{Effect, Msg, Suggestion};
use suggest_engine::{EngineEvent, EngineHandle, SuggestionRecord};
use suggest_logging::{suggest_debug, suggest_info, suggest_warn};
use url::Url;

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    base_url: Url,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, base_url: Url) -> Self {
        Self { engine, base_url }
    }

    /// Runs `effects` in order. Returns the absolute link target when one of
    /// them is a navigation.
    pub fn run(&self, effects: Vec<Effect>) -> Option<Url> {
        let mut target = None;
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { generation, delay } => {
                    self.engine.schedule_debounce(generation, delay);
                }
                Effect::CancelDebounce => self.engine.cancel_debounce(),
                Effect::FetchSuggestions { request_id, query } => {
                    suggest_debug!(
                        "FetchSuggestions request_id={} query_len={}",
                        request_id,
                        query.chars().count()
                    );
                    self.engine.fetch(request_id, query);
                }
                Effect::CancelFetch => self.engine.cancel_fetch(),
                Effect::Navigate { url } => match resolve_link(&self.base_url, &url) {
                    Some(resolved) => {
                        suggest_info!("Navigate to {}", resolved);
                        target = Some(resolved);
                    }
                    None => suggest_warn!("Cannot resolve link {:?}", url),
                },
            }
        }
        target
    }

    /// Collects every engine event that has arrived so far.
    pub fn drain_events(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DebounceElapsed { generation } => Msg::DebounceElapsed { generation },
        EngineEvent::SuggestionsFetched { request_id, result } => match result {
            Ok(records) => Msg::SuggestionsLoaded {
                request_id,
                suggestions: records.into_iter().map(map_record).collect(),
            },
            Err(err) => Msg::SuggestionsFailed {
                request_id,
                reason: err.to_string(),
            },
        },
    }
}

fn map_record(record: SuggestionRecord) -> Suggestion {
    Suggestion {
        kind: record.kind,
        name: record.name,
        info: record.info.filter(|info| !info.is_empty()),
        url: record.url,
    }
}

/// Resolves a suggestion link (usually site-relative) against the site root.
fn resolve_link(base: &Url, link: &str) -> Option<Url> {
    base.join(link).ok()
}
