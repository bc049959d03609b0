use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::DefaultTerminal;
use suggest_core::{update, AppState, Msg};
use suggest_engine::{EngineHandle, ReqwestFetcher};
use suggest_logging::{suggest_debug, suggest_info};
use url::Url;

use super::cli::Cli;
use super::config;
use super::effects::EffectRunner;
use super::keys::{translate_key, KeyAction};
use super::logging;
use super::pointer::PointerSubscription;
use super::ui::constants::POLL_INTERVAL;
use super::ui::layout::SearchLayout;
use super::ui::render;

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(&cli.log_file, cli.verbose);

    let mut config = config::load_config(&cli.config);
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let base_url = config.base_url()?;
    suggest_info!("Suggestions from {}", base_url);

    let fetcher = ReqwestFetcher::new(base_url.clone(), config.fetch_settings())
        .context("building http client")?;
    let engine = EngineHandle::new(Arc::new(fetcher)).context("starting engine")?;
    let app = SearchApp::new(
        AppState::with_settings(config.search_settings()),
        EffectRunner::new(engine, base_url),
    );

    let mut terminal = ratatui::init();
    let outcome = run_with_pointer(app, &mut terminal);
    ratatui::restore();

    if let Some(target) = outcome? {
        println!("{target}");
    }
    Ok(())
}

fn run_with_pointer(app: SearchApp, terminal: &mut DefaultTerminal) -> anyhow::Result<Option<Url>> {
    let _pointer = PointerSubscription::subscribe().context("enabling mouse capture")?;
    app.run(terminal)
}

struct SearchApp {
    state: AppState,
    runner: EffectRunner,
    layout: SearchLayout,
    redraw: bool,
    quit: bool,
    target: Option<Url>,
}

impl SearchApp {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            layout: SearchLayout::default(),
            redraw: true,
            quit: false,
            target: None,
        }
    }

    fn run(mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<Option<Url>> {
        while !self.quit {
            if std::mem::take(&mut self.redraw) {
                let view = self.state.view();
                let mut layout = self.layout;
                terminal.draw(|frame| {
                    layout = SearchLayout::compute(frame.area(), &view);
                    render::draw(frame, &view, &layout);
                })?;
                self.layout = layout;
            }

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            for msg in self.runner.drain_events() {
                self.dispatch(msg);
            }
        }
        Ok(self.target)
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => match translate_key(&self.state.view(), key) {
                KeyAction::Dispatch(msg) => self.dispatch(msg),
                KeyAction::Quit => self.quit = true,
                KeyAction::Ignore => {}
            },
            Event::Mouse(mouse) => {
                for msg in pointer_messages(&self.layout, mouse) {
                    self.dispatch(msg);
                }
            }
            Event::Resize(..) => self.redraw = true,
            _ => {}
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        suggest_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.redraw = true;
        }
        self.state = state;

        if let Some(target) = self.runner.run(effects) {
            self.target = Some(target);
            self.quit = true;
        }
    }
}

/// Any button press reports whether it landed on the search control; a left
/// press on a dropdown row also activates that entry.
fn pointer_messages(layout: &SearchLayout, mouse: MouseEvent) -> Vec<Msg> {
    let MouseEventKind::Down(button) = mouse.kind else {
        return Vec::new();
    };
    let inside_search = layout.contains(mouse.column, mouse.row);
    let mut msgs = vec![Msg::PointerPressed { inside_search }];
    if button == MouseButton::Left {
        if let Some(index) = layout.entry_at(mouse.column, mouse.row) {
            msgs.push(Msg::EntryActivated { index });
        }
    }
    msgs
}
