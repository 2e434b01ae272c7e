//! SHOWCASE TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use showcase_core::{ListingApi, ReferenceApi};
use showcase_tui::api_client::RestClient;
use showcase_tui::config::TuiConfig;
use showcase_tui::error::TuiError;
use showcase_tui::events::TuiEvent;
use showcase_tui::fetch::{spawn_all_references, spawn_listing, ListingFetch};
use showcase_tui::keys::{map_key, Action};
use showcase_tui::nav::View;
use showcase_tui::persistence::{self, PersistedState};
use showcase_tui::state::App;
use showcase_tui::views::{list_viewport_height, render_view};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Channel and API handles shared by every spawned fetch.
struct Dispatcher {
    listing: Arc<dyn ListingApi>,
    sender: mpsc::Sender<TuiEvent>,
}

impl Dispatcher {
    fn run(&self, fetch: Option<ListingFetch>) {
        if let Some(fetch) = fetch {
            spawn_listing(Arc::clone(&self.listing), fetch, self.sender.clone());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    showcase_tui::logging::init(&config.log_path)?;
    let client = Arc::new(RestClient::new(&config)?);
    tracing::info!(api_base_url = %client.base_url(), "starting showcase-tui");

    let mut app = App::new(config);
    let restored_view = match persistence::load(&app.config.persistence_path) {
        Ok(state) => state.map(|state| state.active_view),
        Err(err) => {
            tracing::warn!(error = %err, "ignoring unreadable persisted state");
            None
        }
    };

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};
    app.set_viewport_height(list_viewport_height(terminal.size()?.height));

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    let dispatcher = Dispatcher {
        listing: client.clone(),
        sender: event_tx.clone(),
    };

    spawn_input_reader(event_tx.clone());
    let reference: Arc<dyn ReferenceApi> = client;
    spawn_all_references(reference, &event_tx);
    if let Some(view) = restored_view {
        dispatcher.run(app.switch_view(view));
    }

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, &dispatcher, event) {
                    break;
                }
            }
        }

        dispatcher.run(app.poll_sentinel());
    }

    let persisted = PersistedState {
        active_view: app.active_view,
    };
    if let Err(err) = persistence::save(&app.config.persistence_path, &persisted) {
        tracing::warn!(error = %err, "failed to persist UI state");
    }
    tracing::info!("showcase-tui stopped");

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let forwarded = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if forwarded.is_err() {
                    break;
                }
            }
        }
    });
}

/// Returns `true` when the app should exit.
fn handle_event(app: &mut App, dispatcher: &Dispatcher, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key, app.input_mode) {
                return handle_action(app, dispatcher, action);
            }
        }
        TuiEvent::Resize { height, .. } => app.set_viewport_height(list_viewport_height(height)),
        TuiEvent::Listing {
            catalog,
            token,
            result,
        } => {
            app.apply_listing(catalog, token, result);
        }
        TuiEvent::Reference { kind, result } => app.apply_reference(kind, result),
    }
    false
}

fn handle_action(app: &mut App, dispatcher: &Dispatcher, action: Action) -> bool {
    if app.show_help && action != Action::Quit {
        app.show_help = false;
        return false;
    }

    let fetch = match action {
        Action::Quit => return true,
        Action::NextView => app.switch_view(app.active_view.next()),
        Action::PrevView => app.switch_view(app.active_view.previous()),
        Action::SwitchView(index) => View::from_index(index).and_then(|view| app.switch_view(view)),
        Action::MoveDown => {
            app.select_next();
            None
        }
        Action::MoveUp => {
            app.select_previous();
            None
        }
        Action::PageDown => {
            app.page_down();
            None
        }
        Action::PageUp => {
            app.page_up();
            None
        }
        Action::NextSelector => {
            app.focus_selector(1);
            None
        }
        Action::PrevSelector => {
            app.focus_selector(-1);
            None
        }
        Action::NextOption => app.step_focused_option(1),
        Action::PrevOption => app.step_focused_option(-1),
        Action::ClearFilter => app.clear_focused_filter(),
        Action::OpenSearch => {
            app.begin_search();
            None
        }
        Action::OpenHelp => {
            app.show_help = true;
            None
        }
        Action::Refresh => app.reload(),
        Action::Input(c) => app.push_search_char(c),
        Action::Backspace => app.pop_search_char(),
        Action::Confirm => {
            app.finish_search();
            None
        }
        Action::Cancel => app.cancel_search(),
    };
    dispatcher.run(fetch);
    false
}
