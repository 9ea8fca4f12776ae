//! Study Buddy: sign in, sign up and track certifications from the terminal.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

mod app;
mod background;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use studybuddy_core::config::settings::Config;
use studybuddy_core::{AuthClient, Effect, HttpAuthClient, Keymap, Route, Theme};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::{config_dir, App};
use crate::background::{spawn_login, spawn_signup, AuthMessage};
use crate::input::{handle_key, InputAction};
use crate::render::render;

const DEFAULT_LOG_FILTER: &str = "studybuddy_core=debug,studybuddy_tui=debug";
const DEFAULT_LOG_PATH: &str = "/tmp/studybuddy.log";

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs go to a file so the terminal UI is not disturbed.
fn init_tracing() -> anyhow::Result<()> {
    let path = std::env::var("STUDYBUDDY_LOG").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_writer(Arc::new(file))
        .with_env_filter(filter)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Reads `default.toml` and applies environment overrides.
fn load_config() -> Config {
    let path = config_dir().join("default.toml");
    let mut config = match Config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::debug!("Using default config ({e})");
            Config::default()
        }
    };
    if let Ok(url) = std::env::var("STUDYBUDDY_API_URL") {
        config.api.base_url = url;
    }
    config
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let config = load_config();
    let cfg_dir = config_dir();

    // Load keymap and theme with fallback to defaults
    let keymap = Keymap::load(&cfg_dir.join("keymap.toml")).unwrap_or_default();
    let theme = Theme::load(&cfg_dir.join("theme.toml")).unwrap_or_default();

    let client: Arc<dyn AuthClient> = Arc::new(HttpAuthClient::new(&config.api)?);
    tracing::info!("Study Buddy starting against {}", config.api.base_url);

    // An optional path argument picks the first screen, e.g. `studybuddy /signup`.
    let start = std::env::args()
        .nth(1)
        .map(|path| Route::parse(&path))
        .unwrap_or_default();
    let app = App::new(&config, theme, keymap).with_route(start);

    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, app, client).await;

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

/// Starts the network request an update asked for.
fn perform(
    effect: Option<Effect>,
    client: &Arc<dyn AuthClient>,
    tx: &mpsc::UnboundedSender<AuthMessage>,
) {
    match effect {
        Some(Effect::Login(credentials)) => {
            spawn_login(Arc::clone(client), credentials, tx.clone())
        }
        Some(Effect::Signup(profile)) => spawn_signup(Arc::clone(client), profile, tx.clone()),
        Some(Effect::Navigate(route)) => {
            tracing::warn!("Unhandled navigation to {}", route.path());
        }
        None => {}
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    client: Arc<dyn AuthClient>,
) -> anyhow::Result<()> {
    let (auth_tx, mut auth_rx) = mpsc::unbounded_channel::<AuthMessage>();

    loop {
        // 1. Drain auth results
        while let Ok(msg) = auth_rx.try_recv() {
            app = app.with_auth_message(msg);
        }

        // 2. Render
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            break;
        }

        // 3. Poll for crossterm events
        if event::poll(Duration::from_millis(100))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let action = handle_key(key, app.route(), app.show_help(), app.keymap());
            app = match action {
                InputAction::CursorDown => app.with_cursor_down(),
                InputAction::CursorUp => app.with_cursor_up(),
                InputAction::SortCycle => app.with_sort_cycle(),
                InputAction::SignOut => app.with_sign_out(),
                InputAction::ToggleHelp => {
                    let show = !app.show_help();
                    app.with_help(show)
                }
                InputAction::CloseHelp => app.with_help(false),
                InputAction::Navigate(route) => app.with_clear_status().with_route(route),
                InputAction::Quit => app.with_quit(),
                InputAction::FormChar(c) => app.with_form_char(c),
                InputAction::FormBackspace => app.with_form_backspace(),
                InputAction::FormNextField => app.with_focus_moved(true),
                InputAction::FormPrevField => app.with_focus_moved(false),
                InputAction::OptionNext => app.with_option_cycled(true),
                InputAction::OptionPrev => app.with_option_cycled(false),
                InputAction::FormSubmit => {
                    let (next, effect) = app.with_clear_status().with_submit();
                    perform(effect, &client, &auth_tx);
                    next
                }
                InputAction::None => app,
            };
        }
    }

    Ok(())
}
