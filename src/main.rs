use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use stint::app::{App, DataMode, StatusLevel};
use stint::config::{self, Config};
use stint::domain::Identity;
use stint::events;
use stint::infrastructure::identity::{IdentityProvider, RestIdentity, StaticIdentity};
use stint::infrastructure::runtime::{RuntimeBridge, RuntimeCommand, RuntimeEvent};
use stint::infrastructure::store::{DocumentStore, RestStore, SampleStore};
use stint::telemetry;
use stint::ui;

#[derive(Debug, Parser)]
#[command(
    name = "stint",
    version,
    about = "Terminal dashboard for browsing internship postings and tracking applications"
)]
struct Args {
    /// Base URL of the document store / identity service
    #[arg(long)]
    endpoint: Option<String>,

    /// Use the built-in sample data instead of a remote store
    #[arg(long)]
    mock: bool,

    /// Email of the signed-in student
    #[arg(long)]
    user: Option<String>,
}

fn main() -> Result<()> {
    let _log_guard = telemetry::init();

    let args = Args::parse();
    let config = config::load();

    let identity = resolve_identity(&args, &config);
    let (store, identity_provider, data_mode, endpoint_display) =
        build_backends(&args, &config, &identity);

    tracing::info!(user = %identity.email, endpoint = %endpoint_display, "stint starting");

    let runtime = RuntimeBridge::new(store, identity_provider, identity.user_id.clone())?;

    let mut app = App::new(identity);
    app.data_mode = data_mode;
    app.store_endpoint = endpoint_display;
    if !config.categories.is_empty() {
        app.categories = config.categories.clone();
    }
    app.set_status("Loading internships…", StatusLevel::Info);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, runtime);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "application error");
        eprintln!("{err:?}");
    }
    tracing::info!("stint exited");

    Ok(())
}

/// Identity is resolved up front and passed down explicitly; nothing else
/// reads it from the environment.
fn resolve_identity(args: &Args, config: &Config) -> Identity {
    let email = args
        .user
        .clone()
        .or_else(|| config.user.email.clone())
        .unwrap_or_else(|| "student@example.edu".to_string());
    let user_id = config
        .user
        .id
        .clone()
        .unwrap_or_else(|| email.split('@').next().unwrap_or("student").to_string());
    let display_name = config.user.name.clone().unwrap_or_else(|| user_id.clone());
    Identity::new(user_id, display_name, email)
}

fn build_backends(
    args: &Args,
    config: &Config,
    identity: &Identity,
) -> (
    Box<dyn DocumentStore>,
    Box<dyn IdentityProvider>,
    DataMode,
    String,
) {
    let endpoint = args.endpoint.clone().or_else(|| config.endpoint.clone());

    match endpoint {
        Some(endpoint) if !args.mock => (
            Box::new(RestStore::new(endpoint.clone())),
            Box::new(RestIdentity::new(endpoint.clone())),
            DataMode::Remote,
            endpoint,
        ),
        _ => (
            Box::new(SampleStore::with_sample_data(&identity.user_id)),
            Box::new(StaticIdentity::new()),
            DataMode::Sample,
            "sample data".to_string(),
        ),
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        pump_background(&mut app, &runtime);
        terminal.draw(|f| ui::draw(f, &mut app))?;

        // Forward queued intents to the worker. Sign-out is sent after the
        // controller has already navigated; its outcome cannot block the
        // user.
        if app.take_refresh_request() {
            let _ = runtime.send(RuntimeCommand::Refresh);
        }
        if app.take_signout_request() {
            let _ = runtime.send(RuntimeCommand::SignOut);
        }

        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                events::handle_key(&mut app, key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn pump_background(app: &mut App, runtime: &RuntimeBridge) {
    for event in runtime.poll_events() {
        match event {
            RuntimeEvent::PostingsLoaded(postings) => app.apply_postings(postings),
            RuntimeEvent::ApplicationsLoaded(applications) => app.apply_applications(applications),
            RuntimeEvent::SignedOut => app.apply_signed_out(),
            RuntimeEvent::Error { message } => app.apply_store_error(message),
        }
    }
}
