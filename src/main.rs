pub mod analysis;
pub mod api;
pub mod config;
pub mod runtime;
pub mod score;
pub mod summary;
pub mod ui;
pub mod wod;

use crate::{
    analysis::{form_requests, spawn_batch, Analysis},
    api::PercentileClient,
    config::{Config, ConfigStore, FileConfigStore},
    runtime::{AppEvent, CrosstermEventSource, FixedTicker, Runner},
    score::{Field, WodEntry},
    ui::screen::current_screen,
    wod::Gender,
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    sync::atomic::{AtomicU64, Ordering},
    sync::Arc,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

const TICK_RATE_MS: u64 = 100;

/// terminal client for benchmark workout percentile analysis
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Enter your benchmark workout scores, rank them against the reference athlete population, and explore the results as per-workout distribution charts plus an overall performance radar."
)]
pub struct Cli {
    /// base URL of the percentile service
    #[clap(short = 's', long)]
    server: Option<String>,

    /// population filter applied to the reference dataset
    #[clap(short = 'g', long, value_enum)]
    gender: Option<GenderFilter>,

    /// per-request timeout in seconds
    #[clap(long)]
    timeout: Option<u64>,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum GenderFilter {
    Everyone,
    Men,
    Women,
}

impl GenderFilter {
    fn as_gender(&self) -> Gender {
        match self {
            GenderFilter::Everyone => Gender::Everyone,
            GenderFilter::Men => Gender::Men,
            GenderFilter::Women => Gender::Women,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Form,
    Results,
    Summary,
}

#[derive(Debug)]
pub struct App {
    pub cli: Option<Cli>,
    pub form: Vec<WodEntry>,
    pub selected: usize,
    pub field: Field,
    pub gender: Gender,
    pub state: AppState,
    pub analysis: Option<Analysis>,
    pub results_cursor: usize,
}

impl App {
    pub fn new(cli: Cli, gender: Gender) -> Self {
        let form = WodEntry::form();
        let field = form[0].first_field();
        Self {
            cli: Some(cli),
            form,
            selected: 0,
            field,
            gender,
            state: AppState::Form,
            analysis: None,
            results_cursor: 0,
        }
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.form.len();
        self.field = self.form[self.selected].first_field();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.form.len() - 1) % self.form.len();
        self.field = self.form[self.selected].first_field();
    }

    pub fn cycle_field(&mut self) {
        self.field = self.form[self.selected].next_field(self.field);
    }

    fn displayable_rows(&self) -> usize {
        self.analysis
            .as_ref()
            .map(|a| a.display_rows().len())
            .unwrap_or(0)
    }

    pub fn next_result(&mut self) {
        let rows = self.displayable_rows();
        if rows > 0 {
            self.results_cursor = (self.results_cursor + 1) % rows;
        }
    }

    pub fn prev_result(&mut self) {
        let rows = self.displayable_rows();
        if rows > 0 {
            self.results_cursor = (self.results_cursor + rows - 1) % rows;
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let mut config = store.load();
    let mut dirty = false;
    if let Some(server) = &cli.server {
        config.server_url = server.clone();
        dirty = true;
    }
    if let Some(gender) = cli.gender {
        config.gender = gender.as_gender();
        dirty = true;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
        dirty = true;
    }
    if dirty {
        if let Err(err) = store.save(&config) {
            tracing::warn!(%err, "could not persist config");
        }
    }

    let client = PercentileClient::new(&config.server_url, config.gender, config.timeout())?;

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli, config.gender);
    let result = start_tui(&mut terminal, &mut app, client, config, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: PercentileClient,
    mut config: Config,
    store: FileConfigStore,
) -> Result<(), Box<dyn Error>> {
    let event_source = CrosstermEventSource::new();
    let worker_tx = event_source.sender();
    let runner = Runner::new(
        event_source,
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    let mut client = Arc::new(client);
    // generation of the batch allowed to touch the UI; bumping it cancels
    // whatever is still in flight
    let live = Arc::new(AtomicU64::new(0));
    let mut generation: u64 = 0;

    let mut analyze = |app: &mut App, client: &Arc<PercentileClient>| {
        let requests = form_requests(&app.form);
        if requests.is_empty() {
            return;
        }
        generation += 1;
        live.store(generation, Ordering::SeqCst);
        app.analysis = Some(Analysis::new(generation, &requests));
        app.results_cursor = 0;
        app.state = AppState::Form;
        spawn_batch(client, &requests, generation, &live, &worker_tx);
    };

    loop {
        terminal.draw(|f| current_screen(&app.state).render(app, f))?;

        match runner.step() {
            AppEvent::Tick | AppEvent::Resize => {}
            AppEvent::Analysis(ev) => {
                if let Some(analysis) = app.analysis.as_mut() {
                    if analysis.record(&ev) && analysis.is_settled() {
                        app.results_cursor = 0;
                        app.state = AppState::Results;
                    }
                }
            }
            AppEvent::Key(key) => {
                if is_quit(&key) {
                    break;
                }
                match app.state {
                    AppState::Form => match key.code {
                        KeyCode::Up => app.select_prev(),
                        KeyCode::Down => app.select_next(),
                        KeyCode::Tab | KeyCode::Left | KeyCode::Right => app.cycle_field(),
                        KeyCode::Backspace => {
                            let field = app.field;
                            app.form[app.selected].pop_digit(field);
                        }
                        KeyCode::Delete => app.form[app.selected].clear(),
                        KeyCode::Enter => analyze(app, &client),
                        KeyCode::Char('g') => {
                            let gender = app.gender.next();
                            match PercentileClient::new(
                                &config.server_url,
                                gender,
                                config.timeout(),
                            ) {
                                Ok(rebuilt) => {
                                    client = Arc::new(rebuilt);
                                    app.gender = gender;
                                    config.gender = gender;
                                    if let Err(err) = store.save(&config) {
                                        tracing::warn!(%err, "could not persist config");
                                    }
                                }
                                Err(err) => {
                                    tracing::warn!(%err, "could not rebuild client")
                                }
                            }
                        }
                        KeyCode::Char(c) if c.is_ascii_digit() => {
                            let field = app.field;
                            app.form[app.selected].push_digit(field, c);
                        }
                        _ => {}
                    },
                    AppState::Results => match key.code {
                        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') => app.prev_result(),
                        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') => app.next_result(),
                        KeyCode::Char('s') => app.state = AppState::Summary,
                        KeyCode::Char('b') => app.state = AppState::Form,
                        KeyCode::Char('r') => analyze(app, &client),
                        _ => {}
                    },
                    AppState::Summary => match key.code {
                        KeyCode::Char('b') => app.state = AppState::Results,
                        _ => {}
                    },
                }
            }
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli() -> Cli {
        Cli {
            server: None,
            gender: None,
            timeout: None,
        }
    }

    #[test]
    fn selection_wraps_and_resets_field() {
        let mut app = App::new(cli(), Gender::Everyone);
        assert_eq!(app.field, Field::Minutes); // Fran is time-scored

        app.select_prev();
        assert_eq!(app.selected, app.form.len() - 1); // Back Squat
        assert_eq!(app.field, Field::Score);

        app.select_next();
        assert_eq!(app.selected, 0);
        assert_eq!(app.field, Field::Minutes);
    }

    #[test]
    fn field_cycles_between_minutes_and_seconds() {
        let mut app = App::new(cli(), Gender::Everyone);
        app.cycle_field();
        assert_eq!(app.field, Field::Seconds);
        app.cycle_field();
        assert_eq!(app.field, Field::Minutes);
    }

    #[test]
    fn result_navigation_without_analysis_is_a_noop() {
        let mut app = App::new(cli(), Gender::Everyone);
        app.next_result();
        app.prev_result();
        assert_eq!(app.results_cursor, 0);
    }

    #[test]
    fn quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn gender_filter_maps_to_domain_type() {
        assert_eq!(GenderFilter::Men.as_gender(), Gender::Men);
        assert_eq!(GenderFilter::Everyone.as_gender(), Gender::Everyone);
    }
}
