//! Main TUI application state and event loop.

use anyhow::Result;
use chrono::Datelike;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use super::components::BRAND_TAGLINE;
use super::input::{key_to_action, Action};
use super::theme::Theme;
use super::types::{AppEvent, Focus, KeyDialog, Notice};
use super::ui;
use crate::config::Config;
use crate::content::{
    ContentEngine, GenerateError, GeneratedContent, GenerationRequest, Mode, Tone,
};
use crate::provider;

/// How long the copied indicator stays visible
const COPIED_FLASH: Duration = Duration::from_secs(2);

/// Creator taglines rotated through the footer
pub const TAGLINES: [&str; 4] = [
    BRAND_TAGLINE,
    "\"Scoopz took me from 200 to 40k followers in three months.\"",
    "\"I batch a whole week of videos in one sitting now.\"",
    "\"The hooks alone doubled my watch time.\"",
];

/// Application state
pub struct App {
    /// Niche input text
    pub niche: String,
    /// Topic input text
    pub topic: String,
    /// Which input has focus
    pub focus: Focus,
    /// Cursor position in the focused input
    pub cursor_position: usize,
    /// Selected script tone
    pub tone: Tone,
    /// Active content mode
    pub mode: Mode,
    /// Latest generation result
    pub result: Option<GeneratedContent>,
    /// Vertical scroll offset for the results pane
    pub result_scroll: u16,
    /// Inline message shown above the results
    pub notice: Option<Notice>,
    /// Is a generation in flight
    pub is_processing: bool,
    /// Spinner animation frame
    pub spinner_frame: usize,
    /// Token of the generation currently in flight
    pub generation: u64,
    /// When the last clipboard copy happened
    pub copied_at: Option<Instant>,
    /// Index of the footer tagline currently shown
    pub tagline_index: usize,
    /// When the footer tagline last rotated
    pub tagline_rotated_at: Instant,
    /// Time between tagline rotations
    pub tagline_rotation: Duration,
    /// Year shown in the footer
    pub footer_year: i32,
    /// Model display string
    pub model_display: String,
    /// Provider ID
    pub provider_id: String,
    /// Model ID
    pub model_id: String,
    /// Whether a model is configured
    pub model_configured: bool,
    /// Theme
    pub theme: Theme,
    /// API key entry dialog
    pub key_dialog: Option<KeyDialog>,
    /// Should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            niche: String::new(),
            topic: String::new(),
            focus: Focus::Niche,
            cursor_position: 0,
            tone: Tone::default(),
            mode: Mode::default(),
            result: None,
            result_scroll: 0,
            notice: None,
            is_processing: false,
            spinner_frame: 0,
            generation: 0,
            copied_at: None,
            tagline_index: 0,
            tagline_rotated_at: Instant::now(),
            tagline_rotation: Duration::from_secs(8),
            footer_year: chrono::Local::now().year(),
            model_display: "No model configured".to_string(),
            provider_id: String::new(),
            model_id: String::new(),
            model_configured: false,
            theme: Theme::dark(),
            key_dialog: None,
            should_quit: false,
        }
    }
}

impl App {
    /// Create new app from config and startup flags.
    ///
    /// The provider registry must already be initialized.
    pub async fn new(config: &Config, niche: Option<String>, model: Option<String>) -> Self {
        let mut app = App::default();

        // Resolve the model to use
        let model_ref = match model {
            Some(m) => provider::parse_model_ref(&m),
            None => provider::registry().default_model(config).await,
        };

        if let Some((provider_id, model_id)) = model_ref {
            app.model_display = format!("{}/{}", provider_id, model_id);
            app.provider_id = provider_id;
            app.model_id = model_id;
            app.model_configured = true;
        }

        // Pre-fill inputs from flags and config
        if let Some(niche) = niche.or_else(|| config.default_niche.clone()) {
            app.cursor_position = niche.len();
            app.niche = niche;
        }
        if let Some(tone) = config
            .default_tone
            .as_deref()
            .and_then(|t| t.parse::<Tone>().ok())
        {
            app.tone = tone;
        }

        // Apply theme from config
        if let Some(theme_name) = &config.theme {
            app.theme = match theme_name.as_str() {
                "light" => Theme::light(),
                _ => Theme::dark(),
            };
        }

        app.tagline_rotation = Duration::from_secs(config.tagline_rotation_secs());

        app
    }

    /// Check if a model is configured and ready to use
    pub fn is_ready(&self) -> bool {
        self.model_configured && !self.provider_id.is_empty() && !self.model_id.is_empty()
    }

    /// Mutable access to the focused input field
    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Focus::Niche => &mut self.niche,
            Focus::Topic => &mut self.topic,
        }
    }

    /// Switch input focus, placing the cursor at the end of the new field
    pub fn switch_focus(&mut self) {
        self.focus = self.focus.next();
        self.cursor_position = match self.focus {
            Focus::Niche => self.niche.len(),
            Focus::Topic => self.topic.len(),
        };
    }

    /// Select the next mode in tab order
    pub fn next_mode(&mut self) {
        let modes = Mode::all();
        let current = modes.iter().position(|m| *m == self.mode).unwrap_or(0);
        self.select_mode(modes[(current + 1) % modes.len()]);
    }

    /// Select the previous mode in tab order
    pub fn prev_mode(&mut self) {
        let modes = Mode::all();
        let current = modes.iter().position(|m| *m == self.mode).unwrap_or(0);
        self.select_mode(modes[(current + modes.len() - 1) % modes.len()]);
    }

    // Switching modes clears the pane, same as switching tabs on the web
    fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.result = None;
        self.result_scroll = 0;
        self.notice = None;
    }

    /// Cycle to the next script tone
    pub fn cycle_tone(&mut self) {
        let tones = Tone::all();
        let current = tones.iter().position(|t| *t == self.tone).unwrap_or(0);
        self.tone = tones[(current + 1) % tones.len()];
    }

    /// Build a generation request from the current inputs
    pub fn build_request(&self) -> GenerationRequest {
        GenerationRequest {
            niche: self.niche.trim().to_string(),
            topic: self.topic.trim().to_string(),
            tone: self.tone,
            mode: self.mode,
        }
    }

    /// Start a new generation, invalidating any in-flight one
    pub fn begin_generation(&mut self) -> u64 {
        self.generation += 1;
        self.is_processing = true;
        self.notice = None;
        self.result = None;
        self.result_scroll = 0;
        self.generation
    }

    /// Drop the in-flight generation; its result arrives with a stale token
    pub fn cancel_generation(&mut self) {
        self.generation += 1;
        self.is_processing = false;
        self.notice = Some(Notice::info("Generation cancelled"));
    }

    /// Apply an async event, discarding results from superseded generations
    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::GenerationDone { token, content } => {
                if token != self.generation {
                    return;
                }
                self.is_processing = false;
                self.result = Some(content);
            }
            AppEvent::GenerationFailed { token, message } => {
                if token != self.generation {
                    return;
                }
                self.is_processing = false;
                self.notice = Some(Notice::error(&message));
            }
            AppEvent::KeyRequired {
                token,
                provider_id,
                provider_name,
                env_hint,
                message,
            } => {
                if token != self.generation {
                    return;
                }
                self.is_processing = false;
                self.open_key_dialog(&provider_id, &provider_name, &env_hint, &message);
            }
        }
    }

    /// Open the API key dialog for a provider
    pub fn open_key_dialog(
        &mut self,
        provider_id: &str,
        provider_name: &str,
        env_hint: &str,
        message: &str,
    ) {
        self.key_dialog =
            Some(KeyDialog::new(provider_id, provider_name, env_hint).with_message(message));
    }

    /// Close the API key dialog
    pub fn close_key_dialog(&mut self) {
        self.key_dialog = None;
    }

    /// Record a copy so the indicator shows for a short time
    pub fn mark_copied(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// Whether the copied indicator should still show
    pub fn copied_recently(&self) -> bool {
        self.copied_at.is_some_and(|at| at.elapsed() < COPIED_FLASH)
    }

    /// Footer tagline currently shown
    pub fn current_tagline(&self) -> &'static str {
        TAGLINES[self.tagline_index % TAGLINES.len()]
    }

    /// Advance animation state, called once per tick
    pub fn on_tick(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);

        if self.tagline_rotated_at.elapsed() >= self.tagline_rotation {
            self.tagline_index = (self.tagline_index + 1) % TAGLINES.len();
            self.tagline_rotated_at = Instant::now();
        }

        if let Some(at) = self.copied_at {
            if at.elapsed() >= COPIED_FLASH {
                self.copied_at = None;
            }
        }
    }

    /// Handle an input action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::NextField => {
                self.switch_focus();
            }
            Action::ModeNext => {
                self.next_mode();
            }
            Action::ModePrev => {
                self.prev_mode();
            }
            Action::ToneCycle => {
                self.cycle_tone();
            }
            Action::Char(c) => {
                let pos = self.cursor_position;
                self.focused_input().insert(pos, c);
                self.cursor_position += c.len_utf8();
            }
            Action::Backspace => {
                let pos = self.cursor_position;
                if pos > 0 {
                    let input = self.focused_input();
                    let prev_char_boundary = input[..pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                    input.remove(prev_char_boundary);
                    self.cursor_position = prev_char_boundary;
                }
            }
            Action::Delete => {
                let pos = self.cursor_position;
                let input = self.focused_input();
                if pos < input.len() {
                    input.remove(pos);
                }
            }
            Action::Left => {
                let pos = self.cursor_position;
                if pos > 0 {
                    self.cursor_position = self.focused_input()[..pos]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
            }
            Action::Right => {
                let pos = self.cursor_position;
                let input = self.focused_input();
                if pos < input.len() {
                    self.cursor_position = input[pos..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| pos + i)
                        .unwrap_or(input.len());
                }
            }
            Action::Home => {
                self.cursor_position = 0;
            }
            Action::End => {
                self.cursor_position = self.focused_input().len();
            }
            Action::ScrollUp => {
                self.result_scroll = self.result_scroll.saturating_sub(5);
            }
            Action::ScrollDown => {
                self.result_scroll = self.result_scroll.saturating_add(5);
            }
            Action::ClearInput => {
                self.focused_input().clear();
                self.cursor_position = 0;
            }
            _ => {}
        }
    }
}

/// Run the TUI application
pub async fn run(config: Config, niche: Option<String>, model: Option<String>) -> Result<()> {
    // Check if we're running in a TTY
    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!(
            "This command requires a TTY (terminal). Please run in an interactive terminal,\n\
            or use the 'generate' command instead for non-interactive usage:\n  \
            scoopz generate --niche fitness"
        );
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&config, niche, model).await;

    // No provider has a key yet; ask for one up front
    if !app.model_configured {
        if let Some(provider) = provider::registry()
            .get(provider::PROVIDER_PREFERENCE[0])
            .await
        {
            let name = provider.name.clone();
            let env_hint = provider.env_hint().to_string();
            app.open_key_dialog(
                &provider.id,
                &name,
                &env_hint,
                "Add an API key to start generating",
            );
        }
    }

    // Event channel for async generation results
    let (event_tx, mut event_rx) = mpsc::channel::<AppEvent>(100);

    // Run event loop
    let result = run_app(&mut terminal, &mut app, &config, event_tx, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Main event loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &Config,
    event_tx: mpsc::Sender<AppEvent>,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // Draw UI
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if app.key_dialog.is_some() {
                    handle_dialog_input(app, config, key).await?;
                } else {
                    match key_to_action(key) {
                        Action::Submit if !app.is_processing => {
                            submit_generation(app, &event_tx);
                        }
                        Action::Cancel if app.is_processing => {
                            app.cancel_generation();
                        }
                        Action::Cancel => {
                            app.result = None;
                            app.result_scroll = 0;
                            app.notice = None;
                        }
                        Action::CopyResult => {
                            copy_result(app);
                        }
                        action => app.handle_action(action),
                    }
                }
            }
        }

        // Process async generation events
        while let Ok(event) = event_rx.try_recv() {
            app.apply_event(event);
        }

        // Tick for animations
        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Validate inputs and spawn a generation task
fn submit_generation(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let request = app.build_request();
    if request.missing_input() {
        app.notice = Some(Notice::warning("Please enter a niche or topic first!"));
        return;
    }
    if !app.is_ready() {
        app.notice = Some(Notice::error(
            "No provider is configured. Set an API key (e.g. ANTHROPIC_API_KEY) or run `scoopz auth login`.",
        ));
        return;
    }

    let token = app.begin_generation();
    let provider_id = app.provider_id.clone();
    let model_id = app.model_id.clone();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        let event = run_generation(token, request, provider_id, model_id).await;
        let _ = tx.send(event).await;
    });
}

/// One generation round trip on a background task
async fn run_generation(
    token: u64,
    request: GenerationRequest,
    provider_id: String,
    model_id: String,
) -> AppEvent {
    let provider = match provider::registry().get(&provider_id).await {
        Some(provider) => provider,
        None => {
            return AppEvent::GenerationFailed {
                token,
                message: format!("Unknown provider: {}", provider_id),
            }
        }
    };

    let engine = match ContentEngine::new() {
        Ok(engine) => engine,
        Err(e) => {
            return AppEvent::GenerationFailed {
                token,
                message: e.to_string(),
            }
        }
    };

    // ThreadRng is not Send, so the task brings its own rng
    let mut rng = StdRng::from_os_rng();

    match engine
        .generate(&request, &provider, &model_id, &mut rng)
        .await
    {
        Ok(content) => AppEvent::GenerationDone { token, content },
        Err(GenerateError::CredentialMissing {
            provider: id,
            env_hint,
        }) => AppEvent::KeyRequired {
            token,
            provider_id: id,
            provider_name: provider.name.clone(),
            env_hint,
            message: "No API key configured yet".to_string(),
        },
        Err(error @ GenerateError::InvalidCredential(_)) => AppEvent::KeyRequired {
            token,
            provider_id: provider.id.clone(),
            provider_name: provider.name.clone(),
            env_hint: provider.env_hint().to_string(),
            message: error.to_string(),
        },
        Err(error) => AppEvent::GenerationFailed {
            token,
            message: error.to_string(),
        },
    }
}

/// Copy the current result to the clipboard
fn copy_result(app: &mut App) {
    let text = match &app.result {
        Some(result) => result.to_plain_text(),
        None => {
            app.notice = Some(Notice::info("Nothing to copy yet"));
            return;
        }
    };

    match crate::clipboard::copy_to_clipboard(&text) {
        Ok(()) => app.mark_copied(),
        Err(e) => app.notice = Some(Notice::error(&format!("Copy failed: {}", e))),
    }
}

/// Handle input while the API key dialog is open
async fn handle_dialog_input(
    app: &mut App,
    config: &Config,
    key: crossterm::event::KeyEvent,
) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.close_key_dialog();
        }
        KeyCode::Enter => {
            let (provider_id, api_key) = match &app.key_dialog {
                Some(dialog) => (
                    dialog.provider_id.clone(),
                    dialog.input_value.trim().to_string(),
                ),
                None => return Ok(()),
            };
            if api_key.is_empty() {
                return Ok(());
            }

            if let Err(e) = crate::auth::save_api_key(&provider_id, &api_key).await {
                if let Some(dialog) = &mut app.key_dialog {
                    dialog.message = Some(format!("Failed to save key: {}", e));
                }
                return Ok(());
            }

            // Re-initialize the registry so the new key is picked up
            provider::registry().initialize(config).await?;

            // Resolve a default model now that a key exists
            if !app.is_ready() {
                if let Some((provider_id, model_id)) =
                    provider::registry().default_model(config).await
                {
                    app.model_display = format!("{}/{}", provider_id, model_id);
                    app.provider_id = provider_id;
                    app.model_id = model_id;
                    app.model_configured = true;
                }
            }

            app.close_key_dialog();
            app.notice = Some(Notice::info("API key saved. Press Enter to generate."));
        }
        KeyCode::Char(c) => {
            if let Some(dialog) = &mut app.key_dialog {
                dialog.input_value.push(c);
            }
        }
        KeyCode::Backspace => {
            if let Some(dialog) = &mut app.key_dialog {
                dialog.input_value.pop();
            }
        }
        _ => {}
    }

    Ok(())
}
