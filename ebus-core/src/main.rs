//! src/main.rs
//! Demo page for the event registry: a handful of stage panels wired to
//! the seed handlers, keys standing in for the widgets that raise events.

use std::{
    collections::VecDeque,
    io::{self, Stdout},
    panic::PanicHookInfo,
    sync::Arc,
    time::Duration,
};

use anyhow::{Context, Result};
use chrono::Utc;
use compact_str::CompactString;
use crossterm::{
    event::{Event as TerminalEvent, EventStream, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde_json::json;
use tokio::time::interval;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use ebus_core::{
    config::Config,
    controller::{
        events,
        notifier::ToastNotifier,
        payload::EventPayload,
        registry::{EventRegistry, EventRegistryBuilder},
    },
    logging::init_logging_with_config,
    model::scene::SceneStage,
    model::stage::Stage,
    view::components::dispatch_log::DispatchRecord,
    view::ui::UIRenderer,
};
use toastr::ToastCenter;

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

const TICK_INTERVAL: Duration = Duration::from_millis(50);
const DISPATCH_HISTORY: usize = 64;

const NAV_EVENTS: [&str; 4] = [
    events::HOME_CLICK,
    events::ABOUT_CLICK,
    events::SERVICES_CLICK,
    events::CONTACT_CLICK,
];

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> Result<()> {
    setup_panic_handler();

    let app = App::new().await.context("Failed to initialize application")?;
    app.run().await.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

struct App {
    terminal: AppTerminal,
    registry: Arc<EventRegistry>,
    scene: SceneStage,
    center: ToastCenter,
    renderer: UIRenderer,
    records: VecDeque<DispatchRecord>,
    nav_cycle: usize,
    _log_guard: WorkerGuard,
}

impl App {
    async fn new() -> Result<Self> {
        let config = Config::load().await.unwrap_or_else(|e| {
            eprintln!("Failed to load config, using defaults: {e}");
            Config::default()
        });

        let log_guard = init_logging_with_config(config.logging.clone())
            .await
            .context("Failed to initialize logging")?;

        info!("Starting event registry demo page");

        let scene = SceneStage::new(config.transitions.clone());
        scene.add_panel("panel-1", "Carousel");
        scene.add_panel("panel-2", "Form Builder");
        scene.add_panel("panel-3", "Progress");

        let notifier =
            ToastNotifier::from_config(config.toasts.clone()).context("Bad toast config")?;
        let center = notifier.center().clone();

        let registry = Arc::new(
            EventRegistryBuilder::new()
                .with_stage(Arc::new(scene.clone()))
                .with_notifier(Arc::new(notifier))
                .with_seeds(config.seeds)
                .build(),
        );

        let terminal = setup_terminal().context("Failed to initialize terminal")?;

        Ok(Self {
            terminal,
            registry,
            scene,
            center,
            renderer: UIRenderer::new(),
            records: VecDeque::with_capacity(DISPATCH_HISTORY),
            nav_cycle: 0,
            _log_guard: log_guard,
        })
    }

    async fn run(mut self) -> Result<()> {
        let mut events = EventStream::new();
        let mut tick = interval(TICK_INTERVAL);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    self.draw()?;
                }

                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(TerminalEvent::Key(key))) => {
                            if self.handle_key(key) {
                                break;
                            }
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => {
                            warn!("Terminal event error: {e}");
                        }
                        None => break,
                    }
                }
            }
        }

        restore_terminal(&mut self.terminal)?;
        Ok(())
    }

    /// Returns `true` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,

            KeyCode::Char('b') => {
                self.raise(events::BUTTON_CLICK, json!({ "text": "Primary" }).into());
            }

            KeyCode::Char('f') => {
                self.raise(
                    events::FORM_SUBMIT,
                    json!({ "name": "Ada", "email": "ada@example.org" }).into(),
                );
            }

            KeyCode::Char('c') => {
                self.raise(events::CARD_CLICK, json!({ "title": "Showcase" }).into());
            }

            KeyCode::Char(digit @ '1'..='3') => {
                let target = format!("panel-{digit}");
                self.raise(
                    events::TOGGLE_COMPONENT,
                    json!({ "targetId": target }).into(),
                );
            }

            KeyCode::Char('n') => {
                let event = NAV_EVENTS[self.nav_cycle % NAV_EVENTS.len()];
                self.nav_cycle += 1;
                self.raise(event, EventPayload::empty());
            }

            // Deliberately unregistered: demonstrates the fallback path.
            KeyCode::Char('x') => {
                self.raise(
                    "onSparkle",
                    json!({ "message": "Speculative widget intent" }).into(),
                );
            }

            KeyCode::Char('r') => {
                self.registry.reset_to_defaults();
            }

            _ => {}
        }

        false
    }

    fn raise(&mut self, name: &str, payload: EventPayload) {
        if self.records.len() >= DISPATCH_HISTORY {
            self.records.pop_front();
        }

        self.records.push_back(DispatchRecord {
            at: Utc::now(),
            name: CompactString::from(name),
            payload: payload.clone(),
            known: self.registry.is_registered(name),
        });

        self.registry.trigger(name, payload);
    }

    fn draw(&mut self) -> Result<()> {
        let panels = self.scene.panels();
        let toasts = self.center.active();
        let route = self.scene.route();
        let handler_count = self.registry.handler_count();

        self.terminal.draw(|frame| {
            self.renderer.render(
                frame,
                &panels,
                &toasts,
                &self.records,
                &route,
                handler_count,
            );
        })?;

        Ok(())
    }
}

fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

fn restore_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info: &PanicHookInfo<'_>| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
