mod action;
mod app;
mod clock;
mod config;
mod error;
mod event;
mod filter;
mod form;
mod list;
mod mock;
mod selection;
mod session;
mod source;
mod storage;
mod tui;
mod types;
mod ui;
mod view;

use std::fs::{self, OpenOptions};
use std::panic;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::Action;
use crate::app::{App, Services};
use crate::clock::TokioClock;
use crate::config::Config;
use crate::event::Event;
use crate::mock::MockDataGenerator;
use crate::session::{SessionGate, SESSION_KEY};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::tui::EventHandler;

/// LinkedIn outreach dashboard in the terminal
#[derive(Debug, Parser)]
#[command(name = "linkbird", version)]
struct Cli {
    /// Config file (defaults to <config dir>/linkbird/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible mock data
    #[arg(long)]
    seed: Option<u64>,

    /// Forget the stored session before starting
    #[arg(long)]
    sign_out: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Log to a file; stderr is hidden behind the alternate screen
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let mut config = Config::load(cli.config.as_deref());
    if cli.seed.is_some() {
        config.general.seed = cli.seed;
    }

    let storage: Arc<dyn Storage> = match FileStorage::default_location() {
        Some(storage) => Arc::new(storage),
        None => {
            tracing::warn!("no config directory, session will not persist");
            Arc::new(MemoryStorage::default())
        }
    };
    if cli.sign_out {
        storage.remove(SESSION_KEY)?;
    }

    let generator = match config.general.seed {
        Some(seed) => MockDataGenerator::seeded(seed),
        None => MockDataGenerator::from_entropy(),
    };
    let services = Services::mock(&config, generator, Arc::new(TokioClock));
    let session = SessionGate::start(storage, config.auth.prompt_delay());

    let result = run(&config, session, services).await;

    // Restore terminal
    tui::restore()?;

    result
}

fn log_writer() -> BoxMakeWriter {
    let file = dirs::cache_dir()
        .map(|dir| dir.join("linkbird"))
        .and_then(|dir| {
            fs::create_dir_all(&dir).ok()?;
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(dir.join("linkbird.log"))
                .ok()
        });

    match file {
        Some(file) => BoxMakeWriter::new(Mutex::new(file)),
        None => BoxMakeWriter::new(std::io::stderr),
    }
}

async fn run(
    config: &Config,
    session: SessionGate,
    services: Services,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = tui::init()?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut app = App::new(config, session, services, action_tx.clone());

    let tick_rate = Duration::from_millis(250);
    let render_rate = Duration::from_millis(16);
    let mut events = EventHandler::new(tick_rate, render_rate);

    loop {
        tokio::select! {
            Some(event) = events.next() => {
                if event.is_quit() {
                    break;
                }

                match event {
                    Event::Render => {
                        terminal.draw(|frame| ui::render(frame, &app))?;
                    }
                    _ => {
                        let action = app.handle_event(event);
                        if !matches!(action, Action::None) {
                            action_tx.send(action)?;
                        }
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
