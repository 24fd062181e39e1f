use std::io::{self, BufRead};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use crossbeam_channel::Sender;
use sysinfo::System;

use netizen_trivia::audio_system::{AudioEngine, MixerSettings};
use netizen_trivia::game::{GameRules, GameSession, RngSource};
use netizen_trivia::i18n::Translator;
use netizen_trivia::messaging::{Command, CommandExecutor};
use netizen_trivia::questions::QuestionBank;
use netizen_trivia::view::ConsoleView;
use netizen_trivia::{AppResult, Config};

const LOG_TARGET_STARTUP: &str = "netizen_trivia::startup";

/// How often the controller moves the game clock
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Initialize tracing with file rotation
///
/// Logs are written to:
/// - macOS: ~/Library/Application Support/NetizenTrivia/logs/
/// - Windows: %APPDATA%/NetizenTrivia/logs/
/// - Linux: ~/.config/NetizenTrivia/logs/
///
/// Log output:
/// - Debug builds: stderr + File
/// - Release builds: File only (stdout belongs to the game screen)
fn initialize_tracing() {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = Config::app_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    // Daily rotation: netizen-trivia.log.YYYY-MM-DD
    let file_appender = rolling::daily(&log_dir, "netizen-trivia.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();
    }

    tracing::info!("Log directory: {}", log_dir.display());
}

fn log_runtime_environment() {
    let mut system = System::new();
    system.refresh_cpu();

    let version = env!("CARGO_PKG_VERSION");
    let os_name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "Unknown OS".to_string());
    let kernel = System::kernel_version().unwrap_or_else(|| "Unknown Kernel".to_string());
    let architecture = std::env::consts::ARCH;

    tracing::info!(target: LOG_TARGET_STARTUP, "Starting Netizen Trivia v{} on ({})", version, architecture);
    tracing::info!(target: LOG_TARGET_STARTUP, "Operating System: {} (kernel {})", os_name, kernel);
    tracing::debug!(target: LOG_TARGET_STARTUP, "CPUs: {}", system.cpus().len());
}

/// Read commands from stdin on a dedicated thread.
///
/// Unparseable lines are reported right away and never reach the game.
fn spawn_input_reader(commands: Sender<Command>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match Command::parse(&line) {
                    Ok(command) => {
                        let quit = command == Command::Quit;
                        if commands.send(command).is_err() || quit {
                            break;
                        }
                    }
                    Err(e) => eprintln!("{} (type 'help')", e),
                }
            }
            tracing::debug!("Input reader finished");
        })
}

fn main() -> AppResult<()> {
    initialize_tracing();
    log_runtime_environment();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Using default settings, {} could not be read: {:#}",
                Config::config_path_display(),
                anyhow::Error::new(e)
            );
            Config::default()
        }
    };

    let bank = QuestionBank::embedded().context("Embedded question bank is invalid")?;

    let mixer = MixerSettings::default()
        .with_sound_on(config.sound_on)
        .with_sfx_volume(config.sfx_volume)
        .with_music_volume(config.music_volume);

    let session = GameSession::new(
        Arc::new(bank),
        GameRules::from(&config),
        AudioEngine::with_default_output(mixer),
        Box::new(Translator::new(config.language)),
        Box::new(RngSource::from_entropy()),
    );

    let (tx, rx) = crossbeam_channel::unbounded();
    spawn_input_reader(tx).context("Failed to start input reader")?;

    let mut view = ConsoleView::new(io::stdout());
    let mut executor = CommandExecutor::new(session, config);
    executor.run(rx, TICK_INTERVAL, &mut view)?;

    tracing::info!("Goodbye");
    Ok(())
}
