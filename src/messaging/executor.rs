/// Command executor
///
/// Owns the game session and applies commands to it. `run` is the
/// controller loop: it waits on the command channel and a fixed tick,
/// catches the session clock up with real time before every event and
/// re-renders whenever the snapshot changed.
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossbeam_channel::{select, tick, Receiver};

use super::commands::{Command, CommandResult};
use crate::config::Config;
use crate::error::AppResult;
use crate::game::GameSession;
use crate::i18n::{Translate, Translator};
use crate::view::Presenter;

pub struct CommandExecutor {
    session: GameSession,
    config: Config,
    /// Where `save` writes; the platform config file when unset
    config_path: Option<PathBuf>,
}

impl CommandExecutor {
    pub fn new(session: GameSession, config: Config) -> Self {
        Self {
            session,
            config,
            config_path: None,
        }
    }

    /// Save settings to an explicit file instead of the platform location
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Move the session clock forward
    pub fn advance(&mut self, elapsed: Duration) {
        self.session.advance(elapsed);
    }

    /// Execute a command immediately
    pub fn execute(&mut self, command: Command) -> CommandResult {
        tracing::debug!("Executing command: {}", command.description());

        match command {
            Command::StartGame => self.session.start_game(),
            Command::ResetGame => self.session.reset_game(),
            Command::SelectTopic { topic } => self.session.select_topic(topic),
            Command::ClickBox { index } => self.session.click_box_at(index),
            Command::SubmitAnswer { option } => self.session.submit_option(option),
            Command::ProceedToNextTurn => self.session.proceed_to_next_turn(),
            Command::SetSfxVolume { volume } => {
                self.session.set_sfx_volume(volume);
                self.config.sfx_volume = volume;
            }
            Command::SetMusicVolume { volume } => {
                self.session.set_music_volume(volume);
                self.config.music_volume = volume;
            }
            Command::ToggleSound => {
                self.config.sound_on = self.session.toggle_sound();
            }
            Command::SetLanguage { language } => {
                self.session
                    .set_translator(Box::new(Translator::new(language)));
                self.config.language = language;
                tracing::info!("Language set to {}", language.code());
            }
            Command::SaveSettings => {
                let saved = match self.config_path.as_deref() {
                    Some(path) => self.config.save_to(path),
                    None => self.config.save(),
                };
                return match saved {
                    Ok(()) => CommandResult::SuccessWithValue("Settings saved".to_string()),
                    Err(e) => {
                        tracing::error!("Failed to save settings: {}", e);
                        CommandResult::Error(format!("{:#}", anyhow::Error::new(e)))
                    }
                };
            }
            Command::Help => {
                return CommandResult::SuccessWithValue(self.session.translator().t("game_help"));
            }
            Command::Quit => {
                tracing::info!("Quit command received");
                return CommandResult::Exit;
            }
        }

        CommandResult::Success
    }

    /// Run until a quit command arrives or the command channel closes
    pub fn run<P: Presenter>(
        &mut self,
        commands: Receiver<Command>,
        tick_interval: Duration,
        presenter: &mut P,
    ) -> AppResult<()> {
        let ticker = tick(tick_interval);
        let mut last = Instant::now();
        let mut shown = self.session.snapshot();
        presenter
            .render(&shown, self.session.translator())
            .context("Failed to render game")?;

        tracing::info!("Controller loop started");

        loop {
            select! {
                recv(commands) -> msg => {
                    let now = Instant::now();
                    self.advance(now.duration_since(last));
                    last = now;

                    let Ok(command) = msg else {
                        tracing::info!("Input closed, stopping controller");
                        break;
                    };
                    match self.execute(command) {
                        CommandResult::Exit => break,
                        CommandResult::Success => {}
                        CommandResult::SuccessWithValue(text) => presenter.notify(&text)?,
                        CommandResult::Error(text) => presenter.notify(&text)?,
                    }
                }
                recv(ticker) -> tick_at => {
                    let now = tick_at.unwrap_or_else(|_| Instant::now());
                    self.advance(now.saturating_duration_since(last));
                    last = last.max(now);
                }
            }

            let snapshot = self.session.snapshot();
            if snapshot != shown {
                presenter
                    .render(&snapshot, self.session.translator())
                    .context("Failed to render game")?;
                shown = snapshot;
            }
        }

        tracing::info!("Controller loop stopped");
        Ok(())
    }
}
