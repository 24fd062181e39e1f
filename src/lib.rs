//! Netizen Trivia
//!
//! A two-player trivia board game about digital culture, ethics and law.
//! The library holds the game core, its audio and the data it plays with;
//! the binary is a terminal controller on top of it.

pub mod audio_system;
pub mod config;
pub mod error;
pub mod game;
pub mod i18n;
pub mod messaging;
pub mod questions;
pub mod view;

pub use config::Config;
pub use error::AppResult;
pub use game::{GameRules, GameSession, GameSnapshot};
