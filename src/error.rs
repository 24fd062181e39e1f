use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// The game core never fails during play: these cover loading data,
/// configuration and the audio device. They can be chained with anyhow.

#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error("Failed to parse question bank")]
    ParseFailed(#[source] serde_json::Error),

    #[error("Question {id}: correct answer is not one of its options")]
    AnswerNotInOptions { id: String },

    #[error("Question {id}: invalid point value {points}")]
    InvalidPoints { id: String, points: u32 },

    #[error("Question {id}: has no options")]
    NoOptions { id: String },

    #[error("Duplicate question id: {0}")]
    DuplicateId(String),
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to initialize audio output stream")]
    StreamInitFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Audio playback failed")]
    PlaybackFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to create config directory: {path}")]
    DirectoryCreationFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Failed to parse message table for {code}")]
    ParseFailed {
        code: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command}: missing argument")]
    MissingArgument { command: &'static str },

    #[error("{command}: invalid argument {value:?}")]
    InvalidArgument { command: &'static str, value: String },
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
