/// Command types for the terminal controller
///
/// Commands represent requests to perform actions (imperative).
/// They are parsed from a line of user input and run by the command executor.
use crate::error::CommandError;
use crate::game::BOX_COUNT;
use crate::i18n::Language;
use crate::questions::TopicFilter;

/// Controller commands
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start (or restart) a game
    StartGame,

    /// Back to topic selection with everything cleared
    ResetGame,

    /// Change the topic filter
    SelectTopic { topic: TopicFilter },

    /// Open a box by display position (0-based)
    ClickBox { index: usize },

    /// Answer with an option by position (0-based)
    SubmitAnswer { option: usize },

    /// Acknowledge the answer result
    ProceedToNextTurn,

    SetSfxVolume { volume: f32 },

    SetMusicVolume { volume: f32 },

    /// Flip the master sound switch
    ToggleSound,

    SetLanguage { language: Language },

    /// Write the current settings to the config file
    SaveSettings,

    Help,

    Quit,
}

/// Result of command execution
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// Command executed successfully
    Success,

    /// Command executed with a message for the user
    SuccessWithValue(String),

    /// Command failed with an error
    Error(String),

    /// The controller should stop
    Exit,
}

impl Command {
    /// Parse one line of user input, e.g. `box 3` or `answer 2`.
    ///
    /// Box and answer numbers are 1-based on input.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };
        let arg = parts.next();

        match name.to_lowercase().as_str() {
            "start" | "s" => Ok(Command::StartGame),
            "reset" => Ok(Command::ResetGame),
            "topic" | "t" => {
                let value = required("topic", arg)?;
                TopicFilter::parse(value)
                    .map(|topic| Command::SelectTopic { topic })
                    .ok_or_else(|| invalid("topic", value))
            }
            "box" | "b" => {
                let index = position("box", arg, BOX_COUNT)?;
                Ok(Command::ClickBox { index })
            }
            "answer" | "a" => {
                let option = position("answer", arg, usize::MAX)?;
                Ok(Command::SubmitAnswer { option })
            }
            "next" | "n" => Ok(Command::ProceedToNextTurn),
            "sfx" => Ok(Command::SetSfxVolume {
                volume: volume("sfx", arg)?,
            }),
            "music" => Ok(Command::SetMusicVolume {
                volume: volume("music", arg)?,
            }),
            "sound" => Ok(Command::ToggleSound),
            "lang" => {
                let value = required("lang", arg)?;
                Language::from_code(value)
                    .map(|language| Command::SetLanguage { language })
                    .ok_or_else(|| invalid("lang", value))
            }
            "save" => Ok(Command::SaveSettings),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    /// Get a human-readable description of the command
    pub fn description(&self) -> String {
        match self {
            Command::StartGame => "Start game".to_string(),
            Command::ResetGame => "Reset game".to_string(),
            Command::SelectTopic { topic } => format!("Select topic: {}", topic),
            Command::ClickBox { index } => format!("Open box {}", index + 1),
            Command::SubmitAnswer { option } => format!("Answer option {}", option + 1),
            Command::ProceedToNextTurn => "Next turn".to_string(),
            Command::SetSfxVolume { volume } => format!("Set effects volume: {:.2}", volume),
            Command::SetMusicVolume { volume } => format!("Set music volume: {:.2}", volume),
            Command::ToggleSound => "Toggle sound".to_string(),
            Command::SetLanguage { language } => format!("Set language: {}", language.name()),
            Command::SaveSettings => "Save settings".to_string(),
            Command::Help => "Show help".to_string(),
            Command::Quit => "Quit application".to_string(),
        }
    }
}

fn required<'a>(command: &'static str, arg: Option<&'a str>) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument { command })
}

fn invalid(command: &'static str, value: &str) -> CommandError {
    CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    }
}

/// 1-based position on input, 0-based index out
fn position(command: &'static str, arg: Option<&str>, count: usize) -> Result<usize, CommandError> {
    let value = required(command, arg)?;
    match value.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(invalid(command, value)),
    }
}

fn volume(command: &'static str, arg: Option<&str>) -> Result<f32, CommandError> {
    let value = required(command, arg)?;
    match value.parse::<f32>() {
        Ok(v) if (0.0..=1.0).contains(&v) => Ok(v),
        _ => Err(invalid(command, value)),
    }
}
