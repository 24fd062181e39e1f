/// Game phase state machine
///
/// Idle (topic selection) -> Playing (turns) -> Finished (winner declared).

use serde::Serialize;

/// Phase of a game session
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub enum GamePhase {
    /// Pre-game configuration
    #[default]
    Idle,

    /// Turns are being played
    Playing,

    /// Winner declared, scores locked
    Finished,
}

impl GamePhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, GamePhase::Idle)
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::Finished)
    }

    /// Get a human-readable description of the phase
    pub fn description(&self) -> &'static str {
        match self {
            GamePhase::Idle => "Idle",
            GamePhase::Playing => "Playing",
            GamePhase::Finished => "Finished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    /// Only a game in progress can finish
    NotPlaying,
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionError::NotPlaying => write!(f, "No game is in progress"),
        }
    }
}

impl std::error::Error for TransitionError {}

pub struct PhaseMachine {
    phase: GamePhase,
}

impl PhaseMachine {
    pub fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Enter Playing; from Playing or Finished this acts as a restart
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
    }

    /// Transition from Playing to Finished
    pub fn finish(&mut self) -> Result<(), TransitionError> {
        match self.phase {
            GamePhase::Playing => {
                self.phase = GamePhase::Finished;
                Ok(())
            }
            _ => Err(TransitionError::NotPlaying),
        }
    }

    /// Back to Idle from anywhere
    pub fn reset(&mut self) {
        self.phase = GamePhase::Idle;
    }
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self::new()
    }
}
