/// Read-only view of a game session for the presentation layer
use serde::Serialize;

use super::board::GameBox;
use super::phase::GamePhase;
use super::player::{Player, Scores, Winner};
use crate::i18n::Translate;
use crate::questions::{Question, TopicFilter};

/// Transient message shown while a skipped turn waits to advance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notice {
    LostTurn { player: Player },
    NoQuestion { points: u32 },
    Timeout,
}

impl Notice {
    pub fn render(&self, translator: &dyn Translate) -> String {
        match self {
            Notice::LostTurn { player } => translator.t_with(
                "game_lost_turn_message",
                &[("player", player.to_string())],
            ),
            Notice::NoQuestion { points } => translator.t_with(
                "game_no_question_message",
                &[("points", points.to_string())],
            ),
            Notice::Timeout => translator.t("game_timeout_message"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResult {
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub scores: Scores,
    pub current_player: Player,
    pub turn_count: u32,
    pub max_turns: u32,
    pub question_seconds: u32,
    pub selected_topic: TopicFilter,
    pub boxes: Vec<GameBox>,
    pub current_question: Option<Question>,
    pub selected_box_points: u32,
    pub turn_in_progress: bool,
    pub answer_result: Option<AnswerResult>,
    pub timer_seconds: Option<u32>,
    pub winner: Option<Winner>,
    pub message: Option<String>,
    pub sound_on: bool,
    pub sfx_volume: f32,
    pub music_volume: f32,
}

impl GameSnapshot {
    /// Turn number for display, never past the last turn
    pub fn display_turn(&self) -> u32 {
        self.turn_count.min(self.max_turns)
    }

    /// Whether the board accepts a click right now
    pub fn board_enabled(&self) -> bool {
        self.phase.is_playing() && !self.turn_in_progress && self.winner.is_none()
    }
}
