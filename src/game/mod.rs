/// Trivia game core
///
/// Board, turn and timer state for one two-player session. Everything is
/// driven from a single thread through [`GameSession`]; time only moves
/// when the caller advances the session clock.

pub mod board;
pub mod phase;
pub mod player;
pub mod random;
pub mod schedule;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use board::{Board, GameBox, BOX_COUNT, BOX_VALUES, LOSE_TURN_POINTS};
pub use phase::{GamePhase, PhaseMachine};
pub use player::{Player, Scores, Winner};
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use schedule::Scheduler;
pub use session::{GameRules, GameSession};
pub use snapshot::{AnswerResult, GameSnapshot, Notice};
pub use timer::Countdown;
