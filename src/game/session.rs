/// Game session
///
/// Owns all mutable round state and drives it from discrete events: player
/// actions arrive as method calls, time arrives through [`GameSession::advance`].
/// Every event runs to completion before the next one is looked at, so the
/// countdown and the delayed continuations never interleave with an action.
///
/// ```text
///   Idle ──start_game──> Playing ──turn > max_turns──> Finished
///     ^                     │                              │
///     └──────reset_game─────┴──────────reset_game──────────┘
/// ```
use std::sync::Arc;
use std::time::Duration;

use super::board::{Board, LOSE_TURN_POINTS};
use super::phase::{GamePhase, PhaseMachine};
use super::player::{Player, Scores, Winner};
use super::random::RandomSource;
use super::schedule::{Continuation, Fired, Scheduler};
use super::snapshot::{AnswerResult, GameSnapshot, Notice};
use super::timer::Countdown;
use crate::audio_system::{AudioEngine, SoundEffect};
use crate::config::Config;
use crate::i18n::Translate;
use crate::questions::{Question, QuestionBank, TopicFilter};

/// Fixed rules for a session, read once from the config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_turns: u32,
    pub question_seconds: u32,
    /// How long a lost-turn or skipped-turn message stays up
    pub message_delay: Duration,
    /// Reshuffle the board when a turn is skipped for lack of questions
    pub reshuffle_on_skip: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_turns: 10,
            question_seconds: 15,
            message_delay: Duration::from_secs(2),
            reshuffle_on_skip: false,
        }
    }
}

impl From<&Config> for GameRules {
    fn from(config: &Config) -> Self {
        Self {
            max_turns: config.max_turns,
            question_seconds: config.question_seconds,
            message_delay: Duration::from_millis(config.message_delay_ms),
            reshuffle_on_skip: config.reshuffle_on_skip,
        }
    }
}

enum Due {
    Tick(Duration),
    Continuation(Duration),
}

pub struct GameSession {
    bank: Arc<QuestionBank>,
    rules: GameRules,
    audio: AudioEngine,
    translator: Box<dyn Translate>,
    rng: Box<dyn RandomSource>,

    machine: PhaseMachine,
    board: Board,
    scores: Scores,
    current_player: Player,
    turn_count: u32,
    selected_topic: TopicFilter,
    current_question: Option<Question>,
    selected_box_points: u32,
    turn_in_progress: bool,
    answer_result: Option<AnswerResult>,
    countdown: Option<Countdown>,
    winner: Option<Winner>,
    notice: Option<Notice>,

    scheduler: Scheduler,
    /// Virtual clock, only moved by `advance`
    now: Duration,
}

impl GameSession {
    /// Create an idle session and start the ambient tone at zero volume
    pub fn new(
        bank: Arc<QuestionBank>,
        rules: GameRules,
        mut audio: AudioEngine,
        translator: Box<dyn Translate>,
        mut rng: Box<dyn RandomSource>,
    ) -> Self {
        audio.init_ambient();
        let board = Board::shuffled(rng.as_mut());

        tracing::info!(
            "Game session ready: {} questions, {} turns, {}s per question",
            bank.len(),
            rules.max_turns,
            rules.question_seconds
        );

        Self {
            bank,
            rules,
            audio,
            translator,
            rng,
            machine: PhaseMachine::new(),
            board,
            scores: Scores::default(),
            current_player: Player::One,
            turn_count: 1,
            selected_topic: TopicFilter::All,
            current_question: None,
            selected_box_points: 0,
            turn_in_progress: false,
            answer_result: None,
            countdown: None,
            winner: None,
            notice: None,
            scheduler: Scheduler::new(),
            now: Duration::ZERO,
        }
    }

    // ------------------------------------------------------------------
    // Player actions
    // ------------------------------------------------------------------

    /// Begin a fresh game; from Playing or Finished this restarts
    pub fn start_game(&mut self) {
        self.clear_round();
        self.machine.start();
        tracing::info!("Game started (topic: {})", self.selected_topic);
    }

    /// Return everything to defaults and go back to topic selection
    pub fn reset_game(&mut self) {
        self.clear_round();
        self.machine.reset();
        tracing::info!("Game reset");
    }

    fn clear_round(&mut self) {
        self.scheduler.bump();
        self.scores = Scores::default();
        self.current_player = Player::One;
        self.turn_count = 1;
        self.current_question = None;
        self.selected_box_points = 0;
        self.turn_in_progress = false;
        self.answer_result = None;
        self.countdown = None;
        self.winner = None;
        self.notice = None;
        self.board.reshuffle(self.rng.as_mut());
    }

    /// Narrow the question pool used by later box clicks
    pub fn select_topic(&mut self, topic: TopicFilter) {
        if self.turn_in_progress || self.machine.phase().is_finished() {
            tracing::debug!("Ignoring topic change to {} mid-turn", topic);
            return;
        }
        tracing::debug!("Topic filter set to {}", topic);
        self.selected_topic = topic;
    }

    /// Open the box worth `points` for the current player
    pub fn click_box(&mut self, points: u32) {
        if !self.machine.phase().is_playing()
            || self.turn_in_progress
            || self.winner.is_some()
            || self.turn_count > self.rules.max_turns
        {
            tracing::debug!("Ignoring box click ({} points)", points);
            return;
        }
        if self.board.index_of(points).is_none() {
            tracing::debug!("No box holds {} points", points);
            return;
        }
        self.turn_in_progress = true;

        if points == LOSE_TURN_POINTS {
            tracing::info!("Player {} opened the lose-turn box", self.current_player);
            self.audio.play(SoundEffect::LoseTurn);
            self.notice = Some(Notice::LostTurn {
                player: self.current_player,
            });
            self.schedule_advance(true);
            return;
        }

        let picked = self
            .bank
            .pick(self.selected_topic, points, self.rng.as_mut())
            .cloned();

        match picked {
            Some(question) => {
                tracing::info!(
                    "Player {} drew question {} for {} points",
                    self.current_player,
                    question.id,
                    points
                );
                self.current_question = Some(question);
                self.selected_box_points = points;
                self.countdown = Some(Countdown::start(self.now, self.rules.question_seconds));
            }
            None => {
                tracing::info!(
                    "No {} question for {} points, skipping turn",
                    self.selected_topic,
                    points
                );
                self.notice = Some(Notice::NoQuestion { points });
                self.schedule_advance(self.rules.reshuffle_on_skip);
            }
        }
    }

    /// Open the box at a display position (0-based)
    pub fn click_box_at(&mut self, index: usize) {
        match self.board.points_at(index) {
            Some(points) => self.click_box(points),
            None => tracing::debug!("No box at position {}", index),
        }
    }

    /// Answer the active question with the text of one option
    pub fn submit_answer(&mut self, answer: &str) {
        if self.answer_result.is_some() {
            tracing::debug!("Question already answered");
            return;
        }
        let Some(question) = self.current_question.as_ref() else {
            tracing::debug!("No active question to answer");
            return;
        };

        self.countdown = None;
        let is_correct = question.is_correct(answer);
        let explanation = question.explanation.clone();

        if is_correct {
            self.audio.play(SoundEffect::Correct);
            self.scores
                .add(self.current_player, self.selected_box_points);
        } else {
            self.audio.play(SoundEffect::Incorrect);
        }

        tracing::info!(
            "Player {} answered {} ({} points at stake)",
            self.current_player,
            if is_correct { "correctly" } else { "incorrectly" },
            self.selected_box_points
        );

        self.answer_result = Some(AnswerResult {
            is_correct,
            explanation,
        });
    }

    /// Answer with the option at `index` (0-based) of the active question
    pub fn submit_option(&mut self, index: usize) {
        let option = self
            .current_question
            .as_ref()
            .and_then(|q| q.options.get(index))
            .cloned();

        match option {
            Some(option) => self.submit_answer(&option),
            None => tracing::debug!("No option at position {}", index),
        }
    }

    /// Acknowledge the answer result and hand the board over
    pub fn proceed_to_next_turn(&mut self) {
        if self.answer_result.is_none() {
            tracing::debug!("Nothing to proceed from");
            return;
        }
        self.answer_result = None;
        self.current_question = None;
        self.advance_turn(true);
    }

    // ------------------------------------------------------------------
    // Time
    // ------------------------------------------------------------------

    /// Move the virtual clock forward, firing countdown ticks and due
    /// continuations in time order
    pub fn advance(&mut self, elapsed: Duration) {
        let target = self.now + elapsed;

        loop {
            let tick = self
                .countdown
                .map(|c| c.next_tick_at())
                .filter(|at| *at <= target);
            let continuation = self.scheduler.next_due().filter(|at| *at <= target);

            let due = match (tick, continuation) {
                (None, None) => break,
                (Some(tick), Some(cont)) if cont < tick => Due::Continuation(cont),
                (Some(tick), _) => Due::Tick(tick),
                (None, Some(cont)) => Due::Continuation(cont),
            };

            match due {
                Due::Tick(at) => {
                    self.now = at;
                    self.on_tick();
                }
                Due::Continuation(at) => {
                    self.now = at;
                    self.run_due_continuation();
                }
            }
        }

        self.now = target;
    }

    fn on_tick(&mut self) {
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };
        if countdown.tick() == 0 {
            self.handle_timeout();
        }
    }

    fn handle_timeout(&mut self) {
        tracing::info!("Player {} ran out of time", self.current_player);
        self.countdown = None;
        self.audio.play(SoundEffect::LoseTurn);
        self.notice = Some(Notice::Timeout);
        self.current_question = None;
        self.schedule_advance(true);
    }

    fn run_due_continuation(&mut self) {
        match self.scheduler.pop_due(self.now) {
            Some(Fired::Live(Continuation::AdvanceTurn { reshuffle })) => {
                self.notice = None;
                self.advance_turn(reshuffle);
            }
            Some(Fired::Stale) | None => {}
        }
    }

    fn schedule_advance(&mut self, reshuffle: bool) {
        self.scheduler.schedule(
            self.now + self.rules.message_delay,
            Continuation::AdvanceTurn { reshuffle },
        );
    }

    fn advance_turn(&mut self, reshuffle: bool) {
        self.scheduler.bump();
        self.countdown = None;
        self.current_player = self.current_player.other();
        self.turn_count += 1;
        self.turn_in_progress = false;
        if reshuffle {
            self.board.reshuffle(self.rng.as_mut());
        }
        tracing::debug!(
            "Turn {} goes to player {}",
            self.turn_count,
            self.current_player
        );
        self.evaluate_end_of_game();
    }

    fn evaluate_end_of_game(&mut self) {
        if self.turn_count <= self.rules.max_turns || self.winner.is_some() {
            return;
        }

        let winner = self.scores.winner();
        self.winner = Some(winner);
        self.countdown = None;
        if let Err(e) = self.machine.finish() {
            tracing::debug!("Finish transition rejected: {}", e);
        }
        self.audio.play(SoundEffect::Win);
        tracing::info!(
            "Game over after {} turns, {} wins ({} - {})",
            self.rules.max_turns,
            winner,
            self.scores.get(Player::One),
            self.scores.get(Player::Two)
        );
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.audio.set_sfx_volume(volume);
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.audio.set_music_volume(volume);
    }

    /// Flip the master sound switch, returns the new state
    pub fn toggle_sound(&mut self) -> bool {
        self.audio.toggle_sound()
    }

    pub fn set_translator(&mut self, translator: Box<dyn Translate>) {
        self.translator = translator;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.machine.phase()
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn selected_topic(&self) -> TopicFilter {
        self.selected_topic
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn selected_box_points(&self) -> u32 {
        self.selected_box_points
    }

    pub fn is_turn_in_progress(&self) -> bool {
        self.turn_in_progress
    }

    pub fn answer_result(&self) -> Option<&AnswerResult> {
        self.answer_result.as_ref()
    }

    /// Seconds left on the active question, `None` when no countdown runs
    pub fn timer_seconds(&self) -> Option<u32> {
        self.countdown.map(|c| c.remaining())
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// The current notice in the active language
    pub fn message(&self) -> Option<String> {
        self.notice.map(|n| n.render(self.translator.as_ref()))
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn audio(&self) -> &AudioEngine {
        &self.audio
    }

    pub fn translator(&self) -> &dyn Translate {
        self.translator.as_ref()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mixer = self.audio.mixer();
        GameSnapshot {
            phase: self.phase(),
            scores: self.scores,
            current_player: self.current_player,
            turn_count: self.turn_count,
            max_turns: self.rules.max_turns,
            question_seconds: self.rules.question_seconds,
            selected_topic: self.selected_topic,
            boxes: self.board.boxes().to_vec(),
            current_question: self.current_question.clone(),
            selected_box_points: self.selected_box_points,
            turn_in_progress: self.turn_in_progress,
            answer_result: self.answer_result.clone(),
            timer_seconds: self.timer_seconds(),
            winner: self.winner,
            message: self.message(),
            sound_on: mixer.sound_on,
            sfx_volume: mixer.sfx.level(),
            music_volume: mixer.music.level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio_system::{BackendCall, MixerSettings, RecordingBackend, ToneSegment};
    use crate::game::board::BOX_VALUES;
    use crate::game::random::ScriptedSource;
    use crate::i18n::{Language, Translator};
    use crate::questions::Topic;

    const SECOND: Duration = Duration::from_secs(1);

    // With ScriptedSource::zeros every board is [20, 30, 50, 0, 10] and the
    // first matching question is always drawn.
    const C30A_ANSWER: &str = "A feed that mostly shows content matching what you already like";

    // Draws that deal [10, 20, 30, 50, 0] and [20, 30, 50, 0, 10]
    const IN_ORDER: [(usize, usize); 4] = [(4, 5), (3, 4), (2, 3), (1, 2)];
    const ROTATED: [(usize, usize); 4] = [(0, 5), (0, 4), (0, 3), (0, 2)];
    const FIRST_QUESTION: (usize, usize) = (0, 1);

    fn session_with(bank: QuestionBank, rules: GameRules) -> (GameSession, RecordingBackend) {
        session_with_rng(bank, rules, ScriptedSource::zeros())
    }

    fn session_with_rng(
        bank: QuestionBank,
        rules: GameRules,
        rng: ScriptedSource,
    ) -> (GameSession, RecordingBackend) {
        let recorder = RecordingBackend::new();
        let audio = AudioEngine::new(Box::new(recorder.clone()), MixerSettings::default());
        let session = GameSession::new(
            Arc::new(bank),
            rules,
            audio,
            Box::new(Translator::new(Language::English)),
            Box::new(rng),
        );
        recorder.take();
        (session, recorder)
    }

    /// A started session whose first board is rotated and whose next
    /// reshuffle after `between` draws deals the boxes in order
    fn alternating_session(
        bank: QuestionBank,
        between: &[(usize, usize)],
    ) -> (GameSession, RecordingBackend) {
        let picks: Vec<(usize, usize)> = IN_ORDER
            .iter()
            .chain(ROTATED.iter())
            .chain(between.iter())
            .chain(IN_ORDER.iter())
            .copied()
            .collect();
        let (mut session, recorder) =
            session_with_rng(bank, GameRules::default(), ScriptedSource::from_picks(&picks));
        session.start_game();
        assert_eq!(points(session.board()), vec![20, 30, 50, 0, 10]);
        (session, recorder)
    }

    fn points(board: &Board) -> Vec<u32> {
        board.boxes().iter().map(|b| b.points).collect()
    }

    fn playing_session() -> (GameSession, RecordingBackend) {
        let bank = QuestionBank::embedded().expect("embedded bank");
        let (mut session, recorder) = session_with(bank, GameRules::default());
        session.start_game();
        (session, recorder)
    }

    fn tones(recorder: &RecordingBackend) -> Vec<ToneSegment> {
        recorder
            .take()
            .into_iter()
            .filter_map(|call| match call {
                BackendCall::Tone { segment, .. } => Some(segment),
                _ => None,
            })
            .collect()
    }

    fn question(id: &str, topic: Topic, points: u32) -> Question {
        Question {
            id: id.to_string(),
            topic,
            question: format!("Question {}?", id),
            options: vec!["right".to_string(), "wrong".to_string()],
            correct_answer: "right".to_string(),
            points,
            explanation: format!("Because {}", id),
        }
    }

    #[test]
    fn test_new_session_is_idle_with_ambient_tone() {
        let recorder = RecordingBackend::new();
        let audio = AudioEngine::new(Box::new(recorder.clone()), MixerSettings::default());
        let session = GameSession::new(
            Arc::new(QuestionBank::embedded().expect("embedded bank")),
            GameRules::default(),
            audio,
            Box::new(Translator::new(Language::English)),
            Box::new(ScriptedSource::zeros()),
        );

        assert_eq!(session.phase(), GamePhase::Idle);
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.current_player(), Player::One);
        assert!(session.audio().is_ambient_running());
        assert!(matches!(
            recorder.calls().first(),
            Some(BackendCall::StartAmbient { .. })
        ));
    }

    #[test]
    fn test_clicks_ignored_before_start() {
        let bank = QuestionBank::embedded().expect("embedded bank");
        let (mut session, recorder) = session_with(bank, GameRules::default());

        session.click_box(30);
        assert!(!session.is_turn_in_progress());
        assert!(session.current_question().is_none());
        assert_eq!(recorder.tone_count(), 0);
    }

    #[test]
    fn test_correct_answer_scores_and_waits_for_proceed() {
        let (mut session, recorder) = playing_session();

        session.click_box(30);
        assert!(session.is_turn_in_progress());
        assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("c30a"));
        assert_eq!(session.selected_box_points(), 30);
        assert_eq!(session.timer_seconds(), Some(15));

        session.submit_answer(C30A_ANSWER);
        assert_eq!(session.scores(), Scores::new(30, 0));
        assert_eq!(session.timer_seconds(), None);
        assert_eq!(
            session.answer_result().map(|r| r.is_correct),
            Some(true)
        );
        assert_eq!(tones(&recorder), SoundEffect::Correct.segments().to_vec());

        // The turn only moves on acknowledgement
        session.advance(SECOND * 30);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.turn_count(), 1);

        session.proceed_to_next_turn();
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.turn_count(), 2);
        assert!(!session.is_turn_in_progress());
        assert!(session.current_question().is_none());
        assert!(session.answer_result().is_none());
    }

    #[test]
    fn test_wrong_answer_scores_nothing() {
        let (mut session, recorder) = playing_session();

        session.click_box(50);
        session.submit_answer("definitely not it");

        assert_eq!(session.scores(), Scores::new(0, 0));
        let result = session.answer_result().cloned().expect("answer recorded");
        assert!(!result.is_correct);
        assert!(!result.explanation.is_empty());
        assert_eq!(tones(&recorder), SoundEffect::Incorrect.segments().to_vec());
    }

    #[test]
    fn test_second_answer_is_ignored() {
        let (mut session, recorder) = playing_session();

        session.click_box(30);
        session.submit_answer("nope");
        session.submit_answer(C30A_ANSWER);

        assert_eq!(session.scores(), Scores::new(0, 0));
        assert_eq!(session.answer_result().map(|r| r.is_correct), Some(false));
        assert_eq!(tones(&recorder).len(), SoundEffect::Incorrect.segments().len());
    }

    #[test]
    fn test_submit_option_by_index() {
        let (mut session, _) = playing_session();

        session.click_box(30);
        let index = session
            .current_question()
            .and_then(|q| q.options.iter().position(|o| o == C30A_ANSWER))
            .expect("answer among options");
        session.submit_option(99);
        assert!(session.answer_result().is_none());

        session.submit_option(index);
        assert_eq!(session.scores(), Scores::new(30, 0));
    }

    #[test]
    fn test_box_clicks_ignored_mid_turn() {
        let (mut session, _) = playing_session();

        session.click_box(30);
        let first = session.current_question().cloned();
        session.click_box(10);
        session.click_box(0);

        assert_eq!(session.current_question().cloned(), first);
        assert_eq!(session.selected_box_points(), 30);
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_lose_turn_box_advances_after_delay() {
        let (mut session, recorder) = playing_session();

        session.click_box_at(3);
        assert!(session.is_turn_in_progress());
        assert!(session.current_question().is_none());
        assert_eq!(
            session.message().as_deref(),
            Some("Oh no! Player 1 loses a turn!")
        );
        assert_eq!(tones(&recorder), SoundEffect::LoseTurn.segments().to_vec());

        session.advance(Duration::from_millis(1999));
        assert_eq!(session.current_player(), Player::One);

        session.advance(Duration::from_millis(1));
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.turn_count(), 2);
        assert!(!session.is_turn_in_progress());
        assert!(session.message().is_none());
        assert_eq!(session.scores(), Scores::new(0, 0));
    }

    #[test]
    fn test_timer_runs_out() {
        let (mut session, recorder) = playing_session();

        session.click_box(20);
        session.advance(SECOND * 14);
        assert_eq!(session.timer_seconds(), Some(1));
        assert!(session.current_question().is_some());
        assert_eq!(recorder.tone_count(), 0);

        session.advance(SECOND);
        assert_eq!(session.timer_seconds(), None);
        assert!(session.current_question().is_none());
        assert_eq!(session.notice(), Some(Notice::Timeout));
        assert_eq!(tones(&recorder), SoundEffect::LoseTurn.segments().to_vec());
        assert_eq!(session.current_player(), Player::One);

        session.advance(SECOND * 2);
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.turn_count(), 2);
        assert!(session.notice().is_none());

        // Timeout fired exactly once
        session.advance(SECOND * 60);
        assert_eq!(recorder.tone_count(), 0);
        assert_eq!(session.turn_count(), 2);
    }

    #[test]
    fn test_single_advance_covers_timeout_and_delay() {
        let (mut session, _) = playing_session();

        session.click_box(20);
        session.advance(SECOND * 17);
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.turn_count(), 2);
        assert_eq!(session.now(), SECOND * 17);
    }

    #[test]
    fn test_answer_stops_the_countdown() {
        let (mut session, recorder) = playing_session();

        session.click_box(30);
        session.advance(SECOND * 10);
        session.submit_answer(C30A_ANSWER);
        recorder.take();

        session.advance(SECOND * 30);
        assert_eq!(recorder.tone_count(), 0);
        assert!(session.notice().is_none());
        assert!(session.answer_result().is_some());
    }

    #[test]
    fn test_no_question_skips_without_reshuffle() {
        let bank = QuestionBank::new(vec![question("only10", Topic::Law, 10)]).expect("valid bank");
        let (mut session, recorder) = alternating_session(bank, &[]);

        session.click_box(50);
        assert_eq!(
            session.message().as_deref(),
            Some("No question available for 50 points. Next player!")
        );
        assert_eq!(recorder.tone_count(), 0);

        session.advance(SECOND * 2);
        assert_eq!(session.current_player(), Player::Two);
        assert_eq!(session.turn_count(), 2);
        assert!(!session.is_turn_in_progress());
        // A reshuffle here would have dealt the boxes in order
        assert_eq!(points(session.board()), vec![20, 30, 50, 0, 10]);
    }

    #[test]
    fn test_lose_turn_reshuffles_board() {
        let bank = QuestionBank::embedded().expect("embedded bank");
        let (mut session, _) = alternating_session(bank, &[]);

        session.click_box(0);
        session.advance(SECOND * 2);
        assert_eq!(session.turn_count(), 2);
        assert_eq!(points(session.board()), BOX_VALUES.to_vec());
    }

    #[test]
    fn test_timeout_reshuffles_board() {
        let bank = QuestionBank::new(vec![question("only20", Topic::Ethics, 20)]).expect("valid bank");
        let (mut session, _) = alternating_session(bank, &[FIRST_QUESTION]);

        session.click_box(20);
        assert!(session.current_question().is_some());
        session.advance(SECOND * 15);
        assert_eq!(points(session.board()), vec![20, 30, 50, 0, 10]);

        session.advance(SECOND * 2);
        assert_eq!(session.turn_count(), 2);
        assert_eq!(points(session.board()), BOX_VALUES.to_vec());
    }

    #[test]
    fn test_proceed_reshuffles_board() {
        let bank = QuestionBank::new(vec![question("only30", Topic::Culture, 30)]).expect("valid bank");
        let (mut session, _) = alternating_session(bank, &[FIRST_QUESTION]);

        session.click_box(30);
        session.submit_answer("right");
        session.proceed_to_next_turn();
        assert_eq!(session.turn_count(), 2);
        assert_eq!(session.scores(), Scores::new(30, 0));
        assert_eq!(points(session.board()), BOX_VALUES.to_vec());
    }

    #[test]
    fn test_unknown_box_value_is_ignored() {
        let (mut session, recorder) = playing_session();

        session.click_box(40);
        assert!(!session.is_turn_in_progress());
        assert!(session.notice().is_none());
        assert_eq!(recorder.tone_count(), 0);

        session.advance(SECOND * 5);
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.current_player(), Player::One);

        session.click_box(30);
        assert!(session.current_question().is_some());
    }

    #[test]
    fn test_topic_filter_limits_pool() {
        let bank = QuestionBank::new(vec![
            question("culture10", Topic::Culture, 10),
            question("law10", Topic::Law, 10),
        ])
        .expect("valid bank");
        let (mut session, _) = session_with(bank, GameRules::default());
        session.select_topic(TopicFilter::Only(Topic::Law));
        session.start_game();

        session.click_box(10);
        assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("law10"));

        // Locked while the turn is in progress
        session.select_topic(TopicFilter::All);
        assert_eq!(session.selected_topic(), TopicFilter::Only(Topic::Law));
    }

    #[test]
    fn test_reset_drops_pending_continuation() {
        let (mut session, _) = playing_session();

        session.click_box(0);
        session.reset_game();
        assert_eq!(session.phase(), GamePhase::Idle);
        assert!(session.notice().is_none());

        session.start_game();
        session.advance(SECOND * 5);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.turn_count(), 1);
        assert!(!session.is_turn_in_progress());
    }

    #[test]
    fn test_restart_keeps_topic_and_clears_scores() {
        let (mut session, _) = playing_session();
        session.select_topic(TopicFilter::Only(Topic::Ethics));

        session.click_box(30);
        session.submit_option(0);
        session.proceed_to_next_turn();
        session.start_game();

        assert_eq!(session.scores(), Scores::default());
        assert_eq!(session.turn_count(), 1);
        assert_eq!(session.current_player(), Player::One);
        assert_eq!(session.selected_topic(), TopicFilter::Only(Topic::Ethics));
    }

    #[test]
    fn test_game_finishes_after_last_turn() {
        let (mut session, recorder) = playing_session();

        for turn in 1..=10 {
            assert_eq!(session.turn_count(), turn);
            session.click_box(0);
            session.advance(SECOND * 2);
        }

        assert_eq!(session.turn_count(), 11);
        assert_eq!(session.phase(), GamePhase::Finished);
        assert_eq!(session.winner(), Some(Winner::Draw));

        let win = SoundEffect::Win.segments();
        let played = tones(&recorder);
        assert_eq!(&played[played.len() - win.len()..], win);

        // Board is locked and the win sound played once
        session.click_box(30);
        session.advance(SECOND * 30);
        assert!(session.current_question().is_none());
        assert_eq!(recorder.tone_count(), 0);
        assert_eq!(session.turn_count(), 11);
    }

    #[test]
    fn test_player_one_wins() {
        let (mut session, _) = playing_session();

        session.click_box(30);
        session.submit_answer(C30A_ANSWER);
        session.proceed_to_next_turn();
        for _ in 0..9 {
            session.click_box(0);
            session.advance(SECOND * 2);
        }

        assert_eq!(session.winner(), Some(Winner::Player(Player::One)));
        assert_eq!(session.snapshot().display_turn(), 10);
    }

    #[test]
    fn test_rules_from_config() {
        let config = Config {
            max_turns: 4,
            question_seconds: 5,
            message_delay_ms: 500,
            reshuffle_on_skip: true,
            ..Config::default()
        };
        let rules = GameRules::from(&config);
        assert_eq!(rules.max_turns, 4);
        assert_eq!(rules.question_seconds, 5);
        assert_eq!(rules.message_delay, Duration::from_millis(500));
        assert!(rules.reshuffle_on_skip);
    }

    #[test]
    fn test_short_rules() {
        let bank = QuestionBank::embedded().expect("embedded bank");
        let rules = GameRules {
            max_turns: 2,
            question_seconds: 3,
            message_delay: Duration::from_millis(100),
            reshuffle_on_skip: false,
        };
        let (mut session, _) = session_with(bank, rules);
        session.start_game();

        session.click_box(20);
        session.advance(SECOND * 3);
        assert_eq!(session.notice(), Some(Notice::Timeout));
        session.advance(Duration::from_millis(100));
        assert_eq!(session.turn_count(), 2);

        session.click_box(0);
        session.advance(Duration::from_millis(100));
        assert_eq!(session.phase(), GamePhase::Finished);
    }

    #[test]
    fn test_muted_session_plays_nothing() {
        let (mut session, recorder) = playing_session();

        assert!(!session.toggle_sound());
        session.click_box(0);
        assert_eq!(recorder.tone_count(), 0);
        assert!(!session.snapshot().sound_on);
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let (mut session, _) = playing_session();
        session.set_sfx_volume(0.8);
        session.click_box(30);
        session.advance(SECOND * 4);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Playing);
        assert_eq!(snapshot.timer_seconds, Some(11));
        assert_eq!(snapshot.boxes.len(), 5);
        assert_eq!(snapshot.selected_box_points, 30);
        assert!(!snapshot.board_enabled());
        assert!((snapshot.sfx_volume - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_message_follows_translator() {
        let (mut session, _) = playing_session();
        session.click_box(0);
        let english = session.message();

        session.set_translator(Box::new(Translator::new(Language::Vietnamese)));
        assert_ne!(session.message(), english);
        assert!(session.message().is_some_and(|m| m.contains('1')));
    }
}
