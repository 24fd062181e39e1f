/// Plain-text rendering of a game snapshot
use std::io::{self, Write};

use crate::game::{GamePhase, GameSnapshot, Player, Winner};
use crate::i18n::Translate;
use crate::questions::{Topic, TopicFilter};

/// Something that can show the game to the players
pub trait Presenter {
    fn render(&mut self, snapshot: &GameSnapshot, translator: &dyn Translate) -> io::Result<()>;

    /// Show a one-off line such as help text or a command error
    fn notify(&mut self, text: &str) -> io::Result<()>;
}

pub struct ConsoleView<W: Write> {
    out: W,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn topics(&mut self, selected: TopicFilter, t: &dyn Translate) -> io::Result<()> {
        let filters = std::iter::once(TopicFilter::All).chain(Topic::ALL.into_iter().map(TopicFilter::Only));
        let labels: Vec<String> = filters
            .map(|filter| {
                let mark = if filter == selected { '*' } else { ' ' };
                format!("[{}] {} ({})", mark, t.t(filter.label_key()), filter)
            })
            .collect();
        writeln!(self.out, "{}: {}", t.t("game_topic_select"), labels.join("  "))
    }

    /// Rules panel shown before the first turn
    fn rules(&mut self, s: &GameSnapshot, t: &dyn Translate) -> io::Result<()> {
        let max = [("max", s.max_turns.to_string())];
        let seconds = [("seconds", s.question_seconds.to_string())];
        let entries = [
            (t.t("game_info_players"), t.t("game_info_players_desc")),
            (
                t.t_with("game_info_turns", &max),
                t.t_with("game_info_turns_desc", &max),
            ),
            (
                t.t_with("game_info_timer", &seconds),
                t.t("game_info_timer_desc"),
            ),
            (t.t("game_info_goal"), t.t("game_info_goal_desc")),
        ];

        writeln!(self.out, "-- {} --", t.t("game_info_title"))?;
        for (title, description) in entries {
            writeln!(self.out, "  {}: {}", title, description)?;
        }
        Ok(())
    }

    fn scoreboard(&mut self, s: &GameSnapshot, t: &dyn Translate) -> io::Result<()> {
        let player = t.t("game_player");
        for p in [Player::One, Player::Two] {
            let marker = if p == s.current_player && s.winner.is_none() { '>' } else { ' ' };
            write!(self.out, "{} {} {}: {:<5}", marker, player, p, s.scores.get(p))?;
        }
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            t.t_with(
                "game_turn_counter",
                &[
                    ("current", s.display_turn().to_string()),
                    ("max", s.max_turns.to_string()),
                ],
            )
        )
    }

    fn board(&mut self, s: &GameSnapshot, t: &dyn Translate) -> io::Result<()> {
        let label = t.t("game_box");
        let cells: Vec<String> = s
            .boxes
            .iter()
            .map(|b| format!("[{} {}]", label, b.display_index + 1))
            .collect();
        let suffix = if s.board_enabled() { "" } else { " (-)" };
        writeln!(self.out, "{}{}", cells.join(" "), suffix)
    }

    fn question(&mut self, s: &GameSnapshot, t: &dyn Translate) -> io::Result<()> {
        let Some(question) = s.current_question.as_ref() else {
            return Ok(());
        };
        let points = s.selected_box_points.to_string();

        writeln!(self.out)?;
        writeln!(
            self.out,
            "== {} ==",
            t.t_with("game_question_title", &[("points", points.clone())])
        )?;
        if let (Some(seconds), None) = (s.timer_seconds, s.answer_result.as_ref()) {
            writeln!(
                self.out,
                "{}",
                t.t_with("game_timer", &[("seconds", seconds.to_string())])
            )?;
        }
        writeln!(self.out, "{}", question.question)?;

        match s.answer_result.as_ref() {
            None => {
                for (i, option) in question.options.iter().enumerate() {
                    writeln!(self.out, "  {}. {}", i + 1, option)?;
                }
            }
            Some(result) => {
                if result.is_correct {
                    writeln!(
                        self.out,
                        "{} (+{} {})",
                        t.t("game_correct_answer_header"),
                        points,
                        t.t("game_points")
                    )?;
                } else {
                    writeln!(
                        self.out,
                        "{} (+0 {})",
                        t.t("game_wrong_answer_header"),
                        t.t("game_points")
                    )?;
                    writeln!(self.out, "{} {}", t.t("game_correct_answer_is"), question.correct_answer)?;
                }
                writeln!(self.out, "{} {}", t.t("quiz_explanation"), result.explanation)?;
                writeln!(self.out, "[{}: next]", t.t("game_continue_button"))?;
            }
        }
        Ok(())
    }

    fn game_over(&mut self, s: &GameSnapshot, winner: Winner, t: &dyn Translate) -> io::Result<()> {
        let (title, subtitle) = match winner {
            Winner::Player(p) => (
                t.t_with("game_winner_congrats", &[("winner", p.to_string())]),
                t.t("game_winner_subtitle"),
            ),
            Winner::Draw => (t.t("game_draw_title"), t.t("game_draw_subtitle")),
        };
        let player = t.t("game_player");

        writeln!(self.out)?;
        writeln!(self.out, "== {} ==", t.t("game_over_title"))?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", subtitle)?;
        writeln!(
            self.out,
            "{}: {} 1: {} - {} 2: {}",
            t.t("game_final_score"),
            player,
            s.scores.get(Player::One),
            player,
            s.scores.get(Player::Two)
        )?;
        writeln!(self.out, "[{}: start]", t.t("game_play_again"))
    }
}

impl<W: Write> Presenter for ConsoleView<W> {
    fn render(&mut self, s: &GameSnapshot, t: &dyn Translate) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "=== {} ===", t.t("game_title"))?;

        match s.phase {
            GamePhase::Idle => {
                writeln!(self.out, "{}", t.t("game_start_heading"))?;
                writeln!(self.out, "{}", t.t("game_start_title"))?;
                self.rules(s, t)?;
                self.topics(s.selected_topic, t)?;
                writeln!(self.out, "[{}: start]", t.t("game_start_button"))?;
            }
            GamePhase::Playing | GamePhase::Finished => {
                self.topics(s.selected_topic, t)?;
                self.scoreboard(s, t)?;
                self.board(s, t)?;
                self.question(s, t)?;
                if let (Some(message), None) = (s.message.as_ref(), s.winner) {
                    writeln!(self.out)?;
                    writeln!(self.out, "*** {} ***", message)?;
                }
                if let Some(winner) = s.winner {
                    self.game_over(s, winner, t)?;
                }
            }
        }

        let sound = if s.sound_on { "game_sound_on" } else { "game_sound_off" };
        writeln!(
            self.out,
            "{} | {} {:.0}% | {} {:.0}%",
            t.t(sound),
            t.t("game_sfx_volume"),
            s.sfx_volume * 100.0,
            t.t("game_music_volume"),
            s.music_volume * 100.0
        )?;
        self.out.flush()
    }

    fn notify(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}
