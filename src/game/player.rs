/// Players, scores and the final result
use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Winner {
    Player(Player),
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player(player) => write!(f, "player {}", player),
            Winner::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scores {
    one: u32,
    two: u32,
}

impl Scores {
    pub fn new(one: u32, two: u32) -> Self {
        Self { one, two }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }

    pub fn add(&mut self, player: Player, points: u32) {
        match player {
            Player::One => self.one += points,
            Player::Two => self.two += points,
        }
    }

    /// Strictly higher score wins, equal scores draw
    pub fn winner(&self) -> Winner {
        match self.one.cmp(&self.two) {
            std::cmp::Ordering::Greater => Winner::Player(Player::One),
            std::cmp::Ordering::Less => Winner::Player(Player::Two),
            std::cmp::Ordering::Equal => Winner::Draw,
        }
    }
}
