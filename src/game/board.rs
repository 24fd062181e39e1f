/// The five-box board
///
/// Four boxes hide a point value, one hides the lose-turn value. The layout
/// is drawn fresh from the random source on every reshuffle.
use rand::seq::SliceRandom;
use serde::Serialize;

use super::random::RandomSource;

pub const BOX_COUNT: usize = 5;

/// Points carried by the lose-turn box
pub const LOSE_TURN_POINTS: u32 = 0;

/// Values dealt onto the board each turn
pub const BOX_VALUES: [u32; BOX_COUNT] = [10, 20, 30, 50, LOSE_TURN_POINTS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameBox {
    pub display_index: usize,
    pub points: u32,
}

impl GameBox {
    pub fn is_lose_turn(&self) -> bool {
        self.points == LOSE_TURN_POINTS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    boxes: [GameBox; BOX_COUNT],
}

impl Board {
    pub fn shuffled(rng: &mut dyn RandomSource) -> Self {
        let mut values = BOX_VALUES;
        values.shuffle(rng);

        let mut boxes = [GameBox {
            display_index: 0,
            points: LOSE_TURN_POINTS,
        }; BOX_COUNT];
        for (index, (slot, points)) in boxes.iter_mut().zip(values).enumerate() {
            *slot = GameBox {
                display_index: index,
                points,
            };
        }

        Self { boxes }
    }

    pub fn reshuffle(&mut self, rng: &mut dyn RandomSource) {
        *self = Self::shuffled(rng);
    }

    pub fn boxes(&self) -> &[GameBox] {
        &self.boxes
    }

    /// Points behind the box at a display position
    pub fn points_at(&self, display_index: usize) -> Option<u32> {
        self.boxes.get(display_index).map(|b| b.points)
    }

    pub fn lose_turn_index(&self) -> Option<usize> {
        self.boxes
            .iter()
            .position(GameBox::is_lose_turn)
    }

    /// Display position of the box holding `points`
    pub fn index_of(&self, points: u32) -> Option<usize> {
        self.boxes.iter().position(|b| b.points == points)
    }
}
