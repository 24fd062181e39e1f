/// Injectable randomness for box shuffling and question selection
///
/// The session only needs a [`RngCore`]; shuffling and picking go through
/// `rand::seq::SliceRandom`. Tests swap in a [`ScriptedSource`] to fix the
/// outcome of each draw.
use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

pub trait RandomSource: RngCore {}

/// Randomness backed by a `rand` generator
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> RngCore for RngSource<R> {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.rng.try_fill_bytes(dest)
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {}

/// Replays a fixed list of 32-bit words, cycling when exhausted.
///
/// `rand` turns one word into an index below `bound` by taking the high half
/// of `word * bound`, so [`ScriptedSource::word_for`] can aim a draw at a
/// chosen index. A zero word always lands on index 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    words: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(words: Vec<u32>) -> Self {
        Self { words, cursor: 0 }
    }

    /// Every draw picks index 0
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// One draw per `(index, bound)` pair, in order
    pub fn from_picks(picks: &[(usize, usize)]) -> Self {
        Self::new(
            picks
                .iter()
                .map(|&(index, bound)| Self::word_for(index, bound))
                .collect(),
        )
    }

    /// Smallest word that `gen_range(0..bound)` maps to `index`
    pub fn word_for(index: usize, bound: usize) -> u32 {
        let bound = bound.max(1) as u64;
        let index = (index as u64).min(bound - 1);
        ((index << 32).div_ceil(bound)) as u32
    }
}

impl RngCore for ScriptedSource {
    fn next_u32(&mut self) -> u32 {
        if self.words.is_empty() {
            return 0;
        }
        let word = self.words[self.cursor % self.words.len()];
        self.cursor += 1;
        word
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_u32());
        let high = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl RandomSource for ScriptedSource {}
