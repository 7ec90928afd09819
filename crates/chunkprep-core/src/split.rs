//! Seeded shuffling and the train/validation split.

use oorandom::Rand64;
use tracing::debug;

use crate::error::{ChunkprepError, Result};

/// Seed used for the train/validation shuffle.
pub const DEFAULT_SEED: u64 = 12345;

/// Share of the training sentences kept for training; the rest goes to validation.
pub const DEFAULT_TRAIN_RATIO: f64 = 0.9;

/// Parameters of the train/validation split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    pub seed: u64,
    pub train_ratio: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            train_ratio: DEFAULT_TRAIN_RATIO,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.train_ratio.is_finite() || !(0.0..=1.0).contains(&self.train_ratio) {
            return Err(ChunkprepError::InvalidTrainRatio(self.train_ratio));
        }
        Ok(())
    }

    /// Number of items that go to the training side, truncated toward zero.
    pub fn train_bound(&self, len: usize) -> usize {
        ((len as f64 * self.train_ratio) as usize).min(len)
    }
}

/// Fisher-Yates shuffle driven by the given generator.
pub fn shuffle<T>(items: &mut [T], rng: &mut Rand64) {
    for i in (1..items.len()).rev() {
        let j = rng.rand_range(0..(i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

/// Shuffle `items` with a generator seeded from `config` and split them.
///
/// The generator lives only for this call, so repeated calls with the same
/// input and seed return identical halves.
pub fn shuffle_and_split<T>(mut items: Vec<T>, config: &SplitConfig) -> (Vec<T>, Vec<T>) {
    let mut rng = Rand64::new(u128::from(config.seed));
    shuffle(&mut items, &mut rng);

    let bound = config.train_bound(items.len());
    let val = items.split_off(bound);

    debug!(
        seed = config.seed,
        train = items.len(),
        val = val.len(),
        "split training sentences"
    );

    (items, val)
}
