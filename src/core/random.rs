//! Random draws used by every generator.
//!
//! All draws go through [`RandomSource`] so that tests can replay a fixed
//! sequence instead of a live RNG. Any `rand::Rng` is a `RandomSource`.

use crate::enemies::types::{Rarity, RarityTable};
use crate::error::{Result, StraysError};
use rand::Rng;
use tracing::warn;

/// Source of uniformly distributed floats in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Largest value a scripted draw may return.
const MAX_DRAW: f64 = 1.0 - f64::EPSILON;

/// Replays a fixed list of draws, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Always returns the same draw.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, MAX_DRAW)
    }
}

/// Inclusive uniform integer draw. Reversed bounds are swapped.
pub fn random_int(min: u32, max: u32, rng: &mut impl RandomSource) -> u32 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = (hi - lo) as f64 + 1.0;
    let offset = (rng.next_f64() * span).floor() as u32;
    lo + offset.min(hi - lo)
}

/// Continuous uniform draw in `[min, max)`.
pub fn uniform(min: f64, max: f64, rng: &mut impl RandomSource) -> f64 {
    min + rng.next_f64() * (max - min)
}

/// Picks one item uniformly at random.
pub fn pick_uniform<'a, T>(items: &'a [T], rng: &mut impl RandomSource) -> Result<&'a T> {
    if items.is_empty() {
        return Err(StraysError::config("cannot pick from an empty table"));
    }
    let index = (rng.next_f64() * items.len() as f64).floor() as usize;
    Ok(&items[index.min(items.len() - 1)])
}

/// Picks one item with probability proportional to its weight.
///
/// `items` and `weights` are parallel slices. If rounding leaves the
/// cumulative sum short of the draw, the last item is returned.
pub fn pick_weighted<'a, T>(
    items: &'a [T],
    weights: &[f64],
    rng: &mut impl RandomSource,
) -> Result<&'a T> {
    if items.len() != weights.len() {
        return Err(StraysError::config(format!(
            "weighted pick has {} items but {} weights",
            items.len(),
            weights.len()
        )));
    }
    if items.is_empty() {
        return Err(StraysError::config("cannot pick from an empty table"));
    }
    if let Some(bad) = weights.iter().find(|w| !(w.is_finite() && **w > 0.0)) {
        return Err(StraysError::config(format!(
            "weights must be positive, got {bad}"
        )));
    }

    let total: f64 = weights.iter().sum();
    let roll = rng.next_f64() * total;

    let mut cumulative = 0.0;
    for (item, weight) in items.iter().zip(weights) {
        cumulative += weight;
        if roll < cumulative {
            return Ok(item);
        }
    }

    warn!(roll, total, "weighted pick fell through, using last item");
    Ok(&items[items.len() - 1])
}

/// Rolls an enemy rarity from the table's cumulative probabilities.
///
/// Rarities are walked Common first, Boss last, regardless of the order
/// in which the table lists them. A draw that lands past the cumulative
/// total (float drift) yields Common.
pub fn roll_rarity(table: &RarityTable, rng: &mut impl RandomSource) -> Result<Rarity> {
    table.validate()?;

    let roll = rng.next_f64();
    let mut cumulative = 0.0;
    for rarity in Rarity::all() {
        cumulative += table.entry(rarity)?.probability;
        if roll < cumulative {
            return Ok(rarity);
        }
    }

    warn!(roll, cumulative, "rarity roll past cumulative total, defaulting to Common");
    Ok(Rarity::Common)
}
