use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

use crate::error::{RngError, RngResult};
use crate::rng::LogSquare;

/// A recorded draw series.
///
/// Carries the reseed timestamp instead of any generator internals, which is
/// enough to re-derive every value deterministically.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesLog {
    pub millis: u64,
    pub range: i32,
    pub values: Vec<i32>,
}

impl SeriesLog {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("value {index} mismatch: replayed {got}, logged {want}")]
    ValueMismatch { index: usize, got: i32, want: i32 },
    #[error(transparent)]
    Rng(#[from] RngError),
}

/// Reseeds a fresh generator from the wall clock and records `len` draws
/// in `[0, range)`.
pub fn record_series(len: usize, range: i32) -> RngResult<SeriesLog> {
    let mut rng = LogSquare::new();
    let millis = rng.randomize()?;
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.next_i32(range)?);
    }
    Ok(SeriesLog { millis, range, values })
}

/// Re-derives a recorded series from its timestamp and compares it
/// value-for-value.
pub fn replay_series(log: &SeriesLog) -> Result<(), ReplayError> {
    let mut rng = LogSquare::new();
    rng.randomize_at(log.millis)?;
    for (index, &want) in log.values.iter().enumerate() {
        let got = rng.next_i32(log.range)?;
        if got != want {
            return Err(ReplayError::ValueMismatch { index, got, want });
        }
    }
    Ok(())
}

pub fn load_log(path: &str) -> Option<SeriesLog> {
    if let Ok(content) = fs::read_to_string(path) {
        SeriesLog::from_json(&content).ok()
    } else {
        None
    }
}

/// Occurrence count of each value in `[0, range)`; draws outside the range
/// (possible for non-positive ranges) are ignored.
pub fn frequency(values: &[i32], range: i32) -> Vec<u32> {
    let mut freq = vec![0u32; range.max(0) as usize];
    for &v in values {
        if v < 0 {
            continue;
        }
        if let Some(slot) = freq.get_mut(v as usize) {
            *slot += 1;
        }
    }
    freq
}
