//! Best score tracking
//!
//! A single scalar that only ever goes up during a process lifetime.
//! Stored values are plain JSON numbers; anything else reads as absent.

use serde::{Deserialize, Serialize};

/// Highest score seen so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestScore {
    value: u32,
}

impl BestScore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Seed from a stored value; absent means zero
    pub fn from_stored(stored: Option<u32>) -> Self {
        Self::new(stored.unwrap_or(0))
    }

    pub fn get(&self) -> u32 {
        self.value
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            true
        } else {
            false
        }
    }

    /// Parse a stored best score
    ///
    /// Accepts a non-negative integral number, optionally written as a float
    /// (`"12"`, `"12.0"`). Negative, fractional, non-numeric or oversized
    /// values are rejected.
    pub fn parse(raw: &str) -> Option<u32> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(value) = serde_json::from_str::<u32>(raw) {
            return Some(value);
        }
        let value = serde_json::from_str::<f64>(raw).ok()?;
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Some(value as u32)
        } else {
            None
        }
    }

    /// Serialized form written to storage
    pub fn encode(&self) -> String {
        self.value.to_string()
    }
}
