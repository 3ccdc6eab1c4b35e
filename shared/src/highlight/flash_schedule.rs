use std::{collections::VecDeque, time::{Duration, Instant}};

use crate::registry::IngredientKey;

/// Tracks the short confirmation flashes started when an anchor is
/// registered. Callers may pass any `now`, so deadlines are not assumed to
/// arrive in order.
pub struct FlashSchedule {
    flash_duration: Duration,
    deadlines: VecDeque<(Instant, IngredientKey)>,
}

impl FlashSchedule {
    pub fn new(flash_duration: Duration) -> Self {
        Self {
            flash_duration,
            deadlines: VecDeque::new(),
        }
    }

    pub fn start(&mut self, key: IngredientKey, now: &Instant) {
        self.cancel(&key);
        self.deadlines.push_back((*now + self.flash_duration, key));
    }

    /// Returns true if a flash was pending for this key
    pub fn cancel(&mut self, key: &IngredientKey) -> bool {
        let before = self.deadlines.len();
        self.deadlines.retain(|(_, pending)| pending != key);
        before != self.deadlines.len()
    }

    pub fn cancel_all(&mut self) {
        self.deadlines.clear();
    }

    pub fn is_flashing(&self, key: &IngredientKey) -> bool {
        self.deadlines.iter().any(|(_, pending)| pending == key)
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Removes and returns every flash whose deadline has been reached,
    /// earliest deadline first
    pub fn take_expired(&mut self, now: &Instant) -> Vec<IngredientKey> {
        let mut expired: Vec<(Instant, IngredientKey)> = Vec::new();
        self.deadlines.retain(|(deadline, key)| {
            if deadline <= now {
                expired.push((*deadline, *key));
                false
            } else {
                true
            }
        });
        expired.sort_by_key(|(deadline, _)| *deadline);
        expired.into_iter().map(|(_, key)| key).collect()
    }
}
