//! Wall-clock budget for a single matching attempt
//!
//! The regex engine gives linear-time matching, which is the primary defense
//! against pathological inputs. The deadline is the backstop: the scanner
//! starts one before every matching attempt and discards any result that
//! comes back after the budget has elapsed, so one slow attempt can never
//! stall the whole scan.

use std::time::{Duration, Instant};

/// Budget applied to each matching attempt unless the caller picks another.
pub const DEFAULT_MATCH_DEADLINE: Duration = Duration::from_secs(1);

/// Deadline for one matching attempt.
#[derive(Debug, Clone, Copy)]
pub struct MatchDeadline {
    started: Instant,
    budget: Duration,
}

impl MatchDeadline {
    /// Start the clock for one attempt.
    pub fn start(budget: Duration) -> Self {
        MatchDeadline {
            started: Instant::now(),
            budget,
        }
    }

    /// Check whether the budget has elapsed.
    pub fn expired(&self) -> bool {
        self.started.elapsed() > self.budget
    }

    /// Admit or discard an attempt's result: a match that arrived after the
    /// deadline is treated as no match.
    pub fn admit(&self, length: Option<usize>) -> Option<usize> {
        if self.expired() {
            return None;
        }
        length
    }
}
