// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search strategy trait for the goal seek.

use crate::types::SearchConfig;

/// Decides the next candidate for the unknown line item.
///
/// The solver owns the control loop (evaluation, tolerance check, iteration
/// cap); a strategy only proposes where to look next. A fresh instance is
/// created from the [`SearchConfig`] for every search, so implementations may
/// keep mutable state without it leaking between searches.
pub trait SearchStrategy {
    /// Build the strategy state for one search.
    fn from_config(config: &SearchConfig) -> Self
    where
        Self: Sized;

    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// The first candidate evaluated.
    fn initial_candidate(&self) -> f64 {
        0.0
    }

    /// Current adjustment magnitude, if the strategy has one.
    fn step(&self) -> Option<f64> {
        None
    }

    /// Propose the next candidate after `candidate` produced `computed`,
    /// which missed `target` by more than the tolerance.
    fn next_candidate(&mut self, candidate: f64, computed: f64, target: f64) -> f64;
}
