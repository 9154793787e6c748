// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The damped step search rule.
//!
//! Starting from zero, the candidate moves up by `step` while the computed
//! total is below target. When the total lands above target the candidate
//! moves down by `step` and only then is the step divided by ten. Undershoots
//! never shrink the step.

use mediaplan_core::{SearchConfig, SearchStrategy};

/// Damping factor applied to the step after a downward correction.
const STEP_DIVISOR: f64 = 10.0;

/// Asymmetric step search: grow at constant step, shrink only on overshoot.
#[derive(Debug, Clone, PartialEq)]
pub struct DampedStep {
    step: f64,
}

impl DampedStep {
    pub fn new(initial_step: f64) -> Self {
        Self { step: initial_step }
    }
}

impl SearchStrategy for DampedStep {
    fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.initial_step())
    }

    fn name(&self) -> &'static str {
        "damped-step"
    }

    fn step(&self) -> Option<f64> {
        Some(self.step)
    }

    fn next_candidate(&mut self, candidate: f64, computed: f64, target: f64) -> f64 {
        if computed < target {
            candidate + self.step
        } else {
            let next = candidate - self.step;
            self.step /= STEP_DIVISOR;
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undershoot_keeps_step() {
        let mut s = DampedStep::new(10.0);
        assert_eq!(s.next_candidate(0.0, 50.0, 100.0), 10.0);
        assert_eq!(s.next_candidate(10.0, 60.0, 100.0), 20.0);
        assert_eq!(s.step(), Some(10.0));
    }

    #[test]
    fn overshoot_steps_back_then_shrinks() {
        let mut s = DampedStep::new(10.0);
        assert_eq!(s.next_candidate(30.0, 120.0, 100.0), 20.0);
        assert_eq!(s.step(), Some(1.0));
        assert_eq!(s.next_candidate(20.0, 90.0, 100.0), 21.0);
    }

    #[test]
    fn equal_total_counts_as_overshoot() {
        // Only reached when the tolerance check already failed.
        let mut s = DampedStep::new(5.0);
        assert_eq!(s.next_candidate(5.0, 100.0, 100.0), 0.0);
        assert_eq!(s.step(), Some(0.5));
    }

    #[test]
    fn may_go_negative() {
        let mut s = DampedStep::new(10.0);
        assert_eq!(s.next_candidate(0.0, 200.0, 100.0), -10.0);
    }

    #[test]
    fn from_config_uses_initial_step() {
        let config = SearchConfig::new(0.01, 1000.0, 10).unwrap();
        let s = DampedStep::from_config(&config);
        assert_eq!(s.initial_candidate(), 0.0);
        assert_eq!(s.step(), Some(1000.0));
        assert_eq!(s.name(), "damped-step");
    }
}
