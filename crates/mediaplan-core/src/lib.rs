// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for mediaplan.
//!
//! This crate provides the data model, the error type, and the capability
//! traits shared by the budget model, the goal-seek solver, and the CLI.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PlanError;
pub use traits::{InputProvider, SearchStrategy};
pub use types::{CostBreakdown, FeeStructure, ItemLayout, LineItemBudgets, SearchConfig, Solution};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_error_has_both_variants() {
        let invalid = PlanError::invalid("tolerance", "must be greater than 0, got 0");
        assert!(invalid.is_invalid_input());
        assert!(!invalid.is_non_convergence());

        let stuck = PlanError::NonConvergence { iterations: 10 };
        assert!(stuck.is_non_convergence());
        assert!(!stuck.is_invalid_input());
    }

    #[test]
    fn plan_error_messages_name_the_parameter() {
        let err = PlanError::invalid("tool_fee_rate", "must be between 0 and 1, got 2");
        assert_eq!(
            err.to_string(),
            "invalid input: `tool_fee_rate` must be between 0 and 1, got 2"
        );

        let err = PlanError::NonConvergence { iterations: 100 };
        assert_eq!(
            err.to_string(),
            "goal seek did not converge after 100 iterations"
        );
    }

    #[test]
    fn all_traits_are_exported() {
        fn _assert_strategy<T: SearchStrategy>() {}
        fn _assert_provider<T: InputProvider + ?Sized>() {}
        _assert_provider::<dyn InputProvider>();
    }
}
