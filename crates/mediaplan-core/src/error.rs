// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for mediaplan.

use thiserror::Error;

/// The error type returned by every budget model and solver operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A precondition on an input parameter was violated.
    ///
    /// Raised eagerly at construction time and never retried internally.
    #[error("invalid input: `{parameter}` {constraint}")]
    InvalidInput {
        /// Name of the offending parameter (e.g. `tool_fee_rate`, `line_items[3]`).
        parameter: String,
        /// The constraint that failed, phrased to follow the parameter name.
        constraint: String,
    },

    /// The goal seek exhausted its iteration budget without meeting the tolerance.
    #[error("goal seek did not converge after {iterations} iterations")]
    NonConvergence { iterations: u32 },
}

impl PlanError {
    /// Shorthand for building an [`PlanError::InvalidInput`].
    pub fn invalid(parameter: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self::InvalidInput {
            parameter: parameter.into(),
            constraint: constraint.into(),
        }
    }

    /// Returns `true` for [`PlanError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns `true` for [`PlanError::NonConvergence`].
    pub fn is_non_convergence(&self) -> bool {
        matches!(self, Self::NonConvergence { .. })
    }
}
