// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input provider trait for the orchestrator.

use crate::error::PlanError;
use crate::types::{FeeStructure, SearchConfig};

/// Supplies the scalars a goal seek needs.
///
/// Implementations decide where values come from (configuration files,
/// command-line flags, a test fixture) and return them already validated.
/// A missing value is reported as [`PlanError::InvalidInput`] naming it.
pub trait InputProvider {
    /// The fixed total campaign cost to hit.
    fn target_total(&mut self) -> Result<f64, PlanError>;

    /// Agency fee rate, tool fee rate, and fixed cost.
    fn fee_structure(&mut self) -> Result<FeeStructure, PlanError>;

    /// Budgets of every line item except the unknown one, in layout order.
    fn known_items(&mut self, count: usize) -> Result<Vec<f64>, PlanError>;

    /// Tolerance, initial step, and iteration cap.
    fn search_config(&mut self) -> Result<SearchConfig, PlanError>;
}
