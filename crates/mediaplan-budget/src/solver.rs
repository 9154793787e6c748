// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Goal seek for the one unknown line-item budget.
//!
//! The solver inverts [`BudgetModel`]: given the known items, the fees and a
//! target total, it searches for the unknown item's budget. Each iteration
//! rebuilds the model with the current candidate, so a negative candidate is
//! rejected by the model and surfaces as [`PlanError::InvalidInput`].
//!
//! The loop is bounded by `max_iterations` alone. Success is decided purely by
//! `|computed - target| <= tolerance`, independent of the step size.

use std::marker::PhantomData;

use mediaplan_core::{FeeStructure, ItemLayout, PlanError, SearchConfig, SearchStrategy, Solution};
use tracing::{debug, info, warn};

use crate::model::BudgetModel;
use crate::strategy::DampedStep;

/// Bounded search for the unknown line item.
///
/// Holds only immutable inputs. All search state lives inside
/// [`BudgetSolver::search`], so repeated calls give identical results.
#[derive(Debug, Clone)]
pub struct BudgetSolver<S = DampedStep> {
    target: f64,
    known_items: Vec<f64>,
    fees: FeeStructure,
    layout: ItemLayout,
    config: SearchConfig,
    strategy: PhantomData<S>,
}

impl BudgetSolver<DampedStep> {
    /// Solver over the standard four-item layout (unknown at index 2).
    pub fn new(
        target: f64,
        known_items: Vec<f64>,
        fees: FeeStructure,
        config: SearchConfig,
    ) -> Result<Self, PlanError> {
        Self::with_layout(target, known_items, fees, ItemLayout::standard(), config)
    }

    /// Solver over an explicit layout.
    ///
    /// Checks the target and the number of known items. Fee rates and item
    /// values are validated by the model on every evaluation.
    pub fn with_layout(
        target: f64,
        known_items: Vec<f64>,
        fees: FeeStructure,
        layout: ItemLayout,
        config: SearchConfig,
    ) -> Result<Self, PlanError> {
        if !target.is_finite() {
            return Err(PlanError::invalid(
                "target",
                format!("must be finite, got {target}"),
            ));
        }
        if known_items.len() != layout.known_count() {
            return Err(PlanError::invalid(
                "known_items",
                format!(
                    "must contain {} items for a {}-item layout, got {}",
                    layout.known_count(),
                    layout.item_count(),
                    known_items.len()
                ),
            ));
        }
        Ok(Self {
            target,
            known_items,
            fees,
            layout,
            config,
            strategy: PhantomData,
        })
    }
}

impl<S: SearchStrategy> BudgetSolver<S> {
    /// Swap the search rule, keeping every other input.
    pub fn using<T: SearchStrategy>(self) -> BudgetSolver<T> {
        BudgetSolver {
            target: self.target,
            known_items: self.known_items,
            fees: self.fees,
            layout: self.layout,
            config: self.config,
            strategy: PhantomData,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn layout(&self) -> &ItemLayout {
        &self.layout
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Build the model for a given candidate of the unknown item.
    pub fn model_for(&self, candidate: f64) -> Result<BudgetModel<'_>, PlanError> {
        let items = self.layout.insert_unknown(&self.known_items, candidate)?;
        BudgetModel::new(items, self.fees, &self.layout)
    }

    /// Run the goal seek.
    ///
    /// Returns the first candidate whose total is within tolerance of the
    /// target, [`PlanError::NonConvergence`] once `max_iterations` candidates
    /// have missed, or any [`PlanError::InvalidInput`] raised by the model.
    pub fn search(&self) -> Result<Solution, PlanError> {
        let tolerance = self.config.tolerance();
        let max_iterations = self.config.max_iterations();
        let mut strategy = S::from_config(&self.config);
        let mut candidate = strategy.initial_candidate();
        let mut iterations: u32 = 0;

        info!(
            target_total = self.target,
            strategy = strategy.name(),
            tolerance,
            max_iterations,
            "goal seek started"
        );

        while iterations < max_iterations {
            let computed = self.model_for(candidate)?.evaluate();
            if !computed.is_finite() {
                warn!(iterations, candidate, "campaign total overflowed during goal seek");
                return Err(PlanError::NonConvergence { iterations });
            }

            debug!(
                iteration = iterations,
                candidate,
                computed,
                step = ?strategy.step(),
                "goal seek iteration"
            );

            if (computed - self.target).abs() <= tolerance {
                info!(value = candidate, iterations, "goal seek converged");
                return Ok(Solution {
                    value: candidate,
                    iterations,
                });
            }

            candidate = strategy.next_candidate(candidate, computed, self.target);
            iterations += 1;
        }

        warn!(
            max_iterations,
            last_candidate = candidate,
            "goal seek did not converge"
        );
        Err(PlanError::NonConvergence {
            iterations: max_iterations,
        })
    }
}

/// One-shot goal seek over the standard layout from raw scalars.
#[allow(clippy::too_many_arguments)]
pub fn solve_unknown(
    target: f64,
    known_items: &[f64],
    agency_fee_rate: f64,
    tool_fee_rate: f64,
    fixed_cost: f64,
    tolerance: f64,
    initial_step: f64,
    max_iterations: u32,
) -> Result<f64, PlanError> {
    let config = SearchConfig::new(tolerance, initial_step, max_iterations)?;
    let fees = FeeStructure::new(agency_fee_rate, tool_fee_rate, fixed_cost);
    let solver = BudgetSolver::new(target, known_items.to_vec(), fees, config)?;
    Ok(solver.search()?.value)
}
