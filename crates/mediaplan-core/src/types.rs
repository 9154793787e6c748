// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data model shared by the budget model, the solver, and the orchestrator.
//!
//! Every constructor validates eagerly and returns [`PlanError::InvalidInput`]
//! naming the parameter and the failed constraint. Values are immutable once
//! built.

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Rejects NaN and infinities.
pub(crate) fn ensure_finite(parameter: &str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlanError::invalid(parameter, format!("must be finite, got {value}")))
    }
}

fn ensure_rate(parameter: &str, value: f64) -> Result<(), PlanError> {
    ensure_finite(parameter, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(PlanError::invalid(
            parameter,
            format!("must be between 0 and 1, got {value}"),
        ));
    }
    Ok(())
}

fn ensure_positive(parameter: &str, value: f64) -> Result<(), PlanError> {
    ensure_finite(parameter, value)?;
    if value <= 0.0 {
        return Err(PlanError::invalid(
            parameter,
            format!("must be greater than 0, got {value}"),
        ));
    }
    Ok(())
}

/// Ordered, non-empty sequence of non-negative line-item budgets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineItemBudgets(Vec<f64>);

impl LineItemBudgets {
    /// Validate and wrap a list of line-item budgets.
    pub fn new(items: Vec<f64>) -> Result<Self, PlanError> {
        if items.is_empty() {
            return Err(PlanError::invalid("line_items", "must not be empty"));
        }
        for (i, &amount) in items.iter().enumerate() {
            let parameter = format!("line_items[{i}]");
            ensure_finite(&parameter, amount)?;
            if amount < 0.0 {
                return Err(PlanError::invalid(
                    parameter,
                    format!("must be non-negative, got {amount}"),
                ));
            }
        }
        Ok(Self(items))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all items, accumulated in order.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

/// Agency fee, third-party tool fee, and flat cost applied on top of spend.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeeStructure {
    /// Fraction of total line-item spend taken as agency fee, in `[0, 1]`.
    pub agency_fee_rate: f64,
    /// Fraction of the fee-subset spend taken as tool fee, in `[0, 1]`.
    pub tool_fee_rate: f64,
    /// Flat cost independent of spend, `>= 0`.
    pub fixed_cost: f64,
}

impl FeeStructure {
    pub fn new(agency_fee_rate: f64, tool_fee_rate: f64, fixed_cost: f64) -> Self {
        Self {
            agency_fee_rate,
            tool_fee_rate,
            fixed_cost,
        }
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> Result<(), PlanError> {
        ensure_rate("agency_fee_rate", self.agency_fee_rate)?;
        ensure_rate("tool_fee_rate", self.tool_fee_rate)?;
        ensure_finite("fixed_cost", self.fixed_cost)?;
        if self.fixed_cost < 0.0 {
            return Err(PlanError::invalid(
                "fixed_cost",
                format!("must be non-negative, got {}", self.fixed_cost),
            ));
        }
        Ok(())
    }
}

/// Which line item is solved for, and which items carry the tool fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemLayout {
    item_count: usize,
    unknown_index: usize,
    fee_subset_indices: Vec<usize>,
}

impl ItemLayout {
    /// Build a layout, checking every index against `item_count`.
    pub fn new(
        item_count: usize,
        unknown_index: usize,
        fee_subset_indices: Vec<usize>,
    ) -> Result<Self, PlanError> {
        if item_count == 0 {
            return Err(PlanError::invalid("item_count", "must be greater than 0"));
        }
        if unknown_index >= item_count {
            return Err(PlanError::invalid(
                "unknown_index",
                format!("must be less than item_count ({item_count}), got {unknown_index}"),
            ));
        }
        let mut seen = vec![false; item_count];
        for &index in &fee_subset_indices {
            if index >= item_count {
                return Err(PlanError::invalid(
                    "fee_subset_indices",
                    format!("index {index} is out of range for {item_count} line items"),
                ));
            }
            if seen[index] {
                return Err(PlanError::invalid(
                    "fee_subset_indices",
                    format!("index {index} appears more than once"),
                ));
            }
            seen[index] = true;
        }
        Ok(Self {
            item_count,
            unknown_index,
            fee_subset_indices,
        })
    }

    /// Four line items, the third unknown, tool fee on items 0, 1 and 3.
    pub fn standard() -> Self {
        Self::conventional(4)
    }

    /// Unknown at index 2 (or the last index for shorter plans), tool fee on
    /// every other item.
    ///
    /// # Panics
    ///
    /// Panics if `item_count` is zero.
    pub fn conventional(item_count: usize) -> Self {
        assert!(item_count > 0, "a layout needs at least one line item");
        let unknown_index = 2.min(item_count - 1);
        Self {
            item_count,
            unknown_index,
            fee_subset_indices: (0..item_count).filter(|&i| i != unknown_index).collect(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn unknown_index(&self) -> usize {
        self.unknown_index
    }

    pub fn fee_subset_indices(&self) -> &[usize] {
        &self.fee_subset_indices
    }

    /// Number of known items a solver must be given.
    pub fn known_count(&self) -> usize {
        self.item_count - 1
    }

    /// Splice `candidate` into `known` at the unknown position.
    pub fn insert_unknown(&self, known: &[f64], candidate: f64) -> Result<Vec<f64>, PlanError> {
        if known.len() != self.known_count() {
            return Err(PlanError::invalid(
                "known_items",
                format!(
                    "must contain {} items for a {}-item layout, got {}",
                    self.known_count(),
                    self.item_count,
                    known.len()
                ),
            ));
        }
        let mut items = Vec::with_capacity(self.item_count);
        items.extend_from_slice(&known[..self.unknown_index]);
        items.push(candidate);
        items.extend_from_slice(&known[self.unknown_index..]);
        Ok(items)
    }

    /// Sum of the fee-subset items. `items` must have `item_count` entries.
    pub fn fee_subset_sum(&self, items: &[f64]) -> f64 {
        self.fee_subset_indices.iter().map(|&i| items[i]).sum()
    }
}

impl Default for ItemLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parameters governing one goal seek.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchConfig {
    tolerance: f64,
    initial_step: f64,
    max_iterations: u32,
}

impl SearchConfig {
    /// Validate search parameters.
    ///
    /// A zero tolerance is rejected: an exact floating-point match is never
    /// guaranteed, so such a search could only end by exhausting its budget.
    pub fn new(tolerance: f64, initial_step: f64, max_iterations: u32) -> Result<Self, PlanError> {
        ensure_positive("tolerance", tolerance)?;
        ensure_positive("initial_step", initial_step)?;
        if max_iterations == 0 {
            return Err(PlanError::invalid("max_iterations", "must be greater than 0"));
        }
        Ok(Self {
            tolerance,
            initial_step,
            max_iterations,
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// A converged goal seek.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    /// Budget found for the unknown line item.
    pub value: f64,
    /// Adjustments made before `value` met the tolerance.
    pub iterations: u32,
}

/// Intermediate quantities of one total-cost evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    /// Sum of all line items.
    pub spend: f64,
    /// `spend * agency_fee_rate`.
    pub agency_fee: f64,
    /// Fee-subset spend times `tool_fee_rate`.
    pub tool_fee: f64,
    pub fixed_cost: f64,
    /// `spend + agency_fee + tool_fee + fixed_cost`.
    pub total: f64,
}
