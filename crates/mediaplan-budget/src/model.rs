// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Total campaign cost evaluation.
//!
//! Z = X + X * Y1 + S * Y2 + F, where X is the sum of every line item, S the
//! sum of the fee-subset items, Y1 the agency fee rate, Y2 the tool fee rate
//! and F the fixed cost. All arithmetic is plain `f64`; no rounding is applied.

use mediaplan_core::{CostBreakdown, FeeStructure, ItemLayout, LineItemBudgets, PlanError};
use tracing::trace;

/// Validated inputs for one evaluation of the total campaign cost.
#[derive(Debug, Clone)]
pub struct BudgetModel<'a> {
    line_items: LineItemBudgets,
    fees: FeeStructure,
    layout: &'a ItemLayout,
    /// Sum of all line items, computed once at construction.
    total_spend: f64,
}

impl<'a> BudgetModel<'a> {
    /// Validate every input eagerly.
    ///
    /// Fails with [`PlanError::InvalidInput`] if the items are empty, negative
    /// or non-finite, if a fee rate is outside `[0, 1]`, if the fixed cost is
    /// negative, or if `layout` describes a different number of items.
    pub fn new(
        line_items: Vec<f64>,
        fees: FeeStructure,
        layout: &'a ItemLayout,
    ) -> Result<Self, PlanError> {
        let line_items = LineItemBudgets::new(line_items)?;
        fees.validate()?;
        if layout.item_count() != line_items.len() {
            return Err(PlanError::invalid(
                "line_items",
                format!(
                    "must contain {} items for this layout, got {}",
                    layout.item_count(),
                    line_items.len()
                ),
            ));
        }
        let total_spend = line_items.sum();
        Ok(Self {
            line_items,
            fees,
            layout,
            total_spend,
        })
    }

    /// Total campaign cost.
    pub fn evaluate(&self) -> f64 {
        self.breakdown().total
    }

    /// Every intermediate quantity of the evaluation.
    pub fn breakdown(&self) -> CostBreakdown {
        let spend = self.total_spend;
        let agency_fee = spend * self.fees.agency_fee_rate;
        let tool_fee =
            self.layout.fee_subset_sum(self.line_items.as_slice()) * self.fees.tool_fee_rate;
        let total = spend + agency_fee + tool_fee + self.fees.fixed_cost;

        trace!(spend, agency_fee, tool_fee, total, "evaluated campaign total");

        CostBreakdown {
            spend,
            agency_fee,
            tool_fee,
            fixed_cost: self.fees.fixed_cost,
            total,
        }
    }

    pub fn line_items(&self) -> &[f64] {
        self.line_items.as_slice()
    }

    pub fn total_spend(&self) -> f64 {
        self.total_spend
    }
}

/// Evaluate a plan with the conventional layout for its length.
///
/// For four items the tool fee applies to items 0, 1 and 3.
pub fn evaluate_total(
    line_items: &[f64],
    agency_fee_rate: f64,
    tool_fee_rate: f64,
    fixed_cost: f64,
) -> Result<f64, PlanError> {
    if line_items.is_empty() {
        return Err(PlanError::invalid("line_items", "must not be empty"));
    }
    let layout = ItemLayout::conventional(line_items.len());
    let fees = FeeStructure::new(agency_fee_rate, tool_fee_rate, fixed_cost);
    Ok(BudgetModel::new(line_items.to_vec(), fees, &layout)?.evaluate())
}
