// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mediaplan evaluate` - total cost of a fully specified plan.

use mediaplan_budget::BudgetModel;
use mediaplan_config::PlanConfig;
use mediaplan_core::{CostBreakdown, PlanError};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateReport {
    pub line_items: Vec<f64>,
    pub breakdown: CostBreakdown,
}

/// Evaluate `items` against the configured fees and layout.
pub fn evaluate_plan(config: &PlanConfig, items: Vec<f64>) -> Result<EvaluateReport, PlanError> {
    let layout = config.layout.to_layout()?;
    let model = BudgetModel::new(items, config.campaign.fee_structure(), &layout)?;
    Ok(EvaluateReport {
        line_items: model.line_items().to_vec(),
        breakdown: model.breakdown(),
    })
}

pub fn run_evaluate(config: &PlanConfig, items: Vec<f64>, json: bool) -> Result<(), PlanError> {
    let report = evaluate_plan(config, items)?;

    if json {
        crate::output::print_json(&report);
    } else {
        let b = &report.breakdown;
        println!("Total campaign cost: {:.2}", b.total);
        println!("  spend:      {:.2}", b.spend);
        println!("  agency fee: {:.2}", b.agency_fee);
        println!("  tool fee:   {:.2}", b.tool_fee);
        println!("  fixed cost: {:.2}", b.fixed_cost);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_fees(agency: f64, tool: f64, fixed: f64) -> PlanConfig {
        let mut config = PlanConfig::default();
        config.campaign.agency_fee_rate = agency;
        config.campaign.tool_fee_rate = tool;
        config.campaign.fixed_cost = fixed;
        config
    }

    #[test]
    fn evaluates_reference_plan() {
        let config = config_with_fees(0.1, 0.05, 1000.0);
        let report = evaluate_plan(&config, vec![100.0, 200.0, 300.0, 400.0]).unwrap();
        assert!((report.breakdown.total - 2135.0).abs() < 1e-9);
        assert!((report.breakdown.tool_fee - 35.0).abs() < 1e-9);
    }

    #[test]
    fn item_count_must_match_layout() {
        let config = config_with_fees(0.1, 0.05, 0.0);
        let err = evaluate_plan(&config, vec![100.0, 200.0]).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
