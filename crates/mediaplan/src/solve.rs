// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mediaplan solve` - gather inputs, run the goal seek, report the result.

use mediaplan_budget::BudgetSolver;
use mediaplan_config::PlanConfig;
use mediaplan_core::{
    CostBreakdown, FeeStructure, InputProvider, ItemLayout, PlanError, SearchConfig, Solution,
};
use serde::Serialize;

/// Inputs read from the resolved configuration (files, env, and flags).
pub struct ConfigInputProvider<'a> {
    config: &'a PlanConfig,
}

impl<'a> ConfigInputProvider<'a> {
    pub fn new(config: &'a PlanConfig) -> Self {
        Self { config }
    }
}

impl InputProvider for ConfigInputProvider<'_> {
    fn target_total(&mut self) -> Result<f64, PlanError> {
        self.config.campaign.target_total.ok_or_else(|| {
            PlanError::invalid(
                "target_total",
                "is required (set campaign.target_total or pass --target)",
            )
        })
    }

    fn fee_structure(&mut self) -> Result<FeeStructure, PlanError> {
        let fees = self.config.campaign.fee_structure();
        fees.validate()?;
        Ok(fees)
    }

    fn known_items(&mut self, count: usize) -> Result<Vec<f64>, PlanError> {
        let items = &self.config.campaign.known_items;
        if count > 0 && items.is_empty() {
            return Err(PlanError::invalid(
                "known_items",
                "is required (set campaign.known_items or pass --known)",
            ));
        }
        if items.len() != count {
            return Err(PlanError::invalid(
                "known_items",
                format!("must contain {count} items, got {}", items.len()),
            ));
        }
        Ok(items.clone())
    }

    fn search_config(&mut self) -> Result<SearchConfig, PlanError> {
        self.config.search.to_search_config()
    }
}

/// Everything `solve` reports.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub solution: Solution,
    pub target_total: f64,
    /// Complete plan with the solved value in place.
    pub line_items: Vec<f64>,
    pub breakdown: CostBreakdown,
}

/// Pull inputs from `provider` and run one goal seek.
pub fn solve_plan(
    provider: &mut dyn InputProvider,
    layout: ItemLayout,
) -> Result<SolveReport, PlanError> {
    let target_total = provider.target_total()?;
    let fees = provider.fee_structure()?;
    let known = provider.known_items(layout.known_count())?;
    let search = provider.search_config()?;

    let solver = BudgetSolver::with_layout(target_total, known, fees, layout, search)?;
    let solution = solver.search()?;
    let model = solver.model_for(solution.value)?;

    Ok(SolveReport {
        solution,
        target_total,
        line_items: model.line_items().to_vec(),
        breakdown: model.breakdown(),
    })
}

/// Entry point for the `solve` subcommand.
pub fn run_solve(config: &PlanConfig, json: bool) -> Result<(), PlanError> {
    let layout = config.layout.to_layout()?;
    let unknown = layout.unknown_index();
    let mut provider = ConfigInputProvider::new(config);
    let report = solve_plan(&mut provider, layout)?;

    if json {
        crate::output::print_json(&report);
    } else {
        print!("{}", render_text(&report, unknown));
    }
    Ok(())
}

fn render_text(report: &SolveReport, unknown_index: usize) -> String {
    let mut text = format!(
        "Maximum budget for line item {}: {:.2}\n",
        unknown_index + 1,
        report.solution.value
    );
    text.push_str(&format!("  iterations: {}\n", report.solution.iterations));
    text.push_str(&format!(
        "  total cost: {:.2} (target {:.2})\n",
        report.breakdown.total, report.target_total
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedInputs {
        target: Option<f64>,
        known: Vec<f64>,
        fees: FeeStructure,
        step: f64,
        max_iterations: u32,
    }

    impl FixedInputs {
        fn scenario_c() -> Self {
            Self {
                target: Some(2135.0),
                known: vec![100.0, 200.0, 400.0],
                fees: FeeStructure::new(0.1, 0.05, 1000.0),
                step: 10.0,
                max_iterations: 100,
            }
        }
    }

    impl InputProvider for FixedInputs {
        fn target_total(&mut self) -> Result<f64, PlanError> {
            self.target.ok_or_else(|| PlanError::invalid("target_total", "is required"))
        }

        fn fee_structure(&mut self) -> Result<FeeStructure, PlanError> {
            Ok(self.fees)
        }

        fn known_items(&mut self, _count: usize) -> Result<Vec<f64>, PlanError> {
            Ok(self.known.clone())
        }

        fn search_config(&mut self) -> Result<SearchConfig, PlanError> {
            SearchConfig::new(0.01, self.step, self.max_iterations)
        }
    }

    #[test]
    fn solves_reference_campaign() {
        let report = solve_plan(&mut FixedInputs::scenario_c(), ItemLayout::standard()).unwrap();
        assert!((report.solution.value - 300.0).abs() < 1e-9);
        assert_eq!(report.solution.iterations, 30);
        assert_eq!(report.line_items.len(), 4);
        assert!((report.line_items[2] - 300.0).abs() < 1e-9);
        assert!((report.breakdown.total - 2135.0).abs() <= 0.01);
    }

    #[test]
    fn missing_target_is_invalid_input() {
        let mut inputs = FixedInputs::scenario_c();
        inputs.target = None;
        let err = solve_plan(&mut inputs, ItemLayout::standard()).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("target_total"));
    }

    #[test]
    fn exhausted_budget_is_non_convergence() {
        let mut inputs = FixedInputs::scenario_c();
        inputs.target = Some(10_000.0);
        inputs.step = 1000.0;
        inputs.max_iterations = 10;
        let err = solve_plan(&mut inputs, ItemLayout::standard()).unwrap_err();
        assert_eq!(err, PlanError::NonConvergence { iterations: 10 });
    }

    #[test]
    fn config_provider_reads_resolved_values() {
        let config = mediaplan_config::load_and_validate_str(
            r#"
[campaign]
target_total = 2135.0
known_items = [100.0, 200.0, 400.0]
agency_fee_rate = 0.1
tool_fee_rate = 0.05
fixed_cost = 1000.0
"#,
        )
        .expect("valid config");
        let layout = config.layout.to_layout().unwrap();
        let report = solve_plan(&mut ConfigInputProvider::new(&config), layout).unwrap();
        assert!((report.solution.value - 300.0).abs() < 1e-9);
    }

    #[test]
    fn config_provider_requires_known_items() {
        let mut config = PlanConfig::default();
        config.campaign.target_total = Some(100.0);
        let mut provider = ConfigInputProvider::new(&config);
        let err = provider.known_items(3).unwrap_err();
        assert!(err.to_string().contains("known_items"));
    }

    #[test]
    fn single_item_layout_needs_no_known_items() {
        let config = mediaplan_config::load_and_validate_str(
            r#"
[campaign]
target_total = 1330.0
agency_fee_rate = 0.1
fixed_cost = 1000.0

[layout]
item_count = 1
unknown_index = 0
fee_subset_indices = []
"#,
        )
        .expect("valid config");
        let layout = config.layout.to_layout().unwrap();
        let report = solve_plan(&mut ConfigInputProvider::new(&config), layout).unwrap();
        assert!((report.solution.value - 300.0).abs() < 1e-9);
        assert_eq!(report.line_items.len(), 1);
    }

    #[test]
    fn config_provider_rejects_count_mismatch() {
        let mut config = PlanConfig::default();
        config.campaign.known_items = vec![1.0, 2.0];
        let mut provider = ConfigInputProvider::new(&config);
        assert!(provider.known_items(3).unwrap_err().is_invalid_input());
    }

    #[test]
    fn text_output_numbers_items_from_one() {
        let report = solve_plan(&mut FixedInputs::scenario_c(), ItemLayout::standard()).unwrap();
        let text = render_text(&report, 2);
        assert!(text.starts_with("Maximum budget for line item 3: 300.00\n"), "{text}");
        assert!(text.contains("iterations: 30"));
    }
}
