// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for mediaplan.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported instead of silently ignored.

use mediaplan_core::{FeeStructure, ItemLayout, PlanError, SearchConfig};
use serde::{Deserialize, Serialize};

/// Top-level mediaplan configuration.
///
/// Every section is optional and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    /// Target total, known line items, and fees.
    #[serde(default)]
    pub campaign: CampaignConfig,

    /// Which item is unknown and which items carry the tool fee.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Goal-seek parameters.
    #[serde(default)]
    pub search: SearchSettings,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Campaign inputs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CampaignConfig {
    /// Fixed total campaign cost to solve for. Required by `solve`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_total: Option<f64>,

    /// Budgets of every item except the unknown one, in layout order.
    #[serde(default)]
    pub known_items: Vec<f64>,

    /// Agency fee as a fraction of total spend.
    #[serde(default)]
    pub agency_fee_rate: f64,

    /// Third-party tool fee as a fraction of the fee-subset spend.
    #[serde(default)]
    pub tool_fee_rate: f64,

    /// Flat agency-hours cost.
    #[serde(default)]
    pub fixed_cost: f64,
}

impl CampaignConfig {
    pub fn fee_structure(&self) -> FeeStructure {
        FeeStructure::new(self.agency_fee_rate, self.tool_fee_rate, self.fixed_cost)
    }
}

/// Positional layout of the line items.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default = "default_item_count")]
    pub item_count: usize,

    #[serde(default = "default_unknown_index")]
    pub unknown_index: usize,

    #[serde(default = "default_fee_subset_indices")]
    pub fee_subset_indices: Vec<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            unknown_index: default_unknown_index(),
            fee_subset_indices: default_fee_subset_indices(),
        }
    }
}

impl LayoutConfig {
    pub fn to_layout(&self) -> Result<ItemLayout, PlanError> {
        ItemLayout::new(
            self.item_count,
            self.unknown_index,
            self.fee_subset_indices.clone(),
        )
    }
}

fn default_item_count() -> usize {
    4
}

fn default_unknown_index() -> usize {
    2
}

fn default_fee_subset_indices() -> Vec<usize> {
    vec![0, 1, 3]
}

/// Goal-seek parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchSettings {
    /// Accepted absolute distance between computed and target total.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// First adjustment applied to the unknown item.
    #[serde(default = "default_initial_step")]
    pub initial_step: f64,

    /// Hard cap on evaluated candidates.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            initial_step: default_initial_step(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl SearchSettings {
    pub fn to_search_config(&self) -> Result<SearchConfig, PlanError> {
        SearchConfig::new(self.tolerance, self.initial_step, self.max_iterations)
    }
}

fn default_tolerance() -> f64 {
    0.01
}

fn default_initial_step() -> f64 {
    10.0
}

fn default_max_iterations() -> u32 {
    100
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// trace, debug, info, warn, or error.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
