// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks the semantic ranges serde cannot express: fee rates in `[0, 1]`,
//! non-negative costs, strictly positive search parameters, and a layout that
//! agrees with the number of known items.

use crate::diagnostic::ConfigError;
use crate::model::PlanConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn validation(message: String) -> ConfigError {
    ConfigError::Validation { message }
}

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every violation instead of stopping at the first one.
pub fn validate_config(config: &PlanConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let campaign = &config.campaign;

    if let Some(target) = campaign.target_total {
        if !target.is_finite() {
            errors.push(validation(format!(
                "campaign.target_total must be finite, got {target}"
            )));
        }
    }

    for (key, rate) in [
        ("agency_fee_rate", campaign.agency_fee_rate),
        ("tool_fee_rate", campaign.tool_fee_rate),
    ] {
        if !(0.0..=1.0).contains(&rate) {
            errors.push(validation(format!(
                "campaign.{key} must be between 0 and 1, got {rate}"
            )));
        }
    }

    if !campaign.fixed_cost.is_finite() || campaign.fixed_cost < 0.0 {
        errors.push(validation(format!(
            "campaign.fixed_cost must be a non-negative number, got {}",
            campaign.fixed_cost
        )));
    }

    for (i, amount) in campaign.known_items.iter().enumerate() {
        if !amount.is_finite() || *amount < 0.0 {
            errors.push(validation(format!(
                "campaign.known_items[{i}] must be a non-negative number, got {amount}"
            )));
        }
    }

    match config.layout.to_layout() {
        Ok(layout) => {
            let known = campaign.known_items.len();
            if known > 0 && known != layout.known_count() {
                errors.push(validation(format!(
                    "campaign.known_items has {known} entries but layout.item_count = {} needs {}",
                    layout.item_count(),
                    layout.known_count()
                )));
            }
        }
        Err(err) => errors.push(validation(format!("layout: {err}"))),
    }

    let search = &config.search;
    if !search.tolerance.is_finite() || search.tolerance <= 0.0 {
        errors.push(validation(format!(
            "search.tolerance must be greater than 0, got {}",
            search.tolerance
        )));
    }
    if !search.initial_step.is_finite() || search.initial_step <= 0.0 {
        errors.push(validation(format!(
            "search.initial_step must be greater than 0, got {}",
            search.initial_step
        )));
    }
    if search.max_iterations == 0 {
        errors.push(validation(
            "search.max_iterations must be greater than 0".to_string(),
        ));
    }

    let level = config.log.level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(validation(format!(
            "log.level `{}` is not one of {}",
            config.log.level,
            LOG_LEVELS.join(", ")
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_message(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&PlanConfig::default()).is_ok());
    }

    #[test]
    fn fee_rate_above_one_fails() {
        let mut config = PlanConfig::default();
        config.campaign.tool_fee_rate = 1.2;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "tool_fee_rate"));
    }

    #[test]
    fn nan_rate_fails() {
        let mut config = PlanConfig::default();
        config.campaign.agency_fee_rate = f64::NAN;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "agency_fee_rate"));
    }

    #[test]
    fn negative_known_item_fails_with_index() {
        let mut config = PlanConfig::default();
        config.campaign.known_items = vec![100.0, -1.0, 400.0];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "known_items[1]"));
    }

    #[test]
    fn known_items_must_match_layout() {
        let mut config = PlanConfig::default();
        config.campaign.known_items = vec![100.0, 200.0];
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "needs 3"));
    }

    #[test]
    fn bad_layout_is_reported() {
        let mut config = PlanConfig::default();
        config.layout.unknown_index = 9;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "unknown_index"));
    }

    #[test]
    fn zero_tolerance_fails() {
        let mut config = PlanConfig::default();
        config.search.tolerance = 0.0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "search.tolerance"));
    }

    #[test]
    fn collects_every_error() {
        let mut config = PlanConfig::default();
        config.campaign.fixed_cost = -10.0;
        config.search.initial_step = -1.0;
        config.search.max_iterations = 0;
        config.log.level = "loud".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4, "got: {errors:?}");
    }

    #[test]
    fn one_item_layout_without_known_items_validates() {
        let toml_str = r#"
[campaign]
target_total = 1330.0

[layout]
item_count = 1
unknown_index = 0
fee_subset_indices = []
"#;
        let config: PlanConfig = toml::from_str(toml_str).unwrap();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn subset_index_out_of_range_fails() {
        let toml_str = r#"
[layout]
item_count = 3
unknown_index = 1
fee_subset_indices = [0, 3]
"#;
        let config: PlanConfig = toml::from_str(toml_str).unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_message(&errors, "fee_subset_indices"));
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let mut config = PlanConfig::default();
        config.log.level = "DEBUG".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
