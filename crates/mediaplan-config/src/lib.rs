// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for mediaplan.
//!
//! TOML files are layered with Figment (system, user, local, explicit path,
//! then `MEDIAPLAN_*` environment variables), deserialized strictly with
//! `deny_unknown_fields`, then validated. Failures come back as miette
//! diagnostics with typo suggestions.
//!
//! # Usage
//!
//! ```no_run
//! use mediaplan_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("tolerance: {}", config.search.tolerance);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

use figment::Figment;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{build_figment, load_config, load_config_from_path, load_config_from_str};
pub use model::PlanConfig;

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<PlanConfig, Vec<ConfigError>> {
    extract_and_validate(&loader::build_figment(None), None)
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<PlanConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Extract a prepared Figment and validate the result.
///
/// Callers layer their own providers (e.g. command-line overrides) on a
/// figment from [`build_figment`] and hand it here. `explicit` is the
/// `--config` path, if any, so its content can be quoted in diagnostics.
pub fn extract_and_validate(
    figment: &Figment,
    explicit: Option<&Path>,
) -> Result<PlanConfig, Vec<ConfigError>> {
    match figment.extract::<PlanConfig>() {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(
                metadata = ?figment.metadata().map(|m| m.name.to_string()).collect::<Vec<_>>(),
                "configuration loaded"
            );
            Ok(config)
        }
        Err(err) => {
            let sources = collect_toml_sources(explicit);
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Read the TOML files that may have contributed, for source spans.
fn collect_toml_sources(explicit: Option<&Path>) -> Vec<(String, String)> {
    let mut candidates = vec![loader::system_config_path()];
    candidates.extend(loader::user_config_path());
    if let Ok(dir) = std::env::current_dir() {
        candidates.push(dir.join(loader::CONFIG_FILE_NAME));
    }
    candidates.extend(
        explicit.map(|p| std::fs::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())),
    );

    candidates
        .into_iter()
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
