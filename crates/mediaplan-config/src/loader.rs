// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `/etc/mediaplan/mediaplan.toml`, then
//! `~/.config/mediaplan/mediaplan.toml`, then `./mediaplan.toml`, then an
//! explicit `--config` file, with `MEDIAPLAN_*` environment variables on top.

// figment::Error is external and cannot be boxed without a wrapper.
#![allow(clippy::result_large_err)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PlanConfig;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "MEDIAPLAN_";

/// Name of the config file looked up in each directory.
pub const CONFIG_FILE_NAME: &str = "mediaplan.toml";

/// Top-level sections, used to turn `SECTION_KEY` env names into `section.key`.
const SECTIONS: [&str; 4] = ["campaign", "layout", "search", "log"];

/// System-wide config path.
pub fn system_config_path() -> PathBuf {
    Path::new("/etc/mediaplan").join(CONFIG_FILE_NAME)
}

/// Per-user config path, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mediaplan").join(CONFIG_FILE_NAME))
}

/// Load configuration from the standard hierarchy with env var overrides.
pub fn load_config() -> Result<PlanConfig, figment::Error> {
    build_figment(None).extract()
}

/// Load configuration from a TOML string over the compiled defaults only.
pub fn load_config_from_str(toml_content: &str) -> Result<PlanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlanConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PlanConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PlanConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the layered Figment without extracting it.
///
/// `explicit` is merged after the standard files and before the environment,
/// so callers can still layer command-line overrides on the result.
pub fn build_figment(explicit: Option<&Path>) -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(PlanConfig::default()))
        .merge(Toml::file(system_config_path()))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE_NAME));
    if let Some(path) = explicit {
        figment = figment.merge(Toml::file(path));
    }
    figment.merge(env_provider())
}

/// Map `MEDIAPLAN_SEARCH_MAX_ITERATIONS` to `search.max_iterations`.
///
/// Only the first underscore after a known section name becomes a dot; the
/// rest of the key keeps its underscores. Keys arrive in their original case.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| env_key_to_path(key.as_str()).into())
}

fn env_key_to_path(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    SECTIONS
        .iter()
        .find_map(|section| {
            key.strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|field| format!("{section}.{field}"))
        })
        .unwrap_or(key)
}
