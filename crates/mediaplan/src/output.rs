// SPDX-FileCopyrightText: 2026 Mediaplan Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Machine-readable output shared by the subcommands.

use serde::Serialize;

pub fn render_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Print `value` as pretty JSON, or report the failure and exit 1.
pub fn print_json<T: Serialize>(value: &T) {
    match render_json(value) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("error: failed to render JSON output: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn renders_report_fields() {
        let value = BTreeMap::from([("total", 2135.0)]);
        let rendered = render_json(&value).unwrap();
        assert!(rendered.contains("\"total\": 2135.0"), "{rendered}");
    }

    #[test]
    fn serialization_failure_is_an_error() {
        // JSON object keys must be strings.
        let value = BTreeMap::from([((1u32, 2u32), 3.0)]);
        assert!(render_json(&value).is_err());
    }
}
