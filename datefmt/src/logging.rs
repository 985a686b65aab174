// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

use tracing_subscriber::EnvFilter;

const LOG_TARGETS: [&str; 2] = ["datefmt", "date_format"];

fn default_filter(verbosity: u8) -> String {
    let level = ["warn", "info", "debug"]
        .get(usize::from(verbosity))
        .copied()
        .unwrap_or("trace");
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Sets up stderr logging, each `-v` raises the level one step above warn.
/// A `RUST_LOG` filter replaces the default one.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::default_filter;

    #[test]
    fn verbosity_steps_up_from_warn() {
        assert_eq!(default_filter(0), "datefmt=warn,date_format=warn");
        assert_eq!(default_filter(2), "datefmt=debug,date_format=debug");
        assert_eq!(default_filter(7), "datefmt=trace,date_format=trace");
    }
}
