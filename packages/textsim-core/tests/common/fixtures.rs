//! Test fixtures

use chrono::{DateTime, TimeZone, Utc};

/// Subcommands of a package-manager style CLI
pub const COMMANDS: [&str; 8] = [
    "install", "uninstall", "update", "upgrade", "build", "test", "run", "clean",
];

/// Fixed reference instant
pub fn fixture_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()
}

/// YAML config document with every section set
pub fn fixture_full_yaml() -> &'static str {
    r##"version: 1
join:
  separator: "; "
  last_separator: " et "
censor:
  replacement: "#"
duration:
  locale: english
suggest:
  threshold: 0.5
  max_suggestions: 2
  case_insensitive: true
"##
}
