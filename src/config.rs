use std::env;

pub const DEFAULT_SOLVER: &str = "microlp";
pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_JSON_LIMIT: usize = 2 * 1024 * 1024; // 2 MB

/// Runtime settings, read from the environment (and `.env` if present)
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub solver: String,
    pub port: u16,
    pub json_limit: usize,
    pub sentry_dsn: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            solver: DEFAULT_SOLVER.to_string(),
            port: DEFAULT_PORT,
            json_limit: DEFAULT_JSON_LIMIT,
            sentry_dsn: None,
        }
    }
}

impl Settings {
    /// Load settings from process environment variables
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unparsable values fall
    /// back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        Settings {
            solver: lookup("SOLVER")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.solver),
            port: lookup("PORT")
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            json_limit: lookup("JSON_PAYLOAD_LIMIT")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.json_limit),
            sentry_dsn: lookup("SENTRY_DSN").filter(|s| !s.is_empty()),
        }
    }
}

/// Initialise env_logger with `default_level` unless `RUST_LOG` is set.
/// Logs go to stderr so stdout carries only the solution.
pub fn init_logging(default_level: &str) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_settings_defaults_when_env_is_empty() {
        assert_eq!(Settings::from_lookup(lookup(&[])), Settings::default());
    }

    #[test]
    fn test_settings_reads_overrides() {
        let s = Settings::from_lookup(lookup(&[
            ("SOLVER", "highs"),
            ("PORT", "9100"),
            ("JSON_PAYLOAD_LIMIT", "1024"),
            ("SENTRY_DSN", "https://key@sentry.invalid/1"),
        ]));
        assert_eq!(s.solver, "highs");
        assert_eq!(s.port, 9100);
        assert_eq!(s.json_limit, 1024);
        assert!(s.sentry_dsn.is_some());
    }

    #[test]
    fn test_settings_ignores_unparsable_values() {
        let s = Settings::from_lookup(lookup(&[("PORT", "ninety"), ("SENTRY_DSN", "")]));
        assert_eq!(s.port, DEFAULT_PORT);
        assert_eq!(s.sentry_dsn, None);
    }
}
