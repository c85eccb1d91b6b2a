//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for one decision cycle run from the command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Seed for the action sampler. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
    /// TOML scenario to evaluate. `None` uses the kick-off situation.
    pub scenario_path: Option<PathBuf>,
    /// Directory receiving `robot-bt.log`. `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BT_SEED` - RNG seed for action outcomes (default: random)
    /// - `BT_SCENARIO` - Path to a TOML scenario file (default: kick-off)
    /// - `BT_LOG_DIR` - Directory for the log file (default: none)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            // Unparseable seeds fall back to a random one
            seed: read_var::<u64>(&lookup, "BT_SEED"),
            scenario_path: non_empty(&lookup, "BT_SCENARIO").map(PathBuf::from),
            log_dir: non_empty(&lookup, "BT_LOG_DIR").map(PathBuf::from),
        }
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]), CliConfig::default());
    }

    #[test]
    fn all_variables_are_read() {
        let config = config_from(&[
            ("BT_SEED", " 42 "),
            ("BT_SCENARIO", "scenarios/kickoff.toml"),
            ("BT_LOG_DIR", "/tmp/robot-logs"),
        ]);
        assert_eq!(config.seed, Some(42));
        assert_eq!(
            config.scenario_path,
            Some(PathBuf::from("scenarios/kickoff.toml"))
        );
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/robot-logs")));
    }

    #[test]
    fn invalid_or_blank_values_are_ignored() {
        let config = config_from(&[("BT_SEED", "-3"), ("BT_SCENARIO", "  ")]);
        assert_eq!(config.seed, None);
        assert_eq!(config.scenario_path, None);
    }
}
