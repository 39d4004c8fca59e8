//! Runner configuration.
//!
//! Loaded from JSON; every field has a default so a partial file is valid.

use serde::{Deserialize, Serialize};

/// Settings for one property-check run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Base seed. Per-check RNGs are derived from it.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Random samples drawn by each randomized check.
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Per-element tolerance for approximate comparisons.
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
    /// Substring filter on check names. A leading `-` excludes matches.
    #[serde(default)]
    pub filter: Option<String>,
    /// Run checks in a seeded random order.
    #[serde(default)]
    pub shuffle: bool,
    /// Directory for JSON and JUnit reports.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_seed() -> u64 {
    0x5EED
}

fn default_iterations() -> u32 {
    256
}

fn default_epsilon() -> f32 {
    1e-4
}

fn default_output_dir() -> String {
    "check-reports".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            iterations: default_iterations(),
            epsilon: default_epsilon(),
            filter: None,
            shuffle: false,
            output_dir: default_output_dir(),
        }
    }
}

impl RunnerConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    /// Whether the check named `name` passes the filter.
    pub fn selects(&self, name: &str) -> bool {
        match self.filter.as_deref() {
            None | Some("") => true,
            Some(f) => match f.strip_prefix('-') {
                Some(excluded) => !name.contains(excluded),
                None => name.contains(f),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = RunnerConfig::from_json_str(r#"{ "seed": 42, "shuffle": true }"#).unwrap();
        assert_eq!(cfg.seed, 42);
        assert!(cfg.shuffle);
        assert_eq!(cfg.iterations, 256);
        assert_eq!(cfg.output_dir, "check-reports");
        assert_eq!(cfg.filter, None);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(RunnerConfig::from_json_str("{}").unwrap(), RunnerConfig::default());
    }

    #[test]
    fn filter_includes_and_excludes() {
        let mut cfg = RunnerConfig::default();
        assert!(cfg.selects("quat.normalize"));

        cfg.filter = Some("quat".to_string());
        assert!(cfg.selects("quat.normalize"));
        assert!(!cfg.selects("vec3.cross"));

        cfg.filter = Some("-quat".to_string());
        assert!(!cfg.selects("quat.normalize"));
        assert!(cfg.selects("vec3.cross"));
    }
}
