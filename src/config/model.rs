use serde::Deserialize;

use crate::builder::DEFAULT_MAX_REPEAT;

use super::ConfigError;

/// One layer of settings. Unset fields fall through to the layer below.
///
/// The same shape holds a YAML file and the command-line overrides.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Ceiling substituted for the unbounded end of `*`, `+` and `{m,}`.
    pub max_repeat: Option<u32>,
    /// Seed for `random`.
    pub seed: Option<u64>,
    /// Maximum number of strings printed by `all`.
    pub limit: Option<usize>,
}

impl Config {
    /// Lay `upper` over `self`; every field `upper` sets wins.
    pub fn overlay(self, upper: Config) -> Config {
        Config {
            max_repeat: upper.max_repeat.or(self.max_repeat),
            seed: upper.seed.or(self.seed),
            limit: upper.limit.or(self.limit),
        }
    }

    /// Check the values and fill in defaults.
    pub fn into_settings(self) -> Result<Settings, ConfigError> {
        let mut problems = Vec::new();
        if self.max_repeat == Some(0) {
            problems.push("max_repeat must be at least 1".to_string());
        }
        if self.limit == Some(0) {
            problems.push("limit must be at least 1".to_string());
        }
        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems));
        }
        Ok(Settings {
            max_repeat: self.max_repeat.unwrap_or(DEFAULT_MAX_REPEAT),
            seed: self.seed,
            limit: self.limit,
        })
    }
}

/// Fully resolved settings the drivers run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub max_repeat: u32,
    pub seed: Option<u64>,
    pub limit: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_repeat: DEFAULT_MAX_REPEAT,
            seed: None,
            limit: None,
        }
    }
}

/// Parse one YAML layer. A blank document sets nothing.
pub fn parse_config(yaml: &str) -> Result<Config, serde_saphyr::Error> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_saphyr::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use rstest::rstest;

    #[test]
    fn parse_every_field() {
        let config = parse_config(indoc! {"
            max_repeat: 6
            seed: 42
            limit: 100
        "})
        .unwrap();
        assert_eq!(
            config,
            Config {
                max_repeat: Some(6),
                seed: Some(42),
                limit: Some(100),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("   \n")]
    #[case("{}")]
    fn blank_layer_sets_nothing(#[case] yaml: &str) {
        assert_eq!(parse_config(yaml).unwrap(), Config::default());
    }

    #[rstest]
    #[case::misspelled_field("max_repeats: 3\n")]
    #[case::negative_ceiling("max_repeat: -1\n")]
    #[case::seed_not_a_number("seed: abc\n")]
    fn parse_rejects(#[case] yaml: &str) {
        assert!(parse_config(yaml).is_err());
    }

    #[test]
    fn overlay_prefers_upper_layer() {
        let lower = Config {
            max_repeat: Some(3),
            seed: Some(1),
            limit: None,
        };
        let upper = Config {
            max_repeat: Some(8),
            seed: None,
            limit: Some(10),
        };
        assert_eq!(
            lower.overlay(upper),
            Config {
                max_repeat: Some(8),
                seed: Some(1),
                limit: Some(10),
            }
        );
    }

    #[test]
    fn empty_layer_resolves_to_defaults() {
        assert_eq!(Config::default().into_settings().unwrap(), Settings::default());
        assert_eq!(Settings::default().max_repeat, 4);
    }

    #[test]
    fn zero_values_are_all_reported() {
        let config = Config {
            max_repeat: Some(0),
            seed: None,
            limit: Some(0),
        };
        match config.into_settings() {
            Err(ConfigError::Invalid(problems)) => assert_eq!(
                problems,
                vec!["max_repeat must be at least 1", "limit must be at least 1"]
            ),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }
}
