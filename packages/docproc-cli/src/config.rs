use anyhow::{Context, Result};
use document_processing::PipelineConfig;
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = PipelineConfig::default();

        Ok(Self {
            pipeline: PipelineConfig {
                max_field_entries: env_or("DOCPROC_MAX_FIELD_ENTRIES", defaults.max_field_entries)?,
                high_value_threshold: env_or(
                    "DOCPROC_HIGH_VALUE_THRESHOLD",
                    defaults.high_value_threshold,
                )?,
                significant_value_threshold: env_or(
                    "DOCPROC_SIGNIFICANT_VALUE_THRESHOLD",
                    defaults.significant_value_threshold,
                )?,
                history_value_limit: env_or(
                    "DOCPROC_HISTORY_VALUE_LIMIT",
                    defaults.history_value_limit,
                )?,
            },
        })
    }
}

/// Parse `key` if set, otherwise fall back to `default`.
fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let value: usize = env_or("DOCPROC_TEST_UNSET_KEY", 5).unwrap();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_env_or_parses_and_rejects() {
        env::set_var("DOCPROC_TEST_THRESHOLD", " 2500.5 ");
        let value: f64 = env_or("DOCPROC_TEST_THRESHOLD", 0.0).unwrap();
        assert_eq!(value, 2500.5);

        env::set_var("DOCPROC_TEST_ENTRIES", "five");
        let err = env_or::<usize>("DOCPROC_TEST_ENTRIES", 5).unwrap_err();
        assert!(err.to_string().contains("DOCPROC_TEST_ENTRIES"));
    }
}
