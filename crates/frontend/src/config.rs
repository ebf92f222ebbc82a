//! Конфигурация демо-страницы.
//!
//! Значения по умолчанию зашиты в бинарник в виде TOML. Их можно переопределить
//! через query string страницы, например `?rows_per_page=5&failure_rate=1`.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DemoConfig {
    pub table: TableConfig,
    pub loader: LoaderConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub rows_per_page: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoaderConfig {
    pub fetch_delay_ms: u32,
    pub failure_rate: f64,
}

/// Overrides accepted from the query string. Unknown keys are ignored.
#[derive(Debug, Deserialize, Default)]
struct QueryOverrides {
    rows_per_page: Option<usize>,
    fetch_delay_ms: Option<u32>,
    failure_rate: Option<f64>,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[table]
rows_per_page = 10

[loader]
fetch_delay_ms = 1000
failure_rate = 0.1
"#;

impl DemoConfig {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let config: DemoConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.table.rows_per_page == 0 {
            anyhow::bail!("rows_per_page must be at least 1");
        }
        if !(0.0..=1.0).contains(&self.loader.failure_rate) {
            anyhow::bail!(
                "failure_rate must be within [0, 1], got {}",
                self.loader.failure_rate
            );
        }
        Ok(())
    }

    /// Applies overrides from a `?key=value&...` query string.
    ///
    /// Each override is validated on its own; a rejected value keeps the
    /// previous setting and is reported with a warning.
    pub fn apply_query(&mut self, search: &str) {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return;
        }
        let overrides: QueryOverrides = match serde_qs::from_str(query) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("Ignoring malformed config query '{}': {}", query, e);
                return;
            }
        };

        if let Some(rows) = overrides.rows_per_page {
            if rows >= 1 {
                self.table.rows_per_page = rows;
            } else {
                log::warn!("Ignoring rows_per_page={}", rows);
            }
        }
        if let Some(delay) = overrides.fetch_delay_ms {
            self.loader.fetch_delay_ms = delay;
        }
        if let Some(rate) = overrides.failure_rate {
            if (0.0..=1.0).contains(&rate) {
                self.loader.failure_rate = rate;
            } else {
                log::warn!("Ignoring failure_rate={}", rate);
            }
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            table: TableConfig { rows_per_page: 10 },
            loader: LoaderConfig {
                fetch_delay_ms: 1000,
                failure_rate: 0.1,
            },
        }
    }
}

/// Load configuration for the running page
///
/// Starts from the embedded defaults and applies the query string of the
/// current window location, if there is one.
pub fn load_config() -> DemoConfig {
    let mut config = match DemoConfig::parse(DEFAULT_CONFIG) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Embedded config is invalid, using built-in values: {}", e);
            DemoConfig::default()
        }
    };

    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    config.apply_query(&search);

    log::info!("Demo config: {:?}", config);
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DemoConfig::parse(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let zero_rows = DEFAULT_CONFIG.replace("rows_per_page = 10", "rows_per_page = 0");
        assert!(DemoConfig::parse(&zero_rows).is_err());

        let bad_rate = DEFAULT_CONFIG.replace("failure_rate = 0.1", "failure_rate = 1.5");
        assert!(DemoConfig::parse(&bad_rate).is_err());

        assert!(DemoConfig::parse("[table]").is_err());
    }

    #[test]
    fn test_apply_query() {
        let mut config = DemoConfig::default();
        config.apply_query("?rows_per_page=5&failure_rate=1&fetch_delay_ms=0");
        assert_eq!(config.table.rows_per_page, 5);
        assert_eq!(config.loader.failure_rate, 1.0);
        assert_eq!(config.loader.fetch_delay_ms, 0);
    }

    #[test]
    fn test_apply_query_cannot_resize_dataset() {
        let mut config = DemoConfig::default();
        config.apply_query("?record_count=4000000000");
        assert_eq!(config, DemoConfig::default());

        config.apply_query("?record_count=5&rows_per_page=25");
        assert_eq!(config.table.rows_per_page, 25);
    }

    #[test]
    fn test_apply_query_ignores_invalid_values() {
        let mut config = DemoConfig::default();
        config.apply_query("?rows_per_page=0&failure_rate=2");
        assert_eq!(config, DemoConfig::default());

        config.apply_query("");
        config.apply_query("?active=table");
        assert_eq!(config, DemoConfig::default());
    }
}
