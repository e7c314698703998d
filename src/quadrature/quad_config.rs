use crate::quadrature::quad_error::{QuadError, QuadResult};
use log::LevelFilter;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// number of orders kept in the rule cache by default
pub const CACHED_ORDERS: usize = 5;

/// Settings of the rule cache, read from the `[quadrature]` table of a TOML document:
/// ```toml
/// [quadrature]
/// max_cached_order = 5
/// log_level = "info"
/// ```
/// Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadConfig {
    /// orders 1..=max_cached_order are built eagerly for every shape
    pub max_cached_order: usize,
    pub log_level: LevelFilter,
}

impl Default for QuadConfig {
    fn default() -> Self {
        QuadConfig {
            max_cached_order: CACHED_ORDERS,
            log_level: LevelFilter::Info,
        }
    }
}

impl QuadConfig {
    pub fn from_toml_str(text: &str) -> QuadResult<Self> {
        let document = text
            .parse::<toml::Table>()
            .map_err(|e| QuadError::ConfigError(e.to_string()))?;
        let mut config = QuadConfig::default();
        let Some(section) = document.get("quadrature") else {
            return Ok(config);
        };
        let section = section.as_table().ok_or_else(|| {
            QuadError::ConfigError("[quadrature] must be a table".to_string())
        })?;

        if let Some(value) = section.get("max_cached_order") {
            let depth = value.as_integer().ok_or_else(|| {
                QuadError::ConfigError("max_cached_order must be an integer".to_string())
            })?;
            if depth < 1 {
                return Err(QuadError::ConfigError(format!(
                    "max_cached_order must be at least 1, got {}",
                    depth
                )));
            }
            config.max_cached_order = depth as usize;
        }
        if let Some(value) = section.get("log_level") {
            let level = value.as_str().ok_or_else(|| {
                QuadError::ConfigError("log_level must be a string".to_string())
            })?;
            config.log_level = LevelFilter::from_str(level).map_err(|_| {
                QuadError::ConfigError(format!("unknown log level '{}'", level))
            })?;
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> QuadResult<Self> {
        let text = fs::read_to_string(path.as_ref()).map_err(|e| {
            QuadError::ConfigError(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = QuadConfig::default();
        assert_eq!(config.max_cached_order, 5);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(QuadConfig::from_toml_str("").unwrap(), config);
    }

    #[test]
    fn test_parse_section() {
        let text = "[quadrature]\nmax_cached_order = 8\nlog_level = \"debug\"\n";
        let config = QuadConfig::from_toml_str(text).unwrap();
        assert_eq!(config.max_cached_order, 8);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config = QuadConfig::from_toml_str("[quadrature]\nmax_cached_order = 3\n").unwrap();
        assert_eq!(config.max_cached_order, 3);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_invalid_values() {
        let zero = QuadConfig::from_toml_str("[quadrature]\nmax_cached_order = 0\n");
        assert!(matches!(zero, Err(QuadError::ConfigError(_))));
        let level = QuadConfig::from_toml_str("[quadrature]\nlog_level = \"loud\"\n");
        assert!(matches!(level, Err(QuadError::ConfigError(_))));
        let broken = QuadConfig::from_toml_str("[quadrature\n");
        assert!(matches!(broken, Err(QuadError::ConfigError(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[quadrature]\nmax_cached_order = 2").unwrap();
        let config = QuadConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_cached_order, 2);
        assert!(QuadConfig::from_file("/nonexistent/quadrature.toml").is_err());
    }
}
