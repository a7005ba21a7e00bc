use std::time::Duration;

use serde::Deserialize;

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
    /// Allowed origins (wildcard "*" or explicit list)
    #[serde(default)]
    pub origins: Allowed,
    /// Allowed HTTP methods (wildcard "*" or explicit list)
    #[serde(default)]
    pub methods: Allowed,
    /// Allowed headers (wildcard "*" or explicit list)
    #[serde(default)]
    pub headers: Allowed,
    /// Max age for preflight cache in seconds
    #[serde(default)]
    pub max_age: Option<u64>,
}

impl CorsConfig {
    pub const fn max_age_duration(&self) -> Option<Duration> {
        match self.max_age {
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        }
    }
}

/// Either the wildcard "*" or an explicit list of values
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Allowed {
    Single(String),
    List(Vec<String>),
}

impl Allowed {
    /// Explicit values, or `None` when any value is allowed
    pub fn values(&self) -> Option<&[String]> {
        match self {
            Self::Single(v) if v == "*" => None,
            Self::Single(v) => Some(std::slice::from_ref(v)),
            Self::List(vs) if vs.iter().any(|v| v == "*") => None,
            Self::List(vs) => Some(vs),
        }
    }
}

impl Default for Allowed {
    fn default() -> Self {
        Self::Single("*".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_string_allows_any() {
        let config: CorsConfig = toml::from_str("origins = \"*\"").unwrap();
        assert!(config.origins.values().is_none());
    }

    #[test]
    fn explicit_list_is_preserved() {
        let config: CorsConfig = toml::from_str("origins = [\"http://localhost:5173\"]").unwrap();
        assert_eq!(
            config.origins.values(),
            Some(&["http://localhost:5173".to_string()][..])
        );
    }

    #[test]
    fn wildcard_inside_list_allows_any() {
        let config: CorsConfig = toml::from_str("origins = [\"http://a\", \"*\"]").unwrap();
        assert!(config.origins.values().is_none());
    }
}
