use serde::{Deserialize, Serialize};

use crate::DEFAULT_CURRENCY;

/// Client settings. Missing fields fall back to [`ClientConfig::default`],
/// so a stored override may carry only the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Backend origin; empty means same-origin relative URLs
    pub api_base_url: String,
    pub default_budget: String,
    pub default_currency: String,
    pub banner_duration_ms: u32,
    /// Category names offered on the category form
    pub category_library: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            default_budget: "2500".to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            banner_duration_ms: 4000,
            category_library: ["Food_Dining", "Groceries", "Transfer", "Transport", "Utilities"]
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Absolute or relative URL for an API path
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }

    pub fn first_library_category(&self) -> &str {
        self.category_library
            .first()
            .map(String::as_str)
            .unwrap_or(crate::forms::CUSTOM_CATEGORY)
    }
}

pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.default_budget, "2500");
        assert_eq!(config.default_currency, "INR");
        assert_eq!(config.category_library.len(), 5);
        assert_eq!(config.first_library_category(), "Food_Dining");
    }

    #[test]
    fn test_partial_override() {
        let config = ClientConfig::from_json(r#"{"apiBaseUrl": "http://localhost:8080/"}"#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/");
        assert_eq!(config.default_budget, "2500");
        assert_eq!(config.endpoint("/api/users"), "http://localhost:8080/api/users");
    }

    #[test]
    fn test_relative_endpoint() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/api/users/3"), "/api/users/3");
    }

    #[test]
    fn test_empty_library_falls_back_to_custom() {
        let config = ClientConfig::from_json(r#"{"categoryLibrary": []}"#).unwrap();
        assert_eq!(config.first_library_category(), "Custom");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ClientConfig::from_json("{not json").is_err());
    }
}
