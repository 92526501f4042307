use std::env;

pub const DEFAULT_TABLE_NAME: &str = "salon";
pub const DEFAULT_COLLECTION: &str = "stylists";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@salon.com";

/// Runtime settings, read once at cold start
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub table_name: String,
    pub collection: String,
    /// Reserved account that sees the dashboard and is hidden from it
    pub admin_email: String,
    /// "*" or a comma-separated list of allowed origins
    pub cors_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            table_name: read("TABLE_NAME", DEFAULT_TABLE_NAME),
            collection: read("STYLISTS_COLLECTION", DEFAULT_COLLECTION),
            admin_email: read("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            cors_origin: read("CORS_ORIGIN", "*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_unset_or_blank() {
        let vars: HashMap<&str, &str> = [("TABLE_NAME", "salon-prod"), ("ADMIN_EMAIL", "  ")].into();
        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.table_name, "salon-prod");
        assert_eq!(config.collection, "stylists");
        assert_eq!(config.admin_email, "admin@salon.com");
        assert_eq!(config.cors_origin, "*");
    }
}
