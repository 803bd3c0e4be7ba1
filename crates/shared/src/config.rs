//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Authorization configuration.
    #[serde(default)]
    pub authorization: AuthorizationConfig,
}

/// Authorization configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizationConfig {
    /// Policy applied to route names without a registered access rule.
    #[serde(default)]
    pub unknown_route_policy: UnknownRoutePolicy,
}

/// Policy for route names that have no registered access rule.
///
/// The legacy behavior is to allow them, which silently grants access to any
/// screen that forgot to register a rule. The flag exists so deployments can
/// opt into the safer deny default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRoutePolicy {
    /// Unregistered routes are accessible to every authenticated user.
    #[default]
    Allow,
    /// Unregistered routes are denied for everyone.
    Deny,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DAROU").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_route_policy_defaults_to_allow() {
        let config = AppConfig::default();
        assert_eq!(
            config.authorization.unknown_route_policy,
            UnknownRoutePolicy::Allow
        );
    }

    #[test]
    fn test_unknown_route_policy_from_env() {
        temp_env::with_var("DAROU__AUTHORIZATION__UNKNOWN_ROUTE_POLICY", Some("deny"), || {
            let config = AppConfig::load().unwrap();
            assert_eq!(
                config.authorization.unknown_route_policy,
                UnknownRoutePolicy::Deny
            );
        });
    }

    #[test]
    fn test_deserialize_policy_values() {
        let config: AuthorizationConfig =
            serde_json::from_str(r#"{"unknown_route_policy":"deny"}"#).unwrap();
        assert_eq!(config.unknown_route_policy, UnknownRoutePolicy::Deny);

        let config: AuthorizationConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.unknown_route_policy, UnknownRoutePolicy::Allow);
    }
}
