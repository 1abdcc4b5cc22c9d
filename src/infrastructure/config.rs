//! Configuration from the process environment

use serde_json::Value;
use std::path::PathBuf;

pub const API_BASE_VARS: [&str; 2] = ["JOTTER_API_BASE", "JOTTER_BACKEND_URL"];
pub const FEATURE_FLAGS_VAR: &str = "JOTTER_FEATURE_FLAGS";
pub const DATA_DIR_VAR: &str = "JOTTER_DATA_DIR";

/// Whether a remote backend has been configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Local,
    ApiReady,
}

impl Mode {
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Local => "Local Mode",
            Mode::ApiReady => "API Ready",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub experimental: bool,
}

impl FeatureFlags {
    /// Parse a JSON object of flags. Anything unparseable yields the defaults.
    pub fn parse(raw: &str) -> Self {
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return FeatureFlags::default();
        };

        FeatureFlags {
            experimental: map.get("experimental").is_some_and(truthy),
        }
    }

    pub fn label(&self) -> &'static str {
        if self.experimental {
            "Experimental"
        } else {
            "Stable"
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: Option<String>,
    pub flags: FeatureFlags,
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env(data_dir: Option<PathBuf>) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), data_dir)
    }

    /// Build configuration from an arbitrary variable lookup.
    /// An explicit `data_dir` takes precedence over `JOTTER_DATA_DIR`.
    pub fn from_lookup<F>(lookup: F, data_dir: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = API_BASE_VARS
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.is_empty());

        let flags = lookup(FEATURE_FLAGS_VAR)
            .map(|raw| FeatureFlags::parse(&raw))
            .unwrap_or_default();

        let data_dir = data_dir
            .or_else(|| {
                lookup(DATA_DIR_VAR)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(Self::default_data_dir);

        AppConfig {
            api_base,
            flags,
            data_dir,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.api_base.is_some() {
            Mode::ApiReady
        } else {
            Mode::Local
        }
    }

    fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("jotter"))
            .unwrap_or_else(|| PathBuf::from(".jotter"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| env.get(key).cloned(), None)
    }

    #[test]
    fn test_defaults_to_local_mode() {
        let config = config_from(&[]);
        assert_eq!(config.api_base, None);
        assert_eq!(config.mode(), Mode::Local);
        assert_eq!(config.mode().label(), "Local Mode");
        assert_eq!(config.flags.label(), "Stable");
    }

    #[test]
    fn test_api_base_first_alias_wins() {
        let config = config_from(&[
            ("JOTTER_API_BASE", "https://a.example"),
            ("JOTTER_BACKEND_URL", "https://b.example"),
        ]);
        assert_eq!(config.api_base.as_deref(), Some("https://a.example"));
        assert_eq!(config.mode().label(), "API Ready");
    }

    #[test]
    fn test_empty_api_base_falls_through_to_alias() {
        let config = config_from(&[
            ("JOTTER_API_BASE", ""),
            ("JOTTER_BACKEND_URL", "https://b.example"),
        ]);
        assert_eq!(config.api_base.as_deref(), Some("https://b.example"));
    }

    #[test]
    fn test_all_empty_api_base_is_local() {
        let config = config_from(&[("JOTTER_API_BASE", ""), ("JOTTER_BACKEND_URL", "")]);
        assert_eq!(config.mode(), Mode::Local);
    }

    #[test]
    fn test_feature_flags_experimental() {
        let config = config_from(&[("JOTTER_FEATURE_FLAGS", r#"{"experimental": true}"#)]);
        assert!(config.flags.experimental);
        assert_eq!(config.flags.label(), "Experimental");
    }

    #[test]
    fn test_feature_flags_unparseable_is_default() {
        assert_eq!(FeatureFlags::parse("{not json"), FeatureFlags::default());
        assert_eq!(FeatureFlags::parse("[true]"), FeatureFlags::default());
        assert_eq!(FeatureFlags::parse(""), FeatureFlags::default());
    }

    #[test]
    fn test_feature_flags_truthiness() {
        assert!(FeatureFlags::parse(r#"{"experimental": 1}"#).experimental);
        assert!(FeatureFlags::parse(r#"{"experimental": "yes"}"#).experimental);
        assert!(!FeatureFlags::parse(r#"{"experimental": 0}"#).experimental);
        assert!(!FeatureFlags::parse(r#"{"experimental": ""}"#).experimental);
        assert!(!FeatureFlags::parse(r#"{"other": true}"#).experimental);
    }

    #[test]
    fn test_data_dir_precedence() {
        let from_env = config_from(&[("JOTTER_DATA_DIR", "/tmp/jotter-env")]);
        assert_eq!(from_env.data_dir, PathBuf::from("/tmp/jotter-env"));

        let explicit = AppConfig::from_lookup(
            |key| (key == DATA_DIR_VAR).then(|| "/tmp/jotter-env".to_string()),
            Some(PathBuf::from("/tmp/jotter-flag")),
        );
        assert_eq!(explicit.data_dir, PathBuf::from("/tmp/jotter-flag"));
    }

    #[test]
    fn test_default_data_dir_is_named_for_app() {
        let config = config_from(&[]);
        assert!(config.data_dir.ends_with("jotter") || config.data_dir.ends_with(".jotter"));
    }
}
