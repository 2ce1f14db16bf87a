// src/config/mod.rs

//! Store configuration
//!
//! Settings are assembled from layers, lowest priority first:
//! - built-in defaults
//! - an optional file (YAML, JSON or TOML, picked by extension)
//! - `FRESHVEG_` environment variables, `__` separating nested keys
//!   (`FRESHVEG_SHOP__FREE_SHIPPING_THRESHOLD=30000`)
//!
//! Layers are merged as JSON values and then deserialized into [`StoreConfig`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::Money;

/// Environment prefix for overrides
pub const ENV_PREFIX: &str = "FRESHVEG";

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub key: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation error for '{}': {}", self.key, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn parse(self, content: &str) -> Result<Value> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content)
                .map_err(|e| Error::config(format!("Failed to parse JSON config: {}", e))),
            ConfigFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Error::config(format!("Failed to parse YAML config: {}", e))),
            ConfigFormat::Toml => toml::from_str(content)
                .map_err(|e| Error::config(format!("Failed to parse TOML config: {}", e))),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfigSource {
    File { path: PathBuf, format: ConfigFormat },
    Environment { prefix: String },
    Memory { data: Value },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub app: AppSettings,
    pub logging: LoggingConfig,
    pub shop: ShopConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "FreshVeg".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
            debug: cfg!(debug_assertions),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub console: ConsoleLogConfig,
    pub file: Option<FileLogConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            console: ConsoleLogConfig::default(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleLogConfig {
    pub enabled: bool,
    pub colored: bool,
}

impl Default for ConsoleLogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colored: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    pub path: PathBuf,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./logs/freshveg.log"),
        }
    }
}

/// Pricing and checkout settings.
///
/// `free_shipping_threshold` is the single source for both the delivery fee
/// rule and the "add X for free delivery" hint on the cart page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub currency_label: String,
    pub free_shipping_threshold: Money,
    pub delivery_fee: Money,
    pub promo_code: String,
    pub promo_percent: u8,
    pub checkout_delay_ms: u64,
    pub contact_delay_ms: u64,
    pub newsletter_delay_ms: u64,
    pub placeholder_image: String,
}

/// Inline SVG shown when a product image fails to load
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iODgiIGhlaWdodD0iODgiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyIgc3Ryb2tlPSIjMDAwIiBzdHJva2UtbGluZWpvaW49InJvdW5kIiBvcGFjaXR5PSIuMyIgZmlsbD0ibm9uZSIgc3Ryb2tlLXdpZHRoPSIzLjciPjxyZWN0IHg9IjE2IiB5PSIxNiIgd2lkdGg9IjU2IiBoZWlnaHQ9IjU2IiByeD0iNiIvPjxwYXRoIGQ9Im0xNiA1OCAxNi0xOCAzMiAzMiIvPjxjaXJjbGUgY3g9IjUzIiBjeT0iMzUiIHI9IjciLz48L3N2Zz4=";

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency_label: "F CFA".to_string(),
            free_shipping_threshold: Money(25_000),
            delivery_fee: Money(2_500),
            promo_code: "welcome10".to_string(),
            promo_percent: 10,
            checkout_delay_ms: 2_000,
            contact_delay_ms: 1_500,
            newsletter_delay_ms: 800,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl ShopConfig {
    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    pub fn contact_delay(&self) -> Duration {
        Duration::from_millis(self.contact_delay_ms)
    }

    pub fn newsletter_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter_delay_ms)
    }

    /// Formats an amount with the configured currency label
    pub fn format_money(&self, amount: Money) -> String {
        amount.display_with(&self.currency_label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_title: String,
    pub window_width: f64,
    pub window_height: f64,
    pub notification_timeout_ms: u64,
    pub featured_per_slide: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: "FreshVeg - Légumes bio".to_string(),
            window_width: 1280.0,
            window_height: 860.0,
            notification_timeout_ms: 4_000,
            featured_per_slide: 3,
        }
    }
}

impl UiConfig {
    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }
}

impl StoreConfig {
    /// Loads defaults, then the optional file, then `FRESHVEG_` environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = path {
            loader = loader.with_file(path)?;
        }
        loader.with_env(ENV_PREFIX).load()
    }

    /// Checks value ranges; returns every problem found
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut fail = |key: &str, message: &str| {
            errors.push(ValidationError {
                key: key.to_string(),
                message: message.to_string(),
            })
        };

        if self.shop.promo_code.trim().is_empty() {
            fail("shop.promo_code", "must not be empty");
        }
        if !(1..=100).contains(&self.shop.promo_percent) {
            fail("shop.promo_percent", "must be between 1 and 100");
        }
        if self.shop.currency_label.trim().is_empty() {
            fail("shop.currency_label", "must not be empty");
        }
        if self.shop.placeholder_image.trim().is_empty() {
            fail("shop.placeholder_image", "must not be empty");
        }
        if self.ui.featured_per_slide == 0 {
            fail("ui.featured_per_slide", "must be at least 1");
        }
        if self.ui.window_width <= 0.0 || self.ui.window_height <= 0.0 {
            fail("ui.window_width", "window dimensions must be positive");
        }
        if !is_valid_level(&self.logging.level) {
            fail("logging.level", "must be one of trace, debug, info, warn, error");
        }

        errors
    }

    /// Like [`StoreConfig::validate`] but folds the problems into one error
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::config_invalid(
                errors.iter().map(ToString::to_string).collect(),
            ))
        }
    }
}

fn is_valid_level(level: &str) -> bool {
    matches!(
        level.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

/// Layered configuration builder
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    layers: Vec<ConfigSource>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = ConfigFormat::from_extension(&path).ok_or_else(|| {
            Error::config(format!(
                "Unsupported config file extension: {}",
                path.display()
            ))
        })?;
        self.layers.push(ConfigSource::File { path, format });
        Ok(self)
    }

    pub fn with_env(mut self, prefix: impl Into<String>) -> Self {
        self.layers.push(ConfigSource::Environment {
            prefix: prefix.into(),
        });
        self
    }

    pub fn with_memory(mut self, data: Value) -> Self {
        self.layers.push(ConfigSource::Memory { data });
        self
    }

    pub fn load(&self) -> Result<StoreConfig> {
        let defaults = serde_json::to_value(StoreConfig::default())?;
        let mut merged = defaults.clone();

        for layer in &self.layers {
            let layer_config = load_layer(layer, &defaults)?;
            merge_values(&mut merged, layer_config);
        }

        serde_json::from_value(merged)
            .map_err(|e| Error::config(format!("Invalid configuration values: {}", e)))
    }
}

fn load_layer(source: &ConfigSource, defaults: &Value) -> Result<Value> {
    match source {
        #[cfg(not(target_arch = "wasm32"))]
        ConfigSource::File { path, format } => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                Error::config(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            format.parse(&content)
        }

        #[cfg(target_arch = "wasm32")]
        ConfigSource::File { .. } => Err(Error::config("File loading not supported in web platform")),

        #[cfg(not(target_arch = "wasm32"))]
        ConfigSource::Environment { prefix } => Ok(env_layer(prefix, std::env::vars(), defaults)),

        #[cfg(target_arch = "wasm32")]
        ConfigSource::Environment { .. } => Ok(Value::Object(Map::new())),

        ConfigSource::Memory { data } => Ok(data.clone()),
    }
}

/// Builds a nested JSON object from `PREFIX_SECTION__KEY=value` pairs. Values
/// are typed after the default at the same path in `defaults`.
fn env_layer(
    prefix: &str,
    vars: impl IntoIterator<Item = (String, String)>,
    defaults: &Value,
) -> Value {
    let mut root = Map::new();
    let marker = format!("{}_", prefix);

    for (key, raw) in vars {
        let Some(path) = key.strip_prefix(&marker) else {
            continue;
        };
        let segments: Vec<String> = path
            .split("__")
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect();
        if segments.is_empty() {
            continue;
        }

        let pointer = format!("/{}", segments.join("/"));
        let value = typed_env_value(raw, defaults.pointer(&pointer));
        set_nested(&mut root, &segments, value);
    }

    Value::Object(root)
}

/// String settings keep the raw text even when it looks like a number; other
/// settings are parsed as JSON and fall back to the raw text.
fn typed_env_value(raw: String, default: Option<&Value>) -> Value {
    match default {
        Some(Value::String(_)) => Value::String(raw),
        _ => serde_json::from_str(&raw).unwrap_or(Value::String(raw)),
    }
}

fn set_nested(map: &mut Map<String, Value>, segments: &[String], value: Value) {
    match segments {
        [] => {}
        [last] => {
            map.insert(last.clone(), value);
        }
        [head, rest @ ..] => {
            let entry = map
                .entry(head.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(child) = entry {
                set_nested(child, rest, value);
            }
        }
    }
}

fn merge_values(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(&key) {
                    Some(target_value) => merge_values(target_value, source_value),
                    None => {
                        target_map.insert(key, source_value);
                    }
                }
            }
        }
        (target, source) => {
            *target = source;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = StoreConfig::default();

        assert!(config.validate().is_empty());
        assert_eq!(config.shop.free_shipping_threshold, Money(25_000));
        assert_eq!(config.shop.delivery_fee, Money(2_500));
        assert_eq!(config.shop.promo_code, "welcome10");
        assert_eq!(config.shop.checkout_delay(), Duration::from_secs(2));
        assert_eq!(config.shop.format_money(Money(2250)), "2 250 F CFA");
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension(Path::new("store.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("store.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_extension(Path::new("store.ini")), None);
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[shop]\nfree_shipping_threshold = 30000\npromo_code = \"BIENVENUE\"\n\n[logging]\nlevel = \"debug\""
        )
        .unwrap();

        let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();

        assert_eq!(config.shop.free_shipping_threshold, Money(30_000));
        assert_eq!(config.shop.promo_code, "BIENVENUE");
        assert_eq!(config.logging.level, "debug");
        // untouched keys keep their defaults
        assert_eq!(config.shop.delivery_fee, Money(2_500));
    }

    #[test]
    fn test_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "ui:\n  featured_per_slide: 4\nshop:\n  contact_delay_ms: 10").unwrap();

        let config = ConfigLoader::new().with_file(file.path()).unwrap().load().unwrap();

        assert_eq!(config.ui.featured_per_slide, 4);
        assert_eq!(config.shop.contact_delay_ms, 10);
    }

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let err = ConfigLoader::new().with_file("store.ini").unwrap_err();
        assert!(matches!(err.kind, crate::error::ErrorKind::Configuration { .. }));
    }

    #[test]
    fn test_env_layer_nesting() {
        let vars = vec![
            ("FRESHVEG_SHOP__FREE_SHIPPING_THRESHOLD".to_string(), "40000".to_string()),
            ("FRESHVEG_LOGGING__CONSOLE__COLORED".to_string(), "false".to_string()),
            ("FRESHVEG_SHOP__CURRENCY_LABEL".to_string(), "XOF".to_string()),
            ("OTHER_SHOP__DELIVERY_FEE".to_string(), "1".to_string()),
        ];

        let layer = env_layer("FRESHVEG", vars, &defaults());
        let config = ConfigLoader::new().with_memory(layer).load().unwrap();

        assert_eq!(config.shop.free_shipping_threshold, Money(40_000));
        assert!(!config.logging.console.colored);
        assert_eq!(config.shop.currency_label, "XOF");
        assert_eq!(config.shop.delivery_fee, Money(2_500));
    }

    fn defaults() -> Value {
        serde_json::to_value(StoreConfig::default()).unwrap()
    }

    #[test]
    fn test_env_numeric_text_stays_a_string() {
        let vars = vec![
            ("FRESHVEG_SHOP__PROMO_CODE".to_string(), "2024".to_string()),
            ("FRESHVEG_APP__VERSION".to_string(), "1.0".to_string()),
            ("FRESHVEG_SHOP__PROMO_PERCENT".to_string(), "15".to_string()),
        ];

        let layer = env_layer("FRESHVEG", vars, &defaults());
        assert_eq!(layer["shop"]["promo_code"], Value::String("2024".to_string()));

        let config = ConfigLoader::new().with_memory(layer).load().unwrap();
        assert_eq!(config.shop.promo_code, "2024");
        assert_eq!(config.app.version, "1.0");
        assert_eq!(config.shop.promo_percent, 15);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_later_layers_win() {
        let config = ConfigLoader::new()
            .with_memory(serde_json::json!({ "shop": { "promo_percent": 15 } }))
            .with_memory(serde_json::json!({ "shop": { "promo_percent": 20 } }))
            .load()
            .unwrap();

        assert_eq!(config.shop.promo_percent, 20);
    }

    #[test]
    fn test_validation_reports_every_problem() {
        let mut config = StoreConfig::default();
        config.shop.promo_code = "  ".to_string();
        config.shop.promo_percent = 0;
        config.logging.level = "loud".to_string();

        let errors = config.validate();
        let keys: Vec<&str> = errors.iter().map(|e| e.key.as_str()).collect();

        assert_eq!(keys, vec!["shop.promo_code", "shop.promo_percent", "logging.level"]);
        assert!(config.ensure_valid().is_err());
    }
}
