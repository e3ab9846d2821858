use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use spendboard_core::{SnapshotLimits, DEFAULT_ITEM_LIMIT, DEFAULT_PURCHASE_LIMIT};
use spendboard_domain::PeriodSelector;

use crate::ConfigError;

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: &[&str] = &[
    "locale",
    "currency",
    "color",
    "period",
    "purchase-limit",
    "item-limit",
    "snapshot-dir",
];

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default = "Config::default_period_value")]
    pub default_period: String,
    #[serde(default = "Config::default_purchase_limit")]
    pub purchase_limit: usize,
    #[serde(default = "Config::default_item_limit")]
    pub item_limit: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Snapshot directory used when `stats` is run without `--dir`.
    pub last_snapshot_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_period: Self::default_period_value(),
            purchase_limit: Self::default_purchase_limit(),
            item_limit: Self::default_item_limit(),
            last_snapshot_dir: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "pt-BR".into()
    }

    pub fn default_currency() -> String {
        "BRL".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn default_period_value() -> String {
        "all".into()
    }

    pub fn default_purchase_limit() -> usize {
        DEFAULT_PURCHASE_LIMIT
    }

    pub fn default_item_limit() -> usize {
        DEFAULT_ITEM_LIMIT
    }

    /// Parses the stored default period.
    pub fn period(&self) -> Result<PeriodSelector, ConfigError> {
        self.default_period
            .parse()
            .map_err(|err| ConfigError::InvalidValue(format!("default_period: {err}")))
    }

    pub fn snapshot_limits(&self) -> SnapshotLimits {
        SnapshotLimits {
            purchases: self.purchase_limit,
            items: self.item_limit,
        }
    }

    /// Updates one setting from its CLI key and textual value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "locale" => self.locale = non_empty(key, value)?,
            "currency" => self.currency = non_empty(key, value)?.to_ascii_uppercase(),
            "color" => self.ui_color_enabled = parse_toggle(value)?,
            "period" => {
                let period: PeriodSelector = value
                    .parse()
                    .map_err(|err| ConfigError::InvalidValue(format!("period: {err}")))?;
                self.default_period = period.to_string();
            }
            "purchase-limit" => self.purchase_limit = parse_limit(key, value)?,
            "item-limit" => self.item_limit = parse_limit(key, value)?,
            "snapshot-dir" => {
                self.last_snapshot_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                }
            }
            other => {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown key `{other}`; expected one of {}",
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    /// Key/value pairs for display, matching [`CONFIG_KEYS`].
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("locale", self.locale.clone()),
            ("currency", self.currency.clone()),
            ("color", toggle_label(self.ui_color_enabled).to_string()),
            ("period", self.default_period.clone()),
            ("purchase-limit", self.purchase_limit.to_string()),
            ("item-limit", self.item_limit.to_string()),
            (
                "snapshot-dir",
                self.last_snapshot_dir
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "-".into()),
            ),
        ]
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue(format!("{key} cannot be empty")));
    }
    Ok(value.to_string())
}

fn parse_limit(key: &str, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidValue(format!(
            "{key} must be a positive integer, got `{value}`"
        ))),
    }
}

fn parse_toggle(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(ConfigError::InvalidValue(format!(
            "expected on/off, got `{other}`"
        ))),
    }
}

fn toggle_label(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
