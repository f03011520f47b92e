//! Configuration types for the overtime engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the JSON configuration file. Missing keys fall
//! back to defaults field by field, so a partial file is always usable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Overtime-pay section of the configuration.
///
/// The compensatory-workday rate is intentionally absent: it is a fixed
/// 1.5 constant, not a configurable value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimePayConfig {
    /// Whether pay calculation is enabled at all.
    #[serde(default)]
    pub enabled: bool,
    /// Hourly overtime wage in yuan.
    #[serde(default = "default_hourly_wage")]
    pub hourly_wage: Decimal,
    /// Rate multiplier for workday overtime.
    #[serde(default = "default_weekday_rate")]
    pub weekday_rate: Decimal,
    /// Rate multiplier for rest-day overtime.
    #[serde(default = "default_weekend_rate")]
    pub weekend_rate: Decimal,
    /// Rate multiplier for statutory-holiday overtime.
    #[serde(default = "default_holiday_rate")]
    pub holiday_rate: Decimal,
    /// Leave types whose hours are deducted from rest-day balance.
    #[serde(default = "default_deduct_types")]
    pub deduct_types: Vec<String>,
}

impl Default for OvertimePayConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            hourly_wage: default_hourly_wage(),
            weekday_rate: default_weekday_rate(),
            weekend_rate: default_weekend_rate(),
            holiday_rate: default_holiday_rate(),
            deduct_types: default_deduct_types(),
        }
    }
}

impl OvertimePayConfig {
    /// Returns true when the given leave type consumes rest-day hours.
    pub fn deducts(&self, leave_type: &str) -> bool {
        self.deduct_types.iter().any(|t| t == leave_type)
    }
}

/// The complete engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// The selectable leave types.
    #[serde(default = "default_leave_types")]
    pub leave_types: Vec<String>,
    /// Whether the built-in holiday table is loaded.
    #[serde(default = "default_true")]
    pub use_builtin_holiday: bool,
    /// Default worked hours pre-filled in submission forms.
    #[serde(default = "default_hours")]
    pub default_hours: Decimal,
    /// Port for the embedded HTTP service.
    #[serde(default = "default_web_port")]
    pub web_port: u16,
    /// Overtime-pay settings.
    #[serde(default)]
    pub overtime_pay: OvertimePayConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            leave_types: default_leave_types(),
            use_builtin_holiday: true,
            default_hours: default_hours(),
            web_port: default_web_port(),
            overtime_pay: OvertimePayConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Returns true when the given leave type is selectable.
    pub fn is_known_leave_type(&self, leave_type: &str) -> bool {
        self.leave_types.iter().any(|t| t == leave_type)
    }
}

fn default_hourly_wage() -> Decimal {
    Decimal::new(50, 0)
}

fn default_weekday_rate() -> Decimal {
    Decimal::new(15, 1)
}

fn default_weekend_rate() -> Decimal {
    Decimal::new(2, 0)
}

fn default_holiday_rate() -> Decimal {
    Decimal::new(3, 0)
}

fn default_deduct_types() -> Vec<String> {
    vec!["事假".to_string()]
}

fn default_leave_types() -> Vec<String> {
    ["事假", "病假", "年假", "婚假", "产假"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

fn default_hours() -> Decimal {
    Decimal::new(8, 0)
}

fn default_web_port() -> u16 {
    8080
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_values() {
        let config = EngineConfig::default();
        assert!(!config.overtime_pay.enabled);
        assert_eq!(config.overtime_pay.hourly_wage, dec("50"));
        assert_eq!(config.overtime_pay.weekday_rate, dec("1.5"));
        assert_eq!(config.overtime_pay.weekend_rate, dec("2"));
        assert_eq!(config.overtime_pay.holiday_rate, dec("3"));
        assert_eq!(config.overtime_pay.deduct_types, vec!["事假"]);
        assert_eq!(config.leave_types.len(), 5);
        assert!(config.use_builtin_holiday);
        assert_eq!(config.web_port, 8080);
    }

    #[test]
    fn test_partial_json_fills_missing_keys() {
        let json = r#"{
            "overtime_pay": {
                "enabled": true,
                "hourly_wage": "60"
            }
        }"#;

        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert!(config.overtime_pay.enabled);
        assert_eq!(config.overtime_pay.hourly_wage, dec("60"));
        // Untouched keys keep their defaults.
        assert_eq!(config.overtime_pay.weekend_rate, dec("2"));
        assert_eq!(config.leave_types.len(), 5);
    }

    #[test]
    fn test_empty_object_is_all_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_deducts() {
        let mut pay = OvertimePayConfig::default();
        assert!(pay.deducts("事假"));
        assert!(!pay.deducts("病假"));

        pay.deduct_types.push("病假".to_string());
        assert!(pay.deducts("病假"));
    }

    #[test]
    fn test_is_known_leave_type() {
        let config = EngineConfig::default();
        assert!(config.is_known_leave_type("婚假"));
        assert!(!config.is_known_leave_type("调岗假"));
    }

    #[test]
    fn test_round_trip() {
        let config = EngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
