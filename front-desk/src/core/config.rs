use chrono::NaiveTime;

use crate::utils::time::parse_hhmm;

/// 前台配置 - 运行期的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | (未设置) | 日志目录，设置后按天滚动写文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | CURRENCY | EUR | 货币代码 |
/// | DEFAULT_TAX_RATE | 10 | 餐厅税率 (百分比) |
/// | CHECK_IN_TIME | 14:00 | 标准入住时间 |
/// | CHECK_OUT_TIME | 11:00 | 标准退房时间 |
/// | KEY_CARD_PREFIX | KC | 房卡编码前缀 |
///
/// # 示例
///
/// ```ignore
/// LOG_LEVEL=debug DEFAULT_TAX_RATE=21 front-desk report hotel.json 2026-03
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// ISO 4217 货币代码
    pub currency: String,
    /// 餐厅订单税率 (10 = 10%)
    pub default_tax_rate: f64,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
    pub key_card_prefix: String,
}

const DEFAULT_TAX_RATE: f64 = 10.0;

fn default_check_in_time() -> NaiveTime {
    NaiveTime::from_hms_opt(14, 0, 0).unwrap_or(NaiveTime::MIN)
}

fn default_check_out_time() -> NaiveTime {
    NaiveTime::from_hms_opt(11, 0, 0).unwrap_or(NaiveTime::MIN)
}

impl Config {
    /// Built-in defaults, no environment lookup
    pub fn defaults() -> Self {
        Self {
            log_level: "info".into(),
            log_dir: None,
            environment: "development".into(),
            currency: "EUR".into(),
            default_tax_rate: DEFAULT_TAX_RATE,
            check_in_time: default_check_in_time(),
            check_out_time: default_check_out_time(),
            key_card_prefix: "KC".into(),
        }
    }

    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::defaults();
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            currency: lookup("CURRENCY").unwrap_or(defaults.currency),
            default_tax_rate: lookup("DEFAULT_TAX_RATE")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|r| r.is_finite() && (0.0..=100.0).contains(r))
                .unwrap_or(defaults.default_tax_rate),
            check_in_time: lookup("CHECK_IN_TIME")
                .map(|v| parse_hhmm(&v, defaults.check_in_time))
                .unwrap_or(defaults.check_in_time),
            check_out_time: lookup("CHECK_OUT_TIME")
                .map(|v| parse_hhmm(&v, defaults.check_out_time))
                .unwrap_or(defaults.check_out_time),
            key_card_prefix: lookup("KEY_CARD_PREFIX")
                .filter(|p| !p.is_empty())
                .unwrap_or(defaults.key_card_prefix),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.default_tax_rate, 10.0);
        assert_eq!(config.check_in_time, NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(config.check_out_time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert!(config.is_development());
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ENVIRONMENT", "production"),
            ("DEFAULT_TAX_RATE", "21"),
            ("CHECK_IN_TIME", "15:30"),
            ("KEY_CARD_PREFIX", "RC"),
            ("LOG_DIR", "/tmp/logs"),
        ]));
        assert!(config.is_production());
        assert_eq!(config.default_tax_rate, 21.0);
        assert_eq!(config.check_in_time, NaiveTime::from_hms_opt(15, 30, 0).unwrap());
        assert_eq!(config.key_card_prefix, "RC");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/logs"));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("DEFAULT_TAX_RATE", "-3"),
            ("CHECK_OUT_TIME", "noon"),
            ("KEY_CARD_PREFIX", ""),
        ]));
        assert_eq!(config.default_tax_rate, 10.0);
        assert_eq!(config.check_out_time, NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert_eq!(config.key_card_prefix, "KC");
    }
}
