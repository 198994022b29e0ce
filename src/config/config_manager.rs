// ==========================================
// 保留联赛 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、按联赛覆写
// 存储: JSON 文件 {"global": {..}, "leagues": {"<league_id>": {..}}}
// 解析顺序: 联赛 → 全局 → LeagueConfig::default()
// ==========================================

use crate::config::error::ConfigError;
use crate::config::league_config::LeagueConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

// ==========================================
// ConfigScope - 配置作用域
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigScope {
    Global,                      // 全局
    League { league_id: String }, // 单个联赛
}

/// 配置文件的持久化形态
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigStore {
    #[serde(default)]
    global: BTreeMap<String, Value>,
    #[serde(default)]
    leagues: BTreeMap<String, BTreeMap<String, Value>>,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    store: Mutex<ConfigStore>,
}

impl ConfigManager {
    /// 创建空配置（全部使用默认值）
    pub fn new() -> Self {
        Self {
            store: Mutex::new(ConfigStore::default()),
        }
    }

    /// 从 JSON 文件加载
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let store: ConfigStore = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            global_keys = store.global.len(),
            leagues = store.leagues.len(),
            "配置文件加载完成"
        );
        Ok(Self {
            store: Mutex::new(store),
        })
    }

    /// 默认配置文件路径: <config_dir>/keeper-league/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keeper-league").join("config.json"))
    }

    /// 从默认路径加载；文件不存在时返回空配置
    pub fn load_default() -> Result<Self, ConfigError> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                debug!("未找到默认配置文件,使用内置默认值");
                Ok(Self::new())
            }
        }
    }

    /// 写回 JSON 文件
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let store = self.lock()?;
        let raw = serde_json::to_string_pretty(&*store)?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, raw)?;
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ConfigStore>, ConfigError> {
        self.store
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))
    }

    // ==========================================
    // 读写
    // ==========================================

    /// 写入配置值
    pub fn set(&self, scope: &ConfigScope, key: &str, value: Value) -> Result<(), ConfigError> {
        let mut store = self.lock()?;
        match scope {
            ConfigScope::Global => {
                store.global.insert(key.to_string(), value);
            }
            ConfigScope::League { league_id } => {
                store
                    .leagues
                    .entry(league_id.clone())
                    .or_default()
                    .insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// 读取配置值（联赛作用域未命中时回落到全局）
    pub fn get_value(&self, scope: &ConfigScope, key: &str) -> Result<Option<Value>, ConfigError> {
        let store = self.lock()?;
        if let ConfigScope::League { league_id } = scope {
            if let Some(value) = store.leagues.get(league_id).and_then(|kv| kv.get(key)) {
                return Ok(Some(value.clone()));
            }
        }
        Ok(store.global.get(key).cloned())
    }

    /// 解析某联赛的完整配置
    ///
    /// # 参数
    /// - league_id: None 表示只使用全局配置
    pub fn league_config(&self, league_id: Option<&str>) -> Result<LeagueConfig, ConfigError> {
        let scope = match league_id {
            Some(id) => ConfigScope::League {
                league_id: id.to_string(),
            },
            None => ConfigScope::Global,
        };

        let mut config = LeagueConfig::default();

        if let Some(v) = self.get_value(&scope, config_keys::BASE_CAP)? {
            config.base_cap = parse_i64(config_keys::BASE_CAP, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::PENALTY_START)? {
            config.penalty_start = parse_i64(config_keys::PENALTY_START, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::PENALTY_RATE_PER_M)? {
            config.penalty_rate_per_m = parse_f64(config_keys::PENALTY_RATE_PER_M, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::REDSHIRT_FEE)? {
            config.redshirt_fee = parse_f64(config_keys::REDSHIRT_FEE, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::FRANCHISE_TAG_FEE)? {
            config.franchise_tag_fee = parse_f64(config_keys::FRANCHISE_TAG_FEE, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::CAP_FLOOR)? {
            config.cap_floor = parse_i64(config_keys::CAP_FLOOR, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::CAP_CEILING)? {
            config.cap_ceiling = parse_i64(config_keys::CAP_CEILING, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::FIRST_APRON)? {
            config.first_apron = parse_i64(config_keys::FIRST_APRON, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::FIRST_APRON_FEE)? {
            config.first_apron_fee = parse_f64(config_keys::FIRST_APRON_FEE, &v)?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::MAX_KEEPERS)? {
            let max = parse_i64(config_keys::MAX_KEEPERS, &v)?;
            config.max_keepers = usize::try_from(max).map_err(|_| ConfigError::InvalidValue {
                key: config_keys::MAX_KEEPERS.to_string(),
                value: v.to_string(),
            })?;
        }
        if let Some(v) = self.get_value(&scope, config_keys::ROOKIE_BASE_ROUNDS)? {
            config.rookie_base_rounds = parse_json(config_keys::ROOKIE_BASE_ROUNDS, v)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// 获取已解析配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 结算结果落库时记录当时的配置,保证可审计
    pub fn get_config_snapshot(&self, league_id: Option<&str>) -> Result<String, ConfigError> {
        let config = self.league_config(league_id)?;
        Ok(serde_json::to_string(&config)?)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 值解析（兼容数字与字符串两种写法）
// ==========================================

fn invalid(key: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_i64(key: &str, value: &Value) -> Result<i64, ConfigError> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| invalid(key, value)),
        Value::String(s) => s
            .trim()
            .replace('_', "")
            .parse::<i64>()
            .map_err(|_| invalid(key, value)),
        _ => Err(invalid(key, value)),
    }
}

fn parse_f64(key: &str, value: &Value) -> Result<f64, ConfigError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| invalid(key, value)),
        Value::String(s) => s.trim().parse::<f64>().map_err(|_| invalid(key, value)),
        _ => Err(invalid(key, value)),
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(key: &str, value: Value) -> Result<T, ConfigError> {
    let value = match value {
        Value::String(s) => serde_json::from_str(&s).map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: s.clone(),
        })?,
        other => other,
    };
    serde_json::from_value(value.clone()).map_err(|_| invalid(key, &value))
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 工资帽
    pub const BASE_CAP: &str = "base_cap";
    pub const CAP_FLOOR: &str = "cap_floor";
    pub const CAP_CEILING: &str = "cap_ceiling";

    // 罚金与费用
    pub const PENALTY_START: &str = "penalty_start";
    pub const PENALTY_RATE_PER_M: &str = "penalty_rate_per_m";
    pub const FIRST_APRON: &str = "first_apron";
    pub const FIRST_APRON_FEE: &str = "first_apron_fee";
    pub const REDSHIRT_FEE: &str = "redshirt_fee";
    pub const FRANCHISE_TAG_FEE: &str = "franchise_tag_fee";

    // 名单
    pub const MAX_KEEPERS: &str = "max_keepers";
    pub const ROOKIE_BASE_ROUNDS: &str = "rookie_base_rounds";
}
