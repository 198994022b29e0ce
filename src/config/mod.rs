// ==========================================
// 保留联赛 - 配置层
// ==========================================
// 职责: 联赛配置管理,支持全局/联赛两级覆写
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod error;
pub mod league_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager, ConfigScope};
pub use error::ConfigError;
pub use league_config::LeagueConfig;
