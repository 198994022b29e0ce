// ==========================================
// 保留联赛 - 核心库
// ==========================================
// 系统定位: 梦幻篮球保留联赛的保留轮次分配与工资帽结算
// 边界: 不含持久化、网络、鉴权、界面,均由调用方负责
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 联赛配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DraftedPlayer, KeeperDecision, Player, PlayerCatalog, RosterEntry, RosterSummary,
    RosterViolation, Severity, MAX_ROUND, MIN_ROUND,
};

// 引擎
pub use engine::{
    BaseRoundResolver, KeeperOrchestrator, RosterValidator, RoundAssignmentEngine,
    SettlementEngine, TradeImpactEngine,
};

// 配置
pub use config::{ConfigManager, LeagueConfig};

// API
pub use api::{ApiError, ApiResult, KeeperApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "keeper-league";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
