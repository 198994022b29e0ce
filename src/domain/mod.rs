// ==========================================
// 保留联赛 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含 I/O,不含引擎逻辑
// ==========================================

pub mod player;
pub mod roster;
pub mod summary;
pub mod types;

// 重导出核心类型
pub use player::{DraftedPlayer, Player, PlayerCatalog, PlayerRosterInfo, RookieDraftInfo};
pub use roster::RosterEntry;
pub use summary::{RosterSummary, RosterViolation};
pub use types::{KeeperDecision, Severity, MAX_ROUND, MIN_ROUND};
