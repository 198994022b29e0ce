// ==========================================
// 保留联赛 - 引擎层
// ==========================================
// 职责: 实现业务规则引擎,不做 I/O
// 红线: 所有引擎无状态,同一输入必得同一输出
// ==========================================

pub mod base_round;
pub mod orchestrator;
pub mod roster_validation;
pub mod round_assignment;
pub mod settlement;
pub mod trade_impact;

// 重导出核心引擎
pub use base_round::{BaseRoundResolver, DraftHistory};
pub use orchestrator::{KeeperOrchestrator, TeamSeasonInput, TeamSettlement};
pub use roster_validation::{RosterValidator, DEFAULT_MAX_KEEPERS};
pub use round_assignment::{RoundAssignment, RoundAssignmentEngine};
pub use settlement::{SettlementEngine, SettlementParams};
pub use trade_impact::{RoundChange, TradeImpact, TradeImpactEngine, TradeScenario};
