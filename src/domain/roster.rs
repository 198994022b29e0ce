// ==========================================
// 保留联赛 - 名单条目
// ==========================================
// 职责: 球队对单个球员在某赛季的保留决策
// 红线: 非 KEEP 条目永远不携带 keeper_round
// ==========================================

use crate::domain::types::KeeperDecision;
use serde::{Deserialize, Serialize};

/// 名单条目（球队-赛季聚合内的一条决策）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// 球员ID（外部球员目录的引用）
    pub player_id: String,

    /// 保留决策
    pub decision: KeeperDecision,

    /// 基准轮次 [1,13]；None 表示需外部先行确定
    #[serde(default)]
    pub base_round: Option<u8>,

    /// 球队指定的同轮次优先级（越小越优先）
    #[serde(default)]
    pub priority: Option<i32>,

    /// 引擎输出: 最终保留轮次
    #[serde(default)]
    pub keeper_round: Option<u8>,
}

impl RosterEntry {
    pub fn new(player_id: impl Into<String>, decision: KeeperDecision) -> Self {
        Self {
            player_id: player_id.into(),
            decision,
            base_round: None,
            priority: None,
            keeper_round: None,
        }
    }

    /// 保留条目快捷构造
    pub fn keep(player_id: impl Into<String>, base_round: u8, priority: Option<i32>) -> Self {
        Self {
            base_round: Some(base_round),
            priority,
            ..Self::new(player_id, KeeperDecision::Keep)
        }
    }

    pub fn is_keep(&self) -> bool {
        self.decision == KeeperDecision::Keep
    }
}
