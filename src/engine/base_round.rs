// ==========================================
// 保留联赛 - 基准轮次推导
// ==========================================
// 职责: 由选秀历史推导 base_round
// 规则:
// - 上季保留于第 K 轮 → max(K - 1, 1)
// - 上季选秀于第 R 轮 → R
// - 新秀选秀第 R 轮 → 联赛映射表 rookie_base_rounds[R]（缺失则需外部确定）
// - 未被选中 → 需外部确定
// ==========================================

use crate::config::LeagueConfig;
use crate::domain::roster::RosterEntry;
use crate::domain::types::{MAX_ROUND, MIN_ROUND};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// 球员的选秀历史
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DraftHistory {
    PriorKeeper { round: u8 },
    Drafted { round: u8 },
    RookieDraft { round: u8 },
    Undrafted,
}

// ==========================================
// BaseRoundResolver - 基准轮次推导
// ==========================================
pub struct BaseRoundResolver<'a> {
    config: &'a LeagueConfig,
}

impl<'a> BaseRoundResolver<'a> {
    pub fn new(config: &'a LeagueConfig) -> Self {
        Self { config }
    }

    /// 推导单个球员的 base_round
    ///
    /// # 返回
    /// - Some(round): round ∈ [1,13]
    /// - None: 需外部先行确定
    pub fn resolve(&self, history: DraftHistory) -> Option<u8> {
        match history {
            DraftHistory::PriorKeeper { round } => {
                Some(round.saturating_sub(1).clamp(MIN_ROUND, MAX_ROUND))
            }
            DraftHistory::Drafted { round } => Some(round.clamp(MIN_ROUND, MAX_ROUND)),
            DraftHistory::RookieDraft { round } => self.config.rookie_base_rounds.get(&round).copied(),
            DraftHistory::Undrafted => None,
        }
    }

    /// 为缺少 base_round 的条目补齐
    ///
    /// 已显式给出的 base_round 不会被覆盖；历史未知的条目保持原样。
    pub fn resolve_entries(
        &self,
        entries: &[RosterEntry],
        histories: &HashMap<String, DraftHistory>,
    ) -> Vec<RosterEntry> {
        entries
            .iter()
            .map(|entry| {
                let mut entry = entry.clone();
                if entry.base_round.is_none() {
                    if let Some(history) = histories.get(&entry.player_id) {
                        entry.base_round = self.resolve(*history);
                        debug!(
                            player_id = %entry.player_id,
                            history = ?history,
                            base_round = ?entry.base_round,
                            "base_round 推导"
                        );
                    }
                }
                entry
            })
            .collect()
    }
}
