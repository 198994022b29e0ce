// ==========================================
// 保留联赛 - 引擎编排器
// ==========================================
// 用途: 按单向数据流协调各引擎
// 流程: 基准轮次推导 → 轮次分配 → 工资帽结算 → 名单校验
// 说明: 以球队为单位整体重算,不做增量修补
// ==========================================

use crate::config::LeagueConfig;
use crate::domain::player::{DraftedPlayer, PlayerCatalog};
use crate::domain::roster::RosterEntry;
use crate::domain::summary::{RosterSummary, RosterViolation};
use crate::engine::base_round::{BaseRoundResolver, DraftHistory};
use crate::engine::round_assignment::RoundAssignmentEngine;
use crate::engine::roster_validation::RosterValidator;
use crate::engine::settlement::{SettlementEngine, SettlementParams};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// TeamSeasonInput - 球队赛季输入快照
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamSeasonInput {
    pub team_id: String,
    pub season: i32,
    pub entries: Vec<RosterEntry>,

    /// 缺少 base_round 时用于推导
    #[serde(default)]
    pub draft_histories: HashMap<String, DraftHistory>,

    /// 现场选秀已选中球员
    #[serde(default)]
    pub drafted_players: Vec<DraftedPlayer>,

    #[serde(default)]
    pub trade_delta: i64,
}

impl TeamSeasonInput {
    pub fn new(team_id: impl Into<String>, season: i32, entries: Vec<RosterEntry>) -> Self {
        Self {
            team_id: team_id.into(),
            season,
            entries,
            ..Self::default()
        }
    }
}

// ==========================================
// TeamSettlement - 结算结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSettlement {
    pub settlement_id: Uuid,
    pub team_id: String,
    pub season: i32,
    pub computed_at: DateTime<Utc>,

    // 轮次分配输出
    pub entries: Vec<RosterEntry>,
    pub franchise_tags: u32,

    // 结算输出
    pub summary: RosterSummary,

    // 校验输出
    pub violations: Vec<RosterViolation>,
}

impl TeamSettlement {
    /// 无 error 级发现即可提交
    pub fn is_submittable(&self) -> bool {
        !self.violations.iter().any(|v| v.is_error())
    }

    pub fn errors(&self) -> Vec<RosterViolation> {
        self.violations.iter().filter(|v| v.is_error()).cloned().collect()
    }

    /// player_id → keeper_round
    pub fn keeper_rounds(&self) -> HashMap<String, u8> {
        self.entries
            .iter()
            .filter_map(|e| e.keeper_round.map(|r| (e.player_id.clone(), r)))
            .collect()
    }
}

// ==========================================
// KeeperOrchestrator - 引擎编排器
// ==========================================
pub struct KeeperOrchestrator {
    config: Arc<LeagueConfig>,
    rounds: RoundAssignmentEngine,
    settlement: SettlementEngine,
    validator: RosterValidator,
}

impl KeeperOrchestrator {
    pub fn new(config: Arc<LeagueConfig>) -> Self {
        Self {
            config,
            rounds: RoundAssignmentEngine::new(),
            settlement: SettlementEngine::new(),
            validator: RosterValidator::new(),
        }
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    /// 单支球队完整结算
    #[instrument(skip(self, input, players), fields(
        team_id = %input.team_id,
        season = input.season,
        entries_count = input.entries.len()
    ))]
    pub fn settle_team(&self, input: &TeamSeasonInput, players: &PlayerCatalog) -> TeamSettlement {
        // 1. 基准轮次推导
        let resolver = BaseRoundResolver::new(&self.config);
        let entries = resolver.resolve_entries(&input.entries, &input.draft_histories);

        // 2. 轮次分配
        let assignment = self.rounds.assign_rounds(&entries);

        // 3. 工资帽结算
        let summary = self.settlement.compute_summary(SettlementParams {
            entries: &assignment.entries,
            players,
            drafted_players: &input.drafted_players,
            trade_delta: input.trade_delta,
            franchise_tags: assignment.franchise_tags,
            config: &self.config,
        });

        // 4. 名单校验
        let violations =
            self.validator
                .validate_roster(&assignment.entries, players, self.config.max_keepers);

        info!(
            franchise_tags = assignment.franchise_tags,
            cap_used = summary.cap_used,
            total_fees = summary.total_fees,
            violations_count = violations.len(),
            "球队结算完成"
        );

        TeamSettlement {
            settlement_id: Uuid::new_v4(),
            team_id: input.team_id.clone(),
            season: input.season,
            computed_at: Utc::now(),
            entries: assignment.entries,
            franchise_tags: assignment.franchise_tags,
            summary,
            violations,
        }
    }

    /// 多支球队各自独立结算（球队之间无共享状态）
    pub fn settle_league(
        &self,
        teams: &[TeamSeasonInput],
        players: &PlayerCatalog,
    ) -> Vec<TeamSettlement> {
        teams
            .iter()
            .map(|team| self.settle_team(team, players))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Player;
    use crate::domain::types::KeeperDecision;

    #[test]
    fn test_pipeline_resolves_history_before_assignment() {
        let orchestrator = KeeperOrchestrator::new(Arc::new(LeagueConfig::default()));
        let mut players = PlayerCatalog::new();
        players.insert("A".into(), Player::new("A", "Alpha", 40_000_000));
        players.insert("B".into(), Player::new("B", "Bravo", 30_000_000));

        let mut input = TeamSeasonInput::new(
            "T1",
            2026,
            vec![
                RosterEntry::new("A", KeeperDecision::Keep),
                RosterEntry::keep("B", 3, None),
            ],
        );
        input
            .draft_histories
            .insert("A".to_string(), DraftHistory::PriorKeeper { round: 4 });

        let settlement = orchestrator.settle_team(&input, &players);

        // A 推导出 base_round=3,与 B 冲突; 输入序靠前者先占位
        let rounds = settlement.keeper_rounds();
        assert_eq!(rounds.get("A"), Some(&3));
        assert_eq!(rounds.get("B"), Some(&2));
        assert_eq!(settlement.summary.cap_used, 70_000_000);
        assert!(settlement.is_submittable());
    }

    #[test]
    fn test_unresolved_keeper_produces_warning_only() {
        let orchestrator = KeeperOrchestrator::new(Arc::new(LeagueConfig::default()));
        let input = TeamSeasonInput::new("T1", 2026, vec![RosterEntry::new("X", KeeperDecision::Keep)]);

        let settlement = orchestrator.settle_team(&input, &PlayerCatalog::new());

        assert_eq!(settlement.violations.len(), 1);
        assert!(!settlement.violations[0].is_error());
        assert!(settlement.is_submittable());
    }
}
