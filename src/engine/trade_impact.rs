// ==========================================
// 保留联赛 - 交易影响试算引擎
// ==========================================
// 职责: 假设交易成立,重算轮次与工资帽,输出前后对比
// 输入: 当前球队输入快照 + 交易场景 + 球员目录
// 输出: TradeImpact（不执行资产转移）
// ==========================================

use crate::domain::player::PlayerCatalog;
use crate::domain::roster::RosterEntry;
use crate::domain::summary::RosterSummary;
use crate::engine::orchestrator::{KeeperOrchestrator, TeamSeasonInput};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::instrument;

/// 交易场景
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TradeScenario {
    /// 送出的球员
    #[serde(default)]
    pub outgoing_player_ids: Vec<String>,

    /// 换入的球员条目（含保留决策与 base_round）
    #[serde(default)]
    pub incoming_entries: Vec<RosterEntry>,

    /// 交易附带的工资帽调整（叠加在现有 trade_delta 上）
    #[serde(default)]
    pub trade_delta: i64,
}

/// 保留轮次变化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundChange {
    pub player_id: String,
    pub before: Option<u8>,
    pub after: Option<u8>,
}

/// 交易影响
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeImpact {
    pub before: RosterSummary,
    pub after: RosterSummary,
    pub cap_used_delta: i64,
    pub cap_effective_delta: i64,
    pub total_fees_delta: f64,
    pub franchise_tags_delta: i64,
    /// 双方名单中都存在、且保留轮次发生变化的球员
    pub rounds_changed: Vec<RoundChange>,
}

// ==========================================
// TradeImpactEngine - 交易影响试算
// ==========================================
pub struct TradeImpactEngine<'a> {
    orchestrator: &'a KeeperOrchestrator,
}

impl<'a> TradeImpactEngine<'a> {
    pub fn new(orchestrator: &'a KeeperOrchestrator) -> Self {
        Self { orchestrator }
    }

    /// 假设交易后的名单
    pub fn apply_scenario(&self, input: &TeamSeasonInput, scenario: &TradeScenario) -> TeamSeasonInput {
        let outgoing: HashSet<&str> = scenario
            .outgoing_player_ids
            .iter()
            .map(|s| s.as_str())
            .collect();

        let mut after = input.clone();
        after.entries.retain(|e| !outgoing.contains(e.player_id.as_str()));
        after.entries.extend(scenario.incoming_entries.iter().cloned());
        after.trade_delta = input.trade_delta.saturating_add(scenario.trade_delta);
        after
    }

    /// 试算交易影响
    #[instrument(skip(self, input, players, scenario), fields(
        team_id = %input.team_id,
        outgoing = scenario.outgoing_player_ids.len(),
        incoming = scenario.incoming_entries.len()
    ))]
    pub fn evaluate(
        &self,
        input: &TeamSeasonInput,
        scenario: &TradeScenario,
        players: &PlayerCatalog,
    ) -> TradeImpact {
        let before = self.orchestrator.settle_team(input, players);
        let after_input = self.apply_scenario(input, scenario);
        let after = self.orchestrator.settle_team(&after_input, players);

        let after_rounds = after.keeper_rounds();
        let rounds_changed = before
            .entries
            .iter()
            .filter(|e| e.is_keep())
            .filter_map(|e| {
                let after_entry = after.entries.iter().find(|a| a.player_id == e.player_id)?;
                let after_round = after_rounds.get(&e.player_id).copied();
                if after_entry.is_keep() && after_round != e.keeper_round {
                    Some(RoundChange {
                        player_id: e.player_id.clone(),
                        before: e.keeper_round,
                        after: after_round,
                    })
                } else {
                    None
                }
            })
            .collect();

        TradeImpact {
            cap_used_delta: after.summary.cap_used - before.summary.cap_used,
            cap_effective_delta: after.summary.cap_effective - before.summary.cap_effective,
            total_fees_delta: after.summary.total_fees - before.summary.total_fees,
            franchise_tags_delta: after.franchise_tags as i64 - before.franchise_tags as i64,
            rounds_changed,
            before: before.summary,
            after: after.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LeagueConfig;
    use crate::domain::player::Player;
    use std::sync::Arc;

    #[test]
    fn test_trading_away_round_one_keeper_frees_franchise_tag() {
        let orchestrator = KeeperOrchestrator::new(Arc::new(LeagueConfig::default()));
        let engine = TradeImpactEngine::new(&orchestrator);

        let mut players = PlayerCatalog::new();
        players.insert("A".into(), Player::new("A", "Alpha", 120_000_000));
        players.insert("B".into(), Player::new("B", "Bravo", 90_000_000));
        players.insert("C".into(), Player::new("C", "Charlie", 20_000_000));
        players.insert("D".into(), Player::new("D", "Delta", 5_000_000));

        let input = TeamSeasonInput::new(
            "T1",
            2026,
            vec![
                RosterEntry::keep("A", 1, Some(1)),
                RosterEntry::keep("B", 1, Some(2)),
                RosterEntry::keep("C", 2, None),
            ],
        );
        let scenario = TradeScenario {
            outgoing_player_ids: vec!["B".to_string()],
            incoming_entries: vec![RosterEntry::keep("D", 9, None)],
            trade_delta: 5_000_000,
        };

        let impact = engine.evaluate(&input, &scenario, &players);

        assert_eq!(impact.before.franchise_tags, 1);
        assert_eq!(impact.after.franchise_tags, 0);
        assert_eq!(impact.franchise_tags_delta, -1);
        assert_eq!(impact.cap_used_delta, -85_000_000);
        assert_eq!(impact.cap_effective_delta, 5_000_000);
        // C: 第 3 轮 → 第 2 轮
        assert_eq!(
            impact.rounds_changed,
            vec![RoundChange {
                player_id: "C".to_string(),
                before: Some(3),
                after: Some(2),
            }]
        );
    }
}
