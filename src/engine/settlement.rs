// ==========================================
// 保留联赛 - 工资帽与费用结算引擎
// ==========================================
// 职责: 汇总保留+已选球员工资,计算有效工资帽、罚金与各类费用
// 输入: 名单条目 + 球员目录 + 已选球员 + 交易调整 + 联赛配置
// 输出: RosterSummary
// 红线: 纯函数,不抛错；缺失工资按 0 计入（记录审计）
// ==========================================

use crate::config::LeagueConfig;
use crate::domain::player::{DraftedPlayer, PlayerCatalog};
use crate::domain::roster::RosterEntry;
use crate::domain::summary::RosterSummary;
use crate::domain::types::KeeperDecision;
use tracing::{instrument, warn};

const ONE_MILLION: i64 = 1_000_000;

/// 结算输入
#[derive(Debug, Clone, Copy)]
pub struct SettlementParams<'a> {
    pub entries: &'a [RosterEntry],
    pub players: &'a PlayerCatalog,
    pub drafted_players: &'a [DraftedPlayer],
    pub trade_delta: i64,
    /// 轮次分配引擎输出的特许标签数
    pub franchise_tags: u32,
    pub config: &'a LeagueConfig,
}

// ==========================================
// SettlementEngine - 结算引擎
// ==========================================
pub struct SettlementEngine;

impl SettlementEngine {
    pub fn new() -> Self {
        Self
    }

    /// 计算名单摘要
    ///
    /// 顺序:
    /// 1) cap_used = KEEP 工资 + 已选球员工资（红衫/海外不计）
    /// 2) cap_effective = clamp(base_cap + trade_delta, cap_floor, cap_ceiling)
    /// 3) over_by_m = ceil(max(0, cap_used - penalty_start) / 1M); penalty = over_by_m * rate
    /// 4) franchise_tag_dues = tags * fee
    /// 5) redshirt_dues = REDSHIRT 人数 * fee
    /// 6) first_apron_fee = cap_used > first_apron ? 固定费用 : 0
    /// 7) total_fees = 以上之和（activation_dues 恒为 0）
    #[instrument(skip(self, params), fields(
        entries_count = params.entries.len(),
        drafted_count = params.drafted_players.len(),
        trade_delta = params.trade_delta,
        franchise_tags = params.franchise_tags
    ))]
    pub fn compute_summary(&self, params: SettlementParams<'_>) -> RosterSummary {
        let config = params.config;

        // 1. 工资帽占用
        let mut keepers_count = 0usize;
        let mut redshirt_count = 0usize;
        let mut int_stash_count = 0usize;
        let mut keeper_salary = 0i64;
        let mut unpriced_player_ids = Vec::new();

        for entry in params.entries {
            match entry.decision {
                KeeperDecision::Keep => {
                    keepers_count += 1;
                    match params.players.get(&entry.player_id) {
                        Some(player) => keeper_salary += player.salary,
                        None => {
                            warn!(player_id = %entry.player_id, "KEEP 球员缺少工资记录,按 0 计入");
                            unpriced_player_ids.push(entry.player_id.clone());
                        }
                    }
                }
                KeeperDecision::Redshirt => redshirt_count += 1,
                KeeperDecision::IntStash => int_stash_count += 1,
                KeeperDecision::Drop => {}
            }
        }

        let drafted_salary: i64 = params.drafted_players.iter().map(|p| p.salary).sum();
        let cap_used = keeper_salary + drafted_salary;

        // 2. 有效工资帽（交易调整后截断）
        let cap_effective = Self::effective_cap(config, params.trade_delta);

        // 3. 二级线罚金
        let over_by = (cap_used - config.penalty_start).max(0);
        let over_by_m = Self::ceil_millions(over_by);
        let penalty_dues = over_by_m as f64 * config.penalty_rate_per_m;

        // 4~6. 各类费用
        let franchise_tag_dues = params.franchise_tags as f64 * config.franchise_tag_fee;
        let redshirt_dues = redshirt_count as f64 * config.redshirt_fee;
        let first_apron_fee = if cap_used > config.first_apron {
            config.first_apron_fee
        } else {
            0.0
        };
        let activation_dues = 0.0;

        // 7. 合计
        let total_fees =
            penalty_dues + franchise_tag_dues + redshirt_dues + first_apron_fee + activation_dues;

        RosterSummary {
            keepers_count,
            drafted_count: params.drafted_players.len(),
            redshirt_count,
            int_stash_count,
            cap_used,
            cap_base: config.base_cap,
            trade_delta: params.trade_delta,
            cap_effective,
            over_by,
            over_by_m,
            penalty_dues,
            franchise_tags: params.franchise_tags,
            franchise_tag_dues,
            redshirt_dues,
            first_apron_fee,
            activation_dues,
            total_fees,
            unpriced_player_ids,
        }
    }

    /// 有效工资帽: base_cap + trade_delta,截断到 [cap_floor, cap_ceiling]
    pub fn effective_cap(config: &LeagueConfig, trade_delta: i64) -> i64 {
        config
            .base_cap
            .saturating_add(trade_delta)
            .clamp(config.cap_floor, config.cap_ceiling)
    }

    /// 向上取整到百万（非负输入）
    fn ceil_millions(amount: i64) -> i64 {
        if amount <= 0 {
            0
        } else {
            amount / ONE_MILLION + i64::from(amount % ONE_MILLION != 0)
        }
    }
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Player;

    fn catalog(players: &[(&str, i64)]) -> PlayerCatalog {
        players
            .iter()
            .map(|(id, salary)| (id.to_string(), Player::new(*id, *id, *salary)))
            .collect()
    }

    fn keep(id: &str) -> RosterEntry {
        RosterEntry::keep(id, 5, None)
    }

    #[test]
    fn test_ceil_millions() {
        assert_eq!(SettlementEngine::ceil_millions(0), 0);
        assert_eq!(SettlementEngine::ceil_millions(1), 1);
        assert_eq!(SettlementEngine::ceil_millions(1_000_000), 1);
        assert_eq!(SettlementEngine::ceil_millions(1_000_001), 2);
        assert_eq!(SettlementEngine::ceil_millions(5_000_000), 5);
    }

    #[test]
    fn test_reference_fee_breakdown() {
        // 场景: 230M 保留工资,1 个特许标签
        let engine = SettlementEngine::new();
        let config = LeagueConfig::default();
        let players = catalog(&[("A", 130_000_000), ("B", 100_000_000)]);
        let entries = vec![keep("A"), keep("B")];

        let summary = engine.compute_summary(SettlementParams {
            entries: &entries,
            players: &players,
            drafted_players: &[],
            trade_delta: 0,
            franchise_tags: 1,
            config: &config,
        });

        assert_eq!(summary.cap_used, 230_000_000);
        assert_eq!(summary.over_by_m, 5);
        assert_eq!(summary.penalty_dues, 10.0);
        assert_eq!(summary.franchise_tag_dues, 15.0);
        assert_eq!(summary.first_apron_fee, 50.0);
        assert_eq!(summary.redshirt_dues, 0.0);
        assert_eq!(summary.activation_dues, 0.0);
        assert_eq!(summary.total_fees, 75.0);
    }

    #[test]
    fn test_effective_cap_is_clamped() {
        let config = LeagueConfig::default();
        assert_eq!(SettlementEngine::effective_cap(&config, 100_000_000), 255_000_000);
        assert_eq!(SettlementEngine::effective_cap(&config, -100_000_000), 170_000_000);
        assert_eq!(SettlementEngine::effective_cap(&config, 10_000_000), 235_000_000);
        assert_eq!(SettlementEngine::effective_cap(&config, i64::MAX), 255_000_000);
    }

    #[test]
    fn test_missing_salary_counts_as_zero() {
        let engine = SettlementEngine::new();
        let config = LeagueConfig::default();
        let players = catalog(&[("A", 10_000_000)]);
        let entries = vec![keep("A"), keep("GHOST")];

        let summary = engine.compute_summary(SettlementParams {
            entries: &entries,
            players: &players,
            drafted_players: &[],
            trade_delta: 0,
            franchise_tags: 0,
            config: &config,
        });

        assert_eq!(summary.cap_used, 10_000_000);
        assert_eq!(summary.keepers_count, 2);
        assert_eq!(summary.unpriced_player_ids, vec!["GHOST".to_string()]);
        assert_eq!(summary.total_fees, 0.0);
    }
}
