// ==========================================
// 保留联赛 - 名单校验器
// ==========================================
// 职责: 对单支球队名单执行固定顺序的规则检查
// 输入: 名单条目 + 球员目录 + 保留上限
// 输出: Vec<RosterViolation>（error 阻断提交, warning 仅提示）
// 红线: 不修改输入,不抛错；可在轮次分配前后任意调用
// ==========================================

use crate::domain::player::PlayerCatalog;
use crate::domain::roster::RosterEntry;
use crate::domain::summary::RosterViolation;
use crate::domain::types::KeeperDecision;
use std::collections::BTreeMap;
use tracing::debug;

/// 默认保留上限
pub const DEFAULT_MAX_KEEPERS: usize = 8;

// ==========================================
// RosterValidator - 名单校验器
// ==========================================
pub struct RosterValidator;

impl RosterValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验名单
    ///
    /// 检查顺序（即输出顺序）:
    /// 1) KEEP 人数 > max_keepers → error
    /// 2) REDSHIRT: 有新秀选秀信息且不具红衫资格 → error; 否则非新秀 → error
    /// 3) INT_STASH: 不具海外资格 → error
    /// 4) 同一 keeper_round 被多个 KEEP 占用 → 每个冲突轮次一条 error
    /// 5) KEEP 缺少 keeper_round → 每条一个 warning
    pub fn validate_roster(
        &self,
        entries: &[RosterEntry],
        players: &PlayerCatalog,
        max_keepers: usize,
    ) -> Vec<RosterViolation> {
        let mut violations = Vec::new();

        self.check_keeper_count(entries, max_keepers, &mut violations);
        self.check_redshirts(entries, players, &mut violations);
        self.check_int_stash(entries, players, &mut violations);
        self.check_round_collisions(entries, &mut violations);
        self.check_missing_rounds(entries, &mut violations);

        debug!(
            entries_count = entries.len(),
            violations_count = violations.len(),
            "名单校验完成"
        );
        violations
    }

    fn check_keeper_count(
        &self,
        entries: &[RosterEntry],
        max_keepers: usize,
        violations: &mut Vec<RosterViolation>,
    ) {
        let keepers = entries.iter().filter(|e| e.is_keep()).count();
        if keepers > max_keepers {
            violations.push(RosterViolation::error(
                "keepers",
                format!("保留人数超限: {} 人（上限 {} 人）", keepers, max_keepers),
                None,
            ));
        }
    }

    fn check_redshirts(
        &self,
        entries: &[RosterEntry],
        players: &PlayerCatalog,
        violations: &mut Vec<RosterViolation>,
    ) {
        for entry in entries
            .iter()
            .filter(|e| e.decision == KeeperDecision::Redshirt)
        {
            let Some(player) = players.get(&entry.player_id) else {
                violations.push(RosterViolation::error(
                    "redshirt",
                    format!("未知球员 {} 不能红衫", entry.player_id),
                    Some(&entry.player_id),
                ));
                continue;
            };

            let ineligible = player
                .rookie_draft_info()
                .map(|info| !info.redshirt_eligible)
                .unwrap_or(false);

            if ineligible {
                violations.push(RosterViolation::error(
                    "redshirt",
                    format!("{} 不具备红衫资格", player.name),
                    Some(&entry.player_id),
                ));
            } else if !player.roster.is_rookie {
                violations.push(RosterViolation::error(
                    "redshirt",
                    format!("{} 不是新秀,不能红衫", player.name),
                    Some(&entry.player_id),
                ));
            }
        }
    }

    fn check_int_stash(
        &self,
        entries: &[RosterEntry],
        players: &PlayerCatalog,
        violations: &mut Vec<RosterViolation>,
    ) {
        for entry in entries
            .iter()
            .filter(|e| e.decision == KeeperDecision::IntStash)
        {
            match players.get(&entry.player_id) {
                None => violations.push(RosterViolation::error(
                    "int_stash",
                    format!("未知球员 {} 不能海外囤积", entry.player_id),
                    Some(&entry.player_id),
                )),
                Some(player) if !player.roster.int_eligible => {
                    violations.push(RosterViolation::error(
                        "int_stash",
                        format!("{} 不具备海外囤积资格", player.name),
                        Some(&entry.player_id),
                    ))
                }
                Some(_) => {}
            }
        }
    }

    fn check_round_collisions(&self, entries: &[RosterEntry], violations: &mut Vec<RosterViolation>) {
        let mut by_round: BTreeMap<u8, usize> = BTreeMap::new();
        for round in entries
            .iter()
            .filter(|e| e.is_keep())
            .filter_map(|e| e.keeper_round)
        {
            *by_round.entry(round).or_insert(0) += 1;
        }

        for (round, count) in by_round.into_iter().filter(|(_, count)| *count > 1) {
            violations.push(RosterViolation::error(
                "keeper_round",
                format!("第 {} 轮冲突: {} 名保留球员", round, count),
                None,
            ));
        }
    }

    fn check_missing_rounds(&self, entries: &[RosterEntry], violations: &mut Vec<RosterViolation>) {
        for entry in entries
            .iter()
            .filter(|e| e.is_keep() && e.keeper_round.is_none())
        {
            violations.push(RosterViolation::warning(
                "keeper_round",
                format!("保留球员 {} 尚未分配轮次", entry.player_id),
                Some(&entry.player_id),
            ));
        }
    }
}

impl Default for RosterValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{Player, RookieDraftInfo};
    use crate::domain::types::Severity;

    fn rookie(id: &str, draft_info: Option<bool>) -> Player {
        let mut player = Player::new(id, format!("Rookie {}", id), 1_000_000);
        player.roster.is_rookie = true;
        player.roster.rookie_draft_info = draft_info.map(|eligible| RookieDraftInfo {
            round: Some(1),
            pick: Some(3),
            redshirt_eligible: eligible,
        });
        player
    }

    fn entry(id: &str, decision: KeeperDecision) -> RosterEntry {
        RosterEntry::new(id, decision)
    }

    #[test]
    fn test_redshirt_rules() {
        let validator = RosterValidator::new();
        let mut players = PlayerCatalog::new();
        players.insert("OK".into(), rookie("OK", Some(true)));
        players.insert("NOINFO".into(), rookie("NOINFO", None));
        players.insert("INELIGIBLE".into(), rookie("INELIGIBLE", Some(false)));
        players.insert("VET".into(), Player::new("VET", "Veteran", 20_000_000));

        let entries = vec![
            entry("OK", KeeperDecision::Redshirt),
            entry("NOINFO", KeeperDecision::Redshirt),
            entry("INELIGIBLE", KeeperDecision::Redshirt),
            entry("VET", KeeperDecision::Redshirt),
        ];

        let violations = validator.validate_roster(&entries, &players, DEFAULT_MAX_KEEPERS);

        let flagged: Vec<_> = violations.iter().filter_map(|v| v.player_id.as_deref()).collect();
        assert_eq!(flagged, vec!["INELIGIBLE", "VET"]);
        assert!(violations.iter().all(|v| v.severity == Severity::Error && v.field == "redshirt"));
    }

    #[test]
    fn test_int_stash_rules() {
        let validator = RosterValidator::new();
        let mut players = PlayerCatalog::new();
        let mut eligible = Player::new("EU", "Euro Prospect", 0);
        eligible.roster.int_eligible = true;
        players.insert("EU".into(), eligible);
        players.insert("US".into(), Player::new("US", "Domestic", 0));

        let entries = vec![
            entry("EU", KeeperDecision::IntStash),
            entry("US", KeeperDecision::IntStash),
            entry("MISSING", KeeperDecision::IntStash),
        ];

        let violations = validator.validate_roster(&entries, &players, DEFAULT_MAX_KEEPERS);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].player_id.as_deref(), Some("US"));
        assert_eq!(violations[1].player_id.as_deref(), Some("MISSING"));
    }

    #[test]
    fn test_dropped_players_are_inert() {
        let validator = RosterValidator::new();
        let entries = vec![entry("X", KeeperDecision::Drop)];
        assert!(validator
            .validate_roster(&entries, &PlayerCatalog::new(), DEFAULT_MAX_KEEPERS)
            .is_empty());
    }
}
