// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use keeper_league::domain::player::{Player, PlayerCatalog, RookieDraftInfo};
use keeper_league::domain::roster::RosterEntry;
use keeper_league::domain::types::KeeperDecision;

// ==========================================
// Player 构建器
// ==========================================

pub struct PlayerBuilder {
    player: Player,
}

impl PlayerBuilder {
    pub fn new(player_id: &str) -> Self {
        Self {
            player: Player::new(player_id, format!("Player {}", player_id), 0),
        }
    }

    pub fn salary(mut self, salary: i64) -> Self {
        self.player.salary = salary;
        self
    }

    pub fn rookie(mut self) -> Self {
        self.player.roster.is_rookie = true;
        self
    }

    pub fn rookie_draft(mut self, round: u8, redshirt_eligible: bool) -> Self {
        self.player.roster.rookie_draft_info = Some(RookieDraftInfo {
            round: Some(round),
            pick: None,
            redshirt_eligible,
        });
        self
    }

    pub fn int_eligible(mut self) -> Self {
        self.player.roster.int_eligible = true;
        self
    }

    pub fn build(self) -> Player {
        self.player
    }
}

/// 由 (player_id, salary) 列表构建球员目录
pub fn catalog_with_salaries(salaries: &[(&str, i64)]) -> PlayerCatalog {
    salaries
        .iter()
        .map(|(id, salary)| {
            let player = PlayerBuilder::new(id).salary(*salary).build();
            (player.player_id.clone(), player)
        })
        .collect()
}

pub fn catalog(players: Vec<Player>) -> PlayerCatalog {
    players
        .into_iter()
        .map(|p| (p.player_id.clone(), p))
        .collect()
}

// ==========================================
// RosterEntry 快捷构造
// ==========================================

pub fn keep(player_id: &str, base_round: u8) -> RosterEntry {
    RosterEntry::keep(player_id, base_round, None)
}

pub fn keep_with_priority(player_id: &str, base_round: u8, priority: i32) -> RosterEntry {
    RosterEntry::keep(player_id, base_round, Some(priority))
}

pub fn redshirt(player_id: &str) -> RosterEntry {
    RosterEntry::new(player_id, KeeperDecision::Redshirt)
}

pub fn int_stash(player_id: &str) -> RosterEntry {
    RosterEntry::new(player_id, KeeperDecision::IntStash)
}

pub fn drop_entry(player_id: &str) -> RosterEntry {
    RosterEntry::new(player_id, KeeperDecision::Drop)
}

/// 手工指定 keeper_round 的 KEEP 条目（用于校验器测试）
pub fn keep_at_round(player_id: &str, keeper_round: u8) -> RosterEntry {
    RosterEntry {
        keeper_round: Some(keeper_round),
        ..RosterEntry::keep(player_id, keeper_round, None)
    }
}

pub fn round_of(entries: &[RosterEntry], player_id: &str) -> Option<u8> {
    entries
        .iter()
        .find(|e| e.player_id == player_id)
        .and_then(|e| e.keeper_round)
}
