use super::ordering::{order_by_base_round, order_by_priority, Direction};
use crate::domain::roster::RosterEntry;
use crate::domain::types::{MAX_ROUND, MIN_ROUND};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

// ==========================================
// RoundAssignment - 分配结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundAssignment {
    /// 新的条目列表（与输入同序）
    pub entries: Vec<RosterEntry>,
    /// 额外首轮保留数（每个计一次特许标签费）
    pub franchise_tags: u32,
}

// ==========================================
// RoundBoard - 单队轮次占用表
// ==========================================
struct RoundBoard {
    occupied: [bool; MAX_ROUND as usize + 1],
}

impl RoundBoard {
    fn new() -> Self {
        Self {
            occupied: [false; MAX_ROUND as usize + 1],
        }
    }

    fn is_free(&self, round: u8) -> bool {
        !self.occupied[round as usize]
    }

    fn occupy(&mut self, round: u8) {
        self.occupied[round as usize] = true;
    }

    /// 就近寻找空闲轮次
    ///
    /// # 规则
    /// 1) base_round 空闲 → 直接占用
    /// 2) 向前探测 base_round-1 .. lower_bound
    /// 3) 向后探测 base_round+1 .. 13
    /// 4) 均失败 → None（由调用方兜底到第 13 轮）
    fn probe(&self, base_round: u8, lower_bound: u8) -> Option<u8> {
        if self.is_free(base_round) {
            return Some(base_round);
        }
        if let Some(round) = (lower_bound..base_round).rev().find(|&r| self.is_free(r)) {
            return Some(round);
        }
        (base_round + 1..=MAX_ROUND).find(|&r| self.is_free(r))
    }
}

// ==========================================
// RoundAssignmentEngine - 保留轮次分配引擎
// ==========================================
pub struct RoundAssignmentEngine {
    // 无状态引擎,不需要注入依赖
}

impl RoundAssignmentEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 分配保留轮次
    ///
    /// 规则:
    /// 1) KEEP 条目按 base_round == 1 拆分为首轮组与其他组
    /// 2) 首轮组按 priority 升序: 第一个免费占第 1 轮,其余依次占 2,3,4..（特许标签）
    /// 3) 有首轮组时,其他组按 base_round 升序 / priority 升序处理,探测下界为第 2 轮
    /// 4) 无首轮组时,其他组按 base_round 降序 / priority 降序处理,探测下界为第 1 轮
    /// 5) 非 KEEP 条目的 keeper_round 一律清空
    ///
    /// # 参数
    /// - `entries`: 单支球队单赛季的全部条目（任意决策混合）
    ///
    /// # 返回
    /// 新的条目列表 + 特许标签数
    #[instrument(skip(self, entries), fields(entries_count = entries.len()))]
    pub fn assign_rounds(&self, entries: &[RosterEntry]) -> RoundAssignment {
        let mut entries: Vec<RosterEntry> = entries.to_vec();
        for entry in entries.iter_mut() {
            entry.keeper_round = None;
        }

        // 1. 拆分首轮组与其他组
        let mut first_round = Vec::new();
        let mut others = Vec::new();
        for (idx, entry) in entries.iter_mut().enumerate() {
            if !entry.is_keep() {
                continue;
            }
            match entry.base_round {
                Some(base) => {
                    let clamped = base.clamp(MIN_ROUND, MAX_ROUND);
                    if clamped != base {
                        warn!(player_id = %entry.player_id, base_round = base, "base_round 越界,已截断到 [1,13]");
                        entry.base_round = Some(clamped);
                    }
                    if clamped == MIN_ROUND {
                        first_round.push(idx);
                    } else {
                        others.push(idx);
                    }
                }
                None => {
                    warn!(player_id = %entry.player_id, "KEEP 条目缺少 base_round,跳过轮次分配");
                }
            }
        }

        let mut board = RoundBoard::new();
        let mut franchise_tags = 0u32;

        if !first_round.is_empty() {
            // 2. 首轮组: 第一个免费,其余依次占 2,3,4..
            order_by_priority(&mut first_round, &entries, Direction::Ascending);
            let mut next_round = MIN_ROUND;
            for &idx in &first_round {
                let round = if next_round <= MAX_ROUND {
                    next_round
                } else {
                    Self::fallback_round(&entries[idx])
                };
                entries[idx].keeper_round = Some(round);
                board.occupy(round);
                next_round = next_round.saturating_add(1);
            }
            franchise_tags = (first_round.len() - 1) as u32;
            debug!(
                first_round_count = first_round.len(),
                franchise_tags, "首轮组分配完成"
            );

            // 3. 其他组: 升序,第 1 轮保留给首轮组
            order_by_base_round(&mut others, &entries, Direction::Ascending);
            self.place_all(&mut entries, &others, &mut board, MIN_ROUND + 1);
        } else {
            // 4. 无首轮组: 降序,高 base_round 先占位
            order_by_base_round(&mut others, &entries, Direction::Descending);
            self.place_all(&mut entries, &others, &mut board, MIN_ROUND);
        }

        // 5. 非 KEEP 条目不携带轮次
        for entry in entries.iter_mut().filter(|e| !e.is_keep()) {
            entry.keeper_round = None;
        }

        RoundAssignment {
            entries,
            franchise_tags,
        }
    }

    fn place_all(
        &self,
        entries: &mut [RosterEntry],
        order: &[usize],
        board: &mut RoundBoard,
        lower_bound: u8,
    ) {
        for &idx in order {
            let Some(base_round) = entries[idx].base_round else {
                continue;
            };
            let round = board
                .probe(base_round, lower_bound)
                .unwrap_or_else(|| Self::fallback_round(&entries[idx]));
            if round != base_round {
                debug!(
                    player_id = %entries[idx].player_id,
                    base_round,
                    keeper_round = round,
                    "轮次冲突,已就近调整"
                );
            }
            board.occupy(round);
            entries[idx].keeper_round = Some(round);
        }
    }

    /// 兜底轮次（保留上限为 8 时不可达）
    fn fallback_round(entry: &RosterEntry) -> u8 {
        warn!(
            player_id = %entry.player_id,
            base_round = ?entry.base_round,
            "无空闲轮次,兜底分配到第 13 轮"
        );
        MAX_ROUND
    }
}

impl Default for RoundAssignmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
