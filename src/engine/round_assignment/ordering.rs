// ==========================================
// 轮次分配 - 处理顺序
// ==========================================
// 优先级缺失语义: 未指定 priority 的条目保持原位置,
// 已指定的条目只在彼此占据的位置之间按 priority 重排。
// 该规则是全序、稳定、确定的。
// ==========================================

use crate::domain::roster::RosterEntry;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Direction {
    Ascending,
    Descending,
}

/// 按 priority 重排（保留未指定者的原位置）
pub(super) fn order_by_priority(indices: &mut [usize], entries: &[RosterEntry], direction: Direction) {
    let mut slots = Vec::new();
    let mut prioritized = Vec::new();
    for (slot, &idx) in indices.iter().enumerate() {
        if let Some(priority) = entries[idx].priority {
            slots.push(slot);
            prioritized.push((idx, priority));
        }
    }

    // sort_by 为稳定排序,同 priority 保持输入顺序
    match direction {
        Direction::Ascending => prioritized.sort_by(|a, b| a.1.cmp(&b.1)),
        Direction::Descending => prioritized.sort_by(|a, b| b.1.cmp(&a.1)),
    }

    for (slot, (idx, _)) in slots.into_iter().zip(prioritized) {
        indices[slot] = idx;
    }
}

/// 按 base_round 排序,同 base_round 内再按 priority 排序
///
/// # 规则
/// - Ascending: base_round 升序, priority 升序
/// - Descending: base_round 降序, priority 降序
pub(super) fn order_by_base_round(
    indices: &mut [usize],
    entries: &[RosterEntry],
    direction: Direction,
) {
    let base = |idx: usize| entries[idx].base_round.unwrap_or(0);
    match direction {
        Direction::Ascending => indices.sort_by_key(|&idx| base(idx)),
        Direction::Descending => indices.sort_by(|&a, &b| base(b).cmp(&base(a))),
    }

    // 同 base_round 分组后组内重排
    let mut start = 0;
    while start < indices.len() {
        let group_base = base(indices[start]);
        let mut end = start + 1;
        while end < indices.len() && base(indices[end]) == group_base {
            end += 1;
        }
        if end - start > 1 {
            order_by_priority(&mut indices[start..end], entries, direction);
        }
        start = end;
    }
}
