// ==========================================
// 保留联赛 - 保留轮次分配引擎
// ==========================================
// 职责: 为 KEEP 条目分配唯一的保留轮次,并统计特许标签数
// 输入: 单支球队单赛季的全部名单条目
// 输出: 新的条目列表（keeper_round 已填充）+ franchise_tags
// 红线: 纯函数,同一球队内轮次不冲突,轮次 ∈ [1,13]
// ==========================================

mod core;
mod ordering;


pub use self::core::{RoundAssignment, RoundAssignmentEngine};
