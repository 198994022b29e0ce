// ==========================================
// 保留联赛 - 结算摘要与校验结果
// ==========================================
// 职责: 派生对象,每次输入变化都整体重算,不独立持久化
// ==========================================

use crate::domain::types::Severity;
use serde::{Deserialize, Serialize};

/// 球队-赛季名单摘要（工资帽 + 罚金 + 费用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    // ===== 计数 =====
    pub keepers_count: usize,
    pub drafted_count: usize,
    pub redshirt_count: usize,
    pub int_stash_count: usize,

    // ===== 工资帽 =====
    pub cap_used: i64,
    pub cap_base: i64,
    pub trade_delta: i64,
    pub cap_effective: i64,

    // ===== 罚金明细 =====
    /// 超出二级线的金额（货币单位）
    pub over_by: i64,
    /// 超出部分向上取整后的百万数
    pub over_by_m: i64,
    pub penalty_dues: f64,
    pub franchise_tags: u32,
    pub franchise_tag_dues: f64,
    pub redshirt_dues: f64,
    pub first_apron_fee: f64,
    /// 预留字段,核心中恒为 0
    pub activation_dues: f64,
    pub total_fees: f64,

    /// 缺少工资记录而按 0 计入的 KEEP 球员（仅用于审计）
    #[serde(default)]
    pub unpriced_player_ids: Vec<String>,
}

/// 名单校验发现
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterViolation {
    pub severity: Severity,
    pub field: String,
    pub message: String,
    #[serde(default)]
    pub player_id: Option<String>,
}

impl RosterViolation {
    pub fn error(field: &str, message: String, player_id: Option<&str>) -> Self {
        Self {
            severity: Severity::Error,
            field: field.to_string(),
            message,
            player_id: player_id.map(|s| s.to_string()),
        }
    }

    pub fn warning(field: &str, message: String, player_id: Option<&str>) -> Self {
        Self {
            severity: Severity::Warning,
            field: field.to_string(),
            message,
            player_id: player_id.map(|s| s.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
