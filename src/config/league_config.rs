// ==========================================
// 保留联赛 - 联赛配置
// ==========================================
// 职责: 工资帽阈值、费用标准、保留上限、新秀轮次映射
// 说明: 所有常量可按联赛覆写,Default 为联盟标准值
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::types::{MAX_ROUND, MIN_ROUND};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 联赛配置（结算与校验使用的全部常量）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// 基础工资帽
    pub base_cap: i64,

    /// 二级线（超出部分按百万计罚）
    pub penalty_start: i64,

    /// 每百万罚金
    pub penalty_rate_per_m: f64,

    /// 红衫费（每人）
    pub redshirt_fee: f64,

    /// 特许标签费（每个额外首轮保留）
    pub franchise_tag_fee: f64,

    /// 有效工资帽下限（交易调整后）
    pub cap_floor: i64,

    /// 有效工资帽上限（交易调整后）
    pub cap_ceiling: i64,

    /// 一级线（超出即收固定费用）
    pub first_apron: i64,

    /// 一级线固定费用
    pub first_apron_fee: f64,

    /// 每队保留上限
    pub max_keepers: usize,

    /// 新秀选秀轮次 → 基准轮次
    pub rookie_base_rounds: BTreeMap<u8, u8>,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            base_cap: 225_000_000,
            penalty_start: 225_000_000,
            penalty_rate_per_m: 2.0,
            redshirt_fee: 10.0,
            franchise_tag_fee: 15.0,
            cap_floor: 170_000_000,
            cap_ceiling: 255_000_000,
            first_apron: 195_000_000,
            first_apron_fee: 50.0,
            max_keepers: 8,
            rookie_base_rounds: BTreeMap::new(),
        }
    }
}

impl LeagueConfig {
    /// 校验配置一致性
    ///
    /// # 规则
    /// - cap_floor <= cap_ceiling
    /// - 费率与费用非负
    /// - max_keepers ∈ [1, 13]
    /// - 新秀映射的两端都在 [1, 13]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cap_floor > self.cap_ceiling {
            return Err(ConfigError::Invalid(format!(
                "cap_floor ({}) > cap_ceiling ({})",
                self.cap_floor, self.cap_ceiling
            )));
        }

        let fees = [
            ("penalty_rate_per_m", self.penalty_rate_per_m),
            ("redshirt_fee", self.redshirt_fee),
            ("franchise_tag_fee", self.franchise_tag_fee),
            ("first_apron_fee", self.first_apron_fee),
        ];
        for (key, value) in fees {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        if self.max_keepers == 0 || self.max_keepers > MAX_ROUND as usize {
            return Err(ConfigError::InvalidValue {
                key: "max_keepers".to_string(),
                value: self.max_keepers.to_string(),
            });
        }

        let round_range = MIN_ROUND..=MAX_ROUND;
        for (rookie_round, base_round) in &self.rookie_base_rounds {
            if !round_range.contains(base_round) || *rookie_round == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "rookie_base_rounds".to_string(),
                    value: format!("{} -> {}", rookie_round, base_round),
                });
            }
        }

        Ok(())
    }
}
