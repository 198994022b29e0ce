// ==========================================
// 保留联赛 - 领域类型定义
// ==========================================
// 职责: 保留决策、校验严重级别、轮次常量
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 轮次常量
// ==========================================
// 选秀固定 13 轮,保留轮次必须落在 [MIN_ROUND, MAX_ROUND]
pub const MIN_ROUND: u8 = 1;
pub const MAX_ROUND: u8 = 13;

// ==========================================
// 保留决策 (Keeper Decision)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与前端一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KeeperDecision {
    Keep,     // 保留,参与轮次分配与工资帽
    Redshirt, // 红衫,不计工资帽,计红衫费
    IntStash, // 海外囤积,不计工资帽
    Drop,     // 放弃
}

impl KeeperDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeeperDecision::Keep => "KEEP",
            KeeperDecision::Redshirt => "REDSHIRT",
            KeeperDecision::IntStash => "INT_STASH",
            KeeperDecision::Drop => "DROP",
        }
    }
}

impl fmt::Display for KeeperDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for KeeperDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(KeeperDecision::Keep),
            "redshirt" => Ok(KeeperDecision::Redshirt),
            "int_stash" | "int-stash" | "stash" => Ok(KeeperDecision::IntStash),
            "drop" => Ok(KeeperDecision::Drop),
            other => Err(format!("未知保留决策: {}", other)),
        }
    }
}

// ==========================================
// 校验严重级别 (Severity)
// ==========================================
// error 阻断提交; warning 仅提示
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
