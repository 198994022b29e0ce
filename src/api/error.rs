// ==========================================
// 保留联赛 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,转换配置/解析错误为用户可读消息
// ==========================================

use crate::config::ConfigError;
use crate::domain::summary::RosterViolation;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    /// 名单存在 error 级校验发现,禁止提交
    #[error("名单不可提交: {reason}")]
    RosterNotSubmittable {
        reason: String,
        violations: Vec<RosterViolation>,
    },

    // ==========================================
    // 配置与解析错误
    // ==========================================
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("CSV 解析失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
