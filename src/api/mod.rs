// ==========================================
// 保留联赛 - API 层
// ==========================================
// 职责: 业务入口,组合配置与引擎,返回带原因的错误
// ==========================================

pub mod error;
pub mod keeper_api;

pub use error::{ApiError, ApiResult};
pub use keeper_api::KeeperApi;
