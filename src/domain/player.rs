// ==========================================
// 保留联赛 - 球员目录记录
// ==========================================
// 职责: 核心计算所需的球员字段（工资、新秀/红衫/海外资格）
// 说明: 球员目录由外部维护,这里只定义只读视图
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 球员目录: player_id → Player
pub type PlayerCatalog = HashMap<String, Player>;

/// 球员记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub name: String,

    /// 工资（整数货币单位,非百万）
    #[serde(default)]
    pub salary: i64,

    #[serde(default)]
    pub roster: PlayerRosterInfo,
}

/// 球员名单资格信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRosterInfo {
    #[serde(default)]
    pub is_rookie: bool,

    #[serde(default)]
    pub int_eligible: bool,

    /// 新秀选秀信息（缺失时红衫资格按宽松默认处理）
    #[serde(default)]
    pub rookie_draft_info: Option<RookieDraftInfo>,
}

/// 新秀选秀信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RookieDraftInfo {
    #[serde(default)]
    pub round: Option<u8>,
    #[serde(default)]
    pub pick: Option<u16>,
    #[serde(default)]
    pub redshirt_eligible: bool,
}

/// 现场选秀中已选中的球员（工资单独累加）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftedPlayer {
    pub player_id: String,
    pub salary: i64,
}

impl Player {
    pub fn new(player_id: impl Into<String>, name: impl Into<String>, salary: i64) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
            salary,
            roster: PlayerRosterInfo::default(),
        }
    }

    pub fn rookie_draft_info(&self) -> Option<&RookieDraftInfo> {
        self.roster.rookie_draft_info.as_ref()
    }
}
