// ==========================================
// 保留联赛 - 保留名单 API
// ==========================================
// 职责: 预览结算、提交校验、交易试算、名单/球员导入
// 说明: 持久化与通知由调用方负责,这里只返回结果
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::player::{Player, PlayerCatalog};
use crate::domain::roster::RosterEntry;
use crate::domain::types::KeeperDecision;
use crate::engine::orchestrator::{KeeperOrchestrator, TeamSeasonInput, TeamSettlement};
use crate::engine::trade_impact::{TradeImpact, TradeImpactEngine, TradeScenario};
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::sync::Arc;
use tracing::{info, warn};

/// CSV 行（player_id,decision,base_round,priority）
#[derive(Debug, Deserialize)]
struct EntryRow {
    player_id: String,
    decision: String,
    #[serde(default)]
    base_round: Option<u8>,
    #[serde(default)]
    priority: Option<i32>,
}

// ==========================================
// KeeperApi
// ==========================================
pub struct KeeperApi {
    config: Arc<ConfigManager>,
}

impl KeeperApi {
    pub fn new(config: Arc<ConfigManager>) -> Self {
        Self { config }
    }

    fn orchestrator(&self, league_id: Option<&str>) -> ApiResult<KeeperOrchestrator> {
        let config = self.config.league_config(league_id)?;
        Ok(KeeperOrchestrator::new(Arc::new(config)))
    }

    /// 输入快照的基本校验
    fn check_input(input: &TeamSeasonInput) -> ApiResult<()> {
        if input.team_id.trim().is_empty() {
            return Err(ApiError::InvalidInput("team_id 不能为空".to_string()));
        }

        let mut seen = HashSet::new();
        for entry in &input.entries {
            if entry.player_id.trim().is_empty() {
                return Err(ApiError::InvalidInput("player_id 不能为空".to_string()));
            }
            if !seen.insert(entry.player_id.as_str()) {
                return Err(ApiError::InvalidInput(format!(
                    "球员 {} 在名单中重复出现",
                    entry.player_id
                )));
            }
        }
        Ok(())
    }

    // ==========================================
    // 结算
    // ==========================================

    /// 预览结算（校验发现作为数据返回,不视为失败）
    pub fn preview_team(
        &self,
        league_id: Option<&str>,
        input: &TeamSeasonInput,
        players: &PlayerCatalog,
    ) -> ApiResult<TeamSettlement> {
        Self::check_input(input)?;
        let orchestrator = self.orchestrator(league_id)?;
        Ok(orchestrator.settle_team(input, players))
    }

    /// 提交保留名单
    ///
    /// # 返回
    /// - Ok(TeamSettlement): 可提交（可能带 warning）
    /// - Err(RosterNotSubmittable): 存在 error 级发现
    pub fn submit_keepers(
        &self,
        league_id: Option<&str>,
        input: &TeamSeasonInput,
        players: &PlayerCatalog,
    ) -> ApiResult<TeamSettlement> {
        let settlement = self.preview_team(league_id, input, players)?;

        if !settlement.is_submittable() {
            let violations = settlement.errors();
            warn!(
                team_id = %input.team_id,
                errors = violations.len(),
                "名单存在阻断性错误,拒绝提交"
            );
            return Err(ApiError::RosterNotSubmittable {
                reason: format!("{} 项错误", violations.len()),
                violations,
            });
        }

        info!(
            team_id = %input.team_id,
            settlement_id = %settlement.settlement_id,
            total_fees = settlement.summary.total_fees,
            "名单提交校验通过"
        );
        Ok(settlement)
    }

    /// 交易试算
    pub fn preview_trade(
        &self,
        league_id: Option<&str>,
        input: &TeamSeasonInput,
        scenario: &TradeScenario,
        players: &PlayerCatalog,
    ) -> ApiResult<TradeImpact> {
        Self::check_input(input)?;

        for player_id in &scenario.outgoing_player_ids {
            if !input.entries.iter().any(|e| &e.player_id == player_id) {
                return Err(ApiError::NotFound(format!(
                    "送出球员 {} 不在球队 {} 名单中",
                    player_id, input.team_id
                )));
            }
        }

        let orchestrator = self.orchestrator(league_id)?;
        let after = TradeImpactEngine::new(&orchestrator).apply_scenario(input, scenario);
        Self::check_input(&after)?;

        Ok(TradeImpactEngine::new(&orchestrator).evaluate(input, scenario, players))
    }

    // ==========================================
    // 导入
    // ==========================================

    /// 从 CSV 读取名单条目
    ///
    /// 表头: player_id,decision,base_round,priority（后两列可留空）
    pub fn load_entries_csv<R: Read>(reader: R) -> ApiResult<Vec<RosterEntry>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut entries = Vec::new();
        for (line, row) in csv_reader.deserialize::<EntryRow>().enumerate() {
            let row = row?;
            let decision: KeeperDecision = row
                .decision
                .parse()
                .map_err(|e: String| ApiError::InvalidInput(format!("第 {} 行: {}", line + 2, e)))?;
            entries.push(RosterEntry {
                player_id: row.player_id,
                decision,
                base_round: row.base_round,
                priority: row.priority,
                keeper_round: None,
            });
        }
        Ok(entries)
    }

    /// 从 JSON 数组读取球员目录
    pub fn load_players_json<R: Read>(reader: R) -> ApiResult<PlayerCatalog> {
        let players: Vec<Player> = serde_json::from_reader(reader)?;
        Ok(players
            .into_iter()
            .map(|p| (p.player_id.clone(), p))
            .collect())
    }
}
