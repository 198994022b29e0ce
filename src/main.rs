// ==========================================
// 保留联赛 - 命令行入口
// ==========================================
// 用法:
//   keeper-league <entries.csv|team.json> <players.json> [league_id] [trade_delta]
//
// - entries.csv: player_id,decision,base_round,priority
// - team.json:   TeamSeasonInput（可含 draft_histories / drafted_players）
// - 配置: $KEEPER_LEAGUE_CONFIG 指定的文件,否则使用默认配置目录
//
// 输出: TeamSettlement（JSON）；名单不可提交时退出码为 2
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::Datelike;
use keeper_league::engine::TeamSeasonInput;
use keeper_league::{logging, ConfigManager, KeeperApi};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let (Some(entries_path), Some(players_path)) = (args.next(), args.next()) else {
        bail!("用法: keeper-league <entries.csv|team.json> <players.json> [league_id] [trade_delta]");
    };
    let league_id = args.next().filter(|s| !s.trim().is_empty());
    let trade_delta = match args.next() {
        Some(raw) => Some(
            raw.replace('_', "")
                .parse::<i64>()
                .with_context(|| format!("trade_delta 无效: {}", raw))?,
        ),
        None => None,
    };

    let config = match std::env::var_os("KEEPER_LEAGUE_CONFIG") {
        Some(path) => ConfigManager::from_file(&path)
            .with_context(|| format!("无法加载配置: {}", Path::new(&path).display()))?,
        None => ConfigManager::load_default()?,
    };
    let api = KeeperApi::new(Arc::new(config));

    tracing::info!("{} v{}", keeper_league::APP_NAME, keeper_league::VERSION);

    let mut input = load_team_input(Path::new(&entries_path))?;
    if let Some(delta) = trade_delta {
        input.trade_delta = delta;
    }

    let players_file =
        File::open(&players_path).with_context(|| format!("无法打开球员文件: {}", players_path))?;
    let players = KeeperApi::load_players_json(BufReader::new(players_file))?;

    let settlement = api.preview_team(league_id.as_deref(), &input, &players)?;
    println!("{}", serde_json::to_string_pretty(&settlement)?);

    if !settlement.is_submittable() {
        for violation in settlement.errors() {
            tracing::error!(field = %violation.field, "{}", violation.message);
        }
        std::process::exit(2);
    }
    Ok(())
}

/// 按扩展名读取球队输入
fn load_team_input(path: &Path) -> Result<TeamSeasonInput> {
    let file = File::open(path).with_context(|| format!("无法打开名单文件: {}", path.display()))?;
    let reader = BufReader::new(file);

    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => {
            let entries = KeeperApi::load_entries_csv(reader)?;
            let team_id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("team")
                .to_string();
            Ok(TeamSeasonInput::new(team_id, chrono::Utc::now().year(), entries))
        }
        Some("json") => Ok(serde_json::from_reader(reader)?),
        other => bail!("不支持的名单文件格式: {:?}", other),
    }
}
