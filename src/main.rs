// ==========================================
// 消防队值班轮换核心 - 排班预览工具
// ==========================================
// 用法:
//   guard-rotation [db_path] <tenant_id> <full_time|part_time> <start> <end>
// 输出: 排班预填 CSV（stdout）
// 不传 db_path 时使用默认数据库路径
// ==========================================

use std::io::Write;
use std::sync::Arc;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use guard_rotation::db::get_default_db_path;
use guard_rotation::{ConfigManager, RotationApi, WorkforceCategory};

fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("日期格式应为 YYYY-MM-DD: {}", raw))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    guard_rotation::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (db_path, rest) = match args.len() {
        5 => (args[0].clone(), &args[1..]),
        4 => (get_default_db_path(), &args[..]),
        _ => bail!("用法: guard-rotation [db_path] <tenant_id> <full_time|part_time> <start> <end>"),
    };

    let tenant_id = rest[0].as_str();
    let category: WorkforceCategory = rest[1].parse().map_err(anyhow::Error::msg)?;
    let start = parse_date(&rest[2])?;
    let end = parse_date(&rest[3])?;

    tracing::info!(
        version = guard_rotation::VERSION,
        db_path = %db_path,
        tenant_id,
        category = %category,
        "{}",
        guard_rotation::APP_NAME
    );

    let manager = ConfigManager::new(&db_path)
        .with_context(|| format!("无法打开配置数据库: {}", db_path))?;
    let api = RotationApi::new(Arc::new(manager));

    let csv = api
        .export_roster_csv(tenant_id, category, start, end)
        .await
        .context("排班预填失败")?;

    std::io::stdout().write_all(&csv)?;
    Ok(())
}
