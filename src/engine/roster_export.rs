// ==========================================
// 值班轮换核心 - 排班预填 CSV 导出
// ==========================================
// 输出供外部下载面使用（字节 + 文件名由调用方决定）
// 列: date,team_index,team_name,team_color,priority_bonus
// ==========================================

use crate::domain::policy::ValidPolicy;
use crate::domain::roster::RosterEntry;
use crate::engine::error::{ConfigError, ConfigResult};

/// 将预填条目写为 CSV 字节
pub fn export_roster_csv<I>(entries: I, policy: &ValidPolicy) -> ConfigResult<Vec<u8>>
where
    I: IntoIterator<Item = RosterEntry>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["date", "team_index", "team_name", "team_color", "priority_bonus"])
        .map_err(|e| ConfigError::Export(e.to_string()))?;

    let mut rows = 0usize;
    for entry in entries {
        let (name, color) = policy
            .team(entry.team_index)
            .map(|t| (t.display_name.clone(), t.color.to_hex()))
            .unwrap_or_default();

        writer
            .write_record([
                entry.date.format("%Y-%m-%d").to_string(),
                entry.team_index.to_string(),
                name,
                color,
                entry.priority_bonus.to_string(),
            ])
            .map_err(|e| ConfigError::Export(e.to_string()))?;
        rows += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ConfigError::Export(e.to_string()))?;

    tracing::debug!(rows, bytes = bytes.len(), "排班 CSV 导出完成");
    Ok(bytes)
}
