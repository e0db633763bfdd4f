// ==========================================
// 值班轮换核心 - 引擎层错误类型
// ==========================================
// 全部为配置/输入错误,不可重试
// 策略校验失败必须阻断排班计算（不做部分结果）
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::{PatternMode, RotationType};
use chrono::NaiveDate;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    // ===== 策略校验错误 =====
    #[error("值班队数量无效: team_count={team_count}, teams={teams_len} (允许 2..=8 且需与队伍列表一致)")]
    InvalidTeamCount { team_count: u32, teams_len: usize },

    #[error("队伍编号无效: {0}")]
    InvalidTeamRoster(String),

    #[error("自定义轮换缺少参考日期")]
    MissingReferenceDate,

    #[error("周期天数无效: cycle_length_days={cycle_length_days}, pattern_mode={pattern_mode}: {reason}")]
    InvalidCycleLength {
        cycle_length_days: u32,
        pattern_mode: PatternMode,
        reason: String,
    },

    // ===== 预设日历错误 =====
    #[error("预设日历未导入: {0}")]
    PresetUnavailable(RotationType),

    #[error("预设日历队伍数不符: preset={rotation_type}, expected={expected}, actual={actual}")]
    PresetMismatch {
        rotation_type: RotationType,
        expected: u32,
        actual: u32,
    },

    #[error("预设值班表无效 (preset={rotation_type}): {reason}")]
    InvalidPresetTable {
        rotation_type: RotationType,
        reason: String,
    },

    #[error("参考日期已锁定: current={current}, requested={requested:?}")]
    ReferenceDateLocked {
        current: NaiveDate,
        requested: Option<NaiveDate>,
    },

    // ===== 计算输入错误 =====
    #[error("日期区间无效: start={start} 晚于 end={end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("日期区间过长: {days} 天 (上限 {max_days} 天)")]
    RangeTooLong { days: i64, max_days: i64 },

    // ===== 导出错误 =====
    #[error("排班导出失败: {0}")]
    Export(String),
}

impl ConfigError {
    /// 面向操作员的提示文案键（locales/*.yml）
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ConfigError::InvalidTeamCount { .. } => "error.invalid_team_count",
            ConfigError::InvalidTeamRoster(_) => "error.invalid_team_roster",
            ConfigError::MissingReferenceDate => "error.missing_reference_date",
            ConfigError::InvalidCycleLength { .. } => "error.invalid_cycle_length",
            ConfigError::PresetUnavailable(_) => "error.preset_unavailable",
            ConfigError::PresetMismatch { .. } => "error.preset_mismatch",
            ConfigError::InvalidPresetTable { .. } => "error.invalid_preset_table",
            ConfigError::ReferenceDateLocked { .. } => "error.reference_date_locked",
            ConfigError::InvalidRange { .. } => "error.invalid_range",
            ConfigError::RangeTooLong { .. } => "error.range_too_long",
            ConfigError::Export(_) => "error.export",
        }
    }

    /// 按当前语言渲染的提示文案
    pub fn localized_message(&self) -> String {
        use crate::i18n::{t, t_with_args};

        match self {
            ConfigError::InvalidTeamCount { team_count, .. } => t_with_args(
                self.i18n_key(),
                &[("team_count", &team_count.to_string())],
            ),
            ConfigError::InvalidRange { start, end } => t_with_args(
                self.i18n_key(),
                &[("start", &start.to_string()), ("end", &end.to_string())],
            ),
            ConfigError::RangeTooLong { days, max_days } => t_with_args(
                self.i18n_key(),
                &[("days", &days.to_string()), ("max_days", &max_days.to_string())],
            ),
            _ => t(self.i18n_key()),
        }
    }
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
