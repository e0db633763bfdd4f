// ==========================================
// 值班轮换核心 - 领域类型定义
// ==========================================
// 轮换类型 / 轮换粒度 / 人员类别 均为封闭枚举,
// 所有分派点由编译器保证穷尽匹配
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 轮换类型 (Rotation Type)
// ==========================================
// 序列化格式与配置存储一致: preset_A / preset_B / preset_C / custom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RotationType {
    #[serde(rename = "preset_A")]
    PresetA, // 固定 28 天 / 4 队
    #[serde(rename = "preset_B")]
    PresetB, // 固定 4 天循环
    #[serde(rename = "preset_C")]
    PresetC, // 连续值班 (无轮空日)
    #[serde(rename = "custom")]
    Custom,  // 完全自定义
}

impl RotationType {
    /// 全部预设类型（不含 Custom）
    pub const PRESETS: [RotationType; 3] =
        [RotationType::PresetA, RotationType::PresetB, RotationType::PresetC];

    pub fn as_str(&self) -> &'static str {
        match self {
            RotationType::PresetA => "preset_A",
            RotationType::PresetB => "preset_B",
            RotationType::PresetC => "preset_C",
            RotationType::Custom => "custom",
        }
    }

    pub fn is_preset(&self) -> bool {
        !matches!(self, RotationType::Custom)
    }

    /// 界面显示名称（随当前语言）
    pub fn label(&self) -> String {
        crate::i18n::t(&format!("rotation_type.{}", self.as_str()))
    }
}

impl fmt::Display for RotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RotationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "preset_a" => Ok(RotationType::PresetA),
            "preset_b" => Ok(RotationType::PresetB),
            "preset_c" => Ok(RotationType::PresetC),
            "custom" => Ok(RotationType::Custom),
            other => Err(format!("未知轮换类型: {}", other)),
        }
    }
}

// ==========================================
// 轮换粒度 (Pattern Mode)
// ==========================================
// 值班队切换频率,仅对 Custom 生效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternMode {
    Weekly, // 整周一换
    Daily,  // 每日一换
    TwoDay, // 两日一换
}

impl PatternMode {
    /// 一个值班块的天数
    pub fn block_days(&self) -> u32 {
        match self {
            PatternMode::Weekly => 7,
            PatternMode::Daily => 1,
            PatternMode::TwoDay => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternMode::Weekly => "weekly",
            PatternMode::Daily => "daily",
            PatternMode::TwoDay => "two_day",
        }
    }

    pub fn label(&self) -> String {
        crate::i18n::t(&format!("pattern_mode.{}", self.as_str()))
    }
}

impl Default for PatternMode {
    fn default() -> Self {
        PatternMode::Weekly
    }
}

impl fmt::Display for PatternMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PatternMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(PatternMode::Weekly),
            "daily" => Ok(PatternMode::Daily),
            "two_day" | "two-day" => Ok(PatternMode::TwoDay),
            other => Err(format!("未知轮换粒度: {}", other)),
        }
    }
}

// ==========================================
// 人员类别 (Workforce Category)
// ==========================================
// 每个租户各有一份全职/兼职轮换策略,互不共享状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkforceCategory {
    FullTime, // 全职
    PartTime, // 兼职（志愿）
}

impl WorkforceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkforceCategory::FullTime => "full_time",
            WorkforceCategory::PartTime => "part_time",
        }
    }

    pub fn label(&self) -> String {
        crate::i18n::t(&format!("workforce_category.{}", self.as_str()))
    }
}

impl fmt::Display for WorkforceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkforceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full_time" | "full-time" => Ok(WorkforceCategory::FullTime),
            "part_time" | "part-time" => Ok(WorkforceCategory::PartTime),
            other => Err(format!("未知人员类别: {}", other)),
        }
    }
}
