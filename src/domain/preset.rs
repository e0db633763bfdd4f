// ==========================================
// 值班轮换核心 - 预设日历定义
// ==========================================
// 预设日历的逐日值班表由外部排班引擎发布,
// 以数据形式导入配置存储,代码中不内置任何值班表
// ==========================================

use crate::domain::team::TeamIndex;
use crate::domain::types::RotationType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 预设日历定义（存储位置: config_kv, scope_id='global', key='rotation_preset/{type}'）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetDefinition {
    /// 对应的预设类型（不可为 custom）
    pub rotation_type: RotationType,

    /// 周期天数,必须等于 table 长度
    pub cycle_length_days: u32,

    /// 表内使用的值班队数量
    pub team_count: u32,

    /// 周期第 0 天（所有使用该预设的租户共享）
    pub anchor_date: NaiveDate,

    /// 逐日值班队编号,下标 = 周期内偏移
    pub table: Vec<TeamIndex>,

    /// 来源说明（例如发布文档版本）
    #[serde(default)]
    pub source: Option<String>,
}

impl RotationType {
    /// 预设类型固定的周期天数（None 表示由值班表决定）
    pub fn fixed_cycle_length(&self) -> Option<u32> {
        match self {
            RotationType::PresetA => Some(28),
            RotationType::PresetB => Some(4),
            RotationType::PresetC | RotationType::Custom => None,
        }
    }

    /// 预设类型固定的值班队数量（None 表示由值班表决定）
    pub fn fixed_team_count(&self) -> Option<u32> {
        match self {
            RotationType::PresetA => Some(4),
            RotationType::PresetB | RotationType::PresetC | RotationType::Custom => None,
        }
    }
}
