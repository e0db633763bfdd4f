// ==========================================
// 值班轮换核心 - 轮换策略实体
// ==========================================
// RotationPolicy: 配置存储中的原始对象（JSON 字段 camelCase）
// ValidPolicy:    校验通过后的不可变策略,只能由 engine::validation 构造
// ==========================================

use crate::domain::team::{default_teams, Team, TeamIndex};
use crate::domain::types::{PatternMode, RotationType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_team_count() -> u32 {
    4
}

fn default_cycle_length_days() -> u32 {
    28
}

// ==========================================
// RotationPolicy - 轮换策略（未校验）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationPolicy {
    /// 是否启用轮换
    #[serde(default)]
    pub active: bool,

    /// 预设日历或自定义
    pub rotation_type: RotationType,

    /// 值班队数量（2..=8）
    #[serde(default = "default_team_count")]
    pub team_count: u32,

    /// 完整轮换周期天数（7..=56，仅 custom）
    #[serde(default = "default_cycle_length_days")]
    pub cycle_length_days: u32,

    /// 轮换粒度（仅 custom）
    #[serde(default)]
    pub pattern_mode: PatternMode,

    /// 1 号队开始新周期的日期（custom 必填，设置后不可修改）
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,

    /// 队伍列表,插入顺序即显示顺序
    #[serde(default)]
    pub teams: Vec<Team>,

    /// 是否自动预填排班
    #[serde(default)]
    pub auto_prefill: bool,

    /// 自动排班时值班队成员是否获得优先加分（仅兼职）
    #[serde(default)]
    pub favor_on_call_team: bool,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            active: false,
            rotation_type: RotationType::Custom,
            team_count: default_team_count(),
            cycle_length_days: default_cycle_length_days(),
            pattern_mode: PatternMode::Weekly,
            reference_date: None,
            teams: default_teams(default_team_count()),
            auto_prefill: false,
            favor_on_call_team: false,
        }
    }
}

impl RotationPolicy {
    /// 构造一个启用状态的自定义策略（队伍使用默认名称与配色）
    pub fn custom(
        team_count: u32,
        cycle_length_days: u32,
        pattern_mode: PatternMode,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            active: true,
            rotation_type: RotationType::Custom,
            team_count,
            cycle_length_days,
            pattern_mode,
            reference_date: Some(reference_date),
            teams: default_teams(team_count),
            auto_prefill: false,
            favor_on_call_team: false,
        }
    }

    /// 构造一个使用预设日历的策略
    ///
    /// 周期与锚点由预设表决定,cycle_length_days / pattern_mode 不参与计算
    pub fn preset(rotation_type: RotationType, team_count: u32) -> Self {
        Self {
            active: true,
            rotation_type,
            team_count,
            teams: default_teams(team_count),
            ..Self::default()
        }
    }
}

// ==========================================
// DutyRule - 值班队解析规则
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DutyRule {
    /// 自定义策略: 按粒度分块后取模
    Pattern(PatternMode),
    /// 预设日历: 已发布的逐日值班表,下标即周期内偏移
    Table(Vec<TeamIndex>),
}

// ==========================================
// ValidPolicy - 已校验的不可变策略
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPolicy {
    policy: RotationPolicy,
    cycle_length_days: u32,
    anchor_date: NaiveDate,
    rule: DutyRule,
}

impl ValidPolicy {
    pub(crate) fn new(
        policy: RotationPolicy,
        cycle_length_days: u32,
        anchor_date: NaiveDate,
        rule: DutyRule,
    ) -> Self {
        Self {
            policy,
            cycle_length_days,
            anchor_date,
            rule,
        }
    }

    /// 原始策略（只读）
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    pub fn rotation_type(&self) -> RotationType {
        self.policy.rotation_type
    }

    pub fn team_count(&self) -> u32 {
        self.policy.team_count
    }

    /// 实际生效的周期天数（预设取预设表长度）
    pub fn cycle_length_days(&self) -> u32 {
        self.cycle_length_days
    }

    /// 周期第 0 天（custom 为 reference_date,预设为预设锚点）
    pub fn anchor_date(&self) -> NaiveDate {
        self.anchor_date
    }

    pub fn rule(&self) -> &DutyRule {
        &self.rule
    }

    pub fn teams(&self) -> &[Team] {
        &self.policy.teams
    }

    pub fn team(&self, index: TeamIndex) -> Option<&Team> {
        self.policy.teams.iter().find(|t| t.index == index)
    }

    pub fn favor_on_call_team(&self) -> bool {
        self.policy.favor_on_call_team
    }

    pub fn into_inner(self) -> RotationPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_json_field_names() {
        let policy = RotationPolicy::custom(
            2,
            14,
            PatternMode::Daily,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let json = serde_json::to_value(&policy).unwrap();

        assert_eq!(json["rotationType"], "custom");
        assert_eq!(json["teamCount"], 2);
        assert_eq!(json["cycleLengthDays"], 14);
        assert_eq!(json["patternMode"], "daily");
        assert_eq!(json["referenceDate"], "2025-01-01");
        assert_eq!(json["favorOnCallTeam"], false);
        assert_eq!(json["teams"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_policy_deserialize_with_defaults() {
        let raw = r#"{"rotationType":"preset_B"}"#;
        let policy: RotationPolicy = serde_json::from_str(raw).unwrap();

        assert!(!policy.active);
        assert_eq!(policy.rotation_type, RotationType::PresetB);
        assert_eq!(policy.team_count, 4);
        assert_eq!(policy.cycle_length_days, 28);
        assert_eq!(policy.pattern_mode, PatternMode::Weekly);
        assert!(policy.reference_date.is_none());
        assert!(policy.teams.is_empty());
    }
}
