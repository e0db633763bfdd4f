// ==========================================
// 值班轮换核心 - 轮换策略校验
// ==========================================
// 纯校验,不修改输入
// 校验顺序: 队伍数 -> 队伍编号 -> 类型相关（自定义 / 预设）
// ==========================================

use crate::domain::policy::{DutyRule, RotationPolicy, ValidPolicy};
use crate::domain::team::{Team, MAX_TEAM_COUNT, MIN_TEAM_COUNT};
use crate::domain::types::{PatternMode, RotationType};
use crate::engine::error::{ConfigError, ConfigResult};
use crate::engine::preset_catalog::PresetCatalog;

/// 自定义周期天数范围
pub const MIN_CYCLE_LENGTH_DAYS: u32 = 7;
pub const MAX_CYCLE_LENGTH_DAYS: u32 = 56;

/// 校验策略（不含预设日历,预设策略必然返回 PresetUnavailable）
pub fn validate(policy: &RotationPolicy) -> ConfigResult<ValidPolicy> {
    validate_with(policy, &PresetCatalog::default())
}

/// 按给定预设目录校验策略
pub fn validate_with(policy: &RotationPolicy, catalog: &PresetCatalog) -> ConfigResult<ValidPolicy> {
    check_team_count(policy.team_count, &policy.teams)?;
    check_team_roster(&policy.teams)?;

    match policy.rotation_type {
        RotationType::Custom => validate_custom(policy),
        preset @ (RotationType::PresetA | RotationType::PresetB | RotationType::PresetC) => {
            let definition = catalog
                .get(preset)
                .ok_or(ConfigError::PresetUnavailable(preset))?;

            if definition.team_count != policy.team_count {
                return Err(ConfigError::PresetMismatch {
                    rotation_type: preset,
                    expected: definition.team_count,
                    actual: policy.team_count,
                });
            }

            Ok(ValidPolicy::new(
                policy.clone(),
                definition.cycle_length_days,
                definition.anchor_date,
                DutyRule::Table(definition.table.clone()),
            ))
        }
    }
}

/// 队伍数量: 2..=8 且与队伍列表长度一致
pub(crate) fn check_team_count(team_count: u32, teams: &[Team]) -> ConfigResult<()> {
    let in_range = (MIN_TEAM_COUNT..=MAX_TEAM_COUNT).contains(&team_count);
    if !in_range || teams.len() != team_count as usize {
        return Err(ConfigError::InvalidTeamCount {
            team_count,
            teams_len: teams.len(),
        });
    }
    Ok(())
}

/// 队伍编号: 唯一且从 1 连续
pub(crate) fn check_team_roster(teams: &[Team]) -> ConfigResult<()> {
    let mut seen = vec![false; teams.len()];

    for team in teams {
        let slot = (team.index as usize).checked_sub(1);
        match slot.and_then(|i| seen.get_mut(i)) {
            Some(flag) if !*flag => *flag = true,
            Some(_) => {
                return Err(ConfigError::InvalidTeamRoster(format!(
                    "队伍编号 {} 重复",
                    team.index
                )))
            }
            None => {
                return Err(ConfigError::InvalidTeamRoster(format!(
                    "队伍编号 {} 超出 1..={}",
                    team.index,
                    teams.len()
                )))
            }
        }
    }

    Ok(())
}

fn validate_custom(policy: &RotationPolicy) -> ConfigResult<ValidPolicy> {
    let reference_date = policy
        .reference_date
        .ok_or(ConfigError::MissingReferenceDate)?;

    let cycle = policy.cycle_length_days;
    let mode = policy.pattern_mode;
    let invalid_cycle = |reason: String| ConfigError::InvalidCycleLength {
        cycle_length_days: cycle,
        pattern_mode: mode,
        reason,
    };

    if !(MIN_CYCLE_LENGTH_DAYS..=MAX_CYCLE_LENGTH_DAYS).contains(&cycle) {
        return Err(invalid_cycle(format!(
            "周期天数必须在 {}..={} 之间",
            MIN_CYCLE_LENGTH_DAYS, MAX_CYCLE_LENGTH_DAYS
        )));
    }

    let block_days = mode.block_days();
    if cycle % block_days != 0 {
        return Err(invalid_cycle(format!(
            "{} 粒度要求周期天数为 {} 的倍数",
            mode, block_days
        )));
    }

    warn_unreachable_teams(policy.team_count, cycle, mode);

    Ok(ValidPolicy::new(
        policy.clone(),
        cycle,
        reference_date,
        DutyRule::Pattern(mode),
    ))
}

// 周期内的值班块少于队伍数时,编号靠后的队伍永远轮不到值班
fn warn_unreachable_teams(team_count: u32, cycle: u32, mode: PatternMode) {
    let blocks = cycle / mode.block_days();
    if blocks < team_count {
        tracing::warn!(
            team_count,
            cycle_length_days = cycle,
            pattern_mode = %mode,
            blocks,
            "周期内值班块数少于队伍数,部分队伍不会被排到值班"
        );
    }
}
