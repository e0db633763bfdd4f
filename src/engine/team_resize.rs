// ==========================================
// 值班轮换核心 - 值班队数量调整
// ==========================================
// 保留编号 <= new_count 的队伍（名称/颜色/显示顺序不变）
// 新增编号取默认名称与默认色板
// ==========================================

use crate::domain::policy::{RotationPolicy, ValidPolicy};
use crate::domain::team::Team;
use crate::domain::types::RotationType;
use crate::engine::error::{ConfigError, ConfigResult};
use crate::engine::validation::{check_team_count, check_team_roster, validate};

/// 调整值班队数量并返回新的已校验策略
///
/// # 错误
/// - InvalidTeamCount: new_count 超出 2..=8
/// - PresetMismatch: 预设日历的队伍数由值班表固定
pub fn resize_teams(policy: &ValidPolicy, new_count: u32) -> ConfigResult<ValidPolicy> {
    let current = policy.policy();

    let mut teams: Vec<Team> = current
        .teams
        .iter()
        .filter(|t| t.index <= new_count)
        .cloned()
        .collect();
    let kept = teams.len() as u32;
    teams.extend((kept + 1..=new_count).map(Team::with_defaults));

    check_team_count(new_count, &teams)?;
    check_team_roster(&teams)?;

    let resized = RotationPolicy {
        team_count: new_count,
        teams,
        ..current.clone()
    };

    tracing::debug!(
        rotation_type = %current.rotation_type,
        from = current.team_count,
        to = new_count,
        "调整值班队数量"
    );

    match current.rotation_type {
        RotationType::Custom => validate(&resized),
        preset @ (RotationType::PresetA | RotationType::PresetB | RotationType::PresetC) => {
            if new_count != policy.team_count() {
                return Err(ConfigError::PresetMismatch {
                    rotation_type: preset,
                    expected: policy.team_count(),
                    actual: new_count,
                });
            }
            Ok(ValidPolicy::new(
                resized,
                policy.cycle_length_days(),
                policy.anchor_date(),
                policy.rule().clone(),
            ))
        }
    }
}
