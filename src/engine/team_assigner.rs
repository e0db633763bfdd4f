// ==========================================
// 值班轮换核心 - 值班队解析
// ==========================================
// 先按轮换类型分派:
// - 预设日历: 查已发布的逐日值班表
// - 自定义:   weekly  -> 1 + (offset / 7) mod n
//             daily   -> 1 + offset mod n
//             two_day -> 1 + (offset / 2) mod n
// 输出恒在 [1, team_count]
// ==========================================

use crate::domain::policy::{DutyRule, ValidPolicy};
use crate::domain::team::TeamIndex;
use crate::engine::cycle_clock::CycleClock;
use chrono::NaiveDate;

/// TeamAssigner - 周期偏移到值班队的映射
pub struct TeamAssigner;

impl TeamAssigner {
    /// 偏移对应的值班队编号（1 基）
    ///
    /// 偏移超出周期时按周期取模,结果与 offset mod cycle 一致
    pub fn team_for_offset(policy: &ValidPolicy, offset: u32) -> TeamIndex {
        match policy.rule() {
            DutyRule::Table(table) => {
                // 校验保证值班表非空且长度 = 周期天数
                table[offset as usize % table.len()]
            }
            DutyRule::Pattern(mode) => {
                let block = offset / mode.block_days();
                1 + block % policy.team_count()
            }
        }
    }

    /// 指定日期的值班队
    pub fn team_on(policy: &ValidPolicy, date: NaiveDate) -> TeamIndex {
        Self::team_for_offset(policy, CycleClock::offset_in_cycle(policy, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::RotationPolicy;
    use crate::domain::preset::PresetDefinition;
    use crate::domain::types::{PatternMode, RotationType};
    use crate::engine::preset_catalog::PresetCatalog;
    use crate::engine::validation::{validate, validate_with};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn custom(team_count: u32, cycle: u32, mode: PatternMode) -> ValidPolicy {
        validate(&RotationPolicy::custom(team_count, cycle, mode, ymd(2025, 1, 1))).unwrap()
    }

    #[test]
    fn test_weekly_blocks() {
        let p = custom(4, 28, PatternMode::Weekly);
        for offset in 0..7 {
            assert_eq!(TeamAssigner::team_for_offset(&p, offset), 1);
        }
        for offset in 7..14 {
            assert_eq!(TeamAssigner::team_for_offset(&p, offset), 2);
        }
        assert_eq!(TeamAssigner::team_for_offset(&p, 21), 4);
        assert_eq!(TeamAssigner::team_for_offset(&p, 27), 4);
        assert_eq!(TeamAssigner::team_for_offset(&p, 28), 1);
    }

    #[test]
    fn test_daily_alternation() {
        let p = custom(2, 14, PatternMode::Daily);
        let teams: Vec<u32> = (0..4).map(|o| TeamAssigner::team_for_offset(&p, o)).collect();
        assert_eq!(teams, vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_two_day_blocks() {
        let p = custom(3, 12, PatternMode::TwoDay);
        let teams: Vec<u32> = (0..12).map(|o| TeamAssigner::team_for_offset(&p, o)).collect();
        assert_eq!(teams, vec![1, 1, 2, 2, 3, 3, 1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_output_always_in_range() {
        for team_count in 2..=8 {
            for mode in [PatternMode::Weekly, PatternMode::Daily, PatternMode::TwoDay] {
                let p = custom(team_count, 56, mode);
                for offset in 0..200 {
                    let team = TeamAssigner::team_for_offset(&p, offset);
                    assert!((1..=team_count).contains(&team));
                }
            }
        }
    }

    #[test]
    fn test_team_on_uses_clock() {
        let p = custom(4, 28, PatternMode::Weekly);
        assert_eq!(TeamAssigner::team_on(&p, ymd(2025, 1, 1)), 1);
        assert_eq!(TeamAssigner::team_on(&p, ymd(2025, 1, 8)), 2);
        // 参考日前一天 = 周期最后一天 = 4 号队
        assert_eq!(TeamAssigner::team_on(&p, ymd(2024, 12, 31)), 4);
    }

    #[test]
    fn test_preset_dispatches_to_table() {
        let catalog = PresetCatalog::from_definitions([PresetDefinition {
            rotation_type: RotationType::PresetB,
            cycle_length_days: 4,
            team_count: 2,
            anchor_date: ymd(2020, 1, 1),
            table: vec![2, 1, 1, 2],
            source: None,
        }])
        .unwrap();
        let p = validate_with(&RotationPolicy::preset(RotationType::PresetB, 2), &catalog).unwrap();

        let teams: Vec<u32> = (0..6).map(|o| TeamAssigner::team_for_offset(&p, o)).collect();
        assert_eq!(teams, vec![2, 1, 1, 2, 2, 1]);
        assert_eq!(TeamAssigner::team_on(&p, ymd(2019, 12, 31)), 2);
    }
}
