// ==========================================
// 轮换计算性质测试
// ==========================================
// 测试目标: 周期性、值班队范围、取模方向、预填序列完整性
// ==========================================


use chrono::Duration;
use guard_rotation::{
    validate, validate_with, ConfigError, CycleClock, PatternMode, PresetCatalog, RosterEntry,
    RosterPrefiller, RotationPolicy, RotationType, TeamAssigner, ValidPolicy,
};
use test_helpers::{daily_policy, sample_preset_a, sample_preset_b, weekly_policy, ymd};

const MODES: [PatternMode; 3] = [PatternMode::Weekly, PatternMode::Daily, PatternMode::TwoDay];

/// 枚举全部合法的自定义策略形状
fn valid_custom_policies() -> Vec<RotationPolicy> {
    let mut policies = Vec::new();
    for team_count in 2..=8 {
        for mode in MODES {
            for cycle in (7..=56).filter(|c| c % mode.block_days() == 0).step_by(3) {
                policies.push(RotationPolicy::custom(team_count, cycle, mode, ymd(2023, 8, 15)));
            }
        }
    }
    policies
}

#[test]
fn test_offset_is_periodic() {
    for policy in valid_custom_policies() {
        let valid = validate(&policy).expect("valid policy");
        let cycle = Duration::days(i64::from(valid.cycle_length_days()));

        for date in [ymd(2020, 2, 29), ymd(2023, 8, 14), ymd(2023, 8, 15), ymd(2031, 12, 31)] {
            assert_eq!(
                CycleClock::offset_in_cycle(&valid, date),
                CycleClock::offset_in_cycle(&valid, date + cycle)
            );
            assert!(CycleClock::offset_in_cycle(&valid, date) < valid.cycle_length_days());
        }
    }
}

/// 全部合法策略: 自定义形状 + 已导入值班表的预设日历
fn all_valid_policies() -> Vec<ValidPolicy> {
    let catalog = PresetCatalog::from_definitions([sample_preset_a(), sample_preset_b()])
        .expect("valid preset tables");

    let mut policies: Vec<ValidPolicy> = valid_custom_policies()
        .iter()
        .map(|p| validate(p).expect("valid policy"))
        .collect();
    for (preset, team_count) in [(RotationType::PresetA, 4), (RotationType::PresetB, 2)] {
        let policy = RotationPolicy::preset(preset, team_count);
        policies.push(validate_with(&policy, &catalog).expect("valid preset policy"));
    }
    policies
}

#[test]
fn test_team_always_in_range() {
    let policies = all_valid_policies();
    assert!(policies.iter().any(|p| p.rotation_type().is_preset()));

    for valid in policies {
        for offset in 0..valid.cycle_length_days() * 2 {
            let team = TeamAssigner::team_for_offset(&valid, offset);
            assert!(team >= 1 && team <= valid.team_count());
        }
    }
}

#[test]
fn test_day_before_reference_is_last_offset() {
    let mut policy = weekly_policy();
    policy.pattern_mode = PatternMode::Daily;
    let valid = validate(&policy).unwrap();

    assert_eq!(CycleClock::offset_in_cycle(&valid, ymd(2024, 12, 31)), 27);
}

#[test]
fn test_weekly_pattern_determinism() {
    let valid = validate(&weekly_policy()).unwrap();

    assert!((0..=6).all(|o| TeamAssigner::team_for_offset(&valid, o) == 1));
    assert!((7..=13).all(|o| TeamAssigner::team_for_offset(&valid, o) == 2));
    assert_eq!(TeamAssigner::team_for_offset(&valid, 28), 1);
}

#[test]
fn test_daily_pattern_alternates() {
    let valid = validate(&daily_policy()).unwrap();
    let teams: Vec<u32> = (0..4).map(|o| TeamAssigner::team_for_offset(&valid, o)).collect();
    assert_eq!(teams, vec![1, 2, 1, 2]);
}

#[test]
fn test_prefill_week_has_no_gaps_or_duplicates() {
    let valid = validate(&weekly_policy()).unwrap();
    let entries: Vec<RosterEntry> = RosterPrefiller::prefill(&valid, ymd(2025, 3, 1), ymd(2025, 3, 7))
        .unwrap()
        .collect();

    assert_eq!(entries.len(), 7);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.date, ymd(2025, 3, 1) + Duration::days(i as i64));
    }
}

#[test]
fn test_prefill_across_leap_february() {
    let valid = validate(&daily_policy()).unwrap();
    let entries: Vec<RosterEntry> = RosterPrefiller::prefill(&valid, ymd(2028, 2, 27), ymd(2028, 3, 2))
        .unwrap()
        .collect();

    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    assert_eq!(
        dates,
        vec![
            ymd(2028, 2, 27),
            ymd(2028, 2, 28),
            ymd(2028, 2, 29),
            ymd(2028, 3, 1),
            ymd(2028, 3, 2)
        ]
    );
    // 每日轮换 2 队: 连续两天必然不同队
    assert!(entries.windows(2).all(|w| w[0].team_index != w[1].team_index));
}

#[test]
fn test_validate_rejects_bad_team_counts_and_missing_reference() {
    for count in [1, 9] {
        let mut policy = weekly_policy();
        policy.team_count = count;
        assert!(matches!(
            validate(&policy),
            Err(ConfigError::InvalidTeamCount { .. })
        ));
    }

    let mut policy = weekly_policy();
    policy.reference_date = None;
    assert_eq!(validate(&policy).unwrap_err(), ConfigError::MissingReferenceDate);
}

#[test]
fn test_prefill_inverted_range_fails() {
    let valid = validate(&weekly_policy()).unwrap();
    assert!(matches!(
        RosterPrefiller::prefill(&valid, ymd(2025, 3, 8), ymd(2025, 3, 1)),
        Err(ConfigError::InvalidRange { .. })
    ));
}

#[test]
fn test_roster_matches_pointwise_computation() {
    let mut policy = RotationPolicy::custom(3, 42, PatternMode::TwoDay, ymd(2025, 1, 1));
    policy.favor_on_call_team = true;
    let valid = validate(&policy).unwrap();

    for entry in RosterPrefiller::prefill(&valid, ymd(2024, 11, 1), ymd(2025, 2, 28)).unwrap() {
        assert_eq!(entry.team_index, TeamAssigner::team_on(&valid, entry.date));
        assert!(entry.priority_bonus);
    }
}
