// ==========================================
// 值班轮换核心 - 周期时钟
// ==========================================
// offset = (date - anchor) 的天数差 floored-mod 周期天数
// 使用整日差而非年月日分量相减,跨月/跨年/闰年结果稳定
// 早于锚点的日期按欧几里得取模归入 [0, cycle)
// ==========================================

use crate::domain::policy::ValidPolicy;
use chrono::{Duration, NaiveDate};

/// CycleClock - 日期到周期偏移的换算
pub struct CycleClock;

impl CycleClock {
    /// 日期在轮换周期内的偏移（0 基）
    ///
    /// # 返回
    /// - [0, cycle_length_days) 内的偏移
    pub fn offset_in_cycle(policy: &ValidPolicy, date: NaiveDate) -> u32 {
        let cycle = i64::from(policy.cycle_length_days());
        let days = (date - policy.anchor_date()).num_days();
        days.rem_euclid(cycle) as u32
    }

    /// 包含该日期的周期的第一天
    pub fn cycle_start(policy: &ValidPolicy, date: NaiveDate) -> NaiveDate {
        let offset = Self::offset_in_cycle(policy, date);
        date - Duration::days(i64::from(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policy::RotationPolicy;
    use crate::domain::types::PatternMode;
    use crate::engine::validation::validate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(cycle: u32, reference: NaiveDate) -> ValidPolicy {
        validate(&RotationPolicy::custom(4, cycle, PatternMode::Daily, reference)).unwrap()
    }

    #[test]
    fn test_reference_date_is_offset_zero() {
        let p = policy(28, ymd(2025, 1, 1));
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2025, 1, 1)), 0);
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2025, 1, 28)), 27);
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2025, 1, 29)), 0);
    }

    #[test]
    fn test_day_before_reference_wraps_to_last_day() {
        let p = policy(28, ymd(2025, 1, 1));
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2024, 12, 31)), 27);
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2024, 12, 4)), 0);
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2024, 12, 3)), 27);
    }

    #[test]
    fn test_leap_day_counts_as_a_day() {
        // 2024-02-28 -> 2024-03-01 跨过 2 月 29 日,相差 2 天
        let p = policy(7, ymd(2024, 2, 28));
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2024, 2, 29)), 1);
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2024, 3, 1)), 2);
    }

    #[test]
    fn test_year_boundary() {
        let p = policy(14, ymd(2024, 12, 25));
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2025, 1, 7)), 13);
        assert_eq!(CycleClock::offset_in_cycle(&p, ymd(2025, 1, 8)), 0);
    }

    #[test]
    fn test_far_past_dates_stay_in_range() {
        let p = policy(21, ymd(2025, 1, 1));
        for year in [1900, 1999, 2000, 2024] {
            let offset = CycleClock::offset_in_cycle(&p, ymd(year, 6, 15));
            assert!(offset < 21, "offset {} out of range for {}", offset, year);
        }
    }

    #[test]
    fn test_cycle_start() {
        let p = policy(28, ymd(2025, 1, 1));
        assert_eq!(CycleClock::cycle_start(&p, ymd(2025, 1, 15)), ymd(2025, 1, 1));
        assert_eq!(CycleClock::cycle_start(&p, ymd(2024, 12, 31)), ymd(2024, 12, 4));
    }
}
