// ==========================================
// 值班轮换核心 - 排班预填
// ==========================================
// 职责: 为 [start, end] 每日生成 (日期, 值班队) 条目
// 说明:
// - 惰性生成,超长区间不一次性物化
// - 可重复计算（Clone 即从当前位置重放）
// - 仅标记优先加分资格,不做人员分配
// ==========================================

use crate::domain::policy::ValidPolicy;
use crate::domain::roster::RosterEntry;
use crate::engine::cycle_clock::CycleClock;
use crate::engine::error::{ConfigError, ConfigResult};
use crate::engine::team_assigner::TeamAssigner;
use chrono::NaiveDate;
use std::iter::FusedIterator;

/// RosterPrefiller - 排班预填器
pub struct RosterPrefiller;

impl RosterPrefiller {
    /// 生成预填序列
    ///
    /// # 参数
    /// - policy: 已校验策略
    /// - start / end: 闭区间,要求 start <= end
    ///
    /// # 返回
    /// - Ok(Roster): 按日期升序的惰性序列
    /// - Err(InvalidRange): start > end
    pub fn prefill(policy: &ValidPolicy, start: NaiveDate, end: NaiveDate) -> ConfigResult<Roster<'_>> {
        if start > end {
            return Err(ConfigError::InvalidRange { start, end });
        }

        let days = (end - start).num_days() + 1;
        Ok(Roster {
            policy,
            cursor: start,
            remaining: days as usize,
        })
    }
}

/// 预填序列（惰性迭代器）
#[derive(Debug, Clone)]
pub struct Roster<'a> {
    policy: &'a ValidPolicy,
    cursor: NaiveDate,
    remaining: usize,
}

impl<'a> Roster<'a> {
    fn entry_for(&self, date: NaiveDate) -> RosterEntry {
        let offset = CycleClock::offset_in_cycle(self.policy, date);
        RosterEntry {
            date,
            team_index: TeamAssigner::team_for_offset(self.policy, offset),
            priority_bonus: self.policy.favor_on_call_team(),
        }
    }
}

impl<'a> Iterator for Roster<'a> {
    type Item = RosterEntry;

    fn next(&mut self) -> Option<RosterEntry> {
        if self.remaining == 0 {
            return None;
        }

        let date = self.cursor;
        self.remaining -= 1;
        if self.remaining > 0 {
            // end 为合法日期,剩余天数 > 0 时 succ 必然存在
            if let Some(next) = date.succ_opt() {
                self.cursor = next;
            } else {
                self.remaining = 0;
            }
        }

        Some(self.entry_for(date))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> ExactSizeIterator for Roster<'a> {}

impl<'a> FusedIterator for Roster<'a> {}
