// ==========================================
// 值班轮换核心 - 排班预填条目
// ==========================================

use crate::domain::team::TeamIndex;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 单日预填结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub date: NaiveDate,
    /// 当日值班队
    pub team_index: TeamIndex,
    /// 值班队成员在自动排班中是否享有优先加分
    pub priority_bonus: bool,
}

impl RosterEntry {
    /// 指定队伍的成员在当日是否获得优先加分
    ///
    /// 仅当策略开启 favor_on_call_team 且该队为当日值班队时成立
    pub fn grants_bonus_to(&self, team_index: TeamIndex) -> bool {
        self.priority_bonus && self.team_index == team_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grants_bonus_only_to_on_call_team() {
        let entry = RosterEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            team_index: 2,
            priority_bonus: true,
        };
        assert!(entry.grants_bonus_to(2));
        assert!(!entry.grants_bonus_to(1));

        let no_bonus = RosterEntry {
            priority_bonus: false,
            ..entry
        };
        assert!(!no_bonus.grants_bonus_to(2));
    }
}
