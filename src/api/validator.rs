// ==========================================
// 值班轮换核心 - 请求校验
// ==========================================
// 职责: 在调用引擎前拒绝不合理的请求
// - 排班区间最长 366 天（自定义周期上限一年）
// - 全职策略不允许开启值班队优先加分
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::policy::RotationPolicy;
use crate::domain::types::WorkforceCategory;
use crate::engine::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;

/// 单次排班预填允许的最长天数（含首尾）
pub const MAX_ROSTER_RANGE_DAYS: i64 = 366;

/// 校验排班区间
///
/// # 错误
/// - InvalidRange: start > end
/// - RangeTooLong: 区间超过 MAX_ROSTER_RANGE_DAYS
pub fn check_roster_range(start: NaiveDate, end: NaiveDate) -> ConfigResult<()> {
    if start > end {
        return Err(ConfigError::InvalidRange { start, end });
    }

    let days = (end - start).num_days() + 1;
    if days > MAX_ROSTER_RANGE_DAYS {
        return Err(ConfigError::RangeTooLong {
            days,
            max_days: MAX_ROSTER_RANGE_DAYS,
        });
    }

    Ok(())
}

/// 校验策略与人员类别是否匹配
pub fn check_policy_category(policy: &RotationPolicy, category: WorkforceCategory) -> ApiResult<()> {
    if category == WorkforceCategory::FullTime && policy.favor_on_call_team {
        return Err(ApiError::InvalidInput(
            "值班队优先加分仅适用于兼职人员轮换".to_string(),
        ));
    }
    Ok(())
}
