// ==========================================
// 值班轮换核心 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供外部排班/报表引擎调用
// ==========================================

pub mod error;
pub mod rotation_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use rotation_api::RotationApi;
pub use validator::{check_policy_category, check_roster_range, MAX_ROSTER_RANGE_DAYS};
