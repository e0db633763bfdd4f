// ==========================================
// 值班轮换核心 - 引擎层
// ==========================================
// 职责: 策略校验、周期时钟、值班队解析、排班预填
// 红线: 引擎全部为纯函数,不读写存储,不持有可变状态
// ==========================================

pub mod cycle_clock;
pub mod error;
pub mod preset_catalog;
pub mod roster_export;
pub mod roster_prefiller;
pub mod team_assigner;
pub mod team_resize;
pub mod validation;

// 重导出核心引擎
pub use cycle_clock::CycleClock;
pub use error::{ConfigError, ConfigResult};
pub use preset_catalog::PresetCatalog;
pub use roster_export::export_roster_csv;
pub use roster_prefiller::{Roster, RosterPrefiller};
pub use team_assigner::TeamAssigner;
pub use team_resize::resize_teams;
pub use validation::{validate, validate_with, MAX_CYCLE_LENGTH_DAYS, MIN_CYCLE_LENGTH_DAYS};
