// ==========================================
// 值班轮换核心 - 领域模型层
// ==========================================
// 职责: 定义轮换策略、值班队、预设日历、预填条目
// 红线: 不含数据访问逻辑,不含计算逻辑
// ==========================================

pub mod policy;
pub mod preset;
pub mod roster;
pub mod team;
pub mod types;

// 重导出核心类型
pub use policy::{DutyRule, RotationPolicy, ValidPolicy};
pub use preset::PresetDefinition;
pub use roster::RosterEntry;
pub use team::{default_teams, Rgb, Team, TeamIndex, DEFAULT_TEAM_COLORS, MAX_TEAM_COUNT, MIN_TEAM_COUNT};
pub use types::{PatternMode, RotationType, WorkforceCategory};
