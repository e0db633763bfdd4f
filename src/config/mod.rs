// ==========================================
// 值班轮换核心 - 配置层
// ==========================================
// 职责: 轮换策略与预设值班表的持久化
// 存储: config_kv 表 (scope_id + key -> JSON)
// ==========================================

pub mod config_manager;
pub mod error;
pub mod policy_source;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::{StoreError, StoreResult};
pub use policy_source::PolicySource;
