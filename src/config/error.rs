// ==========================================
// 值班轮换核心 - 配置存储错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::error::ConfigError;
use thiserror::Error;

/// 配置存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("数据库错误: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("数据库锁获取失败: {0}")]
    LockError(String),

    #[error("配置值格式错误 (key={key}): {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("预设值班表无效: {0}")]
    InvalidPreset(#[from] ConfigError),

    #[error("租户 ID 不能为空")]
    EmptyTenant,
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
