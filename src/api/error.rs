// ==========================================
// 值班轮换核心 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,把引擎/存储错误转换为面向操作员的错误
// ==========================================

use crate::config::error::StoreError;
use crate::domain::types::WorkforceCategory;
use crate::engine::error::ConfigError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("轮换未启用: tenant={tenant_id}, category={category}")]
    RotationDisabled {
        tenant_id: String,
        category: WorkforceCategory,
    },

    /// 策略校验/计算输入错误（阻断排班计算）
    #[error("轮换配置错误: {0}")]
    Config(#[from] ConfigError),

    // ==========================================
    // 数据访问错误
    // ==========================================
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    #[error("数据库连接失败: {0}")]
    DatabaseConnectionError(String),

    #[error("配置数据损坏: {0}")]
    CorruptConfig(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 StoreError 转换
// ==========================================
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => ApiError::DatabaseError(e.to_string()),
            StoreError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("数据库锁获取失败: {}", msg))
            }
            StoreError::Malformed { key, source } => {
                ApiError::CorruptConfig(format!("key={}: {}", key, source))
            }
            StoreError::InvalidPreset(e) => ApiError::Config(e),
            StoreError::EmptyTenant => ApiError::InvalidInput("租户 ID 不能为空".to_string()),
        }
    }
}

impl ApiError {
    /// 面向操作员的提示文案键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Config(e) => e.i18n_key(),
            ApiError::InvalidInput(_) => "error.invalid_input",
            ApiError::NotFound(_) => "error.not_found",
            ApiError::RotationDisabled { .. } => "error.rotation_disabled",
            ApiError::DatabaseError(_)
            | ApiError::DatabaseConnectionError(_)
            | ApiError::CorruptConfig(_)
            | ApiError::Other(_) => "error.internal",
        }
    }

    /// 按当前语言渲染的提示文案
    pub fn localized_message(&self) -> String {
        crate::i18n::t(self.i18n_key())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
