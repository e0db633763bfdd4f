// ==========================================
// 值班轮换核心 - 配置管理器
// ==========================================
// 职责: 轮换策略 / 预设值班表的加载与写入
// 存储: config_kv 表 (key-value + scope)
// - 租户策略: scope_id='tenant/{tenant_id}', key='rotation_policy/{category}'
// - 预设值班表: scope_id='global', key='rotation_preset/{preset}'
// ==========================================

use crate::config::error::{StoreError, StoreResult};
use crate::config::policy_source::PolicySource;
use crate::db::{configure_sqlite_connection, ensure_config_schema, open_sqlite_connection, GLOBAL_SCOPE_ID};
use crate::domain::policy::RotationPolicy;
use crate::domain::preset::PresetDefinition;
use crate::domain::types::{RotationType, WorkforceCategory};
use crate::engine::preset_catalog::PresetCatalog;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> StoreResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        ensure_config_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建 ConfigManager
    ///
    /// 说明：会对传入连接再次应用统一 PRAGMA 并补建配置表（幂等）。
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> StoreResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| StoreError::LockError(e.to_string()))?;
            configure_sqlite_connection(&guard)?;
            ensure_config_schema(&guard)?;
        }

        Ok(Self { conn })
    }

    fn get_conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))
    }

    /// 从 config_kv 表读取配置值
    fn get_config_value(&self, scope_id: &str, key: &str) -> StoreResult<Option<String>> {
        let conn = self.get_conn()?;

        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE scope_id = ?1 AND key = ?2",
                params![scope_id, key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    /// 写入配置值（作用域不存在时自动创建）
    fn put_config_value(
        &self,
        scope_id: &str,
        scope_type: &str,
        scope_key: &str,
        key: &str,
        value: &str,
    ) -> StoreResult<()> {
        let conn = self.get_conn()?;

        conn.execute(
            "INSERT OR IGNORE INTO config_scope (scope_id, scope_type, scope_key) VALUES (?1, ?2, ?3)",
            params![scope_id, scope_type, scope_key],
        )?;

        // 使用UPSERT语法（SQLite 3.24.0+）
        conn.execute(
            "INSERT INTO config_kv (scope_id, key, value) VALUES (?1, ?2, ?3)
             ON CONFLICT(scope_id, key) DO UPDATE SET value = ?3, updated_at = datetime('now')",
            params![scope_id, key, value],
        )?;

        Ok(())
    }

    fn delete_config_value(&self, scope_id: &str, key: &str) -> StoreResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM config_kv WHERE scope_id = ?1 AND key = ?2",
            params![scope_id, key],
        )?;
        Ok(affected > 0)
    }

    fn get_json<T: DeserializeOwned>(&self, scope_id: &str, key: &str) -> StoreResult<Option<T>> {
        let raw = match self.get_config_value(scope_id, key)? {
            Some(v) => v,
            None => return Ok(None),
        };

        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    fn to_json<T: Serialize>(key: &str, value: &T) -> StoreResult<String> {
        serde_json::to_string(value).map_err(|source| StoreError::Malformed {
            key: key.to_string(),
            source,
        })
    }

    // ===== 租户轮换策略 =====

    /// 读取租户轮换策略（原始对象,未校验）
    pub fn get_rotation_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
    ) -> StoreResult<Option<RotationPolicy>> {
        let scope_id = config_keys::tenant_scope(tenant_id)?;
        self.get_json(&scope_id, &config_keys::policy_key(category))
    }

    /// 写入租户轮换策略（覆盖）
    pub fn put_rotation_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        policy: &RotationPolicy,
    ) -> StoreResult<()> {
        let scope_id = config_keys::tenant_scope(tenant_id)?;
        let key = config_keys::policy_key(category);
        let value = Self::to_json(&key, policy)?;

        self.put_config_value(&scope_id, "TENANT", tenant_id.trim(), &key, &value)?;

        tracing::info!(
            tenant_id = tenant_id.trim(),
            category = %category,
            rotation_type = %policy.rotation_type,
            "轮换策略已保存"
        );
        Ok(())
    }

    /// 删除租户轮换策略
    pub fn remove_rotation_policy(&self, tenant_id: &str, category: WorkforceCategory) -> StoreResult<bool> {
        let scope_id = config_keys::tenant_scope(tenant_id)?;
        let removed = self.delete_config_value(&scope_id, &config_keys::policy_key(category))?;

        tracing::info!(tenant_id = tenant_id.trim(), category = %category, removed, "轮换策略已删除");
        Ok(removed)
    }

    // ===== 预设值班表 =====

    /// 导入一份预设值班表（结构无效时拒绝写入）
    pub fn put_preset_definition(&self, definition: &PresetDefinition) -> StoreResult<()> {
        PresetCatalog::new().register(definition.clone())?;

        let key = config_keys::preset_key(definition.rotation_type);
        let value = Self::to_json(&key, definition)?;
        self.put_config_value(GLOBAL_SCOPE_ID, "GLOBAL", GLOBAL_SCOPE_ID, &key, &value)?;

        tracing::info!(
            preset = %definition.rotation_type,
            source = definition.source.as_deref().unwrap_or("-"),
            "预设值班表已导入"
        );
        Ok(())
    }

    /// 读取全部预设值班表组成目录
    pub fn get_preset_catalog(&self) -> StoreResult<PresetCatalog> {
        let mut catalog = PresetCatalog::new();

        for preset in RotationType::PRESETS {
            let key = config_keys::preset_key(preset);
            if let Some(definition) = self.get_json::<PresetDefinition>(GLOBAL_SCOPE_ID, &key)? {
                catalog.register(definition)?;
            }
        }

        Ok(catalog)
    }
}

// ==========================================
// PolicySource Trait 实现
// ==========================================
#[async_trait]
impl PolicySource for ConfigManager {
    async fn load_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
    ) -> StoreResult<Option<RotationPolicy>> {
        self.get_rotation_policy(tenant_id, category)
    }

    async fn store_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        policy: &RotationPolicy,
    ) -> StoreResult<()> {
        self.put_rotation_policy(tenant_id, category, policy)
    }

    async fn remove_policy(&self, tenant_id: &str, category: WorkforceCategory) -> StoreResult<bool> {
        self.remove_rotation_policy(tenant_id, category)
    }

    async fn load_preset_catalog(&self) -> StoreResult<PresetCatalog> {
        self.get_preset_catalog()
    }
}

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    use crate::config::error::{StoreError, StoreResult};
    use crate::domain::types::{RotationType, WorkforceCategory};

    // 轮换策略
    pub const ROTATION_POLICY_PREFIX: &str = "rotation_policy";

    // 预设值班表
    pub const ROTATION_PRESET_PREFIX: &str = "rotation_preset";

    /// 租户作用域 ID（与 'global' 隔离）
    pub fn tenant_scope(tenant_id: &str) -> StoreResult<String> {
        let id = tenant_id.trim();
        if id.is_empty() {
            return Err(StoreError::EmptyTenant);
        }
        Ok(format!("tenant/{}", id))
    }

    pub fn policy_key(category: WorkforceCategory) -> String {
        format!("{}/{}", ROTATION_POLICY_PREFIX, category.as_str())
    }

    pub fn preset_key(rotation_type: RotationType) -> String {
        format!("{}/{}", ROTATION_PRESET_PREFIX, rotation_type.as_str())
    }
}
