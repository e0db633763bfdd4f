// ==========================================
// 值班轮换核心 - 轮换策略读写 Trait
// ==========================================
// 职责: 定义 API 层所需的策略读写接口（不包含实现）
// 实现者: ConfigManager（config_kv 表）,也可替换为远程配置服务
// 红线: 不做策略校验,校验由 API 层调用引擎完成
// ==========================================

use crate::config::error::StoreResult;
use crate::domain::policy::RotationPolicy;
use crate::domain::types::WorkforceCategory;
use crate::engine::preset_catalog::PresetCatalog;
use async_trait::async_trait;

#[async_trait]
pub trait PolicySource: Send + Sync {
    /// 读取租户某类人员的轮换策略
    ///
    /// # 返回
    /// - Some(RotationPolicy): 已配置
    /// - None: 尚未配置
    async fn load_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
    ) -> StoreResult<Option<RotationPolicy>>;

    /// 写入租户某类人员的轮换策略（覆盖）
    async fn store_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        policy: &RotationPolicy,
    ) -> StoreResult<()>;

    /// 删除租户某类人员的轮换策略
    ///
    /// # 返回
    /// - true: 已删除
    /// - false: 原本不存在
    async fn remove_policy(&self, tenant_id: &str, category: WorkforceCategory) -> StoreResult<bool>;

    /// 读取全部已导入的预设值班表
    async fn load_preset_catalog(&self) -> StoreResult<PresetCatalog>;
}
