// ==========================================
// 值班轮换核心 - 轮换管理 API
// ==========================================
// 职责: 策略查询/保存/重置、队伍数量调整、排班预填、CSV 导出
// 红线: 策略校验失败必须阻断排班计算,不返回部分结果
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::Mutex;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::{check_policy_category, check_roster_range};
use crate::config::policy_source::PolicySource;
use crate::domain::policy::{RotationPolicy, ValidPolicy};
use crate::domain::roster::RosterEntry;
use crate::domain::team::Team;
use crate::domain::types::{RotationType, WorkforceCategory};
use crate::engine::error::ConfigError;
use crate::engine::{
    export_roster_csv, resize_teams, validate_with, RosterPrefiller, TeamAssigner,
};

// ==========================================
// RotationApi - 轮换管理 API
// ==========================================

/// 轮换管理API
///
/// 职责：
/// 1. 策略读写（保存前校验,参考日期锁定）
/// 2. 队伍数量调整
/// 3. 排班预填 / 自动预填 / CSV 导出
///
/// 写操作（保存/重置/调整队伍）在同一实例内串行执行,
/// 读取现有策略与写入之间不会插入其他写操作。
/// 多个实例共享同一存储时由调用方保证只有一个写入方。
pub struct RotationApi {
    source: Arc<dyn PolicySource>,
    write_lock: Mutex<()>,
}

impl RotationApi {
    /// 创建新的RotationApi实例
    pub fn new(source: Arc<dyn PolicySource>) -> Self {
        Self {
            source,
            write_lock: Mutex::new(()),
        }
    }

    /// 查询策略（原始对象）
    pub async fn get_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
    ) -> ApiResult<Option<RotationPolicy>> {
        Ok(self.source.load_policy(tenant_id, category).await?)
    }

    /// 加载并校验策略
    ///
    /// # 错误
    /// - NotFound: 尚未配置
    /// - Config: 策略校验失败
    pub async fn load_valid_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
    ) -> ApiResult<ValidPolicy> {
        let policy = self
            .source
            .load_policy(tenant_id, category)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("轮换策略(tenant={}, category={})", tenant_id, category))
            })?;

        self.validate(&policy).await
    }

    /// 保存策略
    ///
    /// # 规则
    /// - 校验不通过则不写入
    /// - 参考日期一经设置不可修改（需先重置）,切换到预设日历时保留原参考日期
    pub async fn save_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        mut policy: RotationPolicy,
    ) -> ApiResult<ValidPolicy> {
        check_policy_category(&policy, category)?;

        let _guard = self.write_lock.lock().await;

        let existing = self.source.load_policy(tenant_id, category).await?;
        carry_locked_reference_date(existing.as_ref(), &mut policy);
        if let Some(existing) = &existing {
            check_reference_date_lock(existing, &policy)?;
        }

        let valid = self.validate(&policy).await?;
        self.source.store_policy(tenant_id, category, &policy).await?;

        tracing::info!(
            tenant_id,
            category = %category,
            rotation_type = %policy.rotation_type,
            team_count = policy.team_count,
            active = policy.active,
            "轮换策略保存成功"
        );
        Ok(valid)
    }

    /// 重置策略（删除后可重新设置参考日期）
    pub async fn reset_policy(&self, tenant_id: &str, category: WorkforceCategory) -> ApiResult<bool> {
        let _guard = self.write_lock.lock().await;
        let removed = self.source.remove_policy(tenant_id, category).await?;
        tracing::info!(tenant_id, category = %category, removed, "轮换策略已重置");
        Ok(removed)
    }

    /// 调整值班队数量并保存
    pub async fn resize_teams(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        new_count: u32,
    ) -> ApiResult<ValidPolicy> {
        let _guard = self.write_lock.lock().await;
        let current = self.load_valid_policy(tenant_id, category).await?;
        let resized = resize_teams(&current, new_count)?;

        self.source
            .store_policy(tenant_id, category, resized.policy())
            .await?;

        tracing::info!(
            tenant_id,
            category = %category,
            from = current.team_count(),
            to = new_count,
            "值班队数量已调整"
        );
        Ok(resized)
    }

    /// 指定日期的值班队
    pub async fn team_on(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        date: NaiveDate,
    ) -> ApiResult<Team> {
        let policy = self.load_active_policy(tenant_id, category).await?;
        let index = TeamAssigner::team_on(&policy, date);

        policy
            .team(index)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("值班队(index={})", index)))
    }

    /// 预览排班预填
    ///
    /// # 错误
    /// - RotationDisabled: 策略未启用
    /// - Config(InvalidRange / RangeTooLong): 区间无效
    pub async fn preview_roster(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<RosterEntry>> {
        check_roster_range(start, end)?;
        let policy = self.load_active_policy(tenant_id, category).await?;

        let entries: Vec<RosterEntry> = RosterPrefiller::prefill(&policy, start, end)?.collect();

        tracing::debug!(
            tenant_id,
            category = %category,
            %start,
            %end,
            days = entries.len(),
            "排班预填完成"
        );
        Ok(entries)
    }

    /// 自动预填
    ///
    /// # 返回
    /// - Ok(None): 未配置 / 未启用 / 未开启自动预填
    /// - Ok(Some(entries)): 预填结果
    pub async fn auto_prefill(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Option<Vec<RosterEntry>>> {
        check_roster_range(start, end)?;

        let policy = match self.source.load_policy(tenant_id, category).await? {
            Some(p) if p.active && p.auto_prefill => p,
            _ => {
                tracing::debug!(tenant_id, category = %category, "未开启自动预填,跳过");
                return Ok(None);
            }
        };

        let valid = self.validate(&policy).await?;
        let entries = RosterPrefiller::prefill(&valid, start, end)?.collect();
        Ok(Some(entries))
    }

    /// 导出排班预填 CSV
    pub async fn export_roster_csv(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ApiResult<Vec<u8>> {
        check_roster_range(start, end)?;
        let policy = self.load_active_policy(tenant_id, category).await?;

        let roster = RosterPrefiller::prefill(&policy, start, end)?;
        Ok(export_roster_csv(roster, &policy)?)
    }

    async fn load_active_policy(
        &self,
        tenant_id: &str,
        category: WorkforceCategory,
    ) -> ApiResult<ValidPolicy> {
        let policy = self.load_valid_policy(tenant_id, category).await?;
        if !policy.policy().active {
            return Err(ApiError::RotationDisabled {
                tenant_id: tenant_id.to_string(),
                category,
            });
        }
        Ok(policy)
    }

    async fn validate(&self, policy: &RotationPolicy) -> ApiResult<ValidPolicy> {
        let catalog = if policy.rotation_type.is_preset() {
            self.source.load_preset_catalog().await?
        } else {
            Default::default()
        };

        validate_with(policy, &catalog).map_err(|e| {
            tracing::warn!(
                rotation_type = %policy.rotation_type,
                error = %e,
                "轮换策略校验失败"
            );
            ApiError::from(e)
        })
    }
}

/// 预设策略不使用参考日期,但需原样保留已锁定的参考日期
fn carry_locked_reference_date(existing: Option<&RotationPolicy>, incoming: &mut RotationPolicy) {
    if incoming.rotation_type.is_preset() {
        incoming.reference_date = existing.and_then(|p| p.reference_date);
    }
}

/// 已保存的参考日期不可被自定义策略修改
fn check_reference_date_lock(existing: &RotationPolicy, incoming: &RotationPolicy) -> Result<(), ConfigError> {
    match (existing.reference_date, incoming.rotation_type) {
        (Some(current), RotationType::Custom) if incoming.reference_date != Some(current) => {
            Err(ConfigError::ReferenceDateLocked {
                current,
                requested: incoming.reference_date,
            })
        }
        _ => Ok(()),
    }
}
