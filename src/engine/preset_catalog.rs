// ==========================================
// 值班轮换核心 - 预设日历目录
// ==========================================
// 职责: 登记外部发布的预设值班表,登记时校验结构
// 规则:
// - preset_A: 28 天周期 / 4 队
// - preset_B: 4 天周期
// - preset_C: 连续值班,表内必须用到每一支队伍
// ==========================================

use crate::domain::preset::PresetDefinition;
use crate::domain::team::{MAX_TEAM_COUNT, MIN_TEAM_COUNT};
use crate::domain::types::RotationType;
use crate::engine::error::{ConfigError, ConfigResult};
use std::collections::BTreeMap;

/// PresetCatalog - 预设日历目录
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    definitions: BTreeMap<RotationType, PresetDefinition>,
}

impl PresetCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从多条定义构建目录（任一条无效即失败）
    pub fn from_definitions<I>(definitions: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = PresetDefinition>,
    {
        let mut catalog = Self::new();
        for definition in definitions {
            catalog.register(definition)?;
        }
        Ok(catalog)
    }

    /// 登记预设值班表（同类型覆盖旧表）
    pub fn register(&mut self, definition: PresetDefinition) -> ConfigResult<()> {
        check_definition(&definition)?;

        tracing::debug!(
            preset = %definition.rotation_type,
            cycle_length_days = definition.cycle_length_days,
            team_count = definition.team_count,
            "登记预设值班表"
        );

        self.definitions.insert(definition.rotation_type, definition);
        Ok(())
    }

    pub fn get(&self, rotation_type: RotationType) -> Option<&PresetDefinition> {
        self.definitions.get(&rotation_type)
    }

    pub fn contains(&self, rotation_type: RotationType) -> bool {
        self.definitions.contains_key(&rotation_type)
    }

    pub fn definitions(&self) -> impl Iterator<Item = &PresetDefinition> {
        self.definitions.values()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn check_definition(definition: &PresetDefinition) -> ConfigResult<()> {
    let rotation_type = definition.rotation_type;
    let invalid = |reason: String| ConfigError::InvalidPresetTable {
        rotation_type,
        reason,
    };

    if !rotation_type.is_preset() {
        return Err(invalid("custom 不能登记为预设日历".to_string()));
    }

    if definition.team_count < MIN_TEAM_COUNT || definition.team_count > MAX_TEAM_COUNT {
        return Err(invalid(format!(
            "队伍数 {} 超出范围 {}..={}",
            definition.team_count, MIN_TEAM_COUNT, MAX_TEAM_COUNT
        )));
    }

    if let Some(expected) = rotation_type.fixed_cycle_length() {
        if definition.cycle_length_days != expected {
            return Err(invalid(format!(
                "周期必须为 {} 天,实际 {} 天",
                expected, definition.cycle_length_days
            )));
        }
    }

    if let Some(expected) = rotation_type.fixed_team_count() {
        if definition.team_count != expected {
            return Err(invalid(format!(
                "队伍数必须为 {},实际 {}",
                expected, definition.team_count
            )));
        }
    }

    if definition.cycle_length_days == 0 {
        return Err(invalid("周期天数不能为 0".to_string()));
    }

    if definition.table.len() != definition.cycle_length_days as usize {
        return Err(invalid(format!(
            "值班表长度 {} 与周期天数 {} 不一致",
            definition.table.len(),
            definition.cycle_length_days
        )));
    }

    if let Some((day, team)) = definition
        .table
        .iter()
        .enumerate()
        .find(|(_, team)| **team < 1 || **team > definition.team_count)
    {
        return Err(invalid(format!(
            "第 {} 天的队伍编号 {} 超出 1..={}",
            day, team, definition.team_count
        )));
    }

    if rotation_type == RotationType::PresetC {
        let missing: Vec<u32> = (1..=definition.team_count)
            .filter(|team| !definition.table.contains(team))
            .collect();
        if !missing.is_empty() {
            return Err(invalid(format!("连续值班表缺少队伍 {:?}", missing)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn definition(rotation_type: RotationType, team_count: u32, table: Vec<u32>) -> PresetDefinition {
        PresetDefinition {
            rotation_type,
            cycle_length_days: table.len() as u32,
            team_count,
            anchor_date: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
            table,
            source: None,
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = PresetCatalog::new();
        catalog
            .register(definition(RotationType::PresetB, 2, vec![1, 1, 2, 2]))
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains(RotationType::PresetB));
        assert!(catalog.get(RotationType::PresetA).is_none());
    }

    #[test]
    fn test_rejects_custom() {
        let err = PresetCatalog::new()
            .register(definition(RotationType::Custom, 2, vec![1, 2, 1, 2]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPresetTable { .. }));
    }

    #[test]
    fn test_preset_a_requires_28_days_and_4_teams() {
        let short = definition(RotationType::PresetA, 4, vec![1; 21]);
        assert!(PresetCatalog::new().register(short).is_err());

        let three_teams = definition(RotationType::PresetA, 3, vec![1; 28]);
        assert!(PresetCatalog::new().register(three_teams).is_err());

        let ok: Vec<u32> = (0..28).map(|d| 1 + (d / 7) % 4).collect();
        assert!(PresetCatalog::new()
            .register(definition(RotationType::PresetA, 4, ok))
            .is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_team() {
        let err = PresetCatalog::new()
            .register(definition(RotationType::PresetB, 2, vec![1, 2, 3, 1]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPresetTable { .. }));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let mut def = definition(RotationType::PresetC, 2, vec![1, 2, 1]);
        def.cycle_length_days = 4;
        assert!(PresetCatalog::new().register(def).is_err());
    }

    #[test]
    fn test_continuous_preset_must_use_every_team() {
        let err = PresetCatalog::new()
            .register(definition(RotationType::PresetC, 3, vec![1, 2, 1, 2]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPresetTable { .. }));
    }
}
