// ==========================================
// 值班轮换核心 - 值班队实体
// ==========================================
// 颜色序列化格式: "#RRGGBB"（与设置界面一致）
// ==========================================

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 值班队编号（从 1 开始）
pub type TeamIndex = u32;

/// 允许的最少 / 最多值班队数
pub const MIN_TEAM_COUNT: u32 = 2;
pub const MAX_TEAM_COUNT: u32 = 8;

/// 新增值班队的默认配色（按编号取用）
pub const DEFAULT_TEAM_COLORS: [Rgb; MAX_TEAM_COUNT as usize] = [
    Rgb::new(0xDC, 0x26, 0x26), // 红
    Rgb::new(0x25, 0x63, 0xEB), // 蓝
    Rgb::new(0x16, 0xA3, 0x4A), // 绿
    Rgb::new(0xCA, 0x8A, 0x04), // 黄
    Rgb::new(0x93, 0x33, 0xEA), // 紫
    Rgb::new(0xEA, 0x58, 0x0C), // 橙
    Rgb::new(0x08, 0x91, 0xB2), // 青
    Rgb::new(0xDB, 0x27, 0x77), // 粉
];

// ==========================================
// Rgb - 队伍颜色
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 解析 "#RRGGBB"（'#' 可省略）
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("无效颜色值: {}", s));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| format!("无效颜色值: {} ({})", s, e))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rgb::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

// ==========================================
// Team - 值班队
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// 队伍编号 1..=team_count
    pub index: TeamIndex,
    /// 显示名称
    pub display_name: String,
    /// 日历显示颜色
    pub color: Rgb,
}

impl Team {
    /// 按编号生成默认队伍（名称 "Équipe N"，颜色取默认色板）
    ///
    /// 编号超出色板时循环取色
    pub fn with_defaults(index: TeamIndex) -> Self {
        let slot = (index.saturating_sub(1) as usize) % DEFAULT_TEAM_COLORS.len();
        Self {
            index,
            display_name: format!("Équipe {}", index),
            color: DEFAULT_TEAM_COLORS[slot],
        }
    }
}

/// 生成 1..=count 的默认队伍列表
pub fn default_teams(count: u32) -> Vec<Team> {
    (1..=count).map(Team::with_defaults).collect()
}
