// ==========================================
// 消防队值班轮换核心 - 核心库
// ==========================================
// 职责: 值班队轮换策略校验、周期时钟、值班队解析、排班预填
// 系统定位: 纯计算核心 + 配置存储,为外部排班/报表引擎供数
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 轮换计算
pub mod engine;

// 配置层 - 策略持久化
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DutyRule, PatternMode, PresetDefinition, Rgb, RosterEntry, RotationPolicy, RotationType,
    Team, TeamIndex, ValidPolicy, WorkforceCategory,
};

// 引擎
pub use engine::{
    export_roster_csv, resize_teams, validate, validate_with, ConfigError, CycleClock,
    PresetCatalog, Roster, RosterPrefiller, TeamAssigner,
};

// 配置
pub use config::{ConfigManager, PolicySource};

// API
pub use api::{ApiError, RotationApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "消防队值班轮换核心";
