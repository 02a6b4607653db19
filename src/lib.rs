// ==========================================
// 车队载货分配系统 - 核心库
// ==========================================
// 系统定位: 装载分配 + 出车可行性校验
// 并发模型: 单线程同步；车队的装卸需独占访问，
//           可行性校验只读真实车队，在副本上模拟
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 装载与可行性规则
pub mod engine;

// 配置层 - 车队配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CargoType, UnitRole};

// 领域实体
pub use domain::{
    CapacityConstraint, CapacityUnit, Cargo, DomainError, Fleet, FuelPolicy, FuelProfile,
    TruckSpec, Vehicle, VehicleKind, VehicleSpec,
};

// 引擎
pub use engine::{
    AllocationError, CargoAllocator, CargoAssignment, FeasibilityEngine, FeasibilityError,
    FeasibilityReport, LoadReport,
};

// 配置
pub use config::{ConfigError, ConfigManager, FleetConfig};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "车队载货分配系统";
