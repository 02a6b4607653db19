// ==========================================
// 车队载货分配系统 - 配置层
// ==========================================
// 职责: 车队与燃油策略配置,支持环境变量覆写
// 存储: JSON 文件
// ==========================================

pub mod config_manager;
pub mod error;
pub mod fleet_config;

// 重导出核心配置管理器
pub use config_manager::{env_keys, ConfigManager, SUPPORTED_LOCALES};
pub use error::ConfigError;
pub use fleet_config::FleetConfig;
