// ==========================================
// 车队载货分配系统 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、环境变量覆写、车队构建
// 存储: JSON 文件（无持久化）
// ==========================================

use crate::config::error::ConfigError;
use crate::config::fleet_config::FleetConfig;
use crate::domain::fleet::Fleet;
use crate::domain::fuel::FuelPolicy;
use crate::domain::vehicle::Vehicle;
use crate::engine::feasibility::FeasibilityEngine;
use std::path::Path;
use tracing::{debug, info};

/// 环境变量键
pub mod env_keys {
    /// 覆写配置文件中的 locale
    pub const LOCALE: &str = "CARGO_FLEET_LOCALE";
}

/// 已提供翻译的语言
pub const SUPPORTED_LOCALES: [&str; 3] = ["zh-CN", "en", "ru"];

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: FleetConfig,
}

impl ConfigManager {
    /// 从已有配置创建（会做校验）
    pub fn new(config: FleetConfig) -> Result<Self, ConfigError> {
        let manager = Self { config };
        manager.validate()?;
        Ok(manager)
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "加载车队配置");
        Self::from_json_str(&raw)
    }

    /// 从 JSON 字符串加载，并应用环境变量覆写
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: FleetConfig = serde_json::from_str(raw)?;
        if let Ok(locale) = std::env::var(env_keys::LOCALE) {
            let locale = locale.trim();
            if !locale.is_empty() {
                debug!(locale, "环境变量覆写 locale");
                config.locale = Some(locale.to_string());
            }
        }
        Self::new(config)
    }

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn fuel_policy(&self) -> FuelPolicy {
        self.config.fuel_policy
    }

    /// 校验配置
    ///
    /// # 校验规则
    /// 1. 燃油策略参数有效
    /// 2. locale 在已支持列表内
    /// 3. 每辆车的参数可构造出合法车辆
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config
            .fuel_policy
            .validate()
            .map_err(ConfigError::InvalidFuelPolicy)?;

        if let Some(locale) = &self.config.locale {
            if !SUPPORTED_LOCALES.contains(&locale.as_str()) {
                return Err(ConfigError::UnsupportedLocale(locale.clone()));
            }
        }

        self.build_vehicles().map(|_| ())
    }

    /// 应用配置中的语言设置
    pub fn apply_locale(&self) {
        if let Some(locale) = &self.config.locale {
            crate::i18n::set_locale(locale);
        }
    }

    /// 按配置顺序构建车队
    pub fn build_fleet(&self) -> Result<Fleet, ConfigError> {
        let fleet: Fleet = self.build_vehicles()?.into_iter().collect();
        info!(
            vehicles = fleet.len(),
            total_capacity_kg = fleet.total_capacity_kg(),
            "车队构建完成"
        );
        Ok(fleet)
    }

    /// 按配置的燃油策略创建可行性校验引擎
    pub fn feasibility_engine(&self) -> FeasibilityEngine {
        FeasibilityEngine::with_policy(self.config.fuel_policy)
    }

    /// 配置快照（JSON）
    pub fn snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(&self.config)?)
    }

    fn build_vehicles(&self) -> Result<Vec<Vehicle>, ConfigError> {
        self.config
            .vehicles
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                Vehicle::from_spec(spec.clone())
                    .map_err(|source| ConfigError::InvalidVehicle { index, source })
            })
            .collect()
    }
}
