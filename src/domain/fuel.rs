// ==========================================
// 车队载货分配系统 - 燃油参数
// ==========================================
// 职责: 单车燃油参数 + 往返燃油预算策略
// 红线: 百公里油耗必须 > 0（不存在"无限续航"）
// ==========================================

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};

/// 默认往返系数（去程 + 回程）
pub const DEFAULT_ROUND_TRIP_FACTOR: f64 = 2.0;

/// 默认车队燃油预算比例（仅一半油箱容量可用于单程规划）
pub const DEFAULT_FUEL_BUDGET_RATIO: f64 = 0.5;

// ==========================================
// FuelProfile - 单车燃油参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelProfile {
    tank_capacity_l: f64,
    consumption_per_100km_l: f64,
}

impl FuelProfile {
    /// 创建燃油参数
    ///
    /// # 校验规则
    /// 1. 两个值都必须是有限数
    /// 2. 油箱容量 >= 0
    /// 3. 百公里油耗 > 0
    ///
    /// # 返回
    /// - `Some(FuelProfile)`: 参数合法
    /// - `None`: 参数非法（由调用方转换为带车辆标识的错误）
    pub fn new(tank_capacity_l: f64, consumption_per_100km_l: f64) -> Option<Self> {
        let valid = tank_capacity_l.is_finite()
            && consumption_per_100km_l.is_finite()
            && tank_capacity_l >= 0.0
            && consumption_per_100km_l > 0.0;
        valid.then_some(Self {
            tank_capacity_l,
            consumption_per_100km_l,
        })
    }

    pub fn tank_capacity_l(&self) -> f64 {
        self.tank_capacity_l
    }

    pub fn consumption_per_100km_l(&self) -> f64 {
        self.consumption_per_100km_l
    }

    /// 最大行驶距离（公里，向零截断）
    ///
    /// distance = tank / (round_trip_factor * consumption) * 100
    pub fn max_travel_distance_km(&self, round_trip_factor: f64) -> u32 {
        let distance =
            self.tank_capacity_l / (round_trip_factor * self.consumption_per_100km_l) * 100.0;
        // f64 -> u32 的 as 转换向零截断并饱和
        distance as u32
    }

    /// 往返行驶 path_km 所需燃油（升）
    pub fn fuel_needed_l(&self, path_km: u32, round_trip_factor: f64) -> f64 {
        (f64::from(path_km) / 100.0) * self.consumption_per_100km_l * round_trip_factor
    }
}

// ==========================================
// FuelPolicy - 燃油预算策略
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPolicy {
    /// 往返系数
    #[serde(default = "default_round_trip_factor")]
    pub round_trip_factor: f64,

    /// 车队总油箱容量中可用于本次出车的比例 (0, 1]
    #[serde(default = "default_fuel_budget_ratio")]
    pub fuel_budget_ratio: f64,
}

fn default_round_trip_factor() -> f64 {
    DEFAULT_ROUND_TRIP_FACTOR
}

fn default_fuel_budget_ratio() -> f64 {
    DEFAULT_FUEL_BUDGET_RATIO
}

impl Default for FuelPolicy {
    fn default() -> Self {
        Self {
            round_trip_factor: DEFAULT_ROUND_TRIP_FACTOR,
            fuel_budget_ratio: DEFAULT_FUEL_BUDGET_RATIO,
        }
    }
}

impl FuelPolicy {
    /// 验证策略参数
    ///
    /// # 返回
    /// - `Ok(())`: 参数有效
    /// - `Err(String)`: 参数无效,返回错误描述
    pub fn validate(&self) -> Result<(), String> {
        if !self.round_trip_factor.is_finite() || self.round_trip_factor <= 0.0 {
            return Err(format!(
                "round_trip_factor 必须为正数, 实际 {}",
                self.round_trip_factor
            ));
        }
        if !self.fuel_budget_ratio.is_finite()
            || self.fuel_budget_ratio <= 0.0
            || self.fuel_budget_ratio > 1.0
        {
            return Err(format!(
                "fuel_budget_ratio 必须在 (0, 1] 范围内, 实际 {}",
                self.fuel_budget_ratio
            ));
        }
        Ok(())
    }
}

/// 燃油参数校验失败 -> 领域错误
pub(crate) fn invalid_fuel_profile(
    make: &str,
    model: &str,
    tank_capacity_l: f64,
    consumption_per_100km_l: f64,
) -> DomainError {
    DomainError::InvalidFuelProfile {
        make: make.to_string(),
        model: model.to_string(),
        tank_capacity_l,
        consumption_per_100km_l,
    }
}
