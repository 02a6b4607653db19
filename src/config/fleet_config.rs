use crate::domain::fuel::FuelPolicy;
use crate::domain::vehicle::VehicleSpec;
use serde::{Deserialize, Serialize};

/// 车队配置（JSON 文件）
///
/// ```json
/// {
///   "locale": "en",
///   "fuel_policy": { "round_trip_factor": 2.0, "fuel_budget_ratio": 0.5 },
///   "vehicles": [
///     { "make": "Mercedes", "model": "Sprinter", "year": 2018, "capacity_kg": 3500,
///       "allowed_types": ["FRAGILE"],
///       "fuel_tank_capacity_l": 400.0, "fuel_consumption_per_100km_l": 25.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetConfig {
    /// 描述文本语言（zh-CN / en / ru），缺省沿用当前语言
    #[serde(default)]
    pub locale: Option<String>,

    #[serde(default)]
    pub fuel_policy: FuelPolicy,

    /// 车辆列表（顺序即车队顺序）
    #[serde(default)]
    pub vehicles: Vec<VehicleSpec>,
}
