// ==========================================
// 车队载货分配系统 - 车辆领域模型
// ==========================================
// 红线: 装载量只能通过装货/卸货操作修改
// 红线: 挂车存在 <=> 挂车已连接且指定了容量
// ==========================================
// Van:   单一车厢，整件装载（全有或全无）
// Truck: 车厢 + 可选挂车，跨单元拆分装载
// ==========================================

use crate::domain::capacity::{CapacityConstraint, CapacityUnit};
use crate::domain::error::DomainError;
use crate::domain::fuel::{invalid_fuel_profile, FuelPolicy, FuelProfile};
use crate::domain::types::CargoType;
use crate::i18n::t_with_args;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

// ==========================================
// VehicleSpec - 车辆构造参数
// ==========================================
// 用途: 配置文件反序列化 + 代码构造
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub capacity_kg: u64,

    /// 车厢允许的类别（缺省 = 全部）
    #[serde(default)]
    pub allowed_types: Option<BTreeSet<CargoType>>,

    pub fuel_tank_capacity_l: f64,
    pub fuel_consumption_per_100km_l: f64,

    /// 存在即为卡车
    #[serde(default)]
    pub truck: Option<TruckSpec>,
}

/// 卡车挂车参数
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TruckSpec {
    #[serde(default)]
    pub trailer_attached: bool,

    #[serde(default)]
    pub trailer_capacity_kg: Option<u64>,

    #[serde(default)]
    pub trailer_allowed_types: Option<BTreeSet<CargoType>>,
}

impl VehicleSpec {
    /// 厢式车参数（接受全部类别）
    pub fn van(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        capacity_kg: u64,
        fuel_tank_capacity_l: f64,
        fuel_consumption_per_100km_l: f64,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            capacity_kg,
            allowed_types: None,
            fuel_tank_capacity_l,
            fuel_consumption_per_100km_l,
            truck: None,
        }
    }

    /// 卡车参数（无挂车）
    pub fn truck(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        capacity_kg: u64,
        fuel_tank_capacity_l: f64,
        fuel_consumption_per_100km_l: f64,
    ) -> Self {
        Self {
            truck: Some(TruckSpec::default()),
            ..Self::van(
                make,
                model,
                year,
                capacity_kg,
                fuel_tank_capacity_l,
                fuel_consumption_per_100km_l,
            )
        }
    }

    /// 限定车厢类别
    pub fn with_types(mut self, types: &[CargoType]) -> Self {
        self.allowed_types = Some(types.iter().copied().collect());
        self
    }

    /// 连接挂车（隐含卡车）
    pub fn with_trailer(mut self, capacity_kg: Option<u64>, types: Option<&[CargoType]>) -> Self {
        self.truck = Some(TruckSpec {
            trailer_attached: true,
            trailer_capacity_kg: capacity_kg,
            trailer_allowed_types: types.map(|t| t.iter().copied().collect()),
        });
        self
    }

    /// 构造车辆
    pub fn build(self) -> Result<Vehicle, DomainError> {
        Vehicle::from_spec(self)
    }
}

// ==========================================
// VehicleKind - 车辆种类
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleKind {
    /// 整件装载
    Van,
    /// 拆分装载; trailer 为 None 表示未连接挂车（或挂车未指定容量）
    Truck { trailer: Option<CapacityUnit> },
}

// ==========================================
// Vehicle - 车辆
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    make: String,
    model: String,
    year: i32,
    body: CapacityUnit,
    kind: VehicleKind,
    fuel: FuelProfile,
}

impl Vehicle {
    /// 按参数构造车辆
    ///
    /// # 返回
    /// - `Err(DomainError::EmptyIdentity)`: make/model 为空
    /// - `Err(DomainError::InvalidFuelProfile)`: 燃油参数非法
    pub fn from_spec(spec: VehicleSpec) -> Result<Self, DomainError> {
        if spec.make.trim().is_empty() || spec.model.trim().is_empty() {
            return Err(DomainError::EmptyIdentity);
        }

        let fuel = FuelProfile::new(spec.fuel_tank_capacity_l, spec.fuel_consumption_per_100km_l)
            .ok_or_else(|| {
                invalid_fuel_profile(
                    &spec.make,
                    &spec.model,
                    spec.fuel_tank_capacity_l,
                    spec.fuel_consumption_per_100km_l,
                )
            })?;

        let kind = match spec.truck {
            None => VehicleKind::Van,
            Some(truck) => {
                // 已连接但未指定容量的挂车按 0 容量处理，即不参与装载
                let trailer = match (truck.trailer_attached, truck.trailer_capacity_kg) {
                    (true, Some(capacity)) => {
                        Some(CapacityUnit::new(capacity, truck.trailer_allowed_types))
                    }
                    _ => None,
                };
                VehicleKind::Truck { trailer }
            }
        };

        Ok(Self {
            make: spec.make,
            model: spec.model,
            year: spec.year,
            body: CapacityUnit::new(spec.capacity_kg, spec.allowed_types),
            kind,
            fuel,
        })
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    pub fn fuel(&self) -> &FuelProfile {
        &self.fuel
    }

    pub fn body(&self) -> &CapacityUnit {
        &self.body
    }

    pub fn trailer(&self) -> Option<&CapacityUnit> {
        match &self.kind {
            VehicleKind::Truck { trailer } => trailer.as_ref(),
            VehicleKind::Van => None,
        }
    }

    pub fn is_truck(&self) -> bool {
        matches!(self.kind, VehicleKind::Truck { .. })
    }

    /// 车厢 + 挂车的可变引用（仅供装载引擎使用）
    pub(crate) fn units_mut(&mut self) -> (&mut CapacityUnit, Option<&mut CapacityUnit>) {
        let trailer = match &mut self.kind {
            VehicleKind::Truck { trailer } => trailer.as_mut(),
            VehicleKind::Van => None,
        };
        (&mut self.body, trailer)
    }

    /// 总容量 = 车厢 + 挂车（饱和加法）
    pub fn total_capacity_kg(&self) -> u64 {
        self.body
            .max_capacity_kg()
            .saturating_add(self.trailer().map_or(0, |t| t.max_capacity_kg()))
    }

    /// 总装载量 = 车厢 + 挂车
    pub fn total_load_kg(&self) -> u64 {
        self.body
            .current_load_kg()
            .saturating_add(self.trailer().map_or(0, |t| t.current_load_kg()))
    }

    /// 总剩余容量（不考虑类别）
    pub fn total_remaining_kg(&self) -> u64 {
        self.body
            .remaining_kg()
            .saturating_add(self.trailer().map_or(0, |t| t.remaining_kg()))
    }

    // ==========================================
    // 装卸操作
    // ==========================================

    // 装货入口见 engine::allocation（impl Vehicle）

    /// 卸货：所有单元清零，可重复调用
    pub fn unload_cargo(&mut self) {
        let (body, trailer) = self.units_mut();
        body.reset();
        if let Some(trailer) = trailer {
            trailer.reset();
        }
        info!(make = %self.make, model = %self.model, "车辆已卸货");
    }

    /// 最大行驶距离（公里，往返，向零截断）
    pub fn max_travel_distance_km(&self) -> u32 {
        self.fuel
            .max_travel_distance_km(FuelPolicy::default().round_trip_factor)
    }

    /// 同规格空载副本：保留全部容量与类别限制，装载量清零
    pub fn empty_copy(&self) -> Self {
        let kind = match &self.kind {
            VehicleKind::Van => VehicleKind::Van,
            VehicleKind::Truck { trailer } => VehicleKind::Truck {
                trailer: trailer.as_ref().map(CapacityUnit::empty_copy),
            },
        };
        Self {
            make: self.make.clone(),
            model: self.model.clone(),
            year: self.year,
            body: self.body.empty_copy(),
            kind,
            fuel: self.fuel,
        }
    }

    /// 车辆描述（本地化）
    pub fn describe(&self) -> String {
        let year = self.year.to_string();
        let capacity = self.body.max_capacity_kg().to_string();
        let load = self.body.current_load_kg().to_string();

        match &self.kind {
            VehicleKind::Van => {
                let distance = self.max_travel_distance_km().to_string();
                t_with_args(
                    "vehicle.describe_van",
                    &[
                        ("make", self.make.as_str()),
                        ("model", self.model.as_str()),
                        ("year", year.as_str()),
                        ("capacity", capacity.as_str()),
                        ("load", load.as_str()),
                        ("distance", distance.as_str()),
                    ],
                )
            }
            VehicleKind::Truck { trailer } => {
                let capacity_info = match trailer {
                    Some(unit) => t_with_args(
                        "vehicle.capacity_with_trailer",
                        &[
                            ("capacity", capacity.as_str()),
                            ("trailer_capacity", unit.max_capacity_kg().to_string().as_str()),
                        ],
                    ),
                    None => t_with_args("vehicle.capacity_plain", &[("capacity", capacity.as_str())]),
                };
                let trailer_load = trailer.as_ref().map_or(0, |t| t.current_load_kg()).to_string();
                t_with_args(
                    "vehicle.describe_truck",
                    &[
                        ("make", self.make.as_str()),
                        ("model", self.model.as_str()),
                        ("year", year.as_str()),
                        ("capacity_info", capacity_info.as_str()),
                        ("load", load.as_str()),
                        ("trailer_load", trailer_load.as_str()),
                    ],
                )
            }
        }
    }
}
