// ==========================================
// 车队载货分配系统 - 单车装载引擎
// ==========================================
// 红线: current_load_kg 永不超过 max_capacity_kg
// ==========================================
// 职责: 单件货物在一辆车上的装载
// Van:   类别 + 余量检查，整件装入或不装
// Truck: 先做总余量检查（不看类别），再车厢优先、挂车补足；
//        类别导致装不完时报失败，已装入车厢/挂车的部分不回滚
// ==========================================

use crate::domain::capacity::{CapacityConstraint, CapacityUnit};
use crate::domain::cargo::Cargo;
use crate::domain::types::UnitRole;
use crate::domain::vehicle::Vehicle;
use crate::engine::error::AllocationError;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// 单次装载结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadReport {
    /// 装入车厢的重量
    pub body_kg: u64,
    /// 装入挂车的重量
    pub trailer_kg: u64,
}

impl LoadReport {
    pub fn total_kg(&self) -> u64 {
        self.body_kg.saturating_add(self.trailer_kg)
    }
}

// ==========================================
// CargoAllocator - 单车装载引擎
// ==========================================
pub struct CargoAllocator {
    // 无状态引擎，不需要注入依赖
}

impl Default for CargoAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl CargoAllocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 装载单件货物
    ///
    /// # 参数
    /// - `vehicle`: 目标车辆（会被修改）
    /// - `cargo`: 货物，None 表示调用方未给出货物
    ///
    /// # 返回
    /// - `Ok(LoadReport)`: 全部装入，附各单元装入量
    /// - `Err(AllocationError)`: 失败原因
    #[instrument(skip(self, vehicle, cargo), fields(
        make = %vehicle.make(),
        model = %vehicle.model(),
    ))]
    pub fn load(
        &self,
        vehicle: &mut Vehicle,
        cargo: Option<&Cargo>,
    ) -> Result<LoadReport, AllocationError> {
        let Some(cargo) = cargo else {
            warn!("货物不存在");
            return Err(AllocationError::AbsentCargo);
        };

        let result = if vehicle.is_truck() {
            self.load_split(vehicle, cargo)
        } else {
            self.load_whole(vehicle, cargo)
        };

        match &result {
            Ok(report) => info!(
                cargo = %cargo.description(),
                weight_kg = cargo.weight_kg(),
                body_kg = report.body_kg,
                trailer_kg = report.trailer_kg,
                load_kg = vehicle.total_load_kg(),
                capacity_kg = vehicle.total_capacity_kg(),
                "货物装载成功"
            ),
            Err(e) => warn!(
                cargo = %cargo.description(),
                weight_kg = cargo.weight_kg(),
                reason = %e,
                "货物装载失败"
            ),
        }
        result
    }

    /// 整件装载（厢式车）
    fn load_whole(
        &self,
        vehicle: &mut Vehicle,
        cargo: &Cargo,
    ) -> Result<LoadReport, AllocationError> {
        let (body, _) = vehicle.units_mut();

        check_type(body, UnitRole::Body, cargo)?;

        if !body.load_exact(cargo.weight_kg()) {
            return Err(AllocationError::CapacityExceeded {
                requested_kg: cargo.weight_kg(),
                available_kg: body.remaining_kg(),
            });
        }

        Ok(LoadReport {
            body_kg: cargo.weight_kg(),
            trailer_kg: 0,
        })
    }

    /// 拆分装载（卡车）
    ///
    /// 规则：
    /// 1) 总余量（车厢 + 挂车，不看类别）不足则直接失败，不做任何修改
    /// 2) 车厢接受该类别时，先填车厢
    /// 3) 仍有剩余且挂着挂车、挂车接受该类别时，再填挂车
    /// 4) 仍有剩余则失败，第 2/3 步已写入的量保留
    fn load_split(
        &self,
        vehicle: &mut Vehicle,
        cargo: &Cargo,
    ) -> Result<LoadReport, AllocationError> {
        let available_kg = vehicle.total_remaining_kg();
        if cargo.weight_kg() > available_kg {
            return Err(AllocationError::CapacityExceeded {
                requested_kg: cargo.weight_kg(),
                available_kg,
            });
        }

        let (body, trailer) = vehicle.units_mut();
        let mut remaining = cargo.weight_kg();
        let mut report = LoadReport::default();

        if check_type(body, UnitRole::Body, cargo).is_ok() && !body.is_full() {
            report.body_kg = body.fill(remaining);
            remaining -= report.body_kg;
            debug!(
                placed_kg = report.body_kg,
                body_load_kg = body.current_load_kg(),
                body_capacity_kg = body.max_capacity_kg(),
                "装入车厢"
            );
        }

        if remaining > 0 {
            if let Some(trailer) = trailer {
                if check_type(trailer, UnitRole::Trailer, cargo).is_ok() {
                    if trailer.is_full() {
                        debug!("挂车已满");
                    } else {
                        report.trailer_kg = trailer.fill(remaining);
                        remaining -= report.trailer_kg;
                        debug!(
                            placed_kg = report.trailer_kg,
                            trailer_load_kg = trailer.current_load_kg(),
                            trailer_capacity_kg = trailer.max_capacity_kg(),
                            "装入挂车"
                        );
                    }
                }
            }
        }

        if remaining > 0 {
            return Err(AllocationError::IncompleteLoad {
                loaded_kg: report.total_kg(),
                unloaded_kg: remaining,
            });
        }

        Ok(report)
    }
}

// ==========================================
// Vehicle 装货入口
// ==========================================
impl Vehicle {
    /// 装货，返回各单元装入量或失败原因
    ///
    /// 卡车在类别拒绝时可能已部分装入，见 `AllocationError::IncompleteLoad`
    pub fn try_load_cargo(&mut self, cargo: Option<&Cargo>) -> Result<LoadReport, AllocationError> {
        CargoAllocator::new().load(self, cargo)
    }

    /// 装货
    ///
    /// # 返回
    /// - `true`: 货物全部装入
    /// - `false`: 失败（原因见日志）
    pub fn load_cargo(&mut self, cargo: Option<&Cargo>) -> bool {
        self.try_load_cargo(cargo).is_ok()
    }
}

/// 类别检查；拒绝时记录诊断日志
fn check_type(unit: &CapacityUnit, role: UnitRole, cargo: &Cargo) -> Result<(), AllocationError> {
    if unit.accepts(cargo.cargo_type()) {
        return Ok(());
    }
    debug!(
        role = %role,
        cargo_type = %cargo.cargo_type(),
        "类别不匹配"
    );
    Err(AllocationError::IncompatibleType {
        role,
        cargo_type: cargo.cargo_type(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::CargoType;
    use crate::domain::vehicle::VehicleSpec;

    fn cargo(description: &str, weight: i64, cargo_type: CargoType) -> Cargo {
        Cargo::new(description, weight, cargo_type).unwrap()
    }

    fn volvo() -> Vehicle {
        VehicleSpec::truck("Volvo", "TR", 2019, 18000, 500.0, 30.0)
            .with_types(&[CargoType::Bulk])
            .with_trailer(Some(5000), Some(&[CargoType::Perishable, CargoType::Bulk]))
            .build()
            .unwrap()
    }

    #[test]
    fn test_absent_cargo() {
        let mut truck = volvo();
        let result = CargoAllocator::new().load(&mut truck, None);
        assert_eq!(result, Err(AllocationError::AbsentCargo));
    }

    #[test]
    fn test_van_capacity_is_all_or_nothing() {
        let mut van = VehicleSpec::van("Mercedes", "Sprinter", 2018, 3500, 400.0, 25.0)
            .build()
            .unwrap();
        let allocator = CargoAllocator::new();

        assert!(allocator.load(&mut van, Some(&cargo("A", 3000, CargoType::Bulk))).is_ok());
        let result = allocator.load(&mut van, Some(&cargo("B", 1000, CargoType::Bulk)));
        assert_eq!(
            result,
            Err(AllocationError::CapacityExceeded {
                requested_kg: 1000,
                available_kg: 500,
            })
        );
        assert_eq!(van.total_load_kg(), 3000);
    }

    #[test]
    fn test_truck_splits_into_trailer() {
        let mut truck = volvo();
        let allocator = CargoAllocator::new();
        let sand = cargo("Sand", 8000, CargoType::Bulk);

        allocator.load(&mut truck, Some(&sand)).unwrap();
        allocator.load(&mut truck, Some(&sand)).unwrap();
        let report = allocator
            .load(&mut truck, Some(&cargo("Gravel", 3000, CargoType::Bulk)))
            .unwrap();

        assert_eq!(report, LoadReport { body_kg: 2000, trailer_kg: 1000 });
        assert_eq!(truck.body().current_load_kg(), 18000);
        assert_eq!(truck.trailer().unwrap().current_load_kg(), 1000);
    }

    #[test]
    fn test_truck_type_rejection_keeps_partial_body_load() {
        // 车厢接受全部类别，挂车只接受散装
        let mut truck = VehicleSpec::truck("MAN", "TGX", 2021, 1000, 300.0, 25.0)
            .with_trailer(Some(1000), Some(&[CargoType::Bulk]))
            .build()
            .unwrap();

        let result = CargoAllocator::new().load(&mut truck, Some(&cargo("Eggs", 1500, CargoType::Fragile)));

        assert_eq!(
            result,
            Err(AllocationError::IncompleteLoad {
                loaded_kg: 1000,
                unloaded_kg: 500,
            })
        );
        assert_eq!(truck.body().current_load_kg(), 1000);
        assert_eq!(truck.trailer().unwrap().current_load_kg(), 0);
    }

    #[test]
    fn test_vehicle_entry_points_agree() {
        let mut truck = volvo();
        let milk = cargo("Milk", 3000, CargoType::Perishable);

        let report = truck.try_load_cargo(Some(&milk)).unwrap();
        assert_eq!(report, LoadReport { body_kg: 0, trailer_kg: 3000 });

        let glass = cargo("Glass", 100, CargoType::Fragile);
        assert_eq!(
            truck.try_load_cargo(Some(&glass)),
            Err(AllocationError::IncompleteLoad {
                loaded_kg: 0,
                unloaded_kg: 100,
            })
        );
        assert!(!truck.load_cargo(Some(&glass)));
        assert!(!truck.load_cargo(None));
        assert!(truck.load_cargo(Some(&cargo("Sand", 1000, CargoType::Bulk))));
        assert_eq!(truck.total_load_kg(), 4000);
    }
}
