// ==========================================
// 车队载货分配系统 - 出车可行性校验引擎
// ==========================================
// 红线: 只在车队空载副本上模拟，真实车队只读
// 红线: 按车队加入顺序逐车分配，车内按货物批次顺序尝试
// ==========================================
// 职责: 判断一批货物能否在给定往返距离内全部送达
// 输入: 车队 + 货物批次（可含空项）+ 单程距离
// 输出: FeasibilityReport / FeasibilityError
// ==========================================
// 校验顺序（任一失败即返回）:
// 1) 车队总载重
// 2) 逐车分配（类别/余量）
// 3) 燃油预算
// ==========================================

use crate::domain::cargo::Cargo;
use crate::domain::fleet::Fleet;
use crate::domain::fuel::FuelPolicy;
use crate::engine::allocation::CargoAllocator;
use crate::engine::error::FeasibilityError;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// 单件货物的分配结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CargoAssignment {
    /// 货物在批次中的下标（空项不计入）
    pub batch_index: usize,
    /// 车辆在车队中的下标
    pub vehicle_index: usize,
    pub cargo: Cargo,
}

/// 可行性校验通过时的明细
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeasibilityReport {
    pub path_km: u32,
    pub requested_kg: u64,
    pub fleet_capacity_kg: u64,
    pub assignments: Vec<CargoAssignment>,
    pub fuel_needed_l: f64,
    pub fuel_budget_l: f64,
}

// ==========================================
// FeasibilityEngine - 出车可行性校验引擎
// ==========================================
pub struct FeasibilityEngine {
    policy: FuelPolicy,
}

impl Default for FeasibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FeasibilityEngine {
    /// 使用默认燃油策略（往返系数 2，预算比例 0.5）
    pub fn new() -> Self {
        Self::with_policy(FuelPolicy::default())
    }

    pub fn with_policy(policy: FuelPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &FuelPolicy {
        &self.policy
    }

    /// 校验货物批次
    ///
    /// # 参数
    /// - `fleet`: 真实车队（只读）
    /// - `cargo`: 货物批次，None 项会被忽略
    /// - `path_km`: 单程距离（公里）
    ///
    /// # 返回
    /// - `Ok(FeasibilityReport)`: 可以出车
    /// - `Err(FeasibilityError)`: 第一个未通过的校验
    #[instrument(skip(self, fleet, cargo), fields(
        vehicles = fleet.len(),
        batch = cargo.len(),
    ))]
    pub fn check(
        &self,
        fleet: &Fleet,
        cargo: &[Option<Cargo>],
        path_km: u32,
    ) -> Result<FeasibilityReport, FeasibilityError> {
        let result = self.simulate(fleet, cargo, path_km);
        match &result {
            Ok(report) => info!(
                path_km,
                requested_kg = report.requested_kg,
                fuel_needed_l = report.fuel_needed_l,
                fuel_budget_l = report.fuel_budget_l,
                "货物可以发运"
            ),
            Err(e) => warn!(path_km, reason = %e, "货物无法发运"),
        }
        result
    }

    fn simulate(
        &self,
        fleet: &Fleet,
        cargo: &[Option<Cargo>],
        path_km: u32,
    ) -> Result<FeasibilityReport, FeasibilityError> {
        // 0. 空载副本
        let mut simulated = fleet.empty_copy();

        // 1. 车队总载重
        let batch: Vec<&Cargo> = cargo.iter().flatten().collect();
        // 总重溢出 u64 视为超载
        let total_kg = batch
            .iter()
            .try_fold(0u64, |acc, c| acc.checked_add(c.weight_kg()));
        let fleet_capacity_kg = simulated.total_capacity_kg();
        let requested_kg = match total_kg {
            Some(kg) if kg <= fleet_capacity_kg => kg,
            other => {
                return Err(FeasibilityError::FleetCapacityExceeded {
                    requested_kg: other.unwrap_or(u64::MAX),
                    capacity_kg: fleet_capacity_kg,
                });
            }
        };

        // 2. 逐车分配：每辆车对每件待分配货物只尝试一次
        let allocator = CargoAllocator::new();
        let mut pending: Vec<(usize, &Cargo)> = batch.into_iter().enumerate().collect();
        let mut assignments = Vec::with_capacity(pending.len());

        for (vehicle_index, vehicle) in simulated.vehicles_mut().iter_mut().enumerate() {
            if pending.is_empty() {
                break;
            }
            pending.retain(|&(batch_index, item)| {
                if allocator.load(vehicle, Some(item)).is_err() {
                    return true;
                }
                debug!(batch_index, vehicle_index, cargo = %item.description(), "模拟分配");
                assignments.push(CargoAssignment {
                    batch_index,
                    vehicle_index,
                    cargo: item.clone(),
                });
                false
            });
        }

        if !pending.is_empty() {
            return Err(FeasibilityError::UnassignedCargo {
                items: pending.into_iter().map(|(_, c)| c.clone()).collect(),
            });
        }

        // 3. 燃油预算：全车队往返油耗 <= 总油箱容量 * 预算比例
        let fuel_needed_l: f64 = simulated
            .vehicles()
            .iter()
            .map(|v| v.fuel().fuel_needed_l(path_km, self.policy.round_trip_factor))
            .sum();
        let fuel_budget_l = simulated.total_fuel_capacity_l() * self.policy.fuel_budget_ratio;
        if fuel_needed_l > fuel_budget_l {
            return Err(FeasibilityError::InsufficientFuel {
                needed_l: fuel_needed_l,
                budget_l: fuel_budget_l,
            });
        }

        Ok(FeasibilityReport {
            path_km,
            requested_kg,
            fleet_capacity_kg,
            assignments,
            fuel_needed_l,
            fuel_budget_l,
        })
    }
}

// ==========================================
// Fleet 出车校验入口
// ==========================================
impl Fleet {
    /// 可行性校验（默认燃油策略），返回分配明细或第一个未通过的校验
    ///
    /// 在车队的空载副本上模拟，真实车队不受影响。
    pub fn try_can_go(
        &self,
        cargo: &[Option<Cargo>],
        path_km: u32,
    ) -> Result<FeasibilityReport, FeasibilityError> {
        FeasibilityEngine::new().check(self, cargo, path_km)
    }

    /// 这批货物能否在 path_km 往返距离内送达
    pub fn can_go(&self, cargo: &[Option<Cargo>], path_km: u32) -> bool {
        self.try_can_go(cargo, path_km).is_ok()
    }
}
