// ==========================================
// 车队载货分配系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有失败必须带显式原因（可解释性）
// ==========================================

use crate::domain::cargo::Cargo;
use crate::domain::types::{CargoType, UnitRole};
use thiserror::Error;

/// 单车装载错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    #[error("货物不存在")]
    AbsentCargo,

    #[error("类别不匹配: {role} 不接受 {cargo_type}")]
    IncompatibleType { role: UnitRole, cargo_type: CargoType },

    #[error("超出载重: 需要 {requested_kg} kg, 剩余 {available_kg} kg")]
    CapacityExceeded { requested_kg: u64, available_kg: u64 },

    /// 卡车拆分装载未能装完；loaded_kg 为已写入车厢/挂车的重量（不回滚）
    #[error("装载未完成: 已装 {loaded_kg} kg, 剩余 {unloaded_kg} kg 无处可放")]
    IncompleteLoad { loaded_kg: u64, unloaded_kg: u64 },
}

/// 车队可行性校验错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeasibilityError {
    #[error("超出车队总载重: 需要 {requested_kg} kg, 车队容量 {capacity_kg} kg")]
    FleetCapacityExceeded { requested_kg: u64, capacity_kg: u64 },

    #[error("存在未分配货物: {}", describe_items(.items))]
    UnassignedCargo { items: Vec<Cargo> },

    #[error("燃油不足: 需要 {needed_l:.1} L, 可用预算 {budget_l:.1} L")]
    InsufficientFuel { needed_l: f64, budget_l: f64 },
}

fn describe_items(items: &[Cargo]) -> String {
    items
        .iter()
        .map(|c| c.description())
        .collect::<Vec<_>>()
        .join(", ")
}
