// ==========================================
// 车队载货分配系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、约束接口
// 红线: 装载规则在引擎层实现,实体只暴露状态与入口
// ==========================================

pub mod capacity;
pub mod cargo;
pub mod error;
pub mod fleet;
pub mod fuel;
pub mod types;
pub mod vehicle;

// 重导出核心类型
pub use capacity::{CapacityConstraint, CapacityUnit};
pub use cargo::Cargo;
pub use error::DomainError;
pub use fleet::Fleet;
pub use fuel::{FuelPolicy, FuelProfile};
pub use types::{CargoType, UnitRole};
pub use vehicle::{TruckSpec, Vehicle, VehicleKind, VehicleSpec};
