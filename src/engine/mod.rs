// ==========================================
// 车队载货分配系统 - 引擎层
// ==========================================
// 职责: 实现装载与可行性规则
// 红线: 所有规则失败必须输出 reason
// ==========================================

pub mod allocation;
pub mod error;
pub mod feasibility;

// 重导出核心引擎
pub use allocation::{CargoAllocator, LoadReport};
pub use error::{AllocationError, FeasibilityError};
pub use feasibility::{CargoAssignment, FeasibilityEngine, FeasibilityReport};
