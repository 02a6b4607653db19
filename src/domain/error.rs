// ==========================================
// 车队载货分配系统 - 领域层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 职责: 实体构造时的校验失败
// ==========================================

use thiserror::Error;

/// 领域层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 货物重量为负
    #[error("无法创建货物 \"{description}\": 重量为负 ({weight_kg} kg)")]
    NegativeWeight { description: String, weight_kg: i64 },

    /// 燃油参数非法（油箱容量 < 0，或百公里油耗 <= 0，或非有限值）
    #[error("燃油参数非法: {make} {model}, tank={tank_capacity_l}L, consumption={consumption_per_100km_l}L/100km")]
    InvalidFuelProfile {
        make: String,
        model: String,
        tank_capacity_l: f64,
        consumption_per_100km_l: f64,
    },

    /// 车辆标识缺失
    #[error("车辆标识缺失: make/model 不能为空")]
    EmptyIdentity,
}
