// ==========================================
// 车队载货分配系统 - 货物领域模型
// ==========================================
// 红线: 货物为不可变值,按值比较
// ==========================================

use crate::domain::error::DomainError;
use crate::domain::types::CargoType;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ==========================================
// Cargo - 货物（一次发运请求）
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cargo {
    description: String,
    weight_kg: u64,
    cargo_type: CargoType,
}

impl Cargo {
    /// 创建货物
    ///
    /// # 参数
    /// - `description`: 货物名称
    /// - `weight_kg`: 重量（千克），必须 >= 0
    /// - `cargo_type`: 货物类别
    ///
    /// # 返回
    /// - `Ok(Cargo)`: 创建成功
    /// - `Err(DomainError::NegativeWeight)`: 重量为负
    pub fn new(
        description: impl Into<String>,
        weight_kg: i64,
        cargo_type: CargoType,
    ) -> Result<Self, DomainError> {
        let description = description.into();
        let weight = match u64::try_from(weight_kg) {
            Ok(w) => w,
            Err(_) => {
                warn!(description = %description, weight_kg, "拒绝创建货物: 重量为负");
                return Err(DomainError::NegativeWeight {
                    description,
                    weight_kg,
                });
            }
        };

        Ok(Self {
            description,
            weight_kg: weight,
            cargo_type,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight_kg(&self) -> u64 {
        self.weight_kg
    }

    pub fn cargo_type(&self) -> CargoType {
        self.cargo_type
    }
}
