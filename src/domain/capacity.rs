// ==========================================
// 车队载货分配系统 - 装载单元领域模型
// ==========================================
// 红线: current_load_kg <= max_capacity_kg 恒成立
// 用途: 车厢与挂车的统一抽象
// ==========================================

use crate::domain::types::CargoType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ==========================================
// CapacityUnit - 装载单元
// ==========================================
// allowed_types 为 None 表示接受任意类别
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityUnit {
    max_capacity_kg: u64,
    current_load_kg: u64,
    allowed_types: Option<BTreeSet<CargoType>>,
}

impl CapacityUnit {
    /// 创建空载单元
    pub fn new(max_capacity_kg: u64, allowed_types: Option<BTreeSet<CargoType>>) -> Self {
        Self {
            max_capacity_kg,
            current_load_kg: 0,
            allowed_types,
        }
    }

    pub fn max_capacity_kg(&self) -> u64 {
        self.max_capacity_kg
    }

    pub fn current_load_kg(&self) -> u64 {
        self.current_load_kg
    }

    pub fn allowed_types(&self) -> Option<&BTreeSet<CargoType>> {
        self.allowed_types.as_ref()
    }

    /// 同规格的空载副本（模拟用）
    pub fn empty_copy(&self) -> Self {
        Self::new(self.max_capacity_kg, self.allowed_types.clone())
    }

    /// 整件装入
    ///
    /// # 返回
    /// - `true`: 已装入
    /// - `false`: 余量不足，未做任何修改
    pub fn load_exact(&mut self, weight_kg: u64) -> bool {
        if !self.can_add(weight_kg) {
            return false;
        }
        self.current_load_kg += weight_kg;
        true
    }

    /// 按余量尽量装入
    ///
    /// # 返回
    /// 实际装入的重量 = min(weight_kg, 余量)
    pub fn fill(&mut self, weight_kg: u64) -> u64 {
        let placed = weight_kg.min(self.remaining_kg());
        self.current_load_kg += placed;
        placed
    }

    /// 清空
    pub fn reset(&mut self) {
        self.current_load_kg = 0;
    }
}

// ==========================================
// Trait: CapacityConstraint
// ==========================================
// 用途: 装载引擎约束检查接口
pub trait CapacityConstraint {
    /// 检查类别是否被允许
    fn accepts(&self, cargo_type: CargoType) -> bool;

    /// 检查是否可整件装入
    fn can_add(&self, weight_kg: u64) -> bool;

    /// 计算剩余容量
    fn remaining_kg(&self) -> u64;

    /// 检查是否已满
    fn is_full(&self) -> bool;
}

// ==========================================
// CapacityConstraint trait 实现
// ==========================================
impl CapacityConstraint for CapacityUnit {
    /// 白名单缺省时接受任意类别
    fn accepts(&self, cargo_type: CargoType) -> bool {
        self.allowed_types
            .as_ref()
            .map_or(true, |types| types.contains(&cargo_type))
    }

    fn can_add(&self, weight_kg: u64) -> bool {
        self.current_load_kg
            .checked_add(weight_kg)
            .map_or(false, |total| total <= self.max_capacity_kg)
    }

    fn remaining_kg(&self) -> u64 {
        self.max_capacity_kg.saturating_sub(self.current_load_kg)
    }

    fn is_full(&self) -> bool {
        self.remaining_kg() == 0
    }
}
