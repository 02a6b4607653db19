// ==========================================
// 车队载货分配系统 - 领域类型定义
// ==========================================
// 红线: 货物类别为封闭集合,不可扩展
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 货物类别 (Cargo Type)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与配置文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CargoType {
    Fragile,    // 易碎
    Perishable, // 易腐
    Bulk,       // 散装
}

impl CargoType {
    /// 全部类别（按声明顺序）
    pub const ALL: [CargoType; 3] = [CargoType::Fragile, CargoType::Perishable, CargoType::Bulk];

    /// 本地化的类别名称（用于描述与诊断输出）
    pub fn label(&self) -> String {
        let key = match self {
            CargoType::Fragile => "cargo_type.fragile",
            CargoType::Perishable => "cargo_type.perishable",
            CargoType::Bulk => "cargo_type.bulk",
        };
        crate::i18n::t(key)
    }
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CargoType::Fragile => write!(f, "FRAGILE"),
            CargoType::Perishable => write!(f, "PERISHABLE"),
            CargoType::Bulk => write!(f, "BULK"),
        }
    }
}

// ==========================================
// 装载单元角色 (Unit Role)
// ==========================================
// 用途: 诊断输出区分车厢与挂车
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitRole {
    Body,    // 主车厢
    Trailer, // 挂车
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRole::Body => write!(f, "BODY"),
            UnitRole::Trailer => write!(f, "TRAILER"),
        }
    }
}
