// ==========================================
// 车队载货分配系统 - 配置错误类型
// ==========================================

use crate::domain::error::DomainError;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("燃油策略无效: {0}")]
    InvalidFuelPolicy(String),

    #[error("不支持的语言: {0}")]
    UnsupportedLocale(String),

    #[error("第 {index} 辆车配置无效: {source}")]
    InvalidVehicle {
        index: usize,
        #[source]
        source: DomainError,
    },
}
