// ==========================================
// 车队载货分配系统 - 命令行入口
// ==========================================
// 用法: cargo-fleet <fleet.json> [batch.json <path_km>]
// - 仅给出车队配置: 输出车队描述
// - 同时给出货物批次与距离: 输出可行性校验结果
// ==========================================

use anyhow::{bail, Context, Result};
use cargo_fleet::{Cargo, CargoType, ConfigManager};
use serde::Deserialize;

/// 货物批次中的一项（重量为负的项会被拒绝、输出原因并视为空项）
#[derive(Debug, Deserialize)]
struct CargoRequest {
    description: String,
    weight_kg: i64,
    cargo_type: CargoType,
}

/// 将批次请求转换为货物；被拒绝的项留空位，并返回拒绝原因
fn build_batch(requests: Vec<CargoRequest>) -> (Vec<Option<Cargo>>, Vec<String>) {
    let mut rejected = Vec::new();
    let batch = requests
        .into_iter()
        .map(|r| match Cargo::new(r.description, r.weight_kg, r.cargo_type) {
            Ok(cargo) => Some(cargo),
            Err(e) => {
                rejected.push(e.to_string());
                None
            }
        })
        .collect();
    (batch, rejected)
}

fn main() -> Result<()> {
    // 初始化日志系统
    cargo_fleet::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", cargo_fleet::APP_NAME);
    tracing::info!("系统版本: {}", cargo_fleet::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config_path) = args.first() else {
        bail!("用法: cargo-fleet <fleet.json> [batch.json <path_km>]");
    };

    let manager = ConfigManager::from_file(config_path)
        .with_context(|| format!("无法加载车队配置: {}", config_path))?;
    manager.apply_locale();
    let fleet = manager.build_fleet()?;

    println!("{}", fleet.describe());

    match (args.get(1), args.get(2)) {
        (Some(batch_path), Some(path_km)) => {
            let path_km: u32 = path_km
                .parse()
                .with_context(|| format!("距离必须为非负整数: {}", path_km))?;
            let raw = std::fs::read_to_string(batch_path)
                .with_context(|| format!("无法读取货物批次: {}", batch_path))?;
            let requests: Vec<CargoRequest> =
                serde_json::from_str(&raw).context("货物批次格式错误")?;
            let (batch, rejected) = build_batch(requests);
            for reason in &rejected {
                println!("已拒绝: {}", reason);
            }

            match manager.feasibility_engine().check(&fleet, &batch, path_km) {
                Ok(report) => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
                Err(e) => {
                    println!("{}", e);
                    std::process::exit(2);
                }
            }
        }
        (Some(_), None) => bail!("缺少距离参数 <path_km>"),
        _ => {}
    }

    Ok(())
}
