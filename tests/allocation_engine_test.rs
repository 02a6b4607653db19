// ==========================================
// CargoAllocator 引擎集成测试
// ==========================================
// 测试目标: 验证单车装载逻辑
// 覆盖范围: 整件装载、拆分装载、类别拒绝、部分写入、卸货
// ==========================================

use cargo_fleet::engine::{AllocationError, CargoAllocator, LoadReport};
use cargo_fleet::{Cargo, CargoType, UnitRole, Vehicle, VehicleSpec};

// ==========================================
// 测试辅助函数
// ==========================================

fn cargo(description: &str, weight: i64, cargo_type: CargoType) -> Cargo {
    Cargo::new(description, weight, cargo_type).unwrap()
}

/// Volvo TR: 车厢 18000 kg 仅散装；挂车 5000 kg 易腐/散装
fn create_truck_with_trailer() -> Vehicle {
    VehicleSpec::truck("Volvo", "TR", 2019, 18000, 500.0, 30.0)
        .with_types(&[CargoType::Bulk])
        .with_trailer(Some(5000), Some(&[CargoType::Perishable, CargoType::Bulk]))
        .build()
        .unwrap()
}

/// Scania Zero: 车厢 15000 kg 仅易腐，无挂车
fn create_truck_without_trailer() -> Vehicle {
    VehicleSpec::truck("Scania", "Zero", 2020, 15000, 400.0, 28.0)
        .with_types(&[CargoType::Perishable])
        .build()
        .unwrap()
}

/// Mercedes Sprinter: 3500 kg 仅易碎
fn create_van() -> Vehicle {
    VehicleSpec::van("Mercedes", "Sprinter", 2018, 3500, 400.0, 25.0)
        .with_types(&[CargoType::Fragile])
        .build()
        .unwrap()
}

// ==========================================
// 测试用例 1: 厢式车
// ==========================================

#[test]
fn test_van_loads_compatible_cargo() {
    cargo_fleet::logging::init_test();
    let mut van = create_van();

    assert!(van.load_cargo(Some(&cargo("Glass", 1000, CargoType::Fragile))));
    assert_eq!(van.total_load_kg(), 1000);
}

#[test]
fn test_van_rejects_incompatible_type() {
    let mut van = create_van();
    let allocator = CargoAllocator::new();

    allocator
        .load(&mut van, Some(&cargo("Glass", 1000, CargoType::Fragile)))
        .unwrap();
    let result = allocator.load(&mut van, Some(&cargo("Sand", 1000, CargoType::Bulk)));

    assert_eq!(
        result,
        Err(AllocationError::IncompatibleType {
            role: UnitRole::Body,
            cargo_type: CargoType::Bulk,
        })
    );
    assert_eq!(van.total_load_kg(), 1000);
}

#[test]
fn test_van_never_exceeds_capacity() {
    let mut van = create_van();
    let crate_ = cargo("Crate", 700, CargoType::Fragile);

    let mut loaded = 0;
    for _ in 0..10 {
        if van.load_cargo(Some(&crate_)) {
            loaded += 700;
        }
        assert!(van.total_load_kg() <= 3500);
    }
    assert_eq!(loaded, 3500);
    assert_eq!(van.total_load_kg(), 3500);
}

#[test]
fn test_absent_cargo_fails_without_mutation() {
    let mut van = create_van();
    let mut truck = create_truck_with_trailer();

    assert!(!van.load_cargo(None));
    assert!(!truck.load_cargo(None));
    assert_eq!(van.total_load_kg(), 0);
    assert_eq!(truck.total_load_kg(), 0);
}

// ==========================================
// 测试用例 2: 卡车拆分装载
// ==========================================

#[test]
fn test_truck_fills_body_then_trailer() {
    let mut truck = create_truck_with_trailer();
    let sand = cargo("Sand", 8000, CargoType::Bulk);
    let gravel = cargo("Gravel", 3000, CargoType::Bulk);

    assert!(truck.load_cargo(Some(&sand)));
    assert!(truck.load_cargo(Some(&sand)));
    assert_eq!(truck.body().current_load_kg(), 16000);

    let report = CargoAllocator::new().load(&mut truck, Some(&gravel)).unwrap();
    assert_eq!(report, LoadReport { body_kg: 2000, trailer_kg: 1000 });
    assert_eq!(truck.body().current_load_kg(), 18000);
    assert_eq!(truck.trailer().unwrap().current_load_kg(), 1000);
}

#[test]
fn test_truck_routes_body_incompatible_type_to_trailer() {
    let mut truck = create_truck_with_trailer();
    let milk = cargo("Milk", 3000, CargoType::Perishable);

    let report = CargoAllocator::new().load(&mut truck, Some(&milk)).unwrap();

    assert_eq!(report, LoadReport { body_kg: 0, trailer_kg: 3000 });
    assert_eq!(truck.body().current_load_kg(), 0);
}

#[test]
fn test_truck_rejects_type_incompatible_with_both_units() {
    let mut truck = create_truck_with_trailer();
    let glass = cargo("Glass", 1000, CargoType::Fragile);

    let result = CargoAllocator::new().load(&mut truck, Some(&glass));

    assert_eq!(
        result,
        Err(AllocationError::IncompleteLoad {
            loaded_kg: 0,
            unloaded_kg: 1000,
        })
    );
    assert_eq!(truck.total_load_kg(), 0);
}

#[test]
fn test_truck_upfront_capacity_check_prevents_any_mutation() {
    let mut truck = create_truck_with_trailer();
    let huge = cargo("Ore", 23001, CargoType::Bulk);

    let result = CargoAllocator::new().load(&mut truck, Some(&huge));

    assert_eq!(
        result,
        Err(AllocationError::CapacityExceeded {
            requested_kg: 23001,
            available_kg: 23000,
        })
    );
    assert_eq!(truck.total_load_kg(), 0);
}

#[test]
fn test_truck_partial_body_fill_survives_trailer_rejection() {
    // 车厢仅散装且余 2000；挂车仅易腐。总余量充足但挂车拒绝散装
    let mut truck = VehicleSpec::truck("DAF", "XF", 2022, 10000, 400.0, 30.0)
        .with_types(&[CargoType::Bulk])
        .with_trailer(Some(6000), Some(&[CargoType::Perishable]))
        .build()
        .unwrap();
    assert!(truck.load_cargo(Some(&cargo("Sand", 8000, CargoType::Bulk))));

    let result = CargoAllocator::new().load(&mut truck, Some(&cargo("Gravel", 3000, CargoType::Bulk)));

    assert_eq!(
        result,
        Err(AllocationError::IncompleteLoad {
            loaded_kg: 2000,
            unloaded_kg: 1000,
        })
    );
    // 失败但车厢已被写满，不回滚
    assert_eq!(truck.body().current_load_kg(), 10000);
    assert_eq!(truck.trailer().unwrap().current_load_kg(), 0);
}

#[test]
fn test_truck_without_trailer_behaves_like_single_unit() {
    let mut truck = create_truck_without_trailer();

    assert!(truck.load_cargo(Some(&cargo("Milk", 3000, CargoType::Perishable))));
    assert!(!truck.load_cargo(Some(&cargo("Sand", 8000, CargoType::Bulk))));
    assert!(!truck.load_cargo(Some(&cargo("Cheese", 12001, CargoType::Perishable))));
    assert_eq!(truck.total_load_kg(), 3000);
}

#[test]
fn test_truck_split_never_exceeds_unit_capacity() {
    let mut truck = create_truck_with_trailer();
    let bag = cargo("Bag", 1700, CargoType::Bulk);

    while truck.load_cargo(Some(&bag)) {}

    assert!(truck.body().current_load_kg() <= 18000);
    assert!(truck.trailer().unwrap().current_load_kg() <= 5000);
    // 23000 / 1700 = 13 袋
    assert_eq!(truck.total_load_kg(), 13 * 1700);
}

// ==========================================
// 测试用例 3: 卸货
// ==========================================

#[test]
fn test_unload_resets_both_units_idempotently() {
    let mut truck = create_truck_with_trailer();
    truck.load_cargo(Some(&cargo("Sand", 20000, CargoType::Bulk)));
    assert_eq!(truck.total_load_kg(), 20000);

    truck.unload_cargo();
    assert_eq!(truck.body().current_load_kg(), 0);
    assert_eq!(truck.trailer().unwrap().current_load_kg(), 0);

    truck.unload_cargo();
    assert_eq!(truck.total_load_kg(), 0);
}

// ==========================================
// 测试用例 4: 续航
// ==========================================

#[test]
fn test_max_travel_distance_truncates_toward_zero() {
    assert_eq!(create_truck_with_trailer().max_travel_distance_km(), 833);
    assert_eq!(create_truck_without_trailer().max_travel_distance_km(), 714);
    assert_eq!(create_van().max_travel_distance_km(), 800);
}
