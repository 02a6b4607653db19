// ==========================================
// 车队载货分配系统 - 车队领域模型
// ==========================================
// 红线: 车辆顺序即加入顺序，分配与模拟均按此顺序进行
// 红线: 可行性校验不得修改真实车队
// ==========================================

use crate::domain::vehicle::Vehicle;
use crate::i18n::{t, t_with_args};

// ==========================================
// Fleet - 车队
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加车辆（顺序即分配顺序）
    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// 按下标取车辆的可变引用（直接装卸用）
    pub fn vehicle_mut(&mut self, index: usize) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(index)
    }

    pub(crate) fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// 车队总容量（车厢 + 挂车，饱和加法）
    pub fn total_capacity_kg(&self) -> u64 {
        self.vehicles
            .iter()
            .map(Vehicle::total_capacity_kg)
            .fold(0, u64::saturating_add)
    }

    /// 车队当前总装载量
    pub fn total_current_load_kg(&self) -> u64 {
        self.vehicles
            .iter()
            .map(Vehicle::total_load_kg)
            .fold(0, u64::saturating_add)
    }

    /// 车队总油箱容量（升）
    pub fn total_fuel_capacity_l(&self) -> f64 {
        self.vehicles.iter().map(|v| v.fuel().tank_capacity_l()).sum()
    }

    /// 空载副本（可行性模拟用）
    pub fn empty_copy(&self) -> Self {
        Self {
            vehicles: self.vehicles.iter().map(Vehicle::empty_copy).collect(),
        }
    }

    /// 车队描述（多行，本地化）
    pub fn describe(&self) -> String {
        let mut lines = Vec::with_capacity(self.vehicles.len() + 3);
        lines.push(t("fleet.header"));
        lines.extend(self.vehicles.iter().map(Vehicle::describe));
        lines.push(t_with_args(
            "fleet.total_capacity",
            &[("capacity", self.total_capacity_kg().to_string().as_str())],
        ));
        lines.push(t_with_args(
            "fleet.current_load",
            &[("load", self.total_current_load_kg().to_string().as_str())],
        ));
        lines.join("\n")
    }
}

impl FromIterator<Vehicle> for Fleet {
    fn from_iter<I: IntoIterator<Item = Vehicle>>(iter: I) -> Self {
        Self {
            vehicles: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cargo::Cargo;
    use crate::domain::types::CargoType;
    use crate::domain::vehicle::VehicleSpec;

    fn sample_fleet() -> Fleet {
        let truck = VehicleSpec::truck("Volvo", "TR", 2019, 18000, 500.0, 30.0)
            .with_types(&[CargoType::Bulk])
            .with_trailer(Some(5000), Some(&[CargoType::Perishable, CargoType::Bulk]))
            .build()
            .unwrap();
        let van = VehicleSpec::van("Mercedes", "Sprinter", 2018, 3500, 400.0, 25.0)
            .with_types(&[CargoType::Fragile])
            .build()
            .unwrap();
        [truck, van].into_iter().collect()
    }

    #[test]
    fn test_aggregates() {
        let mut fleet = sample_fleet();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet.total_capacity_kg(), 26500);
        assert_eq!(fleet.total_current_load_kg(), 0);
        assert_eq!(fleet.total_fuel_capacity_l(), 900.0);

        let glass = Cargo::new("Glass", 1000, CargoType::Fragile).unwrap();
        assert!(fleet.vehicle_mut(1).unwrap().load_cargo(Some(&glass)));
        assert_eq!(fleet.total_current_load_kg(), 1000);
    }

    #[test]
    fn test_totals_saturate_across_vehicles() {
        let huge = VehicleSpec::van("Kamaz", "54901", 2022, u64::MAX, 500.0, 30.0)
            .build()
            .unwrap();
        let fleet: Fleet = [huge.clone(), huge].into_iter().collect();

        assert_eq!(fleet.total_capacity_kg(), u64::MAX);
        assert_eq!(fleet.total_current_load_kg(), 0);
    }

    #[test]
    fn test_empty_fleet() {
        let fleet = Fleet::new();
        assert!(fleet.is_empty());
        assert_eq!(fleet.total_capacity_kg(), 0);
        assert_eq!(fleet.total_current_load_kg(), 0);
    }

    #[test]
    fn test_describe_lists_every_vehicle() {
        let _guard = crate::i18n::LOCALE_TEST_LOCK.lock().unwrap();
        crate::i18n::set_locale("en");

        let text = sample_fleet().describe();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Current fleet:");
        assert!(lines[1].starts_with("Volvo TR"));
        assert!(lines[2].starts_with("Mercedes Sprinter"));
        assert_eq!(lines[3], "Total fleet capacity: 26500 kg.");
        assert_eq!(lines[4], "Current fleet load: 0 kg.");

        crate::i18n::set_locale("zh-CN");
    }

    #[test]
    fn test_empty_copy_is_independent() {
        let mut fleet = sample_fleet();
        let sand = Cargo::new("Sand", 8000, CargoType::Bulk).unwrap();
        assert!(fleet.vehicle_mut(0).unwrap().load_cargo(Some(&sand)));

        let copy = fleet.empty_copy();
        assert_eq!(copy.total_current_load_kg(), 0);
        assert_eq!(copy.total_capacity_kg(), fleet.total_capacity_kg());
        assert_eq!(fleet.total_current_load_kg(), 8000);
    }
}
