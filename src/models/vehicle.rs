use serde::Serialize;

/// An electric vehicle model and its rated range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VehicleModel {
    pub manufacturer: &'static str,
    pub name: &'static str,
    pub range_miles: u32,
}

impl VehicleModel {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.name)
    }
}
