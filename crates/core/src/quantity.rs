/// Ordered candidate file names for one logical quantity.
///
/// Batteries expose either energy-based (`energy_*`, µWh) or charge-based
/// (`charge_*`, µAh) counters. The first candidate that exists wins; adding a
/// naming scheme only means adding a name here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantitySource {
    /// Logical name used in logs, e.g. `"energy_full"`.
    pub name: &'static str,
    pub candidates: &'static [&'static str],
}

impl QuantitySource {
    pub const fn new(name: &'static str, candidates: &'static [&'static str]) -> Self {
        Self { name, candidates }
    }
}

pub const STATUS: QuantitySource = QuantitySource::new("status", &["status"]);

pub const CAPACITY: QuantitySource = QuantitySource::new("capacity", &["capacity"]);

pub const ENERGY_FULL: QuantitySource =
    QuantitySource::new("energy_full", &["energy_full", "charge_full"]);

pub const ENERGY_FULL_DESIGN: QuantitySource = QuantitySource::new(
    "energy_full_design",
    &["energy_full_design", "charge_full_design"],
);

pub const ENERGY_NOW: QuantitySource =
    QuantitySource::new("energy_now", &["energy_now", "charge_now"]);

pub const POWER_NOW: QuantitySource = QuantitySource::new("power_now", &["power_now"]);
