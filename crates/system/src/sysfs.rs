use batmon_core::quantity::{self, QuantitySource};
use batmon_core::{BattError, RawSample, Result};
use std::path::Path;
use tracing::warn;

/// Read the first existing candidate file of `source` under `base`.
///
/// Returns `Ok(None)` when no candidate exists, which is normal (a
/// charge-based battery has no `energy_*` files). Only a failure to read a
/// path that *does* exist is an error.
pub fn read_quantity(base: &Path, source: &QuantitySource) -> Result<Option<String>> {
    for name in source.candidates {
        let path = base.join(name);
        if !path.exists() {
            continue;
        }
        // Invalid UTF-8 is kept lossily so it degrades through parsing.
        return std::fs::read(&path)
            .map(|raw| Some(String::from_utf8_lossy(&raw).trim().to_string()))
            .map_err(|source| BattError::Read { path, source });
    }
    Ok(None)
}

/// Read every quantity for one tick.
///
/// Read failures are logged and the quantity is treated as absent; they never
/// abort the tick.
pub fn sample(base: &Path) -> RawSample {
    let read = |source: QuantitySource| match read_quantity(base, &source) {
        Ok(value) => value,
        Err(e) => {
            warn!("{}: {e}", source.name);
            None
        }
    };

    RawSample {
        status:             read(quantity::STATUS),
        capacity:           read(quantity::CAPACITY),
        energy_full:        read(quantity::ENERGY_FULL),
        energy_full_design: read(quantity::ENERGY_FULL_DESIGN),
        energy_now:         read(quantity::ENERGY_NOW),
        power_now:          read(quantity::POWER_NOW),
    }
}
