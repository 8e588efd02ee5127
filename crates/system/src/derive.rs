use crate::parse::{parse_float, parse_int};
use batmon_core::{DerivedSample, RawSample, RemainingTime};

/// sysfs reports energy in µWh and power in µW.
const MICRO: f64 = 1_000_000.0;

/// Compute every metric for one tick. Pure: no state survives between calls.
pub fn derive(raw: &RawSample) -> DerivedSample {
    let number = |value: &Option<String>| value.as_deref().map(parse_float);

    let energy_full_raw   = number(&raw.energy_full);
    let energy_design_raw = number(&raw.energy_full_design);
    let energy_now_raw    = number(&raw.energy_now);
    let power_raw         = number(&raw.power_now);

    let ef = energy_full_raw.unwrap_or(0.0);
    let ed = energy_design_raw.unwrap_or(0.0);
    let en = energy_now_raw.unwrap_or(0.0);
    let power_w = power_raw.unwrap_or(0.0) / MICRO;

    DerivedSample {
        status: raw.status.clone(),
        capacity_pct: raw.capacity.as_deref().map(|c| parse_int(c).clamp(0, 100)),
        power_w: power_raw.map(|_| power_w),
        wear_pct: wear_pct(ef, ed),
        energy_full_raw,
        energy_design_raw,
        energy_now_raw,
        power_raw,
        remaining_time: remaining_time(
            raw.status.as_deref().unwrap_or(""),
            ef,
            en,
            power_w,
        ),
        remaining_of_full_pct: remaining_of_full_pct(en, ef),
    }
}

/// Capacity lost relative to design; `None` unless both values are positive.
pub fn wear_pct(energy_full: f64, energy_design: f64) -> Option<f64> {
    if energy_full <= 0.0 || energy_design <= 0.0 {
        return None;
    }
    Some(((1.0 - energy_full / energy_design) * 100.0).clamp(0.0, 100.0))
}

/// Current charge as a share of the actual full capacity.
pub fn remaining_of_full_pct(energy_now: f64, energy_full: f64) -> Option<f64> {
    if energy_full <= 0.0 {
        return None;
    }
    Some((energy_now / energy_full * 100.0).clamp(0.0, 100.0))
}

/// Extrapolate time to empty (discharging) or to full (charging) from the
/// current power draw. `status` is matched case-insensitively.
pub fn remaining_time(
    status: &str,
    energy_full: f64,
    energy_now: f64,
    power_w: f64,
) -> RemainingTime {
    if power_w <= 0.0 {
        return RemainingTime::NotApplicable;
    }

    let energy = match status.to_lowercase().as_str() {
        "discharging" => energy_now,
        "charging"    => energy_full - energy_now,
        _             => return RemainingTime::NotApplicable,
    };

    RemainingTime::Estimate(energy / MICRO / power_w * 3600.0)
}
