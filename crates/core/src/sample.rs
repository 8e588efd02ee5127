use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};
use std::fmt;

/// Raw quantities read from the power-supply directory during one tick.
///
/// Each value is the trimmed file contents, or `None` when no candidate file
/// exists (or the read failed).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSample {
    pub status: Option<String>,
    pub capacity: Option<String>,
    /// µWh or µAh, depending on which candidate was found.
    pub energy_full: Option<String>,
    pub energy_full_design: Option<String>,
    pub energy_now: Option<String>,
    /// µW.
    pub power_now: Option<String>,
}

/// Metrics derived from a single [`RawSample`].
///
/// Fields are declared in report order. Absent fields are skipped both by
/// [`DerivedSample::fields`] and by the serde serializer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedSample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_pct: Option<i64>,
    /// Instantaneous power in watts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_w: Option<f64>,
    /// Capacity lost relative to design (0 – 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wear_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_full_raw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_design_raw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_now_raw: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_raw: Option<f64>,
    pub remaining_time: RemainingTime,
    /// Current charge relative to the *actual* full capacity (0 – 100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_of_full_pct: Option<f64>,
}

impl DerivedSample {
    /// Present fields as `(name, formatted value)` pairs, in report order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(10);
        let mut push = |name: &'static str, value: Option<String>| {
            if let Some(value) = value {
                out.push((name, value));
            }
        };

        push("status", self.status.clone());
        push("capacity_pct", self.capacity_pct.map(|c| c.to_string()));
        push("power_w", self.power_w.map(|w| format!("{w:.4}")));
        push("wear_pct", self.wear_pct.map(|w| format!("{w:.2}")));
        push("energy_full_raw", self.energy_full_raw.map(|v| format!("{v:.0}")));
        push("energy_design_raw", self.energy_design_raw.map(|v| format!("{v:.0}")));
        push("energy_now_raw", self.energy_now_raw.map(|v| format!("{v:.0}")));
        push("power_raw", self.power_raw.map(|v| format!("{v:.0}")));
        push("remaining_time", Some(self.remaining_time.to_string()));
        push(
            "remaining_of_full_pct",
            self.remaining_of_full_pct.map(|p| format!("{p:.2}")),
        );

        out
    }
}

/// Estimated time until the battery is full (charging) or empty (discharging).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RemainingTime {
    /// Extrapolated seconds; non-positive estimates render as `"unknown"`.
    Estimate(f64),
    /// No usable rate, or the battery is neither charging nor discharging.
    NotApplicable,
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Estimate(seconds) => f.write_str(&format_duration(*seconds)),
            Self::NotApplicable => f.write_str("n/a"),
        }
    }
}

impl Serialize for RemainingTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Format seconds as `"HHh MMm"`, or `"unknown"` for non-positive input.
///
/// Seconds are truncated; hours are never rolled over into days.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "unknown".to_string();
    }
    let total = seconds as u64;
    let hours = total / 3600;
    let minutes = (total / 60) % 60;
    format!("{hours:02}h {minutes:02}m")
}

/// One timestamped report, emitted once per tick.
#[derive(Debug, Clone)]
pub struct Reading {
    pub taken_at: DateTime<Local>,
    pub sample: DerivedSample,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> DerivedSample {
        DerivedSample {
            status: None,
            capacity_pct: None,
            power_w: None,
            wear_pct: None,
            energy_full_raw: None,
            energy_design_raw: None,
            energy_now_raw: None,
            power_raw: None,
            remaining_time: RemainingTime::NotApplicable,
            remaining_of_full_pct: None,
        }
    }

    #[test]
    fn duration_non_positive_is_unknown() {
        assert_eq!(format_duration(0.0), "unknown");
        assert_eq!(format_duration(-42.0), "unknown");
        assert_eq!(format_duration(f64::NAN), "unknown");
    }

    #[test]
    fn duration_hours_and_minutes() {
        assert_eq!(format_duration(3665.0), "01h 01m");
        assert_eq!(format_duration(7200.0), "02h 00m");
        assert_eq!(format_duration(59.9), "00h 00m");
    }

    #[test]
    fn duration_does_not_roll_into_days() {
        assert_eq!(format_duration(100.0 * 3600.0 + 30.0 * 60.0), "100h 30m");
    }

    #[test]
    fn fields_follow_report_order() {
        let sample = DerivedSample {
            status: Some("Discharging".into()),
            capacity_pct: Some(80),
            power_w: Some(12.5),
            wear_pct: Some(7.123),
            energy_full_raw: Some(50_000_000.0),
            energy_design_raw: Some(54_000_000.0),
            energy_now_raw: Some(40_000_000.0),
            power_raw: Some(12_500_000.0),
            remaining_time: RemainingTime::Estimate(3665.0),
            remaining_of_full_pct: Some(80.0),
        };

        let fields = sample.fields();
        let names: Vec<_> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "status",
                "capacity_pct",
                "power_w",
                "wear_pct",
                "energy_full_raw",
                "energy_design_raw",
                "energy_now_raw",
                "power_raw",
                "remaining_time",
                "remaining_of_full_pct",
            ]
        );
        assert_eq!(fields[2].1, "12.5000");
        assert_eq!(fields[3].1, "7.12");
        assert_eq!(fields[4].1, "50000000");
        assert_eq!(fields[8].1, "01h 01m");
        assert_eq!(fields[9].1, "80.00");
    }

    #[test]
    fn absent_fields_are_skipped() {
        let fields = empty().fields();
        assert_eq!(fields, vec![("remaining_time", "n/a".to_string())]);
    }

    #[test]
    fn serializer_skips_absent_fields() {
        let mut sample = empty();
        sample.capacity_pct = Some(55);

        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "capacity_pct": 55, "remaining_time": "n/a" })
        );
    }
}
