use batmon_core::Reading;
use chrono::SecondsFormat;
use std::fmt::Write;

/// Render one reading: a timestamp header, one `name : value` line per
/// present field, and a trailing blank line.
pub fn render(reading: &Reading) -> String {
    let mut out = format!(
        "=== {} ===\n",
        reading.taken_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    for (name, value) in reading.sample.fields() {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{name:<24} : {value}");
    }
    out.push('\n');
    out
}
