pub mod derive;
pub mod parse;
pub mod sysfs;

use batmon_core::Reading;
use chrono::Local;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Spawn a background Tokio task that samples the power-supply directory at
/// `base_path` every `interval` and forwards a [`Reading`] through the
/// returned channel.
///
/// The first reading is taken immediately. The task stops automatically when
/// the receiver is dropped.
pub fn spawn_monitor(base_path: PathBuf, interval: Duration) -> mpsc::Receiver<Reading> {
    let (tx, rx) = mpsc::channel(4);

    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        // A stalled tick is followed by one reading, not a burst.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let reading = take_reading(&base_path);

            if tx.send(reading).await.is_err() {
                debug!("Reading receiver dropped; stopping monitor.");
                break;
            }
        }
    });

    rx
}

/// Sample, derive and timestamp once.
pub fn take_reading(base_path: &Path) -> Reading {
    let raw = sysfs::sample(base_path);
    let sample = derive::derive(&raw);

    debug!(
        sample = %serde_json::to_string(&sample).unwrap_or_default(),
        "Battery sampled"
    );

    Reading {
        taken_at: Local::now(),
        sample,
    }
}
