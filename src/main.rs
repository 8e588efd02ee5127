//! batmon: periodic battery telemetry from the Linux power-supply sysfs tree.
//!
//! Run with:  `RUST_LOG=debug batmon /sys/class/power_supply/BAT0`

mod report;

use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "batmon")]
#[command(about = "Sample a battery's power-supply directory and print derived metrics")]
#[command(version)]
struct Cli {
    /// Power-supply directory to read [default: /sys/class/power_supply/BAT1].
    /// Anything after the first argument is ignored.
    #[arg(value_name = "BASE", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl Cli {
    fn base(&self) -> Option<PathBuf> {
        self.args.first().map(PathBuf::from)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging on stderr; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = batmon_config::resolve(cli.base());

    tracing::info!("batmon v{} starting", env!("CARGO_PKG_VERSION"));

    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "Reading battery info from {} every {}",
        config.base_path.display(),
        config.interval_label()
    )?;

    let mut readings = batmon_system::spawn_monitor(config.base_path, config.interval);
    while let Some(reading) = readings.recv().await {
        stdout.write_all(report::render(&reading).as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
