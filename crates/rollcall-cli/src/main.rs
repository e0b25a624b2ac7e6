mod clock;
mod config;
mod output;
mod telemetry;

use clap::Parser;
use clock::Clock;
use config::{CliArgs, Config};
use output::write_ids;
use rollcall::{BasicIdGenerator, RecordId, ThreadRandom};
use std::io::{BufWriter, Write};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_telemetry(config.log_format)?;
    log_startup_info(&config);

    let stdout = std::io::stdout().lock();
    let written = run(&config, BufWriter::new(stdout))?;

    tracing::info!(count = written, "Generated record ids");
    Ok(())
}

/// Generates `config.count` identifiers and writes them to `out`.
fn run<W: Write>(config: &Config, out: W) -> anyhow::Result<usize> {
    let _span =
        tracing::info_span!("generate", count = config.count, clock = ?config.clock).entered();

    let generator = BasicIdGenerator::new(Clock::from(config.clock), ThreadRandom);
    let ids: Vec<RecordId> = (0..config.count).map(|_| generator.next_id()).collect();

    write_ids(out, &ids, config.format)?;
    Ok(ids.len())
}

fn log_startup_info(config: &Config) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting rollcall with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Starting rollcall: {} ids, {:?} clock",
            config.count,
            config.clock
        );
    }
}
