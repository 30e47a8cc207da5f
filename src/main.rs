//! `lutgen` writes the brightness correction tables of the LED driver into a C header.
//!
//! ```bash
//! lutgen --size 4096 --output brightness_lut.h
//! lutgen --size 256 --stdout
//! lutgen --preview --preview-samples 17
//! ```

use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::{Args, EmitterConfig, Output};
use crate::emitter::{firmware_tables, write_header, TableEmitter};

mod clock;
mod config;
mod emitter;
mod preview;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);
    let config = EmitterConfig::try_from(&args)?;
    run(&config)
}

/// Logs go to stderr, stdout may carry the header
fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &EmitterConfig) -> Result<()> {
    debug!(?config, "starting");
    let clock: Box<dyn Clock> = match config.generated_at {
        Some(time) => Box::new(FixedClock::create(time)),
        None => Box::new(SystemClock),
    };
    let tables = firmware_tables(config.log_gamma, config.gamma);
    let emitter = TableEmitter::new(clock.as_ref(), tables);

    let tables = emitter.generate(config.size)?;
    let mut header = String::new();
    emitter.render(&mut header, config.size, &tables)?;

    match &config.output {
        Output::Stdout => {
            let mut out = stdout().lock();
            out.write_all(header.as_bytes())
                .and_then(|_| out.flush())
                .context("failed to write header to stdout")?;
        }
        Output::File(path) => write_header(path, &header)?,
    }

    if let Some(samples) = config.preview {
        info!(samples, "rendering preview");
        preview::render_preview(&mut stdout(), &tables, samples)?;
    }
    Ok(())
}
