mod args;
mod report;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use args::{Args, OutputFormat};
use legend_climb::{estimate, ClimbConfig};
use report::{build_summary_table, build_table, write_json, write_lines, Mode};

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = args.to_config();
    config.validate().context("invalid climb parameters")?;
    debug!(?config, "starting estimation");

    let t0 = Instant::now();
    let pmf = estimate(&config)?;
    debug!(elapsed_s = t0.elapsed().as_secs_f64(), "estimation done");

    let mode = if args.pdf { Mode::Pdf } else { Mode::Cdf };
    let shown = match mode {
        Mode::Pdf => pmf.clone(),
        Mode::Cdf => pmf.cumulative(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Lines => write_lines(&mut out, &shown)?,
        OutputFormat::Table => {
            build_table(&shown).print(&mut out)?;
        }
        OutputFormat::Json => {
            // the summary travels inside the JSON document
            let summary = args.summary.then_some(&pmf);
            let resolved = ClimbConfig { seed: pmf.seed, ..config.clone() };
            write_json(&mut out, &resolved, mode, &shown, summary)?;
        }
    }

    if args.summary && args.format != OutputFormat::Json {
        if let Some(seed) = pmf.seed {
            writeln!(out, "seed {}", seed)?;
        }
        build_summary_table(&pmf).print(&mut out)?;
    }
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
