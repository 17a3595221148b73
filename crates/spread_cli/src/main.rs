//! spread-layout - Lay out photobook spreads from the command line
//!
//! Prints the generated spreads, with the format's print metadata, as JSON.

mod args;
mod settings;

use anyhow::{bail, Context, Result};
use args::{Args, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use spread_layout::{
    print_spec_for, FormatSpecs, PhotoRef, PhotobookConfig, Spread, SpreadLayoutEngine,
    SpreadPrintSpec,
};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Everything printed for one invocation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutReport {
    specs: &'static FormatSpecs,
    #[serde(skip_serializing_if = "Option::is_none")]
    print_spec: Option<&'static SpreadPrintSpec>,
    seed: u64,
    spreads: Vec<Spread>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let command = match args::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("error: {:#}\n\n{}", e, args::USAGE);
            std::process::exit(2);
        }
    };

    let result = match command {
        Command::Help => {
            println!("{}", args::USAGE);
            Ok(())
        }
        Command::Run(args) => run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = settings::resolve_config(args.config.as_deref(), args.spacing)?;
    let engine = SpreadLayoutEngine::new(config).context("invalid layout settings")?;
    let photos = load_photos(args)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let book = PhotobookConfig {
        format: args.format,
        spreads_count: args.spreads,
    };
    tracing::info!(format = %args.format, photos = photos.len(), seed, "generating spreads");

    let spreads = engine
        .generate_spreads(&photos, book, args.fill_method, &mut rng)
        .with_context(|| format!("failed to lay out {} photos", photos.len()))?;

    let report = LayoutReport {
        specs: args.format.specs(),
        print_spec: u32::try_from(args.spreads)
            .ok()
            .and_then(|count| print_spec_for(args.format, count)),
        seed,
        spreads,
    };

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report).context("failed to write layout")?;
    writeln!(stdout)?;
    Ok(())
}

/// Photos from `--photos-file`, or placeholders numbered `photo-0..`
fn load_photos(args: &Args) -> Result<Vec<PhotoRef>> {
    match &args.photos_file {
        Some(path) => read_photos(path, args.photos),
        None => Ok((0..args.photos)
            .map(|i| PhotoRef {
                id: format!("photo-{}", i),
                width: 0,
                height: 0,
                url: String::new(),
            })
            .collect()),
    }
}

/// The first `count` photos of a JSON photo list; fewer is an error
fn read_photos(path: &Path, count: usize) -> Result<Vec<PhotoRef>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read photos file {}", path.display()))?;
    let mut photos: Vec<PhotoRef> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse photos file {}", path.display()))?;
    if photos.len() < count {
        bail!(
            "photos file {} lists {} photos, {} requested",
            path.display(),
            photos.len(),
            count
        );
    }
    photos.truncate(count);
    Ok(photos)
}
