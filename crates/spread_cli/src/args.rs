//! Command-line arguments

use anyhow::{anyhow, bail, Context, Result};
use spread_layout::{FillMethod, PhotobookFormat};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: spread-layout <FORMAT> <PHOTOS> [OPTIONS]

Arguments:
  <FORMAT>   Photobook format: 20x20, 21x30 or 30x30
  <PHOTOS>   Number of photos to lay out

Options:
  --random               Use the randomized layout instead of the grid
  --collage              Use the preset collage templates (1 to 3 photos per spread)
  --seed <N>             Seed for the randomized layout
  --spreads <N>          Number of spreads in the book [default: 1]
  --spacing <S>          Gap between slots in design units
  --config <PATH>        JSON file with layout settings
  --photos-file <PATH>   JSON array of photos to bind to slots
  -h, --help             Print this help";

/// Parsed invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub format: PhotobookFormat,
    pub photos: usize,
    pub fill_method: FillMethod,
    pub seed: Option<u64>,
    pub spreads: usize,
    pub spacing: Option<f32>,
    pub config: Option<PathBuf>,
    pub photos_file: Option<PathBuf>,
}

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Args),
    Help,
}

pub fn parse<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut fill_method = FillMethod::Manual;
    let mut seed = None;
    let mut spreads = 1;
    let mut spacing = None;
    let mut config = None;
    let mut photos_file = None;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--random" => fill_method = FillMethod::Auto,
            "--collage" => fill_method = FillMethod::Collage,
            "--seed" => seed = Some(parse_value(&mut iter, "--seed")?),
            "--spreads" => spreads = parse_value(&mut iter, "--spreads")?,
            "--spacing" => spacing = Some(parse_value(&mut iter, "--spacing")?),
            "--config" => config = Some(PathBuf::from(value(&mut iter, "--config")?)),
            "--photos-file" => {
                photos_file = Some(PathBuf::from(value(&mut iter, "--photos-file")?))
            }
            flag if flag.starts_with("--") => bail!("unknown option {}", flag),
            _ => positional.push(arg),
        }
    }

    let [format, photos] = <[String; 2]>::try_from(positional)
        .map_err(|got| anyhow!("expected <FORMAT> <PHOTOS>, got {} arguments", got.len()))?;

    Ok(Command::Run(Args {
        format: format.parse()?,
        photos: photos
            .parse()
            .with_context(|| format!("invalid photo count {:?}", photos))?,
        fill_method,
        seed,
        spreads,
        spacing,
        config,
        photos_file,
    }))
}

fn value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    iter.next()
        .ok_or_else(|| anyhow!("{} needs a value", flag))
}

fn parse_value<T>(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = value(iter, flag)?;
    raw.parse()
        .with_context(|| format!("invalid value {:?} for {}", raw, flag))
}
