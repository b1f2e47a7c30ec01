use amc_lerp::{read, write, Error as LerpError, Interpolator};
use anyhow::{Context, Result};
use log::*;
use structopt::clap::{AppSettings, ErrorKind};
use structopt::StructOpt;

use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

mod descriptor;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "amc-lerp",
    about = "blends the last frame of one AMC motion into the first frame of another",
    setting = AppSettings::AllowNegativeNumbers
)]
struct Opt {
    /// Motion whose last frame starts the blend
    #[structopt(parse(from_os_str))]
    from: PathBuf,

    /// Motion whose first frame ends the blend
    #[structopt(parse(from_os_str))]
    to: PathBuf,

    /// Number of frames to generate
    frames: i64,

    /// Write the blend here instead of stdout
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// TOML config; ./lerp.toml is used when present
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
}

fn parse_args(args: Vec<OsString>) -> Result<Opt> {
    match Opt::from_iter_safe(&args) {
        Ok(opt) => Ok(opt),
        Err(e) if e.kind == ErrorKind::MissingRequiredArgument => {
            Err(LerpError::InsufficientArguments.into())
        }
        Err(e) => e.exit(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    info!("starting up");

    let opt = parse_args(std::env::args_os().collect())?;
    let config = descriptor::Config::load(opt.config.as_deref())?;
    debug!("{:?}", config);

    let start = read::read_last_frame(&opt.from)
        .with_context(|| format!("failed to read last frame of `{}`", opt.from.display()))?;
    let end = read::read_first_frame(&opt.to)
        .with_context(|| format!("failed to read first frame of `{}`", opt.to.display()))?;

    if opt.frames <= 0 {
        warn!("frame count {} generates no frames", opt.frames);
    }
    let steps = opt.frames.max(0) as usize;

    let frames = Interpolator::with_fixed_joints(config.fixed_joints)
        .interpolate(&start, &end, steps)
        .context("failed to interpolate motions")?;
    info!("generated {} frame(s) of {} joint(s)", frames.len(), start.len());

    match opt.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            write::write_motion(BufWriter::new(file), &frames)
                .with_context(|| format!("failed to write `{}`", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            write::write_motion(BufWriter::new(stdout.lock()), &frames)
                .context("failed to write motion")?;
        }
    }

    Ok(())
}
