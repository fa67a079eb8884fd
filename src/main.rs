use clap::{Parser, Subcommand};
use rawclip::{
    AudioClip, ChannelLayout, ClipEditing, ClipError, ClipProcessing, ClipResult, ClipStatistics,
    PcmSample, PerChannel,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rawclip")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Sampling rate of every input file, in Hz
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    rate: u32,

    /// Sample bit depth of every input file
    #[arg(short, long, value_parser = parse_bits)]
    bits: u8,

    /// Channel count of every input file (1 = mono, 2 = stereo)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    channels: u8,

    /// Base name for the written output file
    #[arg(short, long, default_value = "out")]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mix two equal-length clips sample by sample
    Add {
        /// First input file
        a: PathBuf,
        /// Second input file
        b: PathBuf,
    },
    /// Append the second clip after the first
    Cat {
        /// First input file
        a: PathBuf,
        /// Second input file
        b: PathBuf,
    },
    /// Mix a window of the second clip into the first
    Radd {
        /// First frame of the window
        start: usize,
        /// Frame past the last frame of the window
        end: usize,
        /// First input file
        a: PathBuf,
        /// Second input file
        b: PathBuf,
    },
    /// Remove an inclusive range of frames
    Cut {
        /// First frame to remove
        start: usize,
        /// Last frame to remove (inclusive)
        end: usize,
        /// Input file
        file: PathBuf,
    },
    /// Scale the volume by per-channel factors
    Vol {
        /// Input file
        file: PathBuf,
        /// One factor, or left and right factors for stereo
        #[arg(num_args = 1..=2, required = true, allow_negative_numbers = true)]
        factors: Vec<f64>,
    },
    /// Rescale each channel toward a target RMS
    Norm {
        /// Input file
        file: PathBuf,
        /// One target, or left and right targets for stereo
        #[arg(num_args = 1..=2, required = true)]
        targets: Vec<f64>,
    },
    /// Reverse the frame order
    Rev {
        /// Input file
        file: PathBuf,
    },
    /// Print the RMS of each channel
    Rms {
        /// Input file
        file: PathBuf,
    },
}

fn parse_bits(value: &str) -> Result<u8, String> {
    match value {
        "8" => Ok(8),
        "16" => Ok(16),
        _ => Err(format!(
            "unsupported bit depth '{}', expected 8 or 16",
            value
        )),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rawclip=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.bits {
        8 => run::<i8>(&cli),
        16 => run::<i16>(&cli),
        _ => unreachable!(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run<S: PcmSample>(cli: &Cli) -> ClipResult<()> {
    let layout = if cli.channels == 1 {
        ChannelLayout::Mono
    } else {
        ChannelLayout::Stereo
    };
    let load = |path: &PathBuf| AudioClip::<S>::load(path, cli.rate, layout);

    match &cli.command {
        Command::Add { a, b } => {
            let mixed = load(a)?.add(&load(b)?)?;
            save_and_report(&mixed, &cli.output)
        }
        Command::Cat { a, b } => {
            let joined = load(a)?.concat(&load(b)?)?;
            save_and_report(&joined, &cli.output)
        }
        Command::Radd { start, end, a, b } => {
            let mixed = load(a)?.ranged_add(&load(b)?, *start, *end)?;
            save_and_report(&mixed, &cli.output)
        }
        Command::Cut { start, end, file } => {
            let remaining = load(file)?.cut(*start, *end)?;
            save_and_report(&remaining, &cli.output)
        }
        Command::Vol { file, factors } => {
            let scaled = load(file)?.scale(per_channel(factors)?)?;
            save_and_report(&scaled, &cli.output)
        }
        Command::Norm { file, targets } => {
            let mut clip = load(file)?;
            clip.normalize(per_channel(targets)?)?;
            save_and_report(&clip, &cli.output)
        }
        Command::Rev { file } => {
            let mut clip = load(file)?;
            clip.reverse();
            save_and_report(&clip, &cli.output)
        }
        Command::Rms { file } => {
            match load(file)?.rms() {
                PerChannel::Mono(rms) => println!("RMS: {:.6}", rms),
                PerChannel::Stereo(left, right) => {
                    println!("left RMS: {:.6}", left);
                    println!("right RMS: {:.6}", right);
                }
            }
            Ok(())
        }
    }
}

/// Maps 1 or 2 command line values onto a per-channel parameter.
fn per_channel(values: &[f64]) -> ClipResult<PerChannel<f64>> {
    match values {
        [v] => Ok(PerChannel::Mono(*v)),
        [l, r] => Ok(PerChannel::Stereo(*l, *r)),
        _ => Err(ClipError::InvalidParameter(format!(
            "expected 1 or 2 values, got {}",
            values.len()
        ))),
    }
}

fn save_and_report<S: PcmSample>(clip: &AudioClip<S>, base: &Path) -> ClipResult<()> {
    let written = clip.save(base)?;
    println!("wrote {}", written.display());
    Ok(())
}
