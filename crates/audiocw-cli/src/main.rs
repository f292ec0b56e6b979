//! AudioCW CLI - render text as Morse code audio.
//!
//! Thin shell over `audiocw-core`: parses arguments, picks an output path
//! (a random file in the system temp directory unless one is given), runs
//! the encode/synthesize/write pipeline, and prints `AUDIO OUT: <path>` on
//! success so wrapping tools can locate the file.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use rand::Rng;

use audiocw_core::{encode, synthesize, wav, AudioSpec};

/// AudioCW - Morse code WAV generator
#[derive(Parser)]
#[command(name = "audiocw")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to render as Morse code audio
    text: String,

    /// Tone frequency in Hz (must be positive)
    #[arg(short, long, default_value_t = 750.0)]
    freq: f64,

    /// Keying speed in words per minute
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    wpm: u32,

    /// Output WAV path (default: a random audiocwNNNN.wav in the temp directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Generates a random output path like `/tmp/audiocw4821.wav`.
fn wav_filename() -> PathBuf {
    let n: u32 = rand::thread_rng().gen_range(1000..=9999);
    env::temp_dir().join(format!("audiocw{n}.wav"))
}

fn run(cli: &Cli) -> anyhow::Result<PathBuf> {
    let sink = cli.output.clone().unwrap_or_else(wav_filename);
    let spec = AudioSpec::pcm8k();

    let encoded = encode(&cli.text);
    let samples = synthesize(&encoded, cli.wpm, cli.freq, &spec)?;
    wav::write_file(&samples, &spec, &sink)?;

    Ok(sink)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(path) => {
            println!("AUDIO OUT: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
