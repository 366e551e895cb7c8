//! voicefx - render a voice clip through a fixed effect preset.
//!
//! Decodes an input WAV, runs the offline rendering engine, and writes the
//! processed clip as a 16-bit PCM WAV at 44100 Hz.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use voicefx_engine::{render_effect, EffectId};

mod input;

/// voicefx - Voice-effect renderer
#[derive(Parser)]
#[command(name = "voicefx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input WAV clip
    #[arg(required_unless_present = "list_effects")]
    input: Option<PathBuf>,

    /// Effect to apply (see --list-effects)
    #[arg(short, long, default_value = "normal", value_parser = EffectId::from_str)]
    effect: EffectId,

    /// Output file path (default: voice_<effect>.wav)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List the available effect identifiers and exit
    #[arg(long)]
    list_effects: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_effects {
        for effect in EffectId::ALL {
            println!("{}", effect.as_str());
        }
        return Ok(());
    }

    let input_path = cli.input.expect("clap enforces input unless listing");
    let output_path = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("voice_{}.wav", cli.effect)));

    let clip = input::decode_wav(&input_path)
        .with_context(|| format!("failed to decode {}", input_path.display()))?;

    println!(
        "{} {} ({} ch, {} Hz, {:.2}s) with effect {}",
        "Rendering".green().bold(),
        input_path.display(),
        clip.channel_count(),
        clip.sample_rate,
        clip.duration_seconds(),
        cli.effect.as_str().cyan()
    );

    let wav_bytes = render_effect(clip, cli.effect)?;

    std::fs::write(&output_path, &wav_bytes)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    println!(
        "{} {} ({} bytes)",
        "Wrote".green().bold(),
        output_path.display(),
        wav_bytes.len()
    );

    Ok(())
}
