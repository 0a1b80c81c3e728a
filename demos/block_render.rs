//! Renders both block transforms to WAV files.
//!
//! Writes `upsampled.wav` (an 11025 Hz sine upsampled block by block to
//! 44100 Hz) and `ramped.wav` (a 44100 Hz sine with every 128-sample block
//! soft-ramped by +12 dB) into the directory given as the first argument,
//! or the current directory.
//!
//! Run with: cargo run --example block_render --features wav-demo -- out/

use anyhow::{Context, Result};
use blockfx::gain::{self, RampWindow, SIGNAL_LENGTH, Softness};
use blockfx::interpolation::{self, FACTOR, INPUT_LENGTH, OUTPUT_LENGTH};
use std::f64::consts::PI;
use std::path::{Path, PathBuf};

const SOURCE_RATE: u32 = 11025;
const OUTPUT_RATE: u32 = SOURCE_RATE * FACTOR as u32;
const FREQUENCY: f64 = 440.0;
const BLOCKS: usize = 1000;

fn sine(index: usize, sample_rate: u32) -> f64 {
    (2.0 * PI * FREQUENCY * index as f64 / sample_rate as f64).sin()
}

fn render_upsampled(path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: OUTPUT_RATE,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("creating {}", path.display()))?;

    let mut input = [0.0f32; INPUT_LENGTH];
    let mut output = [0.0f32; OUTPUT_LENGTH];
    for block in 0..BLOCKS {
        for (i, sample) in input.iter_mut().enumerate() {
            *sample = (0.5 * sine(block * INPUT_LENGTH + i, SOURCE_RATE)) as f32;
        }
        interpolation::try_interpolate(&input, &mut output)?;
        for &sample in &output {
            writer.write_sample(sample)?;
        }
    }

    writer.finalize()?;
    println!(
        "Wrote {} ({} blocks, {} Hz -> {} Hz)",
        path.display(),
        BLOCKS,
        SOURCE_RATE,
        OUTPUT_RATE
    );
    Ok(())
}

fn render_ramped(path: &Path, softness: Softness) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("creating {}", path.display()))?;

    // Leave 12 dB of headroom so the boosted samples still fit in 16 bits
    let amplitude = 8000.0;
    let mut block = [0i32; SIGNAL_LENGTH];
    for index in 0..BLOCKS {
        for (i, sample) in block.iter_mut().enumerate() {
            *sample = (amplitude * sine(index * SIGNAL_LENGTH + i, 44100)).round() as i32;
        }
        gain::try_soft_amp_increase(&mut block, softness.percent() as i32)?;
        for &sample in &block {
            writer.write_sample(sample as i16)?;
        }
    }

    writer.finalize()?;

    let window = RampWindow::for_softness(softness);
    println!(
        "Wrote {} (softness {}, ramp [{}, {}), hold {} samples, gain {:.3}x)",
        path.display(),
        softness,
        window.start(),
        window.end(),
        window.hold_len(),
        gain::target_gain()
    );
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    render_upsampled(&out_dir.join("upsampled.wav"))?;
    render_ramped(&out_dir.join("ramped.wav"), Softness::new(50)?)?;

    Ok(())
}
