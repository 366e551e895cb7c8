//! Core WAV writing and PCM quantization.

use std::io::{self, Write};

use super::format::WavFormat;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - WAV format parameters
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &WavFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(44 + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}

/// Quantizes one float sample to a signed 16-bit value.
///
/// Clamps to [-1.0, 1.0], scales non-negative values by 32767 and negative
/// values by 32768, and truncates toward zero. The asymmetric scale uses
/// the full signed range without overflow at -1.0, and the truncation is
/// part of the byte-exact output contract.
pub fn quantize_sample(sample: f32) -> i16 {
    let clipped = sample.clamp(-1.0, 1.0);
    if clipped < 0.0 {
        (clipped * 32768.0) as i16
    } else {
        (clipped * 32767.0) as i16
    }
}

/// Converts per-channel float samples to interleaved 16-bit PCM bytes.
///
/// Frames are channel-interleaved in channel order, little-endian. Channels
/// shorter than the longest channel read as silence.
pub fn interleave_to_pcm16(channels: &[Vec<f32>]) -> Vec<u8> {
    let frames = channels.iter().map(|c| c.len()).max().unwrap_or(0);
    let mut pcm = Vec::with_capacity(frames * channels.len() * 2);

    for frame in 0..frames {
        for channel in channels {
            let sample = channel.get(frame).copied().unwrap_or(0.0);
            pcm.extend_from_slice(&quantize_sample(sample).to_le_bytes());
        }
    }

    pcm
}
