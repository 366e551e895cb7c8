//! WAV decoding at the capture boundary.
//!
//! The engine consumes a decoded [`SampleBuffer`]; this module produces one
//! from a WAV file on disk. Decode problems are the capture collaborator's
//! failures and surface as [`RenderError::DecodeFailure`].

use std::path::Path;

use voicefx_engine::{RenderError, SampleBuffer};

/// Reads a WAV file into a multichannel sample buffer.
///
/// Integer samples of any bit depth are normalized to [-1.0, 1.0]; float
/// files are taken as-is. Interleaved frames are split into per-channel
/// vectors.
pub fn decode_wav(path: &Path) -> Result<SampleBuffer, RenderError> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| RenderError::decode(format!("{}: {}", path.display(), e)))?;
    let spec = reader.spec();
    let channel_count = spec.channels as usize;

    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Int => {
            let max_val = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / max_val))
                .collect::<Result<_, _>>()
                .map_err(|e| RenderError::decode(e.to_string()))?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<Result<_, _>>()
            .map_err(|e| RenderError::decode(e.to_string()))?,
    };

    if channel_count == 0 {
        return Ok(SampleBuffer::new(spec.sample_rate, vec![]));
    }

    let frames = interleaved.len() / channel_count;
    let mut channels = vec![Vec::with_capacity(frames); channel_count];
    for frame in interleaved.chunks_exact(channel_count) {
        for (channel, &sample) in channels.iter_mut().zip(frame.iter()) {
            channel.push(sample);
        }
    }

    Ok(SampleBuffer::new(spec.sample_rate, channels))
}
