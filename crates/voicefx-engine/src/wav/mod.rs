//! Byte-exact 16-bit PCM WAV encoding.
//!
//! Writes a canonical 44-byte header followed by interleaved little-endian
//! signed 16-bit samples, with no timestamps or variable metadata, so the
//! same buffer always encodes to the same bytes.

mod format;
mod writer;


pub use format::WavFormat;
pub use writer::{interleave_to_pcm16, quantize_sample, write_wav, write_wav_to_vec};

use crate::buffer::SampleBuffer;

/// Encodes a sample buffer as a complete WAV file.
///
/// Infallible for well-formed input; out-of-range samples are clamped
/// during quantization. A buffer with zero frames (or zero channels)
/// encodes to a valid header-only container.
pub fn encode(buffer: &SampleBuffer) -> Vec<u8> {
    let format = WavFormat::new(buffer.channel_count() as u16, buffer.sample_rate);
    let pcm = interleave_to_pcm16(&buffer.channels);
    write_wav_to_vec(&format, &pcm)
}
