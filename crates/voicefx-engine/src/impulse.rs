//! Synthetic impulse-response generation for convolution reverb.
//!
//! The kernel is not a measured impulse: it is a burst of uniform noise
//! under a polynomial decay envelope. Channels draw independently, giving
//! decorrelated reverb tails. A fresh kernel is generated per render.

use crate::buffer::SampleBuffer;
use crate::rng::RandomSource;

/// Generates a decaying-noise impulse response.
///
/// For sample index `i` in `[0, length)` with `length = round(duration *
/// sample_rate)`, the envelope is `((length - i) / length) ^ decay_exponent`
/// and the sample is `uniform(-1, 1) * envelope`.
///
/// # Arguments
/// * `channel_count` - Channels to generate, each with independent draws
/// * `sample_rate` - Kernel sample rate in Hz
/// * `decay_exponent` - Envelope exponent; larger values decay faster
/// * `duration_seconds` - Kernel length in seconds
/// * `rng` - Random source supplying the noise
pub fn generate(
    channel_count: usize,
    sample_rate: u32,
    decay_exponent: f32,
    duration_seconds: f32,
    rng: &mut dyn RandomSource,
) -> SampleBuffer {
    let length = (duration_seconds as f64 * sample_rate as f64).round() as usize;

    let mut channels = Vec::with_capacity(channel_count);
    for _ in 0..channel_count {
        let mut samples = Vec::with_capacity(length);
        for i in 0..length {
            let n = (length - i) as f32;
            let vol = (n / length as f32).powf(decay_exponent);
            samples.push(rng.next_bipolar() * vol);
        }
        channels.push(samples);
    }

    SampleBuffer::new(sample_rate, channels)
}
