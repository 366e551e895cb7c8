//! Playback-rate resampling by read-cursor reindexing.
//!
//! The playback rate does not interpolate; it scales the speed of a read
//! cursor through the input. Raising the rate shortens duration and raises
//! pitch together, which is the intended character of the pitch effects.

use crate::buffer::SampleBuffer;

/// Resamples a buffer into a canonical-rate copy of a fixed length.
///
/// Output index `j` reads input index `floor(j * step)` with
/// `step = playback_rate * input_rate / output_rate`, so inputs at any
/// native rate land at the correct duration in the output. Reads past the
/// input's end (tail padding, rounding) produce silence.
///
/// # Arguments
/// * `input` - Source buffer at its native sample rate
/// * `playback_rate` - Read-cursor speed multiplier, > 0
/// * `output_rate` - Canonical output sample rate in Hz
/// * `output_frames` - Exact per-channel length of the result
pub fn reindex(
    input: &SampleBuffer,
    playback_rate: f32,
    output_rate: u32,
    output_frames: usize,
) -> SampleBuffer {
    let step = playback_rate as f64 * input.sample_rate as f64 / output_rate as f64;

    let channels = input
        .channels
        .iter()
        .map(|samples| {
            (0..output_frames)
                .map(|j| {
                    let idx = (j as f64 * step) as usize;
                    samples.get(idx).copied().unwrap_or(0.0)
                })
                .collect()
        })
        .collect();

    SampleBuffer::new(output_rate, channels)
}
