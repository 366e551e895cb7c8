//! Feedback delay for the echo voice.
//!
//! A feedback comb: `y[n] = x[n] + g * y[n - D]`. The dry signal stays in
//! the output (additive echo, not wet-only) and every trip through the
//! delay line is scaled by the feedback gain, so echo `k` is bounded by
//! `g^k` and the tail settles to silence within the allotted tail time.

use crate::buffer::SampleBuffer;

/// Ring buffer for the delay line.
struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    fn new(size: usize) -> Self {
        Self {
            buffer: vec![0.0; size],
            write_pos: 0,
        }
    }

    fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    fn read(&self, delay_samples: usize) -> f32 {
        let read_pos = (self.write_pos + self.buffer.len() - delay_samples) % self.buffer.len();
        self.buffer[read_pos]
    }
}

/// Applies the feedback comb in place.
///
/// # Arguments
/// * `buffer` - Audio to process, already sized to the output length
/// * `delay_seconds` - Delay-line length in seconds
/// * `feedback_gain` - Per-trip gain, strictly below 1 (the profile table
///   guarantees the bound)
pub fn apply(buffer: &mut SampleBuffer, delay_seconds: f32, feedback_gain: f32) {
    let delay_samples = (delay_seconds as f64 * buffer.sample_rate as f64).round() as usize;
    if delay_samples == 0 {
        return;
    }

    for channel in buffer.channels.iter_mut() {
        let mut line = DelayLine::new(delay_samples + 1);

        for sample in channel.iter_mut() {
            let delayed = line.read(delay_samples);
            let out = *sample + feedback_gain * delayed;
            line.write(out);
            *sample = out;
        }
    }
}
