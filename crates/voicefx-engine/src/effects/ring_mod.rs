//! Ring modulator for the robot voice.
//!
//! Multiplies the signal with a bipolar sine carrier, producing sum and
//! difference sidebands (the metallic timbre), then lowpasses the result to
//! tame the harsher sidebands. The carrier is a true modulator centered at
//! zero with full [-1, 1] swing, not an additive bias.

use std::f64::consts::TAU;

use crate::buffer::SampleBuffer;
use crate::filter::BiquadFilter;

/// Butterworth Q for the post-modulation lowpass.
const LOWPASS_Q: f64 = 0.707;

/// Applies ring modulation followed by a lowpass filter, in place.
///
/// # Arguments
/// * `buffer` - Audio to process; every channel sees the same carrier
/// * `ring_freq_hz` - Carrier oscillator frequency in Hz
/// * `lowpass_hz` - Lowpass cutoff in Hz
pub fn apply(buffer: &mut SampleBuffer, ring_freq_hz: f32, lowpass_hz: f32) {
    let sample_rate = buffer.sample_rate as f64;
    if sample_rate == 0.0 {
        return;
    }
    let phase_increment = ring_freq_hz as f64 / sample_rate;

    for channel in buffer.channels.iter_mut() {
        // Phase accumulator for a deterministic carrier; every channel
        // starts at phase 0 so the carrier is identical across channels.
        let mut phase = 0.0f64;
        let mut filter = BiquadFilter::lowpass(lowpass_hz as f64, LOWPASS_Q, sample_rate);

        for sample in channel.iter_mut() {
            let carrier = (TAU * phase).sin() as f32;
            *sample = filter.process(*sample * carrier);

            phase += phase_increment;
            if phase >= 1.0 {
                phase -= 1.0;
            }
        }
    }
}
