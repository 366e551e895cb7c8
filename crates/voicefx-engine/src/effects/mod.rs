//! Signal chain shapes and their dispatch.
//!
//! The repertoire is four fixed shapes; dispatch is a match over
//! [`ChainKind`], not a node graph.

pub mod delay;
pub mod reverb;
pub mod ring_mod;

use crate::buffer::SampleBuffer;
use crate::impulse;
use crate::profile::ChainKind;
use crate::rng::RandomSource;

/// Runs one chain shape over a resampled buffer, in place.
///
/// The buffer is already sized to the precomputed output length, so every
/// shape writes the full output and nothing here can fail.
///
/// # Arguments
/// * `buffer` - Resampled audio at the canonical output rate
/// * `chain` - Chain shape with its parameters
/// * `tail_seconds` - Tail allotment; doubles as the reverb kernel duration
/// * `rng` - Random source for impulse synthesis
pub fn apply_chain(
    buffer: &mut SampleBuffer,
    chain: &ChainKind,
    tail_seconds: f32,
    rng: &mut dyn RandomSource,
) {
    match *chain {
        ChainKind::PassThrough => {}
        ChainKind::RingModulated {
            ring_freq_hz,
            lowpass_hz,
        } => {
            ring_mod::apply(buffer, ring_freq_hz, lowpass_hz);
        }
        ChainKind::ConvolutionReverb {
            decay,
            dry_gain,
            wet_gain,
        } => {
            // Fresh kernel per render, channel-matched and decorrelated.
            let ir = impulse::generate(
                buffer.channel_count(),
                buffer.sample_rate,
                decay,
                tail_seconds,
                rng,
            );
            reverb::apply(buffer, &ir, dry_gain, wet_gain);
        }
        ChainKind::DelayFeedback {
            delay_seconds,
            feedback_gain,
        } => {
            delay::apply(buffer, delay_seconds, feedback_gain);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    #[test]
    fn test_pass_through_is_identity() {
        let mut buf = SampleBuffer::mono(vec![0.1, 0.2, 0.3], 44100);
        let original = buf.clone();
        let mut rng = SeededRandom::new(0);
        apply_chain(&mut buf, &ChainKind::PassThrough, 0.5, &mut rng);
        assert_eq!(buf, original);
    }

    #[test]
    fn test_every_shape_preserves_length() {
        let shapes = [
            ChainKind::PassThrough,
            ChainKind::RingModulated {
                ring_freq_hz: 50.0,
                lowpass_hz: 2000.0,
            },
            ChainKind::ConvolutionReverb {
                decay: 2.5,
                dry_gain: 0.3,
                wet_gain: 0.9,
            },
            ChainKind::DelayFeedback {
                delay_seconds: 0.3,
                feedback_gain: 0.4,
            },
        ];

        for chain in &shapes {
            let mut buf = SampleBuffer::stereo(vec![0.1; 4410], vec![0.1; 4410], 44100);
            let mut rng = SeededRandom::new(1);
            apply_chain(&mut buf, chain, 0.2, &mut rng);
            assert_eq!(buf.frames(), 4410, "{:?} changed the length", chain);
            assert_eq!(buf.channel_count(), 2);
        }
    }
}
