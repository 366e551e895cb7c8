//! Render orchestrator: the public entry point of the engine.
//!
//! A render is one deterministic pass: resolve the profile, compute the
//! output length, resample, run the chain, encode. No retries, no shared
//! state; concurrent renders never interact.

use crate::buffer::SampleBuffer;
use crate::effects;
use crate::error::{RenderError, RenderResult};
use crate::profile::{self, EffectId};
use crate::resample;
use crate::rng::{RandomSource, ThreadRandom};
use crate::wav;

/// Canonical output sample rate in Hz.
///
/// Every render lands at this rate regardless of the capture device's
/// native rate; together with the single up-front length computation this
/// prevents duration drift between mismatched rates.
pub const OUTPUT_SAMPLE_RATE: u32 = 44100;

/// Renders a clip through an effect, by string identifier.
///
/// The identifier must be one of the closed effect set; anything else is
/// rejected as [`RenderError::InvalidEffect`] with no work performed.
pub fn render_effect_named(input: SampleBuffer, name: &str) -> RenderResult<Vec<u8>> {
    let effect: EffectId = name.parse()?;
    render_effect(input, effect)
}

/// Renders a clip through an effect and encodes it as WAV bytes.
///
/// Uses the process-wide random generator for impulse synthesis, so reverb
/// renders are not reproducible across calls; everything else is
/// deterministic in the input and effect.
pub fn render_effect(input: SampleBuffer, effect: EffectId) -> RenderResult<Vec<u8>> {
    render_effect_with(input, effect, &mut ThreadRandom)
}

/// Renders a clip with a caller-supplied random source.
///
/// Hosts and tests inject a seeded source here to make reverb kernels
/// reproducible.
pub fn render_effect_with(
    input: SampleBuffer,
    effect: EffectId,
    rng: &mut dyn RandomSource,
) -> RenderResult<Vec<u8>> {
    // A clip of length zero is a valid degenerate case: a header-only
    // container, not an error.
    if input.is_empty() {
        let degenerate = SampleBuffer::new(
            OUTPUT_SAMPLE_RATE,
            vec![Vec::new(); input.channel_count()],
        );
        return Ok(wav::encode(&degenerate));
    }

    if input.sample_rate == 0 {
        return Err(RenderError::render("input sample rate is zero"));
    }

    let profile = profile::resolve(effect);
    let output_frames = output_length(&input, profile.playback_rate, profile.tail_seconds);

    // Every buffer in the chain is sized to this length once, up front.
    let mut output = resample::reindex(
        &input,
        profile.playback_rate,
        OUTPUT_SAMPLE_RATE,
        output_frames,
    );
    effects::apply_chain(&mut output, &profile.chain, profile.tail_seconds, rng);

    Ok(wav::encode(&output))
}

/// Computes the output length in frames at the canonical rate.
///
/// `ceil((input_duration / playback_rate + tail_seconds) * output_rate)`.
pub fn output_length(input: &SampleBuffer, playback_rate: f32, tail_seconds: f32) -> usize {
    let input_duration = input.duration_seconds();
    let total_duration = input_duration / playback_rate as f64 + tail_seconds as f64;
    (total_duration * OUTPUT_SAMPLE_RATE as f64).ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRandom;

    fn half_second_clip(sample_rate: u32) -> SampleBuffer {
        let frames = (sample_rate / 2) as usize;
        let samples: Vec<f32> = (0..frames)
            .map(|i| (std::f32::consts::TAU * 220.0 * i as f32 / sample_rate as f32).sin() * 0.5)
            .collect();
        SampleBuffer::mono(samples, sample_rate)
    }

    fn data_chunk_size(wav: &[u8]) -> u32 {
        u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]])
    }

    #[test]
    fn test_pass_through_length_law() {
        for effect in EffectId::ALL {
            let profile = profile::resolve(effect);
            if profile.chain != crate::profile::ChainKind::PassThrough {
                continue;
            }
            let input = half_second_clip(44100);
            let expected_frames = output_length(&input, profile.playback_rate, profile.tail_seconds);

            let wav = render_effect(input, effect).unwrap();
            assert_eq!(
                data_chunk_size(&wav) as usize,
                expected_frames * 2,
                "{} length mismatch",
                effect
            );
        }
    }

    #[test]
    fn test_output_length_formula() {
        // 0.5s at rate 1.6 plus 0.5s tail: ceil((0.5/1.6 + 0.5) * 44100).
        let input = half_second_clip(44100);
        let frames = output_length(&input, 1.6, 0.5);
        assert_eq!(frames, ((0.5f64 / 1.6 + 0.5) * 44100.0).ceil() as usize);
    }

    #[test]
    fn test_output_rate_is_canonical_for_any_input_rate() {
        for rate in [22050, 44100, 48000, 96000] {
            let wav = render_effect(half_second_clip(rate), EffectId::Normal).unwrap();
            let header_rate = u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]);
            assert_eq!(header_rate, OUTPUT_SAMPLE_RATE);
        }
    }

    #[test]
    fn test_unknown_name_rejected_before_work() {
        let err = render_effect_named(half_second_clip(44100), "megaphone").unwrap_err();
        assert!(matches!(err, RenderError::InvalidEffect { .. }));
    }

    #[test]
    fn test_zero_length_input_yields_header_only_container() {
        for effect in EffectId::ALL {
            let input = SampleBuffer::mono(Vec::new(), 44100);
            let wav = render_effect(input, effect).unwrap();
            assert_eq!(wav.len(), 44, "{} should be header-only", effect);
            assert_eq!(data_chunk_size(&wav), 0);
        }
    }

    #[test]
    fn test_zero_channel_input_yields_header_only_container() {
        let input = SampleBuffer::new(48000, vec![]);
        let wav = render_effect(input, EffectId::Cave).unwrap();
        assert_eq!(wav.len(), 44);
        assert_eq!(data_chunk_size(&wav), 0);
    }

    #[test]
    fn test_zero_sample_rate_is_render_failure() {
        let input = SampleBuffer::mono(vec![0.1; 100], 0);
        let err = render_effect(input, EffectId::Normal).unwrap_err();
        assert!(matches!(err, RenderError::RenderFailure { .. }));
    }

    #[test]
    fn test_non_reverb_renders_are_deterministic() {
        for effect in [EffectId::Helium, EffectId::Robot, EffectId::Echo] {
            let a = render_effect(half_second_clip(44100), effect).unwrap();
            let b = render_effect(half_second_clip(44100), effect).unwrap();
            assert_eq!(a, b, "{} should not depend on the random source", effect);
        }
    }

    #[test]
    fn test_reverb_reproducible_with_seeded_source() {
        let a = render_effect_with(
            half_second_clip(44100),
            EffectId::Cave,
            &mut SeededRandom::new(42),
        )
        .unwrap();
        let b = render_effect_with(
            half_second_clip(44100),
            EffectId::Cave,
            &mut SeededRandom::new(42),
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
