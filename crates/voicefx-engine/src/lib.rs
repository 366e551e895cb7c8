//! voicefx rendering engine
//!
//! This crate renders a recorded voice clip through one of a fixed set of
//! audio-effect presets and serializes the result as an uncompressed 16-bit
//! PCM WAV file:
//!
//! - **Pitch voices** - helium, child, women, giant, gorilla (playback-rate
//!   reindexing; pitch and duration shift together)
//! - **Robot** - ring modulation with a lowpass post-filter
//! - **Cave / Musician** - convolution reverb over a synthetic
//!   decaying-noise impulse response
//! - **Echo** - feedback comb delay
//!
//! # Determinism
//!
//! A render is a pure, synchronous pipeline over a buffer the caller owns.
//! Everything is deterministic in the input and effect except the reverb
//! kernel, which draws from the process-wide random generator by design; a
//! caller that needs reproducible kernels injects a seeded
//! [`rng::RandomSource`] via [`render_effect_with`].
//!
//! # Example
//!
//! ```ignore
//! use voicefx_engine::{render_effect, EffectId, SampleBuffer};
//!
//! let clip = SampleBuffer::mono(samples, 48000);
//! let wav_bytes = render_effect(clip, EffectId::Robot)?;
//! std::fs::write("voice_robot.wav", &wav_bytes)?;
//! ```
//!
//! # Crate Structure
//!
//! - [`render_effect()`] - Main entry point
//! - [`buffer`] - Multichannel sample buffer
//! - [`profile`] - Effect identifiers and the profile table
//! - [`impulse`] - Synthetic impulse-response generation
//! - [`effects`] - The four chain shapes and their dispatch
//! - [`filter`] - Biquad lowpass
//! - [`resample`] - Playback-rate reindexing
//! - [`rng`] - Random sources (thread-local and seeded)
//! - [`wav`] - Byte-exact WAV encoder

pub mod buffer;
pub mod effects;
pub mod error;
pub mod filter;
pub mod impulse;
pub mod profile;
pub mod render;
pub mod resample;
pub mod rng;
pub mod wav;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use error::{RenderError, RenderResult};
pub use profile::{ChainKind, EffectId, EffectProfile};
pub use render::{render_effect, render_effect_named, render_effect_with, OUTPUT_SAMPLE_RATE};

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn voice_clip() -> SampleBuffer {
        // A short two-channel clip with some harmonic content.
        let frames = 22050;
        let left: Vec<f32> = (0..frames)
            .map(|i| {
                let t = i as f32 / 44100.0;
                ((std::f32::consts::TAU * 180.0 * t).sin()
                    + 0.5 * (std::f32::consts::TAU * 360.0 * t).sin())
                    * 0.4
            })
            .collect();
        let right = left.iter().map(|s| s * 0.8).collect();
        SampleBuffer::stereo(left, right, 44100)
    }

    #[test]
    fn test_every_effect_renders() {
        for effect in EffectId::ALL {
            let wav = render_effect(voice_clip(), effect).unwrap();
            assert_eq!(&wav[0..4], b"RIFF");
            assert_eq!(&wav[8..12], b"WAVE");
            assert!(wav.len() > 44, "{} produced no audio", effect);
        }
    }

    #[test]
    fn test_normal_preserves_audible_content() {
        let wav = render_effect(voice_clip(), EffectId::Normal).unwrap();
        let data = &wav[44..];
        let peak = data
            .chunks_exact(2)
            .map(|b| i16::from_le_bytes([b[0], b[1]]).unsigned_abs())
            .max()
            .unwrap();
        assert!(peak > 8000);
    }

    #[test]
    fn test_concurrent_renders_match_sequential() {
        // Two different effects against the same input, on separate
        // threads, must be byte-identical to running them one at a time.
        // Reverb effects are excluded: their kernels are random by design.
        let sequential_robot = render_effect(voice_clip(), EffectId::Robot).unwrap();
        let sequential_echo = render_effect(voice_clip(), EffectId::Echo).unwrap();

        let robot_thread = std::thread::spawn(|| render_effect(voice_clip(), EffectId::Robot));
        let echo_thread = std::thread::spawn(|| render_effect(voice_clip(), EffectId::Echo));

        let concurrent_robot = robot_thread.join().unwrap().unwrap();
        let concurrent_echo = echo_thread.join().unwrap().unwrap();

        assert_eq!(sequential_robot, concurrent_robot);
        assert_eq!(sequential_echo, concurrent_echo);
    }

    #[test]
    fn test_concurrent_reverb_renders_agree_on_shape() {
        let sequential = render_effect(voice_clip(), EffectId::Cave).unwrap();
        let concurrent = std::thread::spawn(|| render_effect(voice_clip(), EffectId::Cave))
            .join()
            .unwrap()
            .unwrap();

        // Profile-deterministic fields only: total length and header.
        assert_eq!(sequential.len(), concurrent.len());
        assert_eq!(&sequential[..44], &concurrent[..44]);
    }

    #[test]
    fn test_pitch_effects_change_duration() {
        let helium = render_effect(voice_clip(), EffectId::Helium).unwrap();
        let giant = render_effect(voice_clip(), EffectId::Giant).unwrap();
        let normal = render_effect(voice_clip(), EffectId::Normal).unwrap();

        // Rate > 1 shortens, rate < 1 lengthens.
        assert!(helium.len() < normal.len());
        assert!(giant.len() > normal.len());
    }

    #[test]
    fn test_engine_retains_nothing_between_renders() {
        // Same input twice through a stateful-looking chain: identical
        // bytes, so no state leaks across renders.
        let first = render_effect(voice_clip(), EffectId::Echo).unwrap();
        let second = render_effect(voice_clip(), EffectId::Echo).unwrap();
        assert_eq!(first, second);
    }
}
