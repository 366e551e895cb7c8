//! Multichannel sample buffer type.
//!
//! A [`SampleBuffer`] is the unit of exchange between the capture boundary,
//! the signal chain, and the waveform encoder. It owns its samples; stages
//! pass it by value and never share it.

/// A decoded multichannel audio clip.
///
/// Each channel is an independent vector of normalized f32 samples. All
/// channels have equal length. Samples are nominally in [-1.0, 1.0], but
/// producers do not guarantee it; the encoder clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Per-channel sample data, one inner vector per channel.
    pub channels: Vec<Vec<f32>>,
}

impl SampleBuffer {
    /// Creates a buffer from per-channel sample vectors.
    ///
    /// # Panics
    /// Panics in debug builds if channel lengths differ.
    pub fn new(sample_rate: u32, channels: Vec<Vec<f32>>) -> Self {
        if let Some(first) = channels.first() {
            debug_assert!(
                channels.iter().all(|c| c.len() == first.len()),
                "all channels must have equal length"
            );
        }
        Self {
            sample_rate,
            channels,
        }
    }

    /// Creates a mono buffer.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(sample_rate, vec![samples])
    }

    /// Creates a stereo buffer from separate left/right channels.
    pub fn stereo(left: Vec<f32>, right: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(sample_rate, vec![left, right])
    }

    /// Creates a silent buffer with the given shape.
    pub fn silence(channel_count: usize, frames: usize, sample_rate: u32) -> Self {
        Self {
            sample_rate,
            channels: vec![vec![0.0; frames]; channel_count],
        }
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of sample frames (per-channel length).
    pub fn frames(&self) -> usize {
        self.channels.first().map_or(0, |c| c.len())
    }

    /// Returns true if the buffer holds no audio (no channels or no frames).
    pub fn is_empty(&self) -> bool {
        self.frames() == 0 || self.channels.is_empty()
    }

    /// Duration in seconds at the buffer's own sample rate.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / self.sample_rate as f64
    }
}
