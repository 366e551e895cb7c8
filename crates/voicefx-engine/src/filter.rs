//! Biquad lowpass filter.
//!
//! Coefficients follow the Audio EQ Cookbook lowpass formula. Only the
//! lowpass response is needed here; it removes the harsh sidebands the
//! ring modulator produces.

use std::f64::consts::PI;

/// Biquad filter coefficients.
#[derive(Debug, Clone, Copy)]
pub struct BiquadCoeffs {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoeffs {
    /// Creates lowpass filter coefficients.
    ///
    /// # Arguments
    /// * `cutoff` - Cutoff frequency in Hz
    /// * `q` - Q factor (resonance), 0.707 is Butterworth
    /// * `sample_rate` - Audio sample rate in Hz
    pub fn lowpass(cutoff: f64, q: f64, sample_rate: f64) -> Self {
        // Clamp Q to minimum safe value to prevent division by zero
        let q = q.max(0.5);
        let omega = 2.0 * PI * cutoff / sample_rate;
        let sin_omega = omega.sin();
        let cos_omega = omega.cos();
        let alpha = sin_omega / (2.0 * q);

        let b0 = (1.0 - cos_omega) / 2.0;
        let b1 = 1.0 - cos_omega;
        let b2 = (1.0 - cos_omega) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_omega;
        let a2 = 1.0 - alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }
}

/// Biquad filter state for one channel.
#[derive(Debug, Clone)]
pub struct BiquadFilter {
    coeffs: BiquadCoeffs,
    // Delay line for input samples
    x1: f64,
    x2: f64,
    // Delay line for output samples
    y1: f64,
    y2: f64,
}

impl BiquadFilter {
    /// Creates a new biquad filter with the given coefficients.
    pub fn new(coeffs: BiquadCoeffs) -> Self {
        Self {
            coeffs,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    /// Creates a lowpass filter.
    pub fn lowpass(cutoff: f64, q: f64, sample_rate: f64) -> Self {
        Self::new(BiquadCoeffs::lowpass(cutoff, q, sample_rate))
    }

    /// Processes a single sample.
    pub fn process(&mut self, input: f32) -> f32 {
        let x0 = input as f64;
        let y0 = self.coeffs.b0 * x0 + self.coeffs.b1 * self.x1 + self.coeffs.b2 * self.x2
            - self.coeffs.a1 * self.y1
            - self.coeffs.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = y0;

        y0 as f32
    }

    /// Processes a buffer in place.
    pub fn process_buffer(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    fn rms(samples: &[f32]) -> f32 {
        (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
    }

    fn sine(freq: f32, sample_rate: f32, n: usize) -> Vec<f32> {
        (0..n)
            .map(|i| (TAU * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_lowpass_passes_low_frequencies() {
        let mut filter = BiquadFilter::lowpass(2000.0, 0.707, 44100.0);
        let mut low = sine(100.0, 44100.0, 44100);
        filter.process_buffer(&mut low);
        // Well below cutoff: essentially unattenuated.
        assert!(rms(&low) > 0.6);
    }

    #[test]
    fn test_lowpass_attenuates_high_frequencies() {
        let mut filter = BiquadFilter::lowpass(2000.0, 0.707, 44100.0);
        let mut high = sine(15000.0, 44100.0, 44100);
        filter.process_buffer(&mut high);
        assert!(rms(&high) < 0.1);
    }

    #[test]
    fn test_silence_stays_silent() {
        let mut filter = BiquadFilter::lowpass(2000.0, 0.707, 44100.0);
        let mut buf = vec![0.0f32; 1000];
        filter.process_buffer(&mut buf);
        assert!(buf.iter().all(|&s| s.abs() < 1e-12));
    }
}
