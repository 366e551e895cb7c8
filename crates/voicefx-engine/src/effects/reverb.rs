//! Convolution reverb for the cave and musician voices.
//!
//! Convolves the dry signal with a synthetic decaying-noise impulse
//! response and mixes the dry and wet paths with independent gains. The
//! paths are not renormalized; values above 1.0 after mixing are clipped
//! at the encoding stage, not here.
//!
//! The convolution is exact full linear convolution computed in the
//! frequency domain; direct convolution at multi-second kernel lengths is
//! quadratic and unusable.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::buffer::SampleBuffer;

/// Applies convolution reverb in place.
///
/// Each channel is convolved with the matching impulse channel and the
/// result is trimmed (or implicitly zero-padded) to the buffer's length.
///
/// # Arguments
/// * `buffer` - Dry audio to process, already sized to the output length
/// * `impulse` - Synthetic impulse response with matching channel count
/// * `dry_gain` - Gain applied to the unprocessed path
/// * `wet_gain` - Gain applied to the convolved path
pub fn apply(buffer: &mut SampleBuffer, impulse: &SampleBuffer, dry_gain: f32, wet_gain: f32) {
    for (ch, dry) in buffer.channels.iter_mut().enumerate() {
        let kernel = match impulse.channels.get(ch) {
            Some(k) => k.as_slice(),
            None => continue,
        };

        let wet = fft_convolve(dry, kernel);
        for (n, sample) in dry.iter_mut().enumerate() {
            let wet_sample = wet.get(n).copied().unwrap_or(0.0);
            *sample = *sample * dry_gain + wet_sample * wet_gain;
        }
    }
}

/// Full linear convolution via FFT.
///
/// Result length is `signal.len() + kernel.len() - 1`. Both inputs are
/// zero-padded to the next power of two at or above that length.
pub fn fft_convolve(signal: &[f32], kernel: &[f32]) -> Vec<f32> {
    if signal.is_empty() || kernel.is_empty() {
        return vec![0.0; (signal.len() + kernel.len()).saturating_sub(1)];
    }

    let conv_len = signal.len() + kernel.len() - 1;
    let fft_size = conv_len.next_power_of_two();

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(fft_size);
    let ifft = planner.plan_fft_inverse(fft_size);

    let mut sig_spec: Vec<Complex<f32>> = signal
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
        .take(fft_size)
        .collect();
    let mut ker_spec: Vec<Complex<f32>> = kernel
        .iter()
        .map(|&s| Complex::new(s, 0.0))
        .chain(std::iter::repeat(Complex::new(0.0, 0.0)))
        .take(fft_size)
        .collect();

    fft.process(&mut sig_spec);
    fft.process(&mut ker_spec);

    // Pointwise product in the frequency domain, with the inverse FFT's
    // 1/N normalization folded in.
    let scale = 1.0 / fft_size as f32;
    for (s, k) in sig_spec.iter_mut().zip(ker_spec.iter()) {
        *s = *s * *k * scale;
    }

    ifft.process(&mut sig_spec);

    sig_spec.truncate(conv_len);
    sig_spec.into_iter().map(|c| c.re).collect()
}
