//! Spectral transform of a windowed frame.
//!
//! The transform runs once per captured frame on ~1k samples, so a freshly
//! planned forward FFT per call is plenty fast.

use rustfft::{FftPlanner, num_complex::Complex};

/// Compute the magnitude spectrum of a real-valued windowed signal.
///
/// Output length is `signal.len() / 2`: for a real input the upper half of the
/// transform mirrors the lower half and carries no extra information. Bin `i`
/// corresponds to `i * sample_rate / (2 * output.len())` Hz.
pub fn magnitude_spectrum(signal: &[f64]) -> Vec<f64> {
    let n = signal.len();
    if n < 2 {
        return Vec::new();
    }

    let mut buffer: Vec<Complex<f64>> = signal.iter().map(|&s| Complex::new(s, 0.0)).collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    buffer[..n / 2].iter().map(|c| c.norm()).collect()
}

/// Width of one spectrum bin in Hz.
pub fn bin_hz(spectrum_len: usize, sample_rate: u32) -> f64 {
    sample_rate as f64 / (2.0 * spectrum_len as f64)
}
