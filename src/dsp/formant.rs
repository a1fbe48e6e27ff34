//! Spectral peak picking and F1/F2 formant selection.

use crate::defaults;
use crate::dsp::spectrum::bin_hz;

/// A local maximum in the magnitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralPeak {
    pub frequency: f64,
    pub amplitude: f64,
}

/// A resolved formant: the frequency of a selected peak and its amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Formant {
    pub frequency: f64,
    pub amplitude: f64,
}

/// First and second formant of a frame. Only emitted when both are present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormantPair {
    pub f1: Formant,
    pub f2: Formant,
}

/// Picks spectral peaks and selects F1/F2 candidates from them.
#[derive(Debug, Clone, Copy)]
pub struct FormantEstimator {
    /// Fraction of the spectrum maximum a local maximum must exceed.
    pub peak_floor: f64,
}

impl Default for FormantEstimator {
    fn default() -> Self {
        Self {
            peak_floor: defaults::PEAK_FLOOR,
        }
    }
}

impl FormantEstimator {
    pub fn new(peak_floor: f64) -> Self {
        Self { peak_floor }
    }

    /// Find admissible peaks, strongest first, at most [`defaults::MAX_PEAKS`].
    ///
    /// Index `i` is a peak when its magnitude strictly exceeds both immediate
    /// and second-nearest neighbors on each side and clears the relative
    /// amplitude floor. Peaks outside the admissible voice band are dropped.
    pub fn find_peaks(&self, spectrum: &[f64], sample_rate: u32) -> Vec<SpectralPeak> {
        if spectrum.len() < 5 {
            return Vec::new();
        }

        let max = spectrum.iter().cloned().fold(0.0_f64, f64::max);
        let threshold = max * self.peak_floor;
        let step = bin_hz(spectrum.len(), sample_rate);
        let (band_lo, band_hi) = defaults::VOICE_BAND_HZ;

        let mut peaks = Vec::new();
        for i in 2..spectrum.len() - 2 {
            let m = spectrum[i];
            if m > spectrum[i - 1]
                && m > spectrum[i + 1]
                && m > spectrum[i - 2]
                && m > spectrum[i + 2]
                && m > threshold
            {
                let frequency = i as f64 * step;
                if (band_lo..=band_hi).contains(&frequency) {
                    peaks.push(SpectralPeak {
                        frequency,
                        amplitude: m,
                    });
                }
            }
        }

        peaks.sort_by(|a, b| {
            b.amplitude
                .partial_cmp(&a.amplitude)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        peaks.truncate(defaults::MAX_PEAKS);
        peaks
    }

    /// Select F1 and F2 from the strongest peaks.
    ///
    /// F1 is the highest-amplitude candidate inside the F1 band, F2 the
    /// highest-amplitude candidate inside the F2 band. The selections are
    /// independent: the bands overlap between 800 and 1000 Hz and a single
    /// peak there may serve as both. Returns `None` unless both are found.
    pub fn estimate(&self, spectrum: &[f64], sample_rate: u32) -> Option<FormantPair> {
        let peaks = self.find_peaks(spectrum, sample_rate);
        if peaks.is_empty() {
            return None;
        }

        let (f1_lo, f1_hi) = defaults::F1_BAND_HZ;
        let (f2_lo, f2_hi) = defaults::F2_BAND_HZ;

        let mut f1: Option<Formant> = None;
        let mut f2: Option<Formant> = None;
        for peak in &peaks {
            if (f1_lo..=f1_hi).contains(&peak.frequency)
                && f1.is_none_or(|f| peak.amplitude > f.amplitude)
            {
                f1 = Some(Formant {
                    frequency: peak.frequency,
                    amplitude: peak.amplitude,
                });
            }
            if (f2_lo..=f2_hi).contains(&peak.frequency)
                && f2.is_none_or(|f| peak.amplitude > f.amplitude)
            {
                f2 = Some(Formant {
                    frequency: peak.frequency,
                    amplitude: peak.amplitude,
                });
            }
        }

        Some(FormantPair {
            f1: f1?,
            f2: f2?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a spectrum with isolated triangular bumps at the given bins.
    fn spectrum_with_bumps(len: usize, bumps: &[(usize, f64)]) -> Vec<f64> {
        let mut s = vec![0.0; len];
        for &(bin, amp) in bumps {
            s[bin] = amp;
            s[bin - 1] = amp * 0.6;
            s[bin + 1] = amp * 0.6;
            s[bin - 2] = amp * 0.3;
            s[bin + 2] = amp * 0.3;
        }
        s
    }

    // 512 bins at 16kHz gives 15.625 Hz per bin
    const SR: u32 = 16000;

    #[test]
    fn test_find_peaks_detects_isolated_bump() {
        let spectrum = spectrum_with_bumps(512, &[(50, 100.0)]); // 781.25 Hz
        let est = FormantEstimator::default();
        let peaks = est.find_peaks(&spectrum, SR);
        assert_eq!(peaks.len(), 1);
        assert!((peaks[0].frequency - 781.25).abs() < 1e-9);
        assert_eq!(peaks[0].amplitude, 100.0);
    }

    #[test]
    fn test_find_peaks_rejects_below_relative_floor() {
        // Second bump is 4% of the maximum, below the 5% floor
        let spectrum = spectrum_with_bumps(512, &[(50, 100.0), (120, 4.0)]);
        let est = FormantEstimator::default();
        let peaks = est.find_peaks(&spectrum, SR);
        assert_eq!(peaks.len(), 1);
    }

    #[test]
    fn test_find_peaks_rejects_outside_voice_band() {
        // Bin 5 is 78 Hz, bin 300 is 4687 Hz; both outside [150, 4000]
        let spectrum = spectrum_with_bumps(512, &[(5, 100.0), (300, 90.0), (60, 80.0)]);
        let est = FormantEstimator::default();
        let peaks = est.find_peaks(&spectrum, SR);
        assert_eq!(peaks.len(), 1);
        assert!((peaks[0].frequency - 937.5).abs() < 1e-9);
    }

    #[test]
    fn test_find_peaks_keeps_four_strongest() {
        let spectrum = spectrum_with_bumps(
            512,
            &[(20, 50.0), (50, 90.0), (80, 70.0), (110, 60.0), (140, 80.0)],
        );
        let est = FormantEstimator::default();
        let peaks = est.find_peaks(&spectrum, SR);
        assert_eq!(peaks.len(), 4);
        // Sorted by descending amplitude; the 50.0 bump is dropped
        assert_eq!(peaks[0].amplitude, 90.0);
        assert!(peaks.iter().all(|p| p.amplitude > 50.0));
    }

    #[test]
    fn test_find_peaks_empty_and_flat_spectra() {
        let est = FormantEstimator::default();
        assert!(est.find_peaks(&[], SR).is_empty());
        assert!(est.find_peaks(&vec![1.0; 512], SR).is_empty());
    }

    #[test]
    fn test_estimate_selects_f1_and_f2() {
        // Bin 50 = 781.25 Hz (F1 band), bin 77 = 1203.125 Hz (F2 band)
        let spectrum = spectrum_with_bumps(512, &[(50, 100.0), (77, 90.0)]);
        let est = FormantEstimator::default();
        let pair = est.estimate(&spectrum, SR).expect("both formants present");
        assert!((pair.f1.frequency - 781.25).abs() < 1e-9);
        assert!((pair.f2.frequency - 1203.125).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_requires_both_formants() {
        // Single peak in the F1 band only
        let spectrum = spectrum_with_bumps(512, &[(20, 100.0)]); // 312.5 Hz
        let est = FormantEstimator::default();
        assert!(est.estimate(&spectrum, SR).is_none());
    }

    #[test]
    fn test_overlap_peak_can_serve_as_both_formants() {
        // Bin 55 = 859.375 Hz lies in both the F1 and F2 bands
        let spectrum = spectrum_with_bumps(512, &[(55, 100.0)]);
        let est = FormantEstimator::default();
        let pair = est.estimate(&spectrum, SR).expect("overlap peak fills both");
        assert_eq!(pair.f1.frequency, pair.f2.frequency);
    }

    #[test]
    fn test_estimate_prefers_strongest_in_band() {
        // Two F1-band peaks; the stronger one wins regardless of frequency order
        let spectrum = spectrum_with_bumps(512, &[(20, 60.0), (40, 100.0), (100, 80.0)]);
        let est = FormantEstimator::default();
        let pair = est.estimate(&spectrum, SR).expect("formants present");
        assert!((pair.f1.frequency - 625.0).abs() < 1e-9);
    }
}
