//! Chromagram extraction
//!
//! Aggregates per-frame spectral energy into a 12-bin pitch-class profile
//! (0 = C ... 11 = B) for one audio segment. Frames overlap by 50%; only
//! spectral bins inside the configured frequency band contribute. The result
//! is max-normalized so the strongest bin is exactly 1.0, or stays all-zero
//! when the segment carries no in-band energy.

use crate::error::AnalysisError;
use crate::features::spectrum::SpectrumAnalyzer;

/// A 12-bin pitch-class energy profile
///
/// Bins are non-negative and max-normalized: unless the chromagram is
/// all-zero, every bin lies in [0, 1] and at least one bin is exactly 1.0.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromagram {
    bins: [f32; 12],
}

impl Chromagram {
    /// Build a chromagram from raw bins (normalizing is the caller's job).
    ///
    /// Mostly useful for feeding synthetic profiles into the chord matcher.
    pub fn from_bins(bins: [f32; 12]) -> Self {
        Self { bins }
    }

    /// The 12 pitch-class bins, index 0 = C ... 11 = B.
    pub fn bins(&self) -> &[f32; 12] {
        &self.bins
    }

    /// True when no energy was observed in the analyzed band.
    pub fn is_silent(&self) -> bool {
        self.bins.iter().all(|&b| b == 0.0)
    }
}

/// Extract the chromagram of one audio segment.
///
/// The segment is split into overlapping frames of the analyzer's frame size
/// (`num_frames = floor((len - frame_size) / hop_size)`, so a segment shorter
/// than one frame plus hop yields no frames and an all-zero chromagram). Each
/// frame's magnitude spectrum is folded into pitch classes for every bin whose
/// frequency lies inside `[min_frequency, max_frequency]`.
///
/// # Arguments
///
/// * `segment` - Mono samples of one segment
/// * `sample_rate` - Sample rate in Hz
/// * `analyzer` - Spectrum analyzer (determines the frame size)
/// * `hop_size` - Hop between frame starts in samples
/// * `min_frequency` - Lower edge of the analyzed band in Hz
/// * `max_frequency` - Upper edge of the analyzed band in Hz
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `hop_size` is zero.
pub fn extract_chromagram(
    segment: &[f32],
    sample_rate: u32,
    analyzer: &mut SpectrumAnalyzer,
    hop_size: usize,
    min_frequency: f32,
    max_frequency: f32,
) -> Result<Chromagram, AnalysisError> {
    if hop_size == 0 {
        return Err(AnalysisError::InvalidInput(
            "Hop size must be > 0".to_string(),
        ));
    }

    let frame_size = analyzer.frame_size();
    let num_frames = segment.len().saturating_sub(frame_size) / hop_size;

    let mut bins = [0.0f32; 12];

    for frame_index in 0..num_frames {
        let start = frame_index * hop_size;
        let spectrum = analyzer.magnitude_spectrum(&segment[start..start + frame_size])?;

        for (bin, &magnitude) in spectrum.iter().enumerate() {
            let frequency = bin as f32 * sample_rate as f32 / frame_size as f32;
            if frequency < min_frequency || frequency > max_frequency {
                continue;
            }
            bins[pitch_class(frequency)] += magnitude;
        }
    }

    let max = bins.iter().copied().fold(0.0f32, f32::max);
    if max > 0.0 {
        for bin in bins.iter_mut() {
            *bin /= max;
        }
    }

    Ok(Chromagram { bins })
}

/// Map a frequency to its pitch class (0 = C ... 11 = B).
///
/// Nearest MIDI note modulo 12: 440 Hz maps to A, 261.63 Hz to C.
fn pitch_class(frequency: f32) -> usize {
    let semitones_from_a4 = (12.0 * (frequency / 440.0).log2()).round() as i64;
    let midi = semitones_from_a4 + 69;
    midi.rem_euclid(12) as usize
}
