//! Configuration parameters for audio analysis

use crate::features::spectrum::SpectrumMethod;

/// Analysis configuration parameters
///
/// The thresholds below (chord acceptance, onset energy ratio and floor) are
/// calibration knobs, not tuned optima.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Analysis window
    /// Maximum number of seconds to analyze from the start of the track (default: 30.0)
    pub max_duration_seconds: f32,

    /// Chord segment length in seconds (default: 2.0)
    pub segment_seconds: f32,

    // Spectral analysis
    /// Frame size for spectral analysis (default: 4096)
    pub frame_size: usize,

    /// Hop size between frames, 50% overlap by default (default: 2048)
    pub hop_size: usize,

    /// Spectrum computation method (default: full FFT)
    ///
    /// `SpectrumMethod::StridedDft` selects the legacy reduced-resolution
    /// transform for regression parity; see [`SpectrumMethod`].
    pub spectrum_method: SpectrumMethod,

    // Chromagram
    /// Lowest frequency mapped into the chromagram, in Hz (default: 80.0)
    pub min_frequency: f32,

    /// Highest frequency mapped into the chromagram, in Hz (default: 2000.0)
    ///
    /// Chord-bearing energy is assumed to sit below this.
    pub max_frequency: f32,

    // Chord matching
    /// Minimum template score to accept a chord; below this the segment is
    /// reported as unknown (default: 0.5)
    pub chord_threshold: f32,

    // Tempo estimation
    /// Window size in samples for onset energy tracking (default: 512)
    pub onset_hop_size: usize,

    /// An onset fires when window energy exceeds this multiple of the
    /// previous window's energy (default: 1.5)
    pub onset_energy_ratio: f32,

    /// Absolute energy floor below which no onset fires (default: 0.01)
    pub onset_energy_floor: f32,

    /// Minimum accepted BPM (default: 40.0)
    pub min_bpm: f32,

    /// Maximum accepted BPM (default: 200.0)
    pub max_bpm: f32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_duration_seconds: 30.0,
            segment_seconds: 2.0,
            frame_size: 4096,
            hop_size: 2048,
            spectrum_method: SpectrumMethod::Fft,
            min_frequency: 80.0,
            max_frequency: 2000.0,
            chord_threshold: 0.5,
            onset_hop_size: 512,
            onset_energy_ratio: 1.5,
            onset_energy_floor: 0.01,
            min_bpm: 40.0,
            max_bpm: 200.0,
        }
    }
}

impl AnalysisConfig {
    /// Validate the configuration, returning a description of the first
    /// problem found.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.segment_seconds <= 0.0 {
            return Err("segment_seconds must be > 0".to_string());
        }
        if self.frame_size == 0 {
            return Err("frame_size must be > 0".to_string());
        }
        if self.hop_size == 0 {
            return Err("hop_size must be > 0".to_string());
        }
        if self.onset_hop_size == 0 {
            return Err("onset_hop_size must be > 0".to_string());
        }
        if self.min_frequency < 0.0 || self.max_frequency <= self.min_frequency {
            return Err("frequency band must satisfy 0 <= min < max".to_string());
        }
        Ok(())
    }
}
