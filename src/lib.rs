//! # Chordscan
//!
//! A heuristic chord, key, and tempo estimator for recorded audio, intended
//! as an offline, best-effort analysis pass over a bounded prefix of a track.
//!
//! ## Features
//!
//! - **Chord estimation**: chromagram extraction + rotated template matching
//!   per 2-second segment
//! - **Key estimation**: strength-weighted pitch-class histogram over the
//!   chord sequence
//! - **Tempo estimation**: energy-onset timing over the analysis window
//!
//! ## Quick Start
//!
//! ```
//! use chordscan::{analyze_audio, AnalysisConfig};
//!
//! // Decoded PCM samples, one Vec<f32> per channel
//! let channels = vec![vec![0.0f32; 44100 * 4]];
//! let result = analyze_audio(&channels, 44100, AnalysisConfig::default())?;
//!
//! for segment in &result.chords {
//!     println!("{:>6.2}s  {}", segment.time, segment.chord_name());
//! }
//! println!("Key: {:?}, BPM: {:?}", result.key, result.bpm);
//! # Ok::<(), chordscan::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The pipeline is a strictly forward data flow:
//!
//! ```text
//! Channels -> Mono window -> Chromagram per segment -> Chord per segment -> Key
//!                        \-> Energy onsets -> BPM
//! ```
//!
//! Analysis is a pure function of its inputs: no global state, no
//! randomness, and identical inputs produce identical results. Concurrent
//! calls on separate inputs are safe.
//!
//! This is not a transcription system: the template set covers plain major
//! and minor triads, and accuracy depends entirely on the spectral energy
//! distribution of the input. Inconclusive segments are reported as unknown
//! rather than guessed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod preprocessing;

use std::path::Path;

use features::spectrum::SpectrumAnalyzer;

// Re-export main types
pub use analysis::result::{
    AnalysisResult, Chord, ChordQuality, ChordSegment, KeyEstimate, Scale,
};
pub use config::AnalysisConfig;
pub use error::AnalysisError;

/// Main analysis function
///
/// Analyzes the leading `config.max_duration_seconds` of the given audio and
/// returns the chord sequence, key estimate, and tempo estimate.
///
/// # Arguments
///
/// * `channels` - Decoded PCM samples, one `Vec<f32>` per channel. Channels
///   beyond the first two are ignored for downmixing.
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000), trusted
///   as given
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// An [`AnalysisResult`] with one [`ChordSegment`] per full segment inside
/// the analysis window (`chords.len() == floor(analyzed_duration /
/// segment_seconds)`). Degenerate input (empty or silent audio) is a normal
/// outcome: segments come back unknown and `key`/`bpm` come back `None`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty channel list, a zero
/// sample rate, or a degenerate configuration. No partial result is returned
/// on failure.
pub fn analyze_audio(
    channels: &[Vec<f32>],
    sample_rate: u32,
    config: AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    if channels.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "No audio channels provided".to_string(),
        ));
    }
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate".to_string(),
        ));
    }
    config.validate().map_err(AnalysisError::InvalidInput)?;

    let duration = channels[0].len() as f32 / sample_rate as f32;
    log::debug!(
        "Starting analysis: {} channel(s), {:.2}s at {} Hz, window {:.1}s",
        channels.len(),
        duration,
        sample_rate,
        config.max_duration_seconds
    );

    let mono = preprocessing::channel_mixer::downmix_mono(
        channels,
        sample_rate,
        config.max_duration_seconds,
    )?;
    let analyzed_duration = duration.min(config.max_duration_seconds);

    let segment_samples = (config.segment_seconds as f64 * sample_rate as f64).floor() as usize;
    if segment_samples == 0 {
        return Err(AnalysisError::InvalidInput(
            "Segment length is shorter than one sample".to_string(),
        ));
    }

    // Remainder samples shorter than one segment are discarded, not analyzed.
    let num_segments = mono.len() / segment_samples;
    log::debug!("Analyzing {} segment(s)", num_segments);

    let mut analyzer = SpectrumAnalyzer::new(config.frame_size, config.spectrum_method);
    let mut chords = Vec::with_capacity(num_segments);

    for i in 0..num_segments {
        let start = i * segment_samples;
        let segment = &mono[start..start + segment_samples];

        let chromagram = features::chroma::extract_chromagram(
            segment,
            sample_rate,
            &mut analyzer,
            config.hop_size,
            config.min_frequency,
            config.max_frequency,
        )?;

        let (chord, strength) =
            match features::chords::match_chord(&chromagram, config.chord_threshold) {
                Some(matched) => (Some(matched.chord), matched.score),
                None => (None, 0.0),
            };

        chords.push(ChordSegment {
            time: start as f32 / sample_rate as f32,
            duration: config.segment_seconds,
            chord,
            strength,
        });
    }

    let key = features::key::estimate_key(&chords);
    let bpm = features::tempo::estimate_bpm(
        &mono,
        sample_rate,
        config.onset_hop_size,
        config.onset_energy_ratio,
        config.onset_energy_floor,
        config.min_bpm,
        config.max_bpm,
    );

    log::debug!(
        "Analysis done: {} chord segment(s), key {:?}, bpm {:?}",
        chords.len(),
        key,
        bpm
    );

    Ok(AnalysisResult {
        duration,
        analyzed_duration,
        chords,
        key,
        bpm,
    })
}

/// Decode an audio file and analyze it.
///
/// Convenience wrapper chaining [`io::decoder::decode_audio`] and
/// [`analyze_audio`]. A decode failure aborts the call; no partial result is
/// produced.
///
/// # Example
///
/// ```no_run
/// use chordscan::{analyze_file, AnalysisConfig};
///
/// let result = analyze_file("track.mp3", AnalysisConfig::default())?;
/// println!("Key: {:?}, BPM: {:?}", result.key, result.bpm);
/// # Ok::<(), chordscan::AnalysisError>(())
/// ```
pub fn analyze_file(
    path: impl AsRef<Path>,
    config: AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let decoded = io::decoder::decode_audio(path.as_ref())?;
    analyze_audio(&decoded.channels, decoded.sample_rate, config)
}
