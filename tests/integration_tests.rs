//! Integration tests for the analysis pipeline

use chordscan::{analyze_audio, AnalysisConfig, Scale};

const SAMPLE_RATE: u32 = 44100;

/// Mono buffer summing sines at the given frequencies, equal amplitude.
fn tone_mixture(frequencies: &[f32], seconds: f32) -> Vec<f32> {
    let count = (seconds * SAMPLE_RATE as f32) as usize;
    let gain = 1.0 / frequencies.len() as f32;
    (0..count)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            frequencies
                .iter()
                .map(|&f| (2.0 * std::f32::consts::PI * f * t).sin() * gain)
                .sum()
        })
        .collect()
}

/// Periodic short bursts over silence. Bursts are aligned to the onset
/// detector's 512-sample window grid so each one lands inside one window.
fn click_track(seconds: f32, interval_seconds: f32) -> Vec<f32> {
    let total = (seconds * SAMPLE_RATE as f32) as usize;
    let mut samples = vec![0.0f32; total];
    let mut k = 0;
    loop {
        let ideal = k as f32 * interval_seconds * SAMPLE_RATE as f32;
        let pos = ((ideal / 512.0).round() as usize) * 512;
        if pos + 200 > total {
            break;
        }
        for sample in &mut samples[pos..pos + 200] {
            *sample = 0.9;
        }
        k += 1;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_is_inconclusive_not_an_error() {
        let channels = vec![vec![0.0f32; SAMPLE_RATE as usize * 10]];
        let result = analyze_audio(&channels, SAMPLE_RATE, AnalysisConfig::default())
            .expect("Silence should analyze cleanly");

        assert_eq!(result.duration, 10.0);
        assert_eq!(result.analyzed_duration, 10.0);
        assert_eq!(result.chords.len(), 5);
        for segment in &result.chords {
            assert_eq!(segment.chord, None);
            assert_eq!(segment.chord_name(), "Unknown");
            assert_eq!(segment.strength, 0.0);
            assert!(segment.notes().is_empty());
        }
        assert_eq!(result.key, None);
        assert_eq!(result.bpm, None);
    }

    #[test]
    fn test_c_major_triad_is_detected() {
        // C4, E4, G4
        let mono = tone_mixture(&[261.63, 329.63, 392.0], 10.0);
        let result = analyze_audio(&[mono], SAMPLE_RATE, AnalysisConfig::default())
            .expect("Analysis should succeed");

        assert_eq!(result.chords.len(), 5);
        let detected = result
            .chords
            .iter()
            .find(|s| s.chord_name() == "C")
            .expect("At least one segment should detect C major");
        assert!(
            detected.strength >= 0.5,
            "C major strength should clear the acceptance threshold, got {}",
            detected.strength
        );
        let notes = detected.notes();
        for note in ["C", "E", "G"] {
            assert!(notes.contains(&note), "Missing chord tone {}", note);
        }

        let key = result.key.expect("A detected chord implies a key estimate");
        assert_eq!(key.tonic_name(), "C");
        assert_eq!(key.scale, Scale::Major);
    }

    #[test]
    fn test_a_minor_triad_is_detected() {
        // A3, C4, E4
        let mono = tone_mixture(&[220.0, 261.63, 329.63], 4.0);
        let result = analyze_audio(&[mono], SAMPLE_RATE, AnalysisConfig::default())
            .expect("Analysis should succeed");

        let detected = result
            .chords
            .iter()
            .find(|s| s.chord_name() == "Am")
            .expect("At least one segment should detect A minor");
        assert!(detected.strength >= 0.5);

        let key = result.key.expect("Key estimate expected");
        assert_eq!(key.scale, Scale::Minor);
    }

    #[test]
    fn test_analysis_window_truncates() {
        let mono = tone_mixture(&[261.63], 60.0);
        let config = AnalysisConfig {
            max_duration_seconds: 10.0,
            ..Default::default()
        };
        let result =
            analyze_audio(&[mono], SAMPLE_RATE, config).expect("Analysis should succeed");

        assert_eq!(result.duration, 60.0);
        assert_eq!(result.analyzed_duration, 10.0);
        assert_eq!(result.chords.len(), 5);
    }

    #[test]
    fn test_segment_count_follows_duration() {
        // 7 s -> 3 full segments, the 1 s remainder is discarded
        let channels = vec![vec![0.0f32; SAMPLE_RATE as usize * 7]];
        let result = analyze_audio(&channels, SAMPLE_RATE, AnalysisConfig::default()).unwrap();
        assert_eq!(result.chords.len(), 3);
        assert_eq!(result.chords[2].time, 4.0);
        assert_eq!(result.chords[2].duration, 2.0);

        // Shorter than one segment -> nothing to analyze
        let channels = vec![vec![0.0f32; SAMPLE_RATE as usize * 3 / 2]];
        let result = analyze_audio(&channels, SAMPLE_RATE, AnalysisConfig::default()).unwrap();
        assert!(result.chords.is_empty());
        assert_eq!(result.key, None);
    }

    #[test]
    fn test_click_track_tempo() {
        // Energy spikes every 0.5 s -> 120 BPM
        let mono = click_track(10.0, 0.5);
        let result = analyze_audio(&[mono], SAMPLE_RATE, AnalysisConfig::default()).unwrap();
        assert_eq!(result.bpm, Some(120));
    }

    #[test]
    fn test_bpm_is_always_in_band_or_none() {
        for interval in [0.1, 0.3, 0.5, 1.0, 3.0] {
            let mono = click_track(12.0, interval);
            let result = analyze_audio(&[mono], SAMPLE_RATE, AnalysisConfig::default()).unwrap();
            if let Some(bpm) = result.bpm {
                assert!((40..=200).contains(&bpm), "BPM {} out of band", bpm);
            }
        }
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let mono = tone_mixture(&[261.63, 329.63, 392.0], 6.0);
        let channels = vec![mono];
        let first = analyze_audio(&channels, SAMPLE_RATE, AnalysisConfig::default()).unwrap();
        let second = analyze_audio(&channels, SAMPLE_RATE, AnalysisConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_stereo_input_matches_identical_mono() {
        let mono = tone_mixture(&[261.63, 329.63, 392.0], 4.0);
        let stereo = vec![mono.clone(), mono.clone()];

        let mono_result =
            analyze_audio(&[mono], SAMPLE_RATE, AnalysisConfig::default()).unwrap();
        let stereo_result = analyze_audio(&stereo, SAMPLE_RATE, AnalysisConfig::default()).unwrap();

        assert_eq!(mono_result, stereo_result);
    }

    #[test]
    fn test_strided_dft_parity_mode_still_detects_triad() {
        use chordscan::features::spectrum::SpectrumMethod;

        let mono = tone_mixture(&[261.63, 329.63, 392.0], 4.0);
        let config = AnalysisConfig {
            spectrum_method: SpectrumMethod::strided_for(4096),
            ..Default::default()
        };
        let result = analyze_audio(&[mono], SAMPLE_RATE, config).unwrap();

        assert!(result
            .chords
            .iter()
            .any(|s| s.chord_name() == "C" && s.strength >= 0.5));
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(analyze_audio(&[], SAMPLE_RATE, AnalysisConfig::default()).is_err());

        let channels = vec![vec![0.0f32; 1000]];
        assert!(analyze_audio(&channels, 0, AnalysisConfig::default()).is_err());
    }
}
