//! Channel mixing utilities (multi-channel to mono conversion)

use crate::error::AnalysisError;

/// Collapse decoded per-channel PCM into a single mono buffer bounded to the
/// analysis window.
///
/// The output length is `min(floor(max_duration_seconds * sample_rate),
/// channel length)`. A single channel is truncated as-is; for two or more
/// channels each output sample is the arithmetic mean of the first two
/// channels (further channels are ignored). No resampling happens here.
///
/// # Arguments
///
/// * `channels` - Decoded samples, one `Vec<f32>` per channel
/// * `sample_rate` - Sample rate in Hz
/// * `max_duration_seconds` - Upper bound on the analyzed window
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if no channels are given or the
/// first two channels disagree in length.
pub fn downmix_mono(
    channels: &[Vec<f32>],
    sample_rate: u32,
    max_duration_seconds: f32,
) -> Result<Vec<f32>, AnalysisError> {
    if channels.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "No audio channels provided".to_string(),
        ));
    }

    let total_samples = channels[0].len();
    let window_samples = (max_duration_seconds as f64 * sample_rate as f64).floor() as usize;
    let max_samples = window_samples.min(total_samples);

    log::debug!(
        "Downmixing {} channel(s): {} of {} samples in analysis window",
        channels.len(),
        max_samples,
        total_samples
    );

    if channels.len() == 1 {
        return Ok(channels[0][..max_samples].to_vec());
    }

    if channels[1].len() != total_samples {
        return Err(AnalysisError::InvalidInput(format!(
            "Channel length mismatch: {} vs {}",
            total_samples,
            channels[1].len()
        )));
    }

    let left = &channels[0];
    let right = &channels[1];
    let mono = (0..max_samples)
        .map(|i| (left[i] + right[i]) / 2.0)
        .collect();

    Ok(mono)
}
