//! Audio decoding using Symphonia
//!
//! Decodes an encoded audio file into per-channel f32 PCM. Channels are kept
//! separate here; downmixing is the analysis pipeline's job.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AnalysisError;

/// Decoded PCM audio: per-channel samples plus the native sample rate
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// One sample vector per channel, equal lengths
    pub channels: Vec<Vec<f32>>,
    /// Native sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Track duration in seconds.
    pub fn duration_seconds(&self) -> f32 {
        match self.channels.first() {
            Some(channel) => channel.len() as f32 / self.sample_rate as f32,
            None => 0.0,
        }
    }
}

/// Decode an audio file to per-channel PCM samples.
///
/// Probes the container, picks the first decodable track, and decodes packet
/// by packet. Corrupted packets are skipped with a warning; anything else
/// aborts the decode.
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` when the file cannot be opened,
/// probed, or decoded, or when the stream yields no audio at all.
pub fn decode_audio(path: &Path) -> Result<DecodedAudio, AnalysisError> {
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path).map_err(|e| {
        AnalysisError::DecodingError(format!("Failed to open {}: {}", path.display(), e))
    })?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AnalysisError::DecodingError(format!("Unrecognized format: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            AnalysisError::DecodingError("No supported audio track found".to_string())
        })?;
    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AnalysisError::DecodingError(format!("Unsupported codec: {}", e)))?;

    let mut channels: Vec<Vec<f32>> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            // End of stream (or unrecoverable container error) ends the decode.
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                if sample_buf.is_none() {
                    let spec = *decoded.spec();
                    channels = vec![Vec::new(); spec.channels.count()];
                    sample_buf = Some(SampleBuffer::new(decoded.capacity() as u64, spec));
                }

                if let Some(buf) = sample_buf.as_mut() {
                    buf.copy_interleaved_ref(decoded);
                    let num_channels = channels.len();
                    for frame in buf.samples().chunks_exact(num_channels) {
                        for (channel, &sample) in channels.iter_mut().zip(frame) {
                            channel.push(sample);
                        }
                    }
                }
            }
            Err(SymphoniaError::DecodeError(err)) => {
                // Corrupted packet; skip it and keep going.
                log::warn!("Skipping undecodable packet: {}", err);
                continue;
            }
            Err(e) => {
                return Err(AnalysisError::DecodingError(e.to_string()));
            }
        }
    }

    if channels.is_empty() || channels[0].is_empty() {
        return Err(AnalysisError::DecodingError(
            "Stream contained no decodable audio".to_string(),
        ));
    }

    log::debug!(
        "Decoded {} channel(s), {} samples at {} Hz",
        channels.len(),
        channels[0].len(),
        sample_rate
    );

    Ok(DecodedAudio {
        channels,
        sample_rate,
    })
}
