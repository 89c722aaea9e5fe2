//! Key estimation from a chord sequence
//!
//! Aggregates the detected segments into a strength-weighted pitch-class
//! histogram to pick the tonic, and decides the mode by a simple majority of
//! major vs minor segments. This is a coarse heuristic, not a key-profile
//! correlation; it inherits whatever bias the chord matcher has.

use crate::analysis::result::{ChordQuality, ChordSegment, KeyEstimate, Scale};

/// Estimate the global key from an ordered chord sequence.
///
/// Every detected segment contributes its matching strength to the histogram
/// bucket of each of its chord tones; the heaviest bucket becomes the tonic
/// (lowest pitch class wins ties). Mode is `Major` when at least as many
/// segments matched a major template as a minor one.
///
/// Returns `None` when no segment carried a detected chord.
pub fn estimate_key(segments: &[ChordSegment]) -> Option<KeyEstimate> {
    let mut weights = [0.0f32; 12];
    let mut major_count = 0usize;
    let mut minor_count = 0usize;

    for segment in segments {
        let Some(chord) = &segment.chord else {
            continue;
        };

        for &offset in chord.quality.intervals() {
            weights[(chord.root as usize + offset) % 12] += segment.strength;
        }

        match chord.quality {
            ChordQuality::Major => major_count += 1,
            ChordQuality::Minor => minor_count += 1,
        }
    }

    let (tonic, top_weight) = weights
        .iter()
        .enumerate()
        .fold((0usize, 0.0f32), |(best_pc, best_w), (pc, &w)| {
            if w > best_w {
                (pc, w)
            } else {
                (best_pc, best_w)
            }
        });

    if top_weight <= 0.0 {
        return None;
    }

    let scale = if major_count >= minor_count {
        Scale::Major
    } else {
        Scale::Minor
    };

    log::debug!(
        "Key estimate: tonic pc {} ({} major / {} minor segments)",
        tonic,
        major_count,
        minor_count
    );

    Some(KeyEstimate {
        tonic: tonic as u32,
        scale,
    })
}
