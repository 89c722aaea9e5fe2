//! Chord template matching
//!
//! Scores a chromagram against rotated chord templates and picks the best
//! (root, quality) pair. The template table is closed over two triad
//! qualities; adding sevenths or diminished chords is a matter of adding
//! table rows, the matching loop is quality-agnostic.

use crate::analysis::result::{Chord, ChordQuality};
use crate::features::chroma::Chromagram;

/// A chord quality expressed as expected pitch-class energy offsets
#[derive(Debug, Clone, Copy)]
pub struct ChordTemplate {
    /// Chord quality this template detects
    pub quality: ChordQuality,
}

impl ChordTemplate {
    /// Semitone offsets of the expected chord tones from the root.
    pub fn intervals(&self) -> &'static [usize] {
        self.quality.intervals()
    }

    /// The template as a 12-element binary pattern (1.0 at chord tones).
    pub fn pattern(&self) -> [f32; 12] {
        let mut pattern = [0.0f32; 12];
        for &offset in self.intervals() {
            pattern[offset % 12] = 1.0;
        }
        pattern
    }
}

/// Chord templates in matching order; earlier rows win score ties.
pub const CHORD_TEMPLATES: &[ChordTemplate] = &[
    ChordTemplate {
        quality: ChordQuality::Major,
    },
    ChordTemplate {
        quality: ChordQuality::Minor,
    },
];

/// A winning template match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChordMatch {
    /// The winning (root, quality) pair
    pub chord: Chord,
    /// Raw template score: sum of chromagram energy at the chord tones
    pub score: f32,
}

/// Match a chromagram against all 24 rotated templates.
///
/// For each root 0..12 and each template the pattern is rotated by the root
/// and scored as `sum(chromagram[(i + root) % 12] * pattern[i])`. The single
/// highest score wins; ties keep the first candidate seen, so lower roots and
/// earlier template rows (major before minor) are preferred. Returns `None`
/// when the best score falls below `threshold`.
pub fn match_chord(chromagram: &Chromagram, threshold: f32) -> Option<ChordMatch> {
    let patterns: Vec<[f32; 12]> = CHORD_TEMPLATES.iter().map(|t| t.pattern()).collect();
    let bins = chromagram.bins();

    let mut best: Option<ChordMatch> = None;
    let mut best_score = 0.0f32;

    for root in 0..12u32 {
        for (template, pattern) in CHORD_TEMPLATES.iter().zip(patterns.iter()) {
            let mut score = 0.0f32;
            for (i, &weight) in pattern.iter().enumerate() {
                score += bins[(i + root as usize) % 12] * weight;
            }

            if score > best_score {
                best_score = score;
                best = Some(ChordMatch {
                    chord: Chord {
                        root,
                        quality: template.quality,
                    },
                    score,
                });
            }
        }
    }

    match best {
        Some(matched) if matched.score >= threshold => {
            log::trace!(
                "Best template match: {} (score {:.3})",
                matched.chord.name(),
                matched.score
            );
            Some(matched)
        }
        _ => None,
    }
}
