//! Analysis result types
//!
//! Chords and keys are represented as a root pitch class plus a quality enum;
//! display strings are produced only at the boundary (`name()`, `notes()`,
//! [`format_time`]). String-based chord comparison is deliberately avoided.

use serde::{Deserialize, Serialize};

/// The 12 pitch-class note names, index 0 = C ... 11 = B.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    /// Major triad (root, major third, perfect fifth)
    Major,
    /// Minor triad (root, minor third, perfect fifth)
    Minor,
}

impl ChordQuality {
    /// Semitone offsets of the chord tones from the root.
    pub fn intervals(&self) -> &'static [usize] {
        match self {
            ChordQuality::Major => &[0, 4, 7],
            ChordQuality::Minor => &[0, 3, 7],
        }
    }

    /// Display suffix appended to the root note name.
    pub fn suffix(&self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
        }
    }
}

/// A chord: root pitch class (0 = C ... 11 = B) plus quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chord {
    /// Root pitch class (0 = C ... 11 = B)
    pub root: u32,
    /// Chord quality
    pub quality: ChordQuality,
}

impl Chord {
    /// Chord name in musical notation (e.g. "C", "F#", "Am", "D#m")
    ///
    /// # Example
    ///
    /// ```
    /// use chordscan::analysis::result::{Chord, ChordQuality};
    ///
    /// assert_eq!(Chord { root: 0, quality: ChordQuality::Major }.name(), "C");
    /// assert_eq!(Chord { root: 9, quality: ChordQuality::Minor }.name(), "Am");
    /// ```
    pub fn name(&self) -> String {
        format!(
            "{}{}",
            NOTE_NAMES[self.root as usize % 12],
            self.quality.suffix()
        )
    }

    /// Note names of the chord tones, root first.
    ///
    /// # Example
    ///
    /// ```
    /// use chordscan::analysis::result::{Chord, ChordQuality};
    ///
    /// let c = Chord { root: 0, quality: ChordQuality::Major };
    /// assert_eq!(c.notes(), vec!["C", "E", "G"]);
    /// ```
    pub fn notes(&self) -> Vec<&'static str> {
        self.quality
            .intervals()
            .iter()
            .map(|&offset| NOTE_NAMES[(self.root as usize + offset) % 12])
            .collect()
    }
}

impl std::fmt::Display for Chord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One scored chord decision covering a fixed-length time span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordSegment {
    /// Segment start time in seconds
    pub time: f32,

    /// Segment length in seconds
    pub duration: f32,

    /// Detected chord, or `None` when no template scored above the
    /// acceptance threshold
    pub chord: Option<Chord>,

    /// Raw template-matching score; 0.0 for unknown segments
    pub strength: f32,
}

impl ChordSegment {
    /// Display name of the detected chord, `"Unknown"` when none was accepted.
    pub fn chord_name(&self) -> String {
        match &self.chord {
            Some(chord) => chord.name(),
            None => "Unknown".to_string(),
        }
    }

    /// Note names of the detected chord tones; empty for unknown segments.
    pub fn notes(&self) -> Vec<&'static str> {
        match &self.chord {
            Some(chord) => chord.notes(),
            None => Vec::new(),
        }
    }

    /// Chord tones joined for display (e.g. "C, E, G").
    pub fn notes_display(&self) -> String {
        self.notes().join(", ")
    }
}

/// Scale mode of an estimated key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// Major mode
    Major,
    /// Minor mode
    Minor,
}

/// Estimated global key: tonic pitch class plus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEstimate {
    /// Tonic pitch class (0 = C ... 11 = B)
    pub tonic: u32,
    /// Major or minor mode
    pub scale: Scale,
}

impl KeyEstimate {
    /// Tonic note name (e.g. "C", "F#").
    pub fn tonic_name(&self) -> &'static str {
        NOTE_NAMES[self.tonic as usize % 12]
    }
}

/// Complete result of one analysis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Total track duration in seconds
    pub duration: f32,

    /// Seconds actually analyzed: `min(duration, max_duration_seconds)`
    pub analyzed_duration: f32,

    /// One chord decision per 2-second segment, in time order
    pub chords: Vec<ChordSegment>,

    /// Estimated global key, `None` when no chord was detected
    pub key: Option<KeyEstimate>,

    /// Estimated tempo in beats per minute, `None` when onset timing was
    /// inconclusive or outside the accepted range
    pub bpm: Option<u32>,
}

/// Format a time offset as `mm:ss` with zero-padded seconds.
///
/// # Example
///
/// ```
/// use chordscan::analysis::result::format_time;
///
/// assert_eq!(format_time(0.0), "0:00");
/// assert_eq!(format_time(75.4), "1:15");
/// ```
pub fn format_time(seconds: f32) -> String {
    let mins = (seconds / 60.0).floor() as u32;
    let secs = (seconds % 60.0).floor() as u32;
    format!("{}:{:02}", mins, secs)
}
