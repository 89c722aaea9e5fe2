//! Feature extraction modules
//!
//! This module contains the analysis algorithms:
//! - Spectral frame analysis (magnitude spectra)
//! - Chromagram extraction
//! - Chord template matching
//! - Key estimation
//! - Tempo estimation

pub mod chroma;
pub mod chords;
pub mod key;
pub mod spectrum;
pub mod tempo;
