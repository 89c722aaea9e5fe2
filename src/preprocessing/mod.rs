//! Audio preprocessing modules
//!
//! Utilities for preparing decoded audio for analysis:
//! - Channel mixing (multi-channel to mono, bounded to the analysis window)

pub mod channel_mixer;
