//! Spectral frame analysis
//!
//! Computes a real-valued magnitude spectrum for a fixed-size, Hamming-windowed
//! audio frame. Two methods are available:
//!
//! - [`SpectrumMethod::Fft`] (default): a full forward FFT via `rustfft`.
//! - [`SpectrumMethod::StridedDft`]: a partial discrete transform that samples
//!   the time axis at a stride and computes only the lowest bins. This is the
//!   legacy reduced-resolution transform the chord thresholds were calibrated
//!   against; it exists for regression parity, not accuracy.
//!
//! Either way the bin-to-frequency mapping is `frequency = bin * sample_rate /
//! frame_size`, and downstream consumers max-normalize, so the methods are
//! interchangeable contract-wise.

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

use crate::error::AnalysisError;

/// Bin cap for the strided DFT; bins at or above this index stay zero.
const MAX_STRIDED_BINS: usize = 2000;

/// Spectrum computation method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumMethod {
    /// Full forward FFT (accurate, default)
    Fft,
    /// Partial strided DFT matching the legacy heuristic
    StridedDft {
        /// Time-axis stride; every `stride`-th sample is correlated against
        /// the bin sinusoid. Values below 1 are treated as 1.
        stride: usize,
    },
}

impl SpectrumMethod {
    /// The strided DFT with its default stride for a given frame size:
    /// `max(1, frame_size / 1024)`.
    pub fn strided_for(frame_size: usize) -> Self {
        SpectrumMethod::StridedDft {
            stride: (frame_size / 1024).max(1),
        }
    }
}

/// Reusable magnitude-spectrum analyzer for frames of a fixed size
///
/// Holds the planned FFT, the precomputed Hamming window, and scratch buffers
/// so the per-frame cost is computation only. One analyzer serves one analysis
/// call; it carries no cross-call state.
pub struct SpectrumAnalyzer {
    frame_size: usize,
    method: SpectrumMethod,
    window: Vec<f32>,
    fft: Arc<dyn Fft<f32>>,
    fft_buffer: Vec<Complex<f32>>,
    windowed: Vec<f32>,
}

impl SpectrumAnalyzer {
    /// Create an analyzer for frames of `frame_size` samples.
    pub fn new(frame_size: usize, method: SpectrumMethod) -> Self {
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(frame_size);

        // Hamming window: 0.54 - 0.46 * cos(2*pi*i / (N-1))
        let denom = (frame_size.saturating_sub(1)).max(1) as f32;
        let window = (0..frame_size)
            .map(|i| 0.54 - 0.46 * (2.0 * std::f32::consts::PI * i as f32 / denom).cos())
            .collect();

        Self {
            frame_size,
            method,
            window,
            fft,
            fft_buffer: vec![Complex::new(0.0, 0.0); frame_size],
            windowed: vec![0.0; frame_size],
        }
    }

    /// Frame size this analyzer was planned for.
    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Compute the magnitude spectrum of one frame.
    ///
    /// Returns `frame_size / 2` magnitudes. With the strided method only the
    /// first `min(frame_size / 2, 2000)` bins are computed; the rest are zero.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidInput` if the frame length does not
    /// match the planned frame size.
    pub fn magnitude_spectrum(&mut self, frame: &[f32]) -> Result<Vec<f32>, AnalysisError> {
        if frame.len() != self.frame_size {
            return Err(AnalysisError::InvalidInput(format!(
                "Expected frame of {} samples, got {}",
                self.frame_size,
                frame.len()
            )));
        }

        for ((windowed, &sample), &weight) in self
            .windowed
            .iter_mut()
            .zip(frame.iter())
            .zip(self.window.iter())
        {
            *windowed = sample * weight;
        }

        match self.method {
            SpectrumMethod::Fft => Ok(self.fft_magnitudes()),
            SpectrumMethod::StridedDft { stride } => Ok(self.strided_magnitudes(stride.max(1))),
        }
    }

    fn fft_magnitudes(&mut self) -> Vec<f32> {
        for (slot, &sample) in self.fft_buffer.iter_mut().zip(self.windowed.iter()) {
            *slot = Complex::new(sample, 0.0);
        }
        self.fft.process(&mut self.fft_buffer);

        self.fft_buffer[..self.frame_size / 2]
            .iter()
            .map(|c| c.norm())
            .collect()
    }

    fn strided_magnitudes(&self, stride: usize) -> Vec<f32> {
        let n = self.frame_size;
        let mut spectrum = vec![0.0f32; n / 2];
        let max_bin = (n / 2).min(MAX_STRIDED_BINS);

        for (k, magnitude) in spectrum.iter_mut().enumerate().take(max_bin) {
            let mut real = 0.0f32;
            let mut imag = 0.0f32;

            let mut i = 0;
            while i < n {
                let angle = 2.0 * std::f32::consts::PI * (k as f32) * (i as f32) / n as f32;
                real += self.windowed[i] * angle.cos();
                imag -= self.windowed[i] * angle.sin();
                i += stride;
            }

            *magnitude = (real * real + imag * imag).sqrt();
        }

        spectrum
    }
}
