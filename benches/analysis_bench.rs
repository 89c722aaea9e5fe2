//! Performance benchmarks for the analysis pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chordscan::features::spectrum::SpectrumMethod;
use chordscan::{analyze_audio, AnalysisConfig};

/// 30 seconds of a C major triad at 44.1 kHz.
fn triad_signal() -> Vec<Vec<f32>> {
    let samples = (0..44100 * 30)
        .map(|i| {
            let t = i as f32 / 44100.0;
            [261.63f32, 329.63, 392.0]
                .iter()
                .map(|&f| (2.0 * std::f32::consts::PI * f * t).sin() / 3.0)
                .sum()
        })
        .collect();
    vec![samples]
}

fn bench_analyze_audio(c: &mut Criterion) {
    let channels = triad_signal();

    c.bench_function("analyze_audio_30s_fft", |b| {
        b.iter(|| {
            let _ = analyze_audio(
                black_box(&channels),
                black_box(44100),
                AnalysisConfig::default(),
            );
        });
    });

    c.bench_function("analyze_audio_30s_strided_dft", |b| {
        let config = AnalysisConfig {
            spectrum_method: SpectrumMethod::strided_for(4096),
            ..Default::default()
        };
        b.iter(|| {
            let _ = analyze_audio(black_box(&channels), black_box(44100), config.clone());
        });
    });
}

criterion_group!(benches, bench_analyze_audio);
criterion_main!(benches);
