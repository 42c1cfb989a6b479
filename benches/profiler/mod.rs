// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of glyphgrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Reads `name` from the environment, falling back to `default` when unset or unparsable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(default)
}

/// Criterion tuned through the environment; `--profile-time` runs write flamegraphs.
///
/// - `PROFILE_FREQ`: sampling frequency in Hz.
/// - `BENCH_SAMPLE_SIZE`, `BENCH_WARMUP_SECS`, `BENCH_MEASUREMENT_SECS`: run length.
/// - `BENCH_NOISE_THRESHOLD`: relative change treated as noise when comparing runs.
pub fn criterion() -> Criterion {
    let frequency: i32 = env_or("PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size: usize = env_or("BENCH_SAMPLE_SIZE", 50).clamp(10, 200);
    let warmup_secs: u64 = env_or("BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement_secs: u64 = env_or("BENCH_MEASUREMENT_SECS", 4).clamp(1, 120);
    let noise_threshold: f64 = env_or("BENCH_NOISE_THRESHOLD", 0.02_f64).clamp(0.0, 1.0);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
        .noise_threshold(noise_threshold)
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
