// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Meridio-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Meridio and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Reads `MERIDIO_BENCH_<name>`, clamped to `[min, max]`.
fn knob<T: FromStr + Ord>(name: &str, default: T, min: T, max: T) -> T {
    std::env::var(format!("MERIDIO_BENCH_{name}"))
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion with a flamegraph profiler attached (`cargo bench -- --profile-time <secs>`).
pub fn criterion() -> Criterion {
    Criterion::default()
        .sample_size(knob("SAMPLES", 50usize, 10, 200))
        .warm_up_time(Duration::from_secs(knob("WARMUP_SECS", 2u64, 1, 60)))
        .measurement_time(Duration::from_secs(knob("MEASURE_SECS", 4u64, 1, 120)))
        .with_profiler(PProfProfiler::new(knob("PROFILE_HZ", 100i32, 1, 1000), Output::Flamegraph(None)))
}
