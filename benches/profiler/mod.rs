// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Corrlens-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Corrlens and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Criterion settings shared by the benches. Flamegraphs are written only when a run passes
// `--profile-time`; they land under `target/criterion/<group>/<case>/profile/`.

use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Workload shape of a bench target; heavier targets get fewer, longer samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    /// Pairwise kernels over whole datasets (`stats.correlate`).
    Kernel,
    /// Matrix transforms over an already correlated matrix (`ops`).
    Transform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    sample_size: usize,
    warm_up: Duration,
    measurement: Duration,
    sampling_hz: i32,
}

impl Workload {
    const fn defaults(self) -> Settings {
        match self {
            Self::Kernel => Settings {
                sample_size: 20,
                warm_up: Duration::from_secs(2),
                measurement: Duration::from_secs(8),
                sampling_hz: 199,
            },
            Self::Transform => Settings {
                sample_size: 50,
                warm_up: Duration::from_secs(1),
                measurement: Duration::from_secs(4),
                sampling_hz: 997,
            },
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

/// Settings for `workload`, overridable through `CORRLENS_BENCH_SAMPLES`,
/// `CORRLENS_BENCH_WARMUP_MS`, `CORRLENS_BENCH_MEASURE_MS` and `CORRLENS_PROFILE_HZ`.
fn settings(workload: Workload) -> Settings {
    let defaults = workload.defaults();
    Settings {
        sample_size: env_parse("CORRLENS_BENCH_SAMPLES")
            .map_or(defaults.sample_size, |n: usize| n.clamp(10, 500)),
        warm_up: env_parse("CORRLENS_BENCH_WARMUP_MS")
            .map_or(defaults.warm_up, |ms: u64| Duration::from_millis(ms.clamp(100, 60_000))),
        measurement: env_parse("CORRLENS_BENCH_MEASURE_MS")
            .map_or(defaults.measurement, |ms: u64| Duration::from_millis(ms.clamp(500, 300_000))),
        sampling_hz: env_parse("CORRLENS_PROFILE_HZ")
            .map_or(defaults.sampling_hz, |hz: i32| hz.clamp(1, 4_000)),
    }
}

pub fn criterion(workload: Workload) -> Criterion {
    let settings = settings(workload);
    Criterion::default()
        .sample_size(settings.sample_size)
        .warm_up_time(settings.warm_up)
        .measurement_time(settings.measurement)
        .with_profiler(PProfProfiler::new(settings.sampling_hz, Output::Flamegraph(None)))
}
