//! Wall-clock timing for client calls and pipeline stages

use std::time::{Duration, Instant};

/// Measures one client call; `ApiResponse` carries the result in seconds.
#[derive(Clone, Copy, Debug)]
pub struct Timer(Instant);

impl Timer {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.0.elapsed().as_secs_f64()
    }
}

/// Splits a pipeline run into named stages.
#[derive(Debug)]
pub struct Stopwatch {
    started: Instant,
    last: Instant,
    stages: Vec<(&'static str, Duration)>,
}

impl Stopwatch {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: now,
            stages: Vec::new(),
        }
    }

    /// Close the current stage under `stage`
    pub fn lap(&mut self, stage: &'static str) {
        let now = Instant::now();
        self.stages.push((stage, now - self.last));
        self.last = now;
    }

    /// `execute=12ms analyze=0ms total=15ms`
    pub fn format(&self) -> String {
        self.stages
            .iter()
            .map(|(stage, took)| format!("{stage}={}ms", took.as_millis()))
            .chain(std::iter::once(format!(
                "total={}ms",
                self.started.elapsed().as_millis()
            )))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
