// ABOUTME: Local approximation of sleep analysis used while the analysis backend is down
// ABOUTME: Derives stage percentages from raw stage durations with fixed policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fallback Sleep Estimator
//!
//! A crude stand-in for the authoritative analysis backend. Its only
//! job is to give callers a usable record when the backend cannot answer.
//!
//! - Total sleep is every stage that is not `AWAKE` (so `UNKNOWN` counts).
//! - REM and deep shares are their durations over total sleep.
//! - Light is the remainder, which goes negative when `rem + deep` exceeds the
//!   total. The value is reported as-is, not clamped.
//! - Efficiency, awake share, and score are the constants in
//!   [`sleep_core::constants::fallback`], not measurements.

use crate::constants::fallback;
use crate::models::{AnalysisResult, AnalysisSource, SleepStageType, StageInterval};

/// Stage totals accumulated in a single pass
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct StageTotals {
    asleep: f64,
    rem: f64,
    deep: f64,
}

impl StageTotals {
    fn from_stages(stages: &[StageInterval]) -> Self {
        stages.iter().fold(Self::default(), |mut totals, stage| {
            if stage.kind.is_asleep() {
                totals.asleep += stage.duration;
            }
            match stage.kind {
                SleepStageType::Rem => totals.rem += stage.duration,
                SleepStageType::Deep => totals.deep += stage.duration,
                SleepStageType::Awake | SleepStageType::Light | SleepStageType::Unknown => {}
            }
            totals
        })
    }
}

/// Fallback estimator for sleep-quality analysis
pub struct FallbackEstimator;

impl FallbackEstimator {
    /// Approximate an analysis from stage durations
    ///
    /// Total function: never fails, and an empty or all-awake input yields the
    /// zeroed record (efficiency and stage shares 0, awake share and score at
    /// their fixed values).
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn estimate(stages: &[StageInterval]) -> AnalysisResult {
        let totals = StageTotals::from_stages(stages);

        // Exact zero is the only total that cannot divide.
        if totals.asleep == 0.0 {
            return Self::zeroed();
        }

        let share = |duration: f64| duration / totals.asleep * 100.0;

        AnalysisResult {
            efficiency: fallback::EFFICIENCY,
            total_sleep_duration: totals.asleep,
            rem_percentage: share(totals.rem),
            deep_sleep_percentage: share(totals.deep),
            light_sleep_percentage: share(totals.asleep - totals.rem - totals.deep),
            awake_percentage: fallback::AWAKE_PERCENTAGE,
            sleep_score: fallback::SLEEP_SCORE,
            source: AnalysisSource::Fallback,
            note: Some(fallback::NOTE.to_owned()),
        }
    }

    fn zeroed() -> AnalysisResult {
        AnalysisResult {
            efficiency: 0.0,
            total_sleep_duration: 0.0,
            rem_percentage: 0.0,
            deep_sleep_percentage: 0.0,
            light_sleep_percentage: 0.0,
            awake_percentage: fallback::AWAKE_PERCENTAGE,
            sleep_score: fallback::SLEEP_SCORE,
            source: AnalysisSource::Fallback,
            note: Some(fallback::NOTE.to_owned()),
        }
    }
}
