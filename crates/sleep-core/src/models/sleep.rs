// ABOUTME: Sleep data models for stage intervals, inbound payloads, and analysis results
// ABOUTME: Wire shapes exchanged with callers and the remote analysis backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Types of sleep stages reported by wearables
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SleepStageType {
    /// Awake stage - user is conscious and alert
    Awake,
    /// REM (Rapid Eye Movement) sleep stage
    Rem,
    /// Deep sleep stage - restorative, hard to wake from
    Deep,
    /// Light sleep stage - easy to wake from
    Light,
    /// Any label the gateway does not recognise
    #[default]
    #[serde(other)]
    Unknown,
}

impl SleepStageType {
    /// Whether time in this stage counts as sleep
    #[must_use]
    pub const fn is_asleep(self) -> bool {
        !matches!(self, Self::Awake)
    }
}

/// A labelled span of sleep time
///
/// `duration` is in whatever unit the caller uses; the gateway only ever
/// computes ratios of durations, so the unit never matters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageInterval {
    /// Stage label, `type` on the wire
    #[serde(rename = "type", default)]
    pub kind: SleepStageType,
    /// Time spent in the stage; missing or `null` reads as zero
    #[serde(default, deserialize_with = "null_as_zero")]
    pub duration: f64,
}

impl StageInterval {
    /// Create a stage interval
    #[must_use]
    pub const fn new(kind: SleepStageType, duration: f64) -> Self {
        Self { kind, duration }
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Sleep-tracking payload posted by callers
///
/// Only `stages` is interpreted, and only when the backend is unavailable.
/// Everything else travels to the backend untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepPayload {
    /// Ordered stage intervals; absent or `null` means none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<StageInterval>>,
    /// Session metadata, any JSON shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Value>,
    /// Session start, any JSON shape (ISO string, epoch number, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Value>,
    /// Session end, any JSON shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Value>,
}

impl SleepPayload {
    /// Stage intervals, empty when the payload carried none
    #[must_use]
    pub fn stages(&self) -> &[StageInterval] {
        self.stages.as_deref().unwrap_or_default()
    }
}

/// Where an analysis result came from
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnalysisSource {
    /// Authoritative result from the analysis backend
    Remote,
    /// Local approximation computed while the backend was unavailable
    Fallback,
}

impl fmt::Display for AnalysisSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote => f.write_str("REMOTE"),
            Self::Fallback => f.write_str("FALLBACK"),
        }
    }
}

/// Sleep-quality analysis record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Sleep efficiency, 0-100
    pub efficiency: f64,
    /// Total time asleep, in the caller's duration unit
    pub total_sleep_duration: f64,
    /// Share of sleep spent in REM
    pub rem_percentage: f64,
    /// Share of sleep spent in deep sleep
    pub deep_sleep_percentage: f64,
    /// Share of sleep spent in light sleep
    pub light_sleep_percentage: f64,
    /// Share of the night spent awake
    pub awake_percentage: f64,
    /// Overall score, 0-100
    pub sleep_score: f64,
    /// Origin of this result
    pub source: AnalysisSource,
    /// Human-readable remark
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
