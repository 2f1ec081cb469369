use std::thread;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::Rng;

use super::{InferenceClient, InferenceError};
use crate::path::CanonicalPath;
use crate::payload::ResultPayload;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);
pub const DEFAULT_CONFIDENCE_MIN: f64 = 85.0;
pub const DEFAULT_CONFIDENCE_MAX: f64 = 99.9;

/// Local stand-in for the inference service.
///
/// Waits for a fixed delay and then answers with a plain text report about
/// the input. Only empty input is rejected.
#[derive(Debug, Clone)]
pub struct SimulatedClient {
    delay: Duration,
    confidence_min: f64,
    confidence_max: f64,
}

impl Default for SimulatedClient {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl SimulatedClient {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            confidence_min: DEFAULT_CONFIDENCE_MIN,
            confidence_max: DEFAULT_CONFIDENCE_MAX,
        }
    }

    /// Set the range the reported confidence is drawn from.
    ///
    /// Bounds are clamped to `0..=100` and swapped if given in reverse. A
    /// non-finite bound keeps the default range.
    pub fn with_confidence(mut self, min: f64, max: f64) -> Self {
        if !min.is_finite() || !max.is_finite() {
            tracing::warn!(
                "Ignoring confidence range {min}..={max}, using {DEFAULT_CONFIDENCE_MIN}..={DEFAULT_CONFIDENCE_MAX}"
            );
            self.confidence_min = DEFAULT_CONFIDENCE_MIN;
            self.confidence_max = DEFAULT_CONFIDENCE_MAX;
            return self;
        }
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.confidence_min = min.clamp(0.0, 100.0);
        self.confidence_max = max.clamp(0.0, 100.0);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn confidence(&self) -> f64 {
        if self.confidence_max <= self.confidence_min {
            return self.confidence_min;
        }
        rand::thread_rng().gen_range(self.confidence_min..=self.confidence_max)
    }
}

impl InferenceClient for SimulatedClient {
    fn infer(&self, input: &CanonicalPath) -> Result<ResultPayload, InferenceError> {
        if input.as_str().trim().is_empty() {
            return Err(InferenceError::EmptyInput);
        }
        let started = Instant::now();
        thread::sleep(self.delay);
        let report = Report {
            input: input.as_str(),
            elapsed: started.elapsed(),
            confidence: self.confidence(),
            at: Utc::now(),
        };
        Ok(ResultPayload::text(report.to_string()))
    }

    fn describe(&self) -> String {
        format!("simulated ({}ms)", self.delay.as_millis())
    }
}

/// Text report produced by the simulated responder.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub input: &'a str,
    pub elapsed: Duration,
    pub confidence: f64,
    pub at: DateTime<Utc>,
}

impl Report<'_> {
    pub fn word_count(&self) -> usize {
        self.input.split_whitespace().count()
    }

    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "ANALYSIS COMPLETE")?;
        writeln!(f, "Input: {}", self.input)?;
        writeln!(f, "Word count: {}", self.word_count())?;
        writeln!(f, "Character count: {}", self.char_count())?;
        writeln!(
            f,
            "Processed at: {} UTC in {:.1}s",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            self.elapsed.as_secs_f64()
        )?;
        write!(f, "Confidence: {:.1}%", self.confidence)
    }
}
