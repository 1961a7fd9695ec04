use std::collections::HashMap;
use std::time::Instant;

/// Cross-cutting observer for pipeline stage events.
///
/// Keeps the use case free of any particular output mechanism. The CLI
/// routes events to the `log` crate; tests discard them.
pub trait PipelineLogger {
    /// Record how long a named pipeline stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. segment count).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Logger backed by the `log` facade. Stage timings and metrics are kept
/// in insertion order and reported in one summary at the end of the run.
pub struct LogPipelineLogger {
    timings: Vec<(String, f64)>,
    metrics: HashMap<String, f64>,
    start_time: Instant,
}

impl LogPipelineLogger {
    pub fn new() -> Self {
        Self {
            timings: Vec::new(),
            metrics: HashMap::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Pipeline summary ({:.1}ms total):",
            elapsed_ms
        )];

        for (stage, duration_ms) in &self.timings {
            let pct = if elapsed_ms > 0.0 {
                duration_ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!("  {stage:12}: {duration_ms:8.1}ms  ({pct:4.1}%)"));
        }

        let mut names: Vec<_> = self.metrics.keys().collect();
        names.sort();
        for name in names {
            lines.push(format!("  {name}: {:.3}", self.metrics[name]));
        }

        Some(lines.join("\n"))
    }

    /// Returns the recorded duration of a stage.
    pub fn timing_for(&self, stage: &str) -> Option<f64> {
        self.timings
            .iter()
            .find(|(name, _)| name == stage)
            .map(|(_, ms)| *ms)
    }

    /// Returns the latest value of a metric.
    pub fn metric_for(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

impl Default for LogPipelineLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for LogPipelineLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        log::debug!("{stage} took {duration_ms:.1}ms");
        self.timings.push((stage.to_string(), duration_ms));
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.insert(name.to_string(), value);
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n\n{text}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_logger_all_methods_are_noop() {
        let mut logger = NullPipelineLogger;
        logger.timing("infer", 5.0);
        logger.metric("segments", 3.0);
        logger.info("hello");
        logger.summary();
    }

    #[test]
    fn test_timing_records_values_in_order() {
        let mut logger = LogPipelineLogger::new();
        logger.timing("read", 2.0);
        logger.timing("infer", 30.0);

        assert_eq!(logger.timing_for("read"), Some(2.0));
        assert_eq!(logger.timing_for("infer"), Some(30.0));
        assert_eq!(logger.timing_for("segment"), None);
        assert_eq!(logger.timings[0].0, "read");
        assert_eq!(logger.timings[1].0, "infer");
    }

    #[test]
    fn test_metric_keeps_latest_value() {
        let mut logger = LogPipelineLogger::new();
        logger.metric("segments", 3.0);
        logger.metric("segments", 4.0);
        assert_eq!(logger.metric_for("segments"), Some(4.0));
    }

    #[test]
    fn test_summary_includes_timing_and_metrics() {
        let mut logger = LogPipelineLogger::new();
        logger.timing("infer", 20.0);
        logger.metric("speech_ratio", 0.25);

        let summary = logger.summary_string().unwrap();
        assert!(summary.contains("Pipeline summary"));
        assert!(summary.contains("infer"));
        assert!(summary.contains("speech_ratio: 0.250"));
    }

    #[test]
    fn test_empty_summary_returns_none() {
        let logger = LogPipelineLogger::new();
        assert!(logger.summary_string().is_none());
    }
}
