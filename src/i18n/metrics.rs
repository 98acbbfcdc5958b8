//! Translation metrics and observability module.
//!
//! Tracks how often lookups are served by the active language, by the
//! default-language fallback, or not at all (key returned verbatim), plus how
//! often the active language changes.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Translation counters. One global instance is used by the catalog.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of lookups performed
    lookups: AtomicUsize,

    /// Number of lookups served by the default language instead of the active one
    fallbacks: AtomicUsize,

    /// Number of lookups for keys no table defines
    misses: AtomicUsize,

    /// Number of effective active-language changes
    language_changes: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Create a detached set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup answered by the default language.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup for a key that no table defines.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let fallbacks = self.fallbacks();
        let fallback_rate = if lookups > 0 {
            (fallbacks as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            fallbacks,
            fallback_rate,
            misses: self.misses(),
            language_changes: self.language_changes(),
            generated_at: Utc::now(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.language_changes.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of lookups
    pub lookups: usize,

    /// Number of lookups served by the default language
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100)
    pub fallback_rate: f64,

    /// Number of lookups that returned the key itself
    pub misses: usize,

    /// Number of active-language changes
    pub language_changes: usize,

    /// When this report was taken
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_lookup() {
        let metrics = TranslationMetrics::new();

        assert_eq!(metrics.lookups(), 0);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 1);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 2);
    }

    #[test]
    fn test_record_fallback_and_miss() {
        let metrics = TranslationMetrics::new();

        metrics.record_fallback();
        metrics.record_miss();
        metrics.record_miss();
        assert_eq!(metrics.fallbacks(), 1);
        assert_eq!(metrics.misses(), 2);
    }

    #[test]
    fn test_record_language_change() {
        let metrics = TranslationMetrics::new();

        metrics.record_language_change();
        assert_eq!(metrics.language_changes(), 1);
    }

    #[test]
    fn test_reset() {
        let metrics = TranslationMetrics::new();
        metrics.record_lookup();
        metrics.record_fallback();
        metrics.record_miss();
        metrics.record_language_change();

        metrics.reset();
        assert_eq!(metrics.lookups(), 0);
        assert_eq!(metrics.fallbacks(), 0);
        assert_eq!(metrics.misses(), 0);
        assert_eq!(metrics.language_changes(), 0);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.lookups, 0);
        assert_eq!(report.fallbacks, 0);
        assert_eq!(report.fallback_rate, 0.0);
        assert_eq!(report.misses, 0);
        assert_eq!(report.language_changes, 0);
    }

    #[test]
    fn test_report_fallback_rate() {
        let metrics = TranslationMetrics::new();

        // 4 lookups, 1 fallback = 25%
        for _ in 0..4 {
            metrics.record_lookup();
        }
        metrics.record_fallback();

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert_eq!(report.fallbacks, 1);
        assert_eq!(report.fallback_rate, 25.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_lookup();

        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["lookups"], 1);
        assert!(json["generated_at"].is_string());
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = TranslationMetrics::global();
        let metrics2 = TranslationMetrics::global();

        assert!(std::ptr::eq(metrics1, metrics2));
    }
}
