use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};

/// Prometheus-tellere for analysen. Eies av kalleren; påvirker aldri resultatet.
#[derive(Clone)]
pub struct AnalysisMetrics {
    registry: Registry,
    reports_total: IntCounter,
    rejected_total: IntCounter,
    overall_score: Histogram,
}

impl AnalysisMetrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();

        let reports_total = IntCounter::new("swing_reports_total", "Swing reports assembled")?;
        let rejected_total = IntCounter::new(
            "swing_reports_rejected_total",
            "Analysis requests rejected with an error",
        )?;
        let overall_score = Histogram::with_opts(
            HistogramOpts::new("swing_overall_score", "Overall swing score (0-100)")
                .buckets(vec![40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]),
        )?;

        registry.register(Box::new(reports_total.clone()))?;
        registry.register(Box::new(rejected_total.clone()))?;
        registry.register(Box::new(overall_score.clone()))?;

        Ok(Self { registry, reports_total, rejected_total, overall_score })
    }

    pub fn record_report(&self, overall_score: f64) {
        self.reports_total.inc();
        self.overall_score.observe(overall_score);
    }

    pub fn record_rejected(&self) {
        self.rejected_total.inc();
    }

    pub fn snapshot(&self) -> (u64, u64) {
        (self.reports_total.get(), self.rejected_total.get())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prometheus tekstformat.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        if TextEncoder::new().encode(&self.registry.gather(), &mut buf).is_err() {
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

impl std::fmt::Debug for AnalysisMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (reports, rejected) = self.snapshot();
        f.debug_struct("AnalysisMetrics")
            .field("reports_total", &reports)
            .field("rejected_total", &rejected)
            .finish()
    }
}
