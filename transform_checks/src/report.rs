//! Check reports with JSON and JUnit-XML output.
//!
//! A report records one [`CheckOutcome`] per registered check, in execution
//! order, plus the run seed so failures can be replayed. The JUnit form
//! groups outcomes into one `<testsuite>` per category for CI consumption.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Check outcome status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CheckStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
}

impl CheckStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            CheckStatus::Passed => "✓",
            CheckStatus::Failed => "✗",
            CheckStatus::Skipped => "○",
            CheckStatus::Pending => "◐",
        }
    }
}

/// Result of a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Check name (e.g. "quat.normalize_degenerate").
    pub name: String,
    pub description: String,
    pub category: String,
    pub status: CheckStatus,
    pub duration: Duration,
    /// Failure message or skip reason.
    pub error_message: Option<String>,
    /// RNG seed the check ran with, kept for failures.
    pub seed: Option<u64>,
}

impl CheckOutcome {
    pub fn new(name: &str, category: &str) -> Self {
        CheckOutcome {
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            status: CheckStatus::Pending,
            duration: Duration::ZERO,
            error_message: None,
            seed: None,
        }
    }

    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn pass(mut self, duration: Duration) -> Self {
        self.status = CheckStatus::Passed;
        self.duration = duration;
        self
    }

    pub fn fail(mut self, duration: Duration, error: &str) -> Self {
        self.status = CheckStatus::Failed;
        self.duration = duration;
        self.error_message = Some(error.to_string());
        self
    }

    pub fn skip(mut self, reason: &str) -> Self {
        self.status = CheckStatus::Skipped;
        self.error_message = Some(reason.to_string());
        self
    }
}

/// Summary statistics for a category or a whole run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryStats {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub pending: u32,
    pub total_duration: Duration,
}

impl CategoryStats {
    /// Percentage of executed (non-skipped) checks that passed.
    pub fn pass_rate(&self) -> f64 {
        let ran = self.total - self.skipped;
        if ran == 0 {
            return 0.0;
        }
        (self.passed as f64 / ran as f64) * 100.0
    }

    pub fn add_result(&mut self, result: &CheckOutcome) {
        self.total += 1;
        self.total_duration += result.duration;
        match result.status {
            CheckStatus::Passed => self.passed += 1,
            CheckStatus::Failed => self.failed += 1,
            CheckStatus::Skipped => self.skipped += 1,
            CheckStatus::Pending => self.pending += 1,
        }
    }
}

/// Full check report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub title: String,
    /// Seconds since the Unix epoch when the report was created.
    pub timestamp: u64,
    /// Run seed.
    pub seed: u64,
    /// Outcomes in execution order.
    pub results: Vec<CheckOutcome>,
    pub metadata: BTreeMap<String, String>,
}

impl CheckReport {
    pub fn new(title: &str, seed: u64) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        CheckReport {
            title: title.to_string(),
            timestamp,
            seed,
            results: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn add_result(&mut self, result: CheckOutcome) {
        self.results.push(result);
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn overall_stats(&self) -> CategoryStats {
        let mut stats = CategoryStats::default();
        for result in &self.results {
            stats.add_result(result);
        }
        stats
    }

    pub fn stats_by_category(&self) -> BTreeMap<String, CategoryStats> {
        let mut map: BTreeMap<String, CategoryStats> = BTreeMap::new();
        for result in &self.results {
            map.entry(result.category.clone())
                .or_default()
                .add_result(result);
        }
        map
    }

    pub fn results_by_category(&self) -> BTreeMap<String, Vec<&CheckOutcome>> {
        let mut map: BTreeMap<String, Vec<&CheckOutcome>> = BTreeMap::new();
        for result in &self.results {
            map.entry(result.category.clone()).or_default().push(result);
        }
        map
    }

    /// True when nothing failed or is pending. Skipped checks do not count
    /// against the run.
    pub fn all_passed(&self) -> bool {
        self.results
            .iter()
            .all(|r| matches!(r.status, CheckStatus::Passed | CheckStatus::Skipped))
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.results
            .iter()
            .filter(|r| r.status == CheckStatus::Failed)
    }

    /// JUnit-style XML, one `<testsuite>` per category.
    pub fn to_junit_xml(&self) -> String {
        let stats = self.overall_stats();
        let by_category = self.stats_by_category();
        let results_by_cat = self.results_by_category();

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        let _ = writeln!(
            xml,
            "<testsuites name=\"{}\" tests=\"{}\" failures=\"{}\" skipped=\"{}\" time=\"{:.6}\">",
            xml_escape(&self.title),
            stats.total,
            stats.failed,
            stats.skipped,
            stats.total_duration.as_secs_f64()
        );

        for (category, cat_stats) in &by_category {
            let _ = writeln!(
                xml,
                "  <testsuite name=\"{}\" tests=\"{}\" failures=\"{}\" skipped=\"{}\" time=\"{:.6}\">",
                xml_escape(category),
                cat_stats.total,
                cat_stats.failed,
                cat_stats.skipped,
                cat_stats.total_duration.as_secs_f64()
            );
            for result in results_by_cat.get(category).into_iter().flatten() {
                xml.push_str(&junit_case(result));
            }
            xml.push_str("  </testsuite>\n");
        }

        xml.push_str("</testsuites>\n");
        xml
    }

    pub fn save_junit(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_junit_xml())
            .with_context(|| format!("write junit report {}", path.display()))
    }

    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("serialize report")?;
        fs::write(path, json).with_context(|| format!("write json report {}", path.display()))
    }
}

fn junit_case(result: &CheckOutcome) -> String {
    let open = format!(
        "    <testcase classname=\"{}\" name=\"{}\" time=\"{:.6}\"",
        xml_escape(&result.category),
        xml_escape(&result.name),
        result.duration.as_secs_f64()
    );
    let message = xml_escape(result.error_message.as_deref().unwrap_or_default());

    match result.status {
        CheckStatus::Passed => format!("{open}/>\n"),
        CheckStatus::Failed => {
            let seed = result.seed.map(|s| format!(" (seed {s})")).unwrap_or_default();
            format!("{open}>\n      <failure message=\"{message}{seed}\"/>\n    </testcase>\n")
        }
        CheckStatus::Skipped | CheckStatus::Pending => {
            format!("{open}>\n      <skipped message=\"{message}\"/>\n    </testcase>\n")
        }
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CheckReport {
        let mut report = CheckReport::new("Math", 5);
        report.add_result(
            CheckOutcome::new("vec3.dot", "vector")
                .with_description("Dot product of known vectors")
                .pass(Duration::from_millis(1)),
        );
        report.add_result(
            CheckOutcome::new("mat4.inverse", "matrix")
                .fail(Duration::from_millis(2), "element (0, 0) expected 1 < 2")
                .with_seed(99),
        );
        report.add_result(CheckOutcome::new("quat.mul", "quaternion").skip("filtered out"));
        report
    }

    #[test]
    fn overall_and_category_stats() {
        let report = sample();
        let stats = report.overall_stats();
        assert_eq!((stats.total, stats.passed, stats.failed, stats.skipped), (3, 1, 1, 1));
        assert_eq!(stats.pass_rate(), 50.0);

        let by_cat = report.stats_by_category();
        assert_eq!(by_cat["matrix"].failed, 1);
        assert_eq!(by_cat["vector"].passed, 1);
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn skipped_checks_do_not_fail_run() {
        let mut report = CheckReport::new("Math", 0);
        report.add_result(CheckOutcome::new("a", "x").pass(Duration::ZERO));
        report.add_result(CheckOutcome::new("b", "x").skip("filtered out"));
        assert!(report.all_passed());
    }

    #[test]
    fn junit_xml_escapes_and_groups() {
        let xml = sample().to_junit_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<testsuite name=\"matrix\" tests=\"1\" failures=\"1\""));
        assert!(xml.contains("expected 1 &lt; 2 (seed 99)"));
        assert!(xml.contains("<skipped message=\"filtered out\"/>"));
        assert!(xml.contains("name=\"vec3.dot\""));
        assert!(xml.trim_end().ends_with("</testsuites>"));
    }

    #[test]
    fn json_roundtrips_results() {
        let report = sample().with_metadata("commit", "abc123");
        let json = serde_json::to_string(&report).unwrap();
        let back: CheckReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.results.len(), 3);
        assert_eq!(back.metadata["commit"], "abc123");
        assert_eq!(back.results[1].seed, Some(99));
    }
}
