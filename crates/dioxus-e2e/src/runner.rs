// Runner - Executes a list of scenarios against one browser session
//
// Every scenario gets its own page. A failing scenario is recorded and the
// run moves on; nothing is retried.

use crate::error::{Error, Result};
use crate::fixture::{Session, TestPage};
use futures_util::future::LocalBoxFuture;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::Instrument;

/// Signature shared by all scenario entry points.
pub type ScenarioFn = for<'a> fn(&'a TestPage) -> LocalBoxFuture<'a, Result<()>>;

/// A named, independent check against the running application.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub run: ScenarioFn,
}

impl Scenario {
    pub fn new(name: &'static str, run: ScenarioFn) -> Self {
        Self { name, run }
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}

/// How a scenario ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// The app did not behave as expected (assertion, timeout, missing element)
    Failed(String),
    /// The scenario could not run (server unreachable, driver error)
    Errored(String),
}

impl Outcome {
    pub fn from_result(result: &Result<()>) -> Self {
        match result {
            Ok(()) => Outcome::Passed,
            Err(e) if e.is_failure() => Outcome::Failed(e.to_string()),
            Err(e) => Outcome::Errored(e.to_string()),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// Result of one scenario.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub outcome: Outcome,
    pub duration: Duration,
}

/// Results of a whole run, in execution order.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    pub scenarios: Vec<ScenarioReport>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(|s| s.outcome.is_passed())
    }

    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Passed))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Errored(_)))
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.scenarios
            .iter()
            .filter(|s| predicate(&s.outcome))
            .count()
    }

    /// One line per scenario plus a totals line.
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self
            .scenarios
            .iter()
            .map(|s| match &s.outcome {
                Outcome::Passed => format!("PASS  {} ({:?})", s.name, s.duration),
                Outcome::Failed(msg) => format!("FAIL  {}: {}", s.name, msg),
                Outcome::Errored(msg) => format!("ERROR {}: {}", s.name, msg),
            })
            .collect();
        lines.push(format!(
            "{} passed, {} failed, {} errored",
            self.passed(),
            self.failed(),
            self.errored()
        ));
        lines.join("\n")
    }

    /// Turns a run with any non-passing scenario into an error carrying the summary.
    pub fn into_result(self) -> Result<Self> {
        if self.all_passed() {
            return Ok(self);
        }
        Err(Error::AssertionFailed {
            subject: "scenario suite".to_string(),
            expected: format!("{} passed", self.scenarios.len()),
            actual: self.summary(),
        })
    }
}

/// Runs one scenario on a fresh page and closes the page afterwards.
pub async fn run_scenario(session: &Session, scenario: &Scenario) -> ScenarioReport {
    let start = Instant::now();
    let span = tracing::info_span!("scenario", name = scenario.name);
    let result = execute(session, scenario).instrument(span.clone()).await;

    let outcome = Outcome::from_result(&result);
    span.in_scope(|| match &outcome {
        Outcome::Passed => tracing::info!("passed"),
        Outcome::Failed(msg) => tracing::warn!("failed: {}", msg),
        Outcome::Errored(msg) => tracing::warn!("errored: {}", msg),
    });

    ScenarioReport {
        name: scenario.name,
        outcome,
        duration: start.elapsed(),
    }
}

async fn execute(session: &Session, scenario: &Scenario) -> Result<()> {
    let page = session.new_page().await?;
    let result = (scenario.run)(&page).await;
    if let Err(e) = page.close().await {
        tracing::warn!("Failed to close page: {}", e);
    }
    result
}

/// Runs scenarios one after another; a failure never stops the run.
pub async fn run_suite(session: &Session, scenarios: &[Scenario]) -> SuiteReport {
    let mut report = SuiteReport::default();
    for scenario in scenarios {
        report.scenarios.push(run_scenario(session, scenario).await);
    }
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        errored = report.errored(),
        "Suite finished"
    );
    report
}

/// Runs scenarios and turns any non-passing outcome into an error.
pub async fn run_suite_strict(session: &Session, scenarios: &[Scenario]) -> Result<SuiteReport> {
    run_suite(session, scenarios).await.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &'static str, outcome: Outcome) -> ScenarioReport {
        ScenarioReport {
            name,
            outcome,
            duration: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(Outcome::from_result(&Ok(())), Outcome::Passed);

        let failed = Outcome::from_result(&Err(Error::ElementNotFound("#navbar".into())));
        assert!(matches!(failed, Outcome::Failed(msg) if msg.contains("#navbar")));

        let errored = Outcome::from_result(&Err(Error::Config("bad".into())));
        assert!(matches!(errored, Outcome::Errored(_)));
    }

    #[test]
    fn test_suite_report_counts_and_summary() {
        let suite = SuiteReport {
            scenarios: vec![
                report("renders", Outcome::Passed),
                report("navigates", Outcome::Failed("wrong URL".into())),
                report("deep_link", Outcome::Errored("connection refused".into())),
            ],
        };

        assert!(!suite.all_passed());
        assert_eq!((suite.passed(), suite.failed(), suite.errored()), (1, 1, 1));

        let summary = suite.summary();
        assert!(summary.contains("FAIL  navigates: wrong URL"));
        assert!(summary.contains("ERROR deep_link: connection refused"));
        assert!(summary.ends_with("1 passed, 1 failed, 1 errored"));
    }

    #[test]
    fn test_empty_suite_passes() {
        assert!(SuiteReport::default().all_passed());
        assert!(SuiteReport::default().into_result().is_ok());
    }

    #[test]
    fn test_strict_result_rejects_any_non_pass() {
        let passing = SuiteReport {
            scenarios: vec![report("renders", Outcome::Passed)],
        };
        assert_eq!(passing.into_result().unwrap().passed(), 1);

        let errored = SuiteReport {
            scenarios: vec![
                report("renders", Outcome::Passed),
                report("deep_link", Outcome::Errored("connection refused".into())),
            ],
        };
        let err = errored.into_result().unwrap_err();
        assert!(err.is_failure());
        assert!(
            matches!(&err, Error::AssertionFailed { expected, actual, .. }
                if expected == "2 passed" && actual.ends_with("1 passed, 0 failed, 1 errored")),
            "Unexpected error: {}",
            err
        );
    }
}
