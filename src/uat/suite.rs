//! Sequential acceptance run against one service.
//! Used by: bin/uat, tests.

use reqwest::Client;
use tokio::sync::OnceCell;
use url::Url;

use crate::console;
use crate::uat::cases::{Case, CASES};
use crate::uat::error::{Error, Result};
use crate::uat::poll::{endpoint, wait_for_api, RetrySchedule};

pub struct Suite {
    client: Client,
    base: Url,
    schedule: RetrySchedule,
    ready: OnceCell<std::result::Result<(), String>>,
}

#[derive(Debug)]
pub struct CaseOutcome {
    pub name: &'static str,
    pub result: Result<()>,
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl Suite {
    pub fn new(service_url: &str) -> Result<Self> {
        Self::with_schedule(service_url, RetrySchedule::default())
    }

    pub fn with_schedule(service_url: &str, schedule: RetrySchedule) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base: Url::parse(service_url)?,
            schedule,
            ready: OnceCell::new(),
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn schedule(&self) -> &RetrySchedule {
        &self.schedule
    }

    /// Waits for the service once per suite. The outcome, success or
    /// failure, is kept: later calls never poll again and a failed wait is
    /// returned as [`Error::Unavailable`].
    pub async fn ensure_ready(&self) -> Result<()> {
        let outcome = self
            .ready
            .get_or_init(|| async {
                wait_for_api(&self.client, &self.base, &self.schedule)
                    .await
                    .map_err(|e| e.to_string())
            })
            .await;
        outcome.clone().map_err(Error::Unavailable)
    }

    pub async fn run_case(&self, case: &Case) -> Result<()> {
        let url = endpoint(&self.base, case.path)?;
        let mut request = self.client.get(url);
        if let Some(header) = case.header {
            request = request.header(header, "0");
        }
        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        case.expect.check(status, &body).map_err(Error::Assertion)
    }

    /// Runs every case in order. Readiness failure stops the run.
    pub async fn run(&self) -> Result<Report> {
        let mut report = Report::default();
        for case in &CASES {
            self.ensure_ready().await?;
            let result = self.run_case(case).await;
            match &result {
                Ok(()) => console::log_pass(case.name),
                Err(e) => console::log_fail(case.name, &e.to_string()),
            }
            report.outcomes.push(CaseOutcome {
                name: case.name,
                result,
            });
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::uat::poll::READINESS_PATH;

    fn quick() -> RetrySchedule {
        RetrySchedule::new(vec![Duration::from_millis(5); 5])
    }

    #[test]
    fn rejects_malformed_service_url() {
        assert!(matches!(Suite::new("not a url"), Err(Error::Url(_))));
    }

    #[tokio::test]
    async fn readiness_probe_runs_once_per_suite() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(READINESS_PATH))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let suite = Suite::with_schedule(&server.uri(), quick()).unwrap();
        for _ in 0..3 {
            suite.ensure_ready().await.unwrap();
        }
    }

    #[tokio::test]
    async fn unready_service_aborts_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(6)
            .mount(&server)
            .await;

        let suite = Suite::with_schedule(&server.uri(), quick()).unwrap();
        assert!(matches!(suite.run().await, Err(Error::Unavailable(_))));
    }

    #[tokio::test]
    async fn failed_readiness_is_not_polled_again() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(READINESS_PATH))
            .respond_with(ResponseTemplate::new(503))
            .expect(6)
            .mount(&server)
            .await;

        let suite = Suite::with_schedule(&server.uri(), quick()).unwrap();
        for _ in 0..3 {
            match suite.ensure_ready().await {
                Err(Error::Unavailable(reason)) => assert!(reason.contains("503"), "{reason}"),
                other => panic!("expected Unavailable, got {other:?}"),
            }
        }
        let requests = server.received_requests().await.unwrap_or_default();
        assert_eq!(requests.len(), 6);
    }

    #[tokio::test]
    async fn failing_cases_are_reported_not_fatal() {
        let server = MockServer::start().await;
        // Fault-injection requests get a 500 without the expected code.
        Mock::given(method("GET"))
            .and(header_exists("x-demo-invalid-query-pre"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(header_exists("x-demo-invalid-query-post"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let suite = Suite::with_schedule(&server.uri(), quick()).unwrap();
        let report = suite.run().await.unwrap();
        assert_eq!(report.passed(), 5);
        assert_eq!(report.failed(), 4);
        assert!(report
            .outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err())
            .all(|e| matches!(e, Error::Assertion(_))));
    }
}
