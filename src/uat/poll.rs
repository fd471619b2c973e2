//! Readiness polling with a fixed retry schedule.
//! Used by: uat::suite.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::console;
use crate::uat::error::{Error, Result};

pub const READINESS_PATH: &str = "/api/inventory";

const DEFAULT_INTERVALS_SECS: [u64; 5] = [1, 2, 4, 8, 16];

/// Delays between attempts, consumed in order. One attempt more than there
/// are delays is made before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrySchedule {
    intervals: Vec<Duration>,
}

impl Default for RetrySchedule {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVALS_SECS.into_iter().map(Duration::from_secs).collect())
    }
}

impl RetrySchedule {
    pub fn new(intervals: Vec<Duration>) -> Self {
        Self { intervals }
    }

    pub fn intervals(&self) -> &[Duration] {
        &self.intervals
    }

    pub fn max_attempts(&self) -> usize {
        self.intervals.len() + 1
    }

    pub fn total_delay(&self) -> Duration {
        self.intervals.iter().sum()
    }
}

/// Appends `path` to `base`, keeping any path prefix `base` already has.
pub fn endpoint(base: &Url, path: &str) -> Result<Url> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    Ok(base.join(path.trim_start_matches('/'))?)
}

async fn probe(client: &Client, url: &Url) -> Result<()> {
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::NotReady {
            url: url.to_string(),
            status,
        });
    }
    Ok(())
}

/// GETs the readiness path until it answers 200, sleeping through
/// `schedule` between failures. Returns the last failure once the schedule
/// is exhausted.
pub async fn wait_for_api(client: &Client, base: &Url, schedule: &RetrySchedule) -> Result<()> {
    let url = endpoint(base, READINESS_PATH)?;
    let max_attempts = schedule.max_attempts();
    let mut delays = schedule.intervals().iter();
    let mut attempt = 1;
    loop {
        console::log_waiting(url.as_str(), attempt, max_attempts);
        match probe(client, &url).await {
            Ok(()) => {
                tracing::info!(url = %url, attempt, "service ready");
                return Ok(());
            }
            Err(err) => match delays.next() {
                Some(delay) => {
                    tracing::warn!(url = %url, attempt, ?delay, error = %err, "service not ready, retrying");
                    tokio::time::sleep(*delay).await;
                }
                None => {
                    tracing::error!(url = %url, attempts = attempt, error = %err, "service never became ready");
                    return Err(err);
                }
            },
        }
        attempt += 1;
    }
}
