//! Service URL resolution from the test-input file.
//! Used by: bin/uat.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::uat::error::{Error, Result};

pub const INPUT_ENV: &str = "TEST_INPUT_FILE_LOCATION";
pub const SERVICE_ID: &str = "nodetron";

static TESTING_ENDPOINT: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();

/// Reads the file named by `TEST_INPUT_FILE_LOCATION`.
pub fn read_from_env() -> Result<String> {
    let path = std::env::var(INPUT_ENV).map_err(|_| Error::MissingEnv(INPUT_ENV))?;
    read(&path)
}

pub fn read(path: &str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_string(),
        source,
    })
}

/// First url of the first `nodetron` service entry.
///
/// Entries are matched loosely: other entries may carry fields of any shape.
/// Input that is not JSON is tried against the older
/// `testing_endpoint:'<url>'` line format.
pub fn service_url(test_input: &str) -> Result<String> {
    let url = match serde_json::from_str::<Value>(test_input) {
        Ok(input) => nodetron_url(&input),
        Err(_) => testing_endpoint(test_input)?,
    };
    url.filter(|u| !u.is_empty()).ok_or(Error::MissingServiceUrl)
}

fn nodetron_url(input: &Value) -> Option<String> {
    input
        .get("services")?
        .as_array()?
        .iter()
        .find(|s| s.get("id").and_then(Value::as_str) == Some(SERVICE_ID))?
        .get("urls")?
        .as_array()?
        .first()?
        .as_str()
        .map(str::to_string)
}

fn testing_endpoint(test_input: &str) -> Result<Option<String>> {
    let re = TESTING_ENDPOINT
        .get_or_init(|| Regex::new(r"testing_endpoint:'(.+)'"))
        .as_ref()
        .map_err(|e| Error::Pattern(e.clone()))?;
    Ok(re
        .captures(test_input)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string()))
}
