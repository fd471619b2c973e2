//! The acceptance cases run against a deployed nodetron.
//! Used by: uat::suite.

use crate::error::ER_NO_SUCH_TABLE;
use crate::inventory::behavior::{INVALID_QUERY_POST, INVALID_QUERY_PRE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// 200 OK.
    Ok,
    /// 500 with `contains` somewhere in the body.
    ServerError { contains: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub name: &'static str,
    pub path: &'static str,
    pub header: Option<&'static str>,
    pub expect: Expect,
}

const fn ok(name: &'static str, path: &'static str) -> Case {
    Case {
        name,
        path,
        header: None,
        expect: Expect::Ok,
    }
}

const fn invalid_query(name: &'static str, path: &'static str, header: &'static str) -> Case {
    Case {
        name,
        path,
        header: Some(header),
        expect: Expect::ServerError {
            contains: ER_NO_SUCH_TABLE,
        },
    }
}

pub const CASES: [Case; 9] = [
    ok("GET /api/inventory should return HTTP 200 OK", "/api/inventory"),
    ok("GET /api/inventory/1 should return HTTP 200 OK", "/api/inventory/1"),
    ok("GET /api/validateMessage should return HTTP 200 OK", "/api/validateMessage"),
    ok("GET /api/behaviors should return HTTP 200 OK", "/api/behaviors"),
    ok("GET /api/database/health should return HTTP 200 OK", "/api/database/health"),
    invalid_query(
        "X-DEMO-INVALID-QUERY-PRE behavior should throw on GET /api/inventory",
        "/api/inventory",
        INVALID_QUERY_PRE,
    ),
    invalid_query(
        "X-DEMO-INVALID-QUERY-POST behavior should throw on GET /api/inventory",
        "/api/inventory",
        INVALID_QUERY_POST,
    ),
    invalid_query(
        "X-DEMO-INVALID-QUERY-PRE behavior should throw on GET /api/inventory/1",
        "/api/inventory/1",
        INVALID_QUERY_PRE,
    ),
    invalid_query(
        "X-DEMO-INVALID-QUERY-POST behavior should throw on GET /api/inventory/1",
        "/api/inventory/1",
        INVALID_QUERY_POST,
    ),
];

impl Expect {
    /// Checks a response against the expectation.
    pub fn check(self, status: u16, body: &str) -> Result<(), String> {
        match self {
            Expect::Ok if status == 200 => Ok(()),
            Expect::Ok => Err(format!("expected 200, got {}", status)),
            Expect::ServerError { .. } if status != 500 => {
                Err(format!("expected 500, got {}", status))
            }
            Expect::ServerError { contains } if !body.contains(contains) => {
                Err(format!("response body does not include {:?}", contains))
            }
            Expect::ServerError { .. } => Ok(()),
        }
    }
}
