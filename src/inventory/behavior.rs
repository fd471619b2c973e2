//! Header-driven fault injection for the inventory endpoints.
//! Used by: handlers::inventory, handlers::behaviors.

use axum::http::HeaderMap;
use serde::Serialize;

pub const INVALID_QUERY_PRE: &str = "X-DEMO-INVALID-QUERY-PRE";
pub const INVALID_QUERY_POST: &str = "X-DEMO-INVALID-QUERY-POST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoBehavior {
    /// Run a query against a missing table before the real query.
    InvalidQueryPre,
    /// Run a query against a missing table after the real query.
    InvalidQueryPost,
}

#[derive(Debug, Serialize)]
pub struct BehaviorInfo {
    pub header: &'static str,
    pub description: &'static str,
}

impl DemoBehavior {
    pub const ALL: [DemoBehavior; 2] = [DemoBehavior::InvalidQueryPre, DemoBehavior::InvalidQueryPost];

    pub fn header(self) -> &'static str {
        match self {
            DemoBehavior::InvalidQueryPre => INVALID_QUERY_PRE,
            DemoBehavior::InvalidQueryPost => INVALID_QUERY_POST,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DemoBehavior::InvalidQueryPre => "issue an invalid query before reading inventory",
            DemoBehavior::InvalidQueryPost => "issue an invalid query after reading inventory",
        }
    }

    pub fn info(self) -> BehaviorInfo {
        BehaviorInfo {
            header: self.header(),
            description: self.description(),
        }
    }

    /// Behaviors requested by `headers`. Presence is enough; the value is ignored.
    pub fn from_headers(headers: &HeaderMap) -> Vec<DemoBehavior> {
        Self::ALL
            .into_iter()
            .filter(|b| headers.contains_key(b.header()))
            .collect()
    }
}
