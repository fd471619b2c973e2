//! Black-box acceptance run against a deployed nodetron.
//!
//! The runner resolves the service URL from the test-input file, waits once
//! for the service to answer on `/api/inventory`, then runs every case in
//! [`cases::CASES`] in order.
//!
//! Used by: bin/uat.

pub mod cases;
pub mod error;
pub mod input;
pub mod poll;
pub mod suite;

pub use error::{Error, Result};
pub use suite::{Report, Suite};
