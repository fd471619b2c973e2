//! nodetron: demo inventory service with health reporting, plus the
//! acceptance runner that exercises it.

pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod health;
pub mod inventory;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod uat;
