//! HTTP handler modules.
//! Used by: server.

pub mod behaviors;
pub mod database;
pub mod health;
pub mod inventory;
pub mod validate;
