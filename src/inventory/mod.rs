//! Inventory storage and demo fault injection.
//! Used by: handlers, health, state.

pub mod behavior;
pub mod sqlite;
