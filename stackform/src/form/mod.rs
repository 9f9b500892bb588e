//! Git stack form core

pub mod controller;
pub mod guard;
pub mod reconcile;
pub mod store;
