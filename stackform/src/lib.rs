//! Stackform Library
//!
//! Form core for Git-tracked stacks: reconciles the persisted Git and
//! auto-update configuration into editable values, tracks unsaved changes,
//! and drives the redeploy and save-settings operations.

pub mod app;
pub mod deploy;
pub mod errors;
pub mod form;
pub mod http;
pub mod logs;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
