//! Wire models for the stack orchestration backend

pub mod models;
