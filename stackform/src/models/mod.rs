//! Domain models

pub mod form;
pub mod stack;
