//! Backend HTTP access

pub mod client;
pub mod stacks;
