//! A minimal greeter, with the configuration and logging a binary needs around it.

pub mod core;
pub mod infra;
