//! The core module.
//!
//! Contains the domain logic, free of any infrastructure concerns.

pub mod greeting;
