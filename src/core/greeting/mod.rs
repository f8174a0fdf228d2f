//! Greeting people by name.

pub mod greeting_service;
