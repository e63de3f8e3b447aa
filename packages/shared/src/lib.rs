//! Utilities shared across Roomcast packages.

pub mod logger;
