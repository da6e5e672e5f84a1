//! Property-based tests

pub mod arithmetic_properties;
