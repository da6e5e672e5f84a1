//! Integration tests for the demo entry points

pub mod demo_output_tests;
