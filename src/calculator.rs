//! Stateless integer arithmetic helper

use crate::error::{DemoError, DemoResult};

/// Calculator exposing the five integer operations the demos exercise.
///
/// Carries no state; every operation is a pure function of its operands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        a + b
    }

    pub fn sub(&self, a: i32, b: i32) -> i32 {
        a - b
    }

    pub fn mul(&self, a: i32, b: i32) -> i32 {
        a * b
    }

    /// Integer quotient, truncating toward zero.
    pub fn div(&self, a: i32, b: i32) -> DemoResult<i32> {
        if b == 0 {
            return Err(DemoError::DivisionByZero { dividend: a });
        }
        Ok(a / b)
    }

    /// Remainder of truncating division; the sign follows the dividend.
    pub fn rem(&self, a: i32, b: i32) -> DemoResult<i32> {
        if b == 0 {
            return Err(DemoError::DivisionByZero { dividend: a });
        }
        Ok(a % b)
    }
}
