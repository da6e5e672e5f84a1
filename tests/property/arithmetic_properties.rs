//! Property-based tests for arithmetic identities and the Fibonacci
//! recurrence

use basics::{fibonacci, Calculator};
use proptest::prelude::*;

/// Generate divisors that are never zero
fn arb_nonzero_divisor() -> impl Strategy<Value = i32> {
    prop_oneof![-1_000i32..0, 1i32..1_000]
}

proptest! {
    #[test]
    fn prop_div_rem_reconstruct_dividend(
        a in -100_000i32..100_000,
        b in arb_nonzero_divisor(),
    ) {
        let calc = Calculator::new();
        let quotient = calc.div(a, b).unwrap();
        let remainder = calc.rem(a, b).unwrap();

        prop_assert_eq!(calc.mul(quotient, b) + remainder, a);
    }

    #[test]
    fn prop_rem_magnitude_below_divisor(
        a in -100_000i32..100_000,
        b in arb_nonzero_divisor(),
    ) {
        let calc = Calculator::new();
        let remainder = calc.rem(a, b).unwrap();

        prop_assert!(remainder.abs() < b.abs());
    }

    #[test]
    fn prop_rem_sign_follows_dividend(
        a in -100_000i32..100_000,
        b in arb_nonzero_divisor(),
    ) {
        let calc = Calculator::new();
        let remainder = calc.rem(a, b).unwrap();

        prop_assert!(remainder == 0 || (remainder < 0) == (a < 0));
    }

    #[test]
    fn prop_add_commutes(a in -100_000i32..100_000, b in -100_000i32..100_000) {
        let calc = Calculator::new();
        prop_assert_eq!(calc.add(a, b), calc.add(b, a));
    }

    #[test]
    fn prop_mul_commutes(a in -10_000i32..10_000, b in -10_000i32..10_000) {
        let calc = Calculator::new();
        prop_assert_eq!(calc.mul(a, b), calc.mul(b, a));
    }

    #[test]
    fn prop_div_by_zero_always_errors(a in -100_000i32..100_000) {
        let calc = Calculator::new();
        prop_assert!(calc.div(a, 0).is_err());
        prop_assert!(calc.rem(a, 0).is_err());
    }

    #[test]
    fn prop_fibonacci_recurrence(n in 2i32..20) {
        prop_assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
    }
}
