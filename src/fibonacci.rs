//! Naive recursive Fibonacci computation

/// Compute the `n`th Fibonacci number by direct recursion.
///
/// Deliberately exponential: the point of the demo is the recursion
/// itself, not an efficient algorithm, so no memoization is applied.
/// `fibonacci(0) == 0`, `fibonacci(1) == 1`, and every later term is the
/// sum of the two preceding ones. Negative inputs are out of contract and
/// fall into the base case, returning the argument unchanged.
pub fn fibonacci(n: i32) -> i32 {
    if n <= 1 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}
