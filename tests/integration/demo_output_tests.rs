//! Integration tests asserting the exact output of each demo

use basics::demos;
use basics::DemoResult;

/// Run a demo body against a byte buffer and return its output
fn run_demo<F>(run: F) -> String
where
    F: Fn(&mut Vec<u8>) -> DemoResult<()>,
{
    let mut buf = Vec::new();
    run(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_fibonacci_demo_output() {
    let expected = "\
0
Fibonacci sequence:
0
1
1
2
3
5
8
13
21
34
";
    assert_eq!(run_demo(|out| demos::fibonacci::run(out)), expected);
}

#[test]
fn test_fibonacci_demo_emits_ten_values() {
    let output = run_demo(|out| demos::fibonacci::run(out));
    let values: Vec<i32> = output
        .lines()
        .skip(2)
        .map(|line| line.parse().unwrap())
        .collect();

    assert_eq!(values, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn test_loops_demo_output() {
    let expected = "\
For loop example:
For loop iteration: 1
For loop iteration: 2
For loop iteration: 3
For loop iteration: 4
For loop iteration: 5
Countdown: 10
Countdown: 9
Countdown: 8
While loop example:
While loop iteration: 1
While loop iteration: 2
While loop iteration: 3
Value is: 20
Value is: 18
Value is: 16
";
    assert_eq!(run_demo(|out| demos::loops::run(out)), expected);
}

#[test]
fn test_printer_demo_output() {
    let expected = "\
42
foo bar
42
this is true
comparing is true
this is false
comparing is false
";
    assert_eq!(run_demo(|out| demos::printer::run(out)), expected);
}

#[test]
fn test_arithmetic_demo_output() {
    let expected = "\
42
foo bar
54
11
9
3
2
this is true
comparing is true
this is false
comparing is false
";
    assert_eq!(run_demo(|out| demos::arithmetic::run(out)), expected);
}

#[test]
fn test_demos_are_idempotent() {
    let runs: Vec<fn(&mut Vec<u8>) -> DemoResult<()>> = vec![
        |out| demos::fibonacci::run(out),
        |out| demos::loops::run(out),
        |out| demos::printer::run(out),
        |out| demos::arithmetic::run(out),
    ];

    for run in runs {
        let first = run_demo(run);
        let second = run_demo(run);
        assert_eq!(first, second);
    }
}
