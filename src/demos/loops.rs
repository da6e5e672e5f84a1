//! Counting sequences via ascending, descending, and condition-driven loops

use std::io::Write;

use tracing::info;

use crate::error::DemoResult;

/// Print every loop pattern, each group introduced by a header line.
pub fn run<W: Write>(out: &mut W) -> DemoResult<()> {
    info!("running loops demo");

    writeln!(out, "For loop example:")?;
    for_loop_example(out)?;

    writeln!(out, "While loop example:")?;
    while_loop_example(out)?;

    Ok(())
}

/// Bounded loops: counting up 1 through 5, then down 10 through 8.
fn for_loop_example<W: Write>(out: &mut W) -> DemoResult<()> {
    for i in 1..=5 {
        writeln!(out, "For loop iteration: {}", i)?;
    }

    for j in (8..=10).rev() {
        writeln!(out, "Countdown: {}", j)?;
    }

    Ok(())
}

/// Condition-driven loops: an ascending counter to 3, then a value
/// stepping down from 20 by 2 while it stays above 15.
fn while_loop_example<W: Write>(out: &mut W) -> DemoResult<()> {
    let mut counter = 1;
    while counter <= 3 {
        writeln!(out, "While loop iteration: {}", counter)?;
        counter += 1;
    }

    let mut value = 20;
    while value > 15 {
        writeln!(out, "Value is: {}", value)?;
        value -= 2;
    }

    Ok(())
}
