//! First ten Fibonacci numbers via naive recursion

use std::io::Write;

use tracing::{debug, info};

use crate::error::DemoResult;
use crate::fibonacci::fibonacci;
use crate::printer::Printer;

/// Number of sequence terms the demo prints.
const TERM_COUNT: i32 = 10;

/// Print the sequence header, then the first ten Fibonacci numbers in
/// increasing index order.
///
/// The header goes through the printer's string operation, so the
/// printer's seed value (0) appears on the line before it.
pub fn run<W: Write>(out: &mut W) -> DemoResult<()> {
    info!(terms = TERM_COUNT, "running fibonacci demo");

    let mut printer = Printer::with_writer(0, out);
    printer.print_str("Fibonacci sequence:")?;

    for i in 0..TERM_COUNT {
        let term = fibonacci(i);
        debug!(i, term, "computed term");
        printer.print_int(term)?;
    }

    Ok(())
}
