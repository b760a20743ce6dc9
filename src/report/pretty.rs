use std::io::Write;

use crate::core::{BinningError, Scalar};
use crate::observables::Accumulator;

/// Writes a human-readable dump of the estimate and its binning ladder.
///
/// ```text
/// --------
/// value: 2 +/- 0.4714045207910317  	 converged: false
/// Z = 3
/// 	2  +/- 0.471405	(3)
/// ```
pub fn pretty_print_block_stats<T, W>(acc: &Accumulator<T>, w: &mut W) -> Result<(), BinningError>
where
    T: Scalar,
    W: Write,
{
    let ladder = acc.ladder()?;
    let est = acc.estimate()?;

    writeln!(w, "--------")?;
    writeln!(
        w,
        "value: {} +/- {}  \t converged: {}",
        est.mean, est.error, est.converged
    )?;
    writeln!(w, "Z = {}", acc.block_size().saturating_mul(acc.num_blocks()))?;
    for level in ladder.iter() {
        writeln!(
            w,
            "\t{}  +/- {}\t({})",
            sig6(level.mean),
            sig6(level.stderr),
            level.block_count
        )?;
    }
    Ok(())
}

/// Six significant digits, trailing zeros trimmed.
fn sig6<T: Scalar>(v: T) -> String {
    if v.is_zero() || !v.is_finite() {
        return v.to_string();
    }
    let magnitude = v.abs().log10().floor().to_f64().unwrap_or(0.0);
    let decimals = (5.0 - magnitude).max(0.0) as usize;
    let text = format!("{:.*}", decimals, v);
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}
