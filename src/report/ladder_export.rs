use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::binning::Ladder;
use crate::core::{BinningError, Scalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LadderFormat {
    Csv,
    Tsv,
    Json,
}

#[derive(Serialize)]
struct Row<T> {
    level: usize,
    block_count: usize,
    mean: T,
    stderr: T,
}

/// Writes one row per ladder level.
pub fn write_ladder<T, W>(
    ladder: &Ladder<T>,
    w: &mut W,
    fmt: LadderFormat,
) -> Result<(), BinningError>
where
    T: Scalar,
    W: Write,
{
    match fmt {
        LadderFormat::Csv => write_with_delimiter(ladder, w, ','),
        LadderFormat::Tsv => write_with_delimiter(ladder, w, '\t'),
        LadderFormat::Json => write_json(ladder, w),
    }
}

/// Writes the ladder to a file, replacing any previous content.
pub fn export_ladder<T, P>(
    ladder: &Ladder<T>,
    path: P,
    fmt: LadderFormat,
) -> Result<(), BinningError>
where
    T: Scalar,
    P: AsRef<Path>,
{
    let mut w = BufWriter::new(File::create(path)?);
    write_ladder(ladder, &mut w, fmt)?;
    w.flush()?;
    Ok(())
}

fn write_with_delimiter<T: Scalar, W: Write>(
    ladder: &Ladder<T>,
    w: &mut W,
    delimiter: char,
) -> Result<(), BinningError> {
    writeln!(w, "level{d}block_count{d}mean{d}stderr", d = delimiter)?;
    for (i, l) in ladder.iter().enumerate() {
        writeln!(
            w,
            "{}{d}{}{d}{:.12}{d}{:.12}",
            i,
            l.block_count,
            l.mean,
            l.stderr,
            d = delimiter
        )?;
    }
    Ok(())
}

fn write_json<T: Scalar, W: Write>(ladder: &Ladder<T>, w: &mut W) -> Result<(), BinningError> {
    let rows: Vec<Row<T>> = ladder
        .iter()
        .enumerate()
        .map(|(level, l)| Row {
            level,
            block_count: l.block_count,
            mean: l.mean,
            stderr: l.stderr,
        })
        .collect();
    serde_json::to_writer(&mut *w, &rows)?;
    writeln!(w)?;
    Ok(())
}
