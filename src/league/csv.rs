use crate::league::TableData;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const SEP: char = ',';

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write one comma-separated row, quoting fields that need it.
pub fn write_row<W: Write>(mut w: W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", SEP)?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

pub fn write_table<W: Write>(mut w: W, table: &TableData) -> io::Result<()> {
    write_row(&mut w, &table.headers)?;
    for row in &table.rows {
        write_row(&mut w, row)?;
    }
    Ok(())
}

/// Header line plus every row, as a string.
pub fn to_csv(table: &TableData) -> String {
    let mut buf: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_table(&mut buf, table);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

pub fn write_csv(path: &Path, table: &TableData) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_table(&mut out, table)?;
    out.flush()
}

/// `standings_39_2024.csv` and friends.
pub fn export_name(kind: &str, league: &str, season: &str) -> String {
    format!("{}_{}_{}.csv", kind, league.trim(), season.trim())
}
