// Primitives for reading CSV files.

use std::fs::File;
use std::io;

use crate::stack::{io_common::*, *};

pub fn read_csv_rows(path: &str) -> StackResult<Vec<Row>> {
    let file = File::open(path).context(CsvOpenSnafu { path })?;
    read_csv_rows_from(file, path)
}

/// Reads rows from any source of CSV text. `name` is only used in errors.
pub fn read_csv_rows_from<R: io::Read>(input: R, name: &str) -> StackResult<Vec<Row>> {
    let rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    read_records(rdr, name)
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>, path: &str) -> StackResult<Vec<Row>> {
    let header: Vec<String> = rdr
        .headers()
        .context(CsvLineParseSnafu { path, lineno: 1u64 })?
        .iter()
        .map(|s| s.to_string())
        .collect();
    let header = clean_header(header);
    debug!("read_csv_rows: header: {:?}", header);

    let mut res: Vec<Row> = Vec::new();
    for (idx, line_r) in rdr.into_records().enumerate() {
        // The header is line 1.
        let lineno = (idx + 2) as u64;
        let line = line_r.context(CsvLineParseSnafu { path, lineno })?;
        let cells: Vec<String> = line.iter().map(|s| s.to_string()).collect();
        if is_blank_line(&cells) {
            continue;
        }
        debug!("read_csv_rows: lineno: {:?} row: {:?}", lineno, cells);
        res.push(assemble_row(&header, cells));
    }
    Ok(res)
}
