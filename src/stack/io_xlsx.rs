// Primitives for reading Excel files, as exported by Google Forms and
// Microsoft Forms.

use calamine::{open_workbook, DataType, Reader, Xlsx};

use crate::stack::{io_common::*, *};

pub fn read_xlsx_rows(path: &str, worksheet_name: Option<&str>) -> StackResult<Vec<Row>> {
    let wrange = get_range(path, worksheet_name)?;
    range_to_rows(&wrange, path)
}

fn range_to_rows(wrange: &calamine::Range<DataType>, path: &str) -> StackResult<Vec<Row>> {
    let mut iter = wrange.rows();
    let header_cells = iter.next().context(EmptyExcelSnafu { path })?;
    let mut header: Vec<String> = Vec::new();
    for cell in header_cells {
        header.push(cell_to_string(cell, 1)?);
    }
    let header = clean_header(header);
    debug!("read_xlsx_rows: header: {:?}", header);

    let mut res: Vec<Row> = Vec::new();
    for (idx, row) in iter.enumerate() {
        // Same numbering as in the spreadsheet, the header is line 1.
        let lineno = idx + 2;
        let mut cells: Vec<String> = Vec::new();
        for cell in row {
            cells.push(cell_to_string(cell, lineno)?);
        }
        if is_blank_line(&cells) {
            continue;
        }
        debug!("read_xlsx_rows: lineno: {:?} row: {:?}", lineno, cells);
        res.push(assemble_row(&header, cells));
    }
    Ok(res)
}

fn cell_to_string(cell: &DataType, lineno: usize) -> StackResult<String> {
    match cell {
        DataType::String(s) => Ok(s.clone()),
        DataType::Empty => Ok(String::new()),
        DataType::Int(i) => Ok(i.to_string()),
        DataType::Float(f) => Ok(f.to_string()),
        DataType::Bool(b) => Ok(b.to_string()),
        // Timestamps are discarded, the raw serial value is enough.
        DataType::DateTime(f) => Ok(f.to_string()),
        _ => ExcelWrongCellTypeSnafu {
            lineno,
            content: format!("{:?}", cell),
        }
        .fail(),
    }
}

fn get_range(path: &str, worksheet_name_o: Option<&str>) -> StackResult<calamine::Range<DataType>> {
    debug!(
        "read_xlsx_rows: path: {:?} worksheet: {:?}",
        &path, &worksheet_name_o
    );
    let mut workbook: Xlsx<_> = open_workbook(path).context(OpeningExcelSnafu { path })?;

    // A worksheet name was provided, use it.
    if let Some(worksheet_name) = worksheet_name_o {
        let wrange = workbook
            .worksheet_range(worksheet_name)
            .context(MissingWorksheetSnafu {
                path,
                name: worksheet_name,
            })?
            .context(OpeningExcelSnafu { path })?;

        Ok(wrange)
    } else {
        let all_worksheets = workbook.worksheets();
        match all_worksheets.as_slice() {
            [] => EmptyExcelSnafu { path }.fail(),
            [(worksheet_name, wrange)] => {
                debug!(
                    "read_xlsx_rows: path: {:?} worksheet: {:?}",
                    &path, &worksheet_name
                );
                Ok(wrange.clone())
            }
            _ => {
                let names: Vec<&str> = all_worksheets.iter().map(|(n, _)| n.as_str()).collect();
                TooManyWorksheetsSnafu {
                    path,
                    names: names.join(", "),
                }
                .fail()
            }
        }
    }
}
