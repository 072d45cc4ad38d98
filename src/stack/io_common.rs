use log::debug;

use skill_profile::Row;

// Some exports start with a byte order mark.
const BOM: char = '\u{feff}';

/// Cleans up the header row of an export.
pub fn clean_header(header: Vec<String>) -> Vec<String> {
    header
        .into_iter()
        .enumerate()
        .map(|(idx, h)| {
            if idx == 0 {
                h.trim_start_matches(BOM).to_string()
            } else {
                h
            }
        })
        .collect()
}

/// Pairs the cells of a line with the headers.
///
/// Columns without a header are skipped: spreadsheet exports often carry
/// empty trailing columns.
pub fn assemble_row(header: &[String], cells: Vec<String>) -> Row {
    let fields = header
        .iter()
        .zip(cells)
        .filter(|(h, _)| !h.is_empty())
        .map(|(h, c)| (h.clone(), c))
        .collect();
    Row { fields }
}

pub fn is_blank_line(cells: &[String]) -> bool {
    let blank = cells.iter().all(|c| c.trim().is_empty());
    if blank {
        debug!("is_blank_line: skipping {:?}", cells);
    }
    blank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_is_removed_from_first_header() {
        let header = clean_header(vec!["\u{feff}Timestamp".to_string(), "Username".to_string()]);
        assert_eq!(header, vec!["Timestamp", "Username"]);
    }

    #[test]
    fn unnamed_columns_are_skipped() {
        let header = vec!["Username".to_string(), "".to_string(), "Code [Rust]".to_string()];
        let row = assemble_row(
            &header,
            vec!["a".to_string(), "".to_string(), "High".to_string()],
        );
        assert_eq!(row, Row::new(&[("Username", "a"), ("Code [Rust]", "High")]));
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank_line(&["".to_string(), " ".to_string()]));
        assert!(!is_blank_line(&["".to_string(), "a".to_string()]));
    }
}
