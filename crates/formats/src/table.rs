//! Delimited-text table decoding.
//!
//! One data row becomes one [`Record`]. Cells that fail numeric parsing
//! are absorbed at this boundary: the value is simply absent afterwards,
//! and the report counts how many were dropped. Nothing downstream ever
//! sees a half-parsed number.

use std::fmt;

use catalog::{AttributeCatalog, AttributeId};
use scene::{Record, RegionKey};
use serde::{Deserialize, Serialize};

/// Column bindings for the table decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableOptions {
    pub delimiter: char,
    /// Header of the region-key column.
    pub key_column: String,
    /// Header of the display-name column, when the table carries one.
    pub name_column: Option<String>,
}

impl Default for TableOptions {
    /// Column names of the reference dataset: comma-delimited,
    /// `state_abbr` keys, `name` display names.
    fn default() -> Self {
        Self {
            delimiter: ',',
            key_column: "state_abbr".to_string(),
            name_column: Some("name".to_string()),
        }
    }
}

/// What the decoder saw, suitable for logging at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableReport {
    /// Non-empty data rows, including skipped ones.
    pub rows: usize,
    /// Records produced.
    pub records: usize,
    /// Non-empty cells that failed numeric parsing (absorbed as absent).
    pub absorbed_cells: usize,
    /// Rows dropped for lacking a region key.
    pub skipped_rows: usize,
    /// Catalog attributes with no column in the header, in catalog order.
    pub missing_columns: Vec<AttributeId>,
}

impl TableReport {
    pub fn is_clean(&self) -> bool {
        self.absorbed_cells == 0 && self.skipped_rows == 0 && self.missing_columns.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// No header row at all.
    Empty,
    /// The header lacks the configured region-key column.
    MissingKeyColumn { column: String },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "table has no header row"),
            TableError::MissingKeyColumn { column } => {
                write!(f, "table header has no {column:?} column")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Decode a delimited-text table into records.
///
/// The first line is the header. Only columns named by the catalog (plus
/// the key and name columns) are read; extra columns are ignored. Fields
/// may be double-quoted, with `""` escaping a literal quote. Lines are
/// split on `\n` with a trailing `\r` tolerated, so CRLF input decodes
/// the same as LF.
pub fn decode_table(
    text: &str,
    catalog: &AttributeCatalog,
    options: &TableOptions,
) -> Result<(Vec<Record>, TableReport), TableError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(TableError::Empty)?;
    let headers = split_fields(header, options.delimiter);

    let key_idx = headers
        .iter()
        .position(|h| h == &options.key_column)
        .ok_or_else(|| TableError::MissingKeyColumn {
            column: options.key_column.clone(),
        })?;
    let name_idx = options
        .name_column
        .as_ref()
        .and_then(|name| headers.iter().position(|h| h == name));

    let mut report = TableReport::default();
    let mut columns: Vec<(AttributeId, usize)> = Vec::with_capacity(catalog.len());
    for id in catalog.ids() {
        match headers.iter().position(|h| h == id.as_str()) {
            Some(idx) => columns.push((id.clone(), idx)),
            None => report.missing_columns.push(id.clone()),
        }
    }

    let mut records = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        report.rows += 1;

        let fields = split_fields(line, options.delimiter);
        let key = fields.get(key_idx).map(|f| f.trim()).unwrap_or_default();
        if key.is_empty() {
            report.skipped_rows += 1;
            continue;
        }

        let name = name_idx
            .and_then(|idx| fields.get(idx))
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string);

        let mut record = Record::new(RegionKey::new(key), name);
        for (id, idx) in &columns {
            let Some(cell) = fields.get(*idx).map(|f| f.trim()) else {
                continue;
            };
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) if v.is_finite() => record.set_value(id.clone(), v),
                _ => report.absorbed_cells += 1,
            }
        }

        records.push(record);
        report.records += 1;
    }

    Ok((records, report))
}

/// Split one line into fields, honoring double-quoted cells.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else if c == '"' && field.is_empty() {
            in_quotes = true;
        } else if c == delimiter {
            fields.push(std::mem::take(&mut field));
        } else {
            field.push(c);
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use super::{TableError, TableOptions, decode_table, split_fields};
    use catalog::{AttributeId, energy};
    use scene::RegionKey;

    const REFERENCE_ROWS: &str = "\
state_abbr,name,coal_twh,gas_twh,wind_twh,solar_twh,cents_kwh,tot_twh
MI,Michigan,120.66,31.79,4.74,0.03,11.18,113.6
WI,Wisconsin,62.54,11.2,2.73,0.01,10.79,69.78
";

    #[test]
    fn decodes_the_reference_layout() {
        let (records, report) =
            decode_table(REFERENCE_ROWS, &energy::catalog(), &TableOptions::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert!(report.is_clean());
        assert_eq!(report.rows, 2);
        assert_eq!(report.records, 2);

        let mi = &records[0];
        assert_eq!(mi.key, RegionKey::new("MI"));
        assert_eq!(mi.name.as_deref(), Some("Michigan"));
        assert_eq!(mi.value(&AttributeId::new("coal_twh")), Some(120.66));
        assert_eq!(mi.value(&AttributeId::new("cents_kwh")), Some(11.18));
    }

    #[test]
    fn unparsable_cells_are_absorbed_not_fatal() {
        let text = "\
state_abbr,coal_twh,gas_twh
MI,not a number,31.79
WI,62.54,
";
        let (records, report) =
            decode_table(text, &energy::catalog(), &TableOptions::default()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(report.absorbed_cells, 1);
        // The bad cell reads as absent, the good one survives.
        assert_eq!(records[0].value(&AttributeId::new("coal_twh")), None);
        assert_eq!(records[0].value(&AttributeId::new("gas_twh")), Some(31.79));
        // An empty cell is missing data, not a parse failure.
        assert_eq!(records[1].value(&AttributeId::new("gas_twh")), None);
    }

    #[test]
    fn rows_without_a_key_are_skipped_and_counted() {
        let text = "state_abbr,coal_twh\nMI,120.66\n,62.54\n";
        let (records, report) =
            decode_table(text, &energy::catalog(), &TableOptions::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(report.rows, 2);
        assert_eq!(report.skipped_rows, 1);
    }

    #[test]
    fn absent_catalog_columns_are_reported() {
        let text = "state_abbr,coal_twh\nMI,120.66\n";
        let (_, report) =
            decode_table(text, &energy::catalog(), &TableOptions::default()).unwrap();
        let missing: Vec<&str> = report.missing_columns.iter().map(|id| id.as_str()).collect();
        assert_eq!(
            missing,
            vec!["gas_twh", "wind_twh", "solar_twh", "cents_kwh", "tot_twh"],
        );
    }

    #[test]
    fn missing_key_column_is_an_error() {
        let err = decode_table(
            "state,coal_twh\nMI,120.66\n",
            &energy::catalog(),
            &TableOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TableError::MissingKeyColumn {
                column: "state_abbr".to_string()
            },
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        let err = decode_table("", &energy::catalog(), &TableOptions::default()).unwrap_err();
        assert_eq!(err, TableError::Empty);
    }

    #[test]
    fn crlf_input_decodes_like_lf() {
        let text = "state_abbr,coal_twh\r\nMI,120.66\r\n";
        let (records, report) =
            decode_table(text, &energy::catalog(), &TableOptions::default()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(report.rows, 1);
        assert_eq!(records[0].value(&AttributeId::new("coal_twh")), Some(120.66));
    }

    #[test]
    fn quoted_fields_keep_delimiters_and_escaped_quotes() {
        assert_eq!(
            split_fields(r#"MI,"Upper, Lower","say ""hi""""#, ','),
            vec!["MI", "Upper, Lower", r#"say "hi""#],
        );
        assert_eq!(split_fields("a,,b", ','), vec!["a", "", "b"]);
    }
}
