//! Catalog file loader
//!
//! Parses the million-song-subset line format: fields separated by the
//! literal `<SEP>` token, with the artist in field 2 and the title in
//! field 3, e.g.
//!
//! ```text
//! TRMMMYQ128F932D901<SEP>SOQMMHC12AB0180CB8<SEP>Faster Pussy cat<SEP>Silent Night
//! ```

use std::path::Path;

use tracing::debug;

use crate::core::Catalog;
use crate::error::{Error, Result};

/// Field separator token
const FIELD_SEPARATOR: &str = "<SEP>";

/// 0-based position of the artist field
const ARTIST_FIELD: usize = 2;

/// 0-based position of the title field
const TITLE_FIELD: usize = 3;

/// Minimum number of fields for a well-formed line
const MIN_FIELDS: usize = 4;

/// Read (artist, title) records from a `<SEP>`-delimited file
///
/// Empty lines are skipped; a non-empty line with fewer than four fields is
/// rejected. Duplicates are kept here and collapse in [`Catalog::build`].
pub fn load_records(path: &Path) -> Result<Vec<(String, String)>> {
    let content = std::fs::read_to_string(path)?;

    let mut records = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(line, line_no + 1)?);
    }

    debug!("read {} records from {:?}", records.len(), path);
    Ok(records)
}

/// Load a catalog straight from a `<SEP>`-delimited file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    Catalog::build(load_records(path)?)
}

fn parse_line(line: &str, line_no: usize) -> Result<(String, String)> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < MIN_FIELDS {
        return Err(Error::MalformedLine {
            line_no,
            line: line.to_string(),
        });
    }
    Ok((
        fields[ARTIST_FIELD].to_string(),
        fields[TITLE_FIELD].to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_records() {
        let file = write_temp(
            "TRA<SEP>SOA<SEP>Faster Pussy cat<SEP>Silent Night\n\
             TRB<SEP>SOB<SEP>Abba<SEP>Waterloo\n",
        );

        let records = load_records(file.path()).unwrap();
        assert_eq!(
            records,
            vec![
                (
                    "Faster Pussy cat".to_string(),
                    "Silent Night".to_string()
                ),
                ("Abba".to_string(), "Waterloo".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_lines_skipped() {
        let file = write_temp("\nTRA<SEP>SOA<SEP>Abba<SEP>Waterloo\n\n");
        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_malformed_line_rejected() {
        let file = write_temp("TRA<SEP>SOA<SEP>Abba<SEP>Waterloo\nonly two<SEP>fields\n");
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line_no: 2, .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_records(Path::new("/nonexistent/songs.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_catalog_collapses_duplicates() {
        let file = write_temp(
            "TRA<SEP>SOA<SEP>Abba<SEP>Waterloo\n\
             TRB<SEP>SOB<SEP>Abba<SEP>Waterloo\n\
             TRC<SEP>SOC<SEP>Beck<SEP>Loser\n",
        );

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_load_catalog_empty_file_fails() {
        let file = write_temp("");
        assert!(matches!(
            load_catalog(file.path()),
            Err(Error::EmptyCatalog)
        ));
    }

    #[test]
    fn test_extra_fields_allowed() {
        // Some dataset dumps append fields past the title; ignore them.
        let (artist, title) =
            parse_line("TRA<SEP>SOA<SEP>Abba<SEP>Waterloo<SEP>1974", 1).unwrap();
        assert_eq!(artist, "Abba");
        assert_eq!(title, "Waterloo");
    }
}
