use std::path::Path;

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Deserializer};

use super::{Rect, SpriteEntry};
use crate::error::ExtractError;

/// One data row of a sprite CSV. Columns are matched by header name.
///
/// Coordinates are unsigned: a negative value is rejected with its own
/// message rather than handed to the cropper. `filename` is kept verbatim.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(deserialize_with = "trimmed_u32")]
    x: u32,
    #[serde(deserialize_with = "trimmed_u32")]
    y: u32,
    #[serde(deserialize_with = "trimmed_u32")]
    width: u32,
    #[serde(deserialize_with = "trimmed_u32")]
    height: u32,
    filename: String,
}

/// Parse a base-10 integer field, ignoring surrounding whitespace
fn trimmed_u32<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let value = raw.trim();
    match value.parse::<u32>() {
        Ok(n) => Ok(n),
        Err(_) if value.starts_with('-') && value[1..].parse::<u64>().is_ok() => {
            Err(serde::de::Error::custom(format!(
                "negative value {} is not a valid pixel coordinate or size",
                value
            )))
        }
        Err(e) => Err(serde::de::Error::custom(format!(
            "invalid integer '{}': {}",
            value, e
        ))),
    }
}

/// Read sprite entries from a CSV file with `x`, `y`, `width`, `height`
/// and `filename` columns, in file order.
///
/// Every row is parsed and validated before returning, so a bad row fails
/// the run before any sprite is written.
pub fn read_csv_entries(path: &Path) -> Result<Vec<SpriteEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| ExtractError::CsvRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    let mut entries = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        let row = row.map_err(|e| ExtractError::CsvParse {
            path: path.to_path_buf(),
            source: e,
        })?;
        entries.push(SpriteEntry::new(
            Rect::new(row.x, row.y, row.width, row.height),
            row.filename,
        )?);
    }

    debug!("Read {} sprite rows from {}", entries.len(), path.display());

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("sprites.csv");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "x,y,width,height,filename\n10,20,30,40,a.png\n0,0,8,8,b.png\n",
        );

        let entries = read_csv_entries(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rect(), Rect::new(10, 20, 30, 40));
        assert_eq!(entries[0].filename(), "a.png");
        assert_eq!(entries[1].filename(), "b.png");
    }

    #[test]
    fn test_column_order_is_irrelevant() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "filename, height, width, y, x\nhero.png, 4, 3, 2, 1\n",
        );

        let entries = read_csv_entries(&path).unwrap();
        assert_eq!(entries[0].rect(), Rect::new(1, 2, 3, 4));
        assert_eq!(entries[0].filename(), "hero.png");
    }

    #[test]
    fn test_filename_is_kept_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "x,y,width,height,filename\n 0 , 0 , 4 , 4 , hero idle.png \n",
        );

        let entries = read_csv_entries(&path).unwrap();
        assert_eq!(entries[0].rect(), Rect::new(0, 0, 4, 4));
        assert_eq!(entries[0].filename(), " hero idle.png ");
    }

    #[test]
    fn test_negative_coordinate() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "x,y,width,height,filename\n-2,0,4,4,a.png\n");

        let err = read_csv_entries(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::CsvParse { .. })
        ));
        assert!(format!("{:#}", err).contains("negative value -2"));
    }

    #[test]
    fn test_header_only_yields_nothing() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "x,y,width,height,filename\n");
        assert!(read_csv_entries(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "x,y,width,filename\n0,0,8,a.png\n");

        let err = read_csv_entries(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::CsvParse { .. })
        ));
    }

    #[test]
    fn test_non_integer_field() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "x,y,width,height,filename\n0,0,8,8,a.png\n1.5,0,8,8,b.png\n",
        );

        let err = read_csv_entries(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::CsvParse { .. })
        ));
    }

    #[test]
    fn test_zero_size_row() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "x,y,width,height,filename\n0,0,0,8,a.png\n");

        let err = read_csv_entries(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::EmptyRect { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_csv_entries(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ExtractError>(),
            Some(ExtractError::CsvRead { .. })
        ));
    }
}
