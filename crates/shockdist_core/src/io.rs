//! Reading and writing datasets as delimited text.
//!
//! The expected layout is a header row naming `income`, `weights` (or
//! `weight`) and `sector` in any order, followed by one record per line.
//! Extra columns are ignored. Blank lines and lines starting with `#` are
//! skipped.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::LoadError;
use crate::model::{Dataset, Record, SectorId};

struct Columns {
    income: usize,
    weight: usize,
    sector: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self, LoadError> {
        let names: Vec<String> = header
            .split(',')
            .map(|s| s.trim().trim_matches('"').to_ascii_lowercase())
            .collect();
        let find = |candidates: &[&str], column: &'static str| {
            names
                .iter()
                .position(|n| candidates.contains(&n.as_str()))
                .ok_or(LoadError::MissingColumn(column))
        };
        Ok(Self {
            income: find(&["income"], "income")?,
            weight: find(&["weights", "weight"], "weights")?,
            sector: find(&["sector"], "sector")?,
        })
    }
}

fn field<'a>(fields: &[&'a str], index: usize) -> &'a str {
    fields.get(index).map(|s| s.trim().trim_matches('"')).unwrap_or("")
}

/// Parse a dataset from any buffered reader
pub fn parse_csv<R: BufRead>(reader: R) -> Result<Dataset, LoadError> {
    let mut columns: Option<Columns> = None;
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let cols = match &columns {
            Some(cols) => cols,
            None => {
                columns = Some(Columns::from_header(trimmed)?);
                continue;
            }
        };

        let fields: Vec<&str> = trimmed.split(',').collect();
        let parse_f64 = |index: usize, column: &'static str| {
            let raw = field(&fields, index);
            raw.parse::<f64>().map_err(|_| LoadError::Parse {
                line: line_no,
                column,
                value: raw.to_string(),
            })
        };

        let income = parse_f64(cols.income, "income")?;
        let weight = parse_f64(cols.weight, "weights")?;
        let raw_sector = field(&fields, cols.sector);
        // Sector ids sometimes come out of spreadsheets as "2.0"
        let sector = raw_sector
            .parse::<u32>()
            .ok()
            .or_else(|| {
                raw_sector
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u32::MAX as f64)
                    .map(|v| v as u32)
            })
            .ok_or_else(|| LoadError::Parse {
                line: line_no,
                column: "sector",
                value: raw_sector.to_string(),
            })?;

        records.push(Record::new(income, weight, SectorId(sector)));
    }

    if columns.is_none() {
        return Err(LoadError::MissingHeader);
    }
    Ok(Dataset::new(records)?)
}

/// Load a dataset from a file on disk
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path)?;
    let dataset = parse_csv(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), records = dataset.len(), "dataset loaded");
    Ok(dataset)
}

/// Render a dataset with an `income,weights,sector` header
pub fn to_csv_string(dataset: &Dataset) -> String {
    let mut out = String::from("income,weights,sector\n");
    for r in dataset.iter() {
        out.push_str(&format!("{},{},{}\n", r.income, r.weight, r.sector));
    }
    out
}

/// Write a dataset atomically using the write-then-rename pattern
pub fn write_csv(dataset: &Dataset, path: &Path) -> io::Result<()> {
    let temp_path = path.with_extension("csv.tmp");
    {
        let mut file = File::create(&temp_path)?;
        file.write_all(to_csv_string(dataset).as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatasetError;
    use tempfile::tempdir;

    #[test]
    fn test_parse_basic() {
        let input = "income,weights,sector\n1000,1,1\n2000.5,3,2\n";
        let dataset = parse_csv(input.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1], Record::new(2000.5, 3.0, SectorId(2)));
    }

    #[test]
    fn test_parse_reordered_columns_and_extras() {
        let input = "# survey extract\nsector,id,weight,income\n\n3,a,2,450.0\n1,b,1,\"780\"\n";
        let dataset = parse_csv(input.as_bytes()).unwrap();

        assert_eq!(dataset.records()[0], Record::new(450.0, 2.0, SectorId(3)));
        assert_eq!(dataset.records()[1], Record::new(780.0, 1.0, SectorId(1)));
    }

    #[test]
    fn test_parse_float_sector() {
        let dataset = parse_csv("income,weights,sector\n10,1,2.0\n".as_bytes()).unwrap();
        assert_eq!(dataset.records()[0].sector, SectorId(2));
    }

    #[test]
    fn test_parse_errors() {
        let missing = parse_csv("income,sector\n1,1\n".as_bytes()).unwrap_err();
        assert!(matches!(missing, LoadError::MissingColumn("weights")));

        let bad = parse_csv("income,weights,sector\n1,1,1\nabc,1,1\n".as_bytes()).unwrap_err();
        assert!(matches!(bad, LoadError::Parse { line: 3, column: "income", .. }));

        let no_header = parse_csv("\n# nothing\n".as_bytes()).unwrap_err();
        assert!(matches!(no_header, LoadError::MissingHeader));

        let empty = parse_csv("income,weights,sector\n".as_bytes()).unwrap_err();
        assert!(matches!(empty, LoadError::Dataset(DatasetError::Empty)));

        let zero_weight = parse_csv("income,weights,sector\n1,0,1\n".as_bytes()).unwrap_err();
        assert!(matches!(
            zero_weight,
            LoadError::Dataset(DatasetError::NonPositiveWeight { .. })
        ));
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("income_data.csv");
        let dataset = Dataset::new(vec![
            Record::new(812.25, 431.0, SectorId(1)),
            Record::new(640.0, 9999.0, SectorId(3)),
        ])
        .unwrap();

        write_csv(&dataset, &path).unwrap();

        assert!(!path.with_extension("csv.tmp").exists());
        assert_eq!(load_csv(&path).unwrap(), dataset);
    }
}
