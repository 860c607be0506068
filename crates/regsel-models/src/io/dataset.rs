use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use ndarray::{s, Array1, Array2};

use crate::error::ModelError;

/// Load a numeric table from a CSV file, or TSV when the extension is `.tsv`.
///
/// Every cell must parse as `f64` and every row must have the same width.
pub fn load_array<P: AsRef<Path>>(path: P, has_headers: bool) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let reader = BufReader::new(file);

    let is_tsv = path
        .extension()
        .map(|e| e.eq_ignore_ascii_case("tsv"))
        .unwrap_or(false);
    let delimiter = if is_tsv { b'\t' } else { b',' };

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut data = Vec::new();
    let mut ncols = 0;
    let mut nrows = 0;
    for (row, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Malformed row {} in {:?}", row + 1, path))?;
        if nrows == 0 {
            ncols = record.len();
        }
        for (col, field) in record.iter().enumerate() {
            let value: f64 = field.parse().with_context(|| {
                format!(
                    "Non-numeric value {:?} at row {}, column {} in {:?}",
                    field,
                    row + 1,
                    col + 1,
                    path
                )
            })?;
            data.push(value);
        }
        nrows += 1;
    }

    log::trace!("Loaded {}x{} array from {:?}", nrows, ncols, path);
    Array2::from_shape_vec((nrows, ncols), data)
        .with_context(|| format!("Inconsistent row widths in {:?}", path))
}

/// Split a table into features (all columns but the last) and target (the
/// last column).
pub fn split_features_target(
    array: &Array2<f64>,
) -> Result<(Array2<f64>, Array1<f64>), ModelError> {
    if array.nrows() == 0 {
        return Err(ModelError::EmptyInput);
    }
    let ncols = array.ncols();
    if ncols < 2 {
        return Err(ModelError::TooFewColumns(ncols));
    }
    let features = array.slice(s![.., ..ncols - 1]).to_owned();
    let target = array.column(ncols - 1).to_owned();
    Ok((features, target))
}
