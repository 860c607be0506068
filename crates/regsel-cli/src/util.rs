use anyhow::Result;
use std::path::Path;

/// Check that a data table given on the command line is a `.csv` or `.tsv`
/// file that exists. `role` names the table in the error, e.g. "Training data".
pub fn validate_data_file(path: &str, role: &str) -> Result<()> {
    let table = Path::new(path);

    let is_table = table
        .extension()
        .and_then(|s| s.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("tsv"));
    if !is_table {
        anyhow::bail!("{} must be a .csv or .tsv table, got: {}", role, path);
    }
    if !table.is_file() {
        anyhow::bail!("{} file does not exist: {}", role, path);
    }

    Ok(())
}

/// Delimiter matching the file extension: tab for `.tsv`, comma otherwise.
pub fn delimiter_for(path: &Path) -> u8 {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    }
}
