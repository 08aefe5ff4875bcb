use log::{debug, info, trace, warn};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use crate::error::AbbrevError;
use crate::team_table::TeamTable;

/// Columns whose values are looked up in the team table.
const TARGET_COLUMNS: [&str; 2] = ["local", "visitor"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug)]
pub struct Summary {
    pub output_path: PathBuf,
    pub rows: usize,
    pub substitutions: usize,
}

/// `dir/matches.csv` -> `dir/matches_abbrev.csv`
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    input.with_file_name(format!("{}_abbrev.csv", stem))
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copies `input` to `output` (or the default `_abbrev.csv` sibling), replacing known team
/// names in the target columns with their codes. Every other cell is written back untouched.
pub fn abbreviate_file(table: &TeamTable, input: &Path, output: Option<&Path>) -> Result<Summary, AbbrevError> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input),
    };

    let mut file = BufReader::new(File::open(input).map_err(|e| AbbrevError::io(input, e))?);
    // The csv reader drops a leading BOM from the header, so remember it for the output.
    let has_bom = file.fill_buf()
        .map_err(|e| AbbrevError::io(input, e))?
        .starts_with(UTF8_BOM);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers()
        .map_err(|e| AbbrevError::from_csv(input, e))?
        .clone();
    if headers.is_empty() {
        return Err(AbbrevError::input_format(input, "file is empty or has no header row"));
    }

    let targets: Vec<usize> = headers.iter()
        .enumerate()
        .filter(|(_, name)| TARGET_COLUMNS.contains(name))
        .map(|(index, _)| index)
        .collect();
    for column in TARGET_COLUMNS {
        if !headers.iter().any(|name| name == column) {
            warn!("Column '{}' not found in {}. Leaving it out of the substitution.", column, input.display());
        }
    }

    // Creating the output would truncate the input before it is read.
    if same_file(input, &output_path) {
        return Err(AbbrevError::io(
            &output_path,
            io::Error::new(io::ErrorKind::InvalidInput, "output path is the input file"),
        ));
    }

    let mut out = File::create(&output_path).map_err(|e| AbbrevError::io(&output_path, e))?;
    if has_bom {
        out.write_all(UTF8_BOM).map_err(|e| AbbrevError::io(&output_path, e))?;
    }
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(&headers)
        .map_err(|e| AbbrevError::from_csv(&output_path, e))?;

    let mut record = csv::StringRecord::new();
    let mut unmapped: HashSet<String> = HashSet::new();
    let mut rows = 0;
    let mut substitutions = 0;

    while reader.read_record(&mut record).map_err(|e| AbbrevError::from_csv(input, e))? {
        if record.len() > headers.len() {
            let line = record.position().map_or(rows + 2, |pos| pos.line() as usize);
            return Err(AbbrevError::input_format(input, format!(
                "line {} has {} fields, but the header has {}", line, record.len(), headers.len())));
        }
        // Short rows get empty trailing cells.
        let mut fields: Vec<&str> = record.iter().collect();
        fields.resize(headers.len(), "");
        for &index in &targets {
            let name = fields[index].trim();
            match table.abbreviation(name) {
                Some(code) => {
                    trace!("Row {}: '{}' -> {}", rows + 1, name, code);
                    fields[index] = code;
                    substitutions += 1;
                }
                None => {
                    if !name.is_empty() && unmapped.insert(name.to_string()) {
                        debug!("No abbreviation for '{}'. Keeping it as is.", name);
                    }
                }
            }
        }
        writer.write_record(&fields)
            .map_err(|e| AbbrevError::from_csv(&output_path, e))?;
        rows += 1;
    }

    writer.flush().map_err(|e| AbbrevError::io(&output_path, e))?;

    info!("Wrote {} rows to {} ({} names abbreviated, {} distinct names unmapped)",
        rows, output_path.display(), substitutions, unmapped.len());

    Ok(Summary {
        output_path,
        rows,
        substitutions,
    })
}
