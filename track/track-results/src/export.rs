//! CSV export of result series.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{ResultsError, ResultsResult};
use crate::source::ResultSource;

/// Name of the time column and the marker for time series.
pub const TIME: &str = "TIME";

/// Result sets whose names contain this are rigid-body transforms.
const XFORM: &str = "XFORM";

/// Quote a CSV field if it contains a separator, quote or newline.
#[must_use]
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Write a header line and rows of pre-formatted fields to `path`.
///
/// # Errors
///
/// Returns [`ResultsError::PermissionDenied`] if the file cannot be opened
/// because of permissions, and [`ResultsError::Io`] for other failures.
pub fn write_csv<I>(path: &Path, header: &[String], rows: I) -> ResultsResult<()>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let file = File::create(path).map_err(|e| ResultsError::on_write(path, e))?;
    let mut writer = BufWriter::new(file);
    let mut line = |fields: &[String]| -> std::io::Result<()> {
        let escaped: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
        writeln!(writer, "{}", escaped.join(","))
    };

    line(header).map_err(|e| ResultsError::on_write(path, e))?;
    for row in rows {
        line(&row).map_err(|e| ResultsError::on_write(path, e))?;
    }
    writer.flush().map_err(|e| ResultsError::on_write(path, e))
}

/// Columns of a results export: name and values, `TIME` first when known.
///
/// Sets whose names contain `XFORM` or `TIME` are skipped. Within the
/// remaining sets, the first component named like `TIME` supplies the time
/// column and later ones are dropped; every other component becomes a
/// `<set>.<component>` column. Without a time component the source's own
/// time base is used, if any.
#[must_use]
pub fn result_columns<S: ResultSource + ?Sized>(source: &S) -> Vec<(String, &[f64])> {
    let mut time: Option<&[f64]> = None;
    let mut columns: Vec<(String, &[f64])> = Vec::new();

    for set in source.result_sets() {
        if set.contains(XFORM) || set.contains(TIME) {
            continue;
        }
        for component in source.components(set) {
            let Some(values) = source.component(set, component) else {
                continue;
            };
            if component.contains(TIME) {
                time.get_or_insert(values);
            } else {
                columns.push((format!("{set}.{component}"), values));
            }
        }
    }

    let time = time.or_else(|| Some(source.time()).filter(|t| !t.is_empty()));
    if let Some(time) = time {
        columns.insert(0, (TIME.to_string(), time));
    }
    columns
}

/// Export every result series of `source` to a CSV file.
///
/// Columns follow [`result_columns`]. Rows stop at the shortest column.
/// Values are written with Rust's shortest round-trip float formatting.
///
/// # Errors
///
/// Returns [`ResultsError::PermissionDenied`] if `path` cannot be opened
/// because of permissions (typically the file is open in another program).
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use track_results::{export_results_csv, ResultStore};
///
/// let mut store = ResultStore::with_time(vec![0.0, 0.1]);
/// store.insert("CONTACT_1", "FORCE", vec![10.0, 12.5]);
/// export_results_csv(&store, Path::new("results.csv")).unwrap();
/// ```
pub fn export_results_csv<S: ResultSource + ?Sized>(source: &S, path: &Path) -> ResultsResult<()> {
    let columns = result_columns(source);
    let header: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
    let n_rows = columns.iter().map(|(_, v)| v.len()).min().unwrap_or(0);

    let rows = (0..n_rows).map(|row| {
        columns
            .iter()
            .map(|(_, values)| values[row].to_string())
            .collect::<Vec<_>>()
    });
    write_csv(path, &header, rows)?;

    info!(path = %path.display(), columns = header.len(), rows = n_rows, "Exported results");
    Ok(())
}
