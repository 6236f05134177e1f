//! Flat table of contact data across tracks.

use std::path::Path;

use track_results::write_csv;

use crate::error::TrackResult;
use crate::track::{Track, TrackField, TrackSample};

const AXES: [&str; 3] = ["x", "y", "z"];

/// One numeric column.
#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// Rows of contact data from any number of tracks.
///
/// Numeric columns are `time`, then for each requested field either
/// `<field>_x`, `<field>_y`, `<field>_z` and the magnitude `<field>`
/// (vector fields) or `<field>` (scalar fields), then `step`, the time to
/// the next sample of the same track (0 on a track's last row). Every row
/// is also labelled with its `contact` and `track`.
///
/// # Example
///
/// ```
/// use track_contact::{ContactTable, TrackField};
///
/// let table = ContactTable::new(&[TrackField::Normal, TrackField::Penetration]);
/// assert!(table.is_empty());
/// assert_eq!(
///     table.column_names(),
///     vec!["time", "normal_x", "normal_y", "normal_z", "normal", "penetration", "step", "contact", "track"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContactTable {
    fields: Vec<TrackField>,
    columns: Vec<Column>,
    contact: Vec<String>,
    track: Vec<String>,
}

impl ContactTable {
    /// Empty table with the columns for `fields`.
    #[must_use]
    pub fn new(fields: &[TrackField]) -> Self {
        let mut names = vec!["time".to_string()];
        for field in fields {
            let base = field.name();
            if field.is_vector() {
                names.extend(AXES.iter().map(|a| format!("{base}_{a}")));
            }
            names.push(base.to_string());
        }
        names.push("step".to_string());

        Self {
            fields: fields.to_vec(),
            columns: names
                .into_iter()
                .map(|name| Column {
                    name,
                    values: Vec::new(),
                })
                .collect(),
            contact: Vec::new(),
            track: Vec::new(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contact.len()
    }

    /// True if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contact.is_empty()
    }

    /// Fields the table was built for.
    #[must_use]
    pub fn fields(&self) -> &[TrackField] {
        &self.fields
    }

    /// All column names, numeric columns first, then `contact` and `track`.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|c| c.name.as_str())
            .chain(["contact", "track"])
            .collect()
    }

    /// Values of a numeric column.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Contact label of each row.
    #[must_use]
    pub fn contacts(&self) -> &[String] {
        &self.contact
    }

    /// Track label of each row.
    #[must_use]
    pub fn tracks(&self) -> &[String] {
        &self.track
    }

    /// Append one track's rows, optionally sorting them by time first.
    ///
    /// Rows are appended after existing rows; tracks are never interleaved.
    pub fn push_track(&mut self, track: &Track, sample: &TrackSample, sort_by_time: bool) {
        let n = sample.len();
        let mut order: Vec<usize> = (0..n).collect();
        if sort_by_time {
            order.sort_by(|&a, &b| sample.time[a].total_cmp(&sample.time[b]));
        }

        let time: Vec<f64> = order.iter().map(|&i| sample.time[i]).collect();
        let mut values: Vec<Vec<f64>> = vec![time.clone()];
        for &field in &self.fields {
            match sample.vectors(field) {
                Some(series) => {
                    for axis in 0..3 {
                        values.push(order.iter().map(|&i| series[i][axis]).collect());
                    }
                    values.push(order.iter().map(|&i| series[i].norm()).collect());
                }
                None => values.push(order.iter().map(|&i| sample.penetration[i]).collect()),
            }
        }
        let step = (0..n)
            .map(|i| if i + 1 < n { time[i + 1] - time[i] } else { 0.0 })
            .collect();
        values.push(step);

        for (column, new) in self.columns.iter_mut().zip(values) {
            column.values.extend(new);
        }
        self.contact.extend(std::iter::repeat(track.contact.clone()).take(n));
        self.track.extend(std::iter::repeat(track.name.clone()).take(n));
    }

    /// Write the table to a CSV file with a header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written; a permission failure
    /// is reported as `ResultsError::PermissionDenied`.
    pub fn write_csv(&self, path: &Path) -> TrackResult<()> {
        let header: Vec<String> = self.column_names().into_iter().map(String::from).collect();
        let rows = (0..self.len()).map(|row| {
            self.columns
                .iter()
                .map(|c| c.values[row].to_string())
                .chain([self.contact[row].clone(), self.track[row].clone()])
                .collect::<Vec<_>>()
        });
        write_csv(path, &header, rows)?;
        Ok(())
    }
}
