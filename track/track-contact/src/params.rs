//! Parameters for contact data aggregation.

use crate::track::TrackField;

/// Parameters for [`get_contact_data`](crate::get_contact_data).
///
/// # Example
///
/// ```
/// use track_contact::{ContactDataParams, TrackField};
///
/// let params = ContactDataParams::new().fields(vec![TrackField::Normal]);
/// assert_eq!(params.fields, vec![TrackField::Normal]);
/// assert!(params.sort_by_time);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDataParams {
    /// Fields to include in the table, in column order.
    pub fields: Vec<TrackField>,

    /// Sort each track's rows by time.
    pub sort_by_time: bool,
}

impl Default for ContactDataParams {
    fn default() -> Self {
        Self {
            fields: TrackField::ALL.to_vec(),
            sort_by_time: true,
        }
    }
}

impl ContactDataParams {
    /// Create params with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fields to include.
    #[must_use]
    pub fn fields(mut self, fields: Vec<TrackField>) -> Self {
        self.fields = fields;
        self
    }

    /// Enable or disable per-track time sorting.
    #[must_use]
    pub const fn sort_by_time(mut self, enabled: bool) -> Self {
        self.sort_by_time = enabled;
        self
    }
}
