//! Contact data for one geometry across every contact that touches it.

use track_results::ResultSource;
use tracing::{debug, info};

use crate::error::TrackResult;
use crate::model::{Geometry, Marker, Model, PoseSource};
use crate::params::ContactDataParams;
use crate::progress::{ProgressBar, ProgressSink};
use crate::table::ContactTable;
use crate::track::{Track, TRACK_PREFIX};

/// Tracks of every contact that has `geometry` on either side and has
/// results.
///
/// Contacts are visited in model order and their tracks in result order.
/// A geometry listed on both sides of a contact is sampled on side I.
#[must_use]
pub fn tracks_on_geometry(
    model: &Model,
    results: &dyn ResultSource,
    geometry: &Geometry,
) -> Vec<Track> {
    let mut tracks = Vec::new();
    for contact in &model.contacts {
        let Some(side) = contact.side_of(geometry) else {
            continue;
        };
        if !results.has_result_set(&contact.name) {
            debug!(contact = %contact.name, "Contact has no results");
            continue;
        }
        tracks.extend(
            results
                .child_sets(&contact.name, TRACK_PREFIX)
                .into_iter()
                .map(|name| Track {
                    name,
                    contact: contact.name.clone(),
                    side,
                }),
        );
    }
    tracks
}

/// One table of contact data for `geometry`, every track expressed in
/// `marker`'s frame.
///
/// Each track's rows are appended in turn (see [`ContactTable`]). The sink
/// gets a label naming the geometry and one progress update per finished
/// track; when no track touches the geometry the table is empty but has
/// every column, and the sink is never called.
///
/// # Errors
///
/// Returns an error if any track's data cannot be read or transformed.
pub fn get_contact_data(
    model: &Model,
    results: &dyn ResultSource,
    poses: &dyn PoseSource,
    geometry: &Geometry,
    marker: &Marker,
    params: &ContactDataParams,
    sink: &mut dyn ProgressSink,
) -> TrackResult<ContactTable> {
    let tracks = tracks_on_geometry(model, results, geometry);
    info!(
        geometry = %geometry.full_name(),
        tracks = tracks.len(),
        "Collecting contact data"
    );

    let mut table = ContactTable::new(&params.fields);
    if tracks.is_empty() {
        return Ok(table);
    }

    let mut bar = ProgressBar::new(sink).with_steps(tracks.len());
    bar.label(&format!("Processing {} contacts...", geometry.full_name()));
    for track in &tracks {
        let sample = track.data(results, poses, marker)?;
        debug!(track = %track.name, rows = sample.len(), "Track collected");
        table.push_track(track, &sample, params.sort_by_time);
        bar.increment();
    }
    Ok(table)
}
