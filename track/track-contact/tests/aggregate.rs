//! Aggregating contact tracks over a small two-part model.

use approx::assert_relative_eq;
use nalgebra::Vector3;
use track_contact::{
    get_contact_data, tracks_on_geometry, ContactDataParams, ContactPair, Geometry, Marker, Model,
    Part, Pose, ProgressSink, Side, StaticPoses, TrackError, TrackField,
};
use track_results::{ResultStore, ResultsError};

#[derive(Default)]
struct Recorder {
    progress: Vec<f64>,
    labels: Vec<String>,
}

impl ProgressSink for Recorder {
    fn progress(&mut self, percent: f64) {
        self.progress.push(percent);
    }
    fn label(&mut self, text: &str) {
        self.labels.push(text.to_string());
    }
}

struct Rig {
    model: Model,
    poses: StaticPoses,
    tooth: Geometry,
    other: Geometry,
    marker: Marker,
}

fn rig() -> Rig {
    let gear = Part::new("GEAR");
    let pinion = Part::new("PINION");
    let tooth = Geometry::new(&gear, "TOOTH");
    let other = Geometry::new(&pinion, "TOOTH");
    let marker = Marker::new(&gear, "CM", [0.0; 3]);

    let model = Model::new()
        .with_contact(ContactPair::new("MESH_1", vec![tooth.clone()], vec![other.clone()]))
        .with_contact(ContactPair::new("MESH_2", vec![other.clone()], vec![tooth.clone()]))
        .with_contact(ContactPair::new("MESH_3", vec![tooth.clone()], vec![]))
        .with_contact(ContactPair::new("MESH_4", vec![other.clone()], vec![]));

    let poses = StaticPoses::new()
        .with_pose("GEAR", Pose::new(Vector3::zeros(), [0.0; 3]))
        .with_pose("GEAR.CM", Pose::new(Vector3::zeros(), [0.0; 3]));

    Rig {
        model,
        poses,
        tooth,
        other,
        marker,
    }
}

fn insert_vectors(store: &mut ResultStore, set: &str, values: &[[f64; 3]]) {
    for (axis, name) in ["X", "Y", "Z"].iter().enumerate() {
        store.insert(set, name, values.iter().map(|v| v[axis]).collect());
    }
}

fn insert_track(store: &mut ResultStore, track: &str, side: &str, loc: &[[f64; 3]]) {
    let n = loc.len();
    insert_vectors(store, &format!("{track}.{side}_Point"), loc);
    insert_vectors(store, &format!("{track}.{side}_Normal_Force"), &vec![[1.0, 0.0, 0.0]; n]);
    insert_vectors(store, &format!("{track}.{side}_Normal_Unit_Vector"), &vec![[1.0, 0.0, 0.0]; n]);
    insert_vectors(store, &format!("{track}.{side}_Friction_Force"), &vec![[0.0, 3.0, 4.0]; n]);
    insert_vectors(store, &format!("{track}.Slip_Velocity"), &vec![[0.0, 0.0, 2.0]; n]);
    store.insert(&format!("{track}.Penetration"), "Depth", vec![0.01; n]);
}

/// The gear turns a quarter turn about Z after the first step.
fn results() -> ResultStore {
    let mut store = ResultStore::with_time(vec![0.0, 0.1, 0.2]);
    store.insert("GEAR_XFORM", "X", vec![0.0; 3]);
    store.insert("GEAR_XFORM", "Y", vec![0.0; 3]);
    store.insert("GEAR_XFORM", "Z", vec![0.0; 3]);
    store.insert("GEAR_XFORM", "PSI", vec![0.0, 90.0, 90.0]);
    store.insert("GEAR_XFORM", "THETA", vec![0.0; 3]);
    store.insert("GEAR_XFORM", "PHI", vec![0.0; 3]);

    // Own time base, out of order.
    store.insert("MESH_1.track_1", "TIME", vec![0.2, 0.0]);
    insert_track(&mut store, "MESH_1.track_1", "I", &[[0.0, 2.0, 0.0], [2.0, 0.0, 0.0]]);

    // On the analysis time base.
    insert_track(
        &mut store,
        "MESH_2.track_1",
        "J",
        &[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
    );

    insert_track(&mut store, "MESH_4.track_1", "I", &[[0.0; 3]; 3]);
    store
}

#[test]
fn tracks_are_found_on_both_sides() {
    let rig = rig();
    let store = results();
    let tracks = tracks_on_geometry(&rig.model, &store, &rig.tooth);

    let found: Vec<(&str, Side)> = tracks.iter().map(|t| (t.name.as_str(), t.side)).collect();
    assert_eq!(found, vec![("MESH_1.track_1", Side::I), ("MESH_2.track_1", Side::J)]);
    assert_eq!(tracks[1].contact, "MESH_2");
}

#[test]
fn no_tracks_gives_empty_table_and_silent_progress() {
    let rig = rig();
    let store = results();
    let lonely = Geometry::new(&Part::new("GEAR"), "HUB");
    let mut sink = Recorder::default();

    let table = get_contact_data(
        &rig.model,
        &store,
        &rig.poses,
        &lonely,
        &rig.marker,
        &ContactDataParams::default(),
        &mut sink,
    )
    .unwrap();

    assert!(table.is_empty());
    assert_eq!(table.column_names().len(), 25);
    for name in ["time", "loc_x", "friction", "penetration", "step"] {
        assert!(table.column(name).unwrap().is_empty(), "{name}");
    }
    assert!(sink.progress.is_empty());
    assert!(sink.labels.is_empty());
}

#[test]
fn tracks_are_concatenated_in_marker_frame() {
    let rig = rig();
    let store = results();
    let mut sink = Recorder::default();

    let table = get_contact_data(
        &rig.model,
        &store,
        &rig.poses,
        &rig.tooth,
        &rig.marker,
        &ContactDataParams::default(),
        &mut sink,
    )
    .unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(table.column("time").unwrap(), &[0.0, 0.2, 0.0, 0.1, 0.2]);
    assert_eq!(
        table.contacts(),
        &["MESH_1", "MESH_1", "MESH_2", "MESH_2", "MESH_2"]
    );

    let step = table.column("step").unwrap();
    assert_relative_eq!(step[0], 0.2, epsilon = 1e-12);
    assert_eq!(step[1], 0.0);
    assert_relative_eq!(step[2], 0.1, epsilon = 1e-12);
    assert_eq!(step[4], 0.0);

    // Global +X force seen from the gear after its quarter turn.
    let nx = table.column("normal_x").unwrap();
    let ny = table.column("normal_y").unwrap();
    assert_relative_eq!(nx[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(ny[1], -1.0, epsilon = 1e-12);
    assert_relative_eq!(nx[1], 0.0, epsilon = 1e-12);
    assert_relative_eq!(ny[3], -1.0, epsilon = 1e-12);

    // Sorted: the sample at t=0 was the second one stored.
    let lx = table.column("loc_x").unwrap();
    let ly = table.column("loc_y").unwrap();
    assert_relative_eq!(lx[0], 2.0, epsilon = 1e-12);
    assert_relative_eq!(lx[1], 2.0, epsilon = 1e-12);
    assert_relative_eq!(ly[1], 0.0, epsilon = 1e-12);

    for &f in table.column("friction").unwrap() {
        assert_relative_eq!(f, 5.0, epsilon = 1e-12);
    }
    for &s in table.column("slip_z").unwrap() {
        assert_relative_eq!(s, 2.0, epsilon = 1e-12);
    }
    assert_eq!(table.column("penetration").unwrap(), &[0.01; 5]);

    assert_eq!(sink.labels, vec!["Processing GEAR.TOOTH contacts..."]);
    assert_eq!(sink.progress, vec![50.0, 100.0]);
}

#[test]
fn selected_fields_only() {
    let rig = rig();
    let store = results();
    let params = ContactDataParams::new()
        .fields(vec![TrackField::Penetration])
        .sort_by_time(false);

    let table = get_contact_data(
        &rig.model,
        &store,
        &rig.poses,
        &rig.tooth,
        &rig.marker,
        &params,
        &mut track_contact::NoProgress,
    )
    .unwrap();

    assert_eq!(
        table.column_names(),
        vec!["time", "penetration", "step", "contact", "track"]
    );
    assert_eq!(&table.column("time").unwrap()[..2], &[0.2, 0.0]);
}

#[test]
fn missing_track_component_is_an_error() {
    let rig = rig();
    let mut store = results();
    store.insert("MESH_1.track_2.I_Point", "X", vec![0.0]);

    let err = get_contact_data(
        &rig.model,
        &store,
        &rig.poses,
        &rig.tooth,
        &rig.marker,
        &ContactDataParams::default(),
        &mut track_contact::NoProgress,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        TrackError::Results(ResultsError::MissingComponent { .. })
    ));
}

fn tooth_data(store: &ResultStore) -> Result<track_contact::ContactTable, TrackError> {
    let rig = rig();
    get_contact_data(
        &rig.model,
        store,
        &rig.poses,
        &rig.tooth,
        &rig.marker,
        &ContactDataParams::default(),
        &mut track_contact::NoProgress,
    )
}

#[test]
fn ragged_track_series_are_an_error() {
    let mut store = results();
    store.insert("MESH_1.track_1.Penetration", "Depth", vec![0.01]);

    let err = tooth_data(&store).unwrap_err();
    assert!(matches!(
        err,
        TrackError::RaggedSeries { ref set, expected: 2, found: 1 } if set == "MESH_1.track_1"
    ));
}

#[test]
fn ragged_vector_axes_are_an_error() {
    let mut store = results();
    store.insert("MESH_2.track_1.J_Normal_Force", "Z", vec![0.0; 2]);

    let err = tooth_data(&store).unwrap_err();
    assert!(matches!(
        err,
        TrackError::RaggedSeries { ref set, expected: 3, found: 2 }
            if set == "MESH_2.track_1.J_Normal_Force"
    ));
}

#[test]
fn empty_track_adds_no_rows() {
    let mut store = results();
    store.insert("MESH_3.track_1", "TIME", Vec::new());
    insert_track(&mut store, "MESH_3.track_1", "I", &[]);

    let table = tooth_data(&store).unwrap();
    assert_eq!(table.len(), 5);
    assert!(!table.contacts().iter().any(|c| c == "MESH_3"));
}

#[test]
fn other_geometry_sees_its_own_side() {
    let rig = rig();
    let store = results();
    let tracks = tracks_on_geometry(&rig.model, &store, &rig.other);
    let found: Vec<(&str, Side)> = tracks.iter().map(|t| (t.name.as_str(), t.side)).collect();
    assert_eq!(
        found,
        vec![
            ("MESH_1.track_1", Side::J),
            ("MESH_2.track_1", Side::I),
            ("MESH_4.track_1", Side::I),
        ]
    );
}

#[test]
fn table_exports_to_csv() {
    let rig = rig();
    let store = results();
    let table = get_contact_data(
        &rig.model,
        &store,
        &rig.poses,
        &rig.tooth,
        &rig.marker,
        &ContactDataParams::new().fields(vec![TrackField::Penetration]),
        &mut track_contact::NoProgress,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contact.csv");
    table.write_csv(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "time,penetration,step,contact,track");
    assert_eq!(lines[1], "0,0.01,0.2,MESH_1,MESH_1.track_1");
}

#[test]
fn csv_into_missing_directory_fails() {
    let rig = rig();
    let store = results();
    let table = get_contact_data(
        &rig.model,
        &store,
        &rig.poses,
        &rig.tooth,
        &rig.marker,
        &ContactDataParams::default(),
        &mut track_contact::NoProgress,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let err = table.write_csv(&dir.path().join("nope").join("contact.csv")).unwrap_err();
    assert!(matches!(err, TrackError::Results(ResultsError::Io { .. })));
}
