use crew_rotation::workflows::import::{RosterImportError, RosterImporter};
use crew_rotation::workflows::roster::{RosterSource, TechnicianStatus};

#[test]
fn importer_loads_bundled_roster_files() {
    let technicians = include_bytes!("../data/technicians.csv");
    let trips = include_bytes!("../data/trips.csv");

    let roster = RosterImporter::from_readers(&technicians[..], &trips[..])
        .expect("bundled roster imports");

    let technicians = roster.technicians().expect("technicians");
    assert_eq!(technicians.len(), 7);
    assert_eq!(technicians[4].original_status, TechnicianStatus::OnLeave);
    assert_eq!(technicians[3].home_base, "Itajaí");

    let trips = roster.trips().expect("trips");
    assert_eq!(trips.len(), 11);
    assert!(trips
        .iter()
        .any(|trip| trip.technician_id == "T7" && trip.date == "2025-13-40"));
}

#[test]
fn importer_reads_from_disk() {
    let dir = env!("CARGO_MANIFEST_DIR");
    let roster = RosterImporter::from_paths(
        format!("{dir}/data/technicians.csv"),
        format!("{dir}/data/trips.csv"),
    )
    .expect("files import");

    assert_eq!(roster.technician_count(), 7);
    assert_eq!(roster.trip_count(), 11);
}

#[test]
fn importer_rejects_duplicate_ids() {
    let technicians = "id,name,profile,specialty,home_base,status\n\
T1,Carlos,Senior,Electrical,Joinville,Active\n\
T1,Carla,Senior,Electrical,Joinville,Active\n";
    let trips = "technician_id,date,client,client_city,shift\nT1,2025-05-20,Acme,Lages,\n";

    let error = RosterImporter::from_readers(technicians.as_bytes(), trips.as_bytes())
        .expect_err("duplicate technician id");
    assert!(matches!(error, RosterImportError::DuplicateTechnician(_)));
    assert!(error.to_string().contains("T1"));
}

#[test]
fn unknown_technicians_in_trip_log_do_not_fail_import() {
    let technicians = "id,name,profile,specialty,home_base,status\nT1,Carlos,Senior,Electrical,Joinville,Active\n";
    let trips = "technician_id,date,client,client_city,shift\nT9,2025-05-20,Acme,Lages,\n";

    let roster = RosterImporter::from_readers(technicians.as_bytes(), trips.as_bytes())
        .expect("orphaned trips are tolerated");
    assert_eq!(roster.trip_count(), 1);
}
