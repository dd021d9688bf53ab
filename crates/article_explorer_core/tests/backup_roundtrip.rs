use article_explorer_core::db::open_db_in_memory;
use article_explorer_core::{
    BackupError, Dimension, ExplorerStore, NewObservation, SqliteSnapshotRepository, StoreError,
};

#[test]
fn export_then_import_reproduces_all_collections() {
    let mut source = new_store();
    source.load_sample_data().unwrap();
    let concept = source.create_concept("Extra", Dimension::Purpose).unwrap();
    source
        .add_observation(NewObservation {
            article_id: source.articles()[0].id.clone(),
            concept_id: concept,
            text: "extra note".to_string(),
            page: Some(12),
            confidence: Some(0.5),
        })
        .unwrap();

    let document = source.export().unwrap();

    let mut target = new_store();
    target.import(&document).unwrap();

    assert_eq!(target.articles(), source.articles());
    assert_eq!(target.concepts(), source.concepts());
    assert_eq!(target.observations(), source.observations());
}

#[test]
fn import_clears_both_selections() {
    let mut source = new_store();
    source.load_sample_data().unwrap();
    let document = source.export().unwrap();

    let mut target = new_store();
    target.load_sample_data().unwrap();
    target
        .select_concept(Some(target.concepts()[0].id.clone()))
        .unwrap();

    target.import(&document).unwrap();

    assert_eq!(target.selected_article_id(), None);
    assert_eq!(target.selected_concept_id(), None);
}

#[test]
fn export_document_is_pretty_json_with_timestamp() {
    let mut store = new_store();
    store.load_sample_data().unwrap();

    let document = store.export().unwrap();

    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert!(value.get("exportedAt").and_then(|v| v.as_str()).is_some());
    assert!(document.contains('\n'));
}

#[test]
fn import_with_missing_collection_leaves_store_unchanged() {
    let mut store = new_store();
    store.load_sample_data().unwrap();
    let articles_before = store.articles().to_vec();
    let concepts_before = store.concepts().to_vec();

    let result = store.import(r#"{"articles": [], "concepts": []}"#);

    assert!(matches!(
        result,
        Err(StoreError::Backup(BackupError::InvalidFormat))
    ));
    assert_eq!(store.articles(), articles_before.as_slice());
    assert_eq!(store.concepts(), concepts_before.as_slice());
    assert_eq!(store.observations().len(), 7);
}

#[test]
fn import_with_malformed_json_leaves_store_unchanged() {
    let mut store = new_store();
    store.load_sample_data().unwrap();

    let result = store.import("not a backup");

    assert!(matches!(
        result,
        Err(StoreError::Backup(BackupError::Malformed(_)))
    ));
    assert_eq!(store.articles().len(), 3);
}

#[test]
fn observation_timestamps_round_trip_as_equal_instants() {
    let mut source = new_store();
    source.load_sample_data().unwrap();
    let document = source.export().unwrap();

    let mut target = new_store();
    target.import(&document).unwrap();

    let source_stamps: Vec<_> = source
        .observations()
        .iter()
        .map(|obs| (obs.id.clone(), obs.created_at))
        .collect();
    let target_stamps: Vec<_> = target
        .observations()
        .iter()
        .map(|obs| (obs.id.clone(), obs.created_at))
        .collect();
    assert_eq!(source_stamps, target_stamps);
}

fn new_store() -> ExplorerStore<SqliteSnapshotRepository> {
    ExplorerStore::new(SqliteSnapshotRepository::new(open_db_in_memory().unwrap()))
}
