use article_explorer_core::db::open_db_in_memory;
use article_explorer_core::{
    ArticleStatus, Dimension, ExplorerStore, NewObservation, SqliteSnapshotRepository,
};

#[test]
fn create_article_appends_with_defaults() {
    let mut store = new_store();

    let id = store
        .create_article("Graph Tools", "A. Author", 2025, None)
        .unwrap();

    assert_eq!(store.articles().len(), 1);
    let article = &store.articles()[0];
    assert_eq!(article.id, id);
    assert_eq!(article.status, ArticleStatus::NotStarted);
    assert!(article.doi.is_none());
}

#[test]
fn remove_article_cascades_to_its_observations() {
    let mut store = new_store();
    let kept = store.create_article("Kept", "A", 2024, None).unwrap();
    let removed = store.create_article("Removed", "B", 2024, None).unwrap();
    let concept = store.create_concept("Topic", Dimension::Knowledge).unwrap();

    store
        .add_observation(observation(&kept, &concept, "stays"))
        .unwrap();
    store
        .add_observation(observation(&removed, &concept, "goes"))
        .unwrap();
    store
        .add_observation(observation(&removed, &concept, "also goes"))
        .unwrap();

    store.remove_article(&removed).unwrap();

    assert_eq!(store.articles().len(), 1);
    assert_eq!(store.articles()[0].id, kept);
    assert_eq!(store.observations().len(), 1);
    assert_eq!(store.observations()[0].text, "stays");
}

#[test]
fn remove_article_clears_matching_selection_only() {
    let mut store = new_store();
    let first = store.create_article("First", "A", 2024, None).unwrap();
    let second = store.create_article("Second", "B", 2024, None).unwrap();

    store.select_article(Some(first.clone())).unwrap();
    store.remove_article(&second).unwrap();
    assert_eq!(store.selected_article_id(), Some(first.as_str()));
    assert_eq!(
        store.selected_article().map(|article| article.title.as_str()),
        Some("First")
    );

    store.remove_article(&first).unwrap();
    assert_eq!(store.selected_article_id(), None);
}

#[test]
fn remove_unknown_ids_is_a_silent_noop() {
    let mut store = new_store();
    store.create_article("Only", "A", 2024, None).unwrap();

    store.remove_article("missing").unwrap();
    store.remove_observation("missing").unwrap();

    assert_eq!(store.articles().len(), 1);
}

#[test]
fn add_observation_generates_id_and_timestamp() {
    let mut store = new_store();
    let article = store.create_article("A", "A", 2024, None).unwrap();
    let concept = store.create_concept("C", Dimension::Purpose).unwrap();

    let id = store
        .add_observation(observation(&article, &concept, "note"))
        .unwrap();

    let stored = &store.observations()[0];
    assert_eq!(stored.id, id);
    assert!(stored.created_at > 0);
}

#[test]
fn observation_queries_preserve_insertion_order() {
    let mut store = new_store();
    let article = store.create_article("A", "A", 2024, None).unwrap();
    let other = store.create_article("B", "B", 2024, None).unwrap();
    let concept = store.create_concept("C", Dimension::Sector).unwrap();

    store
        .add_observation(observation(&article, &concept, "first"))
        .unwrap();
    store
        .add_observation(observation(&other, &concept, "elsewhere"))
        .unwrap();
    store
        .add_observation(observation(&article, &concept, "second"))
        .unwrap();

    let texts: Vec<_> = store
        .observations_for_article(&article)
        .into_iter()
        .map(|obs| obs.text)
        .collect();
    assert_eq!(texts, vec!["first", "second"]);

    assert_eq!(store.observations_for_concept(&concept).len(), 3);
}

#[test]
fn concept_selection_takes_priority_over_article_selection() {
    let mut store = new_store();
    let article = store.create_article("A", "A", 2024, None).unwrap();
    let other = store.create_article("B", "B", 2024, None).unwrap();
    let concept = store.create_concept("C", Dimension::Decision).unwrap();
    let unrelated = store.create_concept("D", Dimension::Knowledge).unwrap();

    store
        .add_observation(observation(&article, &unrelated, "article scoped"))
        .unwrap();
    store
        .add_observation(observation(&other, &concept, "concept scoped"))
        .unwrap();

    store.select_article(Some(article.clone())).unwrap();
    store.select_concept(Some(concept.clone())).unwrap();

    let visible = store.visible_observations();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "concept scoped");

    store.select_concept(None).unwrap();
    let visible = store.visible_observations();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].text, "article scoped");

    store.select_article(None).unwrap();
    assert!(store.visible_observations().is_empty());
}

#[test]
fn clear_resets_concepts_to_default_set_and_empties_the_rest() {
    let mut store = new_store();
    let article = store.create_article("A", "A", 2024, None).unwrap();
    let concept = store.create_concept("Custom", Dimension::Purpose).unwrap();
    store
        .add_observation(observation(&article, &concept, "note"))
        .unwrap();
    store.select_article(Some(article)).unwrap();
    store.select_concept(Some(concept)).unwrap();

    store.clear().unwrap();

    assert!(store.articles().is_empty());
    assert!(store.observations().is_empty());
    assert_eq!(store.concepts().len(), 8);
    assert!(store
        .concepts()
        .iter()
        .any(|concept| concept.label == "Machine Learning" && !concept.is_root()));
    assert_eq!(store.selected_article_id(), None);
    assert_eq!(store.selected_concept_id(), None);
}

#[test]
fn load_sample_data_selects_first_article_and_keeps_concepts() {
    let mut store = new_store();
    let custom = store.create_concept("Custom", Dimension::Sector).unwrap();

    store.load_sample_data().unwrap();

    assert_eq!(store.articles().len(), 3);
    assert_eq!(store.observations().len(), 7);
    assert_eq!(
        store.selected_article_id(),
        Some(store.articles()[0].id.as_str())
    );
    assert!(store.concepts().iter().any(|concept| concept.id == custom));
}

#[test]
fn create_concept_starts_as_root() {
    let mut store = new_store();
    let id = store.create_concept("Topic", Dimension::Knowledge).unwrap();

    let concept = store
        .concepts()
        .iter()
        .find(|concept| concept.id == id)
        .unwrap();
    assert!(concept.is_root());
    assert_eq!(concept.dimension, Dimension::Knowledge);
}

fn new_store() -> ExplorerStore<SqliteSnapshotRepository> {
    ExplorerStore::new(SqliteSnapshotRepository::new(open_db_in_memory().unwrap()))
}

fn observation(article_id: &str, concept_id: &str, text: &str) -> NewObservation {
    NewObservation {
        article_id: article_id.to_string(),
        concept_id: concept_id.to_string(),
        text: text.to_string(),
        page: None,
        confidence: None,
    }
}
