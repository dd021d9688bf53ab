//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `article_explorer_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use article_explorer_core::db::open_db_in_memory;
use article_explorer_core::{core_version, ExplorerStore, SqliteSnapshotRepository};

fn main() {
    if let Err(err) = run() {
        eprintln!("article_explorer_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let mut store = ExplorerStore::load_or_default(SqliteSnapshotRepository::new(conn))?;
    store.load_sample_data()?;

    let graph = store.derive_graph();
    println!("article_explorer_core version={}", core_version());
    println!(
        "articles={} concepts={} observations={}",
        store.articles().len(),
        store.concepts().len(),
        store.observations().len()
    );
    println!("graph nodes={} edges={}", graph.nodes.len(), graph.edges.len());
    Ok(())
}
