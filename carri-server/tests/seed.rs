mod common;

use carri_server::db::repository::CatalogRepository;
use carri_server::seed::{self, SeedTarget};
use common::spawn;

#[tokio::test]
async fn test_seed_all_populates_every_table() {
    let app = spawn().await;
    let reports = seed::run(&app.state, SeedTarget::All, false).await.unwrap();
    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| !r.skipped));

    assert!(app.state.companies().exists().await.unwrap());
    assert_eq!(app.state.products().count().await.unwrap(), 3);
    assert_eq!(app.state.suppliers().count().await.unwrap(), 6);
    assert_eq!(app.state.employees().count().await.unwrap(), 4);

    let products = app.get("/productos/").await;
    assert!(products.body.contains("Total de productos: <strong>3</strong>"));
    assert!(products.body.contains("$450.00"));
}

#[tokio::test]
async fn test_seed_skips_populated_tables() {
    let app = spawn().await;
    seed::run(&app.state, SeedTarget::Products, false).await.unwrap();

    let reports = seed::run(&app.state, SeedTarget::Products, false).await.unwrap();
    assert!(reports[0].skipped);
    assert!(reports[0].created.is_empty());
    assert_eq!(app.state.products().count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_seed_clear_replaces_rows() {
    let app = spawn().await;
    seed::run(&app.state, SeedTarget::Suppliers, false).await.unwrap();
    seed::run(&app.state, SeedTarget::Company, false).await.unwrap();

    let reports = seed::run(&app.state, SeedTarget::Suppliers, true).await.unwrap();
    assert_eq!(reports[0].cleared, 6);
    assert_eq!(reports[0].created.len(), 6);
    assert_eq!(app.state.suppliers().count().await.unwrap(), 6);

    let reports = seed::run(&app.state, SeedTarget::Company, true).await.unwrap();
    assert_eq!(reports[0].cleared, 1);
    assert_eq!(reports[0].created.len(), 1);
}
