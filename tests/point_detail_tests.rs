use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use std::{
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::fs;
use tower::ServiceExt;

async fn test_app(tag: &str) -> (axum::Router, sqlx::SqlitePool, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!(
        "ecopoints-{tag}-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", db_path.display());
    let pool = ecopoints::db::connect(&database_url)
        .await
        .expect("db connect failed");

    let state =
        ecopoints::server::AppState::new(pool.clone(), ecopoints::config::AssetsConfig::default());
    (ecopoints::server::app_router(state), pool, db_path)
}

async fn cleanup(pool: sqlx::SqlitePool, db_path: PathBuf) {
    pool.close().await;
    let wal_path = PathBuf::from(format!("{}-wal", db_path.display()));
    let shm_path = PathBuf::from(format!("{}-shm", db_path.display()));
    let _ = fs::remove_file(&wal_path).await;
    let _ = fs::remove_file(&shm_path).await;
    fs::remove_file(&db_path).await.unwrap();
}

async fn get_point(app: &axum::Router, id: i64) -> (StatusCode, serde_json::Value) {
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/points/{id}"))
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn detail_on_absent_id_is_404_with_message() {
    let (app, pool, db_path) = test_app("detail-404").await;

    let (status, body) = get_point(&app, 9999).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Point not found");

    cleanup(pool, db_path).await;
}

#[tokio::test]
async fn detail_returns_point_with_resolved_items() {
    let (app, pool, db_path) = test_app("detail-items").await;

    let point = ecopoints::db::create_point(
        &pool,
        &ecopoints::db::NewPoint {
            name: "Ponto Verde".to_string(),
            email: "v@v.com".to_string(),
            whatsapp: "5531999999999".to_string(),
            latitude: -19.9,
            longitude: -43.9,
            city: "Belo Horizonte".to_string(),
            uf: "MG".to_string(),
        },
        &[4, 6],
    )
    .await
    .unwrap();

    let (status, body) = get_point(&app, point.id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"].as_i64().unwrap(), point.id);
    assert_eq!(body["name"], "Ponto Verde");
    assert_eq!(
        body["image_url"],
        format!(
            "http://localhost:3333/uploads/{}",
            ecopoints::db::DEFAULT_POINT_IMAGE
        )
    );

    let titles: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Resíduos Eletrônicos", "Óleo de Cozinha"]);

    cleanup(pool, db_path).await;
}

#[tokio::test]
async fn detail_tolerates_point_with_zero_linked_items() {
    let (app, pool, db_path) = test_app("detail-empty").await;

    // At least one item is the caller's responsibility, not a store rule;
    // a point with no links must still resolve with an empty items list.
    let point = ecopoints::db::create_point(
        &pool,
        &ecopoints::db::NewPoint {
            name: "Ponto Solto".to_string(),
            email: "s@s.com".to_string(),
            whatsapp: "5541999999999".to_string(),
            latitude: -25.4,
            longitude: -49.3,
            city: "Curitiba".to_string(),
            uf: "PR".to_string(),
        },
        &[],
    )
    .await
    .unwrap();

    let (status, body) = get_point(&app, point.id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"], serde_json::json!([]));

    cleanup(pool, db_path).await;
}
