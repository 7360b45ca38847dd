//! Router behavior against an in-memory catalog.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gdoc::catalog::load;
use gdoc::config::ServerConfig;
use gdoc::state::{CatalogStore, ReloadScheduler};
use gdoc::web::{build_router, AppState, CatalogServer};
use http_body_util::BodyExt;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const SOURCE: &str = r#"{
    "core": {
        "mod1": {"name": "mod1", "description": "first <module>", "path": "/p", "icon": "icon.png"},
        "mod2": {"name": "mod2", "description": "second", "icon": {"dark": "d.png", "light": "l.png"}}
    },
    "extra": {
        "mod1": {"name": "mod1", "description": "shadowed"}
    }
}"#;

fn test_app() -> (TempDir, Arc<CatalogStore>, Router) {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join("style.css"), "body { margin: 0 }").unwrap();
    let store = Arc::new(CatalogStore::new(load(SOURCE.as_bytes()).unwrap()));
    let state = Arc::new(AppState::new(store.clone(), "gsdk"));
    let router = build_router(state, tmp.path());
    (tmp, store, router)
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn library_page_lists_packages_and_modules() {
    let (_tmp, _store, app) = test_app();
    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>gsdk</title>"));
    let core = body.find(">core<").expect("core listed");
    let extra = body.find(">extra<").expect("extra listed");
    assert!(core < extra);
    assert!(body.contains("/module/?name=mod2&amp;package=core"));
    assert!(body.contains("first &lt;module&gt;"));
    assert!(body.contains("generation 1"));
}

#[tokio::test]
async fn module_page_renders_module() {
    let (_tmp, _store, app) = test_app();
    let (status, body) = get(app, "/module/?name=mod1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h3>mod1</h3>"));
    assert!(body.contains("<dt>Package</dt><dd>core</dd>"));
    assert!(body.contains("<img src='icon.png' alt='Icon'>"));
}

#[tokio::test]
async fn module_lookup_can_be_narrowed_by_package() {
    let (_tmp, _store, app) = test_app();
    let (status, body) = get(app, "/module/?name=mod1&package=extra").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("shadowed"));
}

#[tokio::test]
async fn unknown_module_is_not_found() {
    let (_tmp, _store, app) = test_app();
    let (status, body) = get(app.clone(), "/module/?name=missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "module not found: missing");

    let (status, _) = get(app, "/module/?name=mod2&package=extra").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn module_without_name_is_bad_request() {
    let (_tmp, _store, app) = test_app();
    for uri in ["/module/", "/module/?name=", "/module", "/module/?package=core"] {
        let (status, body) = get(app.clone(), uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body, "name is required");
    }
}

#[tokio::test]
async fn package_page_and_errors() {
    let (_tmp, _store, app) = test_app();

    let (status, body) = get(app.clone(), "/package/?name=core").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<h2>core</h2>"));
    assert!(body.contains(">mod2</a> second"));

    let (status, _) = get(app.clone(), "/package/?name=nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = get(app, "/package/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn static_files_are_served() {
    let (_tmp, _store, app) = test_app();
    let (status, body) = get(app.clone(), "/static/style.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "body { margin: 0 }");

    let (status, _) = get(app, "/static/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn requests_see_published_snapshot() {
    let (_tmp, store, app) = test_app();
    store.publish(load(br#"{"fresh":{"new_mod":{"description":"hello"}}}"#).unwrap());

    let (status, body) = get(app.clone(), "/module/?name=new_mod").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("hello"));

    let (status, _) = get(app, "/module/?name=mod1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn failed_reload_keeps_serving_old_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("g.json");
    std::fs::write(&source, SOURCE).unwrap();

    let server = CatalogServer::new(ServerConfig {
        source: source.clone(),
        static_dir: tmp.path().to_path_buf(),
        ..Default::default()
    })
    .expect("startup load");
    let app = server.router();

    std::fs::remove_file(&source).unwrap();
    let scheduler = ReloadScheduler::new(&source, server.store().clone());
    assert!(scheduler.tick().await.is_err());

    let (status, body) = get(app.clone(), "/module/?name=mod2").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("second"));
    let (status, _) = get(app, "/").await;
    assert_eq!(status, StatusCode::OK);
}

#[test]
fn startup_load_failure_is_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let source = tmp.path().join("g.json");
    std::fs::write(&source, r#"{"core":{"m":{"icon":42}}}"#).unwrap();

    let result = CatalogServer::new(ServerConfig {
        source,
        ..Default::default()
    });
    assert!(matches!(
        result,
        Err(gdoc::GdocError::Load(gdoc::LoadError::Icon { .. }))
    ));
}
