mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use tower::ServiceExt;

#[tokio::test]
async fn test_every_registered_category_renders_empty() {
    let TestApp { app, upload_root } = test_app();

    for slug in [
        "maorial",
        "weddings",
        "general_alterations",
        "custom_jobs",
        "curtains",
    ] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/{slug}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "GET /{slug}");
        let body = body_string(response).await;
        assert!(body.contains("No images in this category yet."));
        // A never-used category gets its folder created on first view.
        assert!(upload_root.path().join(slug).is_dir());
    }
}

#[tokio::test]
async fn test_unknown_category_is_404() {
    let TestApp { app, .. } = test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/attic").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_landing_page_links_all_categories() {
    let TestApp { app, .. } = test_app();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    for slug in ["maorial", "weddings", "general_alterations", "custom_jobs", "curtains"] {
        assert!(body.contains(&format!("href=\"/{slug}\"")), "missing {slug}");
    }
}

#[tokio::test]
async fn test_gallery_pairs_image_with_description() {
    let TestApp { app, .. } = test_app();
    let session = login(&app).await;

    upload_image(&app, &session, "weddings", "photo.png", "Bridal gown").await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/weddings").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("photo.png"));
    assert!(body.contains("Bridal gown"));
    assert!(body.contains("/uploads/weddings/photo.png"));
}

#[tokio::test]
async fn test_unlabeled_file_renders_with_empty_description() {
    let TestApp { app, upload_root } = test_app();

    // A file dropped into the folder without ever going through upload.
    let dir = upload_root.path().join("curtains");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("drape.jpg"), b"bytes").unwrap();

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/curtains").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("drape.jpg"));
}

#[tokio::test]
async fn test_gallery_lists_files_in_filename_order() {
    let TestApp { app, .. } = test_app();
    let session = login(&app).await;

    upload_image(&app, &session, "weddings", "b-late.png", "second").await;
    upload_image(&app, &session, "weddings", "a-early.png", "first").await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/weddings").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = body_string(response).await;

    let first = body.find("a-early.png").unwrap();
    let second = body.find("b-late.png").unwrap();
    assert!(first < second);
}
