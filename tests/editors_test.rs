//! Course creation and result publication editors.

#[macro_use]
mod common;

use actix_web::http::StatusCode;
use serde_json::json;

use common::*;

fn result_form<'a>(token: &'a str, physics_obtained: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("csrf_token", token),
        ("action", "save"),
        ("student_name", "Ali Khan"),
        ("father_name", "Imran Khan"),
        ("course_id", "sci"),
        ("part_id", "part1"),
        ("board_id", "fb"),
        ("academic_year", "2025"),
        ("roll_number", "R001"),
        ("verification_number", "V-77"),
        ("total:Physics", "100"),
        ("obtained:Physics", physics_obtained),
        ("total:Chemistry", "100"),
        ("obtained:Chemistry", "40"),
    ]
}

// --- Test 1 ---

#[actix_rt::test]
async fn test_publish_rejects_obtained_over_total_without_calling_api() {
    let api = MockApi::start().await;
    api.accept_login();
    api.with_catalog();
    let app = portal!(api);
    let mut browser = Browser::new();
    login(&app, &mut browser).await;

    let token = csrf_for(&app, &mut browser, "/admin/results/new").await;
    let page = browser.send(&app, browser.post("/admin/results", &result_form(&token, "120"))).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Obtained marks cannot exceed total marks for Physics"));
    // Typed values survive the re-render
    assert!(page.body.contains("value=\"120\""));
    assert_eq!(api.count("POST", "/api/admin/results"), 0);
}

// --- Test 2 ---

#[actix_rt::test]
async fn test_refresh_shows_one_mark_row_per_subject() {
    let api = MockApi::start().await;
    api.accept_login();
    api.with_catalog();
    let app = portal!(api);
    let mut browser = Browser::new();
    login(&app, &mut browser).await;

    let token = csrf_for(&app, &mut browser, "/admin/results/new").await;
    let req = browser.post(
        "/admin/results",
        &[("csrf_token", &token), ("action", "refresh"), ("course_id", "sci"), ("part_id", "part1")],
    );
    let page = browser.send(&app, req).await;
    assert!(page.body.contains("name=\"total:Physics\""));
    assert!(page.body.contains("name=\"obtained:Chemistry\""));
    assert!(!page.body.contains("Biology"));
    assert_eq!(api.count("POST", "/api/admin/results"), 0);
}

// --- Test 3 ---

#[actix_rt::test]
async fn test_publish_sends_denormalized_record() {
    let api = MockApi::start().await;
    api.accept_login();
    api.with_catalog();
    api.respond("POST", "/api/admin/results", 200, json!({"success": true}));
    api.respond("GET", "/api/admin/results", 200, json!({"results": {}}));
    let app = portal!(api);
    let mut browser = Browser::new();
    login(&app, &mut browser).await;

    let token = csrf_for(&app, &mut browser, "/admin/results/new").await;
    let page = browser.send(&app, browser.post("/admin/results", &result_form(&token, "85"))).await;
    assert_eq!(page.status, StatusCode::SEE_OTHER);
    assert_eq!(page.location.as_deref(), Some("/admin/results"));

    let sent = &api.calls("POST", "/api/admin/results")[0];
    assert_eq!(sent.authorization.as_deref(), Some("Bearer tok-admin-1"));
    let body = &sent.body;
    assert_eq!(body["courseName"], "Science");
    assert_eq!(body["partName"], "Year 1");
    assert_eq!(body["boardName"], "Federal Board");
    assert_eq!(body["rollNumber"], "R001");
    assert_eq!(body["subjects"]["Physics"], json!({"totalMarks": 100, "obtainedMarks": 85}));
    assert_eq!(body["subjects"]["Chemistry"], json!({"totalMarks": 100, "obtainedMarks": 40}));
    let date = body["issueDate"].as_str().unwrap();
    assert!(regex::Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap().is_match(date), "{date}");
    assert!(body.get("remarks").is_none());

    let page = browser.send(&app, browser.get("/admin/results")).await;
    assert!(page.body.contains("Result published successfully!"));
}

// --- Test 4 ---

#[actix_rt::test]
async fn test_publish_failure_keeps_form() {
    let api = MockApi::start().await;
    api.accept_login();
    api.with_catalog();
    api.respond("POST", "/api/admin/results", 400, json!({"message": "Duplicate roll number"}));
    let app = portal!(api);
    let mut browser = Browser::new();
    login(&app, &mut browser).await;

    let token = csrf_for(&app, &mut browser, "/admin/results/new").await;
    let page = browser.send(&app, browser.post("/admin/results", &result_form(&token, "85"))).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Error publishing result: Duplicate roll number"));
    assert!(page.body.contains("value=\"Ali Khan\""));
}

// --- Test 5 ---

#[actix_rt::test]
async fn test_editor_without_catalog_returns_to_panel() {
    let api = MockApi::start().await;
    api.accept_login();
    api.respond("GET", "/api/courses", 500, json!({"message": "Catalog unavailable"}));
    api.respond("GET", "/api/admin/results", 200, json!({"results": {}}));
    let app = portal!(api);
    let mut browser = Browser::new();
    login(&app, &mut browser).await;

    let page = browser.send(&app, browser.get("/admin/results/new")).await;
    assert_eq!(page.location.as_deref(), Some("/admin/results"));

    let page = browser.send(&app, browser.get("/admin/results")).await;
    assert!(page.body.contains("Error loading data: Catalog unavailable"));
}

// --- Test 6 ---

#[actix_rt::test]
async fn test_course_editor_rows_and_validation() {
    let api = MockApi::start().await;
    api.accept_login();
    let app = portal!(api);
    let mut browser = Browser::new();
    login(&app, &mut browser).await;

    let token = csrf_for(&app, &mut browser, "/admin/courses/new").await;

    let req = browser.post(
        "/admin/courses",
        &[("csrf_token", &token), ("course_name", "Science"), ("part_name", "Year 1"),
          ("part_subjects", "Physics"), ("action", "add_part")],
    );
    let page = browser.send(&app, req).await;
    assert_eq!(page.body.matches("name=\"part_name\"").count(), 2);
    assert!(page.body.contains("value=\"Year 1\""));

    let req = browser.post(
        "/admin/courses",
        &[("csrf_token", &token), ("course_name", "Science"),
          ("part_name", "Year 1"), ("part_subjects", "Physics"),
          ("part_name", ""), ("part_subjects", ""),
          ("action", "remove_part:0")],
    );
    let page = browser.send(&app, req).await;
    assert_eq!(page.body.matches("name=\"part_name\"").count(), 1);
    assert!(!page.body.contains("value=\"Year 1\""));

    let req = browser.post(
        "/admin/courses",
        &[("csrf_token", &token), ("course_name", " "), ("part_name", "Year 1"),
          ("part_subjects", "Physics"), ("action", "save")],
    );
    let page = browser.send(&app, req).await;
    assert!(page.body.contains("Please enter course name"));

    let req = browser.post(
        "/admin/courses",
        &[("csrf_token", &token), ("course_name", "Science"), ("part_name", "Year 1"),
          ("part_subjects", " , "), ("action", "save")],
    );
    let page = browser.send(&app, req).await;
    assert!(page.body.contains("Please add at least one part with subjects"));
    assert_eq!(api.count("POST", "/api/admin/courses"), 0);
}

// --- Test 7 ---

#[actix_rt::test]
async fn test_course_creation_numbers_parts_by_position() {
    let api = MockApi::start().await;
    api.accept_login();
    api.respond("POST", "/api/admin/courses", 200, json!({"success": true, "id": "c9"}));
    api.respond("GET", "/api/courses", 200, json!({"courses": {}}));
    let app = portal!(api);
    let mut browser = Browser::new();
    login(&app, &mut browser).await;

    let token = csrf_for(&app, &mut browser, "/admin/courses/new").await;
    let req = browser.post(
        "/admin/courses",
        &[("csrf_token", &token), ("course_name", " Science "),
          ("part_name", "Year 1"), ("part_subjects", "Physics, Chemistry ,"),
          ("part_name", "Skipped"), ("part_subjects", ""),
          ("part_name", "Year 3"), ("part_subjects", "Biology"),
          ("action", "save")],
    );
    let page = browser.send(&app, req).await;
    assert_eq!(page.location.as_deref(), Some("/admin/courses"));

    let sent = &api.calls("POST", "/api/admin/courses")[0];
    assert_eq!(sent.body, json!({
        "courseName": "Science",
        "parts": {
            "part1": {"name": "Year 1", "subjects": ["Physics", "Chemistry"]},
            "part3": {"name": "Year 3", "subjects": ["Biology"]}
        }
    }));

    let page = browser.send(&app, browser.get("/admin/courses")).await;
    assert!(page.body.contains("Course created successfully!"));
}
