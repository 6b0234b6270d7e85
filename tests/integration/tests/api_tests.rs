//! API Integration Tests
//!
//! Each test spins up the real router on an ephemeral port with a fresh
//! in-memory store and drives it over HTTP.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create(server: &TestServer, body: &StudentCreate) -> Student {
    let response = server.post("/students", body).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Root & Health Tests
// ============================================================================

#[tokio::test]
async fn test_root_message() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"message": "Welcome to student DBS"}));
}

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_request_id_header_is_set() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/students").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Student Tests
// ============================================================================

#[tokio::test]
async fn test_demo_data_seeded_when_enabled() {
    let config = test_config(&[("SEED_DEMO_DATA", "true")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let response = server.get("/students").await.unwrap();
    let students: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].first_name, "Alice");
    assert_eq!(students[0].age, 20);
    assert_eq!(students[1].email, "bob.smith@student-university.co.uk");
    assert_eq!(students[1].phone, "+19876543210");
}

#[tokio::test]
async fn test_create_student() {
    let server = TestServer::start().await.unwrap();

    let student = create(&server, &StudentCreate::jane_doe().with_phone("(123) 456-7890")).await;

    assert!(student.age > 18);
    assert_eq!(student.phone, "+1234567890");
    assert_eq!(student.gender, "Female");
    assert_eq!(student.email, "jane.doe@student-university.co.uk");
    assert!(student.is_active);
    assert!(student.updated_at >= student.created_at);
    assert!(!student.id.is_empty());
}

#[tokio::test]
async fn test_duplicate_names_get_suffixed_emails() {
    let server = TestServer::start().await.unwrap();

    let first = create(&server, &StudentCreate::jane_doe()).await;
    let second = create(&server, &StudentCreate::jane_doe()).await;

    assert_eq!(first.email, "jane.doe@student-university.co.uk");
    assert_eq!(second.email, "jane.doe2@student-university.co.uk");
}

#[tokio::test]
async fn test_configured_email_domain() {
    let config = test_config(&[("STUDENT_EMAIL_DOMAIN", "Uni.Example")]).unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    let student = create(&server, &StudentCreate::jane_doe()).await;
    assert_eq!(student.email, "jane.doe@uni.example");
}

#[tokio::test]
async fn test_create_student_validation() {
    let server = TestServer::start().await.unwrap();

    // Age must exceed 18
    let response = server
        .post("/students", &StudentCreate::new("Jane", "Doe", 18))
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");
    assert!(body.error.details.unwrap().get("age").is_some());

    // Too few digits
    let response = server
        .post("/students", &StudentCreate::jane_doe().with_phone("12-34"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    // Unknown gender
    let response = server
        .post("/students", &StudentCreate::jane_doe().with_gender("robot"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    // Nothing was stored
    let response = server.get("/students").await.unwrap();
    let students: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(students.is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/students", "{\"first_name\":").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.error.code, "MALFORMED_BODY");
}

#[tokio::test]
async fn test_lowercase_gender_accepted() {
    let server = TestServer::start().await.unwrap();

    let student = create(&server, &StudentCreate::jane_doe().with_gender("other")).await;
    assert_eq!(student.gender, "Other");
}

#[tokio::test]
async fn test_get_student() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &StudentCreate::jane_doe()).await;

    let response = server.get(&format!("/students/{}", created.id)).await.unwrap();
    let found: Student = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.id, created.id);

    let missing = "00000000-0000-4000-8000-000000000000";
    let response = server.get(&format!("/students/{missing}")).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn test_partial_update_recomputes_email() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &StudentCreate::jane_doe()).await;

    let response = server
        .put(&format!("/students/{}", created.id), &json!({"first_name": "X"}))
        .await
        .unwrap();
    let updated: Student = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.age, 25);
    assert_eq!(updated.first_name, "X");
    assert_eq!(updated.last_name, "Doe");
    assert_eq!(updated.email, "x.doe@student-university.co.uk");
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_update_validation_and_missing() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &StudentCreate::jane_doe()).await;

    let response = server
        .put(&format!("/students/{}", created.id), &json!({"age": 10}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    let missing = "00000000-0000-4000-8000-000000000000";
    let response = server
        .put(&format!("/students/{missing}"), &json!({"age": 30}))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_soft_delete() {
    let server = TestServer::start().await.unwrap();
    let created = create(&server, &StudentCreate::jane_doe()).await;
    let path = format!("/students/{}", created.id);

    let response = server.delete(&path).await.unwrap();
    let deleted: Student = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!deleted.is_active);

    // Second delete of the same id
    let response = server.delete(&path).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "UNKNOWN_STUDENT");

    // Hidden from reads and updates
    assert_status(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    let response = server.put(&path, &json!({"age": 30})).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get("/students").await.unwrap();
    let students: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(students.is_empty());

    // The deactivated record still reserves its address
    let again = create(&server, &StudentCreate::jane_doe()).await;
    assert_eq!(again.email, "jane.doe2@student-university.co.uk");
}

#[tokio::test]
async fn test_invalid_id_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let response = server.delete("/students/not-a-uuid").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_pagination() {
    let server = TestServer::start().await.unwrap();
    for i in 0..12 {
        create(&server, &StudentCreate::new("Sam", &format!("Lee{i}"), 20 + i)).await;
    }

    let response = server
        .get("/students/search?first_name=SAM&skip=10&limit=10")
        .await
        .unwrap();
    let page: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn test_search_sorting() {
    let server = TestServer::start().await.unwrap();
    create(&server, &StudentCreate::new("zed", "Doe", 40)).await;
    create(&server, &StudentCreate::new("Amy", "Doe", 30)).await;
    create(&server, &StudentCreate::new("mia", "Doe", 35)).await;

    let names = |students: Vec<Student>| -> Vec<String> {
        students.into_iter().map(|s| s.first_name).collect()
    };

    // Default: first_name ascending, case-insensitive
    let response = server.get("/students/search").await.unwrap();
    let page: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(page), ["Amy", "mia", "zed"]);

    let response = server
        .get("/students/search?sort_by=age&sort_order=DESC")
        .await
        .unwrap();
    let page: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(page), ["zed", "mia", "Amy"]);

    // Unknown key keeps insertion order
    let response = server.get("/students/search?sort_by=zzz").await.unwrap();
    let page: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(names(page), ["zed", "Amy", "mia"]);
}

#[tokio::test]
async fn test_search_filters() {
    let server = TestServer::start().await.unwrap();
    create(&server, &StudentCreate::new("Jane", "Doe", 25)).await;
    create(&server, &StudentCreate::new("John", "Smith", 30).with_gender("Male")).await;

    let response = server
        .get("/students/search?gender=Male&min_age=30&max_age=30")
        .await
        .unwrap();
    let page: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].first_name, "John");

    let response = server.get("/students/search?email=DOE@").await.unwrap();
    let page: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].last_name, "Doe");
}

#[tokio::test]
async fn test_search_excludes_soft_deleted() {
    let server = TestServer::start().await.unwrap();
    let jane = create(&server, &StudentCreate::new("Jane", "Doe", 25)).await;
    let john = create(&server, &StudentCreate::new("John", "Doe", 30)).await;

    let response = server.delete(&format!("/students/{}", jane.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/students/search?last_name=doe").await.unwrap();
    let page: Vec<Student> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, john.id);

    let response = server.delete(&format!("/students/{}", john.id)).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/students/search?last_name=doe").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NO_MATCHING_STUDENTS");
}

#[tokio::test]
async fn test_rate_limit_returns_error_envelope() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config).await.unwrap();

    assert_status(server.get("/students").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    let response = server.get("/students").await.unwrap();
    assert_eq!(
        response.headers()["content-type"],
        "application/json"
    );
    let body: ErrorEnvelope = assert_json(response, StatusCode::TOO_MANY_REQUESTS)
        .await
        .unwrap();
    assert_eq!(body.error.code, "RATE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn test_search_no_matches_is_not_found() {
    let server = TestServer::start().await.unwrap();
    create(&server, &StudentCreate::jane_doe()).await;

    let response = server.get("/students/search?min_age=200").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NO_MATCHING_STUDENTS");
    assert_eq!(body.error.message, "No matching students found");
}

#[tokio::test]
async fn test_search_rejects_bad_params() {
    let server = TestServer::start().await.unwrap();
    create(&server, &StudentCreate::jane_doe()).await;

    for query in ["limit=0", "limit=101", "skip=-1", "min_age=abc"] {
        let response = server
            .get(&format!("/students/search?{query}"))
            .await
            .unwrap();
        assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
    }
}

// ============================================================================
// Task Tests
// ============================================================================

#[tokio::test]
async fn test_task_crud() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post(
            "/tasks",
            &json!({"task_name": "Essay", "task_description": "Draft intro"}),
        )
        .await
        .unwrap();
    let task: Task = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(task.status, "pending");
    assert_eq!(task.priority, "low");
    assert_eq!(task.category.as_deref(), Some("other"));
    assert!(task.due_date.is_none());

    let path = format!("/tasks/{}", task.id);
    let response = server
        .put(
            &path,
            &json!({
                "task_name": "Essay v2",
                "task_description": "Full draft",
                "status": "in_progress",
                "priority": "high",
                "due_date": "2030-01-01T00:00:00Z",
                "category": "work"
            }),
        )
        .await
        .unwrap();
    let replaced: Task = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(replaced.id, task.id);
    assert_eq!(replaced.created_at, task.created_at);
    assert_eq!(replaced.task_name, "Essay v2");
    assert_eq!(replaced.status, "in_progress");
    assert!(replaced.due_date.is_some());

    let response = server.get("/tasks").await.unwrap();
    let tasks: Vec<Task> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tasks.len(), 1);

    let response = server.delete(&path).await.unwrap();
    let removed: Task = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(removed.task_description, "Full draft");

    assert_status(server.get(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_status(server.delete(&path).await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_task_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/tasks", &json!({"task_name": "", "task_description": ""}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    let response = server
        .post(
            "/tasks",
            &json!({"task_name": "x", "task_description": "", "status": "done"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

// ============================================================================
// Vehicle Tests
// ============================================================================

#[tokio::test]
async fn test_vehicle_create_and_get() {
    let server = TestServer::start().await.unwrap();

    let mut body = VehicleCreate::new("Kia", "Sportage");
    body.body_type = "SUV".to_string();
    body.fuel_type = "Plugin Hybrid".to_string();
    body.transmission = "Automatic".to_string();

    let response = server.post("/vehicles", &body).await.unwrap();
    let vehicle: Vehicle = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(vehicle.body_type, "SUV");
    assert_eq!(vehicle.fuel_type, "Plugin Hybrid");
    assert_eq!(vehicle.engine_size, 2.0);
    assert!(vehicle.is_available);
    assert_eq!(vehicle.created_at, vehicle.updated_at);

    let response = server.get(&format!("/vehicles/{}", vehicle.id)).await.unwrap();
    let found: Vehicle = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(found.id, vehicle.id);
    assert_eq!(found.model, "Sportage");
}

#[tokio::test]
async fn test_vehicle_list_in_intake_order() {
    let server = TestServer::start().await.unwrap();

    for (make, model) in [("Skoda", "Octavia"), ("BMW", "320d"), ("Fiat", "500")] {
        let response = server
            .post("/vehicles", &VehicleCreate::new(make, model))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/vehicles").await.unwrap();
    let vehicles: Vec<Vehicle> = assert_json(response, StatusCode::OK).await.unwrap();
    let makes: Vec<&str> = vehicles.iter().map(|v| v.make.as_str()).collect();
    assert_eq!(makes, ["Skoda", "BMW", "Fiat"]);
}

#[tokio::test]
async fn test_vehicle_validation() {
    let server = TestServer::start().await.unwrap();

    let mut zero_engine = VehicleCreate::new("Renault", "Zoe");
    zero_engine.engine_size = 0.0;
    let response = server.post("/vehicles", &zero_engine).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body.error.code, "VALIDATION_ERROR");

    let mut negative_price = VehicleCreate::new("Renault", "Clio");
    negative_price.vehicle_price = -1.0;
    let response = server.post("/vehicles", &negative_price).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    let mut bad_body = VehicleCreate::new("Renault", "Megane");
    bad_body.body_type = "Limousine".to_string();
    let response = server.post("/vehicles", &bad_body).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    let response = server.get("/vehicles").await.unwrap();
    let vehicles: Vec<Vehicle> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(vehicles.is_empty());
}

#[tokio::test]
async fn test_unknown_vehicle_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let response = server
        .get("/vehicles/00000000-0000-0000-0000-000000000000")
        .await
        .unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
}
