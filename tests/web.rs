use actix_web::http::{header, StatusCode};
use actix_web::{test, App};

use line_bidding::web::{configure, FORM_LIMIT};
use line_bidding::{assign_lines, parse_bid_data};

#[actix_web::test]
async fn index_serves_form() {
    let app = test::init_service(App::new().configure(configure)).await;
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("bid_data"));
}

#[actix_web::test]
async fn process_bids_returns_results() {
    let app = test::init_service(App::new().configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/process-bids")
        .set_form(serde_json::json!({"bid_data": "1 E001 10 20\n2 E002 10 30"}))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["employee_id"], "E001");
    assert_eq!(results[0]["awarded_line"], 10);
    assert_eq!(results[1]["awarded_line"], 30);
    assert!(results[1]["message"].is_null());
}

#[actix_web::test]
async fn unparsable_bids_are_bad_request() {
    let app = test::init_service(App::new().configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/process-bids")
        .set_form(serde_json::json!({"bid_data": "\n\n"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().starts_with("No valid bid data found"));
}

#[actix_web::test]
async fn download_csv_attaches_sheet() {
    let app = test::init_service(App::new().configure(configure)).await;
    let results = r#"[
        {"seniority_rank": 1, "employee_id": "E001", "employee_name": null,
         "awarded_line": 10, "message": null},
        {"seniority_rank": 2, "employee_id": "E002", "awarded_line": null,
         "message": "No preferred lines available"}
    ]"#;
    let req = test::TestRequest::post()
        .uri("/download-csv")
        .set_form(serde_json::json!({"results_data": results}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_DISPOSITION).unwrap(),
        "attachment; filename=bid_results.csv"
    );

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Seniority,Employee ID,Employee Name,Awarded Line,Message");
    assert_eq!(lines[1], "1,E001,,10,");
    assert_eq!(lines[2], "2,E002,,,No preferred lines available");
}

#[actix_web::test]
async fn download_csv_rejects_bad_json() {
    let app = test::init_service(App::new().configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/download-csv")
        .set_form(serde_json::json!({"results_data": "not json"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn download_csv_handles_large_rosters() {
    let app = test::init_service(App::new().configure(configure)).await;
    let text: String = (1..=300).map(|i| format!("{i} E{i:05} {i}\n")).collect();
    let results = assign_lines(&parse_bid_data(&text).unwrap());
    let results_data = serde_json::to_string(&results).unwrap();
    assert!(results_data.len() > 16 * 1024);

    let req = test::TestRequest::post()
        .uri("/download-csv")
        .set_form(serde_json::json!({ "results_data": results_data }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 301);
    assert_eq!(lines[300], "300,E00300,,300,");
}

#[actix_web::test]
async fn process_bids_handles_large_pastes() {
    let app = test::init_service(App::new().configure(configure)).await;
    let text: String = (1..=1000)
        .map(|i| format!("{i} E{i:05} {i} {} {}\n", i + 1, i + 2))
        .collect();
    let req = test::TestRequest::post()
        .uri("/process-bids")
        .set_form(serde_json::json!({ "bid_data": text }))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["results"].as_array().unwrap().len(), 1000);
}

#[actix_web::test]
async fn oversized_form_is_rejected_as_json() {
    let app = test::init_service(App::new().configure(configure)).await;
    let req = test::TestRequest::post()
        .uri("/process-bids")
        .set_form(serde_json::json!({ "bid_data": "1".repeat(FORM_LIMIT + 1) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}
