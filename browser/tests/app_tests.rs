use axum::{
    Json, Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use browser::{AppState, LoadState, router};
use chrono::{TimeZone, Utc};
use common::Job;
use http_body_util::BodyExt;
use repository::JobRepository;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceExt;

fn job(index: usize, title: &str, company: &str) -> Job {
    Job {
        id: format!("job-{}-1730000000000", index),
        title: title.to_string(),
        company: company.to_string(),
        location: "Remote".to_string(),
        employment_type: "Full-time".to_string(),
        experience: "2+ years".to_string(),
        description: Some(format!("Work on {} things.", company)),
        requirements: None,
        benefits: None,
        salary: None,
        company_url: None,
        company_image_url: None,
        job_link: format!("https://{}.example/apply/{}", company.to_lowercase(), index),
        source: "LinkedIn".to_string(),
        posted_at: Utc.with_ymd_and_hms(2024, 10, 27, 8, 0, 0).unwrap(),
        company_type: None,
    }
}

fn fixture() -> Vec<Job> {
    vec![
        job(0, "Rust Engineer", "Acme"),
        job(1, "Data Analyst", "Acme"),
        job(2, "Site Reliability Engineer", "Globex"),
    ]
}

async fn get_text(state: &AppState, uri: &str) -> (StatusCode, String) {
    let response = router(state.clone())
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get_json(state: &AppState, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_text(state, uri).await;
    (status, serde_json::from_str(&body).unwrap())
}

fn row_count(html: &str) -> usize {
    html.matches("class=\"job-item").count()
}

/// Serves `app` on an ephemeral local port and returns its address.
async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn wait_settled(state: &AppState) {
    tokio::time::timeout(Duration::from_secs(10), state.settled())
        .await
        .expect("load did not settle");
}

#[tokio::test]
async fn company_search_then_select_first_result() {
    let jobs = fixture();
    let state = AppState::with_jobs(jobs.clone());

    let (status, html) = get_text(&state, "/?kind=company&q=acme").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row_count(&html), 2);
    assert!(html.find("Rust Engineer").unwrap() < html.find("Data Analyst").unwrap());
    assert!(!html.contains(&format!("data-job-id=\"{}\"", jobs[2].id)));

    let uri = format!("/?kind=company&q=acme&selected={}", jobs[0].id);
    let (_, html) = get_text(&state, &uri).await;
    assert_eq!(row_count(&html), 2);
    assert!(html.contains(&format!(
        "class=\"job-item selected\" href=\"/?kind=company&amp;q=acme&amp;selected={}\"",
        jobs[0].id
    )));
    assert!(html.contains("<h2>Rust Engineer</h2>"));
    assert!(html.contains(&format!(
        "href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Apply for this position",
        jobs[0].job_link
    )));
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let state = AppState::with_jobs(fixture());

    let (_, upper) = get_text(&state, "/?kind=company&q=ACME").await;
    let (_, lower) = get_text(&state, "/?kind=company&q=acme").await;
    assert_eq!(row_count(&upper), 2);
    assert_eq!(row_count(&lower), 2);
}

#[tokio::test]
async fn selection_survives_criterion_change() {
    let jobs = fixture();
    let state = AppState::with_jobs(jobs.clone());

    let uri = format!("/?kind=company&q=acme&selected={}", jobs[2].id);
    let (_, html) = get_text(&state, &uri).await;

    // Globex is filtered out of the list but still shown in the detail panel.
    assert_eq!(row_count(&html), 2);
    assert!(html.contains("<h2>Site Reliability Engineer</h2>"));
    assert!(html.contains(&format!(
        "<input type=\"hidden\" name=\"selected\" value=\"{}\">",
        jobs[2].id
    )));
}

#[tokio::test]
async fn no_selection_shows_company_summary() {
    let state = AppState::with_jobs(fixture());

    let (_, html) = get_text(&state, "/?kind=company&q=globex").await;
    assert_eq!(row_count(&html), 1);
    assert!(html.contains("All Companies"));
    assert!(html.contains("2 openings available"));
    assert!(html.contains("1 opening available"));
}

#[tokio::test]
async fn unknown_selection_and_kind_are_tolerated() {
    let state = AppState::with_jobs(fixture());

    let (status, html) = get_text(&state, "/?kind=salary&q=zzz&selected=job-99-0").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row_count(&html), 3);
    assert!(html.contains("All Companies"));
}

#[tokio::test]
async fn empty_result_notice() {
    let state = AppState::with_jobs(fixture());

    let (_, html) = get_text(&state, "/?kind=location&q=antarctica").await;
    assert_eq!(row_count(&html), 0);
    assert!(html.contains("No jobs match your search."));
}

#[tokio::test]
async fn loading_page_refreshes_itself() {
    let state = AppState::resolved(LoadState::Loading);

    let (_, html) = get_text(&state, "/").await;
    assert!(html.contains("Loading..."));
    assert!(html.contains("http-equiv=\"refresh\""));

    let (status, body) = get_json(&state, "/api/jobs").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Jobs are still loading");
}

#[tokio::test]
async fn http_500_surfaces_as_error_page() {
    let source = Router::new().route(
        "/jobs.json",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "unavailable") }),
    );
    let addr = serve(source).await;

    let repository = JobRepository::new(format!("http://{}/jobs.json", addr));
    let state = AppState::start(repository, Duration::from_secs(60));
    wait_settled(&state).await;

    let (_, html) = get_text(&state, "/").await;
    assert!(html.contains("Error Loading Jobs"));
    assert!(html.contains("500"));
    assert!(html.contains("Please try refreshing the page"));
    assert!(!html.contains("class=\"advisory\""));

    let (status, body) = get_json(&state, "/api/companies").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn object_body_surfaces_as_error_page() {
    let source = Router::new().route(
        "/jobs.json",
        get(|| async { Json(json!({ "jobs": [] })) }),
    );
    let addr = serve(source).await;

    let repository = JobRepository::new(format!("http://{}/jobs.json", addr));
    let state = AppState::start(repository, Duration::from_secs(60));
    wait_settled(&state).await;

    let (_, html) = get_text(&state, "/").await;
    assert!(html.contains("Error Loading Jobs"));
    assert!(html.contains("not an array"));
}

#[tokio::test]
async fn load_completion_clears_advisory() {
    let source = Router::new().route(
        "/jobs.json",
        get(|| async {
            Json(json!([{
                "title": "Rust Engineer",
                "company": "Acme",
                "location": "Remote",
                "employment_type": "Full-time",
                "experience": "2+ years",
                "job_link": "https://acme.example/apply/0",
                "source": "LinkedIn",
                "postedDateTime": { "$date": "2024-10-27T08:00:00Z" }
            }]))
        }),
    );
    let addr = serve(source).await;

    let repository = JobRepository::new(format!("http://{}/jobs.json", addr));
    let state = AppState::start(repository, Duration::from_secs(60));
    wait_settled(&state).await;

    let session = state.session().await;
    assert!(!session.show_advisory);
    assert!(matches!(session.load, LoadState::Loaded(ref jobs) if jobs.len() == 1));

    let (_, html) = get_text(&state, "/").await;
    assert!(html.contains("Job Listings"));
    assert!(html.contains("Search by Location"));
    assert!(!html.contains("class=\"advisory\""));
}

#[tokio::test]
async fn advisory_expires_while_still_loading() {
    let source = Router::new().route("/jobs.json", get(|| std::future::pending::<&'static str>()));
    let addr = serve(source).await;

    let repository = JobRepository::new(format!("http://{}/jobs.json", addr));
    let state = AppState::start(repository, Duration::from_millis(50));

    let (_, html) = get_text(&state, "/").await;
    assert!(html.contains("loading may seem slow"));

    tokio::time::sleep(Duration::from_millis(300)).await;

    let (_, html) = get_text(&state, "/").await;
    assert!(html.contains("Loading..."));
    assert!(!html.contains("loading may seem slow"));

    state.shutdown();
    wait_settled(&state).await;
    assert!(matches!(state.session().await.load, LoadState::Loading));
}

#[tokio::test]
async fn search_api_filters_jobs() {
    let jobs = fixture();
    let state = AppState::with_jobs(jobs.clone());

    let (status, body) = get_json(&state, "/api/jobs?kind=company&q=ACME").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["kind"], "company");
    assert_eq!(body["total_results"], 2);
    assert_eq!(body["results"][0]["id"], jobs[0].id.as_str());
    assert_eq!(body["results"][1]["id"], jobs[1].id.as_str());

    let (_, body) = get_json(&state, "/api/jobs").await;
    assert_eq!(body["total_results"], 3);
}

#[tokio::test]
async fn job_and_company_api() {
    let jobs = fixture();
    let state = AppState::with_jobs(jobs.clone());

    let (status, body) = get_json(&state, &format!("/api/jobs/{}", jobs[2].id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Site Reliability Engineer");
    assert_eq!(body["job_link"], jobs[2].job_link.as_str());

    let (status, _) = get_json(&state, "/api/jobs/job-42-0").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get_json(&state, "/api/companies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "name": "Acme", "openings": 2, "logo": null },
            { "name": "Globex", "openings": 1, "logo": null }
        ])
    );
}
