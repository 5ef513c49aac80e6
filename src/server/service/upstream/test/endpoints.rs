use super::*;
use crate::server::model::flight_log::FlightLogSubmission;

/// Tests a flight log is posted as JSON with upstream field names.
///
/// Expected: one POST /flights with the submission body
#[tokio::test]
async fn submits_flight_log_as_json() {
    let test = TestBuilder::new()
        .with_healthy_upstream()
        .build()
        .await
        .unwrap();
    let dto = serde_json::from_value(fixture::flight_log::json()).unwrap();
    let submission = FlightLogSubmission::from_dto(dto, None).unwrap();

    client(&test.upstream_url())
        .submit_flight_log(&submission)
        .await
        .unwrap();

    let requests = test.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/flights");
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("application/json")
    );
    assert_eq!(
        requests[0].body_json(),
        fixture::flight_log::expected_upstream_body()
    );
}

/// Tests the airport code is URL-encoded into the charts query.
///
/// Expected: GET /charts/uploads with an encoded icao parameter
#[tokio::test]
async fn encodes_charts_query() {
    let test = TestBuilder::new()
        .with_healthy_upstream()
        .build()
        .await
        .unwrap();

    let payload = client(&test.upstream_url())
        .charts("ED&F")
        .await
        .unwrap();

    assert_eq!(payload.body.as_ref(), fixture::upstream::CHARTS_BODY.as_bytes());
    let requests = test.requests();
    assert_eq!(requests[0].path, "/charts/uploads");
    assert_eq!(requests[0].query.as_deref(), Some("icao=ED%26F"));
}

/// Tests statistics and recent flights hit their own paths with GET and no body.
///
/// Expected: GET /stats and GET /flights/recent
#[tokio::test]
async fn reads_use_get_without_body() {
    let test = TestBuilder::new()
        .with_healthy_upstream()
        .build()
        .await
        .unwrap();
    let client = client(&test.upstream_url());

    client.statistics().await.unwrap();
    client.recent_flights().await.unwrap();

    let requests = test.requests();
    let paths: Vec<_> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(paths, vec!["/stats", "/flights/recent"]);
    assert!(requests.iter().all(|r| r.method == Method::GET));
    assert!(requests.iter().all(|r| r.body.is_empty()));
}

/// Tests the base URL tolerates a trailing slash.
///
/// Expected: no double slash in the upstream path
#[tokio::test]
async fn trims_trailing_slash_from_base_url() {
    let test = TestBuilder::new()
        .with_healthy_upstream()
        .build()
        .await
        .unwrap();

    client(&format!("{}/", test.upstream_url()))
        .statistics()
        .await
        .unwrap();

    assert_eq!(test.requests()[0].path, "/stats");
}
