#![allow(clippy::unwrap_used)]
// Integration tests for `AladhanClient` using wiremock.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hilal_api::{AladhanClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, AladhanClient) {
    let server = MockServer::start().await;
    let client = AladhanClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

fn cairo_day(gregorian: &str) -> serde_json::Value {
    json!({
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Imsak": "04:35",
                "Fajr": "04:45",
                "Sunrise": "06:12",
                "Maghrib": "18:02",
                "Isha": "19:21"
            },
            "date": {
                "readable": "01 Mar 2026",
                "gregorian": { "date": gregorian },
                "hijri": {
                    "date": "12-09-1447",
                    "year": "1447",
                    "month": { "number": 9, "en": "Ramaḍān" }
                }
            }
        }
    })
}

// ── Timings tests ───────────────────────────────────────────────────

#[tokio::test]
async fn timings_by_city_sends_padded_date_and_unwraps_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/timingsByCity"))
        .and(query_param("city", "Cairo"))
        .and(query_param("country", "Egypt"))
        .and(query_param("method", "2"))
        .and(query_param("date", "01-03-2026"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cairo_day("01-03-2026")))
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let entry = client
        .timings_by_city("Cairo", "Egypt", 2, date)
        .await
        .unwrap();

    assert_eq!(entry.timings.get("Fajr").unwrap(), "04:45");
    assert_eq!(entry.timings.get("Maghrib").unwrap(), "18:02");
    assert_eq!(entry.date.hijri.year, 1447);
    assert_eq!(entry.date.gregorian.date, "01-03-2026");
}

#[tokio::test]
async fn envelope_error_under_http_200_is_upstream_error() {
    let (server, client) = setup().await;

    // AlAdhan reports failures inside an HTTP 200 body.
    Mock::given(method("GET"))
        .and(path("/v1/timingsByCity"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 404,
            "status": "NOT FOUND",
            "data": "Invalid city or country"
        })))
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let result = client.timings_by_city("Nowhere", "Nowhere", 2, date).await;

    match result {
        Err(Error::Upstream {
            status, ref message, ..
        }) => {
            assert_eq!(status, 404);
            assert!(message.contains("Invalid city"), "got: {message}");
        }
        other => panic!("expected Upstream error, got: {other:?}"),
    }
}

#[tokio::test]
async fn http_failure_is_upstream_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/timingsByCity"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let result = client.timings_by_city("Cairo", "Egypt", 2, date).await;

    assert!(
        matches!(result, Err(Error::Upstream { status: 502, .. })),
        "expected Upstream 502, got: {result:?}"
    );
}

#[tokio::test]
async fn garbage_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v1/timingsByCity"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let result = client.timings_by_city("Cairo", "Egypt", 2, date).await;

    assert!(
        matches!(result, Err(Error::Deserialization { .. })),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Calendar tests ──────────────────────────────────────────────────

#[tokio::test]
async fn hijri_calendar_preserves_upstream_order() {
    let (server, client) = setup().await;

    let day = |greg: &str, hijri: &str, fajr: &str| {
        json!({
            "timings": { "Fajr": fajr, "Maghrib": "18:02" },
            "date": {
                "gregorian": { "date": greg },
                "hijri": { "date": hijri, "year": "1447" }
            }
        })
    };

    Mock::given(method("GET"))
        .and(path("/v1/hijriCalendarByCity"))
        .and(query_param("month", "9"))
        .and(query_param("year", "1447"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 200,
            "status": "OK",
            "data": [
                day("18-02-2026", "01-09-1447", "04:58"),
                day("19-02-2026", "02-09-1447", "04:57"),
                day("20-02-2026", "03-09-1447", "04:56"),
            ]
        })))
        .mount(&server)
        .await;

    let days = client
        .hijri_calendar_by_city("Cairo", "Egypt", 2, 9, 1447)
        .await
        .unwrap();

    assert_eq!(days.len(), 3);
    assert_eq!(days[0].date.hijri.date, "01-09-1447");
    assert_eq!(days[2].date.gregorian.date, "20-02-2026");
    assert_eq!(days[1].timings.get("Fajr").unwrap(), "04:57");
}
