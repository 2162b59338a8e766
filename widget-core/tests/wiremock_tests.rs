//! Integration tests for the widget against a mocked WeatherAPI.com server.

use chrono::{Local, Timelike};
use widget_core::{
    FETCH_FAILED_MESSAGE, VALIDATION_MESSAGE, WeatherResult, WeatherWidget,
    location_message_at,
    provider::weatherapi::WeatherApiProvider,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn widget_for(server: &MockServer) -> WeatherWidget {
    let provider = WeatherApiProvider::with_base_url("TEST_KEY".to_string(), server.uri());
    WeatherWidget::new(Box::new(provider))
}

fn paris_body() -> serde_json::Value {
    serde_json::json!({
        "location": { "name": "Paris", "country": "France" },
        "current": { "temp_c": 22.0, "condition": { "text": "Partly cloudy" } }
    })
}

#[tokio::test]
async fn successful_search_renders_all_three_messages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut widget = widget_for(&server);
    widget.edit_query("Paris");
    widget.submit().await;

    assert!(!widget.state().busy);

    let lines = widget.display_lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "It's a pleasant 22°C. Enjoy the nice weather!");
    assert_eq!(lines[1], "Expect some clouds and sunshine.");
    assert_eq!(lines[2], location_message_at("Paris", Local::now().hour()));
}

#[tokio::test]
async fn query_is_trimmed_before_the_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut widget = widget_for(&server);
    widget.edit_query("  Paris  ");
    widget.submit().await;

    assert!(matches!(widget.state().result, WeatherResult::Loaded(_)));
}

#[tokio::test]
async fn http_error_status_shows_the_canned_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": { "code": 1006, "message": "No matching location found." }
        })))
        .mount(&server)
        .await;

    let mut widget = widget_for(&server);
    widget.edit_query("Nowhereville");
    widget.submit().await;

    assert_eq!(
        widget.state().result,
        WeatherResult::Failed { message: FETCH_FAILED_MESSAGE.to_string() }
    );
    assert!(!widget.state().busy);
    assert_eq!(widget.display_lines(), vec![FETCH_FAILED_MESSAGE.to_string()]);
}

#[tokio::test]
async fn malformed_body_shows_the_same_canned_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let mut widget = widget_for(&server);
    widget.edit_query("Paris");
    widget.submit().await;

    assert_eq!(
        widget.state().result,
        WeatherResult::Failed { message: FETCH_FAILED_MESSAGE.to_string() }
    );
    assert!(!widget.state().busy);
}

#[tokio::test]
async fn missing_fields_show_the_same_canned_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "location": { "name": "Paris" }
        })))
        .mount(&server)
        .await;

    let mut widget = widget_for(&server);
    widget.edit_query("Paris");
    widget.submit().await;

    assert_eq!(
        widget.state().result,
        WeatherResult::Failed { message: FETCH_FAILED_MESSAGE.to_string() }
    );
}

#[tokio::test]
async fn whitespace_query_issues_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .expect(0)
        .mount(&server)
        .await;

    let mut widget = widget_for(&server);
    widget.edit_query("   ");
    widget.submit().await;

    assert_eq!(
        widget.state().result,
        WeatherResult::Failed { message: VALIDATION_MESSAGE.to_string() }
    );
    assert!(!widget.state().busy);
}

#[tokio::test]
async fn resubmission_after_failure_can_succeed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "Nowhereville"))
        .respond_with(ResponseTemplate::new(400).set_body_string("{}"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/current.json"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_body()))
        .mount(&server)
        .await;

    let mut widget = widget_for(&server);

    widget.edit_query("Nowhereville");
    widget.submit().await;
    assert!(matches!(widget.state().result, WeatherResult::Failed { .. }));

    widget.edit_query("Paris");
    widget.submit().await;
    assert!(matches!(widget.state().result, WeatherResult::Loaded(_)));
    assert!(!widget.state().busy);
}
