use std::sync::Once;
use std::time::Duration;

use catalog_engine::{
    DocumentSource, FailureKind, ListingType, Request, ReqwestSource, SourceSettings,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn source_for(server: &MockServer, settings: SourceSettings) -> ReqwestSource {
    ReqwestSource::new(SourceSettings {
        origin: server.uri(),
        ..settings
    })
    .expect("source")
}

#[tokio::test]
async fn document_requests_return_markup() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("<html>ok</html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let source = source_for(&server, SourceSettings::default());
    let body = source.fetch(&Request::home()).await.expect("fetch ok");
    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn ajax_requests_carry_xhr_header_and_query() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ajax/home/widget/updated-manga"))
        .and(query_param("page", "2"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"result":""}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = source_for(&server, SourceSettings::default());
    let body = source
        .fetch(&Request::recent(2, ListingType::Manga))
        .await
        .expect("fetch ok");
    assert_eq!(body, r#"{"result":""}"#);
}

#[tokio::test]
async fn missing_resource_reports_http_404() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/manga/nope"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = source_for(&server, SourceSettings::default());
    let err = source.fetch(&Request::detail("nope")).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn slow_response_times_out() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw("slow", "text/html"),
        )
        .mount(&server)
        .await;

    let settings = SourceSettings {
        request_timeout: Duration::from_millis(50),
        ..SourceSettings::default()
    };
    let source = source_for(&server, settings);
    let err = source.fetch(&Request::home()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("01234567890", "text/html"))
        .mount(&server)
        .await;

    let settings = SourceSettings {
        max_bytes: 10,
        ..SourceSettings::default()
    };
    let source = source_for(&server, settings);
    let err = source.fetch(&Request::home()).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(11)
        }
    );
}

#[tokio::test]
async fn unexpected_content_type_is_rejected() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8, 1, 2], "image/png"))
        .mount(&server)
        .await;

    let source = source_for(&server, SourceSettings::default());
    let err = source.fetch(&Request::home()).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::UnsupportedContentType {
            content_type: "image/png".into()
        }
    );
}

#[tokio::test]
async fn redirect_loop_exceeds_limit() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/home"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/home"))
        .mount(&server)
        .await;

    let settings = SourceSettings {
        redirect_limit: 1,
        ..SourceSettings::default()
    };
    let source = source_for(&server, settings);
    let err = source.fetch(&Request::home()).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::RedirectLimitExceeded);
}

#[test]
fn invalid_origin_is_rejected_up_front() {
    init_logging();
    let err = ReqwestSource::new(SourceSettings {
        origin: "not a url".into(),
        ..SourceSettings::default()
    })
    .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
