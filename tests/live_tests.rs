use feedly::streams::StreamContentParams;
use feedly::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};

/// Build a client from the FEEDLY_ACCESS_TOKEN environment variable.
fn live_client() -> Client {
    let token = std::env::var("FEEDLY_ACCESS_TOKEN").expect("FEEDLY_ACCESS_TOKEN not set");

    let mut headers = HeaderMap::new();
    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .expect("invalid FEEDLY_ACCESS_TOKEN value");
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);

    let http_client = reqwest::blocking::Client::builder()
        .default_headers(headers)
        .build()
        .expect("failed to build HTTP client");

    Client::new(http_client)
}

#[test]
#[ignore] // Run with: cargo test --test live_tests -- --ignored
fn test_profile_list() {
    let client = live_client();

    let (response, _) = client.profile.list().expect("failed to fetch profile");
    assert!(response.profile.id.is_some(), "expected a profile id");

    println!("Profile test passed: {:?}", response.profile.email);
}

#[test]
#[ignore]
fn test_collections_list() {
    let client = live_client();

    let (response, _) = client
        .collections
        .list(None)
        .expect("failed to list collections");

    println!("Collections test passed: {} collections", response.collections.len());
}

#[test]
#[ignore]
fn test_stream_content() {
    let client = live_client();

    let (profile, _) = client.profile.list().expect("failed to fetch profile");
    let user_id = profile.profile.id.expect("expected a profile id");

    let params = StreamContentParams {
        count: Some(5),
        ..Default::default()
    };
    let (response, _) = client
        .streams
        .content(
            &format!("user/{}/category/global.all", user_id),
            Some(&params),
        )
        .expect("failed to fetch stream content");

    println!(
        "Stream test passed: {} items",
        response.stream.items.map(|items| items.len()).unwrap_or(0)
    );
}

#[test]
#[ignore]
fn test_feed_metadata() {
    let client = live_client();

    let (response, _) = client
        .feeds
        .metadata("feed/http://feeds.arstechnica.com/arstechnica/index")
        .expect("failed to fetch feed metadata");
    assert!(response.feed.title.is_some(), "expected a feed title");

    println!("Feed test passed: {:?}", response.feed.title);
}

#[test]
#[ignore]
fn test_unauthorized_error() {
    let client = Client::new(reqwest::blocking::Client::new());

    let result = client.profile.list();
    assert!(result.is_err(), "expected error without credentials");

    let err = result.unwrap_err();
    assert!(err.is_unauthorized(), "expected a 401, got: {}", err);

    println!("Unauthorized test passed: {}", err);
}

#[test]
#[ignore]
fn test_opml_export() {
    let client = live_client();

    let (response, _) = client.opml.export().expect("failed to export OPML");
    assert!(response.opml.body.is_some(), "expected an OPML body");

    println!("OPML test passed");
}
