use talkpython_core::{
    search_by_title, Config, TalkPythonClient, TalkPythonError, TalkPythonScraper,
};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING: &str = r#"<html>
  <head><title>Talk Python To Me - All episodes</title></head>
  <body>
    <table class="episodes table">
      <thead>
        <tr><th>Show</th><th>Date</th><th>Title</th><th>Guests</th></tr>
      </thead>
      <tbody>
        <tr>
          <td>#496</td>
          <td>Jan 13, 2025</td>
          <td><a href="/episodes/show/496/memray">Memray: The endgame Python memory profiler</a></td>
          <td>Pablo Galindo Salgado</td>
        </tr>
        <tr>
          <td>#495</td>
          <td>2025-01-06</td>
          <td><a href="/episodes/show/495/python-in-2025">Python in 2025</a></td>
          <td>Jodie Burchell</td>
        </tr>
        <tr>
          <td>#494</td>
          <td>December 30, 2024</td>
          <td><a href="/episodes/show/494/update-on-flet">Update on Flet</a></td>
          <td>Feodor Fitsner</td>
        </tr>
      </tbody>
    </table>
  </body>
</html>"#;

fn listing_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(LISTING, "text/html; charset=utf-8")
}

fn config_for(server: &MockServer) -> Config {
    Config::new(server.uri(), "/episodes/all", "test-key")
}

#[tokio::test]
async fn scrapes_episodes_from_listing_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .respond_with(listing_response())
        .mount(&server)
        .await;

    let scraper = TalkPythonScraper::new(config_for(&server)).expect("scraper");
    let episodes = scraper.fetch_episodes().await.expect("fetch ok");

    assert_eq!(episodes.len(), 3);

    let first = &episodes[0];
    assert_eq!(first.show_number, 496);
    assert_eq!(first.date.to_string(), "2025-01-13");
    assert_eq!(first.title, "Memray: The endgame Python memory profiler");
    assert_eq!(
        first.url.as_str(),
        format!("{}/episodes/show/496/memray", server.uri())
    );
    assert_eq!(first.guest, "Pablo Galindo Salgado");

    // Header row is not an episode; page order is preserved.
    let numbers: Vec<u32> = episodes.iter().map(|e| e.show_number).collect();
    assert_eq!(numbers, vec![496, 495, 494]);
}

#[tokio::test]
async fn search_filters_fetched_episodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .respond_with(listing_response())
        .mount(&server)
        .await;

    let scraper = TalkPythonScraper::new(config_for(&server)).expect("scraper");
    let episodes = scraper.fetch_episodes().await.expect("fetch ok");

    let results = search_by_title(&episodes, "PyThOn");
    let numbers: Vec<u32> = results.iter().map(|e| e.show_number).collect();
    assert_eq!(numbers, vec![496, 495]);
}

#[tokio::test]
async fn sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .and(header("User-Agent", "TalkPython API Client"))
        .respond_with(listing_response())
        .expect(1)
        .mount(&server)
        .await;

    let scraper = TalkPythonScraper::new(config_for(&server)).expect("scraper");
    scraper.fetch_episodes().await.expect("fetch ok");
}

#[tokio::test]
async fn sends_overridden_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .and(header("User-Agent", "Custom/1.0"))
        .respond_with(listing_response())
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config
        .headers
        .insert("User-Agent".to_string(), "Custom/1.0".to_string());

    let scraper = TalkPythonScraper::new(config).expect("scraper");
    scraper.fetch_episodes().await.expect("fetch ok");
}

#[tokio::test]
async fn with_client_fetches_through_the_given_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .and(header("User-Agent", "Prebuilt/1.0"))
        .respond_with(listing_response())
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config
        .headers
        .insert("User-Agent".to_string(), "Prebuilt/1.0".to_string());

    let client = TalkPythonClient::new(&config).expect("client");
    let scraper = TalkPythonScraper::with_client(client, config);

    let episodes = scraper.fetch_episodes().await.expect("fetch ok");
    assert_eq!(episodes.len(), 3);
}

#[tokio::test]
async fn fails_on_server_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let scraper = TalkPythonScraper::new(config_for(&server)).expect("scraper");
    let err = scraper.fetch_episodes().await.unwrap_err();

    match err {
        TalkPythonError::FetchStatus { url, status } => {
            assert_eq!(status, 500);
            assert_eq!(url, format!("{}/episodes/all", server.uri()));
        }
        other => panic!("expected FetchStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn yields_empty_list_without_episode_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body><h1>Maintenance</h1></body></html>", "text/html"),
        )
        .mount(&server)
        .await;

    let scraper = TalkPythonScraper::new(config_for(&server)).expect("scraper");
    let episodes = scraper.fetch_episodes().await.expect("fetch ok");
    assert!(episodes.is_empty());
}

#[tokio::test]
async fn aborts_on_malformed_row() {
    let page = r#"<html><body><table><tbody>
        <tr>
          <td>#10</td>
          <td>2025-02-10</td>
          <td><a href="/episodes/show/10/ten">Ten</a></td>
          <td>Guy Incognito</td>
        </tr>
        <tr>
          <td>#11</td>
          <td>2025-02-17</td>
          <td>Eleven without a link</td>
          <td>Nick Naylor</td>
        </tr>
    </tbody></table></body></html>"#;

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/episodes/all"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(page, "text/html"))
        .mount(&server)
        .await;

    let scraper = TalkPythonScraper::new(config_for(&server)).expect("scraper");
    let err = scraper.fetch_episodes().await.unwrap_err();
    assert!(matches!(err, TalkPythonError::Extraction(_)));
}
