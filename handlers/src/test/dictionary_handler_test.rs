//! Unit tests for DictionaryHandler and parse_command. The Oxford API is replaced by an in-memory fetcher.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dbot_core::{Chat, DbotError, Handler, HandlerError, HandlerResponse, Message, User};
use http_client::{HttpError, HttpFetch, HttpRequest};
use oxford_dictionary::{EnvOxfordConfig, SPELLING_APOLOGY};

use crate::{parse_command, DictionaryHandler, DictionaryMode};

const HOUND: &str = r#"{"results":[{"lexicalEntries":[{"entries":[{
    "etymologies":["Old English hund"],
    "senses":[{"definitions":["a dog of a breed used for hunting"]}]
}]}]}]}"#;

/// Returns a fixed body (or 503 when `None`) and records requested URLs.
struct FixedFetcher {
    body: Option<&'static str>,
    urls: Mutex<Vec<String>>,
}

impl FixedFetcher {
    fn new(body: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            body,
            urls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl HttpFetch for FixedFetcher {
    async fn fetch(&self, request: &HttpRequest) -> Result<Vec<u8>, HttpError> {
        self.urls.lock().unwrap().push(request.url.clone());
        match self.body {
            Some(body) => Ok(body.as_bytes().to_vec()),
            None => Err(HttpError::Status {
                status: 503,
                body: String::new(),
            }),
        }
    }
}

fn handler(fetcher: Arc<FixedFetcher>) -> DictionaryHandler {
    let config = EnvOxfordConfig::new("id", "key").with_api_url("http://dict.test/en");
    DictionaryHandler::new(Arc::new(config), fetcher)
}

fn message(content: &str) -> Message {
    Message::incoming(
        "msg-1",
        User {
            id: 7,
            username: Some("reader".to_string()),
            first_name: None,
            last_name: None,
        },
        Chat {
            id: 99,
            chat_type: "group".to_string(),
        },
        content,
    )
}

#[test]
fn test_parse_command_modes() {
    assert_eq!(
        parse_command("/define hound").unwrap(),
        Some((DictionaryMode::Definition, "hound"))
    );
    assert_eq!(
        parse_command("/etymology hound").unwrap(),
        Some((DictionaryMode::Etymology, "hound"))
    );
    assert_eq!(
        parse_command("  /ETY   hot dog  ").unwrap(),
        Some((DictionaryMode::Etymology, "hot dog"))
    );
}

#[test]
fn test_parse_command_not_a_command() {
    assert_eq!(parse_command("hello there").unwrap(), None);
    assert_eq!(parse_command("/definer hound").unwrap(), None);
    assert_eq!(parse_command("").unwrap(), None);
}

#[test]
fn test_parse_command_empty_query() {
    assert!(matches!(parse_command("/define"), Err(HandlerError::EmptyContent)));
    assert!(matches!(parse_command("/ety    "), Err(HandlerError::EmptyContent)));
}

#[tokio::test]
async fn test_define_replies_with_definition() {
    let fetcher = FixedFetcher::new(Some(HOUND));
    let h = handler(fetcher.clone());

    let response = h.handle(&message("/define hound")).await.unwrap();

    assert_eq!(
        response,
        HandlerResponse::Reply("hound - a dog of a breed used for hunting".to_string())
    );
    assert_eq!(*fetcher.urls.lock().unwrap(), vec!["http://dict.test/en/hound".to_string()]);
}

#[tokio::test]
async fn test_etymology_replies_with_etymology() {
    let h = handler(FixedFetcher::new(Some(HOUND)));
    let response = h.handle(&message("/etymology hound")).await.unwrap();
    assert_eq!(response, HandlerResponse::Reply("hound - Old English hund".to_string()));
}

#[tokio::test]
async fn test_lookup_failure_replies_apology() {
    let h = handler(FixedFetcher::new(None));
    let response = h.handle(&message("/define hound")).await.unwrap();
    assert_eq!(response, HandlerResponse::Reply(SPELLING_APOLOGY.to_string()));
}

#[tokio::test]
async fn test_other_messages_are_ignored_without_lookup() {
    let fetcher = FixedFetcher::new(Some(HOUND));
    let h = handler(fetcher.clone());

    let response = h.handle(&message("what does hound mean?")).await.unwrap();

    assert_eq!(response, HandlerResponse::Ignore);
    assert!(fetcher.urls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_command_without_query_is_error() {
    let h = handler(FixedFetcher::new(Some(HOUND)));
    let err = h.handle(&message("/define")).await.unwrap_err();
    assert!(matches!(err, DbotError::Handler(HandlerError::EmptyContent)));
}
