//! Unit tests for HandlerChain: phase order, before() stopping the chain, Reply ending the handle phase.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dbot_core::{Chat, Handler, HandlerResponse, Message, Result, User};

use crate::{HandlerChain, LoggingHandler};

fn message() -> Message {
    Message::incoming(
        "msg-1",
        User {
            id: 1,
            username: None,
            first_name: None,
            last_name: None,
        },
        Chat {
            id: 1,
            chat_type: "private".to_string(),
        },
        "/define word",
    )
}

/// Records each phase call as `<phase>_<name>`.
struct Recorder {
    name: &'static str,
    allow: bool,
    response: HandlerResponse,
    log: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn new(name: &'static str, response: HandlerResponse, log: &Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self {
            name,
            allow: true,
            response,
            log: log.clone(),
        })
    }
}

#[async_trait]
impl Handler for Recorder {
    async fn before(&self, _message: &Message) -> Result<bool> {
        self.log.lock().unwrap().push(format!("before_{}", self.name));
        Ok(self.allow)
    }

    async fn handle(&self, _message: &Message) -> Result<HandlerResponse> {
        self.log.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> Result<()> {
        self.log
            .lock()
            .unwrap()
            .push(format!("after_{}:{:?}", self.name, response));
        Ok(())
    }
}

#[tokio::test]
async fn test_reply_ends_handle_phase_and_reaches_after() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(Recorder::new("first", HandlerResponse::Ignore, &log))
        .add_handler(Recorder::new("second", HandlerResponse::Reply("hi".to_string()), &log))
        .add_handler(Recorder::new("third", HandlerResponse::Continue, &log));

    let response = chain.handle(&message()).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("hi".to_string()));
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "before_first",
            "before_second",
            "before_third",
            "handle_first",
            "handle_second",
            "after_third:Reply(\"hi\")",
            "after_second:Reply(\"hi\")",
            "after_first:Reply(\"hi\")",
        ]
    );
}

#[tokio::test]
async fn test_before_false_stops_chain() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let blocker = Arc::new(Recorder {
        name: "blocker",
        allow: false,
        response: HandlerResponse::Continue,
        log: log.clone(),
    });
    let chain = HandlerChain::new()
        .add_handler(blocker)
        .add_handler(Recorder::new("replier", HandlerResponse::Reply("x".to_string()), &log));

    let response = chain.handle(&message()).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(*log.lock().unwrap(), vec!["before_blocker"]);
}

#[tokio::test]
async fn test_no_reply_returns_continue() {
    let chain = HandlerChain::new().add_handler(Arc::new(LoggingHandler));
    let response = chain.handle(&message()).await.unwrap();
    assert_eq!(response, HandlerResponse::Continue);
}
