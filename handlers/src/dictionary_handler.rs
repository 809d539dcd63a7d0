//! Chat commands for the Oxford dictionary: `/define <term>` and `/etymology <term>` (alias `/ety`).

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Handler, HandlerError, HandlerResponse, Message, Result};
use http_client::HttpFetch;
use oxford_dictionary::{OxfordConfig, OxfordDictionaryCommand};
use tracing::{info, instrument};

/// Which text the reply should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryMode {
    Definition,
    Etymology,
}

/// Splits `"/define some words"` into the mode and the trimmed query.
///
/// `Ok(None)` when the message is not a dictionary command, `Err(EmptyContent)` when the command has no query.
/// Command names are case-insensitive.
pub fn parse_command(
    text: &str,
) -> std::result::Result<Option<(DictionaryMode, &str)>, HandlerError> {
    let text = text.trim_start();
    let (name, rest) = match text.find(char::is_whitespace) {
        Some(i) => (&text[..i], &text[i..]),
        None => (text, ""),
    };

    let mode = match name.to_ascii_lowercase().as_str() {
        "/define" => DictionaryMode::Definition,
        "/etymology" | "/ety" => DictionaryMode::Etymology,
        _ => return Ok(None),
    };

    let query = rest.trim();
    if query.is_empty() {
        return Err(HandlerError::EmptyContent);
    }
    Ok(Some((mode, query)))
}

/// Replies to dictionary commands; ignores everything else.
#[derive(Clone)]
pub struct DictionaryHandler {
    definition: OxfordDictionaryCommand,
    etymology: OxfordDictionaryCommand,
}

impl DictionaryHandler {
    pub fn new(config: Arc<dyn OxfordConfig>, fetcher: Arc<dyn HttpFetch>) -> Self {
        let definition = OxfordDictionaryCommand::new(config, fetcher);
        let etymology = definition.clone().with_etymology(true);
        Self {
            definition,
            etymology,
        }
    }

    fn command(&self, mode: DictionaryMode) -> &OxfordDictionaryCommand {
        match mode {
            DictionaryMode::Definition => &self.definition,
            DictionaryMode::Etymology => &self.etymology,
        }
    }
}

#[async_trait]
impl Handler for DictionaryHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some((mode, query)) = parse_command(&message.content)? else {
            return Ok(HandlerResponse::Ignore);
        };

        info!(
            user_id = message.user.id,
            mode = ?mode,
            query = %query,
            "step: dictionary command"
        );

        let mut reply = None;
        self.command(mode)
            .execute(|text| reply = Some(text), query)
            .await;

        Ok(reply.map_or(HandlerResponse::Stop, HandlerResponse::Reply))
    }
}
