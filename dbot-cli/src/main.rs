//! dbot CLI: look words up in the Oxford dictionary from the terminal. Config from env / `.env`.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dbot_cli::{AppConfig, Cli, Commands};
use dbot_core::{init_tracing, Chat, HandlerResponse, Message, User};
use handlers::{DictionaryHandler, HandlerChain, LoggingHandler};
use http_client::{HttpFetch, ReqwestFetcher};
use oxford_dictionary::{OxfordConfig, OxfordDictionaryCommand};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    init_tracing(&config.log_file)?;

    let fetcher: Arc<dyn HttpFetch> = Arc::new(ReqwestFetcher::new(config.oxford.timeout())?);
    let oxford: Arc<dyn OxfordConfig> = Arc::new(config.oxford.clone());
    let text = cli.command.text();

    match cli.command {
        Commands::Define { .. } | Commands::Etymology { .. } => {
            let etymology = matches!(cli.command, Commands::Etymology { .. });
            OxfordDictionaryCommand::new(oxford, fetcher)
                .with_etymology(etymology)
                .execute(|reply| println!("{}", reply), &text)
                .await;
        }
        Commands::Ask { .. } => {
            let chain = HandlerChain::new()
                .add_handler(Arc::new(LoggingHandler))
                .add_handler(Arc::new(DictionaryHandler::new(oxford, fetcher)));
            let message = Message::incoming("cli-1", local_user(), local_chat(), text);

            match chain.handle(&message).await? {
                HandlerResponse::Reply(reply) => println!("{}", reply),
                _ => eprintln!("No reply. Try /define <word> or /etymology <word>."),
            }
        }
    }

    Ok(())
}

fn local_user() -> User {
    User {
        id: 0,
        username: std::env::var("USER").ok(),
        first_name: None,
        last_name: None,
    }
}

fn local_chat() -> Chat {
    Chat {
        id: 0,
        chat_type: "private".to_string(),
    }
}
