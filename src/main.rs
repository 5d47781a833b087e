use poise::serenity_prelude as serenity;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use crate::api::pubg::PubgClient;
use crate::api::rocket_league::RocketLeagueClient;
use crate::commands::Services;
use crate::config::Config;
use crate::data::identity_cache::IdentifierCache;
use crate::data::matches::fetcher::MatchFetcher;
use crate::handlers::command_handler::COMMANDS;

pub struct CommandStatus {
    pub name: String,
    pub status: String,
}

pub struct Data {
    pub started_at: Instant,
    pub command_statuses: Vec<CommandStatus>,
    pub services: Services<PubgClient, RocketLeagueClient>,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;

mod api;
mod commands;
mod config;
mod data;
mod error;
mod handlers;

fn command_statuses(rocket_league_enabled: bool) -> Vec<CommandStatus> {
    COMMANDS
        .iter()
        .map(|c| CommandStatus {
            name: c.prefix.to_string(),
            status: if c.is_rocket_league() && !rocket_league_enabled {
                "Disabled".to_string()
            } else {
                "Ready".to_string()
            },
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let program_started = Instant::now();

    let config = Config::load().await?;
    let pubg = PubgClient::new(&config.pubg_api_key, &config.pubg_base_url, &config.pubg_shard)?;
    let rocket_league = config
        .rl_base_url
        .as_deref()
        .map(|base| RocketLeagueClient::new(base, config.rl_api_key.as_deref()))
        .transpose()?;
    let services = Services {
        pubg: MatchFetcher::new(Arc::new(pubg), Arc::new(IdentifierCache::new()), config.match_failure_policy),
        pubg_shard: config.pubg_shard.clone(),
        rocket_league,
        rl_default_platform: config.rl_default_platform.clone(),
    };

    let intents = serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![],
            event_handler: |ctx, event, framework, data| {
                Box::pin(async move {
                    handlers::event_handler::handle_event(ctx, event, framework, data).await
                })
            },
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| {
            Box::pin(async move {
                Ok(Data {
                    started_at: program_started,
                    command_statuses: command_statuses(services.rocket_league.is_some()),
                    services,
                })
            })
        })
        .build();

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;
    client.start().await?;
    Ok(())
}
