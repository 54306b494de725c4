use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use reqwest::Url;
use serde_json::Value;
use teloxide::payloads::{GetUpdatesSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};
use tracing::debug;

use crate::config::RequestConfig;

/// Long-poll window for get_updates, per Telegram getUpdates semantics.
const POLL_TIMEOUT_SECS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SendMessage,
    GetUpdates,
    SetWebhook,
    DeleteWebhook,
    GetWebhookInfo,
    GetMe,
}

impl Action {
    /// Resolve an action name. Names arrive already lower-cased from
    /// parameter extraction, so matching here is exact.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "send_message" => Some(Self::SendMessage),
            "get_updates" => Some(Self::GetUpdates),
            "set_webhook" => Some(Self::SetWebhook),
            "delete_webhook" => Some(Self::DeleteWebhook),
            "get_webhook_info" => Some(Self::GetWebhookInfo),
            "get_me" => Some(Self::GetMe),
            _ => None,
        }
    }
}

/// Execute the requested action and return the API response as an opaque
/// JSON value. Every failure path maps to a single error string; the caller
/// decides how to surface it.
pub async fn run(cfg: &RequestConfig) -> Result<Value> {
    if cfg.token.is_empty() {
        bail!("token is required");
    }

    let action = Action::parse(&cfg.action).ok_or_else(|| anyhow!("invalid action"))?;
    let bot = build_bot(&cfg.token)?;

    debug!(?action, "dispatching");

    match action {
        Action::SendMessage => {
            if cfg.chat_id == 0 {
                bail!("chat_id is required for send_message");
            }
            if cfg.text.is_empty() {
                bail!("text is required for send_message");
            }

            let mut request = bot.send_message(ChatId(cfg.chat_id), cfg.text.clone());
            if !cfg.parse_mode.is_empty() {
                request = request.parse_mode(resolve_parse_mode(&cfg.parse_mode)?);
            }

            let sent = request.await.context("failed to send message")?;
            encode(sent)
        }
        Action::GetUpdates => {
            let updates = bot
                .get_updates()
                .offset(cfg.offset)
                .timeout(POLL_TIMEOUT_SECS)
                .await
                .context("failed to get updates")?;
            encode(updates)
        }
        Action::SetWebhook => {
            if cfg.webhook_url.is_empty() {
                bail!("webhook_url is required for set_webhook");
            }
            let url = Url::parse(&cfg.webhook_url)
                .context("failed to create webhook config")?;
            let ok = bot.set_webhook(url).await.context("failed to set webhook")?;
            encode(ok)
        }
        Action::DeleteWebhook => {
            let ok = bot
                .delete_webhook()
                .await
                .context("failed to delete webhook")?;
            encode(ok)
        }
        Action::GetWebhookInfo => {
            let info = bot
                .get_webhook_info()
                .await
                .context("failed to get webhook info")?;
            encode(info)
        }
        Action::GetMe => {
            let me = bot.get_me().await.context("failed to get bot info")?;
            encode(me)
        }
    }
}

/// Build a bot with a request timeout that outlasts the long-poll window.
/// teloxide's default client gives up after 17 seconds, which would cut a
/// 60-second getUpdates poll short.
fn build_bot(token: &str) -> Result<Bot> {
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(u64::from(POLL_TIMEOUT_SECS) + 10))
        .build()
        .context("failed to create bot")?;
    Ok(Bot::with_client(token, client))
}

/// Map the caller's parse_mode string onto teloxide's typed enum. The raw
/// Bot API accepts a free-form string; the typed client forces the check
/// to happen here instead of at Telegram's side.
fn resolve_parse_mode(mode: &str) -> Result<ParseMode> {
    match mode.to_ascii_lowercase().as_str() {
        "markdownv2" => Ok(ParseMode::MarkdownV2),
        "markdown" => Ok(ParseMode::Markdown),
        "html" => Ok(ParseMode::Html),
        _ => bail!("unsupported parse_mode: {mode}"),
    }
}

fn encode<T: serde::Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("failed to encode result")
}
