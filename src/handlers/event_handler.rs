use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::commands::{self, Outgoing, Reply};
use crate::handlers::command_handler::dispatch;
use crate::CommandStatus;

/// Replies go back to the channel the command was typed in.
struct ChannelReply {
    http: Arc<serenity::Http>,
    channel_id: serenity::ChannelId,
}

#[async_trait]
impl Reply for ChannelReply {
    async fn send(&self, message: Outgoing) -> Result<(), crate::Error> {
        match message {
            Outgoing::Text(text) => {
                self.channel_id.say(&self.http, text).await?;
            }
            Outgoing::Card(card) => {
                self.channel_id
                    .send_message(&self.http, serenity::CreateMessage::new().embed(card.to_embed()))
                    .await?;
            }
        }
        Ok(())
    }
}

fn fmt_dur(d: Duration) -> String {
    if d.as_secs() >= 1 {
        format!("{:.3}s", d.as_secs_f64())
    } else {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }
}

pub fn render_ready_banner(bot_name: &str, startup: Duration, statuses: &[CommandStatus]) -> String {
    let mut name_w = "Name".len();
    let mut status_w = "Status".len();
    for s in statuses {
        name_w = name_w.max(s.name.chars().count());
        status_w = status_w.max(s.status.chars().count());
    }

    let title = format!("Bot Ready: {bot_name}");
    let startup_line = format!("Startup time: {}", fmt_dur(startup));
    let loaded_line = format!("Commands loaded: {}", statuses.len());

    let table_width = 2 + name_w + 3 + status_w + 2; // | name | status |
    let header_width = title
        .chars()
        .count()
        .max(startup_line.len())
        .max(table_width)
        .max(30);
    let hline = format!("+{}+", "=".repeat(header_width));
    let sline = format!("+{}+", "-".repeat(header_width));
    let table_hline = format!("+-{}-+-{}-+", "-".repeat(name_w), "-".repeat(status_w));
    let row = |name: &str, status: &str| format!("| {name:<name_w$} | {status:<status_w$} |");

    let mut lines = vec![
        hline.clone(),
        format!("|{title:<header_width$}|"),
        sline.clone(),
        format!("|{startup_line:<header_width$}|"),
        format!("|{loaded_line:<header_width$}|"),
        sline,
        table_hline.clone(),
        row("Name", "Status"),
        table_hline.clone(),
    ];
    if statuses.is_empty() {
        lines.push(row("(no commands)", "-"));
    } else {
        lines.extend(statuses.iter().map(|s| row(&s.name, &s.status)));
    }
    lines.push(table_hline);
    lines.push(hline);
    lines.join("\n")
}

pub async fn handle_event<'a>(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    framework: poise::FrameworkContext<'a, crate::Data, crate::Error>,
    data: &crate::Data,
) -> Result<(), crate::Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot, .. } => {
            let banner = render_ready_banner(
                &data_about_bot.user.name,
                data.started_at.elapsed(),
                &data.command_statuses,
            );
            info!("\n{banner}");
        }
        serenity::FullEvent::Message { new_message } => {
            let Some(command) = dispatch(new_message.author.id == framework.bot_id, &new_message.content) else {
                return Ok(());
            };
            info!(
                author = %new_message.author.name,
                content = %new_message.content,
                "command received"
            );
            let reply = ChannelReply {
                http: ctx.http.clone(),
                channel_id: new_message.channel_id,
            };
            commands::execute(&command, &data.services, &reply).await?;
        }
        _ => {}
    }
    Ok(())
}
