use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::types::ParseMode;
use teloxide::types::Recipient;
use teloxide::utils::command::BotCommands;

use crate::bot_commands::Command;
use crate::commands::InboundMessage;
use crate::error_handling::NotifyError;
use crate::platform::MessagePlatform;
use crate::platform::PlatformConnector;
use crate::platform::PlatformFuture;
use crate::platform::TextMode;
use crate::service::NotificationService;

/// Connects to the Telegram Bot API, verifying the token with `getMe`
#[derive(Debug, Clone, Copy, Default)]
pub struct TelegramConnector;

impl PlatformConnector for TelegramConnector {
    type Platform = TelegramPlatform;

    fn connect<'a>(&'a self, bot_token: &'a str) -> PlatformFuture<'a, TelegramPlatform> {
        Box::pin(async move {
            let bot = Bot::new(bot_token);
            let me = bot.get_me().await.map_err(|err| NotifyError::Handshake(err.to_string()))?;
            tracing::info!("Connected to Telegram as @{}", me.username());
            Ok(TelegramPlatform { bot })
        })
    }
}

/// Telegram client handle owned by the notification service
#[derive(Clone)]
pub struct TelegramPlatform {
    bot: Bot,
}

impl TelegramPlatform {
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

impl MessagePlatform for TelegramPlatform {
    fn send_message<'a>(&'a self, chat_id: &'a str, text: &'a str, mode: TextMode) -> PlatformFuture<'a, ()> {
        Box::pin(async move {
            let mut request = self.bot.send_message(recipient(chat_id), text);
            if let Some(parse_mode) = parse_mode(mode) {
                request = request.parse_mode(parse_mode);
            }
            request.await?;
            Ok(())
        })
    }
}

/// Numeric ids go to that chat, anything else is treated as `@channel`
fn recipient(chat_id: &str) -> Recipient {
    match chat_id.trim().parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.trim().to_string()),
    }
}

fn parse_mode(mode: TextMode) -> Option<ParseMode> {
    match mode {
        TextMode::Html => Some(ParseMode::Html),
        TextMode::MarkdownV2 => Some(ParseMode::MarkdownV2),
        TextMode::Plain => None,
    }
}

fn inbound(msg: &Message) -> Option<InboundMessage> {
    let text = msg.text()?;
    Some(InboundMessage { chat_id: msg.chat.id.0, sender_id: msg.from.as_ref().map(|user| user.id.0), text: text.to_string() })
}

/// "/" menu for the registered command names, in registration order
///
/// Known commands keep their descriptions; duplicates are listed once.
fn command_menu(names: &[&str]) -> Vec<BotCommand> {
    let described = Command::bot_commands();
    let mut menu: Vec<BotCommand> = Vec::new();
    for &name in names {
        if menu.iter().any(|entry| entry.command == name) {
            continue;
        }
        let description = described
            .iter()
            .find(|entry| entry.command.trim_start_matches('/') == name)
            .map(|entry| entry.description.clone())
            .unwrap_or_else(|| format!("Run /{name}"));
        menu.push(BotCommand::new(name, description));
    }
    menu
}

/// Publish the command menu, then long-poll updates and dispatch text messages
///
/// Returns immediately when the service is disabled. Runs until Ctrl+C.
pub async fn run_command_listener(service: Arc<NotificationService<TelegramPlatform>>) {
    let Some(bot) = service.platform().map(|platform| platform.bot().clone()) else {
        tracing::info!("Telegram command listener not started, notifications disabled");
        return;
    };

    // Only advertise what was actually registered on this service
    if let Err(err) = bot.set_my_commands(command_menu(&service.commands())).await {
        tracing::warn!("Failed to publish bot command menu: {err}");
    }

    tracing::info!("Starting Telegram command listener...");

    teloxide::repl(bot, move |msg: Message| {
        let service = service.clone();
        async move {
            if let Some(message) = inbound(&msg) {
                service.dispatch(message).await;
            }
            respond(())
        }
    })
    .await;

    tracing::info!("Telegram command listener stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_numeric_and_channel() {
        assert_eq!(recipient("-1001234"), Recipient::Id(ChatId(-1001234)));
        assert_eq!(recipient(" 42 "), Recipient::Id(ChatId(42)));
        assert_eq!(recipient("@mm_alerts"), Recipient::ChannelUsername("@mm_alerts".to_string()));
    }

    #[test]
    fn test_menu_follows_registered_commands() {
        let menu = command_menu(&["start", "help", "pnl", "help"]);
        let names: Vec<&str> = menu.iter().map(|entry| entry.command.as_str()).collect();

        assert_eq!(names, vec!["start", "help", "pnl"]);
        assert_eq!(menu[1].description, "Show this help message");
        assert_eq!(menu[2].description, "Run /pnl");
        assert!(!names.contains(&"orders"));
    }

    #[test]
    fn test_parse_mode_mapping() {
        assert_eq!(parse_mode(TextMode::Html), Some(ParseMode::Html));
        assert_eq!(parse_mode(TextMode::MarkdownV2), Some(ParseMode::MarkdownV2));
        assert_eq!(parse_mode(TextMode::Plain), None);
    }
}
