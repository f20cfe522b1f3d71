use teloxide::utils::command::BotCommands;

/// Command menu published to Telegram's "/" picker
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Market Making Bot Commands:")]
pub enum Command {
    #[command(description = "Show available commands")]
    Start,

    #[command(description = "Get current bot status and configuration")]
    Status,

    #[command(description = "View current position details")]
    Position,

    #[command(description = "List all active orders")]
    Orders,

    #[command(description = "Show this help message")]
    Help,
}
